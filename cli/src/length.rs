use clap::Args;
use serde::Serialize;
use stream::{SliceSource, Utf16BytesSource};
use utf8::Policy;
use utfx::Validation;
use utfx::source::Source;

use crate::encoding::{Encoding, Endian, parse_codepoints};
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,

    /// Encoding of the input
    #[arg(long, value_enum)]
    from: Encoding,

    /// Byte order of UTF-16 input
    #[arg(long, value_enum, default_value = "le")]
    byte_order: Endian,

    /// Reject overlong UTF-8, encoded surrogates and values above U+10FFFF
    #[arg(long)]
    strict: bool,

    /// Skip shape checks on the input (e.g. odd-length UTF-16)
    #[arg(long)]
    trust_input: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

/// Length of the input in every representation.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) struct Lengths {
    codepoints: usize,
    utf8_bytes: usize,
    utf16_units: usize,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = read_input(config.file.as_deref())?;
    let policy = if config.strict { Policy::Strict } else { Policy::Permissive };

    let lengths = match config.from {
        Encoding::Utf8 => utf8_lengths(&input, policy)?,
        Encoding::Utf16 => {
            let validation = Validation::from_skip(config.trust_input);
            let order = config.byte_order.into();
            // Each pass consumes its source, so every calculator gets a fresh one.
            let mut units = Utf16BytesSource::new(&input, order, validation)?;
            let utf16_units = count(&mut units);
            let measure = transcode::measure_utf16(&mut Utf16BytesSource::new(&input, order, validation)?)?;
            Lengths {
                codepoints: measure.codepoints,
                utf8_bytes: measure.bytes,
                utf16_units,
            }
        }
        Encoding::Codepoints => {
            let text = std::str::from_utf8(&input)
                .map_err(|e| Error::InvalidInput(format!("codepoint input is not text: {e}")))?;
            codepoint_lengths(&parse_codepoints(text)?)?
        }
    };

    match config.output {
        OutputFormat::Text => {
            println!("codepoints:  {}", lengths.codepoints);
            println!("utf8 bytes:  {}", lengths.utf8_bytes);
            println!("utf16 units: {}", lengths.utf16_units);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&lengths)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&lengths)?;
            print!("{yaml}");
        }
    }

    Ok(())
}

fn count<S: Source>(src: &mut S) -> usize {
    let mut n = 0;
    while src.next_unit().is_some() {
        n += 1;
    }
    n
}

fn utf8_lengths(input: &[u8], policy: Policy) -> Result<Lengths> {
    Ok(Lengths {
        codepoints: transcode::codepoint_count(&mut SliceSource::new(input), policy)?,
        utf8_bytes: input.len(),
        utf16_units: transcode::utf8_length_as_utf16(&mut SliceSource::new(input), policy)?,
    })
}

fn codepoint_lengths(codepoints: &[u32]) -> Result<Lengths> {
    let utf16_units = codepoints
        .iter()
        .map(|&c| utf16::encoded_len(c))
        .sum::<std::result::Result<usize, _>>()?;
    Ok(Lengths {
        codepoints: codepoints.len(),
        utf8_bytes: transcode::codepoints_length_as_utf8(&mut SliceSource::new(codepoints))?,
        utf16_units,
    })
}
