use std::io::{self, Write};

use clap::Args;
use stream::{SliceSource, Utf16BytesSource};
use utf8::Policy;
use utf16::Codepoints;
use utfx::Validation;
use utfx::source::Source;

use crate::encoding::{Encoding, Endian, Units, format_code_units, format_codepoints, parse_codepoints};
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::{format_hex_dump, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,

    /// Encoding of the input
    #[arg(long, value_enum)]
    from: Encoding,

    /// Encoding of the output
    #[arg(long, value_enum)]
    to: Encoding,

    /// Byte order of UTF-16 input
    #[arg(long, value_enum, default_value = "le")]
    byte_order: Endian,

    /// Reject overlong UTF-8, encoded surrogates and values above U+10FFFF
    #[arg(long)]
    strict: bool,

    /// Skip shape checks on the input (e.g. odd-length UTF-16)
    #[arg(long)]
    trust_input: bool,

    /// Print UTF-8 output as a hexadecimal dump instead of raw bytes (text output with `--to utf8` only)
    #[arg(long)]
    hex: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

impl Config {
    fn policy(&self) -> Policy {
        if self.strict { Policy::Strict } else { Policy::Permissive }
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    if config.hex && (config.to != Encoding::Utf8 || !matches!(config.output, OutputFormat::Text)) {
        return Err(Error::InvalidInput("--hex requires --to utf8 and text output".to_string()));
    }
    let input = read_input(config.file.as_deref())?;
    let units = convert(&input, &config)?;
    tracing::debug!(from = ?config.from, to = ?config.to, "converted input");

    match config.output {
        OutputFormat::Text => match &units {
            Units::Utf8(bytes) if config.hex => print!("{}", format_hex_dump(bytes)),
            Units::Utf8(bytes) => io::stdout().write_all(bytes)?,
            Units::Utf16(units) => println!("{}", format_code_units(units)),
            Units::Codepoints(codepoints) => println!("{}", format_codepoints(codepoints)),
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&units)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&units)?;
            print!("{yaml}");
        }
    }

    Ok(())
}

fn convert(input: &[u8], config: &Config) -> Result<Units> {
    match config.from {
        Encoding::Utf8 => from_utf8(&mut SliceSource::new(input), config.to, config.policy()),
        Encoding::Utf16 => {
            let validation = Validation::from_skip(config.trust_input);
            let mut src = Utf16BytesSource::new(input, config.byte_order.into(), validation)?;
            from_utf16(&mut src, config.to)
        }
        Encoding::Codepoints => {
            let text = std::str::from_utf8(input)
                .map_err(|e| Error::InvalidInput(format!("codepoint input is not text: {e}")))?;
            let codepoints = parse_codepoints(text)?;
            from_codepoints(&mut SliceSource::new(&codepoints), config.to)
        }
    }
}

fn from_utf8<S: Source<Item = u8>>(src: &mut S, to: Encoding, policy: Policy) -> Result<Units> {
    Ok(match to {
        Encoding::Utf8 => {
            let mut out = Vec::new();
            while let Some(codepoint) = utf8::decode(src, policy)? {
                utf8::encode(codepoint, &mut out)?;
            }
            Units::Utf8(out)
        }
        Encoding::Utf16 => {
            let mut out = Vec::new();
            transcode::utf8_to_utf16(src, &mut out, policy)?;
            Units::Utf16(out)
        }
        Encoding::Codepoints => {
            let mut out = Vec::new();
            utf8::decode_stream(src, &mut out, policy)?;
            Units::Codepoints(out)
        }
    })
}

fn from_utf16<S: Source<Item = u16>>(src: &mut S, to: Encoding) -> Result<Units> {
    Ok(match to {
        Encoding::Utf8 => {
            let mut out = Vec::new();
            transcode::utf16_to_utf8(src, &mut out)?;
            Units::Utf8(out)
        }
        Encoding::Utf16 => {
            let mut out = Vec::new();
            utf16::encode_stream(&mut Codepoints::new(src), &mut out)?;
            Units::Utf16(out)
        }
        Encoding::Codepoints => {
            let mut out = Vec::new();
            utf16::decode_stream(src, &mut out);
            Units::Codepoints(out)
        }
    })
}

fn from_codepoints<S: Source<Item = u32>>(src: &mut S, to: Encoding) -> Result<Units> {
    Ok(match to {
        Encoding::Utf8 => {
            let mut out = Vec::new();
            utf8::encode_stream(src, &mut out)?;
            Units::Utf8(out)
        }
        Encoding::Utf16 => {
            let mut out = Vec::new();
            utf16::encode_stream(src, &mut out)?;
            Units::Utf16(out)
        }
        Encoding::Codepoints => {
            let mut out = Vec::new();
            while let Some(codepoint) = src.next_unit() {
                utf8::encoded_len(codepoint)?;
                out.push(codepoint);
            }
            Units::Codepoints(out)
        }
    })
}
