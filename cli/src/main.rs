use clap::{Parser, Subcommand};

mod convert;
mod encoding;
mod error;
mod length;
mod output;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "utfx")]
#[command(about = "UTF-8 / UTF-16 / codepoint transcoder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert input from one representation to another
    Convert {
        #[command(flatten)]
        config: convert::Config,
    },
    /// Report the length of the input in codepoints, UTF-8 bytes and UTF-16 units
    Length {
        #[command(flatten)]
        config: length::Config,
    },
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
///
/// Enable with e.g. `RUST_LOG=utf8=debug` or `RUST_LOG=stream=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { config } => convert::execute(config)?,
        Commands::Length { config } => length::execute(config)?,
    }

    Ok(())
}
