//! Wordpass - CLI
//!
//! Prints a random passphrase drawn from the `words` file in the current
//! directory, with an entropy estimate on stderr.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordpass::{
    commands::{GenerateConfig, run_generate},
    output::print_fatal_error,
    sampler::OsEntropy,
};

/// Exit status for every fatal error
const FAILURE: u8 = 255;

#[derive(Parser)]
#[command(
    name = "wordpass",
    about = "Generate a passphrase from the wordlist in ./words",
    version,
    author
)]
struct Cli {
    /// Number of words in the passphrase (default: 5)
    #[arg(value_name = "WORDS", allow_negative_numbers = true)]
    word_count: Option<String>,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing sensible left to do if stderr itself is broken
            let _ = print_fatal_error(&mut io::stderr().lock(), &format_args!("{err}"));
            ExitCode::from(FAILURE)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = GenerateConfig::from_arg(cli.word_count.as_deref())?;

    run_generate(
        &config,
        OsEntropy::open,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
