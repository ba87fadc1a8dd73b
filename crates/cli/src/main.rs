mod cli;
mod config;

use clap::Parser;
use clap::error::ErrorKind;
use eyre::Result;
use mathpanel_convert::{Document, convert_document, fs};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Usage goes to stderr; nothing more to report if that fails.
                err.print().ok();
                std::process::exit(1);
            }
        },
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli)?;

    println!("Reading HTML from: {}", cli.input.display());
    let html = fs::read_input(&cli.input)?;

    println!("Parsing HTML...");
    let document = Document::parse(&html);

    println!("Converting to LaTeX...");
    let conversion = convert_document(&document, &config)?;
    for warning in &conversion.warnings {
        tracing::warn!("{}", warning);
    }

    println!("Writing LaTeX to: {}", cli.output.display());
    fs::write_output(&cli.output, &conversion.latex)?;

    println!("Conversion complete.");
    Ok(())
}
