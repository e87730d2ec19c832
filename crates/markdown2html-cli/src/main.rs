//! Command-line interface for markdown2html
//!
//! Usage:
//!   markdown2html `<input.md>` `<output.html>` [--config `<path>`]

use anyhow::{Context, Result};
use clap::{Parser, error::ErrorKind};
use markdown2html_config::Config;
use markdown2html_engine::{Converter, io};
use std::path::PathBuf;
use std::process;

const USAGE: &str = "Usage: ./markdown2html README.md README.html";

#[derive(Debug, Parser)]
#[command(name = "markdown2html", version, about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Markdown file to read
    input: PathBuf,
    /// HTML file to write (replaced if it exists)
    output: PathBuf,
    /// Configuration file (default: ~/.config/markdown2html/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
    /// Anything after OUTPUT is accepted and ignored
    #[arg(hide = true)]
    extra: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            log::debug!("Argument error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if !cli.input.exists() {
        eprintln!("Missing {}", cli.input.display());
        process::exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.extra.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", cli.extra);
    }

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    log::debug!("Render options: {:?}", config.render);

    let converter = Converter::new(config.render);
    log::info!(
        "Converting {} to {}",
        cli.input.display(),
        cli.output.display()
    );
    io::convert_file(&converter, &cli.input, &cli.output)?;
    log::info!("Done");
    Ok(())
}
