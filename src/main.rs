//! funcdoc — print reference docs for the functions annotated in a source file.
//!
//! `funcdoc [-r registry.json] [-f text|markdown|json] [functions.rs]`

use anyhow::{Context, Result};
use clap::Parser;
use funcdoc::{render, Registry};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "funcdoc",
    about = "Generate function reference docs from `// fn Name: ...` annotations"
)]
struct Cli {
    /// Source file to scan
    #[arg(default_value = "functions.rs")]
    source: PathBuf,

    /// JSON registry manifest describing the documented functions.
    /// Defaults to the built-in standard functions.
    #[arg(short = 'r', long)]
    registry: Option<PathBuf>,

    /// Output format: text (default), markdown, json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Level of log output verbosity
    #[arg(short = 'L', long, env = "LOGLEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let registry = match &cli.registry {
        Some(path) => Registry::load_manifest(path)
            .with_context(|| format!("failed to load registry {}", path.display()))?,
        None => Registry::standard(),
    };
    tracing::debug!("registry has {} entries", registry.len());

    // Resolve the renderer before scanning so a bad --format fails fast.
    let renderer = render::create_renderer(&cli.format)?;
    let records = funcdoc::extract(&cli.source, &registry)?;

    match &cli.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            renderer
                .render_to(&records, &mut file)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            renderer
                .render_to(&records, &mut lock)
                .context("failed to write output")?;
            lock.flush().context("failed to write output")?;
        }
    }

    Ok(())
}

/// Log to stderr; stdout carries the documentation.
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level: {}", level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
    Ok(())
}
