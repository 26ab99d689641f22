use anyhow::{Context, Result};
use clap::Parser;
use rover_sim::{Bounds, Interpreter, RoverConfig, write_farewell};
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Drive a rover around a rectangular table from stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML file with `prompt` and a `[bounds]` table.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the table's maximum X coordinate.
    #[arg(long, allow_negative_numbers = true)]
    max_x: Option<i32>,
    /// Override the table's maximum Y coordinate.
    #[arg(long, allow_negative_numbers = true)]
    max_y: Option<i32>,
    /// Do not print a prompt before each line.
    #[arg(short, long)]
    quiet: bool,
    /// Log rover activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<RoverConfig> {
    let mut config = match &cli.config {
        Some(path) => RoverConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RoverConfig::default(),
    };

    if cli.max_x.is_some() || cli.max_y.is_some() {
        let min = config.bounds.min();
        let max = config.bounds.max();
        config.bounds = Bounds::new(
            min.x,
            min.y,
            cli.max_x.unwrap_or(max.x),
            cli.max_y.unwrap_or(max.y),
        )
        .context("invalid table bounds")?;
    }
    if cli.quiet {
        config.prompt = false;
    }
    Ok(config)
}

/// Ctrl-C ends the session the same way end of input does.
fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        if let Err(error) = write_farewell(io::stdout()) {
            warn!(%error, "failed to write farewell after interrupt");
        }
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    install_interrupt_handler()?;

    // stdout stays unlocked between writes so the interrupt handler can print.
    Interpreter::new(config)
        .run(io::stdin().lock(), io::stdout())
        .context("failed to write session output")
}
