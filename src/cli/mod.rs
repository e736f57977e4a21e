//! Command-line interface for dotcat
//!
//! `dotcat <FILE> <DOTTED_PATH> [-o FORMAT]` prints one value from a
//! structured data file.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod lookup;

use lookup::exit_code;

/// Read a value from a JSON, YAML, TOML or INI file using a dotted path
#[derive(Parser)]
#[command(name = "dotcat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  dotcat config.json python.editor.tabSize\n  \
                        dotcat Cargo.toml package.version -o json\n  \
                        dotcat data.yaml contributors@0.name")]
pub struct Cli {
    /// Structured data file (.json, .yaml, .yml, .toml, .ini)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Dot-separated path to the value; use `key@N` for list items and
    /// `key@A:B` for slices
    #[arg(value_name = "DOTTED_PATH")]
    pub dotted_path: Option<String>,

    /// Output format (raw, json, yaml, toml, ini) [default: raw]
    #[arg(short, long, value_name = "FORMAT", env = "DOTCAT_OUTPUT")]
    pub output: Option<String>,

    /// List the keys that can follow DOTTED_PATH instead of printing a value
    #[arg(long)]
    pub complete: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// Read defaults from this config file instead of discovering one
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise --verbose picks DEBUG over the WARN default.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "dotcat", &mut io::stdout());
        return Ok(());
    }
    lookup::run(cli)
}
