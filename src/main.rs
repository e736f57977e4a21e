//! dotcat: read values from structured data files using dotted paths
//!
//! Parses a JSON, YAML, TOML or INI file, walks a dot-separated path such as
//! `dependencies.go` or `contributors@0.name`, and prints the value found in
//! the requested output format.

use std::process::ExitCode;

mod cli;
mod config;

fn main() -> ExitCode {
    cli::run()
}
