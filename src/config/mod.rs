//! Configuration loading
//!
//! Precedence for the output format: CLI flag > `DOTCAT_OUTPUT` > config
//! file > built-in default (`raw`).

pub mod loader;

pub use loader::load_config;
