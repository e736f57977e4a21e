//! The parse → look up → format pipeline behind the default command.

use anyhow::{Context, Result};
use dotcat::{dotted_path_completions, format_output, from_dotted_path, parse_file};
use dotcat::{DotcatError, Format, OutputFormat};
use std::fmt;
use std::path::{Path, PathBuf};

use super::Cli;
use crate::config::load_config;

/// Pipeline stage, attached to errors as context so the message carries the
/// stage prefix and the exit code can be derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Lookup,
    Format,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Parse => "Error parsing file",
            Stage::Lookup => "Error looking up value",
            Stage::Format => "Error formatting output",
        })
    }
}

/// Missing or inconsistent positional arguments.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(String);

const USAGE: &str = "Usage: dotcat <file> <dotted_path>\n\nExample:\n  dotcat config.json python.editor.tabSize";

pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<UsageError>().is_some() {
        return 2;
    }
    match err.downcast_ref::<Stage>() {
        Some(Stage::Parse) => match err.downcast_ref::<DotcatError>() {
            Some(DotcatError::Io { .. }) => 3,
            _ => 4,
        },
        Some(Stage::Lookup) => 5,
        Some(Stage::Format) => 6,
        None => 1,
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let (file, dotted_path) = positional_args(cli.file, cli.dotted_path, cli.complete)?;

    if cli.complete {
        let document = parse_file(&file).context(Stage::Parse)?;
        for key in dotted_path_completions(&document, &dotted_path) {
            println!("{}", key);
        }
        return Ok(());
    }

    let output = match cli.output {
        Some(output) => output,
        None => {
            let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            load_config(&work_dir, cli.config.as_deref())?
                .output
                .unwrap_or_else(|| OutputFormat::default().to_string())
        }
    };
    tracing::debug!("Looking up '{}' in {} (output: {})", dotted_path, file.display(), output);

    let document = parse_file(&file).context(Stage::Parse)?;
    let value = from_dotted_path(&document, &dotted_path).context(Stage::Lookup)?;
    let rendered = format_output(&value, &output).context(Stage::Format)?;

    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

/// Sort out which of FILE and DOTTED_PATH were given, with a targeted hint
/// when only one of them is present.
fn positional_args(
    file: Option<PathBuf>,
    dotted_path: Option<String>,
    complete: bool,
) -> Result<(PathBuf, String)> {
    match (file, dotted_path) {
        (Some(file), Some(path)) => Ok((file, path)),
        (Some(file), None) if complete => Ok((file, String::new())),
        (Some(file), None) if file.is_file() => Err(UsageError(format!(
            "Dotted-path required. Which value do you want me to look up in {}?\n\n$ dotcat {} <dotted-path>",
            file.display(),
            file.display()
        ))
        .into()),
        (Some(arg), None) if looks_like_dotted_path(&arg) => {
            let arg = arg.display();
            Err(UsageError(format!(
                "File path required. Which file contains the value at {}?\n\n$ dotcat <file> {}",
                arg, arg
            ))
            .into())
        }
        _ => Err(UsageError(USAGE.to_string()).into()),
    }
}

/// A lone argument with dots that is neither an existing path nor a file
/// name with a supported extension.
fn looks_like_dotted_path(arg: &Path) -> bool {
    let Some(text) = arg.to_str() else {
        return false;
    };
    text.contains('.') && !arg.exists() && Format::from_path(arg).is_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn stage_context_sets_prefix_and_exit_code() {
        let err = anyhow::Error::new(DotcatError::KeyNotFound("foo".into())).context(Stage::Lookup);
        assert_eq!(format!("{:#}", err), "Error looking up value: key not found: foo");
        assert_eq!(exit_code(&err), 5);
    }

    #[test]
    fn io_errors_exit_differently_from_parse_errors() {
        let io = anyhow::Error::new(DotcatError::Io {
            path: PathBuf::from("x.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
        .context(Stage::Parse);
        assert_eq!(exit_code(&io), 3);

        let unsupported =
            anyhow::Error::new(DotcatError::UnsupportedFormat(".txt".into())).context(Stage::Parse);
        assert_eq!(exit_code(&unsupported), 4);

        let format =
            anyhow::Error::new(DotcatError::UnsupportedFormat("xml".into())).context(Stage::Format);
        assert_eq!(exit_code(&format), 6);
    }

    #[test]
    fn missing_dotted_path_for_existing_file() {
        let tmp = TempDir::new().expect("tmp");
        let file = tmp.path().join("data.json");
        fs::write(&file, "{}").expect("write");

        let err = positional_args(Some(file), None, false).expect_err("missing path");
        assert!(err.to_string().starts_with("Dotted-path required."));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn lone_dotted_path_asks_for_file() {
        let err = positional_args(Some(PathBuf::from("python.editor.tabSize")), None, false)
            .expect_err("missing file");
        assert!(err.to_string().starts_with("File path required."));
    }

    #[test]
    fn missing_data_file_falls_back_to_usage() {
        let err = positional_args(Some(PathBuf::from("absent.json")), None, false)
            .expect_err("usage");
        assert!(err.to_string().starts_with("Usage: dotcat"));
        let err = positional_args(None, None, false).expect_err("usage");
        assert!(err.to_string().starts_with("Usage: dotcat"));
    }

    #[test]
    fn complete_allows_missing_path() {
        let (file, path) =
            positional_args(Some(PathBuf::from("x.json")), None, true).expect("complete");
        assert_eq!(file, PathBuf::from("x.json"));
        assert_eq!(path, "");
    }
}
