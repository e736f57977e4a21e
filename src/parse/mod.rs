//! Input parsing: file extension detection and per-format decoding into
//! [`Value`].

use crate::error::{DotcatError, Result};
use crate::value::Value;
use std::fmt;
use std::fs;
use std::path::Path;

mod ini;

/// Structured input format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
    Ini,
}

impl Format {
    /// Match an extension (with or without the leading dot), ignoring case.
    pub fn from_extension(ext: &str) -> Result<Self> {
        let normalized = ext.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            "ini" => Ok(Format::Ini),
            _ => Err(DotcatError::UnsupportedFormat(format!(".{}", normalized))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
            Format::Ini => "INI",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read `path` and decode it according to its extension.
///
/// The extension is checked before the file is opened, so an unsupported
/// file type is reported even when the file does not exist.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;

    let content = fs::read_to_string(path)
        .map_err(|source| DotcatError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!("Read {} bytes from {} as {}", content.len(), path.display(), format);

    parse_str(&content, format)
}

/// Decode in-memory text in the given format.
pub fn parse_str(content: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => serde_json::from_str(content).map_err(|e| DotcatError::parse("JSON", e)),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| DotcatError::parse("YAML", e)),
        Format::Toml => toml::from_str(content).map_err(|e| DotcatError::parse("TOML", e)),
        Format::Ini => self::ini::parse_ini(content),
    }
}
