//! Output rendering (raw, JSON, YAML, TOML, INI)

use crate::error::{DotcatError, Result};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

mod ini;

pub use self::ini::render_ini;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Raw,
    Json,
    Yaml,
    Toml,
    Ini,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Raw,
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Toml,
        OutputFormat::Ini,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Raw => "raw",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Toml => "toml",
            OutputFormat::Ini => "ini",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = DotcatError;

    fn from_str(s: &str) -> Result<Self> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DotcatError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `value` in the output format named by `format`.
pub fn format_output(value: &Value, format: &str) -> Result<String> {
    let format: OutputFormat = format.parse()?;
    render(value, format)
}

pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    tracing::debug!("Rendering {} as {}", value.kind(), format);
    match format {
        OutputFormat::Raw => Ok(value.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| DotcatError::serialize("JSON", e))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| DotcatError::serialize("YAML", e))
        }
        OutputFormat::Toml => {
            if value.as_mapping().is_none() {
                return Err(DotcatError::UnsupportedShape("toml"));
            }
            toml::to_string(value).map_err(|e| DotcatError::serialize("TOML", e))
        }
        OutputFormat::Ini => render_ini(value),
    }
}
