//! Config file loading

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output format name when neither `--output` nor
    /// `DOTCAT_OUTPUT` is given.
    pub output: Option<String>,
}

/// Load the config file named on the command line, or the first one found
/// by discovery.
///
/// An explicit file must exist and parse. A discovered file that fails to
/// parse is reported with a warning and ignored.
pub fn load_config(work_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let explicit = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(work_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };
    tracing::debug!("Loading config from {}", config_file.display());

    match read_config(&config_file) {
        Ok(cfg) => Ok(cfg),
        Err(e) if !explicit => {
            tracing::warn!("Ignoring config {}: {:#}", config_file.display(), e);
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn read_config(config_file: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML config: {}", config_file.display())),
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML config: {}", config_file.display())),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

fn discover_config(work_dir: &Path) -> Option<PathBuf> {
    let local = [".dotcat.toml", ".dotcat.yaml", ".dotcat.yml"]
        .into_iter()
        .map(|candidate| work_dir.join(candidate));
    let user = config_root_dir().map(|dir| dir.join("dotcat").join("config.toml"));

    local.chain(user).find(|path| path.is_file())
}

pub fn config_root_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg));
        }
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    }
}
