use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::HighlightMode;

/// Environment variable that overrides the configured highlight mode.
pub const HIGHLIGHT_MODE_ENV: &str = "REFDUP_HIGHLIGHT_MODE";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub highlight: Option<HighlightConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    pub mode: Option<HighlightMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
    pub color: Option<bool>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid {var}: {message}")]
    InvalidEnv { var: &'static str, message: String },
}

impl ConfigFile {
    pub fn highlight_mode(&self) -> Option<HighlightMode> {
        self.highlight.as_ref().and_then(|h| h.mode)
    }

    pub fn theme(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn color(&self) -> Option<bool> {
        self.display.as_ref().and_then(|d| d.color)
    }

    /// Resolve the highlight mode: CLI flag > `REFDUP_HIGHLIGHT_MODE` >
    /// config file > default.
    pub fn resolve_highlight_mode(
        &self,
        flag: Option<HighlightMode>,
    ) -> Result<HighlightMode, ConfigError> {
        let env = std::env::var(HIGHLIGHT_MODE_ENV).ok();
        self.resolve_highlight_mode_from(flag, env.as_deref())
    }

    /// Like [`ConfigFile::resolve_highlight_mode`], with the environment
    /// value passed in.
    pub fn resolve_highlight_mode_from(
        &self,
        flag: Option<HighlightMode>,
        env: Option<&str>,
    ) -> Result<HighlightMode, ConfigError> {
        if let Some(mode) = flag {
            return Ok(mode);
        }
        if let Some(value) = env {
            return value.parse::<HighlightMode>().map_err(|message| ConfigError::InvalidEnv {
                var: HIGHLIGHT_MODE_ENV,
                message,
            });
        }
        Ok(self.highlight_mode().unwrap_or_default())
    }
}

/// Platform config directory path: `<config_dir>/refdup/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("refdup").join("config.toml"))
}

/// Load config by cascading CWD `.refdup.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".refdup.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed; parse failures are logged.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        highlight: Some(HighlightConfig {
            mode: overlay.highlight_mode().or_else(|| base.highlight_mode()),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
            color: overlay.color().or_else(|| base.color()),
        }),
    }
}

/// Save the config to the platform config directory.
pub fn save_config(config: &ConfigFile) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(&path, config)?;
    Ok(path)
}

/// Save the config to `path`, creating parent directories as needed.
pub fn save_config_to(path: &Path, config: &ConfigFile) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved config");
    Ok(())
}
