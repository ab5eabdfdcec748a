//! Configuration loading and parsing.
//!
//! Parses `lined.toml` (or an override path provided by the binary). Every
//! section is optional and unknown fields are ignored so older files keep
//! loading as keys are added. A missing file yields defaults; a file that
//! fails to parse also yields defaults, with a warning logged under the
//! `config` target.
//!
//! ```toml
//! [history]
//! max_depth = 0            # 0 = unbounded
//! capture = "modify-only"  # "modify-only" | "every-edit" | "never"
//!
//! [load]
//! cursor = "last-line"     # "last-line" | "append"
//!
//! [storage]
//! line_ending = "preserve" # "preserve" | "lf" | "crlf"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "lined.toml";

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureSetting {
    #[default]
    ModifyOnly,
    EveryEdit,
    Never,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Snapshots kept per stack; 0 means unbounded.
    #[serde(default)]
    pub max_depth: usize,
    #[serde(default)]
    pub capture: CaptureSetting,
}

impl HistoryConfig {
    pub fn depth_limit(&self) -> Option<usize> {
        (self.max_depth > 0).then_some(self.max_depth)
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoadCursorSetting {
    #[default]
    LastLine,
    Append,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    #[serde(default)]
    pub cursor: LoadCursorSetting,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LineEndingSetting {
    #[default]
    Preserve,
    Lf,
    Crlf,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default)]
    pub line_ending: LineEndingSetting,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub path: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("lined").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(
                target: "config",
                path = %path.display(),
                max_depth = file.history.max_depth,
                capture = ?file.history.capture,
                load_cursor = ?file.load.cursor,
                line_ending = ?file.storage.line_ending,
                "config_loaded"
            );
            Ok(Config {
                raw: Some(content),
                path: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}
