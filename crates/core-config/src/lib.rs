//! Configuration loading and parsing.
//!
//! Parses `macho.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [editor]
//! quit_times = 3
//! message_timeout_ms = 5000
//! ```
//!
//! A missing file or a parse error yields defaults. `quit_times` is clamped
//! to [`MAX_QUIT_TIMES`]; the clamp is logged under the `config` target.
//! Unknown fields are ignored.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "macho.toml";
pub const MAX_QUIT_TIMES: u8 = 10;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_quit_times")]
    pub quit_times: u8,
    #[serde(default = "EditorConfig::default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_times: Self::default_quit_times(),
            message_timeout_ms: Self::default_message_timeout_ms(),
        }
    }
}

impl EditorConfig {
    const fn default_quit_times() -> u8 {
        3
    }
    const fn default_message_timeout_ms() -> u64 {
        5000
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed (or default) data.
    pub file: ConfigFile,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Extra `Ctrl-Q` presses required with unsaved changes.
    pub fn quit_times(&self) -> u8 {
        self.file.editor.quit_times
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.file.editor.message_timeout_ms)
    }

    fn clamp(&mut self) {
        let requested = self.file.editor.quit_times;
        if requested > MAX_QUIT_TIMES {
            self.file.editor.quit_times = MAX_QUIT_TIMES;
            info!(
                target: "config",
                requested,
                effective = MAX_QUIT_TIMES,
                "quit_times_clamped"
            );
        }
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("macho").join(CONFIG_FILE_NAME);
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
            let mut cfg = Config {
                file,
                path: Some(path),
            };
            cfg.clamp();
            info!(
                target: "config",
                quit_times = cfg.quit_times(),
                message_timeout_ms = cfg.file.editor.message_timeout_ms,
                "config_loaded"
            );
            Ok(cfg)
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}
