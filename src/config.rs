//! Configuration file handling for Codehop
//!
//! Settings live in a single explicit struct that `main` loads once and
//! passes by reference into commands; there is no process-wide settings
//! singleton. The file is YAML, looked up from `--config`, the
//! `CODEHOP_CONFIG` environment variable, or the platform config directory,
//! and every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CodehopError, Result};

/// Environment override for the configuration file location
pub const CONFIG_ENV_VAR: &str = "CODEHOP_CONFIG";

/// User-facing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Editor command to launch workspaces with. When unset, the first of
    /// `code`, `code-insiders`, `codium`, `code-oss` found on PATH is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Command that enumerates installed WSL distributions, one per line in
    /// UTF-16LE output
    pub wsl_list_command: Vec<String>,

    /// Maximum number of history entries retained
    pub max_entries: usize,

    /// Always open workspaces in a new editor window
    pub new_window: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: None,
            wsl_list_command: vec![
                "wsl.exe".to_string(),
                "--list".to_string(),
                "--quiet".to_string(),
            ],
            max_entries: 50,
            new_window: false,
        }
    }
}

impl Settings {
    /// Parse settings from YAML content
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CodehopError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load settings from an explicit path, the `CODEHOP_CONFIG` override,
    /// or the platform config directory. A missing default-location file
    /// yields defaults; a missing explicit path is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CodehopError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content =
            std::fs::read_to_string(&path).map_err(|e| CodehopError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_yaml(&content, &path)
    }

    /// Default configuration file location
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("codehop").join("config.yaml"))
    }
}
