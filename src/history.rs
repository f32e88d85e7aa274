//! Workspace history store
//!
//! A flat JSON list of previously opened workspace references, most recent
//! first. Entries are deduplicated on reference, re-touched on every open,
//! and truncated to the configured maximum. The store location follows the
//! platform data directory and can be overridden with `CODEHOP_DATA_DIR`.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{CodehopError, Result};

/// Environment override for the data directory
pub const DATA_DIR_ENV_VAR: &str = "CODEHOP_DATA_DIR";

const HISTORY_FILE: &str = "history.json";

/// One recorded workspace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Raw workspace reference exactly as recorded (path, UNC path, or URI)
    pub reference: String,

    /// Optional user label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Unix timestamp of the most recent open
    pub opened_at: u64,
}

impl HistoryEntry {
    /// Case-insensitive substring match over reference and label
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.reference.to_lowercase().contains(&query)
            || self
                .label
                .as_ref()
                .is_some_and(|label| label.to_lowercase().contains(&query))
    }
}

/// History file handle plus its parsed entries, most recent first
pub struct HistoryStore {
    path: PathBuf,
    pub entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Default history file location
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
            return Ok(PathBuf::from(dir).join(HISTORY_FILE));
        }
        dirs::data_dir()
            .map(|dir| dir.join("codehop").join(HISTORY_FILE))
            .ok_or_else(|| CodehopError::IoError {
                message: "Could not determine a data directory".to_string(),
            })
    }

    /// Load the store; a missing file is an empty history
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                entries: Vec::new(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| CodehopError::HistoryReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let entries =
            serde_json::from_str(&content).map_err(|e| CodehopError::HistoryParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Write the store back to disk, creating parent directories as needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CodehopError::HistoryWriteFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content).map_err(|e| CodehopError::HistoryWriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Record an open of `reference`: dedupe, move to front, truncate.
    ///
    /// A `None` label keeps the label of an existing entry for the same
    /// reference.
    pub fn touch(&mut self, reference: &str, label: Option<String>, max_entries: usize) {
        let mut label = label;
        if let Some(idx) = self.entries.iter().position(|e| e.reference == reference) {
            let existing = self.entries.remove(idx);
            if label.is_none() {
                label = existing.label;
            }
        }

        self.entries.insert(
            0,
            HistoryEntry {
                reference: reference.to_string(),
                label,
                opened_at: unix_now(),
            },
        );
        self.entries.truncate(max_entries);
    }

    /// Entries matching a query; an empty query matches everything
    pub fn find(&self, query: &str) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| query.is_empty() || entry.matches(query))
            .collect()
    }

    /// Remove all entries matching a query, returning how many were dropped
    pub fn remove_matching(&mut self, query: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.matches(query));
        before - self.entries.len()
    }
}

/// Current Unix timestamp in seconds
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Coarse relative age for listings ("just now", "5m ago", "3d ago")
pub fn relative_age(now: u64, opened_at: u64) -> String {
    let delta = now.saturating_sub(opened_at);
    match delta {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m ago", delta / 60),
        3600..=86_399 => format!("{}h ago", delta / 3600),
        86_400..=2_591_999 => format!("{}d ago", delta / 86_400),
        _ => format!("{}mo ago", delta / 2_592_000),
    }
}
