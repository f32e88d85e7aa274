//! WSL distribution enumeration and name correction
//!
//! The enumeration command (`wsl.exe --list --quiet` by default) prints one
//! installed distribution per line, encoded UTF-16 little-endian. A declared
//! distribution name read off a history entry is corrected against that list:
//! exact match, then case-insensitive match, then the host default (first
//! entry) as a best-effort fallback. A failing or empty query degrades to the
//! declared name unchanged; WSL tooling being absent never blocks an open.

use std::process::Command;

use crate::config::Settings;
use crate::error::{CodehopError, Result};

/// Source of the installed-distribution list
pub trait DistroQuery {
    fn installed(&self) -> Result<Vec<String>>;
}

/// Production query: spawns the configured enumeration command
pub struct WslListCommand {
    argv: Vec<String>,
}

impl WslListCommand {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            argv: settings.wsl_list_command.clone(),
        }
    }
}

impl DistroQuery for WslListCommand {
    fn installed(&self) -> Result<Vec<String>> {
        let (program, args) =
            self.argv
                .split_first()
                .ok_or_else(|| CodehopError::DistroQueryFailed {
                    reason: "enumeration command is empty".to_string(),
                })?;

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| CodehopError::DistroQueryFailed {
                reason: format!("{program}: {e}"),
            })?;

        if !output.status.success() {
            return Err(CodehopError::DistroQueryFailed {
                reason: format!("{program} exited with {}", output.status),
            });
        }

        Ok(parse_distro_list(&output.stdout))
    }
}

/// Decode UTF-16LE enumeration output into trimmed, non-empty lines
pub(crate) fn parse_distro_list(stdout: &[u8]) -> Vec<String> {
    decode_utf16le(stdout)
        .lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}' || c == '\0'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn decode_utf16le(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

/// How a declared distribution name matched the host's list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistroMatch {
    /// Declared name is installed exactly as written
    Exact,
    /// Installed under a different casing; the host's casing is returned
    CaseCorrected,
    /// Not installed; the host default (first listed) is returned instead
    DefaultFallback,
    /// List unavailable (query failed or empty); declared name kept as-is
    Unvalidated,
}

/// Corrected distribution name plus how it was obtained.
///
/// The outcome exists so the default-fallback policy stays observable:
/// callers print a note instead of silently opening a different distribution
/// than the one recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroResolution {
    /// Corrected name to launch with
    pub name: String,
    /// Name as declared by the reference, before correction
    pub declared: String,
    pub outcome: DistroMatch,
}

impl DistroResolution {
    /// One-line description of how the name was resolved
    pub fn describe(&self) -> String {
        match self.outcome {
            DistroMatch::Exact => format!("{} (exact match)", self.name),
            DistroMatch::CaseCorrected => {
                format!("{} (case corrected from '{}')", self.name, self.declared)
            }
            DistroMatch::DefaultFallback => format!(
                "{} (host default; '{}' is not installed)",
                self.name, self.declared
            ),
            DistroMatch::Unvalidated => {
                format!("{} (unvalidated; distribution list unavailable)", self.name)
            }
        }
    }
}

/// Correct a declared distribution name against the installed list.
///
/// Sentinel names ("default", "Unknown", "WSL") fail both match steps and
/// land on the host default through the fallback case, which is exactly the
/// intended resolution for them.
pub fn resolve_distribution(declared: &str, query: &dyn DistroQuery) -> DistroResolution {
    let resolution = |name: &str, outcome| DistroResolution {
        name: name.to_string(),
        declared: declared.to_string(),
        outcome,
    };

    let installed = match query.installed() {
        Ok(list) => list,
        Err(_) => return resolution(declared, DistroMatch::Unvalidated),
    };

    if installed.iter().any(|name| name == declared) {
        return resolution(declared, DistroMatch::Exact);
    }

    let declared_lower = declared.to_lowercase();
    if let Some(hit) = installed
        .iter()
        .find(|name| name.to_lowercase() == declared_lower)
    {
        return resolution(hit, DistroMatch::CaseCorrected);
    }

    match installed.first() {
        Some(first) => resolution(first, DistroMatch::DefaultFallback),
        None => resolution(declared, DistroMatch::Unvalidated),
    }
}
