//! Workspace-open collaborator
//!
//! Builds and runs the editor invocation for a reconstructed launch target.
//! Remote-style URIs go through `--folder-uri`; `file://` references and
//! plain paths are handed over positionally as native paths. This is the one
//! place where failure is surfaced to the user.

use std::process::Command;

use url::Url;

use crate::config::Settings;
use crate::error::{CodehopError, Result};
use crate::location::LaunchTarget;

/// Editor binaries probed on PATH, in preference order
const EDITOR_CANDIDATES: &[&str] = &["code", "code-insiders", "codium", "code-oss"];

/// Editor invocation builder
pub struct Launcher<'a> {
    settings: &'a Settings,
}

impl<'a> Launcher<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Editor command from settings, or the first candidate found on PATH
    pub fn editor_command(&self) -> Result<String> {
        if let Some(editor) = &self.settings.editor {
            return Ok(editor.clone());
        }
        EDITOR_CANDIDATES
            .iter()
            .find(|candidate| which::which(candidate).is_ok())
            .map(|candidate| (*candidate).to_string())
            .ok_or(CodehopError::EditorNotFound)
    }

    /// Open a launch target with the editor
    pub fn launch(&self, target: &LaunchTarget, new_window: bool) -> Result<()> {
        let editor = self.editor_command()?;

        let mut args = Vec::new();
        if new_window {
            args.push("--new-window".to_string());
        }
        args.extend(launch_args(&target.uri));

        let output = Command::new(&editor).args(&args).output().map_err(|e| {
            CodehopError::LaunchFailed {
                editor: editor.clone(),
                uri: target.uri.clone(),
                reason: e.to_string(),
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(CodehopError::LaunchFailed {
                editor,
                uri: target.uri.clone(),
                reason,
            });
        }

        Ok(())
    }
}

/// Argument tail for a launch target URI.
///
/// `file://` references become native paths; other schemes go through
/// `--folder-uri`; bare paths are canonicalized best-effort (dunce keeps
/// Windows paths out of the `\\?\` form) and passed positionally.
pub(crate) fn launch_args(uri: &str) -> Vec<String> {
    if uri.starts_with("file://") {
        return match Url::parse(uri).ok().and_then(|url| url.to_file_path().ok()) {
            Some(path) => vec![path.display().to_string()],
            None => vec![uri.to_string()],
        };
    }

    if uri.contains("://") {
        return vec!["--folder-uri".to_string(), uri.to_string()];
    }

    let path = dunce::canonicalize(uri)
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| uri.to_string());
    vec![path]
}
