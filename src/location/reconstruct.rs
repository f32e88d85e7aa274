//! Launch-target reconstruction
//!
//! Takes a classified reference and rebuilds an openable target: a canonical,
//! forward-slash, absolute path for WSL locations and a fully qualified URI
//! (or pass-through reference) to hand the editor.

use super::classify::{LocationKind, ResolvedLocation, WSL_UNC_PREFIX};
use super::distro::{DistroQuery, DistroResolution, resolve_distribution};
use super::{UNKNOWN_DISTRIBUTION, decode_reference};

const WSL_MOUNT_PREFIX: &str = "/mnt/wsl/";
const REMOTE_SCHEME_PREFIX: &str = "vscode-remote://";

/// What to hand the workspace-open primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    /// Remote URI, or a native-style path for local and workspace-file
    /// targets
    pub uri: String,
    pub is_workspace_file: bool,
    /// How the WSL distribution was resolved; `None` for non-WSL targets.
    /// Callers surface non-exact outcomes so the default fallback is never
    /// mistaken for a match.
    pub distribution: Option<DistroResolution>,
}

/// Does the reference point at a `.code-workspace` manifest?
pub fn references_workspace_file(reference: &str) -> bool {
    decode_reference(reference)
        .trim_end()
        .ends_with(".code-workspace")
}

/// Rebuild an openable launch target from a classified reference.
///
/// Only WSL locations hit the distribution query; remote and local
/// reconstruction is pure string work.
pub fn reconstruct(
    reference: &str,
    location: &ResolvedLocation,
    is_workspace_file: bool,
    distros: &dyn DistroQuery,
) -> LaunchTarget {
    match location.kind {
        LocationKind::Wsl => reconstruct_wsl(reference, location, is_workspace_file, distros),
        LocationKind::Remote => LaunchTarget {
            uri: reconstruct_remote(reference),
            is_workspace_file,
            distribution: None,
        },
        LocationKind::Local => LaunchTarget {
            uri: reference.to_string(),
            is_workspace_file,
            distribution: None,
        },
    }
}

fn reconstruct_wsl(
    reference: &str,
    location: &ResolvedLocation,
    is_workspace_file: bool,
    distros: &dyn DistroQuery,
) -> LaunchTarget {
    let decoded = decode_reference(reference);
    let declared = location
        .distribution
        .as_deref()
        .unwrap_or(UNKNOWN_DISTRIBUTION);
    let resolution = resolve_distribution(declared, distros);
    let path = canonical_wsl_path(&decoded);

    // Folder opens go through the remote URI; .code-workspace manifests are
    // handed over as a local-style file reference because remote-URI opens
    // are unreliable for workspace files.
    let uri = if is_workspace_file {
        path
    } else {
        format!("vscode-remote://wsl+{}{}", resolution.name, path)
    };

    LaunchTarget {
        uri,
        is_workspace_file,
        distribution: Some(resolution),
    }
}

/// Normalize a decoded WSL reference into a canonical absolute Unix path.
///
/// Consumes the `vscode-remote://<authority>`, `\\wsl$\<distro>\`, or
/// `/mnt/wsl/<distro>` prefix, flattens any remaining backslashes, and
/// guarantees a leading `/`. Idempotent on an already-canonical path.
pub fn canonical_wsl_path(decoded: &str) -> String {
    let path = if let Some(rest) = decoded.strip_prefix(REMOTE_SCHEME_PREFIX) {
        match rest.find('/') {
            Some(idx) => rest[idx..].to_string(),
            None => String::new(),
        }
    } else if let Some(rest) = decoded.strip_prefix(WSL_UNC_PREFIX) {
        let mut segments = rest.split('\\');
        segments.next(); // distribution segment
        format!("/{}", segments.collect::<Vec<_>>().join("/"))
    } else if let Some(rest) = decoded.strip_prefix(WSL_MOUNT_PREFIX) {
        match rest.find('/') {
            Some(idx) => rest[idx..].to_string(),
            None => String::new(),
        }
    } else if decoded.contains('\\') {
        decoded.replace('\\', "/")
    } else {
        decoded.to_string()
    };

    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

/// Rewrite a remote reference into the scheme the editor launches with.
///
/// References that are not `vscode-remote://` URIs, or whose authority is not
/// recognized, pass through unchanged: the recorded scheme is trusted.
fn reconstruct_remote(reference: &str) -> String {
    let Some(rest) = reference.strip_prefix(REMOTE_SCHEME_PREFIX) else {
        return reference.to_string();
    };

    let (authority, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };
    let authority = decode_reference(authority);

    if let Some(host) = authority.strip_prefix("ssh-remote+") {
        format!("ssh://{host}{path}")
    } else if authority.starts_with("codespaces+") || authority.starts_with("github") {
        format!("codespaces://{authority}{path}")
    } else {
        reference.to_string()
    }
}
