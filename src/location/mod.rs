//! Workspace-location resolution
//!
//! This module turns an opaque, historically-recorded workspace reference (a
//! raw filesystem path or an encoded remote URI) back into an openable
//! location:
//!
//! - `classify.rs`: pattern-matches a raw reference into Local / WSL / Remote
//! - `reconstruct.rs`: decodes and normalizes the reference into a canonical
//!   path and a launch URI
//! - `distro.rs`: enumerates installed WSL distributions and corrects a
//!   declared distribution name against them

pub mod classify;
pub mod distro;
pub mod reconstruct;

pub use classify::{LocationKind, ResolvedLocation, classify};
pub use distro::{
    DistroMatch, DistroQuery, DistroResolution, WslListCommand, resolve_distribution,
};
pub use reconstruct::{LaunchTarget, canonical_wsl_path, reconstruct, references_workspace_file};

use percent_encoding::percent_decode_str;

/// Declared distribution when no extraction rule applied
pub const UNKNOWN_DISTRIBUTION: &str = "Unknown";

/// Declared distribution for mounted-drive paths where the actual
/// distribution cannot be read off the reference
pub const GENERIC_WSL_DISTRIBUTION: &str = "WSL";

/// Percent-decode a reference, falling back to the original string when the
/// decoded bytes are not valid UTF-8. Never fails.
pub(crate) fn decode_reference(reference: &str) -> String {
    match percent_decode_str(reference).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => reference.to_string(),
    }
}
