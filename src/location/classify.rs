//! Location classification
//!
//! Pattern-matches a raw workspace reference into Local, WSL, or Remote and
//! extracts the location-specific metadata (WSL distribution, remote
//! authority, drive letter). Pure string work, no I/O.
//!
//! Priority order is WSL > Remote > Local: a reference matching any WSL
//! pattern is never classified Remote, even when it also contains `@`.

use super::{GENERIC_WSL_DISTRIBUTION, UNKNOWN_DISTRIBUTION, decode_reference};

/// UNC prefix Windows uses to expose WSL filesystems
pub(crate) const WSL_UNC_PREFIX: &str = r"\\wsl$\";

const WSL_MOUNT_PREFIX: &str = "/mnt/wsl/";
const REMOTE_SCHEME_PREFIX: &str = "vscode-remote://";

/// Where a workspace reference points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Local,
    Wsl,
    Remote,
}

impl LocationKind {
    /// Short tag for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Wsl => "wsl",
            Self::Remote => "remote",
        }
    }
}

/// Classified workspace reference plus extracted metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub kind: LocationKind,
    /// Declared WSL distribution; `Some` for every WSL reference, possibly a
    /// sentinel ("WSL", "Unknown") when the name cannot be read off the
    /// reference
    pub distribution: Option<String>,
    /// Remote authority for `vscode-remote://` references
    pub authority: Option<String>,
    /// Best-effort drive letter for local references (meaningless for
    /// Unix-style paths but harmless)
    pub drive_letter: Option<char>,
}

impl ResolvedLocation {
    /// Human-readable location name for listings
    pub fn display_name(&self) -> String {
        match self.kind {
            LocationKind::Wsl => match &self.distribution {
                Some(distro) => format!("WSL ({distro})"),
                None => "WSL".to_string(),
            },
            LocationKind::Remote => match &self.authority {
                Some(authority) => format!("Remote ({authority})"),
                None => "Remote".to_string(),
            },
            LocationKind::Local => "Local".to_string(),
        }
    }
}

/// Classify a raw workspace reference.
///
/// First match wins: WSL patterns, then remote patterns, then Local as the
/// default. An empty or unrecognized reference classifies Local with no
/// drive letter; callers treat that as a low-confidence result, not an error.
pub fn classify(reference: &str) -> ResolvedLocation {
    if is_wsl_reference(reference) {
        return ResolvedLocation {
            kind: LocationKind::Wsl,
            distribution: Some(extract_distribution(reference)),
            authority: None,
            drive_letter: None,
        };
    }

    if is_remote_reference(reference) {
        return ResolvedLocation {
            kind: LocationKind::Remote,
            distribution: None,
            authority: extract_authority(reference),
            drive_letter: None,
        };
    }

    ResolvedLocation {
        kind: LocationKind::Local,
        distribution: None,
        authority: None,
        drive_letter: reference.chars().next().map(|c| c.to_ascii_uppercase()),
    }
}

fn is_wsl_reference(reference: &str) -> bool {
    reference.starts_with(WSL_UNC_PREFIX)
        || reference.starts_with(WSL_MOUNT_PREFIX)
        || reference.contains("wsl+")
        // Mounted Windows drives as seen from inside WSL
        || reference.contains("/mnt/c/")
        || reference.contains("/mnt/d/")
}

fn is_remote_reference(reference: &str) -> bool {
    reference.starts_with("ssh://")
        || reference.contains('@')
        || reference.starts_with("github://")
        || reference.contains("ssh-remote")
        || reference.contains("vscode-remote")
        || reference.contains("codespaces")
        || reference.contains("dev-container")
}

/// Extract the declared distribution from a WSL reference.
///
/// `\\wsl$\<segment>\` wins: the segment is percent-decoded and a literal
/// `wsl+` prefix is stripped (history stores record both shapes). Otherwise
/// a `wsl+<name>` marker yields `<name>` up to the next `:` or `/`. Mounted
/// drive paths carry no name and get the "WSL" sentinel; anything else gets
/// "Unknown".
fn extract_distribution(reference: &str) -> String {
    if let Some(rest) = reference.strip_prefix(WSL_UNC_PREFIX) {
        let segment = rest.split('\\').next().unwrap_or(rest);
        let decoded = decode_reference(segment);
        let name = decoded.strip_prefix("wsl+").unwrap_or(&decoded);
        if name.is_empty() {
            return UNKNOWN_DISTRIBUTION.to_string();
        }
        return name.to_string();
    }

    if let Some(pos) = reference.find("wsl+") {
        let name: String = reference[pos + 4..]
            .chars()
            .take_while(|c| *c != ':' && *c != '/')
            .collect();
        if !name.is_empty() {
            return name;
        }
        return UNKNOWN_DISTRIBUTION.to_string();
    }

    if reference.contains("/mnt/") {
        return GENERIC_WSL_DISTRIBUTION.to_string();
    }

    UNKNOWN_DISTRIBUTION.to_string()
}

fn extract_authority(reference: &str) -> Option<String> {
    let rest = reference.strip_prefix(REMOTE_SCHEME_PREFIX)?;
    let authority = match rest.find('/') {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    if authority.is_empty() {
        None
    } else {
        Some(decode_reference(authority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(reference: &str) -> LocationKind {
        classify(reference).kind
    }

    #[test]
    fn test_classify_unc_wsl_path() {
        let location = classify(r"\\wsl$\Ubuntu\home\user\proj");
        assert_eq!(location.kind, LocationKind::Wsl);
        assert_eq!(location.distribution.as_deref(), Some("Ubuntu"));
    }

    #[test]
    fn test_classify_unc_encoded_distribution() {
        // History stores sometimes record the remote authority as the UNC
        // segment, percent-encoded
        let location = classify(r"\\wsl$\wsl%2Bubuntu\root\next-chat");
        assert_eq!(location.kind, LocationKind::Wsl);
        assert_eq!(location.distribution.as_deref(), Some("ubuntu"));
    }

    #[test]
    fn test_classify_remote_uri_with_wsl_authority() {
        let location = classify("vscode-remote://wsl+Debian/home/user/proj");
        assert_eq!(location.kind, LocationKind::Wsl);
        assert_eq!(location.distribution.as_deref(), Some("Debian"));
    }

    #[test]
    fn test_classify_wsl_authority_stops_at_colon() {
        let location = classify("wsl+Alpine:rest");
        assert_eq!(location.distribution.as_deref(), Some("Alpine"));
    }

    #[test]
    fn test_classify_mounted_drive_gets_sentinel() {
        let location = classify("/mnt/c/Users/x/project");
        assert_eq!(location.kind, LocationKind::Wsl);
        assert_eq!(location.distribution.as_deref(), Some("WSL"));
    }

    #[test]
    fn test_classify_wsl_mount_gets_sentinel() {
        // /mnt/wsl/ matches the WSL rules but neither name extractor applies
        let location = classify("/mnt/wsl/Ubuntu/home/user");
        assert_eq!(location.kind, LocationKind::Wsl);
        assert_eq!(location.distribution.as_deref(), Some("WSL"));
    }

    #[test]
    fn test_classify_priority_wsl_over_remote() {
        // Contains both a WSL marker and '@'; WSL wins
        let location = classify("vscode-remote://wsl+Ubuntu/home/user@mail-archive");
        assert_eq!(location.kind, LocationKind::Wsl);
    }

    #[test]
    fn test_classify_ssh_remote() {
        assert_eq!(kind("ssh://host/srv/app"), LocationKind::Remote);
        assert_eq!(
            kind("vscode-remote://ssh-remote+devbox/srv/app"),
            LocationKind::Remote
        );
        assert_eq!(kind("user@host:/srv/app"), LocationKind::Remote);
    }

    #[test]
    fn test_classify_codespaces_remote() {
        assert_eq!(kind("github://org/repo"), LocationKind::Remote);
        let location = classify("vscode-remote://codespaces+fuzzy-spork/workspaces/app");
        assert_eq!(location.kind, LocationKind::Remote);
        assert_eq!(location.authority.as_deref(), Some("codespaces+fuzzy-spork"));
    }

    #[test]
    fn test_classify_local_windows_path() {
        let location = classify(r"c:\Users\dev\project");
        assert_eq!(location.kind, LocationKind::Local);
        assert_eq!(location.drive_letter, Some('C'));
    }

    #[test]
    fn test_classify_local_unix_path() {
        let location = classify("/home/dev/project");
        assert_eq!(location.kind, LocationKind::Local);
        // Best-effort first character; harmless for Unix paths
        assert_eq!(location.drive_letter, Some('/'));
    }

    #[test]
    fn test_classify_empty_reference() {
        let location = classify("");
        assert_eq!(location.kind, LocationKind::Local);
        assert_eq!(location.drive_letter, None);
    }

    #[test]
    fn test_remote_authority_decoded() {
        let location = classify("vscode-remote://ssh-remote%2Bdevbox/srv/app");
        assert_eq!(location.kind, LocationKind::Remote);
        assert_eq!(location.authority.as_deref(), Some("ssh-remote+devbox"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            classify(r"\\wsl$\Ubuntu\home").display_name(),
            "WSL (Ubuntu)"
        );
        assert_eq!(
            classify("vscode-remote://ssh-remote+devbox/srv").display_name(),
            "Remote (ssh-remote+devbox)"
        );
        assert_eq!(classify("/home/dev").display_name(), "Local");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(LocationKind::Local.label(), "local");
        assert_eq!(LocationKind::Wsl.label(), "wsl");
        assert_eq!(LocationKind::Remote.label(), "remote");
    }
}
