//! Shared helpers for command implementations

use console::Style;

use crate::error::Result;
use crate::history::HistoryStore;
use crate::location::{DistroMatch, LaunchTarget};

/// Open the history store at its default (or env-overridden) location
pub fn load_history() -> Result<HistoryStore> {
    let path = HistoryStore::default_path()?;
    HistoryStore::load(&path)
}

/// Print how the WSL distribution was resolved.
///
/// Non-exact outcomes are always shown so the best-effort fallback is never
/// mistaken for an exact match; exact matches only show up with --verbose.
pub fn report_distribution(target: &LaunchTarget, verbose: bool) {
    let Some(resolution) = &target.distribution else {
        return;
    };

    match resolution.outcome {
        DistroMatch::Exact => {
            if verbose {
                println!(
                    "  {}",
                    Style::new()
                        .dim()
                        .apply_to(format!("Distribution: {}", resolution.describe()))
                );
            }
        }
        DistroMatch::CaseCorrected | DistroMatch::DefaultFallback | DistroMatch::Unvalidated => {
            println!(
                "  {} {}",
                Style::new().bold().yellow().apply_to("Note:"),
                format!("distribution {}", resolution.describe())
            );
        }
    }
}
