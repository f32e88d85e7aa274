//! List command implementation
//!
//! Lists recorded workspaces with their classified location, metadata, and
//! relative recency. Classification is pure string work, so listing never
//! touches the WSL enumeration command.

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers;
use crate::error::{CodehopError, Result};
use crate::history::{HistoryEntry, relative_age, unix_now};
use crate::location::{LocationKind, classify};

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let history = helpers::load_history()?;

    if history.entries.is_empty() {
        println!("No workspaces recorded.");
        return Ok(());
    }

    let query = args.query.as_deref().unwrap_or("");
    let matches = history.find(query);
    if matches.is_empty() {
        return Err(CodehopError::EntryNotFound {
            query: query.to_string(),
        });
    }

    let now = unix_now();
    println!("Recorded workspaces ({}):", matches.len());
    println!();
    for entry in matches {
        display_entry(entry, now);
    }

    Ok(())
}

fn kind_style(kind: LocationKind) -> Style {
    match kind {
        LocationKind::Local => Style::new().green(),
        LocationKind::Wsl => Style::new().yellow(),
        LocationKind::Remote => Style::new().cyan(),
    }
}

fn display_entry(entry: &HistoryEntry, now: u64) {
    let location = classify(&entry.reference);
    let tag = format!("[{}]", location.kind.label());
    let shown = entry.label.as_deref().unwrap_or(&entry.reference);

    println!(
        "  {} {} {}",
        kind_style(location.kind).apply_to(tag),
        Style::new().bold().apply_to(shown),
        Style::new().dim().apply_to(relative_age(now, entry.opened_at))
    );

    // The raw reference still matters when a label hides it
    if entry.label.is_some() {
        println!("      {}", Style::new().dim().apply_to(&entry.reference));
    }

    if let Some(distribution) = &location.distribution {
        println!(
            "      {} {}",
            Style::new().bold().apply_to("Distribution:"),
            distribution
        );
    }
    if let Some(authority) = &location.authority {
        println!(
            "      {} {}",
            Style::new().bold().apply_to("Authority:"),
            authority
        );
    }
}
