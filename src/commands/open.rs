//! Open command implementation
//!
//! Matches a query against the recorded history, resolves the chosen entry
//! into a launch target, and hands it to the editor. Several matches fall
//! back to an interactive picker.

use console::Style;
use inquire::{InquireError, Select};

use crate::cli::OpenArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::{CodehopError, Result};
use crate::history::HistoryEntry;
use crate::launch::Launcher;
use crate::location::{WslListCommand, classify, reconstruct, references_workspace_file};

/// Run open command
pub fn run(settings: &Settings, args: OpenArgs, verbose: bool) -> Result<()> {
    let mut history = helpers::load_history()?;
    if history.entries.is_empty() {
        return Err(CodehopError::HistoryEmpty);
    }

    let query = args.query.as_deref().unwrap_or("");
    let matches: Vec<HistoryEntry> = history.find(query).into_iter().cloned().collect();

    let entry = match matches.as_slice() {
        [] => {
            return Err(CodehopError::EntryNotFound {
                query: query.to_string(),
            });
        }
        [only] => only.clone(),
        _ => match pick_entry(&matches)? {
            Some(entry) => entry,
            None => return Ok(()), // cancelled
        },
    };

    let location = classify(&entry.reference);
    let is_workspace_file = references_workspace_file(&entry.reference);
    let distros = WslListCommand::from_settings(settings);
    let target = reconstruct(&entry.reference, &location, is_workspace_file, &distros);

    helpers::report_distribution(&target, verbose);

    let launcher = Launcher::new(settings);
    launcher.launch(&target, args.new_window || settings.new_window)?;

    println!(
        "Opened {} ({})",
        Style::new().bold().apply_to(&target.uri),
        location.display_name()
    );

    history.touch(&entry.reference, None, settings.max_entries);
    history.save()?;

    Ok(())
}

/// Interactive picker over several matching entries.
///
/// Esc/Ctrl-C cancels, which is not an error.
fn pick_entry(matches: &[HistoryEntry]) -> Result<Option<HistoryEntry>> {
    let items: Vec<String> = matches.iter().map(picker_line).collect();

    match Select::new("Open which workspace?", items)
        .with_page_size(12)
        .raw_prompt()
    {
        Ok(choice) => Ok(matches.get(choice.index).cloned()),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn picker_line(entry: &HistoryEntry) -> String {
    let location = classify(&entry.reference);
    match &entry.label {
        Some(label) => format!("{} - {} [{}]", label, entry.reference, location.kind.label()),
        None => format!("{} [{}]", entry.reference, location.kind.label()),
    }
}
