//! Add command implementation

use console::Style;

use crate::cli::AddArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::location::classify;

/// Run add command
pub fn run(settings: &Settings, args: AddArgs) -> Result<()> {
    let mut history = helpers::load_history()?;
    history.touch(&args.reference, args.label, settings.max_entries);
    history.save()?;

    let location = classify(&args.reference);
    println!(
        "Recorded {} ({})",
        Style::new().bold().apply_to(&args.reference),
        location.display_name()
    );

    Ok(())
}
