//! Remove command implementation

use crate::cli::RemoveArgs;
use crate::commands::helpers;
use crate::error::{CodehopError, Result};

/// Run remove command
pub fn run(args: RemoveArgs) -> Result<()> {
    let mut history = helpers::load_history()?;

    let removed = history.remove_matching(&args.query);
    if removed == 0 {
        return Err(CodehopError::EntryNotFound { query: args.query });
    }
    history.save()?;

    let label = if removed == 1 { "entry" } else { "entries" };
    println!("Removed {removed} {label}");

    Ok(())
}
