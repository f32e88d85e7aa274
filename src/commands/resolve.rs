//! Resolve command implementation
//!
//! Dry-runs the resolver on a raw reference: classification, distribution
//! correction, and the final launch target are printed without opening
//! anything. Useful to inspect what an `open` would do with a suspect
//! history entry.

use console::Style;

use crate::cli::ResolveArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::location::{WslListCommand, classify, reconstruct, references_workspace_file};

/// Run resolve command
pub fn run(settings: &Settings, args: ResolveArgs) -> Result<()> {
    let location = classify(&args.reference);
    let is_workspace_file = args.workspace_file || references_workspace_file(&args.reference);

    let distros = WslListCommand::from_settings(settings);
    let target = reconstruct(&args.reference, &location, is_workspace_file, &distros);

    let bold = Style::new().bold();
    println!("  {} {}", bold.apply_to("Kind:"), location.kind.label());
    println!("  {} {}", bold.apply_to("Location:"), location.display_name());
    if let Some(drive) = location.drive_letter {
        println!("  {} {}", bold.apply_to("Drive:"), drive);
    }
    if let Some(resolution) = &target.distribution {
        println!(
            "  {} {}",
            bold.apply_to("Distribution:"),
            resolution.describe()
        );
    }
    println!("  {} {}", bold.apply_to("Target:"), target.uri);
    println!(
        "  {} {}",
        bold.apply_to("Workspace file:"),
        if target.is_workspace_file { "yes" } else { "no" }
    );

    Ok(())
}
