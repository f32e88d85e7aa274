//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codehop - workspace history and re-opener
///
/// Record previously opened editor workspaces (local, WSL, or remote) and hop
/// back into them from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "codehop",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Re-open previously opened editor workspaces",
    long_about = "Codehop records workspace locations you have opened (plain paths, \\\\wsl$ UNC \
                  paths, or vscode-remote:// URIs) and reconstructs correct, openable launch \
                  targets for them, correcting WSL distribution names against the host.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  codehop add '\\\\wsl$\\Ubuntu\\home\\dev\\proj'\n    \
                  codehop list\n    \
                  codehop open proj\n    \
                  codehop resolve 'vscode-remote://ssh-remote+devbox/srv/app'"
)]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-open a recorded workspace
    Open(OpenArgs),

    /// List recorded workspaces
    List(ListArgs),

    /// Record a workspace reference
    Add(AddArgs),

    /// Remove recorded workspaces
    Remove(RemoveArgs),

    /// Resolve a raw reference without opening it
    Resolve(ResolveArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the open command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Open the only match:\n    codehop open proj\n\n\
                  Pick interactively among several matches:\n    codehop open\n\n\
                  Open in a new editor window:\n    codehop open proj --new-window")]
pub struct OpenArgs {
    /// Substring matched against recorded references and labels. Omit to
    /// pick from the whole history.
    pub query: Option<String>,

    /// Open in a new editor window
    #[arg(long, short = 'n')]
    pub new_window: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all recorded workspaces:\n    codehop list\n\n\
                  List only WSL workspaces:\n    codehop list wsl$")]
pub struct ListArgs {
    /// Only show entries matching this substring
    pub query: Option<String>,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Record a local project:\n    codehop add ~/work/project\n\n\
                  Record a WSL workspace with a label:\n    \
                  codehop add '\\\\wsl$\\Ubuntu\\home\\dev\\proj' --label chat")]
pub struct AddArgs {
    /// Workspace reference: a path, a \\wsl$ UNC path, or a remote URI
    pub reference: String,

    /// Label shown in listings instead of the raw reference
    #[arg(long, short = 'l')]
    pub label: Option<String>,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Substring matched against recorded references and labels
    pub query: String,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Dry-run a UNC reference:\n    codehop resolve '\\\\wsl$\\Ubuntu\\home\\dev\\proj'\n\n\
                  Force workspace-file handling:\n    \
                  codehop resolve '\\\\wsl$\\Ubuntu\\home\\dev\\x' --workspace-file")]
pub struct ResolveArgs {
    /// Raw workspace reference to resolve
    pub reference: String,

    /// Treat the reference as a .code-workspace manifest (default: detected
    /// from the extension)
    #[arg(long)]
    pub workspace_file: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
