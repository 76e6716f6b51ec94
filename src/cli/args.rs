//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Terminal arithmetic workbench
#[derive(Parser)]
#[command(
    name = "mathkit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive arithmetic workbench",
    long_about = "Twenty arithmetic and number-theory operations behind an interactive menu or a one-shot eval command.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to a custom mathkit.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default when no command is given)
    #[command(about = "Pick operations from a numbered menu")]
    Menu,

    /// Evaluate a single operation non-interactively
    #[command(
        about = "Run one operation with arguments from the command line",
        after_help = "Examples:\n  mathkit eval gcd 12 18\n  mathkit eval calc 10 / 4\n  mathkit eval fibonacci 5\n  mathkit eval prime 97 --json\n\nSee 'mathkit list' for operation names and their inputs."
    )]
    Eval {
        /// Operation name (see `mathkit list`)
        operation: String,

        /// Operation arguments in prompt order
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        args: Vec<String>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the operation catalog
    #[command(about = "Show every operation with its inputs")]
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    #[command(about = "Create mathkit.toml with default settings")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings as TOML")]
    Config,
}
