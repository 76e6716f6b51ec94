//! Input/output handling for the CLI.
//!
//! This module provides:
//! - Typed prompting for the interactive menu
//! - Consistent exit codes
//! - The JSON envelope behind `--json` output

pub mod envelope;
pub mod exit_code;
pub mod input;

pub use envelope::{Envelope, Status};
pub use exit_code::ExitCode;
pub use input::{Prompted, Prompter};
