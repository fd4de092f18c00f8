//! CLI module for coinpage.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and help display
//! - The non-interactive `--print` mode
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use coinpage::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&args.command) {
//!     std::process::exit(code);
//! }
//! // No CLI command, continue to TUI or --print
//! ```

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use print::{print_page, write_snapshot, PrintOutcome};
pub use version::{handle_version_command, VERSION};

/// Run a synchronous CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command needs the runtime (`RunTui`, `Print`)
/// * `Some(code)` - The process exit code for commands handled here
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            handle_version_command();
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("error: {}\n\n{}", reason, USAGE);
            Some(2)
        }
        CliCommand::Print { .. } | CliCommand::RunTui => None,
    }
}
