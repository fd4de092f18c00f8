//! Version command for coinpage.

/// The current version of coinpage, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line printed by `--version`.
pub fn version_line() -> String {
    format!("coinpage {}", VERSION)
}

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}
