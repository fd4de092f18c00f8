//! Command-line argument parsing for coinpage.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute, along with the flags that override
//! configuration.

use crate::config::AppConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Fetch once and print the given page to stdout
    Print { page: usize },
    /// Run the TUI application (default)
    RunTui,
    /// Arguments could not be understood
    Invalid(String),
}

/// Command plus configuration overrides taken from flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--url <URL>`
    pub url: Option<String>,
    /// `--timeout <SECS>`
    pub timeout_secs: Option<u64>,
}

impl CliArgs {
    /// Apply flag overrides on top of an existing config.
    pub fn apply_to(&self, config: AppConfig) -> AppConfig {
        let mut config = config;
        if let Some(url) = &self.url {
            config = config.with_endpoint(url.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        config
    }
}

/// Usage text printed by `--help` and on invalid arguments.
pub const USAGE: &str = "\
Usage: coinpage [OPTIONS]

Browse cryptocurrency tickers ten at a time.

Options:
  --print            Print one page to stdout instead of starting the TUI
  --page <N>         Page to print with --print (default: 1)
  --url <URL>        Ticker listing endpoint
  --timeout <SECS>   HTTP request timeout in seconds
  -V, --version      Print version
  -h, --help         Print this help

Keys: Right/l/n next page, Left/h/p previous page, q/Esc quit";

/// Parse command-line arguments.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use coinpage::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["coinpage".to_string(), "--print".to_string()];
/// assert_eq!(parse_args(args.into_iter()).command, CliCommand::Print { page: 1 });
/// ```
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs {
        command: CliCommand::RunTui,
        url: None,
        timeout_secs: None,
    };
    let mut print = false;
    let mut page: Option<usize> = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                parsed.command = CliCommand::Version;
                return parsed;
            }
            "--help" | "-h" => {
                parsed.command = CliCommand::Help;
                return parsed;
            }
            "--print" => print = true,
            "--page" => match args.next().map(|v| v.parse::<usize>()) {
                Some(Ok(n)) if n >= 1 => page = Some(n),
                _ => return invalid(parsed, "--page expects a positive number"),
            },
            "--url" => match args.next() {
                Some(url) if !url.is_empty() => parsed.url = Some(url),
                _ => return invalid(parsed, "--url expects a value"),
            },
            "--timeout" => match args.next().map(|v| v.parse::<u64>()) {
                Some(Ok(secs)) if secs > 0 => parsed.timeout_secs = Some(secs),
                _ => return invalid(parsed, "--timeout expects a positive number of seconds"),
            },
            other => return invalid(parsed, &format!("unknown argument: {}", other)),
        }
    }

    if print {
        parsed.command = CliCommand::Print {
            page: page.unwrap_or(1),
        };
    } else if page.is_some() {
        return invalid(parsed, "--page requires --print");
    }

    parsed
}

fn invalid(mut parsed: CliArgs, reason: &str) -> CliArgs {
    parsed.command = CliCommand::Invalid(reason.to_string());
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut all = vec!["coinpage".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse(&[]);
        assert_eq!(parsed.command, CliCommand::RunTui);
        assert!(parsed.url.is_none());
        assert!(parsed.timeout_secs.is_none());
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).command, CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]).command, CliCommand::Help);
        assert_eq!(parse(&["-h"]).command, CliCommand::Help);
    }

    #[test]
    fn test_parse_print_defaults_to_first_page() {
        assert_eq!(parse(&["--print"]).command, CliCommand::Print { page: 1 });
    }

    #[test]
    fn test_parse_print_with_page_in_any_order() {
        assert_eq!(
            parse(&["--print", "--page", "3"]).command,
            CliCommand::Print { page: 3 }
        );
        assert_eq!(
            parse(&["--page", "2", "--print"]).command,
            CliCommand::Print { page: 2 }
        );
    }

    #[test]
    fn test_parse_page_without_print_is_invalid() {
        assert!(matches!(
            parse(&["--page", "2"]).command,
            CliCommand::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_bad_page_values() {
        assert!(matches!(parse(&["--print", "--page", "0"]).command, CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--print", "--page", "x"]).command, CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--print", "--page"]).command, CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_overrides() {
        let parsed = parse(&["--url", "http://localhost:9/t", "--timeout", "4"]);
        assert_eq!(parsed.command, CliCommand::RunTui);
        assert_eq!(parsed.url.as_deref(), Some("http://localhost:9/t"));
        assert_eq!(parsed.timeout_secs, Some(4));
    }

    #[test]
    fn test_parse_unknown_flag() {
        match parse(&["--unknown"]).command {
            CliCommand::Invalid(reason) => assert!(reason.contains("--unknown")),
            other => panic!("expected invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_overrides_to_config() {
        let parsed = parse(&["--url", "http://override/", "--timeout", "9"]);
        let config = parsed.apply_to(AppConfig::default().with_endpoint("http://env/"));
        assert_eq!(config.endpoint, "http://override/");
        assert_eq!(config.timeout_secs, 9);
    }

    #[test]
    fn test_apply_without_overrides_keeps_config() {
        let base = AppConfig::default().with_endpoint("http://env/");
        let config = parse(&[]).apply_to(base.clone());
        assert_eq!(config, base);
    }
}
