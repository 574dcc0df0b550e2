#![forbid(unsafe_code)]

//! Command-line argument parsing for the showcase.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via the `VENEER_*`
//! prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Veneer Showcase — component catalog

USAGE:
    veneer-showcase [OPTIONS]

OPTIONS:
    --screen=N           Start on screen N, 1-indexed (default: 1)
    --theme=MODE         Color theme: 'auto' (default), 'dark', 'light'
    --exit-after-ms=N    Auto-quit after N milliseconds (for testing)
    --help, -h           Show this help message
    --version, -V        Show version

SCREENS:
    1  Buttons       Button variants, focus and disabled states
    2  Badges        Badge variants
    3  Alerts        Alert severities with wrapped messages
    4  Toasts        Toast notifications, expiry and dismissal
    5  Combobox      Searchable select with toggle-off selection

KEYBINDINGS:
    1-5             Switch screens by number
    Tab / Shift-Tab Cycle through screens
    q / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    VENEER_SCREEN          Override --screen
    VENEER_THEME           Override --theme (dark|light)
    VENEER_EXIT_AFTER_MS   Auto-quit after N milliseconds
    VENEER_LOG             Tracing filter; logs go to veneer-showcase.log";

/// Parsed command-line options.
pub struct Opts {
    /// Starting screen (1-indexed).
    pub start_screen: u16,
    /// Theme selection: "auto", "dark", or "light".
    pub theme: String,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            start_screen: 1,
            theme: "auto".into(),
            exit_after_ms: 0,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("VENEER_SCREEN")
            && let Ok(n) = val.parse()
        {
            opts.start_screen = n;
        }
        if let Ok(val) = env::var("VENEER_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        let args: Vec<String> = env::args().skip(1).collect();
        for arg in &args {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("veneer-showcase {VERSION}");
                    process::exit(0);
                }
                other => {
                    if let Some(val) = other.strip_prefix("--screen=") {
                        match val.parse() {
                            Ok(n) => opts.start_screen = n,
                            Err(_) => {
                                eprintln!("Invalid --screen value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--theme=") {
                        opts.theme = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        match val.parse() {
                            Ok(n) => opts.exit_after_ms = n,
                            Err(_) => {
                                eprintln!("Invalid --exit-after-ms value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}
