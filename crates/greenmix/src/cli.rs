#![forbid(unsafe_code)]

//! Command-line argument parsing for the `greenmix` binary.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `GREENMIX_*` prefix.

use std::env;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
greenmix - renewable generation mix as 100 emoji

USAGE:
    greenmix [OPTIONS] [MEASUREMENT]

ARGS:
    MEASUREMENT          JSON measurement file, '-' or absent for stdin.
                         Either {\"B16\": 867, ...} or
                         [{\"psr_type\": \"B16\", \"quantity\": 867}, ...]

OPTIONS:
    --config=PATH        Category/glyph table (JSON); built-in table if absent
    --line-width=N       Line width in units, 2 per glyph (default: 20)
    --list               Print the configured categories and exit
    --print-config       Print the active config as JSON and exit
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    GREENMIX_CONFIG      Override --config
    GREENMIX_LINE_WIDTH  Override --line-width
    GREENMIX_LOG         Log filter, e.g. 'debug' or 'greenmix_alloc=trace'";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Run(Opts),
    Help,
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opts {
    /// Config file; `None` selects the built-in table.
    pub config: Option<PathBuf>,
    /// Line width override.
    pub line_width: Option<usize>,
    /// Measurement file; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// List categories instead of rendering.
    pub list: bool,
    /// Dump the active config instead of rendering.
    pub print_config: bool,
}

impl Opts {
    /// Parse process arguments and environment.
    pub fn parse() -> Result<Action, String> {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Parse `args` (without the program name) with `env_var` as the
    /// environment lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse_from<I, F>(args: I, env_var: F) -> Result<Action, String>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env_var("GREENMIX_CONFIG")
            && !val.is_empty()
        {
            opts.config = Some(PathBuf::from(val));
        }
        if let Some(val) = env_var("GREENMIX_LINE_WIDTH") {
            opts.line_width = Some(parse_width(&val)?);
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Action::Help),
                "--version" | "-V" => return Ok(Action::Version),
                "--list" => opts.list = true,
                "--print-config" => opts.print_config = true,
                "-" => opts.input = None,
                other => {
                    if let Some(val) = other.strip_prefix("--config=") {
                        opts.config = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--line-width=") {
                        opts.line_width = Some(parse_width(val)?);
                    } else if other.starts_with('-') {
                        return Err(format!("unknown option: {other}"));
                    } else if opts.input.is_some() {
                        return Err(format!("unexpected argument: {other}"));
                    } else {
                        opts.input = Some(PathBuf::from(other));
                    }
                }
            }
        }

        Ok(Action::Run(opts))
    }
}

fn parse_width(val: &str) -> Result<usize, String> {
    val.trim()
        .parse()
        .map_err(|_| format!("invalid line width: {val}"))
}

/// `greenmix <version>` line.
#[must_use]
pub fn version_line() -> String {
    format!("greenmix {VERSION}")
}
