//! CLI module for the declaration dumper
//!
//! ```text
//! as-predefined <SNAPSHOT> [-o FILE] [--profile verbose|condensed]
//!               [--no-param-names] [--no-typedefs] [--check] [--diff]
//! ```
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use crate::dump::FormatProfile;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Dump a scripting runtime's registrations as an `as.predefined` header
#[derive(Parser, Debug)]
#[command(name = "as-predefined")]
#[command(version = VERSION)]
#[command(about = "Dump a scripting runtime's registrations as an as.predefined header", long_about = None)]
pub struct Cli {
    /// JSON registry snapshot to dump
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Write the dump to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Formatting preset
    #[arg(long, value_enum, default_value_t = ProfileArg::Verbose)]
    pub profile: ProfileArg,

    /// Omit parameter names from declarations
    #[arg(long)]
    pub no_param_names: bool,

    /// Omit the typedef section
    #[arg(long)]
    pub no_typedefs: bool,

    /// Check that FILE is up to date without writing it
    #[arg(long, requires = "output")]
    pub check: bool,

    /// Show the diff between FILE and a fresh dump
    #[arg(long, requires = "output")]
    pub diff: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileArg {
    Verbose,
    Condensed,
}

impl Cli {
    /// Formatting profile selected by the preset and overrides
    pub fn format_profile(&self) -> FormatProfile {
        let mut profile = match self.profile {
            ProfileArg::Verbose => FormatProfile::verbose(),
            ProfileArg::Condensed => FormatProfile::condensed(),
        };
        if self.no_param_names {
            profile = profile.with_parameter_names(false);
        }
        if self.no_typedefs {
            profile = profile.with_type_aliases(false);
        }
        profile
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let profile = cli.format_profile();
    tracing::debug!(?profile, snapshot = %cli.snapshot.display(), "dumping");

    let registry = commands::load_snapshot(&cli.snapshot)?;
    match cli.output {
        Some(output) if cli.check || cli.diff => {
            commands::check_output(&registry, &profile, &output, cli.check, cli.diff)
        }
        Some(output) => commands::write_output(&registry, &profile, &output),
        None => commands::print_dump(&registry, &profile),
    }
}

// ============================================================================
// Tests
// ============================================================================
