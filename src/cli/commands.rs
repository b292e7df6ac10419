//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;
use std::path::Path;

use as_reflect::Registry;

use crate::dump::{FormatProfile, dump, text_diff};

use super::{CliError, CliResult, ExitCode};

/// Maximum snapshot file size (100 MB)
///
/// Larger files are rejected before they are read into memory.
const MAX_SNAPSHOT_SIZE: u64 = 100 * 1024 * 1024;

/// Read a snapshot file and load it into a registry.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SNAPSHOT_SIZE` (100 MB)
/// - The JSON is malformed or a registration is rejected
pub fn load_snapshot(path: &Path) -> CliResult<Registry> {
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SNAPSHOT_SIZE {
        return Err(CliError::failure(format!(
            "Snapshot '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SNAPSHOT_SIZE
        )));
    }

    let json = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))?;

    Registry::from_json(&json).map_err(|e| {
        let report = miette::Report::new(e);
        CliError::failure(format!("Error loading '{}':\n{:?}", path.display(), report))
    })
}

/// Print the dump to stdout.
pub fn print_dump(registry: &Registry, profile: &FormatProfile) -> CliResult<ExitCode> {
    print!("{}", dump(registry, profile));
    Ok(ExitCode::SUCCESS)
}

/// Write the dump to `output`, leaving the file untouched when it is already current.
pub fn write_output(registry: &Registry, profile: &FormatProfile, output: &Path) -> CliResult<ExitCode> {
    let existing = read_existing(output)?;
    let fresh = dump(registry, profile);
    if fresh == existing {
        tracing::info!(path = %output.display(), "already up to date");
        return Ok(ExitCode::SUCCESS);
    }

    fs::write(output, fresh)
        .map_err(|e| CliError::failure(format!("Error writing {}: {}", output.display(), e)))?;
    tracing::info!(path = %output.display(), "wrote declarations");
    Ok(ExitCode::SUCCESS)
}

/// Compare `output` against a fresh dump without writing it.
///
/// Stale files fail the command so it can gate CI.
pub fn check_output(
    registry: &Registry,
    profile: &FormatProfile,
    output: &Path,
    check_mode: bool,
    diff_mode: bool,
) -> CliResult<ExitCode> {
    let existing = read_existing(output)?;
    let Some(diff) = text_diff(&existing, &dump(registry, profile)) else {
        println!("✓ {} is up to date", output.display());
        return Ok(ExitCode::SUCCESS);
    };

    if diff_mode {
        println!("--- {}", output.display());
        print!("{}", diff);
        println!();
    }

    if check_mode {
        println!("Would regenerate: {}", output.display());
    }
    Err(CliError::failure(format!("\n{} is out of date", output.display())))
}

/// Read the current contents of `path`; a missing file reads as empty.
fn read_existing(path: &Path) -> CliResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(CliError::failure(format!("Error reading {}: {}", path.display(), e))),
    }
}
