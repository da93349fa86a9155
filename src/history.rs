//! Reading the cliphist listing
//!
//! Runs `cliphist list` synchronously and selects the most recent entry.
//! cliphist prints one entry per line, most-recent-first, with a leading
//! numeric id token on each line.

use std::process::{Command, Stdio};

use crate::error::PeekError;

/// Name of the external clipboard history binary
pub const HISTORY_COMMAND: &str = "cliphist";

/// Run `cliphist list` and capture its stdout as text
///
/// stderr is inherited so cliphist's own diagnostics reach the user
/// unmodified. A non-zero exit status becomes `PeekError::ListFailed`
/// carrying the status for the caller to propagate.
pub fn capture_listing() -> Result<String, PeekError> {
    let output = Command::new(HISTORY_COMMAND)
        .arg("list")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()?;

    #[cfg(debug_assertions)]
    log::debug!(
        "cliphist list exited with {}, {} stdout bytes",
        output.status,
        output.stdout.len()
    );

    if !output.status.success() {
        return Err(PeekError::ListFailed(output.status));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Most recent entry of a listing: its first `\n`-separated line
///
/// Empty listing output yields an empty entry.
pub fn latest_entry(listing: &str) -> &str {
    listing.split('\n').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_entry_picks_first_line() {
        let listing = "3 most recent\n2 older\n1 oldest\n";
        assert_eq!(latest_entry(listing), "3 most recent");
    }

    #[test]
    fn test_latest_entry_single_line_without_newline() {
        assert_eq!(latest_entry("7 only one"), "7 only one");
    }

    #[test]
    fn test_latest_entry_empty_listing() {
        assert_eq!(latest_entry(""), "");
    }

    #[test]
    fn test_latest_entry_leading_blank_line() {
        // A blank first line stays blank; later entries are never consulted
        assert_eq!(latest_entry("\n2 older"), "");
    }
}
