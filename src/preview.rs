//! Preview derivation
//!
//! Turns one cliphist listing line into the short preview shown to the
//! user. The transform mirrors how cliphist formats entries: the first
//! space-separated token is the entry id, everything after it is content.

/// Maximum number of characters kept in a preview
pub const PREVIEW_LEN: usize = 5;

/// Derive the preview for a single listing line
///
/// Blanks the first space-separated token (the entry id), rejoins the
/// rest with single spaces, trims, keeps at most [`PREVIEW_LEN`]
/// characters, and trims again in case the cut landed inside a run of
/// whitespace.
///
/// The split is on single spaces deliberately: consecutive spaces in the
/// content become empty tokens and survive the rejoin, so inner spacing
/// is preserved up to the truncation point.
///
/// # Examples
/// ```
/// use clippeek::preview::derive;
///
/// assert_eq!(derive("1 abcdef ghij"), "abcde");
/// assert_eq!(derive("99 hi"), "hi");
/// assert_eq!(derive(""), "");
/// ```
pub fn derive(line: &str) -> String {
    let content: String = line
        .split(' ')
        .enumerate()
        .map(|(i, token)| if i == 0 { "" } else { token })
        .collect::<Vec<_>>()
        .join(" ");

    let head: String = content.trim().chars().take(PREVIEW_LEN).collect();
    head.trim().to_string()
}
