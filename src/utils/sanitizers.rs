//! String sanitization utilities for directory names

/// Sanitize a remote locator for use as a single directory name
///
/// Replaces path separators and other filesystem-unsafe characters with
/// underscores. Preserves alphanumeric characters, hyphens, underscores, and
/// dots. Unlike most sanitizers the output is not truncated, so two distinct
/// locators sharing a long prefix never map to the same directory.
pub fn sanitize_for_dirname(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            c if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' => c,
            _ => '_',
        })
        .collect()
}
