//! Whitespace and case normalization.
//!
//! Every text comparison in the matcher goes through [`normalize`] first, so
//! two reports that differ only in casing or spacing compare as equal.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{collapse_whitespace, normalize};
//!
//! assert_eq!(collapse_whitespace("  black \t wallet \n"), "black wallet");
//! assert_eq!(normalize("  Black   WALLET "), "black wallet");
//! ```

/// Collapses repeated whitespace, trims edges, and turns newlines and tabs
/// into single spaces.
///
/// All Unicode whitespace counts as a delimiter, including the non-breaking
/// space that copy-pasted form input tends to carry.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("hello\r\n\r\nworld"), "hello world");
/// assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Lower-case, collapse whitespace runs to one space, and trim.
///
/// Empty or whitespace-only input normalizes to the empty string. Lowercasing
/// is locale-free (`str::to_lowercase`), so scripts without case such as Thai
/// pass through untouched.
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize(" iPhone  13 "), "iphone 13");
/// assert_eq!(normalize("กุญแจ  รถ"), "กุญแจ รถ");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    collapse_whitespace(&text.to_lowercase())
}

/// [`normalize`] over an optional field; `None` becomes the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
