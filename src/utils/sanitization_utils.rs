//! Name normalization for printer and group identities, and anchor tokens
//! for the rendered report.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything up to and including the last backslash that has at least
    /// one character in front of it, e.g. the `CONTOSO\` in `CONTOSO\Finance`.
    static ref GROUP_PREFIX: Regex = Regex::new(r".+\\").expect("Invalid regex for group prefix");
}

/// Maps a display name to an anchor token by dropping every character that is
/// not an ASCII letter, digit or underscore.
///
/// Distinct names can collapse to the same token (`"A.B"` and `"AB"`).
pub fn sanitize_anchor(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Identity key of a printer: the upper-cased display name.
pub fn printer_key(name: &str) -> String {
    name.to_uppercase()
}

/// Identity key of a group: the display name with any `DOMAIN\` style prefix removed.
pub fn group_key(name: &str) -> String {
    GROUP_PREFIX.replace_all(name, "").into_owned()
}
