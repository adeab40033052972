//! Input normalization and character-indexed slicing.
//!
//! IBAN offsets count characters, not bytes. Candidate strings come from
//! user input and may contain multi-byte characters, so every substring the
//! engine takes goes through [`char_slice`], which clamps instead of
//! panicking on out-of-range or non-boundary positions.

/// Uppercases `input` and removes all whitespace.
///
/// This is the normalization a caller applies to user-entered text before
/// handing it to [`crate::validate`].
///
/// # Examples
///
/// ```
/// use ibancheck_core::normalize;
///
/// assert_eq!(normalize("gb82 west 1234 5698 7654 32"), "GB82WEST12345698765432");
/// assert_eq!(normalize("\tde89\u{a0}3704\n"), "DE893704");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Number of characters in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The substring of `s` covering characters `offset..offset + len`.
///
/// Positions past the end are clamped, so a short input yields a short (or
/// empty) result rather than a panic.
pub(crate) fn char_slice(s: &str, offset: usize, len: usize) -> &str {
    let mut boundaries = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()));
    let Some(start) = boundaries.nth(offset) else {
        return "";
    };
    let end = match len {
        0 => start,
        n => boundaries.nth(n - 1).unwrap_or(s.len()),
    };
    s.get(start..end).unwrap_or("")
}

/// Everything from character `offset` onwards.
pub(crate) fn char_tail(s: &str, offset: usize) -> &str {
    let start = s
        .char_indices()
        .nth(offset)
        .map_or(s.len(), |(i, _)| i);
    s.get(start..).unwrap_or("")
}
