//! Label truncation for chart axes and legends.

use std::borrow::Cow;

/// Character appended to truncated labels.
pub const ELLIPSIS: char = '\u{2026}';

/// Limit applied by [`truncate_default`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 80;

/// Truncates `value` to at most `truncate` characters plus an ellipsis.
///
/// `None` or `Some(0)` leaves the value untouched. Lengths are counted in
/// characters, so multi-byte labels are never split inside a character.
///
/// # Example
///
/// ```
/// use chartkit_core::truncation_formatter;
///
/// assert_eq!(truncation_formatter("transaction.duration", Some(11)), "transaction…");
/// assert_eq!(truncation_formatter("p95", Some(11)), "p95");
/// assert_eq!(truncation_formatter("p95", None), "p95");
/// ```
pub fn truncation_formatter(value: &str, truncate: Option<usize>) -> Cow<'_, str> {
    let limit = match truncate {
        None | Some(0) => return Cow::Borrowed(value),
        Some(n) => n,
    };

    match value.char_indices().nth(limit) {
        None => Cow::Borrowed(value),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len_utf8());
            out.push_str(&value[..cut]);
            out.push(ELLIPSIS);
            Cow::Owned(out)
        }
    }
}

/// Truncates `value` to [`DEFAULT_TRUNCATE_LENGTH`] characters.
pub fn truncate_default(value: &str) -> Cow<'_, str> {
    truncation_formatter(value, Some(DEFAULT_TRUNCATE_LENGTH))
}
