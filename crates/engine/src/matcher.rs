//! Name comparison
//!
//! Ordinal, case-insensitive equality. Each character is folded to its
//! uppercase form when that form is a single character, and kept as is
//! otherwise. Names are compared char by char; no character ever expands
//! into several, and no locale rules are applied.

/// Compare two names ignoring case
///
/// ASCII input takes a byte-wise fast path. Anything else is compared
/// char by char after folding both sides with `fold_char`.
pub fn names_equal_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// Single-character uppercase mapping, identity when the mapping expands
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
