//! Locale-aware string ordering for textual sort columns.
//!
//! Raw code-point ordering puts "Zucchini" before "apple" and "Éclair" after
//! "Zest". Users expect dictionary order, so strings are compared in three
//! levels, the way root-locale collation does:
//!
//! 1. base letters, ignoring case and diacritics
//! 2. diacritics (unaccented before accented)
//! 3. case (lowercase before uppercase)
//!
//! A final code-point comparison keeps the order total.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings in dictionary order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Base letters: decomposed, marks dropped, lowercased.
fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Decomposed and lowercased, marks kept.
fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Per-letter case weight: lowercase sorts first.
fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
