//! Locale-aware string ordering for display lists.
//!
//! Approximates root-locale collation in three levels, then falls back to the
//! decomposed code points so only canonically equal strings tie:
//!
//! 1. base letters (accents and case ignored)
//! 2. accents (unaccented first)
//! 3. case (lowercase first)

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.nfd().cmp(b.nfd()))
}

/// Sorts in place by a string key using [`locale_cmp`].
pub fn sort_by_key_str<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| locale_cmp(key(a), key(b)));
}

fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
