//! FILENAME: core/grid-engine/src/collate.rs
//! PURPOSE: Locale-aware string ordering for sort fallbacks.
//! CONTEXT: Values that are neither null nor dates are ordered by their
//! string representation. A plain byte comparison would put every uppercase
//! letter before every lowercase one and every accented letter after `z`, so
//! this module approximates the root locale collation used by browsers.
//!
//! Levels, in order:
//! 1. primary: base letters (NFD, combining marks removed), case-folded,
//!    with whitespace < punctuation < digits < letters
//! 2. secondary: accents, unaccented first
//! 3. tertiary: lowercase before uppercase
//! 4. raw code points, so the result is a total order

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two strings using the root-locale approximation.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (a_nfd, b_nfd): (Vec<char>, Vec<char>) = (a.nfd().collect(), b.nfd().collect());

    primary_keys(&a_nfd)
        .cmp(primary_keys(&b_nfd))
        .then_with(|| accent_weights(&a_nfd).cmp(&accent_weights(&b_nfd)))
        .then_with(|| case_weights(&a_nfd).cmp(case_weights(&b_nfd)))
        .then_with(|| a.cmp(b))
}

fn primary_keys(chars: &[char]) -> impl Iterator<Item = (u8, char)> + '_ {
    chars
        .iter()
        .copied()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

/// Combining marks grouped by the base character they follow.
fn accent_weights(chars: &[char]) -> Vec<Vec<char>> {
    let mut slots: Vec<Vec<char>> = Vec::new();
    for &c in chars {
        if is_combining_mark(c) {
            match slots.last_mut() {
                Some(marks) => marks.push(c),
                None => slots.push(vec![c]),
            }
        } else {
            slots.push(Vec::new());
        }
    }
    slots
}

fn case_weights(chars: &[char]) -> impl Iterator<Item = u8> + '_ {
    chars
        .iter()
        .filter(|c| !is_combining_mark(**c))
        .map(|c| if c.is_uppercase() { 1 } else { 0 })
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_alphabetic() {
        3
    } else if c.is_numeric() {
        2
    } else {
        1
    }
}
