//! Character classification and case mapping per code point.
//!
//! The classification tables are std's `char` tables; these functions adapt
//! them to the raw `u32` code points cursors carry. A code point outside the
//! Unicode scalar range (possible in a caller-owned buffer of arbitrary
//! units) classifies as nothing and maps to itself.
//!
//! Decimal digits are ASCII `0-9` only: this is the alphabet the numeric
//! parsers in [`ops`](crate::ops) consume, and mixing in other scripts'
//! digit blocks would silently change parse results.

#[inline]
fn scalar(cp: u32) -> Option<char> {
    char::from_u32(cp)
}

/// Returns `true` for Unicode whitespace.
#[inline]
pub fn is_whitespace(cp: u32) -> bool {
    scalar(cp).is_some_and(char::is_whitespace)
}

/// Returns `true` for ASCII decimal digits `0-9`.
#[inline]
pub fn is_digit(cp: u32) -> bool {
    scalar(cp).is_some_and(|c| c.is_ascii_digit())
}

/// Returns `true` for Unicode letters.
#[inline]
pub fn is_letter(cp: u32) -> bool {
    scalar(cp).is_some_and(char::is_alphabetic)
}

/// Returns `true` for letters and decimal digits.
#[inline]
pub fn is_letter_or_digit(cp: u32) -> bool {
    is_letter(cp) || is_digit(cp)
}

/// Returns `true` for upper-case letters.
#[inline]
pub fn is_upper(cp: u32) -> bool {
    scalar(cp).is_some_and(char::is_uppercase)
}

/// Returns `true` for lower-case letters.
#[inline]
pub fn is_lower(cp: u32) -> bool {
    scalar(cp).is_some_and(char::is_lowercase)
}

/// Upper-cases one code point using the simple (single-scalar) mapping.
///
/// Characters whose upper-case form expands to multiple scalars (such as
/// `ß`) are returned unchanged: case mapping here must stay a pure
/// per-character function for the comparison loops.
#[inline]
pub fn to_upper(cp: u32) -> u32 {
    match scalar(cp) {
        Some(c) => single_scalar(c.to_uppercase()).map_or(cp, u32::from),
        None => cp,
    }
}

/// Lower-cases one code point using the simple (single-scalar) mapping.
#[inline]
pub fn to_lower(cp: u32) -> u32 {
    match scalar(cp) {
        Some(c) => single_scalar(c.to_lowercase()).map_or(cp, u32::from),
        None => cp,
    }
}

/// Case-folds one code point for case-insensitive comparison.
///
/// Defined as the simple upper-case mapping, applied identically to both
/// operands of a folded compare.
#[inline]
pub fn fold(cp: u32) -> u32 {
    to_upper(cp)
}

/// The value of an ASCII decimal digit, or `None`.
#[inline]
pub fn digit_value(cp: u32) -> Option<u32> {
    if (u32::from(b'0')..=u32::from(b'9')).contains(&cp) {
        Some(cp - u32::from(b'0'))
    } else {
        None
    }
}

/// The value of an ASCII hexadecimal digit (either case), or `None`.
#[inline]
pub fn hex_digit_value(cp: u32) -> Option<u32> {
    match cp {
        _ if (u32::from(b'0')..=u32::from(b'9')).contains(&cp) => Some(cp - u32::from(b'0')),
        _ if (u32::from(b'a')..=u32::from(b'f')).contains(&cp) => Some(cp - u32::from(b'a') + 10),
        _ if (u32::from(b'A')..=u32::from(b'F')).contains(&cp) => Some(cp - u32::from(b'A') + 10),
        _ => None,
    }
}

/// Returns the mapping's result when it is exactly one scalar, else `None`.
#[inline]
fn single_scalar(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    match (mapping.next(), mapping.next()) {
        (Some(mapped), None) => Some(mapped),
        _ => None,
    }
}
