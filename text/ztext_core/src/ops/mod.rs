//! Generic length/copy/compare/search/parse algorithms.
//!
//! Everything here is a pure scan parameterized over the [`CharCursor`] /
//! [`CharSink`] contracts, so each algorithm exists once and instantiates
//! over any source/destination encoding pair — including mixed pairs, which
//! is why comparison works in code-point order rather than storage order.
//!
//! Cursors are taken by value (they are `Copy` position snapshots); a call
//! never moves the caller's own cursor. Sinks are taken by `&mut` and are
//! left positioned after the last unit written.

use crate::classify;
use crate::{CharCursor, CharSink};
use std::cmp::Ordering;

// === Length ===

/// Number of characters strictly before the terminator.
pub fn length<C: CharCursor>(mut text: C) -> usize {
    let mut len = 0;
    while text.read() != 0 {
        len += 1;
    }
    len
}

/// Like [`length`], but stops counting once `max_chars` is reached, even if
/// the terminator has not appeared yet.
pub fn length_up_to<C: CharCursor>(mut text: C, max_chars: usize) -> usize {
    let mut len = 0;
    while len < max_chars && text.read() != 0 {
        len += 1;
    }
    len
}

// === Copy ===

/// Copies every character of `src` into `dest`.
///
/// No terminator is written: `dest` is left one position past the last
/// character, so callers either terminate explicitly with
/// [`write_terminator()`](CharSink::write_terminator) or use the limited
/// variants below, which terminate automatically.
pub fn copy_all<D: CharSink, S: CharCursor>(dest: &mut D, mut src: S) {
    loop {
        let c = src.read();
        if c == 0 {
            break;
        }
        dest.write(c);
    }
}

/// Copies characters while they fit within `max_bytes` of destination
/// storage, terminator included, then always terminates.
///
/// Byte costs are the destination encoding's ([`CharSink::bytes_for`]), so
/// a multi-unit character either fits completely or is not written at all.
/// Returns the payload bytes written, excluding the terminator. If
/// `max_bytes` cannot even hold the terminator, nothing is written and the
/// result is 0.
pub fn copy_with_byte_limit<D: CharSink, S: CharCursor>(
    dest: &mut D,
    mut src: S,
    max_bytes: usize,
) -> usize {
    let Some(mut budget) = max_bytes.checked_sub(D::bytes_for(0)) else {
        return 0;
    };
    let mut written = 0;
    loop {
        let c = src.read();
        if c == 0 {
            break;
        }
        let cost = D::bytes_for(c);
        if cost > budget {
            break;
        }
        budget -= cost;
        written += cost;
        dest.write(c);
    }
    dest.write_terminator();
    written
}

/// Copies at most `max_chars - 1` characters, then always terminates, so the
/// total characters written (terminator included) never exceeds `max_chars`.
///
/// `max_chars == 0` writes nothing at all.
pub fn copy_with_char_limit<D: CharSink, S: CharCursor>(dest: &mut D, mut src: S, max_chars: usize) {
    if max_chars == 0 {
        return;
    }
    let mut remaining = max_chars - 1;
    while remaining > 0 {
        let c = src.read();
        if c == 0 {
            break;
        }
        dest.write(c);
        remaining -= 1;
    }
    dest.write_terminator();
}

// === Compare ===

/// Compares two strings character by character in code-point order.
///
/// Code-point order (not storage order) keeps the result identical across
/// mixed encodings. Both reaching their terminator together is `Equal`.
pub fn compare<A: CharCursor, B: CharCursor>(a: A, b: B) -> Ordering {
    compare_mapped(a, b, |c| c)
}

/// Like [`compare`], but stops — and returns `Equal` — once `max_chars`
/// characters have matched, regardless of what follows.
pub fn compare_up_to<A: CharCursor, B: CharCursor>(a: A, b: B, max_chars: usize) -> Ordering {
    compare_mapped_up_to(a, b, max_chars, |c| c)
}

/// [`compare`] with both operands case-folded per character.
pub fn compare_ignore_case<A: CharCursor, B: CharCursor>(a: A, b: B) -> Ordering {
    compare_mapped(a, b, classify::fold)
}

/// [`compare_up_to`] with both operands case-folded per character.
pub fn compare_ignore_case_up_to<A: CharCursor, B: CharCursor>(
    a: A,
    b: B,
    max_chars: usize,
) -> Ordering {
    compare_mapped_up_to(a, b, max_chars, classify::fold)
}

fn compare_mapped<A: CharCursor, B: CharCursor>(
    mut a: A,
    mut b: B,
    map: impl Fn(u32) -> u32,
) -> Ordering {
    loop {
        let ca = map(a.read());
        let cb = map(b.read());
        match ca.cmp(&cb) {
            Ordering::Equal if ca == 0 => return Ordering::Equal,
            Ordering::Equal => {}
            different => return different,
        }
    }
}

fn compare_mapped_up_to<A: CharCursor, B: CharCursor>(
    mut a: A,
    mut b: B,
    max_chars: usize,
    map: impl Fn(u32) -> u32,
) -> Ordering {
    let mut remaining = max_chars;
    while remaining > 0 {
        let ca = map(a.read());
        let cb = map(b.read());
        match ca.cmp(&cb) {
            Ordering::Equal if ca == 0 => return Ordering::Equal,
            Ordering::Equal => remaining -= 1,
            different => return different,
        }
    }
    Ordering::Equal
}

// === Search ===

/// Character index of the first occurrence of `needle` in `haystack`.
///
/// Leftmost match wins; an empty needle matches at index 0.
pub fn index_of<H: CharCursor, N: CharCursor>(haystack: H, needle: N) -> Option<usize> {
    let needle_len = length(needle);
    let mut hay = haystack;
    let mut index = 0;
    loop {
        if compare_up_to(hay, needle, needle_len) == Ordering::Equal {
            return Some(index);
        }
        if hay.read() == 0 {
            return None;
        }
        index += 1;
    }
}

/// Character index of the first occurrence of the code point `cp`.
///
/// The terminator is not part of the string: searching for `0` returns
/// `None`.
pub fn index_of_char<C: CharCursor>(mut text: C, cp: u32) -> Option<usize> {
    let mut index = 0;
    loop {
        let c = text.current();
        if c == 0 {
            return None;
        }
        if c == cp {
            return Some(index);
        }
        text.advance();
        index += 1;
    }
}

/// Like [`index_of_char`], with both sides case-folded.
pub fn index_of_char_ignore_case<C: CharCursor>(mut text: C, cp: u32) -> Option<usize> {
    let target = classify::fold(cp);
    let mut index = 0;
    loop {
        let c = text.current();
        if c == 0 {
            return None;
        }
        if classify::fold(c) == target {
            return Some(index);
        }
        text.advance();
        index += 1;
    }
}

/// Returns a cursor advanced past all leading whitespace.
pub fn find_end_of_whitespace<C: CharCursor>(mut text: C) -> C {
    while classify::is_whitespace(text.current()) {
        text.advance();
    }
    text
}

// === Numeric parsing ===

/// Integer types [`get_int_value`] can accumulate into.
///
/// Accumulation is wrapping: text with more digits than the type can hold
/// wraps two's-complement style rather than saturating or failing. The
/// policy is deliberate and uniform across widths.
pub trait ParseInt: Copy {
    /// The additive identity, also the result for empty/malformed input.
    const ZERO: Self;
    /// `self * 10`, wrapping.
    fn wrapping_mul_10(self) -> Self;
    /// `self + digit`, wrapping. `digit` is 0..=9.
    fn wrapping_add_digit(self, digit: u32) -> Self;
    /// `-self`, wrapping.
    fn wrapping_negate(self) -> Self;
}

macro_rules! impl_parse_int {
    ($($ty:ty),*) => {$(
        impl ParseInt for $ty {
            const ZERO: Self = 0;

            #[inline]
            fn wrapping_mul_10(self) -> Self {
                self.wrapping_mul(10)
            }

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                reason = "digit is 0..=9, representable in every implementing type"
            )]
            fn wrapping_add_digit(self, digit: u32) -> Self {
                self.wrapping_add(digit as $ty)
            }

            #[inline]
            fn wrapping_negate(self) -> Self {
                self.wrapping_neg()
            }
        }
    )*};
}

impl_parse_int!(i32, i64);

/// Parses a leading integer: optional `+`/`-` sign, then consecutive ASCII
/// digits, stopping at the first non-digit.
///
/// No whitespace is skipped. No digits consumed yields
/// [`ZERO`](ParseInt::ZERO). Overflow wraps (see [`ParseInt`]).
pub fn get_int_value<T: ParseInt, C: CharCursor>(mut text: C) -> T {
    let negative = consume_sign(&mut text);
    let mut value = T::ZERO;
    while let Some(digit) = classify::digit_value(text.read()) {
        value = value.wrapping_mul_10().wrapping_add_digit(digit);
    }
    if negative {
        value.wrapping_negate()
    } else {
        value
    }
}

/// Parses a leading floating-point number: optional sign, integer part,
/// optional `.` fraction, optional `e`/`E` exponent with optional sign.
///
/// Parsing stops at the first character outside that grammar; an `e` not
/// followed by at least one digit (after its optional sign) is not treated
/// as an exponent. Malformed or empty input yields `0.0`.
pub fn get_double_value<C: CharCursor>(mut text: C) -> f64 {
    let negative = consume_sign(&mut text);

    let mut value = 0.0_f64;
    while let Some(digit) = classify::digit_value(text.current()) {
        value = value * 10.0 + f64::from(digit);
        text.advance();
    }

    if text.current() == u32::from(b'.') {
        text.advance();
        let mut scale = 0.1_f64;
        while let Some(digit) = classify::digit_value(text.current()) {
            value += f64::from(digit) * scale;
            scale /= 10.0;
            text.advance();
        }
    }

    if matches!(text.current(), c if c == u32::from(b'e') || c == u32::from(b'E')) {
        let mut after_e = text;
        after_e.advance();
        let exp_negative = consume_sign(&mut after_e);
        let mut exponent = 0_i32;
        let mut any_digits = false;
        while let Some(digit) = classify::digit_value(after_e.current()) {
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(i32::try_from(digit).unwrap_or(0));
            any_digits = true;
            after_e.advance();
        }
        if any_digits {
            let exponent = if exp_negative { -exponent } else { exponent };
            value *= 10.0_f64.powi(exponent);
        }
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Consumes a leading `+` or `-`; returns `true` for `-`.
fn consume_sign<C: CharCursor>(text: &mut C) -> bool {
    match text.current() {
        c if c == u32::from(b'-') => {
            text.advance();
            true
        }
        c if c == u32::from(b'+') => {
            text.advance();
            false
        }
        _ => false,
    }
}
