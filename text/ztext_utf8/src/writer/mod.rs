//! The variable-width write sink.

use ztext_core::{CharCursor, CharSink};

/// Bytes one code point occupies when UTF-8 encoded.
#[inline]
pub(crate) fn encoded_len(cp: u32) -> usize {
    match cp {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Bytes needed to re-encode `src` (any encoding) into UTF-8, excluding
/// the terminator.
pub fn bytes_required_for<C: CharCursor>(mut src: C) -> usize {
    let mut total = 0;
    loop {
        let c = src.read();
        if c == 0 {
            return total;
        }
        total += encoded_len(c);
    }
}

/// Write sink over a caller-owned `&mut [u8]` destination buffer.
///
/// # Contract
///
/// Pre-size the destination with [`bytes_required_for`] (plus one byte for
/// the terminator); writing past the buffer panics.
#[derive(Debug)]
pub struct Utf8Writer<'a> {
    bytes: &'a mut [u8],
    pos: usize,
}

impl<'a> Utf8Writer<'a> {
    /// Creates a writer at the start of `bytes`.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bytes written so far (the terminator does not count).
    #[inline]
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Bytes of capacity left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "every pushed value is masked to at most 8 significant bits"
    )]
    fn push(&mut self, byte: u32) {
        self.bytes[self.pos] = byte as u8;
        self.pos += 1;
    }
}

impl CharSink for Utf8Writer<'_> {
    fn write(&mut self, cp: u32) {
        match encoded_len(cp) {
            1 => self.push(cp),
            2 => {
                self.push(0xC0 | (cp >> 6));
                self.push(0x80 | (cp & 0x3F));
            }
            3 => {
                self.push(0xE0 | (cp >> 12));
                self.push(0x80 | ((cp >> 6) & 0x3F));
                self.push(0x80 | (cp & 0x3F));
            }
            _ => {
                self.push(0xF0 | (cp >> 18));
                self.push(0x80 | ((cp >> 12) & 0x3F));
                self.push(0x80 | ((cp >> 6) & 0x3F));
                self.push(0x80 | (cp & 0x3F));
            }
        }
    }

    #[inline]
    fn write_terminator(&mut self) {
        self.bytes[self.pos] = 0;
    }

    #[inline]
    fn bytes_for(cp: u32) -> usize {
        encoded_len(cp)
    }
}

#[cfg(test)]
mod tests;
