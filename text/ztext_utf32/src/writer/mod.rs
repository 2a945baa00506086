//! The fixed-width write sink.

use crate::UNIT_BYTES;
use ztext_core::CharSink;

/// Write sink over a caller-owned `&mut [u32]` destination buffer.
///
/// Writes advance; the terminator is placed explicitly (or by the limited
/// copy operations) and does not advance, so it can be overwritten by
/// further appends.
///
/// # Contract
///
/// The destination must be pre-sized via
/// [`bytes_required_for`](crate::bytes_required_for) /
/// [`size_in_bytes`](crate::Utf32Cursor::size_in_bytes) before copying.
/// Writing past the buffer panics.
#[derive(Debug)]
pub struct Utf32Writer<'a> {
    units: &'a mut [u32],
    pos: usize,
}

impl<'a> Utf32Writer<'a> {
    /// Creates a writer at the start of `units`.
    pub fn new(units: &'a mut [u32]) -> Self {
        Self { units, pos: 0 }
    }

    /// Units written so far (the terminator does not count: it does not
    /// advance the writer).
    #[inline]
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Units of capacity left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.units.len() - self.pos
    }

    /// Overwrites the unit at the current position without advancing.
    ///
    /// Only the fixed-width encoding can edit in place; a follow-up
    /// [`write`](CharSink::write) replaces the same unit again.
    #[inline]
    pub fn replace(&mut self, cp: u32) {
        self.units[self.pos] = cp;
    }
}

impl CharSink for Utf32Writer<'_> {
    #[inline]
    fn write(&mut self, cp: u32) {
        self.units[self.pos] = cp;
        self.pos += 1;
    }

    #[inline]
    fn write_terminator(&mut self) {
        self.units[self.pos] = 0;
    }

    #[inline]
    fn bytes_for(_cp: u32) -> usize {
        UNIT_BYTES
    }
}

#[cfg(test)]
mod tests;
