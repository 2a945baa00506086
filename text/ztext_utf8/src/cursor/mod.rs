//! The variable-width read cursor.

use ztext_core::{ops, CharCursor};

/// `Copy` read cursor over a caller-owned, null-terminated UTF-8 buffer.
///
/// Positions are byte offsets but always sit on a character boundary;
/// every move steps whole characters using the leading byte's width.
///
/// # Contract
///
/// The buffer must hold well-formed UTF-8 and contain a zero byte
/// reachable by advancement (debug-asserted at construction). Malformed
/// input decodes to junk or panics at the buffer's end; it is never
/// memory-unsafe.
#[derive(Clone, Copy, Debug)]
pub struct Utf8Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Cursor<'a> {
    /// Creates a cursor at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        debug_assert!(bytes.contains(&0), "buffer must contain a terminator");
        Self { bytes, pos: 0 }
    }

    /// Current byte offset from the buffer start.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Read-only view of the remaining bytes, terminator included.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Characters (not bytes) strictly before the terminator.
    pub fn length(&self) -> usize {
        ops::length(*self)
    }

    /// Like [`length()`](Self::length), capped at `max_chars`.
    pub fn length_up_to(&self, max_chars: usize) -> usize {
        ops::length_up_to(*self, max_chars)
    }

    /// Storage this string occupies in bytes, terminator included.
    pub fn size_in_bytes(&self) -> usize {
        self.find_terminating_null().pos - self.pos + 1
    }

    /// A cursor positioned exactly on the terminator.
    ///
    /// SIMD-accelerated byte search; the terminator is the only zero byte
    /// a well-formed buffer can contain.
    pub fn find_terminating_null(&self) -> Self {
        let tail = &self.bytes[self.pos..];
        let offset = memchr::memchr(0, tail).unwrap_or(tail.len());
        Self {
            bytes: self.bytes,
            pos: self.pos + offset,
        }
    }

    /// Number of code units in the character starting with `lead`.
    ///
    /// Anything that is not a multi-byte leading byte (ASCII, stray
    /// continuation bytes, invalid values) counts as one unit, so a
    /// malformed buffer still makes forward progress.
    #[inline]
    pub fn char_width(lead: u8) -> usize {
        match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}

/// Payload bits of a continuation byte.
#[inline]
fn continuation(byte: u8) -> u32 {
    u32::from(byte & 0x3F)
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

impl CharCursor for Utf8Cursor<'_> {
    fn current(&self) -> u32 {
        let lead = self.bytes[self.pos];
        match Utf8Cursor::char_width(lead) {
            2 => (u32::from(lead & 0x1F) << 6) | continuation(self.bytes[self.pos + 1]),
            3 => {
                (u32::from(lead & 0x0F) << 12)
                    | (continuation(self.bytes[self.pos + 1]) << 6)
                    | continuation(self.bytes[self.pos + 2])
            }
            4 => {
                (u32::from(lead & 0x07) << 18)
                    | (continuation(self.bytes[self.pos + 1]) << 12)
                    | (continuation(self.bytes[self.pos + 2]) << 6)
                    | continuation(self.bytes[self.pos + 3])
            }
            _ => u32::from(lead),
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += Utf8Cursor::char_width(self.bytes[self.pos]);
    }

    fn retreat(&mut self) {
        self.pos -= 1;
        while is_continuation(self.bytes[self.pos]) {
            self.pos -= 1;
        }
    }
}
