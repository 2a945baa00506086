//! The fixed-width read cursor.
//!
//! One `u32` unit per character means every operation the generic layer
//! needs is either a single indexed load or O(1) position arithmetic; the
//! only O(n) operations are the explicit scans (`length`,
//! `find_terminating_null`).

use ztext_core::{ops, CharCursor};

/// Storage bytes per code unit (and per character) in this encoding.
pub const UNIT_BYTES: usize = core::mem::size_of::<u32>();

/// `Copy` read cursor over a caller-owned, null-terminated `&[u32]` buffer.
///
/// Copying a cursor snapshots its position only; the buffer is borrowed,
/// never owned, and its lifetime is the caller's responsibility.
///
/// # Contract
///
/// The buffer must contain a zero unit reachable by advancement
/// (debug-asserted at construction). Advancing past the terminator reads
/// whatever junk units follow it inside the borrowed region, and panics at
/// the region's end; neither is memory-unsafe.
#[derive(Clone, Copy, Debug)]
pub struct Utf32Cursor<'a> {
    /// Borrowed units, terminator included somewhere within.
    units: &'a [u32],
    /// Current read position (unit index == character index).
    pos: usize,
}

/// Size assertion: a cursor is a fat pointer plus a position, <= 24 bytes
/// on 64-bit platforms, so it stays cheap to copy by value everywhere.
const _: () = assert!(core::mem::size_of::<Utf32Cursor<'static>>() <= 24);

impl<'a> Utf32Cursor<'a> {
    /// Creates a cursor at the start of `units`.
    ///
    /// # Contract
    ///
    /// `units` must contain a zero terminator. Checked with a linear scan
    /// in debug builds only; construction itself is O(1).
    pub fn new(units: &'a [u32]) -> Self {
        debug_assert!(units.contains(&0), "buffer must contain a terminator");
        Self { units, pos: 0 }
    }

    /// Rebuilds a borrowed view from a raw published pointer by scanning
    /// for the terminator. This is the constructor readers use after
    /// loading a pointer from a [`Utf32Slot`](crate::Utf32Slot).
    ///
    /// # Safety
    ///
    /// `ptr` must point at a null-terminated `u32` buffer that stays alive
    /// and unmodified for `'a`. The scan reads every unit up to and
    /// including the terminator.
    #[allow(
        unsafe_code,
        reason = "re-borrowing a published raw pointer; terminator scan bounds the view"
    )]
    pub unsafe fn from_raw(ptr: *const u32) -> Self {
        let mut len = 0;
        // SAFETY: the caller guarantees a reachable terminator, so every
        // `ptr.add(len)` up to and including the terminator is in bounds.
        unsafe {
            while *ptr.add(len) != 0 {
                len += 1;
            }
            Self {
                units: core::slice::from_raw_parts(ptr, len + 1),
                pos: 0,
            }
        }
    }

    /// Returns `true` if the cursor sits on the terminator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_eof()
    }

    /// Current position, in characters from the buffer start.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The character `i` positions ahead of the cursor.
    #[inline]
    pub fn at(&self, i: usize) -> u32 {
        self.units[self.pos + i]
    }

    /// Read-only view of the remaining units, terminator included.
    ///
    /// The explicit accessor replacing the source encoding family's
    /// implicit raw-pointer conversion.
    #[inline]
    pub fn as_units(&self) -> &'a [u32] {
        &self.units[self.pos..]
    }

    /// Characters strictly before the terminator.
    pub fn length(&self) -> usize {
        ops::length(*self)
    }

    /// Like [`length()`](Self::length), capped at `max_chars`.
    pub fn length_up_to(&self, max_chars: usize) -> usize {
        ops::length_up_to(*self, max_chars)
    }

    /// Storage this string occupies, terminator included.
    ///
    /// This is the exact size a destination buffer must have before the
    /// string can be copied into it with the same encoding.
    pub fn size_in_bytes(&self) -> usize {
        (self.length() + 1) * UNIT_BYTES
    }

    /// A cursor positioned exactly on the terminator. O(length).
    pub fn find_terminating_null(&self) -> Self {
        let mut end = *self;
        while end.current() != 0 {
            end.advance();
        }
        end
    }

    /// Character offset of the first occurrence of `cp`, scanning from the
    /// current position.
    pub fn index_of_char(&self, cp: u32, ignore_case: bool) -> Option<usize> {
        if ignore_case {
            ops::index_of_char_ignore_case(*self, cp)
        } else {
            ops::index_of_char(*self, cp)
        }
    }
}

impl CharCursor for Utf32Cursor<'_> {
    #[inline]
    fn current(&self) -> u32 {
        self.units[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn retreat(&mut self) {
        self.pos -= 1;
    }

    // Fixed width: bulk moves are position arithmetic, not loops.

    #[inline]
    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    #[inline]
    fn retreat_n(&mut self, n: usize) {
        self.pos -= n;
    }
}

/// Bytes needed to re-encode `src` (any encoding) into UTF-32, excluding
/// the terminator: every character costs exactly one unit.
pub fn bytes_required_for<C: CharCursor>(src: C) -> usize {
    ops::length(src) * UNIT_BYTES
}
