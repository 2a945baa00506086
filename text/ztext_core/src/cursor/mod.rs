//! The cursor and sink contracts every encoding implements.
//!
//! A cursor is a `Copy` position marker over a caller-owned, contiguous,
//! null-terminated sequence of code units. Copying a cursor snapshots the
//! position only — the buffer is never duplicated or owned. EOF is the
//! zero code point; no explicit bounds checking is needed in the common
//! case because the terminator ends every well-formed scan.
//!
//! # Contract
//!
//! The referenced sequence must contain a zero code point reachable by
//! repeated [`advance()`](CharCursor::advance). Advancing past the
//! terminator, or retreating past the start of the buffer, is a caller
//! contract violation: concrete encodings turn it into a panic or a junk
//! read, never memory unsafety.

/// Read-side capability over one encoding's null-terminated buffer.
///
/// Code points are carried as `u32` so that a cursor can surface whatever
/// unit value the caller's buffer actually holds; `0` is always the
/// terminator. The generic algorithms in [`ops`](crate::ops) drive their
/// loops exclusively through [`read()`](Self::read), the canonical
/// read-then-advance step.
pub trait CharCursor: Copy {
    /// The code point under the cursor, or `0` at the terminator.
    fn current(&self) -> u32;

    /// Move one character forward.
    fn advance(&mut self);

    /// Move one character backward.
    ///
    /// # Contract
    ///
    /// The cursor must not retreat past the position it was created at.
    fn retreat(&mut self);

    /// Returns the current code point, then advances past it.
    #[inline]
    fn read(&mut self) -> u32 {
        let c = self.current();
        self.advance();
        c
    }

    /// Move `n` characters forward.
    ///
    /// Fixed-width encodings override this with O(1) arithmetic.
    #[inline]
    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Move `n` characters backward. Same contract as [`retreat()`](Self::retreat).
    #[inline]
    fn retreat_n(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }

    /// Returns `true` if the cursor sits on the terminator.
    #[inline]
    fn is_eof(&self) -> bool {
        self.current() == 0
    }
}

/// Write-side capability over one encoding's caller-owned buffer.
///
/// Sinks advance as they write, mirroring the read side. The terminator is
/// never written implicitly: callers (or the limited copy operations, which
/// terminate for them) place it explicitly with
/// [`write_terminator()`](Self::write_terminator).
///
/// # Contract
///
/// The destination must have been pre-sized via the encoding's byte
/// accounting (`bytes_for`, the encoding crates' `bytes_required_for`).
/// Writing past the buffer is a caller contract violation and panics.
pub trait CharSink {
    /// Store one code point at the current position and advance past it.
    fn write(&mut self, cp: u32);

    /// Store the zero terminator at the current position without advancing.
    fn write_terminator(&mut self);

    /// Storage bytes one code point occupies in this sink's encoding.
    ///
    /// The terminator's cost is `bytes_for(0)`. This drives
    /// [`ops::copy_with_byte_limit`](crate::ops::copy_with_byte_limit) and
    /// the cross-encoding capacity helpers.
    fn bytes_for(cp: u32) -> usize;
}
