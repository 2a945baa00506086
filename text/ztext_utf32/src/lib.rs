//! Fixed-width 32-bit realization of the null-terminated cursor contract.
//!
//! One code unit is one character, so every cursor move is O(1) pointer
//! arithmetic and no decoding exists. The crate provides:
//!
//! - [`Utf32Cursor`]: a `Copy` read cursor over a caller-owned `&[u32]`
//!   buffer, implementing [`ztext_core::CharCursor`];
//! - [`Utf32Writer`]: the matching [`ztext_core::CharSink`] over
//!   `&mut [u32]`, with byte accounting for pre-sizing destinations;
//! - [`Utf32Slot`]: an atomic pointer slot for lock-free publication of
//!   freshly built buffers to concurrent readers.
//!
//! The buffer itself is always owned by the caller; nothing here allocates
//! or frees.

mod cursor;
mod publish;
mod writer;

pub use cursor::{bytes_required_for, Utf32Cursor, UNIT_BYTES};
pub use publish::Utf32Slot;
pub use writer::Utf32Writer;
