//! Variable-width 8-bit realization of the null-terminated cursor contract.
//!
//! Characters occupy one to four code units; the cursor decodes on read
//! and steps by the leading byte's width, so the same generic algorithms
//! that drive the fixed-width encodings work unchanged here — including
//! mixed-encoding copies and comparisons, which go through decoded code
//! points.
//!
//! # Contract
//!
//! Buffers hold well-formed, null-terminated UTF-8. Decoding trusts the
//! input; validation belongs to whatever produced the buffer, not to this
//! crate.

mod cursor;
mod writer;

pub use cursor::Utf8Cursor;
pub use writer::{bytes_required_for, Utf8Writer};
