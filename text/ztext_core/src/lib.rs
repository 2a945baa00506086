//! Encoding-agnostic algorithms over null-terminated text cursors.
//!
//! Every supported encoding (fixed-width 32-bit, variable-width 8-bit, ...)
//! exposes a cursor implementing the [`CharCursor`] contract and a sink
//! implementing [`CharSink`]. The algorithms in [`ops`] are written once
//! against those contracts and instantiate over any conforming pair, so a
//! UTF-8 source can be compared against or copied into a UTF-32 destination
//! without per-encoding duplication.
//!
//! This crate is standalone: no dependencies, no allocation, no owned
//! buffers. Memory is always caller-owned; cursors are `Copy` position
//! markers over it, and every scan terminates at the zero code point that
//! ends each string.

pub mod classify;
mod cursor;
pub mod ops;

pub use cursor::{CharCursor, CharSink};

#[cfg(test)]
pub(crate) mod testing;
