//! Lock-free publication of immutable string snapshots.
//!
//! A writer builds a complete, terminated string in a fresh buffer, then
//! [`swap`](Utf32Slot::swap)s it into the slot as one indivisible pointer
//! exchange. A concurrent reader loads either the old pointer or the new
//! one — never a torn mix — and a reader already mid-scan on the old
//! buffer keeps reading it unharmed. Reclamation of the swapped-out buffer
//! is the caller's responsibility; no reference counting is provided here.

use crate::Utf32Cursor;
use core::sync::atomic::{AtomicPtr, Ordering};

/// Atomic slot holding the published buffer pointer.
///
/// The slot itself (not the cursor value) is the atomically exchanged
/// memory word: cursors are per-reader snapshots derived from it.
#[derive(Debug)]
pub struct Utf32Slot {
    ptr: AtomicPtr<u32>,
}

impl Utf32Slot {
    /// Creates a slot publishing `ptr`.
    ///
    /// # Contract
    ///
    /// `ptr` must point at a null-terminated buffer, alive until swapped
    /// out and no longer read.
    pub const fn new(ptr: *mut u32) -> Self {
        Self {
            ptr: AtomicPtr::new(ptr),
        }
    }

    /// Publishes `new` and returns the previously published pointer.
    ///
    /// Release ordering on the store makes the new buffer's contents
    /// visible to any reader that subsequently loads the pointer; acquire
    /// on the read hands the old buffer back complete.
    pub fn swap(&self, new: *mut u32) -> *mut u32 {
        self.ptr.swap(new, Ordering::AcqRel)
    }

    /// The currently published pointer.
    pub fn load(&self) -> *const u32 {
        self.ptr.load(Ordering::Acquire)
    }

    /// A fresh cursor over the currently published string.
    ///
    /// # Safety
    ///
    /// The published buffer must stay alive and unmodified for `'a` — in
    /// the single-writer/multi-reader pattern, until the caller's
    /// reclamation scheme has retired it after a swap.
    #[allow(
        unsafe_code,
        reason = "cursor lifetime cannot be tied to a buffer the slot does not own"
    )]
    pub unsafe fn cursor<'a>(&self) -> Utf32Cursor<'a> {
        // SAFETY: forwarded to the caller via this method's contract.
        unsafe { Utf32Cursor::from_raw(self.load()) }
    }
}
