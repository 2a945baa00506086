//! Test-only fixture encodings for exercising the contracts without a
//! concrete encoding crate (which would be a circular dev-dependency).

use crate::{CharCursor, CharSink};

/// Builds a terminated unit buffer from a string, one unit per scalar.
pub(crate) fn units(s: &str) -> Vec<u32> {
    let mut v: Vec<u32> = s.chars().map(u32::from).collect();
    v.push(0);
    v
}

/// Fixture cursor: one `u32` unit per character over a borrowed buffer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnitCursor<'a> {
    units: &'a [u32],
    pos: usize,
}

impl<'a> UnitCursor<'a> {
    /// `units` must contain a zero terminator.
    pub(crate) fn new(units: &'a [u32]) -> Self {
        debug_assert!(units.contains(&0), "fixture buffer must be terminated");
        Self { units, pos: 0 }
    }
}

impl CharCursor for UnitCursor<'_> {
    fn current(&self) -> u32 {
        self.units[self.pos]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn retreat(&mut self) {
        self.pos -= 1;
    }

    // Bulk moves deliberately left at their trait defaults so the default
    // implementations get exercised by this crate's tests.
}

/// Fixture sink with a fixed four-byte cost per character.
///
/// Backed by a growable buffer so tests never have to pre-size; the unit
/// count doubles as "units written" for limit assertions.
#[derive(Debug, Default)]
pub(crate) struct WideSink {
    pub(crate) units: Vec<u32>,
}

impl CharSink for WideSink {
    fn write(&mut self, cp: u32) {
        self.units.push(cp);
    }

    fn write_terminator(&mut self) {
        self.units.push(0);
    }

    fn bytes_for(_cp: u32) -> usize {
        4
    }
}

/// Fixture sink with UTF-8 per-character byte costs.
///
/// Stores whole code points (the cost model is what is under test), so
/// byte-limit truncation of multi-byte characters can be asserted without
/// real encoding.
#[derive(Debug, Default)]
pub(crate) struct NarrowSink {
    pub(crate) units: Vec<u32>,
}

impl CharSink for NarrowSink {
    fn write(&mut self, cp: u32) {
        self.units.push(cp);
    }

    fn write_terminator(&mut self) {
        self.units.push(0);
    }

    fn bytes_for(cp: u32) -> usize {
        match cp {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }
}
