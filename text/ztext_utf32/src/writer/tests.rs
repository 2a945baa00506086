use super::*;
use crate::{bytes_required_for, Utf32Cursor, UNIT_BYTES};
use pretty_assertions::assert_eq;
use std::cmp::Ordering;
use ztext_core::{ops, CharSink};

fn units(s: &str) -> Vec<u32> {
    let mut v: Vec<u32> = s.chars().map(u32::from).collect();
    v.push(0);
    v
}

// === Basic writes ===

#[test]
fn write_advances_and_terminator_does_not() {
    let mut buf = [u32::MAX; 4];
    let mut writer = Utf32Writer::new(&mut buf);
    writer.write(u32::from('h'));
    writer.write(u32::from('i'));
    assert_eq!(writer.written(), 2);
    writer.write_terminator();
    assert_eq!(writer.written(), 2);
    assert_eq!(buf[..3], [u32::from('h'), u32::from('i'), 0]);
}

#[test]
fn terminator_can_be_overwritten_by_further_appends() {
    let mut buf = [u32::MAX; 4];
    let mut writer = Utf32Writer::new(&mut buf);
    writer.write(u32::from('a'));
    writer.write_terminator();
    writer.write(u32::from('b'));
    writer.write_terminator();
    assert_eq!(buf[..3], [u32::from('a'), u32::from('b'), 0]);
}

#[test]
fn replace_overwrites_in_place_without_advancing() {
    let mut buf = [u32::MAX; 3];
    let mut writer = Utf32Writer::new(&mut buf);
    writer.write(u32::from('a'));
    writer.replace(u32::from('b'));
    writer.replace(u32::from('c'));
    assert_eq!(writer.written(), 1);
    // Both replacements landed on the same unit; the slot after it is
    // untouched.
    assert_eq!(buf, [u32::from('a'), u32::from('c'), u32::MAX]);
}

#[test]
fn remaining_tracks_capacity() {
    let mut buf = [0u32; 8];
    let mut writer = Utf32Writer::new(&mut buf);
    assert_eq!(writer.remaining(), 8);
    writer.write(u32::from('x'));
    assert_eq!(writer.remaining(), 7);
}

#[test]
fn bytes_for_is_the_unit_width_for_every_code_point() {
    assert_eq!(Utf32Writer::bytes_for(0), UNIT_BYTES);
    assert_eq!(Utf32Writer::bytes_for(u32::from('a')), UNIT_BYTES);
    assert_eq!(Utf32Writer::bytes_for(0x0001_F600), UNIT_BYTES);
}

// === Pre-sized copies ===

#[test]
fn presized_destination_fits_copy_all_exactly() {
    let src_buf = units("exact fit");
    let src = Utf32Cursor::new(&src_buf);

    // Payload plus one terminator unit.
    let needed = bytes_required_for(src) / UNIT_BYTES + 1;
    let mut dest_buf = vec![u32::MAX; needed];
    let mut writer = Utf32Writer::new(&mut dest_buf);
    ops::copy_all(&mut writer, src);
    writer.write_terminator();
    assert_eq!(writer.remaining(), 1);

    assert_eq!(
        ops::compare(Utf32Cursor::new(&dest_buf), src),
        Ordering::Equal
    );
}

#[test]
fn byte_limited_copy_respects_the_destination_buffer_size() {
    let src_buf = units("truncate me");
    let mut dest_buf = [u32::MAX; 4];
    let max_bytes = dest_buf.len() * UNIT_BYTES;
    let mut writer = Utf32Writer::new(&mut dest_buf);
    let written = ops::copy_with_byte_limit(&mut writer, Utf32Cursor::new(&src_buf), max_bytes);
    assert_eq!(written, 3 * UNIT_BYTES);
    assert_eq!(
        dest_buf,
        [u32::from('t'), u32::from('r'), u32::from('u'), 0]
    );
}

#[test]
fn char_limited_copy_terminates_within_the_limit() {
    let src_buf = units("abcdef");
    let mut dest_buf = [u32::MAX; 3];
    let mut writer = Utf32Writer::new(&mut dest_buf);
    ops::copy_with_char_limit(&mut writer, Utf32Cursor::new(&src_buf), 3);
    assert_eq!(dest_buf, [u32::from('a'), u32::from('b'), 0]);
}

// === Capacity violations ===

#[test]
#[should_panic(expected = "index out of bounds")]
fn writing_past_the_buffer_panics() {
    let mut buf = [0u32; 1];
    let mut writer = Utf32Writer::new(&mut buf);
    writer.write(u32::from('a'));
    writer.write(u32::from('b'));
}
