use super::*;
use crate::Utf8Cursor;
use pretty_assertions::assert_eq;
use std::cmp::Ordering;
use ztext_core::{ops, CharSink};

fn bytes(s: &str) -> Vec<u8> {
    let mut v = s.as_bytes().to_vec();
    v.push(0);
    v
}

// === Encoding ===

#[test]
fn encodes_every_width() {
    let mut buf = [0xFFu8; 16];
    let mut writer = Utf8Writer::new(&mut buf);
    writer.write(u32::from('a'));
    writer.write(u32::from('é'));
    writer.write(u32::from('€'));
    writer.write(u32::from('😀'));
    writer.write_terminator();
    let written = writer.written();
    assert_eq!(written, 1 + 2 + 3 + 4);
    assert_eq!(&buf[..=written], bytes("aé€😀").as_slice());
}

#[test]
fn encoded_lengths_match_bytes_for() {
    assert_eq!(Utf8Writer::bytes_for(0), 1);
    assert_eq!(Utf8Writer::bytes_for(u32::from('a')), 1);
    assert_eq!(Utf8Writer::bytes_for(u32::from('é')), 2);
    assert_eq!(Utf8Writer::bytes_for(u32::from('€')), 3);
    assert_eq!(Utf8Writer::bytes_for(u32::from('😀')), 4);
}

#[test]
fn round_trip_through_cursor() {
    let src_buf = bytes("mixed aé€😀 text");
    let src = Utf8Cursor::new(&src_buf);

    let mut dest_buf = vec![0xFFu8; bytes_required_for(src) + 1];
    let mut writer = Utf8Writer::new(&mut dest_buf);
    ops::copy_all(&mut writer, src);
    writer.write_terminator();

    assert_eq!(
        ops::compare(Utf8Cursor::new(&dest_buf), src),
        Ordering::Equal
    );
    assert_eq!(dest_buf, src_buf);
}

// === Capacity accounting ===

#[test]
fn bytes_required_for_sums_encoded_widths() {
    let buf = bytes("a€");
    assert_eq!(bytes_required_for(Utf8Cursor::new(&buf)), 4);
    let empty = bytes("");
    assert_eq!(bytes_required_for(Utf8Cursor::new(&empty)), 0);
}

#[test]
fn byte_limited_copy_never_splits_a_character() {
    let src_buf = bytes("a€b");
    let mut dest_buf = [0xFFu8; 3];
    let mut writer = Utf8Writer::new(&mut dest_buf);
    // 3 bytes: terminator reserves 1, 'a' fits, '€' needs 3 > 1 left.
    let written = ops::copy_with_byte_limit(&mut writer, Utf8Cursor::new(&src_buf), 3);
    assert_eq!(written, 1);
    assert_eq!(&dest_buf[..2], &[b'a', 0]);
}

#[test]
fn char_limited_copy_counts_characters_not_bytes() {
    let src_buf = bytes("€€€");
    let mut dest_buf = [0xFFu8; 8];
    let mut writer = Utf8Writer::new(&mut dest_buf);
    ops::copy_with_char_limit(&mut writer, Utf8Cursor::new(&src_buf), 3);
    assert_eq!(&dest_buf[..7], bytes("€€").as_slice());
}

// === Properties ===

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn encode_decode_round_trips(s in "[^\\x00]{0,24}") {
            let src_buf = bytes(&s);
            let src = Utf8Cursor::new(&src_buf);
            let mut dest_buf = vec![0xAAu8; src_buf.len()];
            let mut writer = Utf8Writer::new(&mut dest_buf);
            ops::copy_all(&mut writer, src);
            writer.write_terminator();
            prop_assert_eq!(dest_buf, src_buf);
        }

        #[test]
        fn bytes_required_matches_std_len_utf8(s in "[^\\x00]{0,24}") {
            let buf = bytes(&s);
            prop_assert_eq!(bytes_required_for(Utf8Cursor::new(&buf)), s.len());
        }
    }
}
