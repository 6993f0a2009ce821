//! Snapshot tests for user-facing text: error messages and field listings.
//!
//! Error `Display` strings end up in CLI output and logs, so a change to
//! any of them should be a deliberate one. Snapshots are inline; accept
//! intentional changes with `cargo insta review`.

use std::fmt::Write as _;

use insta::assert_snapshot;
use wirecursor_reader::{BufferReader, FieldWalker, ReadError, ScalarKind, WireType};
use wirecursor_tests::FieldWriter;

fn first_error(buf: &[u8], read: impl FnOnce(&mut BufferReader<'_>) -> Result<(), ReadError>) -> String {
    let mut reader = BufferReader::new(buf);
    read(&mut reader).unwrap_err().to_string()
}

/// One line per field: offset, id, wire type, payload length, payload hex.
fn listing(buf: &[u8]) -> String {
    let mut lines = Vec::new();
    for field in FieldWalker::new(buf) {
        let field = field.unwrap();
        let mut line = String::new();
        let _ = write!(
            line,
            "{:04}  #{:<3} {:<6} {:>3}  {}",
            field.offset,
            field.key.field_id,
            field.key.wire_type,
            field.payload.len(),
            hex::encode(field.payload)
        );
        lines.push(line.trim_end().to_owned());
    }
    lines.join("\n")
}

// ── Error messages ────────────────────────────────────────────────────────────

#[test]
fn invalid_boolean_message() {
    let msg = first_error(&[0xFF, 0x80], |r| {
        r.read_bool()?;
        r.read_bool().map(|_| ())
    });
    assert_snapshot!(msg, @"invalid boolean encoding [0x80] at offset 1");
}

#[test]
fn malformed_varint_message() {
    let msg = first_error(&[0x01, 0x80], |r| {
        r.read_uint()?;
        r.read_uint().map(|_| ())
    });
    assert_snapshot!(msg, @"malformed varint at offset 1");
}

#[test]
fn buffer_underrun_message() {
    let msg = first_error(&[0; 5], |r| r.read_fixed(ScalarKind::Double).map(|_| ()));
    assert_snapshot!(msg, @"buffer underrun at offset 0: needed 8 bytes, 5 available");
}

#[test]
fn invalid_text_message() {
    let msg = first_error(&[0x02, 0xC3, 0x28], |r| r.read_str().map(|_| ()));
    assert_snapshot!(msg, @"invalid text at offset 1");
}

#[test]
fn unknown_wire_type_message() {
    let msg = first_error(&[0x0E], |r| r.read_field_key().map(|_| ()));
    assert_snapshot!(msg, @"unknown wire type: 6");
}

#[test]
fn unsupported_scalar_kind_message() {
    let msg = "int64".parse::<ScalarKind>().unwrap_err().to_string();
    assert_snapshot!(msg, @r#"unsupported scalar kind: "int64""#);
}

#[test]
fn released_message() {
    let msg = first_error(&[0x00], |r| {
        r.release();
        r.skip_by_wire_type(WireType::Varint)
    });
    assert_snapshot!(msg, @"reader has been released");
}

// ── Field listings ────────────────────────────────────────────────────────────

#[test]
fn mixed_field_listing() {
    let buf = FieldWriter::new()
        .varint_field(1, 300)
        .str_field(2, "hi")
        .bit32_field(3, 42)
        .bit64_field(4, 1.0)
        .sint_field(5, -1)
        .bytes_field(6, &[])
        .finish();

    assert_snapshot!(listing(&buf), @r"
    0000  #1   varint   2  ac02
    0003  #2   len      2  6869
    0007  #3   bit32    4  0000002a
    0012  #4   bit64    8  3ff0000000000000
    0021  #5   varint   1  01
    0023  #6   len      0
    ");
}
