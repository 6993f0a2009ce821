//! Edge case integration tests for `BufferReader`.
//!
//! Categories covered:
//!
//! - **Zigzag**: signed values written by the fixture writer read back
//!   unchanged across the whole `i64` range, including both extremes.
//! - **Strict booleans**: only `0x00` and `0xFF` are legal; every other
//!   byte is reported with its value and offset.
//! - **Length-delimited**: text and byte runs advance the cursor by prefix
//!   plus payload, and byte views alias the source buffer.
//! - **Fixed-width**: big-endian scalars, including the 8-byte double.
//! - **Lifecycle**: release blocks every operation; rebinding restores it;
//!   independent readers share one buffer.

use wirecursor_reader::{BufferReader, ReadError, Scalar, ScalarKind, WireType};
use wirecursor_tests::{FieldWriter, zigzag_encode};
use wirecursor_wire::varint::zigzag_decode;

// ── Zigzag ────────────────────────────────────────────────────────────────────

#[test]
fn zigzag_roundtrips_signed_values() {
    let mut values = vec![0, 1, -1, 2, -2, 63, -64, 64, -65, 8191, -8192];
    values.extend([i64::from(i32::MAX), i64::from(i32::MIN), i64::MAX, i64::MIN]);
    // Powers of two and their neighbours across the full width
    for shift in 0..63 {
        let p = 1i64 << shift;
        values.extend([p - 1, p, p + 1, -p, -p - 1]);
    }

    for &v in &values {
        assert_eq!(zigzag_decode(zigzag_encode(v)), v, "zigzag failed for {v}");
    }

    let mut writer = FieldWriter::new();
    for &v in &values {
        writer = writer.int(v);
    }
    let buf = writer.finish();

    let mut reader = BufferReader::new(&buf);
    for &v in &values {
        assert_eq!(reader.read_int().unwrap(), v);
    }
    assert_eq!(reader.remaining_len().unwrap(), 0);
}

#[test]
fn small_negatives_stay_short() {
    let buf = FieldWriter::new().int(-64).finish();
    assert_eq!(buf.len(), 1);
    let buf = FieldWriter::new().int(-65).finish();
    assert_eq!(buf.len(), 2);
}

#[test]
fn unsigned_reads_keep_64_bits() {
    let buf = FieldWriter::new()
        .uint(u64::MAX)
        .uint(1 << 53)
        .uint((1 << 53) + 1)
        .finish();
    let mut reader = BufferReader::new(&buf);
    assert_eq!(reader.read_uint().unwrap(), u64::MAX);
    assert_eq!(reader.read_uint().unwrap(), 1 << 53);
    assert_eq!(reader.read_uint().unwrap(), (1 << 53) + 1);
}

// ── Strict booleans ───────────────────────────────────────────────────────────

#[test]
fn boolean_legal_encodings() {
    let mut reader = BufferReader::new(&[0x00, 0xFF]);
    assert!(!reader.read_bool().unwrap());
    assert!(reader.read_bool().unwrap());
    assert_eq!(reader.position(), 2);
}

#[test]
fn boolean_illegal_encodings_name_byte_and_offset() {
    let buf = [0xFF, 0x00, 0x01, 0x80, 0x7F];
    for (offset, &value) in buf.iter().enumerate().skip(2) {
        let mut reader = BufferReader::with_offset(&buf, offset);
        assert_eq!(
            reader.read_bool(),
            Err(ReadError::InvalidBoolean { value, offset })
        );
    }
}

#[test]
fn every_non_boolean_byte_is_rejected() {
    for value in 0x01..=0xFEu8 {
        let mut reader = BufferReader::new(std::slice::from_ref(&value));
        assert!(
            matches!(reader.read_bool(), Err(ReadError::InvalidBoolean { offset: 0, .. })),
            "byte {value:#04X} was accepted"
        );
    }
}

// ── Length-delimited ──────────────────────────────────────────────────────────

#[test]
fn read_str_hello_advances_six() {
    let buf = [0x05, b'h', b'e', b'l', b'l', b'o'];
    let mut reader = BufferReader::new(&buf);
    assert_eq!(reader.read_str().unwrap(), "hello");
    assert_eq!(reader.position(), 6);
}

#[test]
fn read_str_multi_byte_prefix() {
    let text = "é".repeat(100);
    let buf = FieldWriter::new().str(&text).finish();
    // 200 bytes of text need a 2-byte prefix
    assert_eq!(buf.len(), 202);
    let mut reader = BufferReader::new(&buf);
    assert_eq!(reader.read_str().unwrap(), text);
    assert_eq!(reader.position(), 202);
}

#[test]
fn read_bytes_returns_aliasing_view() {
    let payload: Vec<u8> = (0..=255).collect();
    let buf = FieldWriter::new().bytes(&payload).finish();
    let prefix = buf.len() - payload.len();

    let mut reader = BufferReader::new(&buf);
    let view = reader.read_bytes().unwrap();
    assert_eq!(view.len(), payload.len());
    assert_eq!(view, &buf[prefix..]);
    assert!(std::ptr::eq(view, &buf[prefix..]));
}

#[test]
fn views_survive_rebinding() {
    let first = FieldWriter::new().str("first").finish();
    let second = FieldWriter::new().str("second").finish();

    let mut reader = BufferReader::new(&first);
    let a = reader.read_str().unwrap();
    reader.bind(&second, 0);
    let b = reader.read_str().unwrap();
    reader.release();

    assert_eq!(a, "first");
    assert_eq!(b, "second");
}

// ── Fixed-width ───────────────────────────────────────────────────────────────

#[test]
fn read_fixed_double_pi_ish() {
    let buf = FieldWriter::new().f64(3.14159).finish();
    let mut reader = BufferReader::new(&buf);
    let value = reader.read_fixed(ScalarKind::Double).unwrap();
    assert!((value.as_f64() - 3.14159).abs() < 1e-12);
    assert_eq!(reader.position(), 8);
}

#[test]
fn read_fixed_all_kinds() {
    let buf = FieldWriter::new()
        .i32(i32::MIN)
        .u32(u32::MAX)
        .f32(-0.25)
        .f64(f64::MAX)
        .finish();
    let mut reader = BufferReader::new(&buf);
    assert_eq!(reader.read_fixed(ScalarKind::Int32).unwrap(), Scalar::I32(i32::MIN));
    assert_eq!(reader.read_fixed(ScalarKind::Uint32).unwrap(), Scalar::U32(u32::MAX));
    assert_eq!(reader.read_fixed(ScalarKind::Float).unwrap(), Scalar::F32(-0.25));
    assert_eq!(reader.read_fixed(ScalarKind::Double).unwrap(), Scalar::F64(f64::MAX));
    assert_eq!(reader.remaining_len().unwrap(), 0);
}

#[test]
fn fixed_kinds_parse_from_names() {
    let kinds: Vec<ScalarKind> = ["int32", "uint32", "float", "double"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let total: usize = kinds.iter().map(|k| k.byte_len()).sum();
    assert_eq!(total, 20);

    assert!(matches!(
        "sfixed64".parse::<ScalarKind>(),
        Err(ReadError::UnsupportedScalarKind { .. })
    ));
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[test]
fn every_operation_fails_after_release() {
    let buf = FieldWriter::new().uint(1).str("x").bool(true).finish();
    let mut reader = BufferReader::new(&buf);
    reader.release();

    let results: Vec<Result<(), ReadError>> = vec![
        reader.read_varint().map(|_| ()),
        reader.read_uint().map(|_| ()),
        reader.read_int().map(|_| ()),
        reader.read_fixed(ScalarKind::Int32).map(|_| ()),
        reader.read_fixed(ScalarKind::Uint32).map(|_| ()),
        reader.read_fixed(ScalarKind::Float).map(|_| ()),
        reader.read_fixed(ScalarKind::Double).map(|_| ()),
        reader.read_str().map(|_| ()),
        reader.read_bytes().map(|_| ()),
        reader.read_bool().map(|_| ()),
        reader.skip(1),
        reader.skip_by_wire_type(WireType::Bit32),
        reader.skip_by_wire_type(WireType::Bit64),
        reader.skip_by_wire_type(WireType::Varint),
        reader.skip_by_wire_type(WireType::LengthDelimited),
        reader.read_field_key().map(|_| ()),
        reader.remaining_len().map(|_| ()),
    ];

    for (i, result) in results.into_iter().enumerate() {
        assert_eq!(result, Err(ReadError::Released), "operation {i} ran after release");
    }
}

#[test]
fn independent_readers_share_a_buffer() {
    let buf = FieldWriter::new().uint(10).uint(20).uint(30).finish();
    let mut a = BufferReader::new(&buf);
    let mut b = BufferReader::new(&buf);

    assert_eq!(a.read_uint().unwrap(), 10);
    assert_eq!(a.read_uint().unwrap(), 20);
    assert_eq!(b.read_uint().unwrap(), 10);
    assert_eq!(a.read_uint().unwrap(), 30);
    assert_eq!(b.read_uint().unwrap(), 20);
    assert_eq!(a.remaining_len().unwrap(), 0);
    assert_eq!(b.remaining_len().unwrap(), 1);
}

#[test]
fn cloned_reader_forks_the_cursor() {
    let buf = FieldWriter::new().uint(1).uint(2).finish();
    let mut reader = BufferReader::new(&buf);
    reader.read_uint().unwrap();

    let mut fork = reader.clone();
    assert_eq!(fork.read_uint().unwrap(), 2);
    assert_eq!(reader.position(), 1);
    assert_eq!(reader.read_uint().unwrap(), 2);
}
