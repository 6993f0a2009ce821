#![warn(clippy::pedantic)]

//! Test-only fixture writer for the wirecursor workspace.
//!
//! The production crates only read. Integration tests, benches, and the
//! fuzz round-trip targets build their input bytes with [`FieldWriter`],
//! which emits exactly the layout `BufferReader` expects:
//!
//! ```text
//!   varint            base-128, low group first, 0x80 continuation bit
//!   zigzag            (v << 1) ^ (v >> 63), then varint
//!   fixed scalars     big-endian, 4 or 8 bytes
//!   bool              0xFF / 0x00
//!   str / bytes       varint length + raw bytes
//!   field key         varint((field_id << 3) | wire_type)
//! ```

use wirecursor_reader::{FieldKey, WireType};

/// Maximum varint size in bytes.
const MAX_VARINT_LEN: usize = 10;

/// Encode a `u64` value as an unsigned LEB128 varint into `buf`.
///
/// Returns the number of bytes written (1–10).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A 10-byte buffer is always sufficient for any `u64`.
pub fn encode_varint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        // Take the lowest 7 bits
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value > 0 {
            // More bytes to come: set the continuation bit
            byte |= 0x80;
        }

        buf[i] = byte;
        i += 1;

        if value == 0 {
            break;
        }
    }
    i
}

/// Writer-side zigzag mapping, the inverse of
/// [`wirecursor_wire::varint::zigzag_decode`].
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Append-only builder for wire-format byte fixtures.
///
/// Methods chain, and [`finish`](Self::finish) hands back the bytes.
///
/// ```rust
/// use wirecursor_tests::FieldWriter;
///
/// let bytes = FieldWriter::new().uint(300).str("hi").finish();
/// assert_eq!(bytes, [0xAC, 0x02, 0x02, b'h', b'i']);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FieldWriter {
    buf: Vec<u8>,
}

impl FieldWriter {
    /// An empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Primitive values ──────────────────────────────────────────────

    /// Append an unsigned varint.
    #[must_use]
    pub fn uint(mut self, value: u64) -> Self {
        let mut scratch = [0u8; MAX_VARINT_LEN];
        let n = encode_varint(value, &mut scratch);
        self.buf.extend_from_slice(&scratch[..n]);
        self
    }

    /// Append a zigzag-encoded signed varint.
    #[must_use]
    pub fn int(self, value: i64) -> Self {
        self.uint(zigzag_encode(value))
    }

    /// Append a big-endian `i32`.
    #[must_use]
    pub fn i32(mut self, value: i32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Append a big-endian `u32`.
    #[must_use]
    pub fn u32(mut self, value: u32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Append a big-endian `f32`.
    #[must_use]
    pub fn f32(mut self, value: f32) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Append a big-endian `f64`.
    #[must_use]
    pub fn f64(mut self, value: f64) -> Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    /// Append a boolean byte: `0xFF` or `0x00`.
    #[must_use]
    pub fn bool(mut self, value: bool) -> Self {
        self.buf.push(if value { 0xFF } else { 0x00 });
        self
    }

    /// Append a varint length prefix followed by `data`.
    #[must_use]
    pub fn bytes(self, data: &[u8]) -> Self {
        let mut this = self.uint(data.len() as u64);
        this.buf.extend_from_slice(data);
        this
    }

    /// Append a length-prefixed UTF-8 string.
    #[must_use]
    pub fn str(self, text: &str) -> Self {
        self.bytes(text.as_bytes())
    }

    /// Append bytes verbatim, for deliberately malformed fixtures.
    #[must_use]
    pub fn raw(mut self, data: &[u8]) -> Self {
        self.buf.extend_from_slice(data);
        self
    }

    // ── Keyed fields ──────────────────────────────────────────────────

    /// Append a field key for `field_id` and `wire_type`.
    #[must_use]
    pub fn key(self, field_id: u64, wire_type: WireType) -> Self {
        self.uint(FieldKey { field_id, wire_type }.raw())
    }

    /// Append a varint field.
    #[must_use]
    pub fn varint_field(self, field_id: u64, value: u64) -> Self {
        self.key(field_id, WireType::Varint).uint(value)
    }

    /// Append a varint field holding a zigzag-encoded value.
    #[must_use]
    pub fn sint_field(self, field_id: u64, value: i64) -> Self {
        self.key(field_id, WireType::Varint).int(value)
    }

    /// Append a 4-byte field.
    #[must_use]
    pub fn bit32_field(self, field_id: u64, value: u32) -> Self {
        self.key(field_id, WireType::Bit32).u32(value)
    }

    /// Append an 8-byte field holding an `f64`.
    #[must_use]
    pub fn bit64_field(self, field_id: u64, value: f64) -> Self {
        self.key(field_id, WireType::Bit64).f64(value)
    }

    /// Append a length-delimited field.
    #[must_use]
    pub fn bytes_field(self, field_id: u64, data: &[u8]) -> Self {
        self.key(field_id, WireType::LengthDelimited).bytes(data)
    }

    /// Append a length-delimited field holding text.
    #[must_use]
    pub fn str_field(self, field_id: u64, text: &str) -> Self {
        self.bytes_field(field_id, text.as_bytes())
    }

    /// Take the encoded bytes.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
