use crate::error::WireError;

/// Maximum number of bytes a u64 varint can occupy.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_BYTES: usize = 10;

/// A decoded varint: the raw 64-bit pattern plus how many bytes it took.
///
/// The same bits carry two interpretations. [`Varint::value`] is the
/// unsigned magnitude; [`Varint::zigzag`] maps it back to the signed value
/// the writer started from. Neither touches the buffer again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Varint {
    /// Raw decoded value.
    pub value: u64,

    /// Encoded length in bytes (1–10).
    pub byte_len: usize,
}

impl Varint {
    /// Decode a varint from the front of `buf`.
    ///
    /// # Errors
    ///
    /// Same as [`decode_varint`].
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        let (value, byte_len) = decode_varint(buf)?;
        Ok(Self { value, byte_len })
    }

    /// Signed interpretation of the raw value.
    #[must_use]
    pub fn zigzag(self) -> i64 {
        zigzag_decode(self.value)
    }
}

/// Decode an unsigned LEB128 varint from the provided byte slice.
///
/// Each byte carries 7 payload bits, least significant group first, with
/// bit 7 set on every byte except the last.
///
/// | Encoded bytes        | Value   | Length |
/// |----------------------|---------|--------|
/// | `[0x00]`             | 0       | 1      |
/// | `[0x7F]`             | 127     | 1      |
/// | `[0x80, 0x01]`       | 128     | 2      |
/// | `[0xAC, 0x02]`       | 300     | 2      |
/// | `[0x80, 0x80, 0x01]` | 16384   | 3      |
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::VarintTooLong`] if more than 10 bytes are consumed
///   without finding a terminating byte.
/// - [`WireError::VarintOverflow`] if the 10th byte sets bits past 64.
/// - [`WireError::UnexpectedEof`] if the slice ends mid-varint.
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARINT_BYTES {
            return Err(WireError::VarintTooLong);
        }

        // Only the lowest bit of the 10th byte still fits in a u64.
        if i == MAX_VARINT_BYTES - 1 && byte & 0x7E != 0 {
            return Err(WireError::VarintOverflow { last: byte });
        }

        let data = u64::from(byte & 0x7F);
        result |= data << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    // Ran out of input while the continuation bit was still set.
    Err(WireError::UnexpectedEof { offset: buf.len() })
}

/// Map a zigzag-encoded value back to the signed integer it came from.
///
/// Zigzag interleaves signs so small magnitudes stay short on the wire:
///
/// ```text
///   encoded: 0  1   2  3   4  ...
///   decoded: 0  -1  1  -2  2  ...
/// ```
///
/// Computed as `(u >> 1) ^ -(u & 1)`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
