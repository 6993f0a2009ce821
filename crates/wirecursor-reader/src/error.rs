use wirecursor_wire::WireError;

/// Errors that can occur while reading from a [`BufferReader`].
///
/// Every variant is a hard stop. The reader does not retry or resync, and
/// its cursor is unspecified after a failure: rebind before reading again.
///
/// ```text
///   ReadError
///   ├── MalformedVarint        ← varint codec could not terminate the encoding
///   ├── BufferUnderrun         ← fixed-width, bytes, or text read past the end
///   ├── LengthOverflow         ← length prefix larger than usize
///   ├── InvalidText            ← text run is not UTF-8
///   ├── InvalidBoolean         ← byte other than 0x00 / 0xFF
///   ├── UnknownWireType        ← raw wire type outside 0..=3
///   ├── UnsupportedScalarKind  ← scalar kind name not recognised
///   └── Released               ← reader released or never bound
/// ```
///
/// [`BufferReader`]: crate::BufferReader
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The varint starting at `offset` did not terminate within the buffer.
    #[error("malformed varint at offset {offset}")]
    MalformedVarint {
        offset: usize,
        #[source]
        source: WireError,
    },

    /// A read needed more bytes than remain after `offset`.
    #[error("buffer underrun at offset {offset}: needed {needed} bytes, {available} available")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A length prefix read at `offset` does not fit in `usize`.
    #[error("length prefix {length} at offset {offset} exceeds addressable size")]
    LengthOverflow { offset: usize, length: u64 },

    /// The text run starting at `offset` failed UTF-8 decoding.
    #[error("invalid text at offset {offset}")]
    InvalidText {
        offset: usize,
        #[source]
        source: WireError,
    },

    /// A boolean byte was neither `0x00` nor `0xFF`.
    #[error("invalid boolean encoding [{value:#04X}] at offset {offset}")]
    InvalidBoolean { value: u8, offset: usize },

    /// A raw wire type did not match any known [`WireType`](crate::WireType).
    #[error("unknown wire type: {value}")]
    UnknownWireType { value: u64 },

    /// A scalar kind name did not match any known [`ScalarKind`](crate::ScalarKind).
    #[error("unsupported scalar kind: {name:?}")]
    UnsupportedScalarKind { name: String },

    /// The reader was released, or has not been bound yet.
    #[error("reader has been released")]
    Released,
}
