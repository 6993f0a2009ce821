/// Errors raised by the leaf codecs.
///
/// Offsets are relative to the slice handed to the codec, not to the
/// enclosing buffer. `wirecursor-reader` adds the absolute cursor
/// position when it wraps these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// Varint encoding exceeded 10 bytes without terminating.
    #[error("varint too long: exceeded 10-byte limit")]
    VarintTooLong,

    /// The 10th byte of a varint carried bits beyond the 64th.
    #[error("varint overflows 64 bits (final byte {last:#04X})")]
    VarintOverflow { last: u8 },

    /// Input ended before a complete varint or text run could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A text run was not valid UTF-8.
    ///
    /// `valid_up_to` counts the bytes of the run that decoded cleanly
    /// before the first bad sequence.
    #[error("invalid UTF-8 at offset {offset} (valid up to {valid_up_to} bytes)")]
    InvalidUtf8 { offset: usize, valid_up_to: usize },
}
