use crate::error::WireError;

/// Decode `len` bytes of `buf` starting at `offset` as UTF-8.
///
/// The returned `&str` borrows `buf`; no bytes are copied.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if `offset + len` runs past the end of
///   `buf`. The reported offset is `buf.len()`.
/// - [`WireError::InvalidUtf8`] if the run is not well-formed UTF-8.
pub fn decode_utf8(buf: &[u8], offset: usize, len: usize) -> Result<&str, WireError> {
    let end = offset
        .checked_add(len)
        .filter(|&end| end <= buf.len())
        .ok_or(WireError::UnexpectedEof { offset: buf.len() })?;

    std::str::from_utf8(&buf[offset..end]).map_err(|e| WireError::InvalidUtf8 {
        offset,
        valid_up_to: e.valid_up_to(),
    })
}
