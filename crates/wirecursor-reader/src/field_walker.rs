use crate::buffer_reader::BufferReader;
use crate::error::ReadError;
use crate::wire_type::{FieldKey, WireType};

/// A raw field before any schema-specific interpretation.
///
/// Produced by [`FieldWalker::next_field`]. `payload` is the field's
/// exact byte span:
///
///   - `Varint`: the varint bytes themselves.
///   - `Bit32` / `Bit64`: the 4 or 8 fixed bytes.
///   - `LengthDelimited`: the bytes after the length prefix.
///
/// Use [`RawField::reader`] to decode the payload with the usual
/// [`BufferReader`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawField<'a> {
  pub key: FieldKey,
  /// Offset of the field key in the walked buffer.
  pub offset: usize,
  pub payload: &'a [u8],
}

impl<'a> RawField<'a> {
  /// A fresh reader over just this field's payload.
  #[must_use]
  pub fn reader(&self) -> BufferReader<'a> {
    BufferReader::new(self.payload)
  }
}

/// Cursor-based walker over a buffer of concatenated fields.
///
/// Each step reads a field key and then steps over the payload using only
/// the key's wire type, so fields with unknown ids are traversed exactly
/// like known ones.
///
/// # Usage pattern
///
/// ```text
///   let mut walker = FieldWalker::new(buf);
///   while let Some(field) = walker.next_field()? {
///       match field.key.field_id {
///           1 => { /* read field.reader() */ }
///           _ => { /* ignore unknown */ }
///       }
///   }
/// ```
///
/// It also implements [`Iterator`], yielding `Result<RawField, ReadError>`
/// and stopping after the first error.
pub struct FieldWalker<'a> {
  buf: &'a [u8],
  reader: BufferReader<'a>,
  failed: bool,
}

impl<'a> FieldWalker<'a> {
  /// Walk `buf` from the start.
  #[must_use]
  pub fn new(buf: &'a [u8]) -> Self {
    Self::with_offset(buf, 0)
  }

  /// Walk `buf` starting at `offset`.
  #[must_use]
  pub fn with_offset(buf: &'a [u8], offset: usize) -> Self {
    Self {
      buf,
      reader: BufferReader::with_offset(buf, offset),
      failed: false,
    }
  }

  /// Read the next field.
  ///
  /// Returns `Ok(None)` once the cursor sits exactly at the end of the
  /// buffer.
  ///
  /// # Errors
  ///
  /// Returns [`ReadError`] if the key is malformed, names an unknown wire
  /// type, or the payload runs past the end of the buffer.
  pub fn next_field(&mut self) -> Result<Option<RawField<'a>>, ReadError> {
    if !self.reader.has_remaining()? {
      if self.reader.position() > self.buf.len() {
        return Err(ReadError::BufferUnderrun {
          offset: self.reader.position(),
          needed: 1,
          available: 0,
        });
      }
      return Ok(None);
    }

    let offset = self.reader.position();
    let key = self.reader.read_field_key()?;

    let payload = match key.wire_type {
      // The view after the length prefix
      WireType::LengthDelimited => self.reader.read_bytes()?,
      WireType::Varint | WireType::Bit32 | WireType::Bit64 => {
        let start = self.reader.position();
        self.reader.skip_by_wire_type(key.wire_type)?;
        &self.buf[start..self.reader.position()]
      }
    };

    Ok(Some(RawField {
      key,
      offset,
      payload,
    }))
  }

  /// Return the number of bytes consumed so far.
  #[must_use]
  pub fn position(&self) -> usize {
    self.reader.position()
  }

  /// Return the remaining unread bytes.
  #[must_use]
  pub fn remaining(&self) -> &'a [u8] {
    self.buf.get(self.reader.position()..).unwrap_or_default()
  }
}

impl<'a> Iterator for FieldWalker<'a> {
  type Item = Result<RawField<'a>, ReadError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed {
      return None;
    }
    let item = self.next_field().transpose();
    if matches!(item, Some(Err(_))) {
      self.failed = true;
    }
    item
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_buffer_returns_none() {
    let mut walker = FieldWalker::new(&[]);
    assert!(walker.next_field().unwrap().is_none());
  }

  #[test]
  fn reads_varint_field() {
    // field 1, Varint: key 0x09, value 150
    let buf = [0x09, 0x96, 0x01];
    let mut walker = FieldWalker::new(&buf);
    let field = walker.next_field().unwrap().unwrap();
    assert_eq!(field.key.field_id, 1);
    assert_eq!(field.key.wire_type, WireType::Varint);
    assert_eq!(field.offset, 0);
    assert_eq!(field.payload, &[0x96, 0x01]);
    assert_eq!(field.reader().read_uint().unwrap(), 150);

    assert!(walker.next_field().unwrap().is_none());
  }

  #[test]
  fn reads_length_delimited_field() {
    // field 2, LengthDelimited: key 0x10
    let buf = [0x10, 0x05, b'h', b'e', b'l', b'l', b'o'];
    let mut walker = FieldWalker::new(&buf);
    let field = walker.next_field().unwrap().unwrap();
    assert_eq!(field.key.field_id, 2);
    assert_eq!(field.payload, b"hello");
    assert!(walker.next_field().unwrap().is_none());
  }

  #[test]
  fn reads_fixed_fields() {
    // field 3 Bit32 (0x1B), field 4 Bit64 (0x22)
    let buf = [
      0x1B, 0x00, 0x00, 0x00, 0x2A, //
      0x22, 1, 2, 3, 4, 5, 6, 7, 8,
    ];
    let mut walker = FieldWalker::new(&buf);

    let f = walker.next_field().unwrap().unwrap();
    assert_eq!(f.key.wire_type, WireType::Bit32);
    assert_eq!(f.reader().read_u32().unwrap(), 42);

    let f = walker.next_field().unwrap().unwrap();
    assert_eq!(f.key.field_id, 4);
    assert_eq!(f.offset, 5);
    assert_eq!(f.payload, &[1, 2, 3, 4, 5, 6, 7, 8]);

    assert!(walker.next_field().unwrap().is_none());
    assert_eq!(walker.position(), buf.len());
    assert!(walker.remaining().is_empty());
  }

  #[test]
  fn truncated_payload_errors() {
    let buf = [0x1B, 0x00, 0x00];
    let mut walker = FieldWalker::new(&buf);
    assert!(matches!(
      walker.next_field(),
      Err(ReadError::BufferUnderrun { offset: 1, needed: 4, available: 2 })
    ));
  }

  #[test]
  fn iterator_stops_after_error() {
    // a good varint field, then a key with wire type 7
    let buf = [0x09, 0x01, 0x0F, 0x00];
    let results: Vec<_> = FieldWalker::new(&buf).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(results[1], Err(ReadError::UnknownWireType { value: 7 }));
  }

  #[test]
  fn offset_past_end_is_an_underrun() {
    let buf = [0x08, 0x01];
    let mut walker = FieldWalker::with_offset(&buf, 4);
    assert!(matches!(
      walker.next_field(),
      Err(ReadError::BufferUnderrun { offset: 4, .. })
    ));
  }
}
