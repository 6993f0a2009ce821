use wirecursor_wire::text::decode_utf8;
use wirecursor_wire::{Varint, WireError};

use crate::error::ReadError;
use crate::scalar::{Scalar, ScalarKind};
use crate::wire_type::{FieldKey, WireType};

/// Forward-only cursor over a borrowed byte buffer.
///
/// The reader never copies or mutates the buffer. Byte and text reads
/// return slices borrowed for `'a`, so they stay valid for as long as the
/// buffer does, independent of later reads, rebinding, or release.
///
/// ```text
///   buf:  [ consumed ........ | unread ...................... ]
///         0                  pos                        buf.len()
/// ```
///
/// Every successful read advances `pos` by exactly the bytes it consumed.
/// A failed read leaves `pos` unspecified; rebind before continuing.
///
/// Lifecycle:
///
/// ```text
///   default() ──bind──▶ bound(pos) ──read/skip n──▶ bound(pos + n)
///                          │  ▲                          │
///                       release └────────bind────────────┘
///                          ▼
///                       released ──any read──▶ Err(Released)
/// ```
///
/// Independent traversals of one buffer each get their own reader; the
/// buffer is shared, the cursor is not.
#[derive(Clone, Debug, Default)]
pub struct BufferReader<'a> {
    buf: Option<&'a [u8]>,
    pos: usize,
}

impl<'a> BufferReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_offset(buf, 0)
    }

    /// Create a reader positioned at `offset`.
    ///
    /// The offset is trusted. An offset past the end is not an error here;
    /// the first read reports it as an underrun.
    #[must_use]
    pub fn with_offset(buf: &'a [u8], offset: usize) -> Self {
        Self {
            buf: Some(buf),
            pos: offset,
        }
    }

    /// Rebind to a new buffer and cursor, discarding all prior state.
    ///
    /// Also brings a released reader back into service.
    pub fn bind(&mut self, buf: &'a [u8], offset: usize) {
        tracing::trace!(len = buf.len(), offset, "bind");
        self.buf = Some(buf);
        self.pos = offset;
    }

    /// Drop the buffer reference. Every read after this returns
    /// [`ReadError::Released`] until the next [`bind`](Self::bind).
    pub fn release(&mut self) {
        tracing::trace!(pos = self.pos, "release");
        self.buf = None;
        self.pos = 0;
    }

    /// Whether the reader currently holds no buffer.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.buf.is_none()
    }

    /// Current cursor offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    ///
    /// Saturates at 0 if an unchecked [`skip`](Self::skip) moved the cursor
    /// past the end.
    ///
    /// # Errors
    ///
    /// [`ReadError::Released`] if the reader holds no buffer.
    pub fn remaining_len(&self) -> Result<usize, ReadError> {
        Ok(self.bound()?.len().saturating_sub(self.pos))
    }

    /// Whether any unread bytes are left.
    ///
    /// # Errors
    ///
    /// [`ReadError::Released`] if the reader holds no buffer.
    pub fn has_remaining(&self) -> Result<bool, ReadError> {
        Ok(self.remaining_len()? > 0)
    }

    /// The unread tail of the buffer, empty if the cursor is past the end.
    ///
    /// # Errors
    ///
    /// [`ReadError::Released`] if the reader holds no buffer.
    pub fn remaining(&self) -> Result<&'a [u8], ReadError> {
        Ok(self.bound()?.get(self.pos..).unwrap_or_default())
    }

    // ── Varints ──────────────────────────────────────────────────────────

    /// Read a raw varint and its encoded length.
    ///
    /// # Errors
    ///
    /// - [`ReadError::MalformedVarint`] if the encoding runs off the end of
    ///   the buffer or past 10 bytes.
    /// - [`ReadError::BufferUnderrun`] if the cursor is already past the end.
    /// - [`ReadError::Released`] if the reader holds no buffer.
    ///
    /// A cursor sitting exactly at the end is an empty varint, so it reports
    /// `MalformedVarint` wrapping [`WireError::UnexpectedEof`]. Only a cursor
    /// pushed beyond the end by an unchecked [`skip`](Self::skip) reports
    /// `BufferUnderrun`, naming the offset the skip landed on.
    pub fn read_varint(&mut self) -> Result<Varint, ReadError> {
        let buf = self.bound()?;
        let offset = self.pos;
        let tail = buf.get(offset..).ok_or(ReadError::BufferUnderrun {
            offset,
            needed: 1,
            available: 0,
        })?;

        let varint = Varint::decode(tail).map_err(|source| {
            tracing::debug!(offset, %source, "malformed varint");
            ReadError::MalformedVarint { offset, source }
        })?;

        self.pos += varint.byte_len;
        Ok(varint)
    }

    /// Read a varint as an unsigned integer.
    ///
    /// The full 64-bit value is returned; nothing is truncated.
    ///
    /// # Errors
    ///
    /// Same as [`read_varint`](Self::read_varint).
    pub fn read_uint(&mut self) -> Result<u64, ReadError> {
        Ok(self.read_varint()?.value)
    }

    /// Read a zigzag-encoded varint as a signed integer.
    ///
    /// # Errors
    ///
    /// Same as [`read_varint`](Self::read_varint).
    pub fn read_int(&mut self) -> Result<i64, ReadError> {
        Ok(self.read_varint()?.zigzag())
    }

    // ── Fixed-width scalars ──────────────────────────────────────────────

    /// Read a big-endian fixed-width scalar of the given kind.
    ///
    /// Advances by [`ScalarKind::byte_len`] bytes.
    ///
    /// # Errors
    ///
    /// - [`ReadError::BufferUnderrun`] if fewer bytes remain than the kind needs.
    /// - [`ReadError::Released`] if the reader holds no buffer.
    pub fn read_fixed(&mut self, kind: ScalarKind) -> Result<Scalar, ReadError> {
        Ok(match kind {
            ScalarKind::Int32 => Scalar::I32(self.read_i32()?),
            ScalarKind::Uint32 => Scalar::U32(self.read_u32()?),
            ScalarKind::Float => Scalar::F32(self.read_f32()?),
            ScalarKind::Double => Scalar::F64(self.read_f64()?),
        })
    }

    /// # Errors
    ///
    /// See [`read_fixed`](Self::read_fixed).
    pub fn read_i32(&mut self) -> Result<i32, ReadError> {
        self.read_array().map(i32::from_be_bytes)
    }

    /// # Errors
    ///
    /// See [`read_fixed`](Self::read_fixed).
    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        self.read_array().map(u32::from_be_bytes)
    }

    /// # Errors
    ///
    /// See [`read_fixed`](Self::read_fixed).
    pub fn read_f32(&mut self) -> Result<f32, ReadError> {
        self.read_array().map(f32::from_be_bytes)
    }

    /// # Errors
    ///
    /// See [`read_fixed`](Self::read_fixed).
    pub fn read_f64(&mut self) -> Result<f64, ReadError> {
        self.read_array().map(f64::from_be_bytes)
    }

    // ── Length-delimited ─────────────────────────────────────────────────

    /// Read a length-prefixed UTF-8 string.
    ///
    /// The returned `&str` borrows the buffer. The length prefix is
    /// consumed even when the text that follows fails to decode.
    ///
    /// # Errors
    ///
    /// - [`ReadError::MalformedVarint`] / [`ReadError::LengthOverflow`] for
    ///   a bad length prefix.
    /// - [`ReadError::BufferUnderrun`] if the text runs past the end.
    /// - [`ReadError::InvalidText`] if the bytes are not UTF-8.
    /// - [`ReadError::Released`] if the reader holds no buffer.
    pub fn read_str(&mut self) -> Result<&'a str, ReadError> {
        let len = self.read_len()?;
        let buf = self.bound()?;
        let offset = self.pos;

        let text = decode_utf8(buf, offset, len).map_err(|source| match source {
            WireError::InvalidUtf8 { .. } => ReadError::InvalidText { offset, source },
            _ => underrun(offset, len, buf.len().saturating_sub(offset)),
        })?;

        self.pos += len;
        Ok(text)
    }

    /// Read a length-prefixed byte run as a view into the buffer.
    ///
    /// Nothing is copied: the slice aliases the bound buffer.
    ///
    /// # Errors
    ///
    /// - [`ReadError::MalformedVarint`] / [`ReadError::LengthOverflow`] for
    ///   a bad length prefix.
    /// - [`ReadError::BufferUnderrun`] if the run extends past the end.
    /// - [`ReadError::Released`] if the reader holds no buffer.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], ReadError> {
        let len = self.read_len()?;
        self.take(len)
    }

    // ── Booleans ─────────────────────────────────────────────────────────

    /// Read a one-byte boolean: `0xFF` is `true`, `0x00` is `false`.
    ///
    /// # Errors
    ///
    /// - [`ReadError::InvalidBoolean`] for any other byte, with the byte and
    ///   its offset.
    /// - [`ReadError::BufferUnderrun`] at the end of the buffer.
    /// - [`ReadError::Released`] if the reader holds no buffer.
    pub fn read_bool(&mut self) -> Result<bool, ReadError> {
        let offset = self.pos;
        let [value] = self.read_array()?;
        match value {
            0xFF => Ok(true),
            0x00 => Ok(false),
            _ => {
                tracing::debug!(offset, value, "invalid boolean encoding");
                Err(ReadError::InvalidBoolean { value, offset })
            }
        }
    }

    // ── Skipping ─────────────────────────────────────────────────────────

    /// Advance the cursor by `byte_len` without looking at the bytes.
    ///
    /// Unchecked: moving past the end is allowed and surfaces as
    /// [`ReadError::BufferUnderrun`] on the next read.
    ///
    /// # Errors
    ///
    /// [`ReadError::Released`] if the reader holds no buffer.
    pub fn skip(&mut self, byte_len: usize) -> Result<(), ReadError> {
        self.bound()?;
        self.pos = self.pos.saturating_add(byte_len);
        Ok(())
    }

    /// Step over one complete field payload of the given wire type.
    ///
    /// ```text
    ///   Bit32           → 4 bytes
    ///   Bit64           → 8 bytes
    ///   Varint          → one full varint, value discarded
    ///   LengthDelimited → length prefix, then that many bytes
    /// ```
    ///
    /// Unlike [`skip`](Self::skip) the span is checked, so a truncated
    /// field fails here instead of at some later read.
    ///
    /// # Errors
    ///
    /// - [`ReadError::BufferUnderrun`] if the field extends past the end.
    /// - [`ReadError::MalformedVarint`] / [`ReadError::LengthOverflow`] for
    ///   a bad varint or length prefix.
    /// - [`ReadError::Released`] if the reader holds no buffer.
    pub fn skip_by_wire_type(&mut self, wire_type: WireType) -> Result<(), ReadError> {
        let len = match wire_type.fixed_len() {
            Some(len) => len,
            None if wire_type == WireType::Varint => return self.read_varint().map(|_| ()),
            None => self.read_len()?,
        };
        self.take(len).map(|_| ())
    }

    // ── Field keys ───────────────────────────────────────────────────────

    /// Read a field key varint and split it into id and wire type.
    ///
    /// # Errors
    ///
    /// - [`ReadError::UnknownWireType`] if the key's low bits name no wire type.
    /// - Anything [`read_varint`](Self::read_varint) returns.
    pub fn read_field_key(&mut self) -> Result<FieldKey, ReadError> {
        let offset = self.pos;
        let raw = self.read_uint()?;
        FieldKey::from_raw(raw).inspect_err(|_| {
            tracing::debug!(offset, raw, "unknown wire type in field key");
        })
    }

    /// Step over the payload of a field whose key was just read.
    ///
    /// # Errors
    ///
    /// See [`skip_by_wire_type`](Self::skip_by_wire_type).
    pub fn skip_field(&mut self, key: FieldKey) -> Result<(), ReadError> {
        self.skip_by_wire_type(key.wire_type)
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn bound(&self) -> Result<&'a [u8], ReadError> {
        self.buf.ok_or(ReadError::Released)
    }

    /// Read a length prefix and convert it to `usize`.
    fn read_len(&mut self) -> Result<usize, ReadError> {
        let offset = self.pos;
        let length = self.read_uint()?;
        usize::try_from(length).map_err(|_| ReadError::LengthOverflow { offset, length })
    }

    /// Borrow the next `len` bytes and advance past them.
    fn take(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        let buf = self.bound()?;
        let offset = self.pos;
        let available = buf.len().saturating_sub(offset);
        if len > available {
            return Err(underrun(offset, len, available));
        }

        self.pos += len;
        Ok(&buf[offset..offset + len])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

fn underrun(offset: usize, needed: usize, available: usize) -> ReadError {
    tracing::debug!(offset, needed, available, "buffer underrun");
    ReadError::BufferUnderrun {
        offset,
        needed,
        available,
    }
}
