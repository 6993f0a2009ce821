use std::fmt;

use crate::error::ReadError;

/// How a field's byte span is determined on the wire.
///
/// ```text
/// ┌──────┬─────────────────┬──────────────────────────────────┐
/// │ Raw  │ Type            │ Payload                          │
/// ├──────┼─────────────────┼──────────────────────────────────┤
/// │ 0    │ LengthDelimited │ Varint length + that many bytes  │
/// │ 1    │ Varint          │ Single varint                    │
/// │ 2    │ Bit64           │ 8 fixed bytes                    │
/// │ 3    │ Bit32           │ 4 fixed bytes                    │
/// └──────┴─────────────────┴──────────────────────────────────┘
/// ```
///
/// Knowing only this tag is enough to step over a field, which is how
/// readers built against an older schema skip fields added later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireType {
    LengthDelimited = 0,
    Varint = 1,
    Bit64 = 2,
    Bit32 = 3,
}

impl WireType {
    /// Number of low bits of a field key that hold the wire type.
    pub const KEY_BITS: u32 = 3;

    /// Mask selecting the wire type bits of a field key.
    pub const KEY_MASK: u64 = (1 << Self::KEY_BITS) - 1;

    /// Convert a raw tag value to a [`WireType`].
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnknownWireType`] for values outside 0..=3.
    pub fn from_raw(value: u64) -> Result<Self, ReadError> {
        match value {
            0 => Ok(Self::LengthDelimited),
            1 => Ok(Self::Varint),
            2 => Ok(Self::Bit64),
            3 => Ok(Self::Bit32),
            other => Err(ReadError::UnknownWireType { value: other }),
        }
    }

    /// The tag value stored in a field key's low bits.
    #[must_use]
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Payload size for the fixed-width types, `None` otherwise.
    #[must_use]
    pub fn fixed_len(self) -> Option<usize> {
        match self {
            Self::Bit32 => Some(4),
            Self::Bit64 => Some(8),
            Self::Varint | Self::LengthDelimited => None,
        }
    }

    /// Short lowercase name, as shown in field listings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LengthDelimited => "len",
            Self::Varint => "varint",
            Self::Bit64 => "bit64",
            Self::Bit32 => "bit32",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A decoded field key: which field follows, and how to find its end.
///
/// On the wire the key is a single varint, `(field_id << 3) | wire_type`.
/// Raw wire types 4 to 7 fit in the three low bits but name nothing, so
/// they are rejected rather than guessed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub field_id: u64,
    pub wire_type: WireType,
}

impl FieldKey {
    /// Split a raw key varint into field id and wire type.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::UnknownWireType`] if the low bits do not name
    /// a known wire type.
    pub fn from_raw(raw: u64) -> Result<Self, ReadError> {
        let wire_type = WireType::from_raw(raw & WireType::KEY_MASK)?;
        Ok(Self {
            field_id: raw >> WireType::KEY_BITS,
            wire_type,
        })
    }

    /// The raw key value this key would be written as.
    #[must_use]
    pub fn raw(self) -> u64 {
        (self.field_id << WireType::KEY_BITS) | u64::from(self.wire_type.raw())
    }
}
