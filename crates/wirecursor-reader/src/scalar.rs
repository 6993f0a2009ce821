use std::fmt;
use std::str::FromStr;

use crate::error::ReadError;

/// Fixed-width scalar kinds understood by [`BufferReader::read_fixed`].
///
/// All are stored big-endian.
///
/// | Kind     | Bytes | Rust type |
/// |----------|-------|-----------|
/// | `Int32`  | 4     | `i32`     |
/// | `Uint32` | 4     | `u32`     |
/// | `Float`  | 4     | `f32`     |
/// | `Double` | 8     | `f64`     |
///
/// [`BufferReader::read_fixed`]: crate::BufferReader::read_fixed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int32,
    Uint32,
    Float,
    Double,
}

impl ScalarKind {
    /// Encoded width in bytes.
    #[must_use]
    pub fn byte_len(self) -> usize {
        match self {
            Self::Int32 | Self::Uint32 | Self::Float => 4,
            Self::Double => 8,
        }
    }

    /// Name accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = ReadError;

    /// Parse a kind name as it appears in schemas and on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int32" => Ok(Self::Int32),
            "uint32" => Ok(Self::Uint32),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            other => Err(ReadError::UnsupportedScalarKind {
                name: other.to_owned(),
            }),
        }
    }
}

/// A fixed-width value read by [`BufferReader::read_fixed`].
///
/// [`BufferReader::read_fixed`]: crate::BufferReader::read_fixed
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
}

impl Scalar {
    /// Widen to `f64`. Lossless for every variant.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::I32(v) => f64::from(v),
            Self::U32(v) => f64::from(v),
            Self::F32(v) => f64::from(v),
            Self::F64(v) => v,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
        }
    }
}
