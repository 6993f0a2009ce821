#![warn(clippy::pedantic)]

//! Forward-only cursor over a buffer of protobuf-style fields.
//!
//! [`BufferReader`] borrows a byte slice and hands out typed values read
//! left to right: varints, zigzag integers, big-endian fixed-width
//! scalars, length-prefixed text and byte views, and strict booleans.
//! [`FieldWalker`] sits on top of it and steps over whole fields using
//! only their wire type, which is what lets a consumer skip fields it
//! does not know about.
//!
//! ```rust
//! use wirecursor_reader::{BufferReader, WireType};
//!
//! // uint 300, zigzag -2, "hi", then a 4-byte field we don't care about
//! let buf = [0xAC, 0x02, 0x03, 0x02, b'h', b'i', 0, 0, 0, 7];
//! let mut reader = BufferReader::new(&buf);
//!
//! assert_eq!(reader.read_uint().unwrap(), 300);
//! assert_eq!(reader.read_int().unwrap(), -2);
//! assert_eq!(reader.read_str().unwrap(), "hi");
//! reader.skip_by_wire_type(WireType::Bit32).unwrap();
//! assert_eq!(reader.remaining_len().unwrap(), 0);
//! ```

pub mod buffer_reader;
pub mod error;
pub mod field_walker;
pub mod scalar;
pub mod wire_type;

pub use buffer_reader::BufferReader;
pub use error::ReadError;
pub use field_walker::{FieldWalker, RawField};
pub use scalar::{Scalar, ScalarKind};
pub use wire_type::{FieldKey, WireType};
