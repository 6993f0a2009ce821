#![warn(clippy::pedantic)]

//! Leaf codecs for the wirecursor wire format.
//!
//! Two primitives live here and nothing else: the base-128 varint decoder
//! (with its zigzag companion) and the UTF-8 text decoder. Both take a
//! borrowed slice and report exactly how much of it they used, so the
//! cursor in `wirecursor-reader` can advance without ever copying.

pub mod error;
pub mod text;
pub mod varint;

pub use error::WireError;
pub use varint::Varint;
