//! Convenience interfaces for common decoding patterns.
//!
//! The decoders in this module publish to the [`FromElements`] trait. Three
//! are provided:
//!
//! - [`StreamDecoder`], for decoding incrementally as bytes arrive in chunks
//! of arbitrary size (for example, from a slow transport or a flash read).
//! It performs no validation and never fails; checking the header is the
//! caller's responsibility.
//!
//! - [`decode_slice`] and [`decode_reader`], for decoding a complete
//! document in one call. These additionally apply the header checks a
//! caller of [`StreamDecoder`] would perform themselves.

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;
pub mod stream;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;
pub use stream::StreamDecoder;

use crate::{format::ELEMENT_LENGTH, sans::header::Header};

/// Receive decoded elements from a document.
///
/// The header is published once, as soon as its final byte has been
/// consumed. Each payload element is then published twice: first as its raw
/// bytes, then as the primitive corresponding to the header's declared
/// element type. Elements of an invalid or unrecognized type are published
/// as raw bytes only.
///
/// The default implementation of each method ignores received values.
#[allow(unused_variables)]
pub trait FromElements {
    /// Receive the parsed document header.
    fn add_header(&mut self, header: &Header) {}

    /// Receive the raw bytes of an element.
    fn add_bytes(&mut self, item: u32, r: [u8; ELEMENT_LENGTH]) {}

    /// Receive a `float32` element.
    fn add_f32(&mut self, item: u32, value: f32) {}

    /// Receive an `int32` element.
    fn add_i32(&mut self, item: u32, value: i32) {}
}
