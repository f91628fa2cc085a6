//! Constants and scalar decoders defining the wire format.
//!
//! A document is a fixed-length header followed by a flat payload of 4-byte
//! numeric elements. All multi-byte numeric fields, in the header and in the
//! payload alike, are stored most-significant byte first.

/// Marker bytes opening every document.
pub const MAGIC: [u8; MAGIC_LENGTH] = *b"\x93EMLEARN";

/// Length of the opening marker, in bytes.
pub const MAGIC_LENGTH: usize = 8;

/// The format version this crate decodes.
pub const VERSION: u8 = 1;

/// Maximum number of dimensions a header can carry.
pub const MAX_DIMS: usize = 4;

/// Total header length in bytes: the marker, a version byte, an element type
/// byte, one 16-bit size per dimension, and a final end-of-header byte.
pub const HEADER_LENGTH: usize = MAGIC_LENGTH + 1 + 1 + 2 * MAX_DIMS + 1;

/// Width of a payload element, in bytes.
pub const ELEMENT_LENGTH: usize = 4;

/// The element type declared in a header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    #[default]
    Invalid = 0,
    Float32 = 1,
    Int32 = 2,
}

impl DataType {
    /// Interpret a header's element type byte.
    ///
    /// Unrecognized values map to [`DataType::Invalid`].
    pub fn from_byte(r: u8) -> Self {
        match r {
            1 => Self::Float32,
            2 => Self::Int32,
            _ => Self::Invalid,
        }
    }
}

/// Decode a 16-bit unsigned integer, most-significant byte first.
pub fn read_u16(r: [u8; 2]) -> u16 {
    u16::from_be_bytes(r)
}

/// Decode a 32-bit signed integer, most-significant byte first.
pub fn read_i32(r: [u8; ELEMENT_LENGTH]) -> i32 {
    i32::from_be_bytes(r)
}

/// Decode a 32-bit float, most-significant byte first.
///
/// The four bytes are assembled as an integer and reinterpreted bit-for-bit.
pub fn read_f32(r: [u8; ELEMENT_LENGTH]) -> f32 {
    f32::from_bits(u32::from_be_bytes(r))
}
