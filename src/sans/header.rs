//! States processing the document header.

use core::marker::PhantomData;

use either::Either::{self, Left, Right};
use zerocopy::FromBytes;

use crate::format::{self, DataType, HEADER_LENGTH, MAGIC_LENGTH, MAX_DIMS};

use super::data::{AnyElement, Element, Raw};

/// The metadata carried by a document header.
///
/// A freshly initialized header (before any bytes have been decoded) holds
/// all-zero dimensions and [`DataType::Invalid`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Header {
    /// Declared format version. Read but never checked during decoding.
    pub version: u8,
    /// Declared element type. Unrecognized bytes parse as
    /// [`DataType::Invalid`].
    pub dtype: DataType,
    /// Dimension sizes; a zero marks a dimension as unused.
    pub dims: [u16; MAX_DIMS],
}

impl Header {
    /// The number of dimensions of this shape.
    ///
    /// Dimensions are meaningful only as a contiguous non-zero prefix. A
    /// non-zero dimension appearing after a zero one leaves the shape
    /// undetermined, reported as 0 rather than an error.
    pub fn rank(&self) -> usize {
        let prefix = self.dims.iter().position(|&d| d == 0).unwrap_or(MAX_DIMS);

        if self.dims[prefix..].iter().all(|&d| d == 0) {
            prefix
        } else {
            0
        }
    }

    /// The number of payload elements this shape implies.
    ///
    /// An undetermined shape implies no elements.
    pub fn elements(&self) -> usize {
        match self.rank() {
            0 => 0,
            rank => self.dims[..rank].iter().map(|&d| d as usize).product(),
        }
    }

    /// Map a flat item number to its row and column in a 2-dimensional shape.
    ///
    /// Returns `None` for shapes of any other rank. The item number is not
    /// checked against the shape's extent; an out-of-range item produces an
    /// out-of-range row.
    pub fn coord_2d(&self, item: usize) -> Option<(usize, usize)> {
        if self.rank() != 2 {
            return None;
        }

        let width = self.dims[1] as usize;

        Some((item / width, item % width))
    }
}

/// State token to decode a document header.
#[derive(Debug)]
pub struct ArrayHeader;

impl ArrayHeader {
    /// Transition to another state by decoding a complete document header.
    ///
    /// The magic marker and version are read but not checked against their
    /// expected values; callers wanting validation must inspect the returned
    /// [`Header`] (and the raw marker bytes) themselves. The successor is a
    /// typed element state when the declared element type is a known numeric
    /// type, and a raw passthrough state otherwise.
    pub fn advance(r: [u8; HEADER_LENGTH]) -> (Header, Either<AnyElement, Element<Raw>>) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawHeader {
            _magic: [u8; MAGIC_LENGTH],
            version: u8,
            dtype: u8,
            dim0: [u8; 2],
            dim1: [u8; 2],
            dim2: [u8; 2],
            dim3: [u8; 2],
            _end: u8,
        }

        let RawHeader {
            version,
            dtype,
            dim0,
            dim1,
            dim2,
            dim3,
            ..
        } = zerocopy::transmute!(r);

        let header = Header {
            version,
            dtype: DataType::from_byte(dtype),
            dims: [
                format::read_u16(dim0),
                format::read_u16(dim1),
                format::read_u16(dim2),
                format::read_u16(dim3),
            ],
        };

        fn new_element<T>() -> Element<T> {
            Element {
                item: 0,
                _phantom: PhantomData,
            }
        }

        let successor = match header.dtype {
            DataType::Float32 => Left(AnyElement::F32(new_element())),
            DataType::Int32 => Left(AnyElement::I32(new_element())),
            DataType::Invalid => Right(new_element()),
        };

        (header, successor)
    }
}
