//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Read;

use either::Either::{Left, Right};
use thiserror::Error;

use crate::{
    format::{HEADER_LENGTH, MAGIC, MAGIC_LENGTH, VERSION},
    sans::{
        Decoder,
        data::{AnyElement, Element, ElementInner},
    },
};

use super::FromElements;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Incorrect magic marker.
    #[error("Incorrect magic marker.")]
    NotArrayData,
    /// Unknown format version.
    #[error("Unknown format version ({0}).")]
    UnknownVersion(u8),
    /// Invalid or unrecognized element type.
    #[error("Invalid or unrecognized element type ({0}).")]
    UnsupportedElementType(u8),
}

/// Decode a complete document from a reader, publishing to a receiver.
///
/// This method is also re-exported as `tenstream::avec::decode_reader`.
///
/// Unlike [`StreamDecoder`](super::StreamDecoder), this decoder applies the
/// caller-side header checks: the magic marker, version, and element type
/// must all be recognized. Exactly the number of elements implied by the
/// header's shape is decoded; the reader is left positioned after them.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromElements) -> Result<(), Error> {
    let head: [u8; HEADER_LENGTH] = take(r)?;

    if head[..MAGIC_LENGTH] != MAGIC {
        Err(Error::NotArrayData)?;
    }

    let (header, successor) = Decoder::advance(head);

    if header.version != VERSION {
        Err(Error::UnknownVersion(header.version))?;
    }

    let state = match successor {
        Left(state) => state,
        Right(_) => Err(Error::UnsupportedElementType(head[MAGIC_LENGTH + 1]))?,
    };

    o.add_header(&header);

    let remaining = header.elements();

    fn decode_elements<T: ElementInner, O: FromElements>(
        mut state: Element<T>,
        remaining: usize,
        r: &mut impl Read,

        o: &mut O,
        add: fn(&mut O, u32, T::Into),
    ) -> Result<(), Error> {
        for _ in 0..remaining {
            let bytes = take(r)?;
            let (item, value, successor) = state.advance(bytes);

            o.add_bytes(item, bytes);
            add(o, item, value);

            state = successor;
        }

        Ok(())
    }

    match state {
        AnyElement::F32(s) => decode_elements(s, remaining, r, o, FromElements::add_f32),
        AnyElement::I32(s) => decode_elements(s, remaining, r, o, FromElements::add_i32),
    }
}

/// Take an exact number of bytes from a reader.
fn take<const N: usize>(r: &mut impl Read) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    r.read_exact(&mut buf)?;

    Ok(buf)
}
