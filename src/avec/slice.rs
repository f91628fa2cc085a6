//! Slice-based decoder implementation.

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

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
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

/// Decode a complete document from a slice, publishing to a receiver.
///
/// This method is also re-exported as `tenstream::avec::decode_slice`.
///
/// Unlike [`StreamDecoder`](super::StreamDecoder), this decoder applies the
/// caller-side header checks: the magic marker, version, and element type
/// must all be recognized. Exactly the number of elements implied by the
/// header's shape is decoded; bytes past them are ignored.
pub fn decode(r: &[u8], o: &mut impl FromElements) -> Result<(), Error> {
    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    let head: [u8; HEADER_LENGTH] = take(r, i)?;

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
        r: &[u8],
        i: &mut usize,

        o: &mut O,
        add: fn(&mut O, u32, T::Into),
    ) -> Result<(), Error> {
        for _ in 0..remaining {
            let bytes = take(r, i)?;
            let (item, value, successor) = state.advance(bytes);

            o.add_bytes(item, bytes);
            add(o, item, value);

            state = successor;
        }

        Ok(())
    }

    match state {
        AnyElement::F32(s) => decode_elements(s, remaining, r, i, o, FromElements::add_f32),
        AnyElement::I32(s) => decode_elements(s, remaining, r, i, o, FromElements::add_i32),
    }
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    *i += N;

    Ok(r.get(s..*i).ok_or(Error::EndOfSlice)?.try_into().unwrap())
}
