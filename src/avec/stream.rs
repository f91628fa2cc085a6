//! Incremental chunk-fed decoder implementation.

use either::Either::{self, Left, Right};

use crate::{
    format::{ELEMENT_LENGTH, HEADER_LENGTH},
    sans::{
        Decoder,
        data::{AnyElement, Element, Raw},
        header::Header,
    },
};

use super::FromElements;

/// Decoder consuming a document incrementally, in chunks of arbitrary size.
///
/// Feed bytes with [`feed`](Self::feed) as they arrive; the decode result is
/// identical regardless of how the byte stream is grouped into calls. Only
/// two fixed-size buffers are held, so a document is decoded without ever
/// being resident in memory as a whole.
///
/// No validation is performed: the magic marker and version are read but
/// accepted unchecked, and elements of an invalid type are published raw.
/// Callers wanting validation should inspect the header from
/// [`FromElements::add_header`] and abandon the decoder if it is
/// unacceptable.
///
/// The format carries no end marker, so the decoder has no terminal state.
/// It is the caller's responsibility to stop feeding bytes once the number
/// of elements implied by the header's shape ([`Header::elements`]) has been
/// received; the effect of feeding further bytes is unspecified.
pub struct StreamDecoder {
    bytes_read: usize,

    header: Header,
    state: Option<Either<AnyElement, Element<Raw>>>,

    buffer: [u8; HEADER_LENGTH],
    element: [u8; ELEMENT_LENGTH],
}

impl StreamDecoder {
    /// Create a decoder at the start of a document.
    pub fn new() -> Self {
        Self {
            bytes_read: 0,
            header: Header::default(),
            state: None,
            buffer: [0; HEADER_LENGTH],
            element: [0; ELEMENT_LENGTH],
        }
    }

    /// Consume a chunk of the document, publishing to a receiver.
    ///
    /// Each element is published synchronously, in item number order, before
    /// this method returns. An empty chunk is a no-op.
    pub fn feed(&mut self, r: &[u8], o: &mut impl FromElements) {
        for &byte in r {
            if self.bytes_read < HEADER_LENGTH - 1 {
                self.buffer[self.bytes_read] = byte;
            } else if self.bytes_read == HEADER_LENGTH - 1 {
                self.buffer[HEADER_LENGTH - 1] = byte;

                let (header, state) = Decoder::advance(self.buffer);

                self.header = header;
                self.state = Some(state);

                o.add_header(&self.header);
            } else {
                let offset = self.bytes_read - HEADER_LENGTH;
                let at = offset % ELEMENT_LENGTH;

                self.element[at] = byte;

                if at == ELEMENT_LENGTH - 1 {
                    self.state = match self.state.take() {
                        Some(Left(AnyElement::F32(state))) => {
                            let (item, value, state) = state.advance(self.element);
                            o.add_bytes(item, self.element);
                            o.add_f32(item, value);
                            Some(Left(AnyElement::F32(state)))
                        }
                        Some(Left(AnyElement::I32(state))) => {
                            let (item, value, state) = state.advance(self.element);
                            o.add_bytes(item, self.element);
                            o.add_i32(item, value);
                            Some(Left(AnyElement::I32(state)))
                        }
                        Some(Right(state)) => {
                            let (item, value, state) = state.advance(self.element);
                            o.add_bytes(item, value);
                            Some(Right(state))
                        }
                        None => None,
                    };
                }
            }

            self.bytes_read += 1;
        }
    }

    /// The total number of bytes consumed since the start of the document.
    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    /// The document header.
    ///
    /// All fields are zero (with an invalid element type) until the header
    /// has been fully consumed.
    pub fn header(&self) -> &Header {
        &self.header
    }
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}
