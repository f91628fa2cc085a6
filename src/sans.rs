//! Internal state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as driving decoding from an unusual byte source.
//! See [`crate::avec`] for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! States are represented by non-copy tokens. Once enough bytes are ready,
//! transition to another state by calling the token's `advance` method. This
//! returns a successor state token, along with any extracted data.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. It consumes the complete header buffer in one step; each
//! element state then consumes one 4-byte element at a time.
//!
//! Some areas of the decoding process are not represented in the state
//! machine and must be carefully written:
//!
//! - Reading bytes from the correct place in the document, including
//! buffering across chunk boundaries as necessary.
//!
//! - Ending decoding once the number of elements implied by the header's
//! shape have been read. The format carries no end marker.
//!
//! - Checking the magic marker, version, and element type. The state machine
//! accepts any values for these fields.
//!
//! Implementers are recommended to begin by studying and modifying a decoder
//! from the [`crate::avec`] module.

pub mod data;
pub mod header;

/// Entrypoint to the state machine.
pub type Decoder = header::ArrayHeader;
