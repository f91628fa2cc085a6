#![no_std]

//! An incremental decoder for compact binary tensor arrays.
//!
//! Tenstream decodes a compact binary format carrying numeric arrays of up
//! to four dimensions, with `float32` or `int32` elements. Decoding is
//! streaming: bytes are consumed as they arrive, in chunks of any size, and
//! elements are published as soon as their bytes are complete. No
//! allocation is performed, making the crate suitable for constrained
//! embedded targets.
//!
//! Most users should begin with the decoders in the [`avec`] module,
//! publishing to an implementation of [`avec::FromElements`]. If these prove
//! insufficient, consider implementing a decoder over the state machine in
//! the [`sans`] module. Wire-level constants and scalar decoders live in
//! [`format`].
//!
//! Note that the format carries no checksum, and the core decoder does not
//! validate the magic marker or version it reads. See the individual
//! decoders for how validation is split between the crate and its callers.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

pub mod avec;
pub mod format;
pub mod sans;
