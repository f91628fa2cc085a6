//! States processing payload elements.

use core::marker::PhantomData;

use crate::format::{self, ELEMENT_LENGTH};

/// State token to decode an element of type `T`.
#[derive(Debug)]
pub struct Element<T> {
    pub(super) item: u32,
    pub(super) _phantom: PhantomData<T>,
}

impl<T: ElementInner> Element<T> {
    /// Transition to the next state by decoding one element.
    ///
    /// Returns the element's sequential item number, its decoded value, and
    /// the successor state token.
    pub fn advance(self, r: [u8; ELEMENT_LENGTH]) -> (u32, T::Into, Self) {
        let value = T::from(r);

        let successor = Self {
            item: self.item + 1,
            _phantom: PhantomData,
        };

        (self.item, value, successor)
    }
}

pub trait ElementInner {
    /// The primitive this element type decodes to.
    type Into;

    /// Decode an element of this type from its raw bytes.
    fn from(r: [u8; ELEMENT_LENGTH]) -> Self::Into;
}

/// `float32` elements.
#[derive(Debug)]
pub struct F32;

impl ElementInner for F32 {
    type Into = f32;

    fn from(r: [u8; ELEMENT_LENGTH]) -> f32 {
        format::read_f32(r)
    }
}

/// `int32` elements.
#[derive(Debug)]
pub struct I32;

impl ElementInner for I32 {
    type Into = i32;

    fn from(r: [u8; ELEMENT_LENGTH]) -> i32 {
        format::read_i32(r)
    }
}

/// Elements of an invalid or unrecognized type, passed through undecoded.
#[derive(Debug)]
pub struct Raw;

impl ElementInner for Raw {
    type Into = [u8; ELEMENT_LENGTH];

    fn from(r: [u8; ELEMENT_LENGTH]) -> [u8; ELEMENT_LENGTH] {
        r
    }
}

/// An `Element` state token for a decodable numeric element type.
pub enum AnyElement {
    F32(Element<F32>),
    I32(Element<I32>),
}
