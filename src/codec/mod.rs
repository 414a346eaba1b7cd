//! Header line codec
//!
//! `field` converts single substrings into typed values; `decoder` walks a
//! whole record schema over a line.

pub(crate) mod decoder;
pub(crate) mod field;

pub(crate) use decoder::{Strategy, decode};
pub(crate) use field::FieldSpec;
