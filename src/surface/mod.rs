//! The design surface contract and an in-memory CPU implementation.

pub(crate) mod design;
pub(crate) mod element;
pub(crate) mod memory;
