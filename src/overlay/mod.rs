//! The compositor-owned overlay layers attached to the design surface.

pub(crate) mod layers;
