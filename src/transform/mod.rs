//! Geometry remapping applied when the total canvas size changes.

pub(crate) mod rescale;
