//! Pure derivation of every pixel quantity (inner, border, back border, total) from DPI, the
//! product catalog and a single border-width input.

pub(crate) mod catalog;
pub(crate) mod model;
