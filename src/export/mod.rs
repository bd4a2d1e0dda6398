//! High-resolution export: the active effect recomputed at export DPI, without guides.

pub(crate) mod pipeline;
