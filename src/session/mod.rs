//! The wrap session: one design surface, its overlay layers, the active effect and the
//! regeneration scheduler, held together as explicit state.

pub(crate) mod config;
pub(crate) mod wrap_session;
