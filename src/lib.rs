//! canvaswrap previews and exports the wrap treatment of a printed canvas.
//!
//! A stretched canvas shows its design on the face and folds the outer band around the
//! stretcher bars. This crate keeps a set of overlay layers on top of an editable design so the
//! on-screen preview shows how that fold will look, and renders a matching high-DPI artifact for
//! print.
//!
//! # Pieces
//!
//! - **Dimensions**: [`DimensionSpec`] derives inner size, border, back border and total canvas
//!   size from a [`ProductSize`], a border width in inches and a DPI.
//! - **Effects**: [`composite`] dispatches over [`EffectMode`] (none, mirror tile, solid border,
//!   image wrap with blur) and returns the overlay rasters for one mode.
//! - **Session**: [`WrapSession`] binds a [`DesignSurface`] to its overlay layers, debounces
//!   design edits into regenerations, rescales the design when the canvas size changes and
//!   renders exports.
//!
//! Pixels are premultiplied RGBA8 everywhere ([`Raster`]).
#![forbid(unsafe_code)]

pub(crate) mod dimension;
pub(crate) mod effects;
pub(crate) mod export;
pub(crate) mod foundation;
pub(crate) mod overlay;
pub(crate) mod schedule;
pub(crate) mod session;
pub(crate) mod surface;
pub(crate) mod transform;

pub use crate::dimension::catalog::ProductSize;
pub use crate::dimension::model::{
    BACK_BORDER_DIVISOR, DEFAULT_BORDER_WIDTH_IN, DimensionSpec, HIGH_RES_DPI,
    MIRROR_PADDING_FACTOR, PREVIEW_DPI, border_px, derive_back_border, inner_size,
    inner_size_for_key, total_size,
};
pub use crate::effects::blur::gaussian_blur;
pub use crate::effects::border::solid_border;
pub use crate::effects::guides::{GuideLabels, GuideSpec, render_guides};
pub use crate::effects::mirror::{mirror_tile, mirror_wrap_preview};
pub use crate::effects::mode::{
    EffectMode, EffectParams, EffectStyle, OverlayPlan, RenderTarget, composite,
};
pub use crate::effects::wrap::{BlurSettings, blur_wrap, image_wrap_guides};
pub use crate::export::pipeline::render_export;
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{PixelRect, Point, Raster, Rect, Rgba8Premul, Size};
pub use crate::foundation::error::{WrapError, WrapResult};
pub use crate::overlay::layers::{OverlayKind, OverlayLayers};
pub use crate::schedule::debounce::Debouncer;
pub use crate::schedule::suppress::{InternalMutation, SuppressionFlag};
pub use crate::session::config::SessionConfig;
pub use crate::session::wrap_session::{
    BACKGROUND_ELEMENT, RegenerationTicket, SessionStats, WrapSession,
};
pub use crate::surface::design::{ChangeEvent, ChangeKind, ChangeListener, DesignSurface};
pub use crate::surface::element::{DesignElement, ElementAttrs, ElementId, ElementPatch};
pub use crate::surface::memory::InMemorySurface;
pub use crate::transform::rescale::{ScaleFactors, rescale_surface};
