//! Wrap compositors and the raster primitives they share.
//!
//! Every compositor is a pure function from a content snapshot and a [`DimensionSpec`] to one
//! or more premultiplied rasters sized to the total canvas. Nothing here touches a surface.

use std::borrow::Cow;

use crate::dimension::model::DimensionSpec;
use crate::foundation::core::Raster;
use crate::foundation::error::WrapResult;

pub(crate) mod blur;
pub(crate) mod border;
pub(crate) mod composite;
pub(crate) mod guides;
pub(crate) mod mirror;
pub(crate) mod mode;
pub(crate) mod wrap;

/// `source` at the total pixel size of `dims`, stretched when the snapshot came back at a
/// different size.
pub(crate) fn fit_to_total<'a>(
    source: &'a Raster,
    dims: &DimensionSpec,
) -> WrapResult<Cow<'a, Raster>> {
    let (width, height) = dims.total_px();
    if source.width == width && source.height == height {
        return Ok(Cow::Borrowed(source));
    }
    tracing::debug!(
        from_w = source.width,
        from_h = source.height,
        to_w = width,
        to_h = height,
        "fitting snapshot to canvas"
    );
    Ok(Cow::Owned(source.resized(width, height)?))
}
