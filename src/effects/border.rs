use crate::dimension::model::DimensionSpec;
use crate::effects::composite::clear_rect;
use crate::foundation::color::Color;
use crate::foundation::core::{PixelRect, Raster};
use crate::foundation::error::WrapResult;

/// Opaque frame of `border + back border` around a transparent face.
///
/// This is the only overlay that is part of the printed product.
pub fn solid_border(dims: &DimensionSpec, color: Color) -> WrapResult<Raster> {
    let (width, height) = dims.total_px();
    let mut out = Raster::filled(width, height, color.to_rgba8_premul())?;
    clear_rect(
        &mut out,
        PixelRect::inset(width, height, dims.frame_inset_px()),
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/border.rs"]
mod tests;
