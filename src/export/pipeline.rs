use crate::dimension::model::DimensionSpec;
use crate::effects::composite::composite_over;
use crate::effects::mode::{EffectMode, EffectParams, EffectStyle, RenderTarget, composite};
use crate::foundation::core::Raster;
use crate::foundation::error::WrapResult;

/// Build the export raster from an overlay-free content snapshot.
///
/// The snapshot is scaled to the export total size, then the active mode's export layers are
/// recomputed at `dims` (border and back-border widths re-derived at the export DPI) and
/// composited over it. With [`EffectMode::None`] the result is the scaled snapshot.
#[tracing::instrument(skip(snapshot, params, style), fields(src_w = snapshot.width, src_h = snapshot.height))]
pub fn render_export(
    snapshot: &Raster,
    mode: EffectMode,
    params: &EffectParams,
    dims: &DimensionSpec,
    style: &EffectStyle,
) -> WrapResult<Raster> {
    let (width, height) = dims.total_px();
    let mut out = snapshot.resized(width, height)?;
    let plan = composite(mode, &out, dims, params, style, RenderTarget::Export)?;
    for (kind, layer) in &plan.layers {
        tracing::debug!(layer = %kind, "baking export layer");
        composite_over(&mut out, layer)?;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/pipeline.rs"]
mod tests;
