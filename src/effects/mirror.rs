//! Mirror-tile wrap: the design's inner region reflected outward into the bands so content
//! reads continuously across the fold.

use crate::dimension::model::DimensionSpec;
use crate::effects::composite::composite_over;
use crate::effects::guides::{GuideLabels, GuideSpec, render_guides};
use crate::effects::fit_to_total;
use crate::foundation::core::Raster;
use crate::foundation::error::WrapResult;

/// Mirror-tile without guides; the variant baked into exports.
///
/// The tile is the source inset by the mirror padding. The center is copied as is; edge
/// regions reflect one axis, corners both. Reflection is about the padding boundary pixel, so
/// `out(pad - d, y) == out(pad + d, y)` and the outer side stays flush with the canvas edge.
pub fn mirror_tile(source: &Raster, dims: &DimensionSpec) -> WrapResult<Raster> {
    let source = fit_to_total(source, dims)?;
    let (width, height) = (source.width, source.height);
    let mut out = Raster::new(width, height)?;
    if source.is_empty() {
        return Ok(out);
    }

    let pad = dims.mirror_padding_px();
    let map_x = reflect_map(width, pad);
    let map_y = reflect_map(height, pad);

    let stride = width as usize * 4;
    for (y, row) in out.data.chunks_exact_mut(stride).enumerate() {
        let src_row = &source.data[map_y[y] as usize * stride..][..stride];
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let sx = map_x[x] as usize * 4;
            px.copy_from_slice(&src_row[sx..sx + 4]);
        }
    }
    Ok(out)
}

/// Mirror-tile with the dashed fold guides and "Sides"/"Back" labels on top.
pub fn mirror_wrap_preview(
    source: &Raster,
    dims: &DimensionSpec,
    stroke_px: f64,
) -> WrapResult<Raster> {
    let mut out = mirror_tile(source, dims)?;
    let guides = render_guides(
        dims,
        &GuideSpec {
            frames: true,
            labels: Some(GuideLabels::SIDES),
            stroke_px,
        },
    )?;
    composite_over(&mut out, &guides)?;
    Ok(out)
}

/// Source coordinate for every output coordinate along one axis of length `len`.
fn reflect_map(len: u32, pad: u32) -> Vec<u32> {
    if len == 0 {
        return Vec::new();
    }
    // Keep at least one tile pixel; a padding eating the whole axis degenerates to edge clamping.
    let pad = pad.min(len.saturating_sub(1) / 2);
    let tile = len - 2 * pad;
    let last = pad + tile - 1;
    (0..len)
        .map(|x| {
            let local = if x < pad {
                (pad - x).min(tile - 1)
            } else if x > last {
                (tile - 1).saturating_sub(x - last)
            } else {
                x - pad
            };
            pad + local
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mirror.rs"]
mod tests;
