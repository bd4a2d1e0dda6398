//! Image wrap: dashed fold guides paired with a blurred copy of the design visible only in the
//! border bands.

use crate::dimension::model::DimensionSpec;
use crate::effects::blur::gaussian_blur;
use crate::effects::composite::{clear_rect, composite_over};
use crate::effects::fit_to_total;
use crate::effects::guides::{GuideLabels, GuideSpec, render_guides};
use crate::foundation::core::{PixelRect, Raster};
use crate::foundation::error::WrapResult;

/// Blur strength, defined at a reference resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurSettings {
    /// Gaussian standard deviation in pixels at `reference_dpi`.
    pub sigma_px: f32,
    pub reference_dpi: f64,
}

/// Guide-only layer of the image wrap: fold rectangles and labels, no image content.
pub fn image_wrap_guides(dims: &DimensionSpec, stroke_px: f64) -> WrapResult<Raster> {
    render_guides(
        dims,
        &GuideSpec {
            frames: true,
            labels: Some(GuideLabels::SIDES),
            stroke_px,
        },
    )
}

/// Blurred design in the border bands, transparent over the face.
pub fn blur_wrap(
    source: &Raster,
    dims: &DimensionSpec,
    blur: BlurSettings,
    labels: bool,
) -> WrapResult<Raster> {
    let sharp = fit_to_total(source, dims)?;
    let blurred = blur_at_dpi(&sharp, dims.dpi(), blur)?;
    let mut out = blur_band(&sharp, &blurred, dims)?;
    if labels {
        let text = render_guides(
            dims,
            &GuideSpec {
                frames: false,
                labels: Some(GuideLabels::SIDE),
                stroke_px: 0.0,
            },
        )?;
        composite_over(&mut out, &text)?;
    }
    Ok(out)
}

/// Sharp design with the blurred copy over it, face cleared.
pub fn blur_band(sharp: &Raster, blurred: &Raster, dims: &DimensionSpec) -> WrapResult<Raster> {
    let mut out = sharp.clone();
    composite_over(&mut out, blurred)?;
    let face = PixelRect::inset(out.width, out.height, dims.frame_inset_px());
    clear_rect(&mut out, face);
    Ok(out)
}

/// Blur `src` as it would look at `dpi`.
///
/// Above the reference resolution the blur runs on a copy downsampled to the reference DPI and
/// is upsampled afterwards.
pub fn blur_at_dpi(src: &Raster, dpi: f64, blur: BlurSettings) -> WrapResult<Raster> {
    let scale = dpi / blur.reference_dpi;
    if !scale.is_finite() || scale <= 1.0 {
        let sigma = blur.sigma_px * scale.clamp(0.0, 1.0) as f32;
        return gaussian_blur(src, sigma);
    }

    let small_w = ((f64::from(src.width) / scale).round() as u32).max(1);
    let small_h = ((f64::from(src.height) / scale).round() as u32).max(1);
    let small = gaussian_blur(&src.resized(small_w, small_h)?, blur.sigma_px)?;
    small.resized(src.width, src.height)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/wrap.rs"]
mod tests;
