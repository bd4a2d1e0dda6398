use crate::dimension::catalog::ProductSize;
use crate::foundation::core::Size;
use crate::foundation::error::{WrapError, WrapResult};

/// Default on-screen preview resolution.
pub const PREVIEW_DPI: f64 = 72.0;
/// Resolution of the export artifact (standard print quality).
pub const HIGH_RES_DPI: f64 = 300.0;
/// Default outward wrap band width.
pub const DEFAULT_BORDER_WIDTH_IN: f64 = 0.75;
/// The back border is always this fraction of the border: `back = border / 3`.
pub const BACK_BORDER_DIVISOR: f64 = 3.0;
/// Mirror padding as a multiple of the border width.
pub const MIRROR_PADDING_FACTOR: f64 = 1.5;

/// Border width in pixels at `dpi`.
pub fn border_px(border_width_in: f64, dpi: f64) -> f64 {
    border_width_in * dpi
}

/// Back-border width in pixels at `dpi`, always a third of [`border_px`].
pub fn derive_back_border(border_width_in: f64, dpi: f64) -> f64 {
    border_px(border_width_in, dpi) / BACK_BORDER_DIVISOR
}

/// Pixel inner size of a catalog product at `dpi`.
pub fn inner_size(product: ProductSize, dpi: f64) -> Size {
    let (w_in, h_in) = product.inches();
    Size::new(w_in * dpi, h_in * dpi)
}

/// Pixel inner size of a catalog key (e.g. `"8x10"`) at `dpi`.
pub fn inner_size_for_key(key: &str, dpi: f64) -> WrapResult<Size> {
    let product: ProductSize = key.parse()?;
    Ok(inner_size(product, dpi))
}

/// Total canvas size: inner plus border and back border on both sides of each axis.
pub fn total_size(inner: Size, border_px: f64, back_border_px: f64) -> Size {
    let band = 2.0 * (border_px + back_border_px);
    Size::new(inner.width + band, inner.height + band)
}

/// Every pixel quantity of the wrap at one DPI.
///
/// Always derived from `(product, border inches, dpi)`; pixel values are never carried
/// across DPIs. Use [`DimensionSpec::at_dpi`] to move between preview and export resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionSpec {
    product: ProductSize,
    dpi: f64,
    border_width_in: f64,
    inner: Size,
    border_width_px: f64,
    back_border_px: f64,
}

impl DimensionSpec {
    pub fn new(product: ProductSize, border_width_in: f64, dpi: f64) -> WrapResult<Self> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(WrapError::validation(format!("dpi must be > 0 (got {dpi})")));
        }
        if !border_width_in.is_finite() || border_width_in < 0.0 {
            return Err(WrapError::validation(format!(
                "border width must be >= 0 inches (got {border_width_in})"
            )));
        }
        let border_width_px = border_px(border_width_in, dpi);
        Ok(Self {
            product,
            dpi,
            border_width_in,
            inner: inner_size(product, dpi),
            border_width_px,
            back_border_px: border_width_px / BACK_BORDER_DIVISOR,
        })
    }

    /// Same product and border inches, re-derived at another DPI.
    pub fn at_dpi(&self, dpi: f64) -> WrapResult<Self> {
        Self::new(self.product, self.border_width_in, dpi)
    }

    pub fn with_product(&self, product: ProductSize) -> WrapResult<Self> {
        Self::new(product, self.border_width_in, self.dpi)
    }

    pub fn with_border_width(&self, border_width_in: f64) -> WrapResult<Self> {
        Self::new(self.product, border_width_in, self.dpi)
    }

    pub fn product(&self) -> ProductSize {
        self.product
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    pub fn border_width_in(&self) -> f64 {
        self.border_width_in
    }

    pub fn inner_width(&self) -> f64 {
        self.inner.width
    }

    pub fn inner_height(&self) -> f64 {
        self.inner.height
    }

    pub fn border_width_px(&self) -> f64 {
        self.border_width_px
    }

    pub fn back_border_px(&self) -> f64 {
        self.back_border_px
    }

    pub fn total(&self) -> Size {
        total_size(self.inner, self.border_width_px, self.back_border_px)
    }

    /// Total canvas size rounded to whole pixels; the size of every overlay raster.
    pub fn total_px(&self) -> (u32, u32) {
        let t = self.total();
        (round_px(t.width), round_px(t.height))
    }

    /// Distance from the canvas edge to the front face: `border + back border`.
    pub fn frame_inset_px(&self) -> u32 {
        round_px(self.border_width_px + self.back_border_px)
    }

    pub fn back_border_inset_px(&self) -> u32 {
        round_px(self.back_border_px)
    }

    pub fn mirror_padding_px(&self) -> u32 {
        round_px(self.border_width_px * MIRROR_PADDING_FACTOR)
    }

    /// Guide label size, scaled with DPI and never below 12px.
    pub fn label_font_px(&self) -> f64 {
        (self.dpi / 6.0).round().max(12.0)
    }
}

fn round_px(v: f64) -> u32 {
    v.round().max(0.0) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/dimension/model.rs"]
mod tests;
