use kurbo::Affine;

use crate::foundation::core::{Rect, Size};
use crate::foundation::error::{WrapError, WrapResult};
use crate::overlay::layers::OverlayLayers;
use crate::surface::design::DesignSurface;
use crate::surface::element::{DesignElement, ElementPatch};

/// Independent per-axis scale, anchored at the page origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

impl ScaleFactors {
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    pub fn new(x: f64, y: f64) -> WrapResult<Self> {
        if !x.is_finite() || !y.is_finite() || x <= 0.0 || y <= 0.0 {
            return Err(WrapError::validation(format!(
                "scale factors must be finite and > 0, got ({x}, {y})"
            )));
        }
        Ok(Self { x, y })
    }

    /// Factors mapping a canvas of size `old` onto one of size `new`.
    pub fn between(old: Size, new: Size) -> WrapResult<Self> {
        if old.width <= 0.0 || old.height <= 0.0 {
            return Err(WrapError::validation(format!(
                "cannot rescale from an empty canvas {}x{}",
                old.width, old.height
            )));
        }
        Self::new(new.width / old.width, new.height / old.height)
    }

    /// `self` followed by `next`.
    pub fn then(self, next: Self) -> Self {
        Self {
            x: self.x * next.x,
            y: self.y * next.y,
        }
    }

    pub fn is_identity(self) -> bool {
        self.x == 1.0 && self.y == 1.0
    }

    pub fn to_affine(self) -> Affine {
        Affine::scale_non_uniform(self.x, self.y)
    }

    pub fn apply_rect(self, rect: Rect) -> Rect {
        self.to_affine().transform_rect_bbox(rect)
    }
}

/// Resize the page to `new_total` and remap every element onto it.
///
/// Overlay layers are snapped to the new total; all other elements have `x, width` scaled by
/// the horizontal factor and `y, height` by the vertical one. Aspect ratios of individual
/// elements may change.
pub fn rescale_surface<S: DesignSurface + ?Sized>(
    surface: &mut S,
    layers: &OverlayLayers,
    old_total: Size,
    new_total: Size,
) -> WrapResult<ScaleFactors> {
    let factors = ScaleFactors::between(old_total, new_total)?;
    layers.ensure_attached(surface)?;

    surface.set_page_size(new_total.width, new_total.height);
    layers.resize_all(surface, new_total.width, new_total.height)?;

    let ids = surface.find(&|e: &DesignElement| !layers.contains(e.id));
    if factors.is_identity() {
        return Ok(factors);
    }
    for id in &ids {
        let Some(element) = surface.element(*id) else {
            continue;
        };
        let geometry = factors.apply_rect(element.attrs.geometry());
        surface.update_element(*id, ElementPatch::geometry(geometry))?;
    }
    tracing::debug!(
        sx = factors.x,
        sy = factors.y,
        elements = ids.len(),
        "surface rescaled"
    );
    Ok(factors)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rescale.rs"]
mod tests;
