use std::{path::Path, time::Duration};

use anyhow::Context;

use crate::dimension::catalog::ProductSize;
use crate::dimension::model::{DEFAULT_BORDER_WIDTH_IN, HIGH_RES_DPI, PREVIEW_DPI};
use crate::effects::mode::EffectStyle;
use crate::effects::wrap::BlurSettings;
use crate::foundation::color::Color;
use crate::foundation::error::{WrapError, WrapResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Tunables of a [`crate::WrapSession`].
///
/// Every field has a default, so `{}` is a valid configuration document.
pub struct SessionConfig {
    /// Resolution of the live preview surface.
    #[serde(default = "default_preview_dpi")]
    pub preview_dpi: f64,
    /// Resolution of high-res exports.
    #[serde(default = "default_export_dpi")]
    pub export_dpi: f64,
    /// Outward wrap band width in inches.
    #[serde(default = "default_border_width_in")]
    pub border_width_in: f64,
    /// Initial product size.
    #[serde(default)]
    pub product_size: ProductSize,
    /// Initial solid border color.
    #[serde(default)]
    pub border_color: Color,
    /// Debounce window between a design edit and overlay regeneration.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Gaussian sigma of the image wrap blur, in preview pixels.
    #[serde(default = "default_blur_sigma_px")]
    pub blur_sigma_px: f32,
    /// Width of the dashed fold guides, in pixels.
    #[serde(default = "default_guide_stroke_px")]
    pub guide_stroke_px: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preview_dpi: default_preview_dpi(),
            export_dpi: default_export_dpi(),
            border_width_in: default_border_width_in(),
            product_size: ProductSize::default(),
            border_color: Color::default(),
            debounce_ms: default_debounce_ms(),
            blur_sigma_px: default_blur_sigma_px(),
            guide_stroke_px: default_guide_stroke_px(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> WrapResult<()> {
        for (name, value) in [
            ("preview_dpi", self.preview_dpi),
            ("export_dpi", self.export_dpi),
            ("border_width_in", self.border_width_in),
            ("guide_stroke_px", self.guide_stroke_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(WrapError::configuration(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if !self.blur_sigma_px.is_finite() || self.blur_sigma_px < 0.0 {
            return Err(WrapError::configuration(format!(
                "blur_sigma_px must be finite and >= 0, got {}",
                self.blur_sigma_px
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> WrapResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| WrapError::configuration(format!("invalid session config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> WrapResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read session config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn effect_style(&self) -> EffectStyle {
        EffectStyle {
            blur: BlurSettings {
                sigma_px: self.blur_sigma_px,
                reference_dpi: self.preview_dpi,
            },
            guide_stroke_px: self.guide_stroke_px,
        }
    }
}

fn default_preview_dpi() -> f64 {
    PREVIEW_DPI
}

fn default_export_dpi() -> f64 {
    HIGH_RES_DPI
}

fn default_border_width_in() -> f64 {
    DEFAULT_BORDER_WIDTH_IN
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_blur_sigma_px() -> f32 {
    7.0
}

fn default_guide_stroke_px() -> f64 {
    2.0
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
