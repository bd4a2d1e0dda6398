use std::{fmt, str::FromStr};

use crate::dimension::model::DimensionSpec;
use crate::effects::border::solid_border;
use crate::effects::mirror::{mirror_tile, mirror_wrap_preview};
use crate::effects::wrap::{BlurSettings, blur_wrap, image_wrap_guides};
use crate::foundation::color::Color;
use crate::foundation::core::Raster;
use crate::foundation::error::{WrapError, WrapResult};
use crate::overlay::layers::OverlayKind;

/// The wrap treatment; exactly one is active per session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EffectMode {
    #[default]
    None,
    Mirror,
    Border,
    ImageWrap,
}

impl EffectMode {
    pub const ALL: [EffectMode; 4] = [
        EffectMode::None,
        EffectMode::Mirror,
        EffectMode::Border,
        EffectMode::ImageWrap,
    ];

    /// Overlay layers shown while this mode is active.
    pub fn overlays(self) -> &'static [OverlayKind] {
        match self {
            EffectMode::None => &[],
            EffectMode::Mirror => &[OverlayKind::MirrorWrap],
            EffectMode::Border => &[OverlayKind::Border],
            EffectMode::ImageWrap => &[OverlayKind::ImageWrap, OverlayKind::BlurOverlay],
        }
    }

    /// Whether the overlays are derived from the design and must follow its edits.
    pub fn tracks_content(self) -> bool {
        matches!(self, EffectMode::Mirror | EffectMode::ImageWrap)
    }

    pub fn key(self) -> &'static str {
        match self {
            EffectMode::None => "none",
            EffectMode::Mirror => "mirror",
            EffectMode::Border => "border",
            EffectMode::ImageWrap => "image_wrap",
        }
    }
}

impl fmt::Display for EffectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EffectMode {
    type Err = WrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match norm.as_str() {
            "none" => Ok(EffectMode::None),
            "mirror" | "mirrorwrap" => Ok(EffectMode::Mirror),
            "border" | "solidborder" => Ok(EffectMode::Border),
            "imagewrap" => Ok(EffectMode::ImageWrap),
            _ => Err(WrapError::validation(format!("unknown effect mode \"{s}\""))),
        }
    }
}

/// Caller-supplied effect parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct EffectParams {
    #[serde(default)]
    pub border_color: Color,
}

/// Fixed rendering style of guides and blur, shared by preview and export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectStyle {
    pub blur: BlurSettings,
    pub guide_stroke_px: f64,
}

/// Preview overlays carry guides and labels; exports never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    Preview,
    Export,
}

/// Rasters produced by one compositor run, keyed by the layer they belong to.
#[derive(Clone, Debug, Default)]
pub struct OverlayPlan {
    pub layers: Vec<(OverlayKind, Raster)>,
}

impl OverlayPlan {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, kind: OverlayKind) -> Option<&Raster> {
        self.layers.iter().find(|(k, _)| *k == kind).map(|(_, r)| r)
    }
}

/// Run the compositor of `mode` against a content snapshot.
///
/// Every raster is computed off-surface and sized to `dims.total_px()`; the snapshot is read
/// only. Modes that do not depend on content ignore it.
pub fn composite(
    mode: EffectMode,
    snapshot: &Raster,
    dims: &DimensionSpec,
    params: &EffectParams,
    style: &EffectStyle,
    target: RenderTarget,
) -> WrapResult<OverlayPlan> {
    let layers = match (mode, target) {
        (EffectMode::None, _) => Vec::new(),
        (EffectMode::Mirror, RenderTarget::Preview) => vec![(
            OverlayKind::MirrorWrap,
            mirror_wrap_preview(snapshot, dims, style.guide_stroke_px)?,
        )],
        (EffectMode::Mirror, RenderTarget::Export) => {
            vec![(OverlayKind::MirrorWrap, mirror_tile(snapshot, dims)?)]
        }
        (EffectMode::Border, _) => vec![(
            OverlayKind::Border,
            solid_border(dims, params.border_color)?,
        )],
        (EffectMode::ImageWrap, RenderTarget::Preview) => vec![
            (
                OverlayKind::ImageWrap,
                image_wrap_guides(dims, style.guide_stroke_px)?,
            ),
            (
                OverlayKind::BlurOverlay,
                blur_wrap(snapshot, dims, style.blur, true)?,
            ),
        ],
        (EffectMode::ImageWrap, RenderTarget::Export) => vec![(
            OverlayKind::BlurOverlay,
            blur_wrap(snapshot, dims, style.blur, false)?,
        )],
    };
    tracing::debug!(%mode, ?target, dpi = dims.dpi(), layers = layers.len(), "composited");
    Ok(OverlayPlan { layers })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mode.rs"]
mod tests;
