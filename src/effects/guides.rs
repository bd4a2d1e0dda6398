use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;

use crate::dimension::model::DimensionSpec;
use crate::foundation::color::Color;
use crate::foundation::core::{PixelRect, Raster};
use crate::foundation::error::{WrapError, WrapResult};

/// Label pair drawn into the border band and the back band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuideLabels {
    pub border: &'static str,
    pub back: &'static str,
}

impl GuideLabels {
    pub const SIDES: Self = Self {
        border: "Sides",
        back: "Back",
    };
    pub const SIDE: Self = Self {
        border: "Side",
        back: "Back",
    };
}

/// What to draw on a guide layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideSpec {
    /// Dashed rectangles at the front-face and back-border folds.
    pub frames: bool,
    pub labels: Option<GuideLabels>,
    pub stroke_px: f64,
}

const GUIDE_STROKE: Color = Color::WHITE;
const GUIDE_LABEL: Color = Color::BLACK;
const DASH: [f64; 2] = [5.0, 5.0];

/// Rasterize guide geometry for `dims` onto a transparent canvas of the total size.
pub fn render_guides(dims: &DimensionSpec, spec: &GuideSpec) -> WrapResult<Raster> {
    let (width, height) = dims.total_px();
    if width == 0 || height == 0 {
        return Raster::new(width, height);
    }

    let svg = guide_svg(dims, spec);
    let opts = usvg::Options {
        fontdb: guide_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts)
        .context("parse guide svg")
        .map_err(WrapError::from)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| WrapError::raster("failed to allocate guide pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Raster::from_premul_rgba8(width, height, pixmap.take())
}

fn guide_svg(dims: &DimensionSpec, spec: &GuideSpec) -> String {
    let (w, h) = dims.total_px();
    let frame = dims.frame_inset_px();
    let back = dims.back_border_inset_px();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    if spec.frames {
        for inset in [frame, back] {
            let r = PixelRect::inset(w, h, inset);
            if r.is_empty() {
                continue;
            }
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}" stroke-dasharray="{} {}"/>"#,
                r.x0,
                r.y0,
                r.width(),
                r.height(),
                GUIDE_STROKE.to_hex(),
                spec.stroke_px,
                DASH[0],
                DASH[1],
            );
        }
    }

    if let Some(labels) = spec.labels {
        let font = dims.label_font_px();
        let cx = f64::from(w) / 2.0;
        let back_mid = f64::from(back) / 2.0;
        let border_mid = f64::from(back) + f64::from(frame.saturating_sub(back)) / 2.0;
        for (text, y) in [
            (labels.border, border_mid),
            (labels.back, back_mid),
            (labels.border, f64::from(h) - border_mid),
            (labels.back, f64::from(h) - back_mid),
        ] {
            let _ = write!(
                svg,
                r#"<text x="{cx}" y="{y}" font-family="Arial, sans-serif" font-size="{font}" fill="{}" text-anchor="middle" dominant-baseline="central">{text}</text>"#,
                GUIDE_LABEL.to_hex(),
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

// System fonts are scanned once per process. Without any font, labels are skipped and the
// dashed geometry still renders.
fn guide_fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTDB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    Arc::clone(FONTDB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "guide font database loaded");
        Arc::new(db)
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/guides.rs"]
mod tests;
