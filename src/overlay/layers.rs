use std::fmt;

use crate::foundation::core::{Raster, Rect};
use crate::foundation::error::{WrapError, WrapResult};
use crate::surface::design::DesignSurface;
use crate::surface::element::{ElementAttrs, ElementId, ElementPatch};

/// The four singleton overlay layers owned by the compositor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    MirrorWrap,
    Border,
    ImageWrap,
    BlurOverlay,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::MirrorWrap,
        OverlayKind::Border,
        OverlayKind::ImageWrap,
        OverlayKind::BlurOverlay,
    ];

    /// Layer name as attached to the design surface.
    pub fn name(self) -> &'static str {
        match self {
            OverlayKind::MirrorWrap => "mirrorWrap",
            OverlayKind::Border => "borderElement",
            OverlayKind::ImageWrap => "imageWrap",
            OverlayKind::BlurOverlay => "blurOverlay",
        }
    }

    /// Only the solid border is part of the physical product; the rest are preview guides.
    pub fn include_in_export(self) -> bool {
        matches!(self, OverlayKind::Border)
    }

    fn index(self) -> usize {
        match self {
            OverlayKind::MirrorWrap => 0,
            OverlayKind::Border => 1,
            OverlayKind::ImageWrap => 2,
            OverlayKind::BlurOverlay => 3,
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handles of the overlay layers attached to one design surface.
///
/// Layers are created once, hidden and sized to the total canvas, and never destroyed; only
/// their source, visibility and size change afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayLayers {
    ids: [ElementId; 4],
}

impl OverlayLayers {
    pub fn install<S: DesignSurface + ?Sized>(surface: &mut S, width: f64, height: f64) -> Self {
        let geometry = Rect::new(0.0, 0.0, width, height);
        let ids = OverlayKind::ALL.map(|kind| {
            surface.add_element(
                ElementAttrs {
                    visible: false,
                    selectable: false,
                    draggable: false,
                    always_on_top: true,
                    show_in_export: kind.include_in_export(),
                    ..ElementAttrs::default()
                }
                .named(kind.name())
                .with_geometry(geometry),
            )
        });
        tracing::debug!(?ids, "overlay layers installed");
        Self { ids }
    }

    pub fn id(&self, kind: OverlayKind) -> ElementId {
        self.ids[kind.index()]
    }

    pub fn kind_of(&self, id: ElementId) -> Option<OverlayKind> {
        OverlayKind::ALL.into_iter().find(|k| self.id(*k) == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.kind_of(id).is_some()
    }

    /// Fail with [`WrapError::OverlayUninitialized`] unless every layer is on the surface.
    pub fn ensure_attached<S: DesignSurface + ?Sized>(&self, surface: &S) -> WrapResult<()> {
        for kind in OverlayKind::ALL {
            if surface.element(self.id(kind)).is_none() {
                tracing::error!(layer = %kind, "overlay layer is not attached");
                return Err(WrapError::OverlayUninitialized(kind));
            }
        }
        Ok(())
    }

    pub fn is_visible<S: DesignSurface + ?Sized>(&self, surface: &S, kind: OverlayKind) -> bool {
        surface
            .element(self.id(kind))
            .is_some_and(|e| e.attrs.visible)
    }

    pub fn visible_kinds<S: DesignSurface + ?Sized>(&self, surface: &S) -> Vec<OverlayKind> {
        OverlayKind::ALL
            .into_iter()
            .filter(|k| self.is_visible(surface, *k))
            .collect()
    }

    /// Replace a layer's raster in one attribute write, resizing it to the raster.
    pub fn write<S: DesignSurface + ?Sized>(
        &self,
        surface: &mut S,
        kind: OverlayKind,
        raster: Raster,
        visible: Option<bool>,
    ) -> WrapResult<()> {
        let id = self.attached(surface, kind)?;
        let mut patch = ElementPatch::size(f64::from(raster.width), f64::from(raster.height))
            .with_source(raster);
        patch.visible = visible;
        surface.update_element(id, patch)
    }

    pub fn set_visible<S: DesignSurface + ?Sized>(
        &self,
        surface: &mut S,
        kind: OverlayKind,
        visible: bool,
    ) -> WrapResult<()> {
        let id = self.attached(surface, kind)?;
        surface.update_element(id, ElementPatch::visible(visible))
    }

    pub fn resize_all<S: DesignSurface + ?Sized>(
        &self,
        surface: &mut S,
        width: f64,
        height: f64,
    ) -> WrapResult<()> {
        for kind in OverlayKind::ALL {
            let id = self.attached(surface, kind)?;
            surface.update_element(id, ElementPatch::size(width, height))?;
        }
        Ok(())
    }

    fn attached<S: DesignSurface + ?Sized>(
        &self,
        surface: &S,
        kind: OverlayKind,
    ) -> WrapResult<ElementId> {
        let id = self.id(kind);
        if surface.element(id).is_none() {
            tracing::error!(layer = %kind, "overlay layer is not attached");
            return Err(WrapError::OverlayUninitialized(kind));
        }
        Ok(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/layers.rs"]
mod tests;
