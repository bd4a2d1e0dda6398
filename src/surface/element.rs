use std::sync::Arc;

use crate::foundation::core::{Raster, Rect};

/// Stable handle of an element on a design surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Attribute surface of a design element as consumed by the compositor.
#[derive(Clone, Debug)]
pub struct ElementAttrs {
    /// Optional authoring name (overlay layers use their layer name).
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub visible: bool,
    /// Raster drawn stretched into the element's box.
    pub source: Option<Arc<Raster>>,
    pub selectable: bool,
    pub draggable: bool,
    /// Rendered above every element without this flag, regardless of insertion order.
    pub always_on_top: bool,
    /// Included in [`DesignSurface::render_snapshot`](crate::DesignSurface::render_snapshot).
    pub show_in_export: bool,
}

impl Default for ElementAttrs {
    fn default() -> Self {
        Self {
            name: None,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            visible: true,
            source: None,
            selectable: true,
            draggable: true,
            always_on_top: false,
            show_in_export: true,
        }
    }
}

impl ElementAttrs {
    /// A visible, editable image element.
    pub fn image(source: Raster, geometry: Rect) -> Self {
        Self {
            source: Some(Arc::new(source)),
            ..Self::default()
        }
        .with_geometry(geometry)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_geometry(mut self, geometry: Rect) -> Self {
        self.x = geometry.x0;
        self.y = geometry.y0;
        self.width = geometry.width();
        self.height = geometry.height();
        self
    }

    pub fn geometry(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// An element as stored by a design surface.
#[derive(Clone, Debug)]
pub struct DesignElement {
    pub id: ElementId,
    pub attrs: ElementAttrs,
}

/// Partial attribute update; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub visible: Option<bool>,
    pub source: Option<Option<Arc<Raster>>>,
}

impl ElementPatch {
    pub fn geometry(geometry: Rect) -> Self {
        Self {
            x: Some(geometry.x0),
            y: Some(geometry.y0),
            width: Some(geometry.width()),
            height: Some(geometry.height()),
            ..Self::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn visible(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Self::default()
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn with_source(mut self, source: Raster) -> Self {
        self.source = Some(Some(Arc::new(source)));
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Apply to `attrs`, returning whether anything was written.
    pub fn apply(self, attrs: &mut ElementAttrs) -> bool {
        let mut touched = false;
        if let Some(v) = self.x {
            attrs.x = v;
            touched = true;
        }
        if let Some(v) = self.y {
            attrs.y = v;
            touched = true;
        }
        if let Some(v) = self.width {
            attrs.width = v;
            touched = true;
        }
        if let Some(v) = self.height {
            attrs.height = v;
            touched = true;
        }
        if let Some(v) = self.visible {
            attrs.visible = v;
            touched = true;
        }
        if let Some(v) = self.source {
            attrs.source = v;
            touched = true;
        }
        touched
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/element.rs"]
mod tests;
