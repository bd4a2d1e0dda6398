use crate::effects::composite::{draw_over_at, fill_rect};
use crate::foundation::core::{Raster, Rgba8Premul, Size};
use crate::foundation::error::{WrapError, WrapResult};
use crate::surface::design::{ChangeEvent, ChangeKind, ChangeListener, DesignSurface};
use crate::surface::element::{DesignElement, ElementAttrs, ElementId, ElementPatch};

/// CPU raster design surface.
///
/// Elements are kept bottom-most first; `always_on_top` elements render after all others.
/// The page is cleared to an opaque background before drawing.
pub struct InMemorySurface {
    page: Size,
    background: Rgba8Premul,
    elements: Vec<DesignElement>,
    next_id: u64,
    revision: u64,
    listeners: Vec<ChangeListener>,
}

impl Default for InMemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self {
            page: Size::ZERO,
            background: Rgba8Premul::WHITE,
            elements: Vec::new(),
            next_id: 1,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Rgba8Premul) -> Self {
        self.background = background;
        self
    }

    /// Number of mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Elements bottom-most first (insertion order, ignoring `always_on_top`).
    pub fn elements(&self) -> &[DesignElement] {
        &self.elements
    }

    pub fn remove_element(&mut self, id: ElementId) -> WrapResult<DesignElement> {
        let idx = self.position(id)?;
        let removed = self.elements.remove(idx);
        self.notify(ChangeKind::ElementRemoved(id));
        Ok(removed)
    }

    /// Everything the user sees, overlays and guides included.
    pub fn render_preview(&self) -> WrapResult<Raster> {
        self.render(|_| true)
    }

    fn render(&self, include: impl Fn(&DesignElement) -> bool) -> WrapResult<Raster> {
        let width = self.page.width.round().max(0.0) as u32;
        let height = self.page.height.round().max(0.0) as u32;
        let mut out = Raster::new(width, height)?;
        let bounds = out.bounds();
        fill_rect(&mut out, bounds, self.background);

        let (top, normal): (Vec<&DesignElement>, Vec<&DesignElement>) = self
            .elements
            .iter()
            .filter(|e| e.attrs.visible && include(*e))
            .partition(|e| e.attrs.always_on_top);

        for el in normal.into_iter().chain(top) {
            let Some(src) = el.attrs.source.as_deref() else {
                continue;
            };
            let w = el.attrs.width.round();
            let h = el.attrs.height.round();
            if w < 1.0 || h < 1.0 || src.is_empty() {
                continue;
            }
            let scaled = src.resized(w as u32, h as u32)?;
            draw_over_at(
                &mut out,
                &scaled,
                el.attrs.x.round() as i64,
                el.attrs.y.round() as i64,
            );
        }
        Ok(out)
    }

    fn position(&self, id: ElementId) -> WrapResult<usize> {
        self.elements
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| WrapError::validation(format!("unknown element {}", id.0)))
    }

    fn notify(&mut self, kind: ChangeKind) {
        self.revision += 1;
        let event = ChangeEvent {
            revision: self.revision,
            kind,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl DesignSurface for InMemorySurface {
    fn render_snapshot(&self) -> WrapResult<Raster> {
        self.render(|e| e.attrs.show_in_export)
    }

    fn on_change(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    fn page_size(&self) -> Size {
        self.page
    }

    fn set_page_size(&mut self, width: f64, height: f64) {
        self.page = Size::new(width, height);
        self.notify(ChangeKind::PageResized);
    }

    fn element(&self, id: ElementId) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> WrapResult<()> {
        let idx = self.position(id)?;
        if patch.apply(&mut self.elements[idx].attrs) {
            self.notify(ChangeKind::ElementUpdated(id));
        }
        Ok(())
    }

    fn add_element(&mut self, attrs: ElementAttrs) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push(DesignElement { id, attrs });
        self.notify(ChangeKind::ElementAdded(id));
        id
    }

    fn find(&self, predicate: &dyn Fn(&DesignElement) -> bool) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| predicate(e))
            .map(|e| e.id)
            .collect()
    }

    fn move_to_bottom(&mut self, id: ElementId) -> WrapResult<()> {
        let idx = self.position(id)?;
        if idx != 0 {
            let el = self.elements.remove(idx);
            self.elements.insert(0, el);
            self.notify(ChangeKind::ElementReordered(id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/memory.rs"]
mod tests;
