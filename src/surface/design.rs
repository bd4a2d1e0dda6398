use crate::foundation::core::{Raster, Size};
use crate::foundation::error::WrapResult;
use crate::surface::element::{DesignElement, ElementAttrs, ElementId, ElementPatch};

/// What changed on a design surface. Listeners must not rely on more than "something changed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    ElementAdded(ElementId),
    ElementUpdated(ElementId),
    ElementRemoved(ElementId),
    ElementReordered(ElementId),
    PageResized,
}

/// Notification emitted after every mutation of a design surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Surface revision after the mutation.
    pub revision: u64,
    pub kind: ChangeKind,
}

pub type ChangeListener = Box<dyn FnMut(&ChangeEvent)>;

/// The editable design the wrap compositor decorates.
///
/// The compositor owns nothing on the surface except its overlay layers; every other element
/// belongs to the user. Implementations fire registered listeners synchronously after each
/// mutation.
pub trait DesignSurface {
    /// Render the current visual state, excluding invisible elements and elements whose
    /// `show_in_export` flag is off.
    fn render_snapshot(&self) -> WrapResult<Raster>;

    /// Register a listener fired after every mutation.
    fn on_change(&mut self, listener: ChangeListener);

    fn page_size(&self) -> Size;

    fn set_page_size(&mut self, width: f64, height: f64);

    fn element(&self, id: ElementId) -> Option<&DesignElement>;

    fn update_element(&mut self, id: ElementId, patch: ElementPatch) -> WrapResult<()>;

    fn add_element(&mut self, attrs: ElementAttrs) -> ElementId;

    /// Ids of all elements matching `predicate`, bottom-most first.
    fn find(&self, predicate: &dyn Fn(&DesignElement) -> bool) -> Vec<ElementId>;

    /// Move an element below every other element.
    fn move_to_bottom(&mut self, id: ElementId) -> WrapResult<()>;
}
