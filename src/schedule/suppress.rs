use std::{cell::Cell, rc::Rc};

/// Shared "internal mutation in progress" flag.
///
/// Clones observe the same state. Change listeners check it when they fire and drop the
/// notification while any [`InternalMutation`] guard is alive. Dropped notifications are not
/// queued.
#[derive(Clone, Debug, Default)]
pub struct SuppressionFlag(Rc<Cell<u32>>);

impl SuppressionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suppressed(&self) -> bool {
        self.0.get() > 0
    }

    /// Open a scope during which change notifications are ignored.
    ///
    /// Scopes nest; suppression ends when the outermost guard drops, on every exit path.
    pub fn enter(&self) -> InternalMutation {
        self.0.set(self.0.get() + 1);
        InternalMutation(self.0.clone())
    }
}

/// Guard returned by [`SuppressionFlag::enter`].
#[must_use = "suppression ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct InternalMutation(Rc<Cell<u32>>);

impl Drop for InternalMutation {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/suppress.rs"]
mod tests;
