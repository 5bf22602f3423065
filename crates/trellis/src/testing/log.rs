use std::{cell::RefCell, rc::Rc};

use crate::{
    error::Result,
    event::{Event, EventKind},
    id::WindowId,
    tree::Tree,
};

/// Records delivered events in order. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    /// Recorded (window, event) pairs.
    events: Rc<RefCell<Vec<(WindowId, Event)>>>,
}

impl EventLog {
    /// Construct an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a recording callback on `id` for each of `kinds`.
    pub fn watch(
        &self,
        tree: &mut Tree,
        id: impl Into<WindowId>,
        kinds: &[EventKind],
    ) -> Result<()> {
        let id = id.into();
        for kind in kinds {
            let events = Rc::clone(&self.events);
            tree.bind(id, *kind, move |_, target, event| {
                events.borrow_mut().push((target, event.clone()));
                Ok(())
            })?;
        }
        Ok(())
    }

    /// A copy of everything recorded so far.
    pub fn events(&self) -> Vec<(WindowId, Event)> {
        self.events.borrow().clone()
    }

    /// Return and clear the recorded events.
    pub fn take(&self) -> Vec<(WindowId, Event)> {
        self.events.take()
    }

    /// How many events of `kind` reached `id`.
    pub fn count(&self, id: impl Into<WindowId>, kind: EventKind) -> usize {
        let id = id.into();
        self.events
            .borrow()
            .iter()
            .filter(|(w, e)| *w == id && e.kind() == kind)
            .count()
    }

    /// The kinds delivered to `id`, in order.
    pub fn kinds(&self, id: impl Into<WindowId>) -> Vec<EventKind> {
        let id = id.into();
        self.events
            .borrow()
            .iter()
            .filter(|(w, _)| *w == id)
            .map(|(_, e)| e.kind())
            .collect()
    }
}
