use tracing::debug;

use crate::{error::Result, event::Event, id::WindowId, tree::Tree};

/// Keyboard focus: at most one window holds it at a time.
pub trait FocusManager {
    /// The window holding focus, if any.
    fn focused(&self) -> Option<WindowId>;

    /// Does the window hold focus?
    fn is_focused(&self, id: WindowId) -> bool;

    /// Move focus. `Blur` fires on the previous holder before `Focus` fires
    /// on the new one. Setting the current holder again does nothing.
    /// Returns `true` if focus changed.
    fn set_focus(&mut self, id: Option<WindowId>) -> Result<bool>;

    /// Focus a window.
    fn grab_focus(&mut self, id: WindowId) -> Result<bool> {
        self.set_focus(Some(id))
    }

    /// Remove focus from whichever window holds it.
    fn clear_focus(&mut self) -> Result<bool> {
        self.set_focus(None)
    }

    /// Drop focus if it points at a window that no longer exists.
    fn ensure_focus_valid(&mut self);
}

impl FocusManager for Tree {
    fn focused(&self) -> Option<WindowId> {
        self.focus
    }

    fn is_focused(&self, id: WindowId) -> bool {
        self.focus == Some(id)
    }

    fn set_focus(&mut self, id: Option<WindowId>) -> Result<bool> {
        if self.focus == id {
            return Ok(false);
        }
        if let Some(id) = id {
            // Validate before any event fires.
            self.window(id)?;
        }
        if let Some(old) = self.focus {
            self.trigger(old, &Event::Blur)?;
        }
        debug!(old = ?self.focus, new = ?id, "focus changed");
        self.focus = id;
        if let Some(new) = id {
            self.trigger(new, &Event::Focus)?;
        }
        Ok(true)
    }

    fn ensure_focus_valid(&mut self) {
        if let Some(id) = self.focus
            && !self.nodes.contains_key(id)
        {
            self.focus = None;
        }
    }
}
