use tracing::trace;

use crate::{
    error::Result,
    event::{Event, InputEvent, MouseButton},
    geom::Point,
    tree::Tree,
};

impl Tree {
    /// Dispatch a batch of input events in order. The first callback error
    /// aborts the rest of the batch.
    pub fn process_events<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_input(&event)?;
        }
        Ok(())
    }

    /// Dispatch a single input event.
    ///
    /// Pointer events are hit-tested against every descendant of the root in
    /// traversal order, and every window that matches receives its own event.
    /// Nothing bubbles to ancestors. Key events go to the focused window.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<()> {
        trace!(?event, "dispatch");
        match event {
            InputEvent::Motion(pos) => self.pointer_motion(*pos),
            InputEvent::ButtonDown { pos, button } => self.button_down(*pos, *button),
            InputEvent::ButtonUp { pos, button } => self.button_up(*pos, *button),
            InputEvent::KeyDown { text, key, mods } => match self.focus {
                Some(focus) => self.trigger(focus, &Event::KeyDown {
                    text: text.clone(),
                    key: *key,
                    mods: *mods,
                }),
                None => Ok(()),
            },
            InputEvent::KeyUp { key, mods } => {
                if let Some(focus) = self.focus {
                    self.trigger(focus, &Event::KeyUp {
                        key: *key,
                        mods: *mods,
                    })?;
                }
                // The KeyUp handler may have moved focus.
                if let Some(focus) = self.focus {
                    self.trigger(focus, &Event::KeyPress {
                        key: *key,
                        mods: *mods,
                    })?;
                }
                Ok(())
            }
            InputEvent::Resize(size) => {
                self.set_root_size(*size)?;
                self.trigger(self.root, &Event::Reconfigure)
            }
            InputEvent::Quit => Ok(()),
        }
    }

    /// Fire `MouseOver` on windows the pointer entered and `MouseOut` on
    /// windows it left.
    fn pointer_motion(&mut self, pos: Point) -> Result<()> {
        let previous = self.pointer;
        for id in self.descendants(self.root)? {
            // Skip windows removed by an earlier callback.
            if !self.contains(id) {
                continue;
            }
            let rect = self.rect(id)?;
            let was = previous.is_some_and(|p| rect.contains_point(p));
            let is = rect.contains_point(pos);
            if is && !was {
                self.trigger(id, &Event::MouseOver)?;
            } else if was && !is {
                self.trigger(id, &Event::MouseOut)?;
            }
        }
        self.pointer = Some(pos);
        Ok(())
    }

    /// Fire `MouseDown` on every hit window. A primary press makes the last
    /// hit, the topmost window, the pending click target.
    fn button_down(&mut self, pos: Point, button: MouseButton) -> Result<()> {
        let primary = button == MouseButton::Primary;
        if primary {
            self.pressed = None;
        }
        for id in self.descendants(self.root)? {
            if !self.contains(id) || !self.rect(id)?.contains_point(pos) {
                continue;
            }
            self.trigger(id, &Event::MouseDown { pos, button })?;
            if primary {
                self.pressed = Some(id);
            }
        }
        Ok(())
    }

    /// Fire `MouseUp` on every hit window, and `Click` on the pending click
    /// target if the primary release landed on it.
    fn button_up(&mut self, pos: Point, button: MouseButton) -> Result<()> {
        let primary = button == MouseButton::Primary;
        let pending = if primary { self.pressed.take() } else { None };
        for id in self.descendants(self.root)? {
            if !self.contains(id) || !self.rect(id)?.contains_point(pos) {
                continue;
            }
            self.trigger(id, &Event::MouseUp { pos, button })?;
            if pending == Some(id) {
                self.trigger(id, &Event::Click)?;
            }
        }
        Ok(())
    }
}
