use super::{fonts::FixedFonts, log::EventLog};
use crate::{
    config::Config,
    error::Result,
    event::{EventKind, InputEvent, key::KeyCode},
    geom::{Expanse, Point},
    id::WindowId,
    style::Colour,
    surface::Surface,
    tree::Tree,
};

/// Every event kind, for watching a window exhaustively.
pub const ALL_KINDS: &[EventKind] = &[
    EventKind::MouseOver,
    EventKind::MouseOut,
    EventKind::MouseDown,
    EventKind::MouseUp,
    EventKind::Click,
    EventKind::Focus,
    EventKind::Blur,
    EventKind::KeyDown,
    EventKind::KeyUp,
    EventKind::KeyPress,
    EventKind::Reconfigure,
];

/// A simple harness that holds a [`Tree`] using [`FixedFonts`], a white
/// software [`Surface`] to draw on, and an [`EventLog`]. Tests drive the tree
/// by sending input and triggering draws, then inspect the log or the pixels.
pub struct Harness {
    /// The tree under test.
    pub tree: Tree,
    /// Draw target.
    pub canvas: Surface,
    /// Shared event log.
    pub log: EventLog,
}

impl Harness {
    /// Create a harness with a root of `width` x `height`.
    pub fn new(width: u32, height: u32) -> Self {
        let size = Expanse::new(width, height);
        Self {
            tree: Tree::new(size, FixedFonts),
            canvas: Surface::filled(size, Colour::WHITE),
            log: EventLog::new(),
        }
    }

    /// The root window.
    pub fn root(&self) -> WindowId {
        self.tree.root()
    }

    /// Add a container window.
    pub fn add(&mut self, parent: impl Into<WindowId>, config: &Config) -> Result<WindowId> {
        self.tree.add(parent, config)
    }

    /// Record every event delivered to `id`.
    pub fn watch(&mut self, id: impl Into<WindowId>) -> Result<()> {
        self.log.watch(&mut self.tree, id, ALL_KINDS)
    }

    /// Dispatch one input event.
    pub fn send(&mut self, event: InputEvent) -> Result<()> {
        self.tree.handle_input(&event)
    }

    /// Move the pointer.
    pub fn motion(&mut self, x: i32, y: i32) -> Result<()> {
        self.send(InputEvent::Motion(Point::new(x, y)))
    }

    /// Primary press at a point.
    pub fn press(&mut self, x: i32, y: i32) -> Result<()> {
        self.send(InputEvent::press((x, y)))
    }

    /// Primary release at a point.
    pub fn release(&mut self, x: i32, y: i32) -> Result<()> {
        self.send(InputEvent::release((x, y)))
    }

    /// Primary press and release at the same point.
    pub fn click(&mut self, x: i32, y: i32) -> Result<()> {
        self.press(x, y)?;
        self.release(x, y)
    }

    /// Press and release a key.
    pub fn key(&mut self, key: impl Into<KeyCode>) -> Result<()> {
        let key = key.into();
        self.send(InputEvent::key_down(key))?;
        self.send(InputEvent::key_up(key))
    }

    /// Type each character of `text`.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.key(c)?;
        }
        Ok(())
    }

    /// Run one draw pass onto the harness surface.
    pub fn draw(&mut self) -> Result<()> {
        self.tree.draw(&mut self.canvas)
    }
}
