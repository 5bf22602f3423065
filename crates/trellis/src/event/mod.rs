/// Raw input events.
mod input;
/// Keyboard primitives.
pub mod key;

pub use input::{InputEvent, MouseButton};
use key::{KeyCode, Mods};

use crate::geom::Point;

/// An event delivered to a window's callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The pointer entered the window.
    MouseOver,
    /// The pointer left the window.
    MouseOut,
    /// A button was pressed over the window.
    MouseDown {
        /// Pointer position in screen coordinates.
        pos: Point,
        /// Button pressed.
        button: MouseButton,
    },
    /// A button was released over the window.
    MouseUp {
        /// Pointer position in screen coordinates.
        pos: Point,
        /// Button released.
        button: MouseButton,
    },
    /// A primary press and release both landed on the window.
    Click,
    /// The window gained input focus.
    Focus,
    /// The window lost input focus.
    Blur,
    /// A key was pressed while the window held focus.
    KeyDown {
        /// Text produced by the key.
        text: String,
        /// Logical key.
        key: KeyCode,
        /// Active modifiers.
        mods: Mods,
    },
    /// A key was released while the window held focus.
    KeyUp {
        /// Logical key.
        key: KeyCode,
        /// Active modifiers.
        mods: Mods,
    },
    /// Follows every `KeyUp`.
    KeyPress {
        /// Logical key.
        key: KeyCode,
        /// Active modifiers.
        mods: Mods,
    },
    /// The window's geometry changed. Only fired explicitly.
    Reconfigure,
}

/// The kind of an [`Event`], used to key callback tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// See [`Event::MouseOver`].
    MouseOver,
    /// See [`Event::MouseOut`].
    MouseOut,
    /// See [`Event::MouseDown`].
    MouseDown,
    /// See [`Event::MouseUp`].
    MouseUp,
    /// See [`Event::Click`].
    Click,
    /// See [`Event::Focus`].
    Focus,
    /// See [`Event::Blur`].
    Blur,
    /// See [`Event::KeyDown`].
    KeyDown,
    /// See [`Event::KeyUp`].
    KeyUp,
    /// See [`Event::KeyPress`].
    KeyPress,
    /// See [`Event::Reconfigure`].
    Reconfigure,
}

impl Event {
    /// The kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::MouseOver => EventKind::MouseOver,
            Self::MouseOut => EventKind::MouseOut,
            Self::MouseDown { .. } => EventKind::MouseDown,
            Self::MouseUp { .. } => EventKind::MouseUp,
            Self::Click => EventKind::Click,
            Self::Focus => EventKind::Focus,
            Self::Blur => EventKind::Blur,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::KeyUp { .. } => EventKind::KeyUp,
            Self::KeyPress { .. } => EventKind::KeyPress,
            Self::Reconfigure => EventKind::Reconfigure,
        }
    }
}
