use super::key::{KeyCode, Mods};
use crate::geom::{Expanse, Point};

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The primary (usually left) button.
    Primary,
    /// The middle button.
    Middle,
    /// The secondary (usually right) button.
    Secondary,
    /// Any other button, by backend number.
    Other(u8),
}

/// A raw event delivered by the input source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The pointer moved to a new position.
    Motion(Point),
    /// A mouse button was pressed.
    ButtonDown {
        /// Pointer position.
        pos: Point,
        /// Button pressed.
        button: MouseButton,
    },
    /// A mouse button was released.
    ButtonUp {
        /// Pointer position.
        pos: Point,
        /// Button released.
        button: MouseButton,
    },
    /// A key was pressed.
    KeyDown {
        /// Text produced by the key, possibly empty.
        text: String,
        /// Logical key.
        key: KeyCode,
        /// Active modifiers.
        mods: Mods,
    },
    /// A key was released.
    KeyUp {
        /// Logical key.
        key: KeyCode,
        /// Active modifiers.
        mods: Mods,
    },
    /// The output surface was resized.
    Resize(Expanse),
    /// The input source asked to quit. Dispatch ignores this.
    Quit,
}

impl InputEvent {
    /// A key press of `key` with no modifiers, carrying the key's natural text.
    pub fn key_down(key: impl Into<KeyCode>) -> Self {
        let key = key.into();
        Self::KeyDown {
            text: key.text().unwrap_or_default(),
            key,
            mods: Mods::default(),
        }
    }

    /// A key release of `key` with no modifiers.
    pub fn key_up(key: impl Into<KeyCode>) -> Self {
        Self::KeyUp {
            key: key.into(),
            mods: Mods::default(),
        }
    }

    /// A primary button press at `pos`.
    pub fn press(pos: impl Into<Point>) -> Self {
        Self::ButtonDown {
            pos: pos.into(),
            button: MouseButton::Primary,
        }
    }

    /// A primary button release at `pos`.
    pub fn release(pos: impl Into<Point>) -> Self {
        Self::ButtonUp {
            pos: pos.into(),
            button: MouseButton::Primary,
        }
    }
}
