//! Window style: background, border, padding and font.

/// RGBA colours and backgrounds.
mod colour;

use serde::Deserialize;

pub use colour::{Background, Colour};

/// How a border is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// A flat outline in the border colour.
    #[default]
    Solid,
    /// A bevel that appears pressed into the surface.
    Inset,
    /// A bevel that appears raised from the surface.
    Outset,
}

/// Text effects applied when measuring and rendering text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextEffects {
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
}

/// Font settings hosted by every window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// Family name passed to the font service.
    pub family: String,
    /// Pixel size.
    pub size: u32,
    /// Foreground colour.
    pub colour: Colour,
    /// Render with anti-aliasing.
    pub antialias: bool,
    /// Bold, italic and underline flags.
    pub effects: TextEffects,
}

/// Visual style of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Background fill, `None` for transparent.
    pub background: Option<Colour>,
    /// Border width in pixels.
    pub border_width: u32,
    /// Border colour.
    pub border_colour: Colour,
    /// Border rendering style.
    pub border_style: BorderStyle,
    /// Padding inside the border, in pixels.
    pub padding: u32,
    /// Font used by text-bearing widgets.
    pub font: FontSpec,
}

impl Style {
    /// Padding plus border width: the distance from the window edge to its
    /// content on every side.
    pub fn inset(&self) -> u32 {
        self.padding.saturating_add(self.border_width)
    }
}
