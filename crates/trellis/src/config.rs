use serde::Deserialize;

use crate::{
    error::Result,
    rgb,
    style::{Background, BorderStyle, Colour, FontSpec, Style, TextEffects},
};

/// A layout dimension or offset. The variant selects the resolution mode.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    /// A pixel count.
    Absolute(i32),
    /// A fraction of the parent's actual size.
    Relative(f64),
}

impl Measure {
    /// Resolve against the parent's actual size along the same axis.
    pub fn resolve(self, parent: i32) -> i32 {
        match self {
            Self::Absolute(px) => px,
            Self::Relative(f) => (f * parent as f64).round() as i32,
        }
    }
}

impl From<f64> for Measure {
    fn from(f: f64) -> Self {
        Self::Relative(f)
    }
}

impl From<i32> for Measure {
    fn from(px: i32) -> Self {
        Self::Absolute(px)
    }
}

/// Stored layout of a window. Geometry is always derived from these values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Width.
    pub width: Measure,
    /// Height.
    pub height: Measure,
    /// Horizontal offset inside the parent's content area.
    pub x: Measure,
    /// Vertical offset inside the parent's content area.
    pub y: Measure,
}

/// Construction-time options for a window. Every field is optional; unset
/// fields fall back to the widget's defaults and then to the base window
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Horizontal offset.
    pub x: Option<Measure>,
    /// Vertical offset.
    pub y: Option<Measure>,
    /// Width.
    pub width: Option<Measure>,
    /// Height.
    pub height: Option<Measure>,
    /// Background colour, or transparent.
    pub background: Option<Background>,
    /// Border width in pixels.
    pub border_width: Option<u32>,
    /// Border colour.
    pub border_colour: Option<Colour>,
    /// Border style.
    pub border_style: Option<BorderStyle>,
    /// Padding in pixels.
    pub padding: Option<u32>,
    /// Font family.
    pub font: Option<String>,
    /// Font colour.
    pub font_colour: Option<Colour>,
    /// Font size in pixels.
    pub font_size: Option<u32>,
    /// Anti-aliased text.
    pub font_aa: Option<bool>,
    /// Bold text.
    pub bold: Option<bool>,
    /// Italic text.
    pub italic: Option<bool>,
    /// Underlined text.
    pub underline: Option<bool>,
    /// Initial text for text-bearing widgets.
    pub text: Option<String>,
    /// Maximum input length for entry widgets.
    pub max_length: Option<usize>,
}

impl Config {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON object.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Set the horizontal offset.
    pub fn x(mut self, x: impl Into<Measure>) -> Self {
        self.x = Some(x.into());
        self
    }

    /// Set the vertical offset.
    pub fn y(mut self, y: impl Into<Measure>) -> Self {
        self.y = Some(y.into());
        self
    }

    /// Set the width.
    pub fn width(mut self, width: impl Into<Measure>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the height.
    pub fn height(mut self, height: impl Into<Measure>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set the background.
    pub fn background(mut self, background: impl Into<Background>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Set the border width.
    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    /// Set the border colour.
    pub fn border_colour(mut self, colour: Colour) -> Self {
        self.border_colour = Some(colour);
        self
    }

    /// Set the border style.
    pub fn border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Set the padding.
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the font family.
    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font = Some(family.into());
        self
    }

    /// Set the font colour.
    pub fn font_colour(mut self, colour: Colour) -> Self {
        self.font_colour = Some(colour);
        self
    }

    /// Set the font size.
    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Enable or disable anti-aliasing.
    pub fn font_aa(mut self, aa: bool) -> Self {
        self.font_aa = Some(aa);
        self
    }

    /// Enable or disable bold text.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Enable or disable italic text.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Enable or disable underlined text.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Set the initial text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the maximum input length.
    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }
}

/// A fully resolved layout and style for a new window.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    /// Resolved layout.
    pub layout: Layout,
    /// Resolved style.
    pub style: Style,
}

impl Defaults {
    /// The base defaults every window starts from.
    pub fn window() -> Self {
        Self {
            layout: Layout {
                width: Measure::Relative(1.0),
                height: Measure::Absolute(0),
                x: Measure::Absolute(0),
                y: Measure::Absolute(0),
            },
            style: Style {
                background: Some(rgb!("#d3d1cb")),
                border_width: 0,
                border_colour: rgb!("#484848"),
                border_style: BorderStyle::Solid,
                padding: 0,
                font: FontSpec {
                    family: "Tahoma".into(),
                    size: 14,
                    colour: Colour::BLACK,
                    antialias: true,
                    effects: TextEffects::default(),
                },
            },
        }
    }

    /// Overlay the set fields of `config` on these defaults.
    pub fn apply(mut self, config: &Config) -> Self {
        let layout = &mut self.layout;
        layout.x = config.x.unwrap_or(layout.x);
        layout.y = config.y.unwrap_or(layout.y);
        layout.width = config.width.unwrap_or(layout.width);
        layout.height = config.height.unwrap_or(layout.height);

        let style = &mut self.style;
        if let Some(bg) = config.background {
            style.background = bg.into();
        }
        style.border_width = config.border_width.unwrap_or(style.border_width);
        style.border_colour = config.border_colour.unwrap_or(style.border_colour);
        style.border_style = config.border_style.unwrap_or(style.border_style);
        style.padding = config.padding.unwrap_or(style.padding);

        let font = &mut style.font;
        if let Some(family) = &config.font {
            font.family.clone_from(family);
        }
        font.colour = config.font_colour.unwrap_or(font.colour);
        font.size = config.font_size.unwrap_or(font.size);
        font.antialias = config.font_aa.unwrap_or(font.antialias);
        font.effects.bold = config.bold.unwrap_or(font.effects.bold);
        font.effects.italic = config.italic.unwrap_or(font.effects.italic);
        font.effects.underline = config.underline.unwrap_or(font.effects.underline);
        self
    }

    /// Resolve a window's settings: explicit config over widget defaults over
    /// the base defaults.
    pub fn resolve(widget: &Config, config: &Config) -> Self {
        Self::window().apply(widget).apply(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn measure_type_tag() -> Result<()> {
        let c = Config::from_json(r#"{"width": 0.5, "height": 20, "x": 1.0, "y": -3}"#)?;
        assert_eq!(c.width, Some(Measure::Relative(0.5)));
        assert_eq!(c.height, Some(Measure::Absolute(20)));
        assert_eq!(c.x, Some(Measure::Relative(1.0)));
        assert_eq!(c.y, Some(Measure::Absolute(-3)));
        assert_eq!(Measure::Relative(0.25).resolve(801), 200);
        assert_eq!(Measure::Absolute(7).resolve(801), 7);
        Ok(())
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Config::from_json(r#"{"colour": "red"}"#).is_err());
        assert!(Config::from_json(r#"{"border_style": "groove"}"#).is_err());
    }

    #[test]
    fn precedence() -> Result<()> {
        let widget = Config::new()
            .padding(2)
            .background(Colour::WHITE)
            .border_width(1)
            .border_style(BorderStyle::Inset);
        let explicit = Config::from_json(
            r#"{"padding": 5, "background": "transparent", "bold": true, "font": "Mono"}"#,
        )?;
        let d = Defaults::resolve(&widget, &explicit);
        assert_eq!(d.style.padding, 5);
        assert_eq!(d.style.background, None);
        assert_eq!(d.style.border_width, 1);
        assert_eq!(d.style.border_style, BorderStyle::Inset);
        assert_eq!(d.style.border_colour, Colour::rgb(0x48, 0x48, 0x48));
        assert!(d.style.font.effects.bold);
        assert_eq!(d.style.font.family, "Mono");
        assert_eq!(d.style.font.size, 14);
        assert_eq!(d.layout.width, Measure::Relative(1.0));
        assert_eq!(d.layout.height, Measure::Absolute(0));
        Ok(())
    }
}
