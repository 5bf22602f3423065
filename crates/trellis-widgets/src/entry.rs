//! Single-line text input.

use trellis::{
    BorderStyle, Colour, Config, Draw, DrawContext, Event, EventKind, FocusManager, Result, Tree,
    TypedId, Widget, WindowId, event::key::KeyCode, geom::Rect,
};
use unicode_segmentation::UnicodeSegmentation;

/// A one-line text field. Clicking focuses it, typed keys append text and
/// backspace removes the last grapheme. When the text outgrows the field the
/// tail stays visible.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    /// Current contents.
    buffer: String,
    /// Maximum length in graphemes, unlimited if unset.
    max_length: Option<usize>,
}

impl Entry {
    /// An empty entry.
    pub fn new(max_length: Option<usize>) -> Self {
        Self {
            buffer: String::new(),
            max_length,
        }
    }

    /// Add an entry under `parent`. Its height is fixed to the font's line
    /// height.
    pub fn create(
        tree: &mut Tree,
        parent: impl Into<WindowId>,
        config: &Config,
    ) -> Result<TypedId<Self>> {
        let mut entry = Self::new(config.max_length);
        if let Some(text) = &config.text {
            entry.set_value(text);
        }
        let id = tree.create(parent, entry, config)?;

        let height = {
            let style = tree.window(id)?.style();
            tree.fonts().get(&style.font)?.height()
        };
        tree.set_height(id, height as i32)?;

        tree.bind(id, EventKind::Click, |tree, id, _| {
            tree.grab_focus(id).map(|_| ())
        })?;
        tree.bind(id, EventKind::KeyDown, |tree, id, event| {
            if let Event::KeyDown { text, key, .. } = event {
                tree.with_widget(id, |e: &mut Self| e.key_down(*key, text))?;
            }
            Ok(())
        })?;
        Ok(id)
    }

    /// The current contents.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Replace the contents, truncated to the maximum length.
    pub fn set_value(&mut self, value: &str) {
        self.buffer = match self.max_length {
            Some(n) => value.graphemes(true).take(n).collect(),
            None => value.to_owned(),
        };
    }

    /// The maximum length in graphemes.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Apply one key press.
    fn key_down(&mut self, key: KeyCode, text: &str) {
        if key == KeyCode::Backspace {
            if let Some((idx, _)) = self.buffer.grapheme_indices(true).next_back() {
                self.buffer.truncate(idx);
            }
            return;
        }
        if text.is_empty() || text.chars().any(char::is_control) {
            return;
        }
        let full = self
            .max_length
            .is_some_and(|n| self.buffer.graphemes(true).count() >= n);
        if !full {
            self.buffer.push_str(text);
        }
    }
}

impl Widget for Entry {
    fn name(&self) -> &'static str {
        "Entry"
    }

    fn defaults(&self) -> Config {
        Config::new()
            .padding(2)
            .background(Colour::WHITE)
            .border_width(1)
            .border_style(BorderStyle::Inset)
    }

    fn renderer(&mut self) -> Option<&mut dyn Draw> {
        Some(self)
    }
}

impl Draw for Entry {
    fn draw(&mut self, ctx: &mut DrawContext<'_>) -> Result<()> {
        let font = ctx.font()?;
        let spec = &ctx.style.font;
        let surface = font.render(
            &self.buffer,
            spec.effects,
            spec.antialias,
            spec.colour,
            ctx.style.background,
        )?;
        let content = ctx.content;
        // Show the trailing slice when the text is wider than the field.
        let area = (surface.width() > content.w).then(|| {
            Rect::new(
                (surface.width() - content.w) as i32,
                0,
                content.w,
                content.h,
            )
        });
        ctx.set_surface(surface);
        ctx.set_surface_area(area);
        Ok(())
    }
}
