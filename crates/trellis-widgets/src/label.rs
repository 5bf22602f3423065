//! Static text.

use trellis::{
    Config, Draw, DrawContext, Result, Tree, TypedId, Widget, WindowId,
};

/// A line of text. The window sizes itself to the text plus its inset.
#[derive(Debug, Clone, Default)]
pub struct Label {
    /// Displayed text.
    text: String,
}

impl Label {
    /// A label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Add a label under `parent`. The text comes from `config.text`.
    pub fn create(
        tree: &mut Tree,
        parent: impl Into<WindowId>,
        config: &Config,
    ) -> Result<TypedId<Self>> {
        let label = Self::new(config.text.clone().unwrap_or_default());
        tree.create(parent, label, config)
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text. Use through [`Tree::with_widget`] so the
    /// window is marked dirty.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Text size plus the window's inset on both sides.
    fn measure(&self, tree: &Tree, id: WindowId) -> Result<(i32, i32)> {
        let style = tree.window(id)?.style();
        let size = tree.fonts().get(&style.font)?.size(&self.text, style.font.effects);
        let inset = tree.inset(id)?.saturating_mul(2);
        let w = i32::try_from(size.w).unwrap_or(i32::MAX);
        let h = i32::try_from(size.h).unwrap_or(i32::MAX);
        Ok((w.saturating_add(inset), h.saturating_add(inset)))
    }
}

impl Widget for Label {
    fn name(&self) -> &'static str {
        "Label"
    }

    fn requested_width(&self, tree: &Tree, id: WindowId) -> Result<Option<i32>> {
        Ok(Some(self.measure(tree, id)?.0))
    }

    fn requested_height(&self, tree: &Tree, id: WindowId) -> Result<Option<i32>> {
        Ok(Some(self.measure(tree, id)?.1))
    }

    fn renderer(&mut self) -> Option<&mut dyn Draw> {
        Some(self)
    }
}

impl Draw for Label {
    fn draw(&mut self, ctx: &mut DrawContext<'_>) -> Result<()> {
        let font = ctx.font()?;
        let spec = &ctx.style.font;
        let surface = font.render(&self.text, spec.effects, spec.antialias, spec.colour, None)?;
        ctx.set_surface(surface);
        Ok(())
    }
}
