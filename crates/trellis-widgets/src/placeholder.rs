//! A font service that needs no font files.

use trellis::{
    Canvas, Colour, Font, FontService, Result, Surface, TextEffects,
    geom::{Expanse, Rect},
};

/// Draws every glyph as a hollow box. Useful when no font file is at hand:
/// layout and sizing still work, the text just isn't legible. Any family
/// name opens successfully.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxFonts;

impl FontService for BoxFonts {
    fn open(&self, _family: &str, size: u32) -> Result<Box<dyn Font>> {
        Ok(Box::new(BoxFont { size }))
    }
}

/// A font opened by [`BoxFonts`].
#[derive(Debug, Clone, Copy)]
struct BoxFont {
    /// Pixel size.
    size: u32,
}

impl BoxFont {
    /// Horizontal advance of one glyph.
    fn advance(&self) -> u32 {
        (self.size * 3 / 5).max(1)
    }
}

impl Font for BoxFont {
    fn size(&self, text: &str, _effects: TextEffects) -> Expanse {
        let n = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        Expanse::new(n.saturating_mul(self.advance()), self.size)
    }

    fn height(&self) -> u32 {
        self.size
    }

    fn render(
        &self,
        text: &str,
        effects: TextEffects,
        _antialias: bool,
        fg: Colour,
        bg: Option<Colour>,
    ) -> Result<Surface> {
        let size = self.size(text, effects);
        let mut out = Surface::filled(size, bg.unwrap_or(Colour::TRANSPARENT));
        let advance = self.advance();
        let stroke = if effects.bold { 2 } else { 1 };
        let mut x = 0;
        for c in text.chars() {
            if !c.is_whitespace() && advance > 2 && self.size > 2 {
                let cell = Rect::new(x + 1, 1, advance - 2, self.size - 2);
                out.rect_outline(cell, fg, stroke)?;
            }
            x = x.saturating_add_unsigned(advance);
        }
        if effects.underline && size.h > 0 {
            out.fill_rect(Rect::new(0, size.h as i32 - 1, size.w, 1), fg)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_are_hollow() -> Result<()> {
        let font = BoxFonts.open("Anything", 10)?;
        assert_eq!(font.size("ab", TextEffects::default()), Expanse::new(12, 10));
        assert_eq!(font.height(), 10);

        let s = font.render("a b", TextEffects::default(), true, Colour::BLACK, None)?;
        assert_eq!(s.size(), Expanse::new(18, 10));
        assert_eq!(s.get((1, 1)), Some(Colour::BLACK));
        assert_eq!(s.get((3, 4)), Some(Colour::TRANSPARENT));
        assert_eq!(s.get((0, 0)), Some(Colour::TRANSPARENT));
        // The space leaves its cell empty.
        assert!(s.is_filled(Rect::new(6, 0, 6, 10), Colour::TRANSPARENT));
        assert_eq!(s.get((13, 1)), Some(Colour::BLACK));
        Ok(())
    }

    #[test]
    fn underline_spans_text() -> Result<()> {
        let font = BoxFonts.open("Anything", 10)?;
        let effects = TextEffects {
            underline: true,
            ..TextEffects::default()
        };
        let s = font.render("  ", effects, true, Colour::BLACK, Some(Colour::WHITE))?;
        assert!(s.is_filled(Rect::new(0, 9, 12, 1), Colour::BLACK));
        assert_eq!(s.get((5, 5)), Some(Colour::WHITE));
        Ok(())
    }
}
