use crate::{
    canvas::Canvas,
    error::Result,
    font::{Font, FontService},
    geom::{Expanse, Rect},
    style::{Colour, TextEffects},
    surface::Surface,
};

/// A font service with fixed metrics: every glyph is half the font size wide
/// and the full size tall. Any family name opens successfully.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFonts;

impl FontService for FixedFonts {
    fn open(&self, _family: &str, size: u32) -> Result<Box<dyn Font>> {
        Ok(Box::new(FixedFont { size }))
    }
}

/// A font opened by [`FixedFonts`].
#[derive(Debug, Clone, Copy)]
pub struct FixedFont {
    /// Pixel size.
    size: u32,
}

impl FixedFont {
    /// Width of one glyph cell.
    fn advance(&self) -> u32 {
        self.size / 2
    }
}

impl Font for FixedFont {
    fn size(&self, text: &str, _effects: TextEffects) -> Expanse {
        Expanse::new(text.chars().count() as u32 * self.advance(), self.size)
    }

    fn height(&self) -> u32 {
        self.size
    }

    /// Non-space glyphs render as solid foreground cells. Underlines fill the
    /// bottom row.
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
        for (i, c) in text.chars().enumerate() {
            if !c.is_whitespace() {
                let x = (i as u32 * advance) as i32;
                out.fill_rect(Rect::new(x, 0, advance, self.size), fg)?;
            }
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
    fn metrics() -> Result<()> {
        let font = FixedFonts.open("Anything", 14)?;
        assert_eq!(font.size("abc", TextEffects::default()), Expanse::new(21, 14));
        assert_eq!(font.height(), 14);
        let s = font.render("a b", TextEffects::default(), true, Colour::BLACK, None)?;
        assert_eq!(s.size(), Expanse::new(21, 14));
        assert!(s.is_filled(Rect::new(0, 0, 7, 14), Colour::BLACK));
        assert!(s.is_filled(Rect::new(7, 0, 7, 14), Colour::TRANSPARENT));
        Ok(())
    }
}
