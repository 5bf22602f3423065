//! Tests for the label widget.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use trellis::{
        Background, Canvas, Colour, Config, Result, TextEffects,
        geom::{Expanse, Rect},
        testing::Harness,
    };
    use trellis_widgets::Label;

    #[test]
    fn sizes_to_text() -> Result<()> {
        let mut h = Harness::new(200, 100);
        let root = h.root();
        let l = Label::create(
            &mut h.tree,
            root,
            &Config::new().text("abc").padding(2).border_width(1),
        )?;
        // FixedFonts: 14px text is 7px per glyph.
        assert_eq!(h.tree.requested_width(l)?, 21 + 6);
        assert_eq!(h.tree.requested_height(l)?, 14 + 6);
        assert_eq!(h.tree.widget::<Label>(l)?.text(), "abc");
        Ok(())
    }

    #[test]
    fn size_ignores_configured_extent() -> Result<()> {
        let mut h = Harness::new(200, 100);
        let root = h.root();
        let l = Label::create(
            &mut h.tree,
            root,
            &Config::new().text("ab").width(150).height(60),
        )?;
        assert_eq!(h.tree.rect(l)?.expanse(), Expanse::new(14, 14));
        Ok(())
    }

    #[test]
    fn set_text_resizes_and_redraws() -> Result<()> {
        let mut h = Harness::new(200, 100);
        let root = h.root();
        let l = Label::create(&mut h.tree, root, &Config::new().text("a"))?;
        h.draw()?;
        assert!(!h.tree.needs_redraw(l)?);
        assert_eq!(h.tree.surface(l)?.map(|s| s.size()), Some(Expanse::new(7, 14)));

        h.tree.with_widget(l, |w: &mut Label| w.set_text("abcd"))?;
        assert!(h.tree.needs_redraw(l)?);
        assert_eq!(h.tree.actual_width(l)?, 28);
        h.draw()?;
        assert_eq!(h.tree.surface(l)?.map(|s| s.size()), Some(Expanse::new(28, 14)));
        Ok(())
    }

    #[test]
    fn text_drawn_in_font_colour() -> Result<()> {
        let mut h = Harness::new(50, 50);
        let root = h.root();
        let red = Colour::rgb(255, 0, 0);
        Label::create(
            &mut h.tree,
            root,
            &Config::new()
                .text("x y")
                .x(10)
                .y(10)
                .font_colour(red)
                .background(Background::Transparent),
        )?;
        h.draw()?;
        let glyph = Rect::new(10, 10, 7, 14);
        assert!(h.canvas.is_filled(glyph, red));
        // The space is transparent, so the canvas shows through.
        assert_eq!(h.canvas.get((17, 10)), Some(Colour::WHITE));
        assert_eq!(h.canvas.get((24, 10)), Some(red));
        Ok(())
    }

    #[test]
    fn effects_come_from_config() -> Result<()> {
        let mut h = Harness::new(50, 50);
        let root = h.root();
        let l = Label::create(
            &mut h.tree,
            root,
            &Config::new().text("a").bold(true).underline(true),
        )?;
        assert_eq!(h.tree.window(l)?.style().font.effects, TextEffects {
            bold: true,
            italic: false,
            underline: true,
        });
        Ok(())
    }
}
