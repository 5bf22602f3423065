//! Tests for the entry widget.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use trellis::{
        BorderStyle, Colour, Config, FocusManager, Result, event::key::KeyCode, geom::Rect,
        testing::Harness,
    };
    use trellis_widgets::Entry;

    #[test]
    fn defaults_and_height() -> Result<()> {
        let mut h = Harness::new(200, 100);
        let root = h.root();
        let e = Entry::create(&mut h.tree, root, &Config::new().width(60))?;
        let style = h.tree.window(e)?.style();
        assert_eq!(style.padding, 2);
        assert_eq!(style.border_width, 1);
        assert_eq!(style.border_style, BorderStyle::Inset);
        assert_eq!(style.background, Some(Colour::WHITE));
        // Line height plus the inset.
        assert_eq!(h.tree.requested_height(e)?, 14 + 6);
        assert_eq!(h.tree.content_rect(e)?, Rect::new(3, 3, 60, 14));
        Ok(())
    }

    #[test]
    fn click_focuses_then_types() -> Result<()> {
        let mut h = Harness::new(200, 100);
        let root = h.root();
        let e = Entry::create(&mut h.tree, root, &Config::new().width(60))?;
        h.type_text("ignored")?;
        assert_eq!(h.tree.widget::<Entry>(e)?.value(), "");

        h.click(5, 5)?;
        assert!(h.tree.is_focused(e.id()));
        h.type_text("hi!")?;
        assert_eq!(h.tree.widget::<Entry>(e)?.value(), "hi!");
        h.key(KeyCode::Backspace)?;
        assert_eq!(h.tree.widget::<Entry>(e)?.value(), "hi");
        h.key(KeyCode::Enter)?;
        assert_eq!(h.tree.widget::<Entry>(e)?.value(), "hi");
        assert!(h.tree.needs_redraw(e)?);
        Ok(())
    }

    #[test]
    fn max_length() -> Result<()> {
        let mut h = Harness::new(200, 100);
        let root = h.root();
        let e = Entry::create(
            &mut h.tree,
            root,
            &Config::new().width(60).max_length(3),
        )?;
        h.tree.grab_focus(e.id())?;
        h.type_text("abcdef")?;
        assert_eq!(h.tree.widget::<Entry>(e)?.value(), "abc");
        h.key(KeyCode::Backspace)?;
        h.type_text("z")?;
        assert_eq!(h.tree.widget::<Entry>(e)?.value(), "abz");
        Ok(())
    }

    #[test]
    fn long_text_shows_tail() -> Result<()> {
        let mut h = Harness::new(200, 100);
        let root = h.root();
        let e = Entry::create(
            &mut h.tree,
            root,
            &Config::new().width(20).text("ab"),
        )?;
        h.draw()?;
        assert_eq!(h.tree.surface_area(e)?, None);

        // Spaces render as background, so the head and the tail of this
        // value look different.
        h.tree.with_widget(e, |w: &mut Entry| w.set_value("ab  e"))?;
        h.draw()?;
        assert_eq!(h.tree.surface_area(e)?, Some(Rect::new(15, 0, 20, 14)));
        let content = h.tree.content_rect(e)?;
        let (x, y) = (content.tl.x, content.tl.y);
        assert!(h.canvas.is_filled(Rect::new(x, y, 13, 14), Colour::WHITE));
        assert!(h.canvas.is_filled(Rect::new(x + 13, y, 7, 14), Colour::BLACK));
        Ok(())
    }

    proptest! {
        #[test]
        fn never_exceeds_max_length(
            max in 0usize..6,
            keys in prop::collection::vec(prop_oneof![
                Just(KeyCode::Backspace),
                (b'a'..=b'z').prop_map(|c| KeyCode::Char(c as char)),
            ], 0..30),
        ) {
            let mut h = Harness::new(200, 100);
            let root = h.root();
            let e = Entry::create(&mut h.tree, root, &Config::new().max_length(max)).unwrap();
            h.tree.grab_focus(e.id()).unwrap();
            for key in keys {
                h.key(key).unwrap();
                let len = h.tree.widget::<Entry>(e).unwrap().value().chars().count();
                prop_assert!(len <= max);
            }
        }
    }
}
