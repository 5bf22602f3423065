//! Tests for input dispatch and focus.

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;
    use trellis::{
        Config, Error, Event, EventKind, FocusManager, InputEvent, MouseButton, Result, WindowId,
        event::key::{KeyCode, Mods},
        geom::{Expanse, Point},
        testing::Harness,
    };

    /// A root of 200x100 with two side-by-side 50x50 windows.
    fn pair() -> Result<(Harness, WindowId, WindowId)> {
        let mut h = Harness::new(200, 100);
        let a = h.add(h.root(), &Config::new().width(50).height(50))?;
        let b = h.add(h.root(), &Config::new().x(100).width(50).height(50))?;
        h.watch(a)?;
        h.watch(b)?;
        Ok((h, a, b))
    }

    #[test]
    fn over_and_out_fire_once() -> Result<()> {
        let (mut h, a, b) = pair()?;
        h.motion(10, 10)?;
        h.motion(20, 20)?;
        h.motion(30, 30)?;
        h.motion(120, 10)?;
        h.motion(130, 10)?;
        h.motion(190, 90)?;
        assert_eq!(h.log.kinds(a), vec![EventKind::MouseOver, EventKind::MouseOut]);
        assert_eq!(h.log.kinds(b), vec![EventKind::MouseOver, EventKind::MouseOut]);
        Ok(())
    }

    #[test]
    fn first_motion_has_no_previous_position() -> Result<()> {
        let (mut h, a, _) = pair()?;
        h.motion(500, 500)?;
        assert!(h.log.events().is_empty());
        h.motion(0, 0)?;
        assert_eq!(h.log.kinds(a), vec![EventKind::MouseOver]);
        Ok(())
    }

    #[test]
    fn overlapping_windows_all_receive_pointer_events() -> Result<()> {
        let mut h = Harness::new(100, 100);
        let outer = h.add(h.root(), &Config::new().width(80).height(80))?;
        let inner = h.add(outer, &Config::new().width(20).height(20))?;
        h.watch(outer)?;
        h.watch(inner)?;
        h.motion(5, 5)?;
        assert_eq!(h.log.count(outer, EventKind::MouseOver), 1);
        assert_eq!(h.log.count(inner, EventKind::MouseOver), 1);
        // Leaving the inner window does not touch the outer one.
        h.motion(50, 50)?;
        assert_eq!(h.log.count(outer, EventKind::MouseOut), 0);
        assert_eq!(h.log.count(inner, EventKind::MouseOut), 1);
        Ok(())
    }

    #[test]
    fn click_requires_release_on_same_window() -> Result<()> {
        let (mut h, a, b) = pair()?;
        h.press(10, 10)?;
        h.release(110, 10)?;
        assert_eq!(h.log.count(a, EventKind::Click), 0);
        assert_eq!(h.log.count(b, EventKind::Click), 0);
        assert_eq!(h.log.count(a, EventKind::MouseDown), 1);
        assert_eq!(h.log.count(b, EventKind::MouseUp), 1);

        h.click(10, 10)?;
        assert_eq!(h.log.count(a, EventKind::Click), 1);
        assert_eq!(h.log.count(b, EventKind::Click), 0);
        let kinds = h.log.kinds(a);
        assert_eq!(
            kinds[kinds.len() - 3..].to_vec(),
            vec![EventKind::MouseDown, EventKind::MouseUp, EventKind::Click]
        );
        Ok(())
    }

    #[test]
    fn click_goes_to_topmost_hit() -> Result<()> {
        let mut h = Harness::new(100, 100);
        let outer = h.add(h.root(), &Config::new().width(80).height(80))?;
        let inner = h.add(outer, &Config::new().width(20).height(20))?;
        h.watch(outer)?;
        h.watch(inner)?;
        h.click(5, 5)?;
        assert_eq!(h.log.count(outer, EventKind::MouseUp), 1);
        assert_eq!(h.log.count(outer, EventKind::Click), 0);
        assert_eq!(h.log.count(inner, EventKind::Click), 1);
        Ok(())
    }

    #[test]
    fn secondary_button_never_clicks() -> Result<()> {
        let (mut h, a, _) = pair()?;
        let pos = Point::new(10, 10);
        h.send(InputEvent::ButtonDown {
            pos,
            button: MouseButton::Secondary,
        })?;
        h.send(InputEvent::ButtonUp {
            pos,
            button: MouseButton::Secondary,
        })?;
        assert_eq!(h.log.count(a, EventKind::Click), 0);
        assert_eq!(h.log.events()[0].1, Event::MouseDown {
            pos,
            button: MouseButton::Secondary
        });
        Ok(())
    }

    #[test]
    fn removed_press_target_gets_no_click() -> Result<()> {
        let (mut h, a, _) = pair()?;
        h.press(10, 10)?;
        h.tree.remove(a)?;
        h.release(10, 10)?;
        assert_eq!(h.log.count(a, EventKind::Click), 0);
        assert!(!h.tree.contains(a));
        Ok(())
    }

    #[test]
    fn callbacks_may_remove_windows_mid_dispatch() -> Result<()> {
        let (mut h, a, b) = pair()?;
        // Both windows overlap a third window that removes `b` when entered.
        let c = h.add(h.root(), &Config::new().width(200).height(100))?;
        h.tree.reparent(b, c)?;
        h.tree.bind(a, EventKind::MouseOver, move |tree, _, _| tree.remove(c))?;
        h.motion(10, 10)?;
        assert!(!h.tree.contains(c));
        assert!(!h.tree.contains(b));
        assert_eq!(h.log.count(a, EventKind::MouseOver), 1);
        Ok(())
    }

    #[test]
    fn keys_go_to_focused_window() -> Result<()> {
        let (mut h, a, b) = pair()?;
        h.key('x')?;
        assert!(h.log.events().is_empty());

        h.tree.set_focus(Some(a))?;
        h.log.take();
        h.key('x')?;
        assert_eq!(h.log.kinds(a), vec![
            EventKind::KeyDown,
            EventKind::KeyUp,
            EventKind::KeyPress
        ]);
        assert!(h.log.kinds(b).is_empty());
        assert_eq!(h.log.events()[0].1, Event::KeyDown {
            text: "x".into(),
            key: KeyCode::Char('x'),
            mods: Mods::default(),
        });
        Ok(())
    }

    #[test]
    fn keypress_follows_focus_moved_by_keyup() -> Result<()> {
        let (mut h, a, b) = pair()?;
        h.tree.set_focus(Some(a))?;
        h.tree.bind(a, EventKind::KeyUp, move |tree, _, _| {
            tree.set_focus(Some(b)).map(|_| ())
        })?;
        h.log.take();
        h.key(KeyCode::Enter)?;
        assert_eq!(h.log.kinds(a), vec![
            EventKind::KeyDown,
            EventKind::KeyUp,
            EventKind::Blur
        ]);
        assert_eq!(h.log.kinds(b), vec![EventKind::Focus, EventKind::KeyPress]);
        Ok(())
    }

    #[test]
    fn focus_transfer_order() -> Result<()> {
        let (mut h, a, b) = pair()?;
        assert!(h.tree.set_focus(Some(a))?);
        assert!(h.tree.set_focus(Some(b))?);
        let events: Vec<_> = h.log.events().into_iter().map(|(w, e)| (w, e.kind())).collect();
        assert_eq!(events, vec![
            (a, EventKind::Focus),
            (a, EventKind::Blur),
            (b, EventKind::Focus),
        ]);
        assert_eq!(h.tree.focused(), Some(b));
        assert!(h.tree.is_focused(b));
        assert!(!h.tree.is_focused(a));
        Ok(())
    }

    #[test]
    fn blur_sees_old_focus() -> Result<()> {
        let (mut h, a, b) = pair()?;
        h.tree.set_focus(Some(a))?;
        let seen = Rc::new(Cell::new(None));
        let s = seen.clone();
        h.tree.bind(a, EventKind::Blur, move |tree, _, _| {
            s.set(tree.focused());
            Ok(())
        })?;
        h.tree.set_focus(Some(b))?;
        assert_eq!(seen.get(), Some(a));
        Ok(())
    }

    #[test]
    fn refocusing_holder_is_noop() -> Result<()> {
        let (mut h, a, _) = pair()?;
        h.tree.set_focus(Some(a))?;
        h.log.take();
        assert!(!h.tree.set_focus(Some(a))?);
        assert!(h.log.events().is_empty());
        Ok(())
    }

    #[test]
    fn focus_invalid_target() -> Result<()> {
        let (mut h, a, _) = pair()?;
        h.tree.set_focus(Some(a))?;
        h.tree.remove(a)?;
        assert_eq!(h.tree.focused(), None);
        assert!(matches!(
            h.tree.set_focus(Some(a)),
            Err(Error::WindowNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn removing_ancestor_blurs_focused_window() -> Result<()> {
        let (mut h, a, _) = pair()?;
        let child = h.add(a, &Config::new().width(10).height(10))?;
        h.watch(child)?;
        h.tree.grab_focus(child)?;
        h.tree.remove(a)?;
        assert_eq!(h.tree.focused(), None);
        assert_eq!(h.log.kinds(child), vec![EventKind::Focus, EventKind::Blur]);
        Ok(())
    }

    #[test]
    fn clear_focus() -> Result<()> {
        let (mut h, a, _) = pair()?;
        h.tree.grab_focus(a)?;
        assert!(h.tree.clear_focus()?);
        assert!(!h.tree.clear_focus()?);
        assert_eq!(h.log.kinds(a), vec![EventKind::Focus, EventKind::Blur]);
        Ok(())
    }

    #[test]
    fn resize_reconfigures_root() -> Result<()> {
        let mut h = Harness::new(100, 100);
        let root = h.root();
        h.watch(root)?;
        let half = h.add(root, &Config::new().width(0.5).height(10))?;
        h.send(InputEvent::Resize(Expanse::new(300, 50)))?;
        assert_eq!(h.log.kinds(root), vec![EventKind::Reconfigure]);
        assert_eq!(h.tree.actual_width(half)?, 150);
        Ok(())
    }

    #[test]
    fn failing_callback_aborts_batch() -> Result<()> {
        let (mut h, a, b) = pair()?;
        h.tree.bind(a, EventKind::MouseOver, |_, _, _| {
            Err(Error::Invalid("boom".into()))
        })?;
        let r = h.tree.process_events(vec![
            InputEvent::Motion(Point::new(10, 10)),
            InputEvent::Motion(Point::new(110, 10)),
        ]);
        assert!(r.is_err());
        assert_eq!(h.log.count(b, EventKind::MouseOver), 0);
        Ok(())
    }

    #[test]
    fn quit_is_ignored() -> Result<()> {
        let (mut h, _, _) = pair()?;
        h.send(InputEvent::Quit)?;
        assert!(h.log.events().is_empty());
        Ok(())
    }
}
