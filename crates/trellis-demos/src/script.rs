//! Scripted input.
//!
//! A script is one command per line. Blank lines and lines starting with `#`
//! are skipped.
//!
//! ```text
//! move X Y      pointer motion
//! press X Y     primary button down
//! release X Y   primary button up
//! click X Y     press and release
//! type TEXT     one key press per character
//! key NAME      a named key: backspace, enter, tab, esc, delete, left,
//!               right, up, down, home, end, or a single character
//! resize W H    resize the root
//! quit
//! ```

use std::str::FromStr;

use trellis::{
    Error, InputEvent, Result,
    event::key::KeyCode,
    geom::{Expanse, Point},
};

/// Parse a script into input events.
pub fn parse(src: &str) -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    for (n, line) in src.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        parse_line(line, &mut events)
            .map_err(|e| Error::Invalid(format!("line {}: {e}", n + 1)))?;
    }
    Ok(events)
}

/// Append the events for one command.
fn parse_line(line: &str, out: &mut Vec<InputEvent>) -> Result<()> {
    let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
    match cmd {
        "move" => out.push(InputEvent::Motion(point(rest)?)),
        "press" => out.push(InputEvent::press(point(rest)?)),
        "release" => out.push(InputEvent::release(point(rest)?)),
        "click" => {
            let p = point(rest)?;
            out.push(InputEvent::press(p));
            out.push(InputEvent::release(p));
        }
        "type" => {
            for c in rest.chars() {
                out.push(InputEvent::key_down(c));
                out.push(InputEvent::key_up(c));
            }
        }
        "key" => {
            let key = key(rest.trim())?;
            out.push(InputEvent::key_down(key));
            out.push(InputEvent::key_up(key));
        }
        "resize" => {
            let (w, h) = pair::<u32>(rest)?;
            out.push(InputEvent::Resize(Expanse::new(w, h)));
        }
        "quit" => out.push(InputEvent::Quit),
        _ => return Err(Error::Invalid(format!("unknown command {cmd:?}"))),
    }
    Ok(())
}

/// Two whitespace-separated numbers.
fn pair<T: FromStr>(s: &str) -> Result<(T, T)> {
    let mut parts = s.split_whitespace().map(str::parse::<T>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(a)), Some(Ok(b)), None) => Ok((a, b)),
        _ => Err(Error::Invalid(format!("expected two numbers, got {s:?}"))),
    }
}

/// A point from `X Y`.
fn point(s: &str) -> Result<Point> {
    let (x, y) = pair::<i32>(s)?;
    Ok(Point::new(x, y))
}

/// A key by name.
fn key(name: &str) -> Result<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }
    Ok(match name.to_ascii_lowercase().as_str() {
        "backspace" => KeyCode::Backspace,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "delete" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        _ => return Err(Error::Invalid(format!("unknown key {name:?}"))),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn commands() -> Result<()> {
        let events = parse(
            "# a comment\n\
             move 1 2\n\
             \n\
             click 3 4\n\
             type ab\n\
             key backspace\n\
             resize 10 20\n",
        )?;
        assert_eq!(events, vec![
            InputEvent::Motion(Point::new(1, 2)),
            InputEvent::press((3, 4)),
            InputEvent::release((3, 4)),
            InputEvent::key_down('a'),
            InputEvent::key_up('a'),
            InputEvent::key_down('b'),
            InputEvent::key_up('b'),
            InputEvent::key_down(KeyCode::Backspace),
            InputEvent::key_up(KeyCode::Backspace),
            InputEvent::Resize(Expanse::new(10, 20)),
        ]);
        Ok(())
    }

    #[test]
    fn type_keeps_inner_spaces() -> Result<()> {
        let events = parse("type a b")?;
        assert_eq!(events.len(), 6);
        assert_eq!(events[2], InputEvent::key_down(' '));
        Ok(())
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse("move 1 2\nwiggle 3 4").unwrap_err();
        assert_eq!(err, Error::Invalid("line 2: invalid: unknown command \"wiggle\"".into()));
        assert!(parse("move 1").is_err());
        assert!(parse("move 1 2 3").is_err());
        assert!(parse("key hyper").is_err());
    }
}
