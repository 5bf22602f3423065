use std::fmt::Write;

use crate::{
    error::{Error, Result},
    id::WindowId,
    tree::Tree,
};

/// Traverses a window subtree and returns a string showing each window's
/// class name, screen position and actual size, indented by depth. This is a
/// debug function.
pub fn dump(tree: &Tree, root: impl Into<WindowId>) -> Result<String> {
    let mut out = String::new();
    dump_window(&mut out, tree, root.into(), 0)?;
    Ok(out)
}

/// Write one window line, then its children.
fn dump_window(out: &mut String, tree: &Tree, id: WindowId, level: usize) -> Result<()> {
    let name = tree.window(id)?.name();
    writeln!(
        out,
        "{}{} ({}, {}) {}x{}",
        "  ".repeat(level),
        name,
        tree.actual_x(id)?,
        tree.actual_y(id)?,
        tree.actual_width(id)?,
        tree.actual_height(id)?,
    )
    .map_err(|e| Error::Invalid(e.to_string()))?;
    for child in tree.children(id)? {
        dump_window(out, tree, *child, level + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{config::Config, geom::Expanse, testing::FixedFonts};

    #[test]
    fn indented_graph() -> Result<()> {
        let mut t = Tree::new(Expanse::new(200, 100), FixedFonts);
        let a = t.add(t.root(), &Config::new().height(40).padding(2))?;
        t.add(a, &Config::new().x(5).width(0.5).height(10))?;
        t.add(t.root(), &Config::new().y(50).width(20).height(20))?;
        assert_eq!(
            dump(&t, t.root())?,
            "Root (0, 0) 200x100\n  Window (0, 0) 200x44\n    Window (7, 2) 100x10\n  Window (0, 50) 20x20\n"
        );
        Ok(())
    }
}
