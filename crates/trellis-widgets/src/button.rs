//! Button widget.

use trellis::{Config, Defaults, Event, EventKind, Result, Tree, TypedId, Widget, WindowId};

use crate::label::Label;

/// Extra border width while the pointer is over a button.
const HOVER_GROWTH: u32 = 2;

/// A container around a [`Label`]. The button takes the label's size, thickens
/// its border while hovered, and receives the label's clicks.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    /// The child label.
    label: TypedId<Label>,
    /// Border width when not hovered.
    border_width: u32,
}

impl Button {
    /// Add a button under `parent`. The child label is built from the same
    /// config without the position or border width.
    pub fn create(
        tree: &mut Tree,
        parent: impl Into<WindowId>,
        config: &Config,
    ) -> Result<TypedId<Self>> {
        let parent = parent.into();
        let label_config = Config {
            x: None,
            y: None,
            border_width: None,
            ..config.clone()
        };
        let label = Label::create(tree, parent, &label_config)?;
        let border_width = Defaults::resolve(&Config::default(), config)
            .style
            .border_width;
        let id = tree.create(
            parent,
            Self {
                label,
                border_width,
            },
            config,
        )?;
        tree.reparent(label, id)?;

        tree.bind(id, EventKind::MouseOver, move |tree, id, _| {
            tree.set_border_width(id, border_width + HOVER_GROWTH)
        })?;
        tree.bind(id, EventKind::MouseOut, move |tree, id, _| {
            tree.set_border_width(id, border_width)
        })?;
        // The label sits on top, so it is the one that gets clicked.
        tree.bind(label, EventKind::Click, move |tree, _, _| {
            tree.trigger(id, &Event::Click)
        })?;
        Ok(id)
    }

    /// The child label.
    pub fn label(&self) -> TypedId<Label> {
        self.label
    }

    /// Border width when the pointer is not over the button.
    pub fn border_width(&self) -> u32 {
        self.border_width
    }
}

impl Widget for Button {
    fn name(&self) -> &'static str {
        "Button"
    }

    fn requested_width(&self, tree: &Tree, _id: WindowId) -> Result<Option<i32>> {
        Ok(Some(tree.requested_width(self.label)?))
    }

    fn requested_height(&self, tree: &Tree, _id: WindowId) -> Result<Option<i32>> {
        Ok(Some(tree.requested_height(self.label)?))
    }
}
