use std::{collections::HashMap, fmt};

use crate::{
    config::Layout,
    error::Result,
    event::{Event, EventKind},
    geom::Rect,
    id::WindowId,
    style::Style,
    surface::Surface,
    tree::Tree,
    widget::Widget,
};

/// An event callback. It receives the tree, the window the event was
/// delivered to and the event itself.
pub type Callback = Box<dyn FnMut(&mut Tree, WindowId, &Event) -> Result<()>>;

/// Core window data stored in the arena.
pub struct Window {
    /// Widget behaviour, absent for plain containers.
    pub(crate) widget: Option<Box<dyn Widget>>,

    /// Parent in the arena tree.
    pub(crate) parent: Option<WindowId>,
    /// Children in paint and hit-test order.
    pub(crate) children: Vec<WindowId>,

    /// Stored layout.
    pub(crate) layout: Layout,
    /// Stored style.
    pub(crate) style: Style,

    /// Rendered content.
    pub(crate) surface: Option<Surface>,
    /// Source crop of `surface`.
    pub(crate) surface_area: Option<Rect>,
    /// Content must be re-rendered on the next draw pass.
    pub(crate) redraw: bool,

    /// Callbacks by event kind, in binding order.
    pub(crate) callbacks: HashMap<EventKind, Vec<Callback>>,
    /// Class name.
    pub(crate) name: &'static str,
}

impl Window {
    /// Construct a detached window.
    pub(crate) fn new(
        name: &'static str,
        widget: Option<Box<dyn Widget>>,
        layout: Layout,
        style: Style,
    ) -> Self {
        Self {
            widget,
            parent: None,
            children: Vec::new(),
            layout,
            style,
            surface: None,
            surface_area: None,
            redraw: true,
            callbacks: HashMap::new(),
            name,
        }
    }

    /// Class name of the window.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parent window, `None` for the root.
    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    /// Children in paint order.
    pub fn children(&self) -> &[WindowId] {
        &self.children
    }

    /// Stored layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Stored style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Will the next draw pass re-render this window's content?
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Current content surface.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Current source crop.
    pub fn surface_area(&self) -> Option<Rect> {
        self.surface_area
    }

    /// Number of callbacks bound for an event kind.
    pub fn callback_count(&self, kind: EventKind) -> usize {
        self.callbacks.get(&kind).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<_> = self
            .callbacks
            .iter()
            .map(|(kind, cbs)| (*kind, cbs.len()))
            .collect();
        bound.sort_by_key(|(kind, _)| format!("{kind:?}"));
        f.debug_struct(self.name)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("layout", &self.layout)
            .field("style", &self.style)
            .field("widget", &self.widget.as_ref().map(|w| w.name()))
            .field("surface", &self.surface)
            .field("surface_area", &self.surface_area)
            .field("redraw", &self.redraw)
            .field("callbacks", &bound)
            .finish()
    }
}
