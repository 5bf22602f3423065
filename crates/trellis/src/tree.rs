use std::any::{Any, type_name};

use slotmap::SlotMap;
use tracing::{debug, trace};

use crate::{
    config::{Config, Defaults, Layout, Measure},
    error::{Error, Result},
    event::{Event, EventKind},
    focus::FocusManager,
    font::{FontCache, FontService},
    geom::{Expanse, Point, Rect},
    id::{TypedId, WindowId},
    node::{Callback, Window},
    style::{Colour, Style},
    surface::Surface,
    widget::Widget,
};

/// The window hierarchy: an arena of windows under a single root, plus the
/// dispatch and focus state owned by the root.
pub struct Tree {
    /// Window storage arena.
    pub(crate) nodes: SlotMap<WindowId, Window>,
    /// Root window ID.
    pub(crate) root: WindowId,
    /// Window holding keyboard focus.
    pub(crate) focus: Option<WindowId>,
    /// Pointer position after the last motion event. `None` until the first
    /// motion, so the pointer starts outside every window.
    pub(crate) pointer: Option<Point>,
    /// Window that received the last primary button press.
    pub(crate) pressed: Option<WindowId>,
    /// Fonts opened by widgets in this tree.
    pub(crate) fonts: FontCache,
    /// Outline every window and content rect while drawing.
    pub debug_draw: bool,
}

impl Tree {
    /// Create a tree whose root covers an output surface of `size`.
    pub fn new(size: Expanse, fonts: impl FontService + 'static) -> Self {
        let mut defaults = Defaults::window();
        defaults.layout.width = Measure::Absolute(size.w as i32);
        defaults.layout.height = Measure::Absolute(size.h as i32);
        defaults.style.background = None;

        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Window::new(
            "Root",
            None,
            defaults.layout,
            defaults.style,
        ));
        Self {
            nodes,
            root,
            focus: None,
            pointer: None,
            pressed: None,
            fonts: FontCache::new(fonts),
            debug_draw: false,
        }
    }

    /// Return the root window ID.
    pub fn root(&self) -> WindowId {
        self.root
    }

    /// The font cache shared by every window.
    pub fn fonts(&self) -> &FontCache {
        &self.fonts
    }

    /// Resize the root to match a new output surface.
    pub fn set_root_size(&mut self, size: Expanse) -> Result<()> {
        self.with_layout(self.root, |l| {
            l.width = Measure::Absolute(size.w as i32);
            l.height = Measure::Absolute(size.h as i32);
        })
    }

    /// Does the ID refer to a live window?
    pub fn contains(&self, id: impl Into<WindowId>) -> bool {
        self.nodes.contains_key(id.into())
    }

    /// Number of live windows, including the root.
    pub fn window_count(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow a window.
    pub fn window(&self, id: impl Into<WindowId>) -> Result<&Window> {
        let id = id.into();
        self.nodes.get(id).ok_or(Error::WindowNotFound(id))
    }

    /// Borrow a window mutably.
    pub(crate) fn window_mut(&mut self, id: WindowId) -> Result<&mut Window> {
        self.nodes.get_mut(id).ok_or(Error::WindowNotFound(id))
    }

    /// Add a plain container window under `parent`.
    pub fn add(&mut self, parent: impl Into<WindowId>, config: &Config) -> Result<WindowId> {
        let defaults = Defaults::resolve(&Config::default(), config);
        self.insert(parent.into(), "Window", None, defaults)
    }

    /// Add a window with widget behaviour under `parent`. Settings resolve as
    /// `config` over the widget's defaults over the base window defaults.
    pub fn add_widget(
        &mut self,
        parent: impl Into<WindowId>,
        widget: Box<dyn Widget>,
        config: &Config,
    ) -> Result<WindowId> {
        let defaults = Defaults::resolve(&widget.defaults(), config);
        let name = widget.name();
        self.insert(parent.into(), name, Some(widget), defaults)
    }

    /// Typed variant of [`Tree::add_widget`].
    pub fn create<W: Widget>(
        &mut self,
        parent: impl Into<WindowId>,
        widget: W,
        config: &Config,
    ) -> Result<TypedId<W>> {
        let id = self.add_widget(parent, Box::new(widget), config)?;
        Ok(TypedId::new(id))
    }

    /// Insert a new window and link it as the last child of `parent`.
    fn insert(
        &mut self,
        parent: WindowId,
        name: &'static str,
        widget: Option<Box<dyn Widget>>,
        defaults: Defaults,
    ) -> Result<WindowId> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::WindowNotFound(parent));
        }
        let mut window = Window::new(name, widget, defaults.layout, defaults.style);
        window.parent = Some(parent);
        let id = self.nodes.insert(window);
        self.window_mut(parent)?.children.push(id);
        debug!(?id, ?parent, name, "window created");
        Ok(id)
    }

    /// Is `ancestor` a strict ancestor of `id`?
    pub fn is_ancestor(&self, ancestor: WindowId, id: WindowId) -> bool {
        let mut current = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.nodes.get(p).and_then(|n| n.parent);
        }
        false
    }

    /// Move `child` to the end of `parent`'s children. Fails without changes
    /// if the move would create a cycle.
    pub fn reparent(
        &mut self,
        child: impl Into<WindowId>,
        parent: impl Into<WindowId>,
    ) -> Result<()> {
        let child = child.into();
        let parent = parent.into();
        if child == self.root {
            return Err(Error::InvalidOperation("cannot reparent root".into()));
        }
        if !self.nodes.contains_key(parent) {
            return Err(Error::WindowNotFound(parent));
        }
        let old = self.window(child)?.parent;
        if parent == child || self.is_ancestor(child, parent) {
            return Err(Error::WouldCreateCycle { parent, child });
        }

        // A parent that does not list the child is tolerated.
        if let Some(old) = old
            && let Some(node) = self.nodes.get_mut(old)
        {
            node.children.retain(|id| *id != child);
        }
        self.window_mut(parent)?.children.push(child);
        let node = self.window_mut(child)?;
        node.parent = Some(parent);
        node.redraw = true;
        debug!(?child, ?old, ?parent, "window reparented");
        Ok(())
    }

    /// Destroy a window and its whole subtree. A focused window inside the
    /// subtree is blurred first.
    pub fn remove(&mut self, id: impl Into<WindowId>) -> Result<()> {
        let id = id.into();
        if id == self.root {
            return Err(Error::InvalidOperation("cannot remove root".into()));
        }
        let parent = self.window(id)?.parent;
        let mut doomed = vec![id];
        doomed.extend(self.descendants(id)?);

        if let Some(focus) = self.focus
            && doomed.contains(&focus)
        {
            self.clear_focus()?;
        }
        if self.pressed.is_some_and(|p| doomed.contains(&p)) {
            self.pressed = None;
        }

        if let Some(parent) = parent
            && let Some(node) = self.nodes.get_mut(parent)
        {
            node.children.retain(|c| *c != id);
        }
        for w in &doomed {
            self.nodes.remove(*w);
        }
        self.ensure_focus_valid();
        debug!(?id, count = doomed.len(), "subtree removed");
        Ok(())
    }

    /// Direct children of a window, in paint order.
    pub fn children(&self, id: impl Into<WindowId>) -> Result<&[WindowId]> {
        Ok(&self.window(id)?.children)
    }

    /// Parent of a window, `None` for the root.
    pub fn parent(&self, id: impl Into<WindowId>) -> Result<Option<WindowId>> {
        Ok(self.window(id)?.parent)
    }

    /// Every window below `id` in traversal order: all direct children in
    /// list order, then the descendants of each child in turn. A window
    /// always precedes its own children.
    pub fn descendants(&self, id: impl Into<WindowId>) -> Result<Vec<WindowId>> {
        let mut out = Vec::new();
        self.collect_descendants(id.into(), &mut out)?;
        Ok(out)
    }

    /// Append the descendants of `id` to `out`.
    fn collect_descendants(&self, id: WindowId, out: &mut Vec<WindowId>) -> Result<()> {
        let children = &self.window(id)?.children;
        out.extend_from_slice(children);
        for child in children {
            self.collect_descendants(*child, out)?;
        }
        Ok(())
    }

    /// The childless windows below `id`, depth-first in list order.
    pub fn leaves(&self, id: impl Into<WindowId>) -> Result<Vec<WindowId>> {
        let mut out = Vec::new();
        for child in self.children(id)? {
            if self.children(*child)?.is_empty() {
                out.push(*child);
            } else {
                out.extend(self.leaves(*child)?);
            }
        }
        Ok(out)
    }

    /// Modify a window's layout and mark it dirty.
    pub fn with_layout(
        &mut self,
        id: impl Into<WindowId>,
        f: impl FnOnce(&mut Layout),
    ) -> Result<()> {
        let w = self.window_mut(id.into())?;
        f(&mut w.layout);
        w.redraw = true;
        Ok(())
    }

    /// Modify a window's style and mark it dirty.
    pub fn with_style(&mut self, id: impl Into<WindowId>, f: impl FnOnce(&mut Style)) -> Result<()> {
        let w = self.window_mut(id.into())?;
        f(&mut w.style);
        w.redraw = true;
        Ok(())
    }

    /// Set the horizontal offset.
    pub fn set_x(&mut self, id: impl Into<WindowId>, x: impl Into<Measure>) -> Result<()> {
        let x = x.into();
        self.with_layout(id, |l| l.x = x)
    }

    /// Set the vertical offset.
    pub fn set_y(&mut self, id: impl Into<WindowId>, y: impl Into<Measure>) -> Result<()> {
        let y = y.into();
        self.with_layout(id, |l| l.y = y)
    }

    /// Set the width.
    pub fn set_width(&mut self, id: impl Into<WindowId>, width: impl Into<Measure>) -> Result<()> {
        let width = width.into();
        self.with_layout(id, |l| l.width = width)
    }

    /// Set the height.
    pub fn set_height(
        &mut self,
        id: impl Into<WindowId>,
        height: impl Into<Measure>,
    ) -> Result<()> {
        let height = height.into();
        self.with_layout(id, |l| l.height = height)
    }

    /// Set the border width.
    pub fn set_border_width(&mut self, id: impl Into<WindowId>, width: u32) -> Result<()> {
        self.with_style(id, |s| s.border_width = width)
    }

    /// Set the background, `None` for transparent.
    pub fn set_background(
        &mut self,
        id: impl Into<WindowId>,
        background: Option<Colour>,
    ) -> Result<()> {
        self.with_style(id, |s| s.background = background)
    }

    /// Force the window's content to be re-rendered on the next draw.
    pub fn mark_dirty(&mut self, id: impl Into<WindowId>) -> Result<()> {
        self.window_mut(id.into())?.redraw = true;
        Ok(())
    }

    /// Is the window marked dirty?
    pub fn needs_redraw(&self, id: impl Into<WindowId>) -> Result<bool> {
        Ok(self.window(id)?.redraw)
    }

    /// The window's content surface.
    pub fn surface(&self, id: impl Into<WindowId>) -> Result<Option<&Surface>> {
        Ok(self.window(id)?.surface.as_ref())
    }

    /// The window's content source crop.
    pub fn surface_area(&self, id: impl Into<WindowId>) -> Result<Option<Rect>> {
        Ok(self.window(id)?.surface_area)
    }

    /// Borrow a window's widget as a concrete type.
    pub fn widget<W: Widget>(&self, id: impl Into<WindowId>) -> Result<&W> {
        let id = id.into();
        let widget = self.window(id)?.widget.as_deref().ok_or_else(wrong_type::<W>)?;
        (widget as &dyn Any)
            .downcast_ref::<W>()
            .ok_or_else(wrong_type::<W>)
    }

    /// Mutate a window's widget as a concrete type and mark the window dirty.
    pub fn with_widget<W: Widget, R>(
        &mut self,
        id: impl Into<WindowId>,
        f: impl FnOnce(&mut W) -> R,
    ) -> Result<R> {
        let window = self.window_mut(id.into())?;
        let widget = window.widget.as_deref_mut().ok_or_else(wrong_type::<W>)?;
        let widget = (widget as &mut dyn Any)
            .downcast_mut::<W>()
            .ok_or_else(wrong_type::<W>)?;
        let out = f(widget);
        window.redraw = true;
        Ok(out)
    }

    /// Register a callback for an event kind. Callbacks run in binding order.
    pub fn bind(
        &mut self,
        id: impl Into<WindowId>,
        kind: EventKind,
        callback: impl FnMut(&mut Self, WindowId, &Event) -> Result<()> + 'static,
    ) -> Result<()> {
        let callback: Callback = Box::new(callback);
        self.window_mut(id.into())?
            .callbacks
            .entry(kind)
            .or_default()
            .push(callback);
        Ok(())
    }

    /// Run the window's callbacks for an event. The first failing callback
    /// stops the run and its error is returned.
    pub fn trigger(&mut self, id: impl Into<WindowId>, event: &Event) -> Result<()> {
        let id = id.into();
        let kind = event.kind();
        // The list is detached while it runs, so callbacks may mutate the
        // tree, including this window's bindings.
        let Some(mut callbacks) = self.window_mut(id)?.callbacks.remove(&kind) else {
            return Ok(());
        };
        trace!(?id, ?kind, count = callbacks.len(), "trigger");
        let mut result = Ok(());
        for callback in &mut callbacks {
            result = callback(self, id, event);
            if result.is_err() {
                break;
            }
        }
        if let Some(window) = self.nodes.get_mut(id) {
            if let Some(added) = window.callbacks.remove(&kind) {
                callbacks.extend(added);
            }
            window.callbacks.insert(kind, callbacks);
        }
        result
    }
}

/// Error for a widget downcast that does not match.
fn wrong_type<W>() -> Error {
    Error::Invalid(format!("window does not hold a {}", type_name::<W>()))
}
