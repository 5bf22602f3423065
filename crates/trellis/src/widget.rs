use std::{any::Any, rc::Rc};

use crate::{
    config::Config,
    error::Result,
    font::{Font, FontCache},
    geom::Rect,
    id::WindowId,
    style::Style,
    surface::Surface,
    tree::Tree,
};

/// Behaviour attached to a window. Windows without a widget are plain
/// containers.
pub trait Widget: Any {
    /// Class name used in dumps and failure reports.
    fn name(&self) -> &'static str;

    /// Settings this widget applies over the base window defaults.
    fn defaults(&self) -> Config {
        Config::default()
    }

    /// Override the requested width, including the window's own inset.
    fn requested_width(&self, _tree: &Tree, _id: WindowId) -> Result<Option<i32>> {
        Ok(None)
    }

    /// Override the requested height, including the window's own inset.
    fn requested_height(&self, _tree: &Tree, _id: WindowId) -> Result<Option<i32>> {
        Ok(None)
    }

    /// The content renderer, for widgets that paint content of their own.
    fn renderer(&mut self) -> Option<&mut dyn Draw> {
        None
    }
}

/// The capability to render window content into a surface.
pub trait Draw {
    /// Produce or update the window's content surface.
    fn draw(&mut self, ctx: &mut DrawContext<'_>) -> Result<()>;
}

/// Everything a renderer may read or write while drawing one window.
pub struct DrawContext<'a> {
    /// The window's style.
    pub style: &'a Style,
    /// The window's content rect in screen coordinates.
    pub content: Rect,
    /// Shared font cache.
    pub fonts: &'a FontCache,
    /// The window's content surface.
    pub surface: &'a mut Option<Surface>,
    /// Optional source crop of the content surface.
    pub surface_area: &'a mut Option<Rect>,
}

impl DrawContext<'_> {
    /// The font described by the window's style.
    pub fn font(&self) -> Result<Rc<dyn Font>> {
        self.fonts.get(&self.style.font)
    }

    /// Replace the content surface.
    pub fn set_surface(&mut self, surface: Surface) {
        *self.surface = Some(surface);
    }

    /// Set or clear the source crop.
    pub fn set_surface_area(&mut self, area: Option<Rect>) {
        *self.surface_area = area;
    }
}
