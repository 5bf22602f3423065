use tracing::error;

use crate::{
    canvas::Canvas,
    error::{Error, Result},
    geom::Rect,
    id::WindowId,
    style::{BorderStyle, Colour},
    surface::Surface,
    tree::Tree,
    widget::DrawContext,
};

impl Tree {
    /// Draw every descendant of the root onto `canvas` in traversal order.
    ///
    /// Each window paints its background, re-renders its content if it is
    /// dirty, composites the content into its content rect and strokes its
    /// border. The first failure is logged with the window's state and aborts
    /// the frame.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) -> Result<()> {
        for id in self.descendants(self.root)? {
            if let Err(e) = self.draw_window(id, canvas) {
                let (name, dump) = match self.nodes.get(id) {
                    Some(w) => (w.name, format!("{w:#?}")),
                    None => ("<removed>", String::new()),
                };
                error!(window = name, error = %e, "couldn't draw {name}\n{dump}");
                return Err(Error::Draw {
                    window: name.into(),
                    reason: e.to_string(),
                });
            }
            if self.debug_draw {
                canvas.rect_outline(self.rect(id)?, Colour::GREEN, 1)?;
                canvas.rect_outline(self.content_rect(id)?, Colour::BLUE, 1)?;
            }
        }
        Ok(())
    }

    /// Background, content and border of one window.
    fn draw_window(&mut self, id: WindowId, canvas: &mut dyn Canvas) -> Result<()> {
        let rect = self.rect(id)?;
        let content = self.content_rect(id)?;

        if let Some(bg) = self.window(id)?.style.background {
            canvas.fill_rect(rect, bg)?;
        }

        self.render_content(id, content)?;

        if !content.is_empty()
            && let Some(surface) = &self.window(id)?.surface
        {
            let area = self.window(id)?.surface_area;
            if surface.width() > content.w || surface.height() > content.h {
                // Oversized content is cropped through a content-sized buffer.
                let mut buffer = Surface::new(content.expanse());
                let bounds = buffer.rect();
                buffer.blit(surface, area, bounds)?;
                canvas.blit(&buffer, None, content)?;
            } else {
                canvas.blit(surface, area, content)?;
            }
        }

        self.draw_border(id, canvas)
    }

    /// Re-render a dirty window's content and clear its dirty flag.
    fn render_content(&mut self, id: WindowId, content: Rect) -> Result<()> {
        let Self { nodes, fonts, .. } = self;
        let window = nodes.get_mut(id).ok_or(Error::WindowNotFound(id))?;
        if !window.redraw {
            return Ok(());
        }
        if let Some(renderer) = window.widget.as_mut().and_then(|w| w.renderer()) {
            let mut ctx = DrawContext {
                style: &window.style,
                content,
                fonts,
                surface: &mut window.surface,
                surface_area: &mut window.surface_area,
            };
            renderer.draw(&mut ctx)?;
        }
        window.redraw = false;
        Ok(())
    }

    /// Stroke the border in the window's border style.
    fn draw_border(&self, id: WindowId, canvas: &mut dyn Canvas) -> Result<()> {
        let style = &self.window(id)?.style;
        let width = style.border_width;
        if width < 1 {
            return Ok(());
        }
        let rect = self.rect(id)?;
        let dark = style.border_colour;
        let light = dark.bevel_light();
        let (top_left, bottom_right) = match style.border_style {
            BorderStyle::Solid => return canvas.rect_outline(rect, dark, width),
            BorderStyle::Outset => (light, dark),
            BorderStyle::Inset => (dark, light),
        };
        // One pixel ring per unit of width, stepping inward. The bottom and
        // right edges are drawn last and own the shared corners.
        for i in 0..width {
            let ring = rect.inset(i);
            if ring.is_empty() {
                break;
            }
            canvas.line(ring.top_left(), ring.top_right(), top_left, 1)?;
            canvas.line(ring.top_left(), ring.bottom_left(), top_left, 1)?;
            canvas.line(ring.bottom_left(), ring.bottom_right(), bottom_right, 1)?;
            canvas.line(ring.bottom_right(), ring.top_right(), bottom_right, 1)?;
        }
        Ok(())
    }
}
