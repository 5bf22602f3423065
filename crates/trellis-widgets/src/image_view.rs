//! Bitmap display.

use std::path::Path;

use trellis::{Config, Draw, DrawContext, Surface, Widget, geom::Expanse};

use crate::error::{Error, Result};

/// Shows a source surface smoothly scaled to the window's content rect. The
/// window defaults to the source's pixel size.
#[derive(Debug, Clone)]
pub struct Image {
    /// Unscaled source pixels.
    source: Surface,
}

impl Image {
    /// Display `source`.
    pub fn new(source: Surface) -> Self {
        Self { source }
    }

    /// Decode an image file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path.as_ref())
            .map_err(|err| Error::Image(err.to_string()))?
            .to_rgba8();
        let size = Expanse::new(image.width(), image.height());
        let source =
            Surface::from_rgba(size, image.as_raw()).map_err(|err| Error::Image(err.to_string()))?;
        Ok(Self::new(source))
    }

    /// The unscaled source.
    pub fn source(&self) -> &Surface {
        &self.source
    }

    /// Replace the source. Use through [`trellis::Tree::with_widget`] so the
    /// window is marked dirty.
    pub fn set_source(&mut self, source: Surface) {
        self.source = source;
    }
}

impl Widget for Image {
    fn name(&self) -> &'static str {
        "Image"
    }

    fn defaults(&self) -> Config {
        Config::new()
            .width(self.source.width() as i32)
            .height(self.source.height() as i32)
    }

    fn renderer(&mut self) -> Option<&mut dyn Draw> {
        Some(self)
    }
}

impl Draw for Image {
    fn draw(&mut self, ctx: &mut DrawContext<'_>) -> trellis::Result<()> {
        let scaled = self.source.smooth_scale(ctx.content.expanse());
        ctx.set_surface(scaled);
        Ok(())
    }
}
