use crate::{
    error::Result,
    geom::{Expanse, Point, Rect},
    style::Colour,
    surface::Surface,
};

/// A 2D drawing target. The draw pipeline only talks to this trait, so any
/// backend that can fill, stroke and blit can host a tree.
pub trait Canvas {
    /// Size of the drawable area.
    fn size(&self) -> Expanse;

    /// Fill `rect` with a colour.
    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<()>;

    /// Stroke a line between two pixels, both inclusive.
    fn line(&mut self, from: Point, to: Point, colour: Colour, width: u32) -> Result<()>;

    /// Stroke the outline of `rect`, `width` pixels thick, inside the rect.
    fn rect_outline(&mut self, rect: Rect, colour: Colour, width: u32) -> Result<()>;

    /// Copy `src` into `dest`. When `area` is given only that sub-rectangle
    /// of the source is copied. Output is clipped to `dest`.
    fn blit(&mut self, src: &Surface, area: Option<Rect>, dest: Rect) -> Result<()>;
}
