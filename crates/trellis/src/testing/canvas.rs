use std::mem;

use crate::{
    canvas::Canvas,
    error::Result,
    geom::{Expanse, Point, Rect},
    style::Colour,
    surface::Surface,
};

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasOp {
    /// A rectangle fill.
    Fill {
        /// Filled area.
        rect: Rect,
        /// Fill colour.
        colour: Colour,
    },
    /// A line stroke.
    Line {
        /// First pixel.
        from: Point,
        /// Last pixel.
        to: Point,
        /// Stroke colour.
        colour: Colour,
        /// Stroke width.
        width: u32,
    },
    /// A rectangle outline.
    Outline {
        /// Outlined rect.
        rect: Rect,
        /// Stroke colour.
        colour: Colour,
        /// Stroke width.
        width: u32,
    },
    /// A surface copy.
    Blit {
        /// Size of the source surface.
        src: Expanse,
        /// Source crop.
        area: Option<Rect>,
        /// Destination rect.
        dest: Rect,
    },
}

/// A canvas that records every call and draws nothing.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    /// Reported canvas size.
    size: Expanse,
    /// Calls so far, in order.
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    /// Construct a recorder reporting `size`.
    pub fn new(size: Expanse) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Calls recorded so far.
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Return and clear the recorded calls.
    pub fn take(&mut self) -> Vec<CanvasOp> {
        mem::take(&mut self.ops)
    }

    /// Recorded blits, as (area, dest) pairs.
    pub fn blits(&self) -> Vec<(Option<Rect>, Rect)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Blit { area, dest, .. } => Some((*area, *dest)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Expanse {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<()> {
        self.ops.push(CanvasOp::Fill { rect, colour });
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, colour: Colour, width: u32) -> Result<()> {
        self.ops.push(CanvasOp::Line {
            from,
            to,
            colour,
            width,
        });
        Ok(())
    }

    fn rect_outline(&mut self, rect: Rect, colour: Colour, width: u32) -> Result<()> {
        self.ops.push(CanvasOp::Outline {
            rect,
            colour,
            width,
        });
        Ok(())
    }

    fn blit(&mut self, src: &Surface, area: Option<Rect>, dest: Rect) -> Result<()> {
        self.ops.push(CanvasOp::Blit {
            src: src.size(),
            area,
            dest,
        });
        Ok(())
    }
}
