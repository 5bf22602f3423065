//! Geometry resolution.
//!
//! Nothing is cached. Every value is computed on demand from stored layout
//! fields, recursing into the parent first. The root is the base case: its
//! size and position are its stored absolute values. Sums saturate at the
//! `i32` range.

use crate::{
    config::{Layout, Measure},
    error::Result,
    geom::Rect,
    id::WindowId,
    tree::Tree,
};

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Widths and x offsets.
    Horizontal,
    /// Heights and y offsets.
    Vertical,
}

impl Axis {
    /// The stored extent along this axis.
    fn extent(self, layout: &Layout) -> Measure {
        match self {
            Self::Horizontal => layout.width,
            Self::Vertical => layout.height,
        }
    }

    /// The stored offset along this axis.
    fn offset(self, layout: &Layout) -> Measure {
        match self {
            Self::Horizontal => layout.x,
            Self::Vertical => layout.y,
        }
    }
}

impl Tree {
    /// Padding plus border width.
    pub fn inset(&self, id: impl Into<WindowId>) -> Result<i32> {
        Ok(i32::try_from(self.window(id)?.style.inset()).unwrap_or(i32::MAX))
    }

    /// Width from the window's own fields, before clamping.
    pub fn requested_width(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.requested_extent(id.into(), Axis::Horizontal)
    }

    /// Height from the window's own fields, before clamping.
    pub fn requested_height(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.requested_extent(id.into(), Axis::Vertical)
    }

    /// Requested width clamped to the parent's available width.
    pub fn actual_width(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.actual_extent(id.into(), Axis::Horizontal)
    }

    /// Requested height clamped to the parent's available height.
    pub fn actual_height(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.actual_extent(id.into(), Axis::Vertical)
    }

    /// Width left for children inside the inset.
    pub fn available_width(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.available_extent(id.into(), Axis::Horizontal)
    }

    /// Height left for children inside the inset.
    pub fn available_height(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.available_extent(id.into(), Axis::Vertical)
    }

    /// X offset relative to the parent's origin, including the parent's inset.
    pub fn requested_x(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.requested_offset(id.into(), Axis::Horizontal)
    }

    /// Y offset relative to the parent's origin, including the parent's inset.
    pub fn requested_y(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.requested_offset(id.into(), Axis::Vertical)
    }

    /// Screen-space x.
    pub fn actual_x(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.actual_offset(id.into(), Axis::Horizontal)
    }

    /// Screen-space y.
    pub fn actual_y(&self, id: impl Into<WindowId>) -> Result<i32> {
        self.actual_offset(id.into(), Axis::Vertical)
    }

    /// The window's screen-space rectangle.
    pub fn rect(&self, id: impl Into<WindowId>) -> Result<Rect> {
        let id = id.into();
        Ok(Rect::from_signed(
            self.actual_x(id)?,
            self.actual_y(id)?,
            self.actual_width(id)?,
            self.actual_height(id)?,
        ))
    }

    /// The window's rectangle shrunk by its inset on every side.
    pub fn content_rect(&self, id: impl Into<WindowId>) -> Result<Rect> {
        let id = id.into();
        Ok(self.rect(id)?.inset(self.window(id)?.style.inset()))
    }

    /// Requested size along an axis.
    fn requested_extent(&self, id: WindowId, axis: Axis) -> Result<i32> {
        let window = self.window(id)?;
        let measure = axis.extent(&window.layout);
        let Some(parent) = window.parent else {
            return Ok(measure.resolve(0));
        };
        if let Some(widget) = &window.widget {
            let custom = match axis {
                Axis::Horizontal => widget.requested_width(self, id)?,
                Axis::Vertical => widget.requested_height(self, id)?,
            };
            if let Some(v) = custom {
                return Ok(v);
            }
        }
        let base = match measure {
            Measure::Absolute(px) => px,
            Measure::Relative(_) => measure.resolve(self.actual_extent(parent, axis)?),
        };
        Ok(base.saturating_add(self.inset(id)?.saturating_mul(2)))
    }

    /// Actual size along an axis.
    fn actual_extent(&self, id: WindowId, axis: Axis) -> Result<i32> {
        let requested = self.requested_extent(id, axis)?;
        match self.window(id)?.parent {
            Some(parent) => Ok(requested.min(self.available_extent(parent, axis)?)),
            None => Ok(requested),
        }
    }

    /// Available size along an axis.
    fn available_extent(&self, id: WindowId, axis: Axis) -> Result<i32> {
        Ok(self
            .actual_extent(id, axis)?
            .saturating_sub(self.inset(id)?.saturating_mul(2)))
    }

    /// Local offset along an axis, including the parent's inset.
    fn requested_offset(&self, id: WindowId, axis: Axis) -> Result<i32> {
        let window = self.window(id)?;
        let measure = axis.offset(&window.layout);
        let Some(parent) = window.parent else {
            return Ok(measure.resolve(0));
        };
        let base = match measure {
            Measure::Absolute(px) => px,
            Measure::Relative(_) => measure.resolve(self.actual_extent(parent, axis)?),
        };
        Ok(base.saturating_add(self.inset(parent)?))
    }

    /// Screen-space offset along an axis.
    fn actual_offset(&self, id: WindowId, axis: Axis) -> Result<i32> {
        let requested = self.requested_offset(id, axis)?;
        match self.window(id)?.parent {
            Some(parent) => Ok(self.actual_offset(parent, axis)?.saturating_add(requested)),
            None => Ok(requested),
        }
    }
}
