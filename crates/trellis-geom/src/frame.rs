use super::Rect;

/// The four edge strips of a border drawn inside a rectangle. Horizontal
/// edges span the full width; vertical edges fill the space between them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Frame {
    /// The top edge, including both top corners.
    pub top: Rect,
    /// The bottom edge, including both bottom corners.
    pub bottom: Rect,
    /// The left edge, excluding corners.
    pub left: Rect,
    /// The right edge, excluding corners.
    pub right: Rect,
    /// The original outer rect.
    outer_rect: Rect,
    /// The border width.
    border: u32,
}

impl Frame {
    /// Construct a new frame. If the border covers the whole rect, the top
    /// strip takes the entire rect and the other strips are empty.
    pub fn new(rect: Rect, border: u32) -> Self {
        if rect.w <= border * 2 || rect.h <= border * 2 {
            return Self {
                top: rect,
                outer_rect: rect,
                border,
                ..Self::default()
            };
        }
        let b = border as i32;
        let inner_h = rect.h - 2 * border;
        Self {
            top: Rect::new(rect.tl.x, rect.tl.y, rect.w, border),
            bottom: Rect::new(rect.tl.x, rect.bottom() - b, rect.w, border),
            left: Rect::new(rect.tl.x, rect.tl.y + b, border, inner_h),
            right: Rect::new(rect.right() - b, rect.tl.y + b, border, inner_h),
            outer_rect: rect,
            border,
        }
    }

    /// The space inside the frame.
    pub fn inner(&self) -> Rect {
        self.outer_rect.inset(self.border)
    }

    /// The original outer rect.
    pub fn outer(&self) -> Rect {
        self.outer_rect
    }

    /// All non-empty strips of the frame.
    pub fn strips(&self) -> impl Iterator<Item = Rect> {
        [self.top, self.bottom, self.left, self.right]
            .into_iter()
            .filter(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tframe() {
        let r = Rect::new(10, 10, 10, 10);
        let f = Frame::new(r, 1);
        assert_eq!(f.top, Rect::new(10, 10, 10, 1));
        assert_eq!(f.bottom, Rect::new(10, 19, 10, 1));
        assert_eq!(f.left, Rect::new(10, 11, 1, 8));
        assert_eq!(f.right, Rect::new(19, 11, 1, 8));
        assert_eq!(f.inner(), Rect::new(11, 11, 8, 8));
        assert_eq!(f.outer(), r);
        let area: usize = f.strips().map(|s| s.expanse().area()).sum();
        assert_eq!(area, 100 - 64);
    }

    #[test]
    fn oversized_border_fills_rect() {
        let r = Rect::new(0, 0, 4, 4);
        let f = Frame::new(r, 2);
        assert_eq!(f.strips().collect::<Vec<_>>(), vec![r]);
        assert!(f.inner().is_empty());
    }
}
