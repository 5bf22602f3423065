use super::{Expanse, Point};

/// A rectangle with a signed origin and unsigned size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// Construct a rectangle from signed coordinates and a signed size.
    /// Negative sizes clamp to zero.
    pub fn from_signed(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, w.max(0) as u32, h.max(0) as u32)
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Does this rect have a zero size?
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The size of this rect.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// The exclusive right edge.
    pub fn right(&self) -> i32 {
        self.tl.x.saturating_add_unsigned(self.w)
    }

    /// The exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.tl.y.saturating_add_unsigned(self.h)
    }

    /// The top-left pixel.
    pub fn top_left(&self) -> Point {
        self.tl
    }

    /// The top-right pixel. Only meaningful for non-empty rects.
    pub fn top_right(&self) -> Point {
        Point::new(self.right() - 1, self.tl.y)
    }

    /// The bottom-left pixel. Only meaningful for non-empty rects.
    pub fn bottom_left(&self) -> Point {
        Point::new(self.tl.x, self.bottom() - 1)
    }

    /// The bottom-right pixel. Only meaningful for non-empty rects.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right() - 1, self.bottom() - 1)
    }

    /// Does this rect contain the point? The right and bottom edges are
    /// exclusive, so an empty rect contains nothing.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x && p.x < self.right() && p.y >= self.tl.y && p.y < self.bottom()
    }

    /// Does this rect completely enclose `other`?
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Return the intersection of two rects, or `None` if they do not overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = self.tl.x.max(other.tl.x);
        let top = self.tl.y.max(other.tl.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::new(
            left,
            top,
            right.abs_diff(left),
            bottom.abs_diff(top),
        ))
    }

    /// Shrink the rect by `n` pixels on every side. The size saturates at zero.
    pub fn inset(&self, n: u32) -> Self {
        let d = i32::try_from(n).unwrap_or(i32::MAX);
        Self {
            tl: self.tl.shift(d, d),
            w: self.w.saturating_sub(n.saturating_mul(2)),
            h: self.h.saturating_sub(n.saturating_mul(2)),
        }
    }

    /// Move the rect by an offset.
    pub fn shift(&self, dx: i32, dy: i32) -> Self {
        Self {
            tl: self.tl.shift(dx, dy),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains_point(Point::new(10, 10)));
        assert!(r.contains_point(Point::new(14, 14)));
        assert!(!r.contains_point(Point::new(15, 14)));
        assert!(!r.contains_point(Point::new(9, 12)));
        assert!(!Rect::new(0, 0, 0, 5).contains_point(Point::zero()));
    }

    #[test]
    fn corners() {
        let r = Rect::new(-2, 3, 4, 2);
        assert_eq!(r.top_left(), Point::new(-2, 3));
        assert_eq!(r.top_right(), Point::new(1, 3));
        assert_eq!(r.bottom_left(), Point::new(-2, 4));
        assert_eq!(r.bottom_right(), Point::new(1, 4));
    }

    #[test]
    fn intersect() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(
            a.intersect(&Rect::new(5, -5, 10, 10)),
            Some(Rect::new(5, 0, 5, 5))
        );
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
        assert_eq!(a.intersect(&a), Some(a));
    }

    #[test]
    fn inset_saturates() {
        let r = Rect::new(10, 10, 10, 6);
        assert_eq!(r.inset(2), Rect::new(12, 12, 6, 2));
        assert_eq!(r.inset(4), Rect::new(14, 14, 2, 0));
        assert_eq!(r.inset(0), r);
    }

    #[test]
    fn signed_sizes_clamp() {
        assert_eq!(Rect::from_signed(1, 2, -3, 4), Rect::new(1, 2, 0, 4));
    }

    proptest! {
        #[test]
        fn intersection_is_contained(
            ax in -100i32..100, ay in -100i32..100, aw in 0u32..100, ah in 0u32..100,
            bx in -100i32..100, by in -100i32..100, bw in 0u32..100, bh in 0u32..100,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            if let Some(i) = a.intersect(&b) {
                prop_assert!(a.contains_rect(&i));
                prop_assert!(b.contains_rect(&i));
                prop_assert!(!i.is_empty());
            }
            prop_assert_eq!(a.intersect(&b), b.intersect(&a));
        }
    }
}
