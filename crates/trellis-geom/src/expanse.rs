use super::{Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// This is useful for surface sizes, or when we want to mandate that the
/// location of a `Rect` is (0, 0).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Expanse {
    /// Construct a new expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse, as a buffer length.
    pub fn area(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::zero(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this expanse can completely enclose the target in both dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let e = Expanse::new(10, 5);
        assert!(e.contains(&Expanse::new(10, 5)));
        assert!(!e.contains(&Expanse::new(11, 1)));
        assert_eq!(e.rect(), Rect::new(0, 0, 10, 5));
        assert!(Expanse::new(0, 3).is_empty());
    }

    #[test]
    fn area_does_not_wrap() {
        assert_eq!(Expanse::new(3, 4).area(), 12);
        assert_eq!(Expanse::new(65536, 65536).area(), 1 << 32);
    }
}
