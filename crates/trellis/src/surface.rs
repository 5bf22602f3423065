use std::fmt;

use crate::{
    canvas::Canvas,
    error::{Error, Result},
    geom::{Expanse, Frame, Point, Rect},
    style::Colour,
};

/// An owned RGBA pixel buffer. Surfaces hold rendered window content and
/// double as a software [`Canvas`] with source-over blending.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    /// Dimensions in pixels.
    size: Expanse,
    /// Row-major pixels.
    pixels: Vec<Colour>,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(size: Expanse) -> Self {
        Self::filled(size, Colour::TRANSPARENT)
    }

    /// A surface filled with one colour.
    pub fn filled(size: Expanse, colour: Colour) -> Self {
        Self {
            size,
            pixels: vec![colour; size.area()],
        }
    }

    /// Build a surface from packed RGBA bytes.
    pub fn from_rgba(size: Expanse, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != size.area() * 4 {
            return Err(Error::Invalid(format!(
                "expected {} bytes for a {}x{} surface, got {}",
                size.area() * 4,
                size.w,
                size.h,
                bytes.len()
            )));
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Colour::rgba(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self { size, pixels })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.w
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.h
    }

    /// The surface bounds, anchored at the origin.
    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// Index of an in-bounds pixel.
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as u32 >= self.size.w || p.y as u32 >= self.size.h {
            return None;
        }
        Some(p.y as usize * self.size.w as usize + p.x as usize)
    }

    /// Read a pixel. Out-of-bounds reads return `None`.
    pub fn get(&self, p: impl Into<Point>) -> Option<Colour> {
        self.index(p.into()).map(|i| self.pixels[i])
    }

    /// Overwrite a pixel without blending. Out-of-bounds writes are dropped.
    pub fn set(&mut self, p: impl Into<Point>, colour: Colour) {
        if let Some(i) = self.index(p.into()) {
            self.pixels[i] = colour;
        }
    }

    /// Blend a colour onto a pixel. Out-of-bounds writes are dropped.
    pub fn blend(&mut self, p: Point, colour: Colour) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = colour.over(self.pixels[i]);
        }
    }

    /// Does every pixel in `rect` hold exactly `colour`?
    pub fn is_filled(&self, rect: Rect, colour: Colour) -> bool {
        let Some(r) = rect.intersect(&self.rect()) else {
            return rect.is_empty();
        };
        (r.tl.y..r.bottom())
            .all(|y| (r.tl.x..r.right()).all(|x| self.get((x, y)) == Some(colour)))
    }

    /// Packed RGBA bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, c.a])
            .collect()
    }

    /// Return a copy resampled to `size` with bilinear filtering.
    pub fn smooth_scale(&self, size: Expanse) -> Self {
        let mut out = Self::new(size);
        if self.size.is_empty() || size.is_empty() {
            return out;
        }
        if size == self.size {
            out.pixels.clone_from(&self.pixels);
            return out;
        }
        let sx = self.size.w as f32 / size.w as f32;
        let sy = self.size.h as f32 / size.h as f32;
        let max_x = self.size.w as f32 - 1.0;
        let max_y = self.size.h as f32 - 1.0;
        for y in 0..size.h {
            let fy = ((y as f32 + 0.5) * sy - 0.5).clamp(0.0, max_y);
            let y0 = fy.floor() as i32;
            let y1 = (y0 + 1).min(max_y as i32);
            let ty = fy - y0 as f32;
            for x in 0..size.w {
                let fx = ((x as f32 + 0.5) * sx - 0.5).clamp(0.0, max_x);
                let x0 = fx.floor() as i32;
                let x1 = (x0 + 1).min(max_x as i32);
                let tx = fx - x0 as f32;
                let px = |x, y| self.get((x, y)).unwrap_or(Colour::TRANSPARENT);
                let (a, b, c, d) = (px(x0, y0), px(x1, y0), px(x0, y1), px(x1, y1));
                let mix = |f: fn(Colour) -> u8| {
                    let top = f(a) as f32 * (1.0 - tx) + f(b) as f32 * tx;
                    let bottom = f(c) as f32 * (1.0 - tx) + f(d) as f32 * tx;
                    (top * (1.0 - ty) + bottom * ty).round() as u8
                };
                out.set(
                    (x as i32, y as i32),
                    Colour::rgba(mix(|c| c.r), mix(|c| c.g), mix(|c| c.b), mix(|c| c.a)),
                );
            }
        }
        out
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surface({}x{})", self.size.w, self.size.h)
    }
}

impl Canvas for Surface {
    fn size(&self) -> Expanse {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<()> {
        let Some(r) = rect.intersect(&self.rect()) else {
            return Ok(());
        };
        for y in r.tl.y..r.bottom() {
            for x in r.tl.x..r.right() {
                self.blend(Point::new(x, y), colour);
            }
        }
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, colour: Colour, width: u32) -> Result<()> {
        if width == 0 {
            return Ok(());
        }
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };
        // Thick lines spread across the minor axis, centred on the ideal line.
        let lo = -((width as i32 - 1) / 2);
        let hi = lo + width as i32;
        let horizontal = dx >= -dy;

        let mut p = from;
        let mut err = dx + dy;
        loop {
            for o in lo..hi {
                let q = if horizontal {
                    p.shift(0, o)
                } else {
                    p.shift(o, 0)
                };
                self.blend(q, colour);
            }
            if p == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += step_x;
            }
            if e2 <= dx {
                err += dx;
                p.y += step_y;
            }
        }
        Ok(())
    }

    fn rect_outline(&mut self, rect: Rect, colour: Colour, width: u32) -> Result<()> {
        if width == 0 {
            return Ok(());
        }
        for strip in Frame::new(rect, width).strips() {
            self.fill_rect(strip, colour)?;
        }
        Ok(())
    }

    fn blit(&mut self, src: &Surface, area: Option<Rect>, dest: Rect) -> Result<()> {
        let area = match area {
            Some(a) => match a.intersect(&src.rect()) {
                Some(a) => a,
                None => return Ok(()),
            },
            None => src.rect(),
        };
        let origin = area.tl;
        for y in area.tl.y..area.bottom() {
            for x in area.tl.x..area.right() {
                let target = dest.tl + (Point::new(x, y) - origin);
                if !dest.contains_point(target) {
                    continue;
                }
                if let Some(c) = src.get((x, y)) {
                    self.blend(target, c);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(255, 0, 0);

    #[test]
    fn fill_clips_to_bounds() -> Result<()> {
        let mut s = Surface::new(Expanse::new(4, 4));
        s.fill_rect(Rect::new(-2, 2, 10, 10), RED)?;
        assert!(s.is_filled(Rect::new(0, 2, 4, 2), RED));
        assert!(s.is_filled(Rect::new(0, 0, 4, 2), Colour::TRANSPARENT));
        Ok(())
    }

    #[test]
    fn line_endpoints_inclusive() -> Result<()> {
        let mut s = Surface::new(Expanse::new(5, 5));
        s.line(Point::new(0, 4), Point::new(4, 4), RED, 1)?;
        assert!(s.is_filled(Rect::new(0, 4, 5, 1), RED));
        s.line(Point::new(2, 0), Point::new(2, 3), Colour::BLUE, 1)?;
        assert!(s.is_filled(Rect::new(2, 0, 1, 4), Colour::BLUE));
        assert_eq!(s.get((3, 0)), Some(Colour::TRANSPARENT));
        Ok(())
    }

    #[test]
    fn thick_line() -> Result<()> {
        let mut s = Surface::new(Expanse::new(5, 5));
        s.line(Point::new(0, 2), Point::new(4, 2), RED, 3)?;
        assert!(s.is_filled(Rect::new(0, 1, 5, 3), RED));
        assert!(s.is_filled(Rect::new(0, 0, 5, 1), Colour::TRANSPARENT));
        Ok(())
    }

    #[test]
    fn outline() -> Result<()> {
        let mut s = Surface::new(Expanse::new(6, 6));
        s.rect_outline(Rect::new(1, 1, 4, 4), RED, 1)?;
        assert!(s.is_filled(Rect::new(1, 1, 4, 1), RED));
        assert!(s.is_filled(Rect::new(1, 4, 4, 1), RED));
        assert!(s.is_filled(Rect::new(2, 2, 2, 2), Colour::TRANSPARENT));
        Ok(())
    }

    #[test]
    fn blit_with_area_and_clip() -> Result<()> {
        let mut src = Surface::filled(Expanse::new(4, 4), Colour::BLUE);
        src.set((3, 0), RED);
        let mut dst = Surface::filled(Expanse::new(8, 8), Colour::WHITE);
        dst.blit(&src, Some(Rect::new(2, 0, 2, 2)), Rect::new(1, 1, 1, 5))?;
        // Only one column fits in the destination rect.
        assert_eq!(dst.get((1, 1)), Some(Colour::BLUE));
        assert_eq!(dst.get((2, 1)), Some(Colour::WHITE));
        dst.blit(&src, Some(Rect::new(3, 0, 1, 1)), Rect::new(5, 5, 3, 3))?;
        assert_eq!(dst.get((5, 5)), Some(RED));
        assert_eq!(dst.get((6, 5)), Some(Colour::WHITE));
        Ok(())
    }

    #[test]
    fn scale() {
        let s = Surface::filled(Expanse::new(2, 2), RED);
        let big = s.smooth_scale(Expanse::new(7, 3));
        assert_eq!(big.size(), Expanse::new(7, 3));
        assert!(big.is_filled(big.rect(), RED));
        assert_eq!(s.smooth_scale(Expanse::new(0, 3)).size(), Expanse::new(0, 3));
    }

    #[test]
    fn rgba_bytes() -> Result<()> {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let s = Surface::from_rgba(Expanse::new(2, 1), &bytes)?;
        assert_eq!(s.get((1, 0)), Some(Colour::rgba(5, 6, 7, 8)));
        assert_eq!(s.to_rgba_bytes(), bytes.to_vec());
        assert!(Surface::from_rgba(Expanse::new(2, 2), &bytes).is_err());
        Ok(())
    }
}
