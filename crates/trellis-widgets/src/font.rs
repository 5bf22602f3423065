//! A [`FontService`] backed by `fontdue`.
//!
//! Families are registered up front from bytes or files. Bold, italic and
//! underline are synthesized on the coverage buffer, so one face per family
//! is enough.

use std::{collections::HashMap, fs, path::Path, rc::Rc};

use fontdue::{Font as FontdueFont, FontSettings};
use tracing::{debug, warn};
use trellis::{
    Colour, Font, FontService, Surface, TextEffects,
    geom::{Expanse, Point},
};

use crate::error::{Error, Result};

/// Coverage at or above this value is drawn when anti-aliasing is off.
const COVERAGE_THRESHOLD: u8 = 128;

/// Parsed font faces keyed by family name.
#[derive(Default)]
pub struct FontdueService {
    /// Registered faces.
    families: HashMap<String, Rc<FontdueFont>>,
    /// Family used when a requested family is not registered.
    fallback: Option<String>,
}

impl FontdueService {
    /// An empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family from in-memory font bytes.
    pub fn register(&mut self, family: impl Into<String>, data: impl AsRef<[u8]>) -> Result<()> {
        let font = FontdueFont::from_bytes(data.as_ref(), FontSettings::default())
            .map_err(Error::FontLoad)?;
        let family = family.into();
        debug!(%family, "font registered");
        self.families.insert(family, Rc::new(font));
        Ok(())
    }

    /// Register a family from a font file.
    pub fn register_file(&mut self, family: impl Into<String>, path: impl AsRef<Path>) -> Result<()> {
        let data = fs::read(path.as_ref())?;
        self.register(family, data)
    }

    /// Use `family` for any unregistered family name.
    pub fn with_fallback(mut self, family: impl Into<String>) -> Self {
        self.fallback = Some(family.into());
        self
    }

    /// Is the family registered?
    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    /// Find the face for a family, falling back if one is configured.
    fn resolve(&self, family: &str) -> Result<Rc<FontdueFont>> {
        if let Some(font) = self.families.get(family) {
            return Ok(Rc::clone(font));
        }
        let fallback = self
            .fallback
            .as_deref()
            .and_then(|name| self.families.get(name).map(|f| (name, f)));
        match fallback {
            Some((name, font)) => {
                warn!(requested = family, fallback = name, "unknown font family");
                Ok(Rc::clone(font))
            }
            None => Err(Error::UnknownFamily(family.into())),
        }
    }
}

impl FontService for FontdueService {
    fn open(&self, family: &str, size: u32) -> trellis::Result<Box<dyn Font>> {
        let font = self.resolve(family)?;
        Ok(Box::new(FontdueFace::new(font, size)))
    }
}

/// One face at a fixed pixel size.
struct FontdueFace {
    /// Parsed face.
    font: Rc<FontdueFont>,
    /// Pixel size.
    px: f32,
    /// Baseline offset from the top of the line.
    ascent: i32,
    /// Line height.
    height: u32,
}

impl FontdueFace {
    /// Open a face at `size` pixels.
    fn new(font: Rc<FontdueFont>, size: u32) -> Self {
        let px = size.max(1) as f32;
        let (ascent, height) = match font.horizontal_line_metrics(px) {
            Some(m) => (m.ascent.round() as i32, m.new_line_size.ceil().max(1.0) as u32),
            None => (px.round() as i32, px.ceil() as u32),
        };
        Self {
            font,
            px,
            ascent,
            height,
        }
    }

    /// Unstyled advance width of a line of text.
    fn advance(&self, text: &str) -> u32 {
        let total: f32 = text
            .chars()
            .map(|c| self.font.metrics(c, self.px).advance_width)
            .sum();
        total.max(0.0).ceil() as u32
    }

    /// Rasterize `text` into a coverage buffer of `size`.
    fn coverage(&self, text: &str, effects: TextEffects, size: Expanse) -> Vec<u8> {
        let mut buffer = vec![0u8; (size.w * size.h) as usize];
        let mut cursor = 0.0f32;
        for ch in text.chars() {
            let (m, bitmap) = self.font.rasterize(ch, self.px);
            let left = cursor.round() as i32 + m.xmin;
            let top = self.ascent - (m.ymin + m.height as i32);
            if m.width > 0 {
                for (i, c) in bitmap.iter().enumerate() {
                    let p = Point::new(left + (i % m.width) as i32, top + (i / m.width) as i32);
                    if let Some(idx) = index(size, p) {
                        buffer[idx] = buffer[idx].max(*c);
                    }
                }
            }
            cursor += m.advance_width;
        }
        if effects.italic {
            buffer = shear(&buffer, size, italic_slant(self.height));
        }
        if effects.bold {
            embolden(&mut buffer, size);
        }
        if effects.underline && size.h > 0 {
            let row = (self.ascent + 1).clamp(0, size.h as i32 - 1) as usize;
            let start = row * size.w as usize;
            buffer[start..start + size.w as usize].fill(u8::MAX);
        }
        buffer
    }
}

impl Font for FontdueFace {
    fn size(&self, text: &str, effects: TextEffects) -> Expanse {
        let mut w = self.advance(text);
        if w > 0 {
            if effects.italic {
                w += italic_slant(self.height);
            }
            if effects.bold {
                w += 1;
            }
        }
        Expanse::new(w, self.height)
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn render(
        &self,
        text: &str,
        effects: TextEffects,
        antialias: bool,
        fg: Colour,
        bg: Option<Colour>,
    ) -> trellis::Result<Surface> {
        let size = self.size(text, effects);
        let mut out = Surface::filled(size, bg.unwrap_or(Colour::TRANSPARENT));
        for (i, c) in self.coverage(text, effects, size).into_iter().enumerate() {
            let c = if antialias {
                c
            } else if c >= COVERAGE_THRESHOLD {
                u8::MAX
            } else {
                0
            };
            if c == 0 {
                continue;
            }
            let p = Point::new((i as u32 % size.w) as i32, (i as u32 / size.w) as i32);
            let alpha = (fg.a as u32 * c as u32 / 255) as u8;
            out.blend(p, fg.with_alpha(alpha));
        }
        Ok(out)
    }
}

/// Buffer index of an in-bounds point.
fn index(size: Expanse, p: Point) -> Option<usize> {
    if p.x < 0 || p.y < 0 || p.x as u32 >= size.w || p.y as u32 >= size.h {
        return None;
    }
    Some(p.y as usize * size.w as usize + p.x as usize)
}

/// Horizontal slant of italic text across one line.
fn italic_slant(line_height: u32) -> u32 {
    if line_height <= 1 {
        return 0;
    }
    ((line_height as f32 * 0.2).round() as u32).max(1)
}

/// Shear rows to the right, the top row by `slant` and the bottom row not at
/// all.
fn shear(buffer: &[u8], size: Expanse, slant: u32) -> Vec<u8> {
    let mut out = vec![0u8; buffer.len()];
    let span = size.h.saturating_sub(1);
    for y in 0..size.h {
        let shift = if span == 0 { 0 } else { (span - y) * slant / span };
        let row = (y * size.w) as usize;
        for x in 0..size.w.saturating_sub(shift) {
            let value = buffer[row + x as usize];
            let dest = row + (x + shift) as usize;
            out[dest] = out[dest].max(value);
        }
    }
    out
}

/// Thicken strokes by copying coverage into the next column.
fn embolden(buffer: &mut [u8], size: Expanse) {
    if size.w < 2 {
        return;
    }
    for y in 0..size.h {
        let row = (y * size.w) as usize;
        for x in (0..(size.w - 1) as usize).rev() {
            let value = buffer[row + x];
            if value > 0 {
                buffer[row + x + 1] = buffer[row + x + 1].max(value);
            }
        }
    }
}
