use std::{cell::RefCell, collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    error::Result,
    geom::Expanse,
    style::{Colour, FontSpec, TextEffects},
    surface::Surface,
};

/// An opened font at a fixed pixel size.
pub trait Font {
    /// The pixel size of `text` when rendered with `effects`.
    fn size(&self, text: &str, effects: TextEffects) -> Expanse;

    /// Line height in pixels.
    fn height(&self) -> u32;

    /// Render `text` to a new surface. With `bg` unset the surface is
    /// transparent behind the glyphs.
    fn render(
        &self,
        text: &str,
        effects: TextEffects,
        antialias: bool,
        fg: Colour,
        bg: Option<Colour>,
    ) -> Result<Surface>;
}

/// Opens fonts by family name and size.
pub trait FontService {
    /// Open `family` at `size` pixels.
    fn open(&self, family: &str, size: u32) -> Result<Box<dyn Font>>;
}

/// Cache key for opened fonts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    /// Family name.
    family: String,
    /// Pixel size.
    size: u32,
}

/// Opened fonts keyed by family and size. Entries are created on first use
/// and live as long as the cache.
pub struct FontCache {
    /// Backend used to open missing fonts.
    service: Box<dyn FontService>,
    /// Fonts opened so far.
    fonts: RefCell<HashMap<FontKey, Rc<dyn Font>>>,
}

impl FontCache {
    /// Create an empty cache over a font service.
    pub fn new(service: impl FontService + 'static) -> Self {
        Self {
            service: Box::new(service),
            fonts: RefCell::new(HashMap::new()),
        }
    }

    /// Return the font for a spec, opening it on first use.
    pub fn get(&self, spec: &FontSpec) -> Result<Rc<dyn Font>> {
        let key = FontKey {
            family: spec.family.clone(),
            size: spec.size,
        };
        if let Some(font) = self.fonts.borrow().get(&key) {
            return Ok(Rc::clone(font));
        }
        debug!(family = %key.family, size = key.size, "opening font");
        let font: Rc<dyn Font> = Rc::from(self.service.open(&key.family, key.size)?);
        self.fonts.borrow_mut().insert(key, Rc::clone(&font));
        Ok(font)
    }

    /// Number of fonts opened so far.
    pub fn len(&self) -> usize {
        self.fonts.borrow().len()
    }

    /// Has no font been opened yet?
    pub fn is_empty(&self) -> bool {
        self.fonts.borrow().is_empty()
    }
}
