//! Leaf widgets for trellis: text labels, buttons, single-line entries and
//! bitmaps, plus a `fontdue`-backed font service and a box-glyph placeholder.

mod button;
mod entry;
/// Widget error types.
pub mod error;
pub mod font;
mod image_view;
mod label;
mod placeholder;

pub use button::Button;
pub use entry::Entry;
pub use error::{Error, Result};
pub use font::FontdueService;
pub use image_view::Image;
pub use label::Label;
pub use placeholder::BoxFonts;
