//! Geometry primitives used across trellis.
//!
//! All coordinates are signed pixels: windows can be positioned partly off
//! screen, and positioning helpers routinely produce negative offsets. Sizes
//! are unsigned.

#![warn(missing_docs)]

/// Width/height size type.
mod expanse;
/// Border frame helpers.
mod frame;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use frame::Frame;
pub use point::Point;
pub use rect::Rect;
