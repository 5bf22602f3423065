//! Trellis: a retained-mode window hierarchy.
//!
//! Trellis keeps a tree of rectangular windows, resolves each window's
//! geometry from relative and absolute measures, dispatches pointer and
//! keyboard input by hit-testing, and composites every window onto a
//! [`Canvas`] in a fixed traversal order.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`Tree`] - The window arena, dispatcher and draw pipeline
//! - [`Widget`] - The trait implemented by windows with behaviour
//! - [`Config`] - Construction-time window options
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives (Rect, Point, Expanse, Frame)
//! - [`poser`] - Reactive positioning helpers
//! - [`testing`] - Deterministic fonts, recording canvases and a harness

#![warn(missing_docs)]

/// Render backend interface.
pub mod canvas;
/// Window configuration and defaults.
pub mod config;
/// Input event dispatch.
mod dispatch;
/// Debug dump utilities.
pub mod dump;
/// Core error types.
pub mod error;
/// Input and window event types.
pub mod event;
/// Keyboard focus.
pub mod focus;
/// Font backend interface and cache.
pub mod font;
pub mod geometry;
/// Window identifiers.
mod id;
/// Window data stored in the arena.
pub mod node;
pub mod poser;
/// The draw pipeline.
mod render;
/// Styling and colour helpers.
pub mod style;
/// Software RGBA surfaces.
pub mod surface;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// The window tree.
pub mod tree;
/// Widget and draw capability traits.
pub mod widget;

pub use canvas::Canvas;
pub use config::{Config, Defaults, Layout, Measure};
pub use error::{Error, Result};
pub use event::{Event, EventKind, InputEvent, MouseButton};
pub use focus::FocusManager;
pub use font::{Font, FontCache, FontService};
pub use id::{TypedId, WindowId};
pub use node::{Callback, Window};
pub use poser::{Poser, VAlign};
pub use style::{Background, BorderStyle, Colour, FontSpec, Style, TextEffects};
pub use surface::Surface;
pub use tree::Tree;
pub use trellis_geom as geom;
pub use widget::{Draw, DrawContext, Widget};
