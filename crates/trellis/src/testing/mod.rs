/// Recording render backend.
pub mod canvas;
/// Deterministic font service.
pub mod fonts;
/// Harness for driving a tree in tests.
pub mod harness;
/// Event recording.
pub mod log;

pub use canvas::{CanvasOp, RecordingCanvas};
pub use fonts::FixedFonts;
pub use harness::Harness;
pub use log::EventLog;
