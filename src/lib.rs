//! Freehand stroke engine with line and stamped-image brushes.
//!
//! A [`DrawingEngine`] paints onto a Cairo image surface in response to
//! pointer positions, records every stroke, and sizes stamp-brush dabs from a
//! rolling average of recent segment lengths. Input devices, image pickers and
//! presentation stay with the host; the engine only consumes points and stamp
//! handles and exposes read-only state back.

pub mod brush;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod script;
pub mod util;

pub use brush::{BrushMode, StampCache, StampHandle, StampSource};
pub use config::Config;
pub use engine::{BrushSettings, DrawingEngine, RenderOutcome};
pub use error::EngineError;
pub use util::Point;
