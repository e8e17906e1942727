//! Freehand stroke engine.
//!
//! Turns a stream of pointer positions into pixels on a [`DrawingSurface`]:
//! `start_drawing` → any number of `draw` → `stop_drawing`. Every call runs to
//! completion on the caller's thread; nothing is deferred.
//!
//! [`DrawingSurface`]: crate::draw::DrawingSurface

mod core;
mod render;
mod stroke;

pub use core::{BrushSettings, DrawingEngine, DrawingState, RenderOutcome};
