//! Error types raised by the drawing engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or reconfiguring a drawing surface.
///
/// Ordinary drawing calls never return these: stray pointer events and
/// unresolvable stamps are tolerated rather than reported.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid drawing surface {width}x{height}: {reason}")]
    InvalidSurface {
        width: i32,
        height: i32,
        reason: &'static str,
    },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG I/O error: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to load stamp image from {path}: {source}")]
    StampLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode stamp image {path}: {source}")]
    StampDecode {
        path: PathBuf,
        #[source]
        source: cairo::IoError,
    },
}

impl EngineError {
    pub(crate) fn invalid_surface(width: i32, height: i32, reason: &'static str) -> Self {
        Self::InvalidSurface {
            width,
            height,
            reason,
        }
    }
}
