//! Brush modes, stamp images and the per-engine brush state.

pub mod mode;
pub mod preview;
pub mod stamp;

pub use mode::BrushMode;
pub use preview::PreviewFilter;
pub use stamp::{NoStamps, StampCache, StampHandle, StampSource};

use crate::util::Point;

/// Mutable brush state carried between `draw` calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrushState {
    /// Active render strategy
    pub mode: BrushMode,
    /// Image used by stamp mode; `None` means stamps are skipped
    pub active_stamp: Option<StampHandle>,
    /// Most recently rendered position, start of the next segment
    pub last_point: Point,
}
