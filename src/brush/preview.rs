//! Cosmetic live-preview filter shown while stamp mode is active.

/// Filter a host applies when presenting the live surface in stamp mode.
///
/// Purely visual: the stored raster and final stamp rendering are unaffected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewFilter {
    /// Invert colors of painted pixels
    pub invert: bool,
    /// Opacity the surface is presented with (0.0 - 1.0)
    pub opacity: f64,
}

impl Default for PreviewFilter {
    fn default() -> Self {
        Self {
            invert: true,
            opacity: 0.5,
        }
    }
}
