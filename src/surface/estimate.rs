//! Heuristic widths for when no font file is at hand.

use super::{MeasurementSurface, no_font_configured};
use crate::error::BreakError;
use crate::models::validate_font_size;

/// Ratio of advance width to font size used when nothing better is configured.
pub const DEFAULT_CHAR_WIDTH_FACTOR: f64 = 0.60;

/// Every printable character is `size_px * char_width_factor` wide; control characters are
/// zero-width. Any family name is accepted.
#[derive(Debug, Clone)]
pub struct EstimateSurface {
    pub char_width_factor: f64,
    size_px: Option<f64>,
}

impl EstimateSurface {
    pub fn new(char_width_factor: f64) -> Self {
        Self {
            char_width_factor,
            size_px: None,
        }
    }
}

impl Default for EstimateSurface {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_WIDTH_FACTOR)
    }
}

impl MeasurementSurface for EstimateSurface {
    fn configure_font(&mut self, family: &str, size_px: f64) -> Result<(), BreakError> {
        self.size_px = None;
        validate_font_size(size_px)?;
        log::debug!("estimate surface: {size_px}px (family {family:?} ignored)");
        self.size_px = Some(size_px);
        Ok(())
    }

    fn measure_advance_width(&self, ch: char) -> Result<f64, BreakError> {
        let size = self.size_px.ok_or_else(no_font_configured)?;
        if ch.is_control() {
            return Ok(0.0);
        }
        Ok(size * self.char_width_factor)
    }
}
