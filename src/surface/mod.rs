//! Measurement surfaces: the handle the width oracle measures characters through.
//!
//! A surface carries a "current font" that [`MeasurementSurface::configure_font`] replaces.
//! That state is explicit on the handle and only reachable through `&mut`, so two measurement
//! batches can never interleave on the same surface.
//!
//! - [`GlyphSurface`]: real font files parsed with `ab_glyph`
//! - [`EstimateSurface`]: constant-ratio heuristic, needs no font file
//! - [`TableSurface`]: explicit per-family width tables in em units

pub mod estimate;
pub mod glyph;
pub mod table;

pub use estimate::EstimateSurface;
pub use glyph::GlyphSurface;
pub use table::{TableSurface, WidthTable};

use crate::error::BreakError;

/// External text-measurement capability.
pub trait MeasurementSurface {
    /// Select the font used by subsequent measurements.
    ///
    /// `family` may be a comma-separated fallback list. Fails with
    /// [`BreakError::MeasurementUnavailable`] when no listed family resolves; after a failure
    /// the surface has no current font.
    fn configure_font(&mut self, family: &str, size_px: f64) -> Result<(), BreakError>;

    /// Advance width of `ch` in pixels under the current font.
    fn measure_advance_width(&self, ch: char) -> Result<f64, BreakError>;
}

impl<S: MeasurementSurface + ?Sized> MeasurementSurface for Box<S> {
    fn configure_font(&mut self, family: &str, size_px: f64) -> Result<(), BreakError> {
        (**self).configure_font(family, size_px)
    }

    fn measure_advance_width(&self, ch: char) -> Result<f64, BreakError> {
        (**self).measure_advance_width(ch)
    }
}

pub(crate) fn no_font_configured() -> BreakError {
    BreakError::unavailable("no font configured on the measurement surface")
}
