//! Font-file backed surface.
//!
//! `ab_glyph` does not discover OS fonts, so every family has to be registered up front with
//! [`GlyphSurface::register_font`] or [`GlyphSurface::register_font_file`]. Generic names such
//! as `sans-serif` are ordinary registrations.

use std::path::Path;

use ab_glyph::{Font as _, FontArc};

use super::{MeasurementSurface, no_font_configured};
use crate::error::BreakError;
use crate::models::{split_families, validate_font_size};

struct ActiveFont {
    /// Resolved fallback chain, first entry is the primary font.
    chain: Vec<FontArc>,
    /// Em size in pixels, as in a CSS `font: <N>px` declaration.
    size_px: f64,
}

#[derive(Default)]
pub struct GlyphSurface {
    fonts: Vec<(String, FontArc)>,
    current: Option<ActiveFont>,
}

impl std::fmt::Debug for GlyphSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSurface")
            .field(
                "families",
                &self.fonts.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .field("configured", &self.current.is_some())
            .finish()
    }
}

impl GlyphSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register raw TrueType/OpenType bytes under `family`. Re-registering a family replaces it.
    pub fn register_font(&mut self, family: &str, data: Vec<u8>) -> Result<(), BreakError> {
        let font = FontArc::try_from_vec(data).map_err(|e| BreakError::FontLoad {
            origin: family.to_string(),
            reason: e.to_string(),
        })?;
        self.fonts.retain(|(name, _)| !name.eq_ignore_ascii_case(family));
        self.fonts.push((family.to_string(), font));
        log::debug!("registered font family {family:?}");
        Ok(())
    }

    pub fn register_font_file<P: AsRef<Path>>(
        &mut self,
        family: &str,
        path: P,
    ) -> Result<(), BreakError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| BreakError::FontLoad {
            origin: path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.register_font(family, data).map_err(|e| match e {
            BreakError::FontLoad { reason, .. } => BreakError::FontLoad {
                origin: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.fonts.iter().map(|(name, _)| name.as_str())
    }

    fn lookup(&self, name: &str) -> Option<&FontArc> {
        self.fonts
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, f)| f)
    }
}

impl MeasurementSurface for GlyphSurface {
    fn configure_font(&mut self, family: &str, size_px: f64) -> Result<(), BreakError> {
        self.current = None;
        validate_font_size(size_px)?;

        let mut chain = Vec::new();
        for name in split_families(family) {
            match self.lookup(name) {
                Some(font) => chain.push(font.clone()),
                None => log::warn!("font family {name:?} is not registered"),
            }
        }
        if chain.is_empty() {
            return Err(BreakError::unavailable(format!(
                "font family {family:?} could not be resolved"
            )));
        }

        log::debug!(
            "glyph surface: {family:?} at {size_px}px ({} font(s) in chain)",
            chain.len()
        );
        self.current = Some(ActiveFont { chain, size_px });
        Ok(())
    }

    fn measure_advance_width(&self, ch: char) -> Result<f64, BreakError> {
        let active = self.current.as_ref().ok_or_else(no_font_configured)?;
        // First font with a real glyph wins; otherwise the primary font's .notdef advance.
        let font = active
            .chain
            .iter()
            .find(|f| f.glyph_id(ch).0 != 0)
            .unwrap_or(&active.chain[0]);
        em_advance_px(font, ch, active.size_px)
    }
}

/// Advance of `ch` with the em square scaled to `size_px`.
///
/// `PxScale` sizes a font by its line height (ascent - descent), not by its em, so the
/// advance is scaled from font units directly.
fn em_advance_px(font: &FontArc, ch: char, size_px: f64) -> Result<f64, BreakError> {
    let units_per_em = font
        .units_per_em()
        .filter(|u| *u > 0.0)
        .ok_or_else(|| BreakError::unavailable("font has no units-per-em"))?;
    let advance = font.h_advance_unscaled(font.glyph_id(ch));
    Ok(f64::from(advance) * size_px / f64::from(units_per_em))
}
