use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::BreakError;

/// Advance width in pixels for each distinct character of an input, for one font.
pub type CharWidthMap = AHashMap<char, f64>;

/// Font family and pixel size handed to a measurement surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Family name, or a comma-separated fallback list like `"Inter, sans-serif"`.
    pub family: String,
    pub size_px: f64,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    /// Split the family string into individual names, trimming whitespace and quotes.
    pub fn families(&self) -> Vec<&str> {
        split_families(&self.family)
    }

    pub fn validate(&self) -> Result<(), BreakError> {
        validate_font_size(self.size_px)
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "sans-serif".into(),
            size_px: 16.0,
        }
    }
}

/// Split a CSS-like family list (`"\"DejaVu Sans\", sans-serif"`) into names.
pub fn split_families(family: &str) -> Vec<&str> {
    family
        .split(',')
        .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|f| !f.is_empty())
        .collect()
}

pub(crate) fn validate_font_size(size_px: f64) -> Result<(), BreakError> {
    if size_px.is_finite() && size_px > 0.0 {
        Ok(())
    } else {
        Err(BreakError::InvalidFontSize(size_px))
    }
}

/// One run of characters between two breaks.
///
/// `start..=end` is the inclusive char range; `end` is the break index for every
/// segment except a trailing one that never overflowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub width: f64,
}
