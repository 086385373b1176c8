//! Width tables keyed by family, expressed in em so one table serves every size.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{MeasurementSurface, no_font_configured};
use crate::error::BreakError;
use crate::models::{split_families, validate_font_size};

/// Per-character advance widths for one family, in em.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidthTable {
    #[serde(default)]
    pub widths_em: BTreeMap<char, f64>,
    /// Width used for characters missing from `widths_em`. Without it they are unmeasurable.
    #[serde(default)]
    pub fallback_em: Option<f64>,
}

impl WidthTable {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, f64)>) -> Self {
        Self {
            widths_em: pairs.into_iter().collect(),
            fallback_em: None,
        }
    }

    pub fn with_fallback(mut self, em: f64) -> Self {
        self.fallback_em = Some(em);
        self
    }

    fn width_em(&self, ch: char) -> Option<f64> {
        self.widths_em.get(&ch).copied().or(self.fallback_em)
    }
}

/// Surface backed by [`WidthTable`]s. Family names match case-insensitively.
///
/// JSON form:
/// ```json
/// { "families": { "Mono": { "widths_em": { "a": 0.6 }, "fallback_em": 0.6 } } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSurface {
    #[serde(default)]
    pub families: BTreeMap<String, WidthTable>,
    #[serde(skip)]
    current: Option<(String, f64)>,
}

impl TableSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: impl Into<String>, table: WidthTable) -> Self {
        self.families.insert(family.into(), table);
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing width table JSON")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading width table {}", path.display()))?;
        Self::from_json_str(&s).with_context(|| format!("in {}", path.display()))
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.families
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .map(String::as_str)
    }
}

impl MeasurementSurface for TableSurface {
    fn configure_font(&mut self, family: &str, size_px: f64) -> Result<(), BreakError> {
        self.current = None;
        validate_font_size(size_px)?;
        for name in split_families(family) {
            if let Some(key) = self.lookup(name) {
                log::debug!("table surface: {key} at {size_px}px");
                self.current = Some((key.to_string(), size_px));
                return Ok(());
            }
            log::warn!("no width table for family {name:?}");
        }
        Err(BreakError::unavailable(format!(
            "no width table for font family {family:?}"
        )))
    }

    fn measure_advance_width(&self, ch: char) -> Result<f64, BreakError> {
        let (key, size) = self.current.as_ref().ok_or_else(no_font_configured)?;
        let em = self
            .families
            .get(key)
            .and_then(|t| t.width_em(ch))
            .ok_or_else(|| BreakError::unavailable(format!("no width for {ch:?} in {key}")))?;
        Ok(em * size)
    }
}
