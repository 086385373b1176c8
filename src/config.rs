//! JSON configuration: default font parameters and where font files or width tables live.
//!
//! Lookup order for [`Config::discover`]: an explicit path, then `$PXBREAK_CONFIG`, then
//! `<config dir>/pxbreak/config.json`. A missing default file is not an error; an explicit
//! path that cannot be read is.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::FontDescriptor;
use crate::surface::{EstimateSurface, GlyphSurface, MeasurementSurface, TableSurface};

pub const CONFIG_ENV: &str = "PXBREAK_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font_family: String,
    pub font_size_px: f64,
    /// Family name -> font file.
    pub fonts: BTreeMap<String, PathBuf>,
    /// Width table JSON; takes precedence over `fonts`.
    pub metrics: Option<PathBuf>,
    /// Ratio used by the estimate surface when neither fonts nor metrics are set.
    pub char_width_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        let font = FontDescriptor::default();
        Self {
            font_family: font.family,
            font_size_px: font.size_px,
            fonts: BTreeMap::new(),
            metrics: None,
            char_width_factor: crate::surface::estimate::DEFAULT_CHAR_WIDTH_FACTOR,
        }
    }
}

/// `<config dir>/pxbreak/config.json`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pxbreak").join("config.json"))
}

impl Config {
    /// Load a config file. Relative font and metrics paths resolve against its directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut cfg: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        if let Some(base) = path.parent() {
            cfg.resolve_relative_to(base);
        }
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            return Self::load(p);
        }
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return Self::load(PathBuf::from(p));
        }
        match default_path() {
            Some(p) if p.is_file() => Self::load(p),
            _ => Ok(Self::default()),
        }
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in self.fonts.values_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        if let Some(m) = self.metrics.as_mut()
            && m.is_relative()
        {
            *m = base.join(&*m);
        }
    }

    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(self.font_family.clone(), self.font_size_px)
    }

    /// Build the surface this config describes: width table, else font files, else estimate.
    pub fn build_surface(&self) -> Result<Box<dyn MeasurementSurface>> {
        if let Some(path) = &self.metrics {
            log::info!("using width table {}", path.display());
            return Ok(Box::new(TableSurface::from_path(path)?));
        }
        if !self.fonts.is_empty() {
            let mut surface = GlyphSurface::new();
            for (family, path) in &self.fonts {
                surface.register_font_file(family, path)?;
            }
            log::info!("using {} font file(s)", self.fonts.len());
            return Ok(Box::new(surface));
        }
        log::info!(
            "no fonts configured, estimating {} em per char",
            self.char_width_factor
        );
        Ok(Box::new(EstimateSurface::new(self.char_width_factor)))
    }
}
