//! Measurement, scan and insertion composed into one call.

use crate::error::BreakError;
use crate::inserter::insert_chars_into_indices;
use crate::models::{CharWidthMap, FontDescriptor};
use crate::oracle::measure_text_chars;
use crate::scanner::{break_indices_with_widths, validate_threshold};
use crate::surface::MeasurementSurface;

/// Everything one pass over a string produced.
#[derive(Debug, Clone)]
pub struct Broken {
    pub widths: CharWidthMap,
    pub indices: Vec<usize>,
    pub output: String,
}

/// Measure `input`, find where it overflows `threshold_width`, and insert `marker` there.
pub fn break_text_detailed<S>(
    input: &str,
    threshold_width: f64,
    surface: &mut S,
    font: &FontDescriptor,
    marker: &str,
) -> Result<Broken, BreakError>
where
    S: MeasurementSurface + ?Sized,
{
    validate_threshold(threshold_width)?;
    let widths = measure_text_chars(surface, input, font)?;
    let indices = break_indices_with_widths(input, threshold_width, &widths)?;
    let output = insert_chars_into_indices(input, &indices, marker)?;
    Ok(Broken {
        widths,
        indices,
        output,
    })
}

/// Like [`break_text_detailed`] but only returns the output string.
///
/// ### Example
/// ```
/// use pxbreak::{FontDescriptor, break_text};
/// use pxbreak::surface::EstimateSurface;
///
/// // 10px at 0.6 em per char: every char is 6px wide.
/// let mut surface = EstimateSurface::default();
/// let out = break_text("hello", 13.0, &mut surface, &FontDescriptor::new("any", 10.0), "\n")?;
/// assert_eq!(out, "hel\nlo");
/// # Ok::<(), pxbreak::BreakError>(())
/// ```
pub fn break_text<S>(
    input: &str,
    threshold_width: f64,
    surface: &mut S,
    font: &FontDescriptor,
    marker: &str,
) -> Result<String, BreakError>
where
    S: MeasurementSurface + ?Sized,
{
    break_text_detailed(input, threshold_width, surface, font, marker).map(|b| b.output)
}
