//! Greedy breakpoint scan over accumulated character widths.

use crate::error::BreakError;
use crate::models::CharWidthMap;
use crate::oracle::{calculate_width_of_characters, distinct_chars, width_of};
use crate::surface::MeasurementSurface;

pub(crate) fn validate_threshold(threshold_width: f64) -> Result<(), BreakError> {
    if threshold_width.is_finite() && threshold_width >= 0.0 {
        Ok(())
    } else {
        Err(BreakError::InvalidThreshold(threshold_width))
    }
}

/// Char indices at which the running width of `input` first exceeds `threshold_width`.
///
/// Widths come from the distinct characters of `input`, measured on `surface` with the given
/// font. See [`break_indices_with_widths`] for the accumulation rule.
///
/// ### Errors
/// - [`BreakError::InvalidThreshold`], checked before anything is measured
/// - anything [`calculate_width_of_characters`] raises
///
/// ### Example
/// ```
/// use pxbreak::scanner::get_break_indices;
/// use pxbreak::surface::{TableSurface, WidthTable};
///
/// let mut surface = TableSurface::new()
///     .with_family("Demo", WidthTable::from_pairs([('a', 5.0), ('b', 100.0)]));
/// let breaks = get_break_indices("aba", 50.0, &mut surface, "Demo", 1.0)?;
/// assert_eq!(breaks, vec![1]);
/// # Ok::<(), pxbreak::BreakError>(())
/// ```
pub fn get_break_indices<S>(
    input: &str,
    threshold_width: f64,
    surface: &mut S,
    font_family: &str,
    font_size_px: f64,
) -> Result<Vec<usize>, BreakError>
where
    S: MeasurementSurface + ?Sized,
{
    validate_threshold(threshold_width)?;
    let chars = distinct_chars(input);
    let widths = calculate_width_of_characters(surface, &chars, font_family, font_size_px)?;
    break_indices_with_widths(input, threshold_width, &widths)
}

/// Scan `input` against an existing width map.
///
/// Widths are summed left to right. When the sum strictly exceeds `threshold_width` the
/// current index is recorded and the sum restarts at zero; the overflowing character is not
/// carried into the next segment. A trailing run that never overflows adds no index.
pub fn break_indices_with_widths(
    input: &str,
    threshold_width: f64,
    widths: &CharWidthMap,
) -> Result<Vec<usize>, BreakError> {
    validate_threshold(threshold_width)?;

    let mut breaks = Vec::new();
    let mut acc = 0.0;
    for (i, ch) in input.chars().enumerate() {
        acc += width_of(widths, ch)?;
        if acc > threshold_width {
            breaks.push(i);
            acc = 0.0;
        }
    }
    log::debug!(
        "{} break(s) at threshold {threshold_width}px",
        breaks.len()
    );
    Ok(breaks)
}
