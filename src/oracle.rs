//! Width oracle: one advance width per distinct character, for one font.

use ahash::AHashSet;

use crate::error::BreakError;
use crate::models::{CharWidthMap, FontDescriptor, validate_font_size};
use crate::surface::MeasurementSurface;

/// Distinct characters of `input` in order of first occurrence.
pub fn distinct_chars(input: &str) -> Vec<char> {
    let mut seen = AHashSet::new();
    input.chars().filter(|c| seen.insert(*c)).collect()
}

/// Measure every character of `chars` on `surface` with the given font.
///
/// The surface is configured once, then asked for each character. Duplicate characters
/// collapse to a single entry. Any failure discards the whole map.
///
/// ### Errors
/// - [`BreakError::InvalidFontSize`] for a zero, negative or non-finite size
/// - [`BreakError::MeasurementUnavailable`] when the font does not resolve, a character cannot
///   be measured, or the surface reports a negative or non-finite width
///
/// ### Example
/// ```
/// use pxbreak::oracle::calculate_width_of_characters;
/// use pxbreak::surface::{TableSurface, WidthTable};
///
/// let mut surface = TableSurface::new()
///     .with_family("Demo", WidthTable::from_pairs([('a', 0.5), ('b', 1.0)]));
/// let widths = calculate_width_of_characters(&mut surface, &['a', 'b'], "Demo", 10.0)?;
/// assert_eq!(widths[&'a'], 5.0);
/// assert_eq!(widths[&'b'], 10.0);
/// # Ok::<(), pxbreak::BreakError>(())
/// ```
pub fn calculate_width_of_characters<S>(
    surface: &mut S,
    chars: &[char],
    font_family: &str,
    font_size_px: f64,
) -> Result<CharWidthMap, BreakError>
where
    S: MeasurementSurface + ?Sized,
{
    validate_font_size(font_size_px)?;
    surface.configure_font(font_family, font_size_px)?;

    let mut widths = CharWidthMap::with_capacity(chars.len());
    for &ch in chars {
        let w = surface.measure_advance_width(ch)?;
        if !(w.is_finite() && w >= 0.0) {
            return Err(BreakError::unavailable(format!(
                "surface reported width {w} for {ch:?}"
            )));
        }
        log::trace!("{ch:?} -> {w}px");
        widths.insert(ch, w);
    }
    log::debug!(
        "measured {} distinct char(s) in {font_family:?} at {font_size_px}px",
        widths.len()
    );
    Ok(widths)
}

/// Width map for the distinct characters of `input`.
pub fn measure_text_chars<S>(
    surface: &mut S,
    input: &str,
    font: &FontDescriptor,
) -> Result<CharWidthMap, BreakError>
where
    S: MeasurementSurface + ?Sized,
{
    let chars = distinct_chars(input);
    calculate_width_of_characters(surface, &chars, &font.family, font.size_px)
}

/// Width of one character from a map that must already cover it.
pub(crate) fn width_of(widths: &CharWidthMap, ch: char) -> Result<f64, BreakError> {
    widths
        .get(&ch)
        .copied()
        .ok_or_else(|| BreakError::unavailable(format!("no measured width for {ch:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{TableSurface, WidthTable};

    /// Counts calls so the one-configure-per-batch contract can be checked.
    #[derive(Default)]
    struct Counting {
        configured: usize,
        measured: std::cell::Cell<usize>,
        bad_char: Option<char>,
    }

    impl MeasurementSurface for Counting {
        fn configure_font(&mut self, _family: &str, _size_px: f64) -> Result<(), BreakError> {
            self.configured += 1;
            Ok(())
        }

        fn measure_advance_width(&self, ch: char) -> Result<f64, BreakError> {
            self.measured.set(self.measured.get() + 1);
            if Some(ch) == self.bad_char {
                return Ok(f64::NAN);
            }
            Ok(1.0)
        }
    }

    #[test]
    fn distinct_chars_keep_first_occurrence_order() {
        assert_eq!(distinct_chars("banana"), vec!['b', 'a', 'n']);
        assert_eq!(distinct_chars("héé"), vec!['h', 'é']);
        assert!(distinct_chars("").is_empty());
    }

    #[test]
    fn configures_once_and_measures_each_char() {
        let mut s = Counting::default();
        let map = calculate_width_of_characters(&mut s, &['x', 'y', 'z'], "F", 9.0).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(s.configured, 1);
        assert_eq!(s.measured.get(), 3);
    }

    #[test]
    fn nonsense_width_aborts_whole_map() {
        let mut s = Counting {
            bad_char: Some('y'),
            ..Default::default()
        };
        let err = calculate_width_of_characters(&mut s, &['x', 'y', 'z'], "F", 9.0).unwrap_err();
        assert!(matches!(err, BreakError::MeasurementUnavailable { .. }));
    }

    #[test]
    fn invalid_size_fails_before_touching_surface() {
        let mut s = Counting::default();
        let err = calculate_width_of_characters(&mut s, &['x'], "F", 0.0).unwrap_err();
        assert_eq!(err, BreakError::InvalidFontSize(0.0));
        assert_eq!(s.configured, 0);
    }

    #[test]
    fn missing_char_in_table_is_unavailable() {
        let mut s = TableSurface::new().with_family("T", WidthTable::from_pairs([('a', 1.0)]));
        let err = calculate_width_of_characters(&mut s, &['a', 'b'], "T", 1.0).unwrap_err();
        assert!(matches!(err, BreakError::MeasurementUnavailable { .. }));
    }
}
