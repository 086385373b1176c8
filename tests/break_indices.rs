use pxbreak::surface::{MeasurementSurface, TableSurface, WidthTable};
use pxbreak::{BreakError, get_break_indices};

fn surface(pairs: &[(char, f64)]) -> TableSurface {
    TableSurface::new().with_family("Test", WidthTable::from_pairs(pairs.iter().copied()))
}

/// Fails every configuration, like a rendering context that cannot resolve the font.
struct Unavailable;

impl MeasurementSurface for Unavailable {
    fn configure_font(&mut self, family: &str, _size_px: f64) -> Result<(), BreakError> {
        Err(BreakError::MeasurementUnavailable {
            reason: format!("{family} not installed"),
        })
    }

    fn measure_advance_width(&self, _ch: char) -> Result<f64, BreakError> {
        unreachable!("never configured")
    }
}

#[test]
fn five_wide_chars_break_once_at_twelve() {
    // Running sums 5, 10, 15 (break at 2, reset), 5, 10.
    let mut s = surface(&[('a', 5.0)]);
    assert_eq!(get_break_indices("aaaaa", 12.0, &mut s, "Test", 1.0).unwrap(), vec![2]);
}

#[test]
fn wide_char_breaks_at_its_own_index() {
    let mut s = surface(&[('a', 5.0), ('b', 100.0)]);
    assert_eq!(get_break_indices("aba", 50.0, &mut s, "Test", 1.0).unwrap(), vec![1]);
}

#[test]
fn zero_threshold_breaks_after_every_visible_char() {
    let mut s = surface(&[('x', 3.0), (' ', 0.0)]);
    assert_eq!(
        get_break_indices("x x", 0.0, &mut s, "Test", 1.0).unwrap(),
        vec![0, 2]
    );
}

#[test]
fn zero_width_text_never_breaks() {
    let mut s = surface(&[('\u{200B}', 0.0), ('\u{0301}', 0.0)]);
    let input = "\u{200B}\u{0301}\u{200B}\u{200B}";
    assert!(get_break_indices(input, 0.5, &mut s, "Test", 1.0).unwrap().is_empty());
}

#[test]
fn empty_input_has_no_breaks() {
    let mut s = surface(&[]);
    assert!(get_break_indices("", 10.0, &mut s, "Test", 16.0).unwrap().is_empty());
}

#[test]
fn indices_are_strictly_increasing_and_in_range() {
    let mut s = surface(&[('i', 0.3), ('m', 0.9), ('w', 1.1), (' ', 0.25)]);
    let input = "mim wim miw iiii mmmm wwww i m w";
    let len = input.chars().count();
    for threshold in [0.0, 0.5, 1.0, 2.0, 3.3, 7.0, 100.0] {
        let got = get_break_indices(input, threshold, &mut s, "Test", 1.0).unwrap();
        assert!(got.windows(2).all(|w| w[0] < w[1]), "{threshold}: {got:?}");
        assert!(got.iter().all(|&i| i < len), "{threshold}: {got:?}");
    }
}

#[test]
fn font_size_scales_table_widths() {
    // 0.5em at 10px is 5px per char.
    let mut s = surface(&[('a', 0.5)]);
    assert_eq!(get_break_indices("aaaaa", 12.0, &mut s, "Test", 10.0).unwrap(), vec![2]);
}

#[test]
fn invalid_threshold_is_reported_before_measuring() {
    let mut s = Unavailable;
    for t in [-0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            get_break_indices("abc", t, &mut s, "Test", 12.0),
            Err(BreakError::InvalidThreshold(_))
        ));
    }
}

#[test]
fn measurement_failure_propagates() {
    let mut s = Unavailable;
    let err = get_break_indices("abc", 10.0, &mut s, "Nope", 12.0).unwrap_err();
    assert!(
        matches!(err, BreakError::MeasurementUnavailable { reason } if reason.contains("Nope"))
    );
}

#[test]
fn unknown_family_in_table_is_unavailable() {
    let mut s = surface(&[('a', 1.0)]);
    assert!(matches!(
        get_break_indices("a", 10.0, &mut s, "Other", 12.0),
        Err(BreakError::MeasurementUnavailable { .. })
    ));
}
