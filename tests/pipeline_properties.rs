use pxbreak::report::{segment_report, summarize};
use pxbreak::surface::{EstimateSurface, TableSurface, WidthTable};
use pxbreak::{
    FontDescriptor, break_text, break_text_detailed, get_break_indices, insert_chars_into_indices,
};

fn table() -> TableSurface {
    TableSurface::new().with_family(
        "Proportional",
        WidthTable::from_pairs([('i', 0.25), ('l', 0.25), ('m', 0.85), (' ', 0.3)])
            .with_fallback(0.55),
    )
}

const SAMPLES: &[&str] = &[
    "",
    "a",
    "lorem ipsum dolor sit amet",
    "mmmmmmmmmmiiiiiiiiii",
    "naïve café, 日本語のテキスト",
];

#[test]
fn empty_marker_round_trips_scanner_output() {
    let mut s = table();
    for input in SAMPLES {
        for threshold in [0.0, 10.0, 40.0, 1000.0] {
            let idx = get_break_indices(input, threshold, &mut s, "Proportional", 16.0).unwrap();
            assert_eq!(insert_chars_into_indices(input, &idx, "").unwrap(), *input);
        }
    }
}

#[test]
fn no_segment_overflows_without_ending_in_a_break() {
    let mut s = table();
    let font = FontDescriptor::new("Proportional", 16.0);
    let threshold = 50.0;
    for input in SAMPLES {
        let broken = break_text_detailed(input, threshold, &mut s, &font, "").unwrap();
        let segments = segment_report(input, &broken.indices, &broken.widths).unwrap();
        for seg in &segments {
            let is_break = broken.indices.contains(&seg.end);
            // A broken segment only overflows because of its last char.
            if is_break {
                let last = seg.text.chars().last().unwrap();
                assert!(seg.width > threshold);
                assert!(seg.width - broken.widths[&last] <= threshold + 1e-9);
            } else {
                assert!(seg.width <= threshold, "{seg:?}");
            }
        }
        let total: usize = segments.iter().map(|s| s.text.chars().count()).sum();
        assert_eq!(total, input.chars().count());
    }
}

#[test]
fn estimate_surface_wraps_every_few_chars() {
    // 20px * 0.6 = 12px per char; threshold 30 overflows on the third char.
    let mut s = EstimateSurface::default();
    let out = break_text("abcdefgh", 30.0, &mut s, &FontDescriptor::new("any", 20.0), "\n")
        .unwrap();
    assert_eq!(out, "abc\ndef\ngh");
}

#[test]
fn summary_reflects_segments() {
    let mut s = EstimateSurface::default();
    let font = FontDescriptor::new("any", 10.0);
    let broken = break_text_detailed("abcdefg", 13.0, &mut s, &font, "|").unwrap();
    assert_eq!(broken.output, "abc|def|g");
    let segments = segment_report("abcdefg", &broken.indices, &broken.widths).unwrap();
    let summary = summarize(&segments);
    assert_eq!(summary.count, 3);
    assert!((summary.max.unwrap() - 18.0).abs() < 1e-9);
    assert!((summary.min.unwrap() - 6.0).abs() < 1e-9);
}
