use pxbreak::models::Segment;
use pxbreak::{CharWidthMap, storage};
use std::fs;

#[test]
fn save_widths_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let widths: CharWidthMap = [('é', 7.5), (' ', 3.0), ('A', 9.25)].into_iter().collect();

    let csv_path = dir.path().join("widths.csv");
    storage::save_widths_csv(&widths, &csv_path).unwrap();
    let mut rdr = csv::Reader::from_path(&csv_path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["char", "codepoint", "width"]);
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], " ");
    assert_eq!(&rows[2][1], "U+00E9");

    let json_path = dir.path().join("widths.json");
    storage::save_widths_json(&widths, &json_path).unwrap();
    let json_txt = fs::read_to_string(&json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json_txt).unwrap();
    assert_eq!(v["é"], 7.5);
    assert_eq!(v["A"], 9.25);
}

#[test]
fn save_report_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let segments = vec![
        Segment {
            start: 0,
            end: 2,
            text: "abc".into(),
            width: 18.0,
        },
        Segment {
            start: 3,
            end: 3,
            text: "d".into(),
            width: 6.0,
        },
    ];
    storage::save_report_json(&segments, &path).unwrap();
    let back: Vec<Segment> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, segments);
}
