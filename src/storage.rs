use crate::models::{CharWidthMap, Segment};
use anyhow::Result;
use csv::WriterBuilder;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn sorted(widths: &CharWidthMap) -> Vec<(char, f64)> {
    let mut rows: Vec<(char, f64)> = widths.iter().map(|(c, w)| (*c, *w)).collect();
    rows.sort_by_key(|(c, _)| *c);
    rows
}

/// Save a width map as CSV with header `char,codepoint,width`, ordered by code point.
pub fn save_widths_csv<P: AsRef<Path>>(widths: &CharWidthMap, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("char", "codepoint", "width"))?;
    for (ch, w) in sorted(widths) {
        wtr.serialize((ch.to_string(), format!("U+{:04X}", ch as u32), w))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Width map as a pretty JSON object keyed by character, ordered by code point.
pub fn widths_to_json(widths: &CharWidthMap) -> Result<String> {
    let ordered: BTreeMap<char, f64> = sorted(widths).into_iter().collect();
    Ok(serde_json::to_string_pretty(&ordered)?)
}

/// Save a width map as pretty JSON.
pub fn save_widths_json<P: AsRef<Path>>(widths: &CharWidthMap, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(widths_to_json(widths)?.as_bytes())?;
    Ok(())
}

/// Save segments as a pretty JSON array.
pub fn save_report_json<P: AsRef<Path>>(segments: &[Segment], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(segments)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
