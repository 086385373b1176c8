use serde::{Deserialize, Serialize};

use crate::error::BreakError;
use crate::inserter::split_at_indices;
use crate::models::{CharWidthMap, Segment};
use crate::oracle::width_of;

/// Summary statistics over segment widths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Describe each segment `input` splits into at `indices`, with its accumulated width.
///
/// An empty trailing piece (last index on the final char, or empty input) is not reported.
pub fn segment_report(
    input: &str,
    indices: &[usize],
    widths: &CharWidthMap,
) -> Result<Vec<Segment>, BreakError> {
    let mut out = Vec::with_capacity(indices.len() + 1);
    let mut start = 0;
    for text in split_at_indices(input, indices)? {
        let len = text.chars().count();
        if len == 0 {
            continue;
        }
        let width = text
            .chars()
            .map(|ch| width_of(widths, ch))
            .sum::<Result<f64, _>>()?;
        out.push(Segment {
            start,
            end: start + len - 1,
            text,
            width,
        });
        start += len;
    }
    Ok(out)
}

/// Compute min, max, mean and median segment width.
pub fn summarize(segments: &[Segment]) -> ReportSummary {
    let mut vals: Vec<f64> = segments.iter().map(|s| s.width).collect();
    vals.sort_by(f64::total_cmp);
    let count = vals.len();
    let min = vals.first().cloned();
    let max = vals.last().cloned();
    let mean = if count > 0 {
        Some(vals.iter().copied().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    ReportSummary {
        count,
        min,
        max,
        mean,
        median,
    }
}
