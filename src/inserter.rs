//! Splice a marker after break indices, or split a string at them.

use crate::error::BreakError;

/// Byte offset of every char start, plus `input.len()` as a final sentinel.
fn char_bounds(input: &str) -> Vec<usize> {
    input
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(input.len()))
        .collect()
}

fn validate_indices(indices: &[usize], len: usize) -> Result<(), BreakError> {
    let mut previous: Option<usize> = None;
    for &index in indices {
        if index >= len {
            return Err(BreakError::IndexOutOfRange { index, len });
        }
        if let Some(previous) = previous
            && index < previous
        {
            return Err(BreakError::UnorderedIndices { previous, index });
        }
        previous = Some(index);
    }
    Ok(())
}

/// Byte ranges of the pieces `input` splits into after each index, tail last.
fn pieces(input: &str, indices: &[usize]) -> Result<Vec<(usize, usize)>, BreakError> {
    let bounds = char_bounds(input);
    validate_indices(indices, bounds.len() - 1)?;

    let mut out = Vec::with_capacity(indices.len() + 1);
    let mut from = 0;
    for &idx in indices {
        let to = bounds[idx + 1];
        out.push((from, to));
        from = to;
    }
    out.push((from, input.len()));
    Ok(out)
}

/// Insert `string_to_insert` immediately after each char index of `input`.
///
/// `indices` are char positions and must be non-decreasing; a repeated index inserts the
/// marker again at the same spot. Every original character is kept in order.
///
/// ### Errors
/// [`BreakError::IndexOutOfRange`] or [`BreakError::UnorderedIndices`]; nothing is built when
/// validation fails.
///
/// ### Example
/// ```
/// use pxbreak::inserter::insert_chars_into_indices;
///
/// assert_eq!(insert_chars_into_indices("hello", &[1, 3], "|")?, "he|ll|o");
/// assert_eq!(insert_chars_into_indices("hello", &[], "|")?, "hello");
/// # Ok::<(), pxbreak::BreakError>(())
/// ```
pub fn insert_chars_into_indices(
    input: &str,
    indices: &[usize],
    string_to_insert: &str,
) -> Result<String, BreakError> {
    let pieces = pieces(input, indices)?;
    let mut out = String::with_capacity(input.len() + indices.len() * string_to_insert.len());
    let last = pieces.len() - 1;
    for (n, (from, to)) in pieces.into_iter().enumerate() {
        out.push_str(&input[from..to]);
        if n < last {
            out.push_str(string_to_insert);
        }
    }
    Ok(out)
}

/// The pieces [`insert_chars_into_indices`] would separate.
///
/// Always returns `indices.len() + 1` strings; the last one is the (possibly empty) tail, so
/// joining the result with a marker equals inserting that marker.
pub fn split_at_indices(input: &str, indices: &[usize]) -> Result<Vec<String>, BreakError> {
    Ok(pieces(input, indices)?
        .into_iter()
        .map(|(from, to)| input[from..to].to_string())
        .collect())
}
