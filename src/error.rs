use thiserror::Error;

/// Errors raised by the measurement and segmentation pipeline.
///
/// Every failure aborts the current operation; no partial width map, index list or
/// output string is ever returned alongside an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BreakError {
    /// The surface could not resolve the font or could not measure a character.
    #[error("measurement unavailable: {reason}")]
    MeasurementUnavailable { reason: String },

    /// Threshold was negative, NaN or infinite.
    #[error("invalid threshold width {0}: must be finite and non-negative")]
    InvalidThreshold(f64),

    /// Font size was zero, negative, NaN or infinite.
    #[error("invalid font size {0}px: must be finite and positive")]
    InvalidFontSize(f64),

    /// An insertion index points past the last character.
    #[error("index {index} out of range for text of {len} characters")]
    IndexOutOfRange { index: usize, len: usize },

    /// Insertion indices went backwards.
    #[error("index {index} follows {previous}; indices must be non-decreasing")]
    UnorderedIndices { previous: usize, index: usize },

    /// A font file could not be read or parsed.
    #[error("failed to load font {origin}: {reason}")]
    FontLoad { origin: String, reason: String },
}

impl BreakError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        BreakError::MeasurementUnavailable {
            reason: reason.into(),
        }
    }
}
