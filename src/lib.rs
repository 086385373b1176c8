//! pxbreak
//!
//! Measure the advance width of each character under a font, find where a string's running
//! pixel width overflows a threshold, and splice a marker string in at those points. Pairs
//! with the `pxbreak` CLI.
//!
//! ### Features
//! - Per-character width maps through a [`surface::MeasurementSurface`] (font files via
//!   `ab_glyph`, JSON width tables, or a constant-ratio estimate)
//! - Greedy character-level break indices against a pixel threshold
//! - Marker insertion and splitting by char index, with bounds checking
//! - CSV/JSON export of width maps and segment reports
//!
//! Indices are always positions in `input.chars()`, never byte offsets.
//!
//! ### Example
//! ```
//! use pxbreak::surface::{TableSurface, WidthTable};
//! use pxbreak::{get_break_indices, insert_chars_into_indices};
//!
//! let mut surface = TableSurface::new()
//!     .with_family("Demo", WidthTable::from_pairs([('a', 5.0)]));
//! let breaks = get_break_indices("aaaaa", 12.0, &mut surface, "Demo", 1.0)?;
//! assert_eq!(breaks, vec![2]);
//! assert_eq!(insert_chars_into_indices("aaaaa", &breaks, "|")?, "aaa|aa");
//! # Ok::<(), pxbreak::BreakError>(())
//! ```

pub mod config;
pub mod error;
pub mod inserter;
pub mod models;
pub mod oracle;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod storage;
pub mod surface;

pub use error::BreakError;
pub use inserter::{insert_chars_into_indices, split_at_indices};
pub use models::{CharWidthMap, FontDescriptor, Segment};
pub use oracle::calculate_width_of_characters;
pub use pipeline::{break_text, break_text_detailed};
pub use scanner::get_break_indices;
