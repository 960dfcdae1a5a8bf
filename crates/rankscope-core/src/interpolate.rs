//! Percentile interpolation from raw marks.
//!
//! Maps a marks value onto a percentile by linear interpolation inside the
//! first bracket of the table that contains it.

use crate::bracket::BracketTable;
use crate::MAX_PERCENTILE;

/// Interpolate a percentile for `marks` using `table`
///
/// Formula, for the first bracket with `min_marks <= marks <= max_marks`:
///
/// ```text
/// ratio      = (marks - min_marks) / (max_marks - min_marks)
/// percentile = min_percentile + ratio * (max_percentile - min_percentile)
/// ```
///
/// A single-point bracket returns its `min_percentile`. The result is clamped
/// to `[0, 100]`. Marks outside every bracket (including NaN) yield `0.0`;
/// callers that need strict range checks validate before calling.
///
/// # Example
/// ```
/// use rankscope_core::{interpolate, BracketEntry, BracketTable};
///
/// let table = BracketTable::new(vec![BracketEntry::new(180.0, 190.0, 96.5, 97.5)]).unwrap();
/// assert_eq!(interpolate(&table, 185.0), 97.0);
/// ```
pub fn interpolate(table: &BracketTable, marks: f64) -> f64 {
    let Some(entry) = table.find(marks) else {
        log::debug!("no bracket matches marks {}, falling back to 0", marks);
        return 0.0;
    };

    let percentile = if entry.is_degenerate() {
        entry.min_percentile
    } else {
        let ratio = (marks - entry.min_marks) / (entry.max_marks - entry.min_marks);
        entry.min_percentile + ratio * (entry.max_percentile - entry.min_percentile)
    };

    percentile.clamp(0.0, MAX_PERCENTILE)
}
