//! Bracket table reference data
//!
//! A bracket maps a contiguous range of raw marks onto a contiguous range of
//! percentiles. The table is scanned in ascending order and the first bracket
//! containing a marks value wins, so a boundary shared by two neighbours
//! belongs to the lower one.

use crate::error::{CoreError, Result};
use crate::MAX_PERCENTILE;
use serde::{Deserialize, Serialize};

/// One `(marks range -> percentile range)` record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketEntry {
    /// Lowest marks covered (inclusive)
    pub min_marks: f64,

    /// Highest marks covered (inclusive)
    pub max_marks: f64,

    /// Percentile at `min_marks`
    pub min_percentile: f64,

    /// Percentile at `max_marks`
    pub max_percentile: f64,
}

impl BracketEntry {
    /// Create a new bracket entry
    pub const fn new(
        min_marks: f64,
        max_marks: f64,
        min_percentile: f64,
        max_percentile: f64,
    ) -> Self {
        Self {
            min_marks,
            max_marks,
            min_percentile,
            max_percentile,
        }
    }

    /// Whether `marks` falls inside this bracket (both ends inclusive)
    pub fn contains(&self, marks: f64) -> bool {
        marks >= self.min_marks && marks <= self.max_marks
    }

    /// A single-point bracket has no width to interpolate over
    pub fn is_degenerate(&self) -> bool {
        self.min_marks == self.max_marks
    }

    fn check(&self, index: usize) -> Result<()> {
        let invalid = |reason: &str| CoreError::InvalidBracket {
            index,
            reason: reason.to_string(),
        };

        let values = [
            self.min_marks,
            self.max_marks,
            self.min_percentile,
            self.max_percentile,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("bounds must be finite numbers"));
        }
        if self.min_marks > self.max_marks {
            return Err(invalid("min_marks > max_marks"));
        }
        if self.min_percentile > self.max_percentile {
            return Err(invalid("min_percentile > max_percentile"));
        }
        if self.min_percentile < 0.0 || self.max_percentile > MAX_PERCENTILE {
            return Err(invalid("percentiles must lie within [0, 100]"));
        }
        Ok(())
    }
}

/// An uncovered open interval of marks between `from` and `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarksGap {
    pub from: f64,
    pub to: f64,
}

/// Ordered, non-overlapping set of brackets
///
/// Serialized as a document with a single `brackets` list so tables can be
/// kept in YAML or JSON reference files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BracketTableDocument", into = "BracketTableDocument")]
pub struct BracketTable {
    entries: Vec<BracketEntry>,
}

#[derive(Serialize, Deserialize)]
struct BracketTableDocument {
    brackets: Vec<BracketEntry>,
}

impl TryFrom<BracketTableDocument> for BracketTable {
    type Error = CoreError;

    fn try_from(doc: BracketTableDocument) -> Result<Self> {
        Self::new(doc.brackets)
    }
}

impl From<BracketTable> for BracketTableDocument {
    fn from(table: BracketTable) -> Self {
        Self {
            brackets: table.entries,
        }
    }
}

impl BracketTable {
    /// Build a table, checking every entry and the ordering invariants
    ///
    /// Gaps are allowed here; use [`BracketTable::covers`] to check that a
    /// table spans a whole domain.
    pub fn new(entries: Vec<BracketEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CoreError::EmptyTable);
        }

        for (index, entry) in entries.iter().enumerate() {
            entry.check(index)?;
            if index == 0 {
                continue;
            }
            let prev = &entries[index - 1];
            if entry.min_marks < prev.min_marks {
                return Err(CoreError::UnsortedBrackets { index });
            }
            if entry.min_marks < prev.max_marks {
                return Err(CoreError::OverlappingBrackets { index });
            }
        }

        Ok(Self { entries })
    }

    /// Parse a table from a JSON document of the form `{"brackets": [...]}`
    pub fn from_json_str(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The brackets in scan order
    pub fn entries(&self) -> &[BracketEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First bracket containing `marks`, if any
    pub fn find(&self, marks: f64) -> Option<&BracketEntry> {
        self.entries.iter().find(|entry| entry.contains(marks))
    }

    /// Map raw marks to a percentile, see [`crate::interpolate`]
    pub fn interpolate(&self, marks: f64) -> f64 {
        crate::interpolate::interpolate(self, marks)
    }

    /// Sub-ranges of `[lo, hi]` not covered by any bracket
    pub fn gaps(&self, lo: f64, hi: f64) -> Vec<MarksGap> {
        let mut gaps = Vec::new();
        let mut cursor = lo;

        for entry in &self.entries {
            if cursor >= hi {
                break;
            }
            if entry.max_marks < cursor {
                continue;
            }
            if entry.min_marks > cursor {
                gaps.push(MarksGap {
                    from: cursor,
                    to: entry.min_marks.min(hi),
                });
            }
            cursor = cursor.max(entry.max_marks);
        }

        if cursor < hi {
            gaps.push(MarksGap { from: cursor, to: hi });
        }

        gaps
    }

    /// Whether every value in `[lo, hi]` falls inside some bracket
    pub fn covers(&self, lo: f64, hi: f64) -> bool {
        self.find(lo).is_some() && self.find(hi).is_some() && self.gaps(lo, hi).is_empty()
    }
}

/// Built-in marks-vs-percentile table for the 300-mark paper
const DEFAULT_BRACKETS: [BracketEntry; 20] = [
    BracketEntry::new(0.0, 10.0, 0.0, 8.0),
    BracketEntry::new(10.0, 20.0, 8.0, 22.0),
    BracketEntry::new(20.0, 30.0, 22.0, 38.0),
    BracketEntry::new(30.0, 40.0, 38.0, 52.0),
    BracketEntry::new(40.0, 50.0, 52.0, 64.0),
    BracketEntry::new(50.0, 60.0, 64.0, 74.0),
    BracketEntry::new(60.0, 70.0, 74.0, 81.0),
    BracketEntry::new(70.0, 80.0, 81.0, 86.0),
    BracketEntry::new(80.0, 90.0, 86.0, 89.5),
    BracketEntry::new(90.0, 100.0, 89.5, 92.0),
    BracketEntry::new(100.0, 120.0, 92.0, 94.0),
    BracketEntry::new(120.0, 140.0, 94.0, 95.2),
    BracketEntry::new(140.0, 160.0, 95.2, 96.0),
    BracketEntry::new(160.0, 180.0, 96.0, 96.5),
    BracketEntry::new(180.0, 190.0, 96.5, 97.5),
    BracketEntry::new(190.0, 200.0, 97.5, 98.2),
    BracketEntry::new(200.0, 220.0, 98.2, 99.0),
    BracketEntry::new(220.0, 240.0, 99.0, 99.5),
    BracketEntry::new(240.0, 270.0, 99.5, 99.9),
    BracketEntry::new(270.0, 300.0, 99.9, 100.0),
];

impl Default for BracketTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_BRACKETS.to_vec(),
        }
    }
}
