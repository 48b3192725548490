use serde::{Deserialize, Serialize};

use crate::step::Value;

/// One event in a sorting trace.
///
/// Indices name logical positions in the array *as it stands when the step is
/// applied*; they are only stable across steps that do not restructure the
/// sequence (swaps and overwrites rewrite payloads in place).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SortStep {
    /// Pulse two elements under comparison.
    Compare { i: usize, j: usize },
    /// Exchange the payloads of two elements.
    Swap { i: usize, j: usize },
    /// Write `value` into the element at `index` (merge write-back,
    /// insertion placement).
    Overwrite { index: usize, value: Value },
    /// Move one payload a slot over, leaving a hole behind.
    Shift { from: usize, to: usize },
    /// Mark the key being inserted.
    Key { i: usize, value: Value },
    /// Color a subarray split: `[start, mid)` left half, `[mid, end)` right.
    Split { start: usize, mid: usize, end: usize },
    /// Mark the chosen pivot.
    Pivot { index: usize },
    /// Mark a pivot as finally placed.
    Done { index: usize },
}

impl SortStep {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SortStep::Compare { .. } => "compare",
            SortStep::Swap { .. } => "swap",
            SortStep::Overwrite { .. } => "overwrite",
            SortStep::Shift { .. } => "shift",
            SortStep::Key { .. } => "key",
            SortStep::Split { .. } => "split",
            SortStep::Pivot { .. } => "pivot",
            SortStep::Done { .. } => "done",
        }
    }
}
