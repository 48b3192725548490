//! Step vocabularies for the three session structures.
//!
//! Wire shapes mirror the producer output: structural steps may carry the
//! moved value for display even where the consumer does not need it, and the
//! marker steps (`top`, `front`, `rear`) carry a null index once the
//! structure empties.

use serde::{Deserialize, Serialize};

use crate::step::Value;

/// One event in a stack trace. The logical top is the last element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StackStep {
    /// Pulse the element at `index`.
    Highlight { index: usize },
    /// Grow the stack by one element at the top.
    Append { value: Value },
    /// Remove the top element.
    Pop {
        #[serde(default)]
        value: Option<Value>,
    },
    /// Outline the current top; `None` when the stack just emptied.
    Top { index: Option<usize> },
    /// Nothing to do; `reason` is surfaced to the user.
    Noop { reason: String },
}

impl StackStep {
    pub fn kind_name(&self) -> &'static str {
        match self {
            StackStep::Highlight { .. } => "highlight",
            StackStep::Append { .. } => "append",
            StackStep::Pop { .. } => "pop",
            StackStep::Top { .. } => "top",
            StackStep::Noop { .. } => "noop",
        }
    }
}

/// One event in a queue trace. The front stays at logical position 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueueStep {
    /// Outline the front element; `None` when the queue is empty.
    Front { index: Option<usize> },
    /// Outline the rear element; `None` when the queue is empty.
    Rear { index: Option<usize> },
    /// Pulse the element at `index`.
    Highlight { index: usize },
    /// Grow the queue by one element at the rear.
    Append { value: Value },
    /// Remove the front element.
    PopLeft {
        #[serde(default)]
        value: Option<Value>,
    },
    /// Nothing to do; `reason` is surfaced to the user.
    Noop { reason: String },
}

impl QueueStep {
    pub fn kind_name(&self) -> &'static str {
        match self {
            QueueStep::Front { .. } => "front",
            QueueStep::Rear { .. } => "rear",
            QueueStep::Highlight { .. } => "highlight",
            QueueStep::Append { .. } => "append",
            QueueStep::PopLeft { .. } => "popleft",
            QueueStep::Noop { .. } => "noop",
        }
    }
}

/// One event in a linked-list trace. `index` is the logical position in the
/// node sequence (0 = head), independent of the alternating visual layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListStep {
    Insert { index: usize, value: Value },
    Delete { index: usize, value: Value },
    /// Nothing to do; `reason` is surfaced to the user.
    Noop { reason: String },
}

impl ListStep {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ListStep::Insert { .. } => "insert",
            ListStep::Delete { .. } => "delete",
            ListStep::Noop { .. } => "noop",
        }
    }
}
