//! The stateless trace computation.
//!
//! Everything in here is a pure function of `(current state, action)`
//! returning a trace plus the authoritative final state. The engine only
//! sees the [`TraceSource`] boundary and treats the computation as an opaque
//! request/response pair; [`LocalTraceSource`] is the in-process
//! implementation.

pub mod linked_list;
pub mod queue;
pub mod sorting;
pub mod stack;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::step::{ListStep, QueueStep, SortStep, StackStep, Trace, Value};

/// Which sorting algorithm to run over the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }
}

/// One stack request.
#[derive(Debug, Clone)]
pub enum StackAction {
    Push(Value),
    Pop,
}

/// One queue request.
#[derive(Debug, Clone)]
pub enum QueueAction {
    Enqueue(Value),
    Dequeue,
}

/// One linked-list request. Indices are signed on the wire; producers clamp
/// them into range rather than rejecting.
#[derive(Debug, Clone)]
pub enum ListAction {
    InsertAt { index: i64, value: Value },
    DeleteAt { index: i64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("All elements in 'array' must be numbers.")]
    NonNumericArray,
}

/// The computation that turns a current state and an action into a trace
/// plus the final state. Implementations are stateless between calls.
#[async_trait]
pub trait TraceSource: Send + Sync {
    async fn sort(
        &self,
        algorithm: SortAlgorithm,
        array: &[Value],
    ) -> Result<Trace<SortStep>, SourceError>;

    async fn stack(
        &self,
        state: &[Value],
        action: StackAction,
    ) -> Result<Trace<StackStep>, SourceError>;

    async fn queue(
        &self,
        state: &[Value],
        action: QueueAction,
    ) -> Result<Trace<QueueStep>, SourceError>;

    async fn linked_list(
        &self,
        state: &[Value],
        action: ListAction,
    ) -> Result<Trace<ListStep>, SourceError>;
}

/// In-process trace computation.
pub struct LocalTraceSource;

#[async_trait]
impl TraceSource for LocalTraceSource {
    async fn sort(
        &self,
        algorithm: SortAlgorithm,
        array: &[Value],
    ) -> Result<Trace<SortStep>, SourceError> {
        if array.iter().any(|v| v.as_number().is_none()) {
            return Err(SourceError::NonNumericArray);
        }
        Ok(match algorithm {
            SortAlgorithm::Bubble => sorting::bubble_sort(array),
            SortAlgorithm::Insertion => sorting::insertion_sort(array),
            SortAlgorithm::Merge => sorting::merge_sort(array),
            SortAlgorithm::Quick => sorting::quick_sort(array),
        })
    }

    async fn stack(
        &self,
        state: &[Value],
        action: StackAction,
    ) -> Result<Trace<StackStep>, SourceError> {
        Ok(match action {
            StackAction::Push(value) => stack::push(state, value),
            StackAction::Pop => stack::pop(state),
        })
    }

    async fn queue(
        &self,
        state: &[Value],
        action: QueueAction,
    ) -> Result<Trace<QueueStep>, SourceError> {
        Ok(match action {
            QueueAction::Enqueue(value) => queue::enqueue(state, value),
            QueueAction::Dequeue => queue::dequeue(state),
        })
    }

    async fn linked_list(
        &self,
        state: &[Value],
        action: ListAction,
    ) -> Result<Trace<ListStep>, SourceError> {
        Ok(match action {
            ListAction::InsertAt { index, value } => linked_list::insert_at(state, index, value),
            ListAction::DeleteAt { index } => linked_list::delete_at(state, index),
        })
    }
}
