//! The step schema: per-structure vocabularies of mutation and highlight
//! events, plus the trace envelope that pairs them with an authoritative
//! final state.

pub mod ds;
pub mod sort;
pub mod trace;
pub mod value;

pub use ds::{ListStep, QueueStep, StackStep};
pub use sort::SortStep;
pub use trace::{decode_trace, DecodeError, Trace};
pub use value::Value;
