//! Session-scoped collection state.
//!
//! One authoritative value sequence per structure kind, owned by the
//! application and handed to the replay engine as shared handles. The
//! sequences change in exactly two ways: a manual wholesale replacement, or
//! the reconciliation pass of a completed replay.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::replay::{shared, Shared};
use crate::step::Value;

/// Which of the four structures an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureKind {
    Array,
    Stack,
    Queue,
    LinkedList,
}

impl StructureKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::LinkedList => "Linked List",
        }
    }
}

/// Per-kind collection state for one session.
pub struct SessionState {
    array: Shared<Vec<Value>>,
    stack: Shared<Vec<Value>>,
    queue: Shared<Vec<Value>>,
    linked: Shared<Vec<Value>>,
}

impl SessionState {
    /// Seed the session: a random array (the sort playground regenerates
    /// freely), and the configured literals for the persistent structures.
    pub fn seeded(config: &Config) -> Self {
        Self {
            array: shared(random_array(config.seed_size)),
            stack: shared(ints(&config.stack_seed)),
            queue: shared(ints(&config.queue_seed)),
            linked: shared(ints(&config.linked_seed)),
        }
    }

    /// The shared handle a replay mutates through reconciliation.
    pub fn handle(&self, kind: StructureKind) -> Shared<Vec<Value>> {
        match kind {
            StructureKind::Array => self.array.clone(),
            StructureKind::Stack => self.stack.clone(),
            StructureKind::Queue => self.queue.clone(),
            StructureKind::LinkedList => self.linked.clone(),
        }
    }

    pub fn snapshot(&self, kind: StructureKind) -> Vec<Value> {
        self.handle(kind).lock().clone()
    }

    /// Manual wholesale replacement (typed input, file load, re-seed).
    /// Callers must not invoke this while a replay over `kind` is running.
    pub fn replace(&self, kind: StructureKind, values: Vec<Value>) {
        *self.handle(kind).lock() = values;
    }

    pub fn reseed_array(&self, size: usize) {
        self.replace(StructureKind::Array, random_array(size));
    }
}

fn random_array(size: usize) -> Vec<Value> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| Value::Int(rng.random_range(1..=100)))
        .collect()
}

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_respects_the_configured_sizes() {
        let config = Config::default();
        let session = SessionState::seeded(&config);

        assert_eq!(
            session.snapshot(StructureKind::Array).len(),
            config.seed_size
        );
        assert_eq!(
            session.snapshot(StructureKind::Stack),
            config
                .stack_seed
                .iter()
                .copied()
                .map(Value::Int)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn seeded_array_values_stay_in_range() {
        let session = SessionState::seeded(&Config::default());
        for value in session.snapshot(StructureKind::Array) {
            let n = value.as_number().unwrap();
            assert!((1.0..=100.0).contains(&n));
        }
    }

    #[test]
    fn replace_is_wholesale() {
        let session = SessionState::seeded(&Config::default());
        session.replace(StructureKind::Queue, vec![Value::Int(42)]);
        assert_eq!(session.snapshot(StructureKind::Queue), vec![Value::Int(42)]);
    }
}
