//! Stack trace producers. The logical top is the last element.

use crate::step::{StackStep, Trace, Value};

/// Push onto the top, highlighting the previous top first when there is one.
pub fn push(state: &[Value], value: Value) -> Trace<StackStep> {
    let mut s = state.to_vec();
    let mut steps = Vec::new();

    if !s.is_empty() {
        steps.push(StackStep::Highlight { index: s.len() - 1 });
    }

    s.push(value.clone());
    steps.push(StackStep::Append { value });
    steps.push(StackStep::Top {
        index: Some(s.len() - 1),
    });

    Trace::new(steps, s)
}

/// Pop the top; on an empty stack this is a `noop` with a reason, never an
/// error.
pub fn pop(state: &[Value]) -> Trace<StackStep> {
    let mut s = state.to_vec();

    if s.is_empty() {
        return Trace::new(
            vec![StackStep::Noop {
                reason: "empty".to_string(),
            }],
            s,
        );
    }

    let mut steps = vec![StackStep::Highlight { index: s.len() - 1 }];
    let value = s.pop();
    steps.push(StackStep::Pop { value });
    steps.push(StackStep::Top {
        index: s.len().checked_sub(1),
    });

    Trace::new(steps, s)
}
