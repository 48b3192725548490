//! Queue trace producers. The front stays at logical position 0.

use crate::step::{QueueStep, Trace, Value};

/// Enqueue at the rear, pulsing the current front and rear markers first
/// when the queue is non-empty, and re-marking both afterwards.
pub fn enqueue(state: &[Value], value: Value) -> Trace<QueueStep> {
    let mut q = state.to_vec();
    let mut steps = Vec::new();

    if !q.is_empty() {
        steps.push(QueueStep::Front { index: Some(0) });
        steps.push(QueueStep::Rear {
            index: Some(q.len() - 1),
        });
    }

    q.push(value.clone());
    steps.push(QueueStep::Append { value });
    steps.push(QueueStep::Front { index: Some(0) });
    steps.push(QueueStep::Rear {
        index: Some(q.len() - 1),
    });

    Trace::new(steps, q)
}

/// Dequeue from the front; on an empty queue this is a `noop` with a
/// reason. After an emptying dequeue the markers carry null indices.
pub fn dequeue(state: &[Value]) -> Trace<QueueStep> {
    let mut q = state.to_vec();

    if q.is_empty() {
        return Trace::new(
            vec![QueueStep::Noop {
                reason: "empty".to_string(),
            }],
            q,
        );
    }

    let mut steps = vec![
        QueueStep::Front { index: Some(0) },
        QueueStep::Highlight { index: 0 },
    ];
    let value = q.remove(0);
    steps.push(QueueStep::PopLeft { value: Some(value) });

    if q.is_empty() {
        steps.push(QueueStep::Front { index: None });
        steps.push(QueueStep::Rear { index: None });
    } else {
        steps.push(QueueStep::Front { index: Some(0) });
        steps.push(QueueStep::Rear {
            index: Some(q.len() - 1),
        });
    }

    Trace::new(steps, q)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_trace(initial: &[Value], steps: &[QueueStep]) -> Vec<Value> {
        let mut q = initial.to_vec();
        for step in steps {
            match step {
                QueueStep::Append { value } => q.push(value.clone()),
                QueueStep::PopLeft { .. } => {
                    if !q.is_empty() {
                        q.remove(0);
                    }
                }
                _ => {}
            }
        }
        q
    }

    #[test]
    fn dequeue_on_empty_is_a_noop() {
        let trace = dequeue(&[]);
        assert_eq!(
            trace.steps,
            vec![QueueStep::Noop {
                reason: "empty".to_string()
            }]
        );
        assert!(trace.new_state.is_empty());
    }

    #[test]
    fn enqueue_trace_replays_to_its_final_state() {
        for initial in [vec![], vec![Value::Int(1), Value::Int(2)]] {
            let trace = enqueue(&initial, Value::Int(9));
            assert_eq!(apply_trace(&initial, &trace.steps), trace.new_state);
        }
    }

    #[test]
    fn dequeue_removes_exactly_the_front() {
        let trace = dequeue(&[Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(trace.new_state, vec![Value::Int(2), Value::Int(3)]);
        assert!(trace
            .steps
            .contains(&QueueStep::PopLeft { value: Some(Value::Int(1)) }));
    }

    #[test]
    fn emptying_dequeue_nulls_both_markers() {
        let trace = dequeue(&[Value::Int(7)]);
        let tail: Vec<&QueueStep> = trace.steps.iter().rev().take(2).collect();
        assert_eq!(tail[1], &QueueStep::Front { index: None });
        assert_eq!(tail[0], &QueueStep::Rear { index: None });
    }
}
