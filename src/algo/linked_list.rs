//! Linked-list trace producers.
//!
//! Indices arrive signed and possibly out of range; both operations clamp
//! into the valid range rather than rejecting. Leniency here is deliberate:
//! the replay side reconciles against the final state regardless.

use crate::step::{ListStep, Trace, Value};

/// Insert `value` at `index`, clamped into `[0, len]`.
pub fn insert_at(state: &[Value], index: i64, value: Value) -> Trace<ListStep> {
    let mut list = state.to_vec();
    let index = index.clamp(0, list.len() as i64) as usize;

    list.insert(index, value.clone());

    Trace::new(vec![ListStep::Insert { index, value }], list)
}

/// Delete the node at `index`, clamped into `[0, len - 1]`; on an empty
/// list this is a `noop` with a reason.
pub fn delete_at(state: &[Value], index: i64) -> Trace<ListStep> {
    let mut list = state.to_vec();

    if list.is_empty() {
        return Trace::new(
            vec![ListStep::Noop {
                reason: "empty".to_string(),
            }],
            list,
        );
    }

    let index = index.clamp(0, list.len() as i64 - 1) as usize;
    let value = list.remove(index);

    Trace::new(vec![ListStep::Delete { index, value }], list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn delete_on_empty_is_a_noop() {
        let trace = delete_at(&[], 0);
        assert_eq!(
            trace.steps,
            vec![ListStep::Noop {
                reason: "empty".to_string()
            }]
        );
        assert!(trace.new_state.is_empty());
    }

    #[test]
    fn delete_last_remaining_node() {
        let trace = delete_at(&ints(&[99]), 0);
        assert_eq!(
            trace.steps,
            vec![ListStep::Delete {
                index: 0,
                value: Value::Int(99)
            }]
        );
        assert!(trace.new_state.is_empty());
    }

    #[test]
    fn delete_middle_names_the_removed_value() {
        let trace = delete_at(&ints(&[10, 20, 30, 40]), 2);
        assert_eq!(
            trace.steps,
            vec![ListStep::Delete {
                index: 2,
                value: Value::Int(30)
            }]
        );
        assert_eq!(trace.new_state, ints(&[10, 20, 40]));
    }

    #[test]
    fn out_of_range_delete_clamps_to_the_tail() {
        let trace = delete_at(&ints(&[1, 2, 3]), 999);
        assert_eq!(
            trace.steps,
            vec![ListStep::Delete {
                index: 2,
                value: Value::Int(3)
            }]
        );
        assert_eq!(trace.new_state, ints(&[1, 2]));
    }

    #[test]
    fn insert_into_empty_list() {
        let trace = insert_at(&[], 0, Value::Text("A".into()));
        assert_eq!(trace.new_state, vec![Value::Text("A".into())]);
    }

    #[test]
    fn negative_insert_index_clamps_to_the_head() {
        let trace = insert_at(&ints(&[1, 2, 3]), -5, Value::Int(0));
        assert_eq!(
            trace.steps,
            vec![ListStep::Insert {
                index: 0,
                value: Value::Int(0)
            }]
        );
        assert_eq!(trace.new_state, ints(&[0, 1, 2, 3]));
    }

    #[test]
    fn oversized_insert_index_clamps_to_append() {
        let trace = insert_at(&ints(&[1, 2, 3]), 999, Value::Int(4));
        assert_eq!(
            trace.steps,
            vec![ListStep::Insert {
                index: 3,
                value: Value::Int(4)
            }]
        );
        assert_eq!(trace.new_state, ints(&[1, 2, 3, 4]));
    }

    #[test]
    fn sequential_insert_then_delete_balances_out() {
        let s0 = ints(&[1, 3]);
        let t1 = insert_at(&s0, 1, Value::Int(2));
        assert_eq!(t1.new_state, ints(&[1, 2, 3]));

        let t2 = delete_at(&t1.new_state, 0);
        assert_eq!(t2.new_state, ints(&[2, 3]));
        assert_eq!(s0.len(), t2.new_state.len());
    }
}
