//! The JSON wire shapes: producer traces serialize to the documented
//! `{ steps, new_state }` envelope, and foreign envelopes decode leniently.

use algoscope::step::{decode_trace, QueueStep, SortStep, StackStep, Trace};
use algoscope::{LocalTraceSource, SortAlgorithm, StackAction, TraceSource, Value};
use serde_json::json;

#[tokio::test]
async fn producer_traces_round_through_the_envelope() {
    let source = LocalTraceSource;
    let trace = source
        .stack(&[Value::Int(1)], StackAction::Push(Value::Int(2)))
        .await
        .unwrap();

    let wire = serde_json::to_value(&trace).unwrap();
    assert!(wire.get("steps").is_some());
    assert!(wire.get("new_state").is_some());

    let decoded: Trace<StackStep> = decode_trace(&wire).unwrap();
    assert_eq!(decoded, trace);
}

#[tokio::test]
async fn sort_steps_carry_their_tag_on_the_wire() {
    let source = LocalTraceSource;
    let trace = source
        .sort(SortAlgorithm::Bubble, &[Value::Int(2), Value::Int(1)])
        .await
        .unwrap();

    let wire = serde_json::to_value(&trace.steps).unwrap();
    assert_eq!(wire[0]["type"], "compare");
    assert_eq!(wire[1]["type"], "swap");

    let back: Vec<SortStep> = serde_json::from_value(wire).unwrap();
    assert_eq!(back, trace.steps);
}

#[test]
fn a_racing_source_cannot_break_decoding() {
    // a best-effort envelope: one unknown tag, one extra field, null markers
    let wire = json!({
        "structure": "queue",
        "action": "dequeue",
        "steps": [
            {"type": "front", "index": 0},
            {"type": "shimmer", "amount": 3},
            {"type": "popleft", "value": 1, "duration_hint": 80},
            {"type": "front", "index": null},
            {"type": "rear", "index": null},
        ],
        "new_state": [2, 3],
    });

    let decoded: Trace<QueueStep> = decode_trace(&wire).unwrap();
    assert_eq!(decoded.steps.len(), 4, "unknown tag dropped, rest kept");
    assert_eq!(decoded.new_state, vec![Value::Int(2), Value::Int(3)]);
}
