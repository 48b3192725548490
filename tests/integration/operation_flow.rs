//! Full operation flows: compute a trace, replay it against a view, and
//! check the view and collection state settle on the final state exactly.

use std::sync::Arc;

use algoscope::replay::{shared, NullStatus, RecordingStatus};
use algoscope::view::{ArrayView, LinkedView, QueueView, StackView, StructureView};
use algoscope::{
    ListAction, LocalTraceSource, QueueAction, Replayer, SortAlgorithm, StackAction, TraceSource,
    Value,
};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

#[tokio::test]
async fn sort_operation_settles_on_the_sorted_array() {
    let source = LocalTraceSource;
    let replayer = Replayer::instant(Arc::new(NullStatus));
    let initial = ints(&[38, 5, 91, 12, 67]);

    for algorithm in SortAlgorithm::ALL {
        let view = shared(ArrayView::new(&initial));
        let state = shared(initial.clone());

        let trace = source.sort(algorithm, &initial).await.unwrap();
        replayer.sort(&view, &state, &trace).await;

        assert_eq!(view.lock().values(), ints(&[5, 12, 38, 67, 91]));
        assert_eq!(*state.lock(), ints(&[5, 12, 38, 67, 91]));
    }
}

#[tokio::test]
async fn stack_push_appends_at_the_top() {
    let source = LocalTraceSource;
    let replayer = Replayer::instant(Arc::new(NullStatus));
    let initial = ints(&[3, 1, 4]);
    let view = shared(StackView::new(&initial));
    let state = shared(initial.clone());

    let trace = source
        .stack(&initial, StackAction::Push(Value::Int(9)))
        .await
        .unwrap();
    replayer.stack(&view, &state, &trace).await;

    let values = view.lock().values();
    assert_eq!(values.len(), 4);
    assert_eq!(values.last(), Some(&Value::Int(9)));
    assert_eq!(*state.lock(), ints(&[3, 1, 4, 9]));
}

#[tokio::test]
async fn stack_pop_on_empty_surfaces_a_reason_and_changes_nothing() {
    let source = LocalTraceSource;
    let status = Arc::new(RecordingStatus::default());
    let replayer = Replayer::instant(status.clone());
    let view = shared(StackView::new(&[]));
    let state = shared(Vec::<Value>::new());

    let trace = source.stack(&[], StackAction::Pop).await.unwrap();
    replayer.stack(&view, &state, &trace).await;

    assert!(view.lock().values().is_empty());
    assert!(state.lock().is_empty());
    assert!(status
        .lines()
        .iter()
        .any(|line| line.contains("nothing to pop")));
}

#[tokio::test]
async fn queue_dequeue_promotes_the_second_element() {
    let source = LocalTraceSource;
    let replayer = Replayer::instant(Arc::new(NullStatus));
    let initial = ints(&[1, 2, 3]);
    let view = shared(QueueView::new(&initial));
    let state = shared(initial.clone());

    let trace = source.queue(&initial, QueueAction::Dequeue).await.unwrap();
    replayer.queue(&view, &state, &trace).await;

    let values = view.lock().values();
    assert_eq!(values.first(), Some(&Value::Int(2)));
    assert_eq!(values, ints(&[2, 3]));
}

#[tokio::test]
async fn linked_insert_keeps_the_head_and_the_mapping() {
    let source = LocalTraceSource;
    let replayer = Replayer::instant(Arc::new(NullStatus));
    let initial = ints(&[5, 2, 8]);
    let view = shared(LinkedView::new(&initial));
    let state = shared(initial.clone());

    let trace = source
        .linked_list(
            &initial,
            ListAction::InsertAt {
                index: 1,
                value: Value::Int(7),
            },
        )
        .await
        .unwrap();
    replayer.linked(&view, &state, &trace).await;

    let v = view.lock();
    assert_eq!(v.values(), ints(&[5, 7, 2, 8]));
    assert_eq!(v.visual_position_of(1), 2);
    assert_eq!(v.element_at(1).map(|c| c.value.clone()), Some(Value::Int(7)));
    assert!(v.node_at(0).is_some_and(|n| n.head), "5 remains the head");
}

#[tokio::test]
async fn linked_delete_on_empty_is_a_noop_end_to_end() {
    let source = LocalTraceSource;
    let status = Arc::new(RecordingStatus::default());
    let replayer = Replayer::instant(status.clone());
    let view = shared(LinkedView::new(&[]));
    let state = shared(Vec::<Value>::new());

    let trace = source
        .linked_list(&[], ListAction::DeleteAt { index: 0 })
        .await
        .unwrap();
    replayer.linked(&view, &state, &trace).await;

    assert!(view.lock().values().is_empty());
    assert!(state.lock().is_empty());
    assert!(status
        .lines()
        .iter()
        .any(|line| line.contains("nothing to delete")));
}

#[tokio::test]
async fn successive_operations_compound_on_the_session_state() {
    let source = LocalTraceSource;
    let replayer = Replayer::instant(Arc::new(NullStatus));
    let view = shared(StackView::new(&[]));
    let state = shared(Vec::<Value>::new());

    for value in [10, 20, 30] {
        let snapshot = state.lock().clone();
        let trace = source
            .stack(&snapshot, StackAction::Push(Value::Int(value)))
            .await
            .unwrap();
        replayer.stack(&view, &state, &trace).await;
    }
    let snapshot = state.lock().clone();
    let trace = source.stack(&snapshot, StackAction::Pop).await.unwrap();
    replayer.stack(&view, &state, &trace).await;

    assert_eq!(*state.lock(), ints(&[10, 20]));
    assert_eq!(view.lock().values(), ints(&[10, 20]));
}
