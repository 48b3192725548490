//! Sequencer for queue traces.

use crate::replay::{Phase, Replayer, ReplayReport, Shared};
use crate::step::{QueueStep, Trace, Value};
use crate::view::{theme, QueueView, StructureView};

impl Replayer {
    /// Replay one queue trace. Elements join at the rear and leave from the
    /// front; `front`/`rear` are pure marker pulses and never change shape.
    pub async fn queue(
        &self,
        view: &Shared<QueueView>,
        state: &Shared<Vec<Value>>,
        trace: &Trace<QueueStep>,
    ) -> ReplayReport {
        let mut report = ReplayReport::default();
        let mut phase = Phase::Running;
        tracing::debug!(?phase, steps = trace.len(), "queue replay");

        for step in &trace.steps {
            match step {
                QueueStep::Front { index } | QueueStep::Rear { index } => {
                    let Some(index) = index else {
                        // queue just emptied; nothing to outline
                        report.skipped_step();
                        continue;
                    };
                    let resolved = {
                        let mut v = view.lock();
                        match v.element_at_mut(*index) {
                            Some(cell) => {
                                cell.outlined = true;
                                true
                            }
                            None => false,
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.pause(self.timing.frac(0.6)).await;
                    if let Some(cell) = view.lock().element_at_mut(*index) {
                        cell.outlined = false;
                    }
                    self.pause(self.timing.entrance()).await;
                    report.applied_step(format!("{} {index}", step.kind_name()));
                }

                QueueStep::Highlight { index } => {
                    let resolved = {
                        let mut v = view.lock();
                        match v.element_at_mut(*index) {
                            Some(cell) => {
                                cell.fill = theme::HIGHLIGHT;
                                true
                            }
                            None => false,
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.pause(self.timing.frac(0.7)).await;
                    if let Some(cell) = view.lock().element_at_mut(*index) {
                        cell.fill = theme::NORMAL;
                    }
                    report.applied_step(format!("highlight {index}"));
                }

                QueueStep::Append { value } => {
                    {
                        let mut v = view.lock();
                        let cell = v.push_rear(value.clone());
                        cell.lift = -10;
                        cell.opacity = 0.0;
                    }
                    self.pause(self.timing.entrance()).await;
                    {
                        let mut v = view.lock();
                        let last = v.len().saturating_sub(1);
                        if let Some(cell) = v.element_at_mut(last) {
                            cell.opacity = 1.0;
                            cell.lift = 0;
                            cell.fill = theme::MERGE_WRITE;
                        }
                    }
                    self.pause(self.timing.frac(0.7)).await;
                    {
                        let mut v = view.lock();
                        let last = v.len().saturating_sub(1);
                        if let Some(cell) = v.element_at_mut(last) {
                            cell.fill = theme::NORMAL;
                        }
                    }
                    report.applied_step(format!("append {value}"));
                }

                QueueStep::PopLeft { .. } => {
                    let resolved = {
                        let mut v = view.lock();
                        match v.front_mut() {
                            Some(cell) => {
                                cell.fill = theme::HIGHLIGHT;
                                true
                            }
                            None => false,
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.pause(self.timing.frac(0.5)).await;
                    {
                        let mut v = view.lock();
                        if let Some(cell) = v.front_mut() {
                            cell.opacity = 0.0;
                            cell.lift = -10;
                        }
                    }
                    self.pause(self.timing.frac(0.5)).await;
                    view.lock().remove_front();
                    report.applied_step("popleft");
                }

                QueueStep::Noop { reason } => {
                    self.report(format!("Queue is {reason} — nothing to dequeue."));
                    self.pause(self.timing.frac(0.7)).await;
                    report.applied_step("noop");
                }
            }
        }

        phase = Phase::Reconciling;
        tracing::debug!(?phase, "queue replay");
        self.reconcile(view, state, &trace.new_state);
        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::replay::{shared, NullStatus, RecordingStatus};
    use crate::step::Trace;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[tokio::test]
    async fn popleft_advances_the_front() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(QueueView::new(&ints(&[1, 2, 3])));
        let state = shared(ints(&[1, 2, 3]));
        let trace = Trace::new(
            vec![QueueStep::PopLeft { value: Some(Value::Int(1)) }],
            ints(&[2, 3]),
        );

        replayer.queue(&view, &state, &trace).await;

        let values = view.lock().values();
        assert_eq!(values.first(), Some(&Value::Int(2)));
        assert_eq!(values, ints(&[2, 3]));
    }

    #[tokio::test]
    async fn marker_pulses_never_change_shape() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(QueueView::new(&ints(&[4, 5])));
        let state = shared(ints(&[4, 5]));
        let trace = Trace::new(
            vec![
                QueueStep::Front { index: Some(0) },
                QueueStep::Rear { index: Some(1) },
                QueueStep::Highlight { index: 0 },
            ],
            ints(&[4, 5]),
        );

        let report = replayer.queue(&view, &state, &trace).await;

        assert_eq!(view.lock().values(), ints(&[4, 5]));
        assert_eq!(report.applied, vec!["front 0", "rear 1", "highlight 0"]);
    }

    #[tokio::test]
    async fn enqueue_trace_lands_at_the_rear() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(QueueView::new(&ints(&[1])));
        let state = shared(ints(&[1]));
        let trace = Trace::new(
            vec![
                QueueStep::Front { index: Some(0) },
                QueueStep::Rear { index: Some(0) },
                QueueStep::Append { value: Value::Int(2) },
                QueueStep::Front { index: Some(0) },
                QueueStep::Rear { index: Some(1) },
            ],
            ints(&[1, 2]),
        );

        replayer.queue(&view, &state, &trace).await;

        assert_eq!(view.lock().values(), ints(&[1, 2]));
        assert_eq!(*state.lock(), ints(&[1, 2]));
    }

    #[tokio::test]
    async fn noop_on_empty_reports_and_preserves() {
        let status = Arc::new(RecordingStatus::default());
        let replayer = Replayer::instant(status.clone());
        let view = shared(QueueView::new(&[]));
        let state = shared(Vec::<Value>::new());
        let trace = Trace::new(
            vec![QueueStep::Noop { reason: "empty".into() }],
            vec![],
        );

        replayer.queue(&view, &state, &trace).await;

        assert!(view.lock().values().is_empty());
        assert_eq!(
            status.lines(),
            vec!["Queue is empty — nothing to dequeue.".to_string()]
        );
    }
}
