//! Sequencer for sorting traces.

use crate::replay::{Phase, Replayer, ReplayReport, Shared};
use crate::step::{SortStep, Trace, Value};
use crate::view::{theme, ArrayView, StructureView};

impl Replayer {
    /// Replay one sorting trace against the array view.
    ///
    /// Steps address the array as it stands when they are applied; handles
    /// never move, so swaps and shifts rewrite payloads between slots. A
    /// step naming a position with no handle is dropped and counted, never
    /// fatal; the closing reconciliation squares everything away.
    pub async fn sort(
        &self,
        view: &Shared<ArrayView>,
        state: &Shared<Vec<Value>>,
        trace: &Trace<SortStep>,
    ) -> ReplayReport {
        let mut report = ReplayReport::default();
        let total = trace.len();
        let mut phase = Phase::Running;
        tracing::debug!(?phase, steps = total, "sort replay");

        for (num, step) in trace.steps.iter().enumerate() {
            let n = num + 1;
            match step {
                SortStep::Compare { i, j } => {
                    let resolved = {
                        let mut v = view.lock();
                        if v.element_at(*i).is_none() || v.element_at(*j).is_none() {
                            false
                        } else {
                            v.set_fill(*i, theme::HIGHLIGHT);
                            v.set_fill(*j, theme::HIGHLIGHT);
                            true
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!("Step {n}/{total}: comparing index {i} and {j}"));
                    self.pause(self.timing.full()).await;
                    {
                        let mut v = view.lock();
                        v.set_fill(*i, theme::NORMAL);
                        v.set_fill(*j, theme::NORMAL);
                    }
                    self.pause(self.timing.settle()).await;
                    report.applied_step(format!("compare {i},{j}"));
                }

                SortStep::Swap { i, j } => {
                    let resolved = {
                        let mut v = view.lock();
                        if v.element_at(*i).is_none() || v.element_at(*j).is_none() {
                            false
                        } else {
                            v.set_fill(*i, theme::HIGHLIGHT);
                            v.set_fill(*j, theme::HIGHLIGHT);
                            true
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!("Step {n}/{total}: swapping index {i} ↔ {j}"));
                    self.pause(self.timing.full()).await;
                    {
                        let mut v = view.lock();
                        v.swap_payload(*i, *j);
                        v.set_fill(*i, theme::NORMAL);
                        v.set_fill(*j, theme::NORMAL);
                    }
                    self.pause(self.timing.settle()).await;
                    report.applied_step(format!("swap {i},{j}"));
                }

                SortStep::Overwrite { index, value } => {
                    let resolved = {
                        let mut v = view.lock();
                        match v.element_at_mut(*index) {
                            Some(cell) => {
                                cell.set_value(value.clone());
                                cell.fill = theme::MERGE_WRITE;
                                true
                            }
                            None => false,
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!(
                        "Step {n}/{total}: writing {value} into position {index}"
                    ));
                    self.pause(self.timing.frac(0.9)).await;
                    view.lock().set_fill(*index, theme::NORMAL);
                    report.applied_step(format!("overwrite {index}"));
                }

                SortStep::Shift { from, to } => {
                    let resolved = {
                        let mut v = view.lock();
                        let moved = v.element_at(*from).map(|c| c.value.clone());
                        match moved {
                            Some(value) if v.element_at(*to).is_some() => {
                                if let Some(cell) = v.element_at_mut(*to) {
                                    cell.set_value(value);
                                }
                                if let Some(cell) = v.element_at_mut(*from) {
                                    cell.clear_payload();
                                }
                                true
                            }
                            _ => false,
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!(
                        "Step {n}/{total}: shifting element from {from} → {to}"
                    ));
                    self.pause(self.timing.full()).await;
                    report.applied_step(format!("shift {from}->{to}"));
                }

                SortStep::Key { i, value } => {
                    let resolved = {
                        let mut v = view.lock();
                        if v.element_at(*i).is_none() {
                            false
                        } else {
                            v.set_fill(*i, theme::KEY);
                            true
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!(
                        "Step {n}/{total}: inserting value {value} (key at index {i})"
                    ));
                    self.pause(self.timing.frac(1.5)).await;
                    report.applied_step(format!("key {i}"));
                }

                SortStep::Split { start, mid, end } => {
                    let resolved = {
                        let mut v = view.lock();
                        if *start >= v.len() {
                            false
                        } else {
                            v.fill_range(*start, *mid, theme::MERGE_LEFT);
                            v.fill_range(*mid, *end, theme::MERGE_RIGHT);
                            true
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!("Step {n}/{total}: splitting subarray"));
                    self.pause(self.timing.frac(1.3)).await;
                    view.lock().fill_range(*start, *end, theme::NORMAL);
                    report.applied_step(format!("split {start}..{mid}..{end}"));
                }

                SortStep::Pivot { index } => {
                    let resolved = {
                        let mut v = view.lock();
                        if v.element_at(*index).is_none() {
                            false
                        } else {
                            v.set_fill(*index, theme::PIVOT);
                            true
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!(
                        "Step {n}/{total}: selecting pivot at index {index}"
                    ));
                    self.pause(self.timing.frac(1.2)).await;
                    report.applied_step(format!("pivot {index}"));
                }

                SortStep::Done { index } => {
                    let resolved = {
                        let mut v = view.lock();
                        if v.element_at(*index).is_none() {
                            false
                        } else {
                            v.set_fill(*index, theme::KEY);
                            true
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.report(format!(
                        "Step {n}/{total}: pivot placed at index {index}"
                    ));
                    self.pause(self.timing.full()).await;
                    report.applied_step(format!("done {index}"));
                }
            }
        }

        // closing wash over the whole array before truth takes over
        view.lock().fill_all(theme::FINAL);
        self.pause(self.timing.finale()).await;
        self.report("Sorting complete!");

        phase = Phase::Reconciling;
        tracing::debug!(?phase, "sort replay");
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
    async fn steps_apply_in_input_order() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(ArrayView::new(&ints(&[3, 1, 2])));
        let state = shared(ints(&[3, 1, 2]));
        let trace = Trace::new(
            vec![
                SortStep::Compare { i: 0, j: 1 },
                SortStep::Swap { i: 0, j: 1 },
                SortStep::Compare { i: 1, j: 2 },
                SortStep::Swap { i: 1, j: 2 },
            ],
            ints(&[1, 2, 3]),
        );

        let report = replayer.sort(&view, &state, &trace).await;

        assert_eq!(
            report.applied,
            vec!["compare 0,1", "swap 0,1", "compare 1,2", "swap 1,2"]
        );
        assert_eq!(report.skipped, 0);
    }

    #[tokio::test]
    async fn stale_indices_skip_without_failing() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(ArrayView::new(&ints(&[5, 6])));
        let state = shared(ints(&[5, 6]));
        let trace = Trace::new(
            vec![
                SortStep::Compare { i: 0, j: 9 },
                SortStep::Swap { i: 0, j: 1 },
                SortStep::Overwrite {
                    index: 42,
                    value: Value::Int(1),
                },
            ],
            ints(&[6, 5]),
        );

        let report = replayer.sort(&view, &state, &trace).await;

        assert_eq!(report.applied, vec!["swap 0,1"]);
        assert_eq!(report.skipped, 2);
        assert_eq!(view.lock().values(), ints(&[6, 5]));
    }

    #[tokio::test]
    async fn view_always_ends_at_the_final_state() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(ArrayView::new(&ints(&[9, 9, 9])));
        let state = shared(ints(&[9, 9, 9]));
        // a trace whose steps bear no relation to truth
        let trace = Trace::new(
            vec![SortStep::Swap { i: 0, j: 2 }, SortStep::Pivot { index: 1 }],
            ints(&[1, 2, 3, 4]),
        );

        replayer.sort(&view, &state, &trace).await;

        assert_eq!(view.lock().values(), ints(&[1, 2, 3, 4]));
        assert_eq!(*state.lock(), ints(&[1, 2, 3, 4]));
    }

    #[tokio::test]
    async fn shift_leaves_a_hole_behind() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(ArrayView::new(&ints(&[7, 8])));
        let state = shared(ints(&[7, 8]));
        let trace = Trace::new(
            vec![SortStep::Shift { from: 0, to: 1 }],
            ints(&[7, 7]),
        );

        replayer.sort(&view, &state, &trace).await;
        // reconciliation rebuilt it; the hole only existed mid-replay
        assert_eq!(view.lock().values(), ints(&[7, 7]));
    }

    #[tokio::test]
    async fn step_counters_reach_the_status_sink() {
        let status = Arc::new(RecordingStatus::default());
        let replayer = Replayer::instant(status.clone());
        let view = shared(ArrayView::new(&ints(&[2, 1])));
        let state = shared(ints(&[2, 1]));
        let trace = Trace::new(vec![SortStep::Compare { i: 0, j: 1 }], ints(&[1, 2]));

        replayer.sort(&view, &state, &trace).await;

        let lines = status.lines();
        assert!(lines[0].starts_with("Step 1/1: comparing index 0 and 1"));
        assert_eq!(lines.last().map(String::as_str), Some("Sorting complete!"));
    }
}
