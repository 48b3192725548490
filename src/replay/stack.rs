//! Sequencer for stack traces.

use crate::replay::{Phase, Replayer, ReplayReport, Shared};
use crate::step::{StackStep, Trace, Value};
use crate::view::{theme, StackView, StructureView};

impl Replayer {
    /// Replay one stack trace. Structural steps only ever touch the logical
    /// top (the last element); `noop` pauses and reports but never mutates.
    pub async fn stack(
        &self,
        view: &Shared<StackView>,
        state: &Shared<Vec<Value>>,
        trace: &Trace<StackStep>,
    ) -> ReplayReport {
        let mut report = ReplayReport::default();
        let mut phase = Phase::Running;
        tracing::debug!(?phase, steps = trace.len(), "stack replay");

        for step in &trace.steps {
            match step {
                StackStep::Highlight { index } => {
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
                    self.pause(self.timing.frac(0.8)).await;
                    if let Some(cell) = view.lock().element_at_mut(*index) {
                        cell.fill = theme::NORMAL;
                    }
                    report.applied_step(format!("highlight {index}"));
                }

                StackStep::Append { value } => {
                    {
                        let mut v = view.lock();
                        let cell = v.push_cell(value.clone());
                        cell.lift = -12;
                        cell.opacity = 0.0;
                    }
                    self.pause(self.timing.entrance()).await;
                    {
                        let mut v = view.lock();
                        if let Some(cell) = v.top_mut() {
                            cell.opacity = 1.0;
                            cell.lift = 0;
                            cell.fill = theme::MERGE_WRITE;
                        }
                    }
                    self.pause(self.timing.frac(0.8)).await;
                    if let Some(cell) = view.lock().top_mut() {
                        cell.fill = theme::NORMAL;
                    }
                    report.applied_step(format!("append {value}"));
                }

                StackStep::Pop { .. } => {
                    let resolved = {
                        let mut v = view.lock();
                        match v.top_mut() {
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
                    self.pause(self.timing.frac(0.6)).await;
                    {
                        let mut v = view.lock();
                        if let Some(cell) = v.top_mut() {
                            cell.opacity = 0.0;
                            cell.lift = -10;
                        }
                    }
                    self.pause(self.timing.frac(0.6)).await;
                    view.lock().remove_top();
                    report.applied_step("pop");
                }

                StackStep::Top { index } => {
                    let Some(index) = index else {
                        // the stack just emptied; nothing to outline
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
                    self.pause(self.timing.frac(0.8)).await;
                    if let Some(cell) = view.lock().element_at_mut(*index) {
                        cell.outlined = false;
                    }
                    report.applied_step(format!("top {index}"));
                }

                StackStep::Noop { reason } => {
                    self.report(format!("Stack is {reason} — nothing to pop."));
                    self.pause(self.timing.frac(0.8)).await;
                    report.applied_step("noop");
                }
            }
        }

        phase = Phase::Reconciling;
        tracing::debug!(?phase, "stack replay");
        self.reconcile(view, state, &trace.new_state);
        report
    }
}
