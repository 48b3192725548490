//! Sequencer for linked-list traces.
//!
//! Structural steps go through the view's logical-index operations; the
//! node/link slot arithmetic stays inside `LinkedView`.

use crate::replay::{Phase, Replayer, ReplayReport, Shared};
use crate::step::{ListStep, Trace, Value};
use crate::view::{theme, LinkedView, StructureView};

impl Replayer {
    /// Replay one linked-list trace. Insert and delete are applied to the
    /// view before the next step resolves, so later steps address the
    /// post-mutation node sequence.
    pub async fn linked(
        &self,
        view: &Shared<LinkedView>,
        state: &Shared<Vec<Value>>,
        trace: &Trace<ListStep>,
    ) -> ReplayReport {
        let mut report = ReplayReport::default();
        let mut phase = Phase::Running;
        tracing::debug!(?phase, steps = trace.len(), "linked-list replay");

        for step in &trace.steps {
            match step {
                ListStep::Insert { index, value } => {
                    let landed = {
                        let mut v = view.lock();
                        let landed = v.insert_node(*index, value.clone());
                        if let Some(node) = v.node_at_mut(landed) {
                            node.cell.opacity = 0.0;
                            node.cell.lift = -2;
                        }
                        landed
                    };
                    self.pause(self.timing.entrance()).await;
                    {
                        let mut v = view.lock();
                        if let Some(node) = v.node_at_mut(landed) {
                            node.cell.opacity = 1.0;
                            node.cell.lift = 0;
                            node.cell.fill = theme::MERGE_WRITE;
                        }
                    }
                    self.pause(self.timing.frac(0.9)).await;
                    // settle the entrance color, then re-mark the head in
                    // case the insert displaced it
                    view.lock().restyle_head();
                    report.applied_step(format!("insert {landed}"));
                }

                ListStep::Delete { index, .. } => {
                    let resolved = {
                        let mut v = view.lock();
                        if v.node_count() == 0 {
                            false
                        } else {
                            let clamped = (*index).min(v.node_count() - 1);
                            if let Some(node) = v.node_at_mut(clamped) {
                                node.cell.fill = theme::HIGHLIGHT;
                            }
                            true
                        }
                    };
                    if !resolved {
                        report.skipped_step();
                        continue;
                    }
                    self.pause(self.timing.frac(0.5)).await;
                    {
                        let mut v = view.lock();
                        let clamped = (*index).min(v.node_count().saturating_sub(1));
                        if let Some(node) = v.node_at_mut(clamped) {
                            node.cell.opacity = 0.0;
                            node.cell.lift = -2;
                        }
                    }
                    self.pause(self.timing.frac(0.6)).await;
                    view.lock().remove_node(*index);
                    report.applied_step(format!("delete {index}"));
                }

                ListStep::Noop { reason } => {
                    self.report(format!("Linked list is {reason} — nothing to delete."));
                    self.pause(self.timing.frac(0.7)).await;
                    report.applied_step("noop");
                }
            }
        }

        phase = Phase::Reconciling;
        tracing::debug!(?phase, "linked-list replay");
        self.reconcile(view, state, &trace.new_state);
        report
    }
}
