//! Reconciliation: the unconditional rebuild that ends every replay.
//!
//! Step replay is best-effort: indices may be clamped, stale steps skipped,
//! pulses approximated. None of that is allowed to survive: once the last
//! step has run, the view is discarded wholesale and rebuilt from the final
//! state, and the collection state is replaced to match. The view can
//! therefore never *remain* inconsistent with the authoritative sequence.

use crate::replay::{Replayer, Shared};
use crate::step::Value;
use crate::view::StructureView;

impl Replayer {
    pub(crate) fn reconcile<V: StructureView>(
        &self,
        view: &Shared<V>,
        state: &Shared<Vec<Value>>,
        final_state: &[Value],
    ) {
        tracing::debug!(len = final_state.len(), "rebuilding view from final state");
        view.lock().render(final_state);
        *state.lock() = final_state.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::replay::{shared, NullStatus, Replayer};
    use crate::step::Value;
    use crate::view::{LinkedView, StructureView};

    #[test]
    fn reconcile_overrules_whatever_the_view_held() {
        let replayer = Replayer::instant(Arc::new(NullStatus));
        let view = shared(LinkedView::new(&[Value::Int(1)]));
        let state = shared(vec![Value::Int(1)]);
        let truth = vec![Value::Int(9), Value::Int(8)];

        replayer.reconcile(&view, &state, &truth);

        assert_eq!(view.lock().values(), truth);
        assert_eq!(*state.lock(), truth);
    }
}
