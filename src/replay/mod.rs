//! The trace replay engine: per-kind event sequencers, timed pacing, status
//! reporting, and the reconciliation pass that squares the view with the
//! authoritative final state.
//!
//! One replay runs at a time (the host is single-threaded over structure
//! state by contract); the only suspension points are pacer awaits, and no
//! lock is ever held across one.

pub mod linked;
pub mod pacer;
pub mod queue;
pub mod reconcile;
pub mod sort;
pub mod stack;
pub mod status;

pub use pacer::{InstantPacer, Pacer, TokioPacer};
pub use status::{ChannelStatus, NullStatus, RecordingStatus, StatusSink};

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// Shared handle for state the engine and the UI both touch.
pub type Shared<T> = Arc<Mutex<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

/// Pause lengths for one replay.
///
/// Fractions mirror the animation the steps drive: most pulses run at
/// 0.4-1.5x the base duration, entrances get a short fixed settle, and the
/// post-compare rest never drops under 80ms no matter how fast the base is.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub base: Duration,
}

impl Timing {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            base: Duration::from_millis(ms),
        }
    }

    pub fn full(&self) -> Duration {
        self.base
    }

    pub fn frac(&self, factor: f32) -> Duration {
        self.base.mul_f32(factor)
    }

    /// Rest after a pulse resolves; floored at 80ms.
    pub fn settle(&self) -> Duration {
        self.frac(0.4).max(Duration::from_millis(80))
    }

    /// Micro-pause letting an entering element land before it is styled.
    pub fn entrance(&self) -> Duration {
        Duration::from_millis(20)
    }

    /// The final wash over a sorted array.
    pub fn finale(&self) -> Duration {
        Duration::from_millis(400)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_millis(300)
    }
}

/// Where a replay stands. Every run makes exactly one pass:
/// `Idle -> Running -> Reconciling -> Idle`. There is no cancelled or paused
/// state; a started replay runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Reconciling,
}

/// What a finished replay reports back: the per-step application log, in
/// input order, plus how many steps were dropped because the position they
/// addressed had no handle.
#[derive(Debug, Default, Clone)]
pub struct ReplayReport {
    pub applied: Vec<String>,
    pub skipped: usize,
}

impl ReplayReport {
    pub(crate) fn applied_step(&mut self, label: impl Into<String>) {
        self.applied.push(label.into());
    }

    pub(crate) fn skipped_step(&mut self) {
        self.skipped += 1;
    }

    pub fn steps_applied(&self) -> usize {
        self.applied.len()
    }
}

/// Drives step replay for every structure kind.
///
/// Construction fixes the pacing, status plumbing and timing for the
/// lifetime of the replayer; the per-kind sequencers live in sibling files
/// as separate `impl` blocks.
#[derive(Clone)]
pub struct Replayer {
    pacer: Arc<dyn Pacer>,
    status: Arc<dyn StatusSink>,
    timing: Timing,
}

impl Replayer {
    pub fn new(pacer: Arc<dyn Pacer>, status: Arc<dyn StatusSink>, timing: Timing) -> Self {
        Self {
            pacer,
            status,
            timing,
        }
    }

    /// Zero-delay replayer; used by tests and the `--no-delay` smoke mode.
    pub fn instant(status: Arc<dyn StatusSink>) -> Self {
        Self::new(Arc::new(InstantPacer), status, Timing::default())
    }

    pub(crate) async fn pause(&self, duration: Duration) {
        self.pacer.pause(duration).await;
    }

    pub(crate) fn report(&self, text: impl Into<String>) {
        self.status.display(text.into());
    }
}
