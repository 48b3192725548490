use std::time::Duration;

use async_trait::async_trait;

/// Injection point for the timed suspensions between visual changes.
///
/// Sequencing logic only ever awaits through a pacer, so tests swap in a
/// zero-delay implementation without touching the state machines.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Real pacing on the tokio timer.
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Zero-delay pacing. Keeps the suspension points (each pause still yields
/// to the scheduler) without the waiting.
pub struct InstantPacer;

#[async_trait]
impl Pacer for InstantPacer {
    async fn pause(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
