use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Sink for human-readable progress text.
///
/// Fire-and-forget: the engine never reads the sink back and never blocks on
/// it. Whatever was displayed last wins.
pub trait StatusSink: Send + Sync {
    fn display(&self, text: String);
}

/// Forwards status lines into the application event loop.
pub struct ChannelStatus {
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelStatus {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl StatusSink for ChannelStatus {
    fn display(&self, text: String) {
        // a closed receiver just means the UI is gone; nothing to do
        let _ = self.tx.send(text);
    }
}

/// Swallows everything.
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn display(&self, _text: String) {}
}

/// Captures status lines for assertions.
#[derive(Default)]
pub struct RecordingStatus {
    lines: Mutex<Vec<String>>,
}

impl RecordingStatus {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl StatusSink for RecordingStatus {
    fn display(&self, text: String) {
        self.lines.lock().push(text);
    }
}
