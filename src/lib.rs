pub mod algo;
pub mod config;
pub mod input;
pub mod replay;
pub mod session;
pub mod step;
pub mod ui;
pub mod util;
pub mod view;

pub use algo::{
    ListAction, LocalTraceSource, QueueAction, SortAlgorithm, SourceError, StackAction,
    TraceSource,
};
pub use config::Config;
pub use replay::{
    ChannelStatus, InstantPacer, NullStatus, Pacer, Replayer, ReplayReport, StatusSink, Timing,
    TokioPacer,
};
pub use session::{SessionState, StructureKind};
pub use step::{ListStep, QueueStep, SortStep, StackStep, Trace, Value};
pub use ui::App;
pub use view::{ArrayView, LinkedView, QueueView, StackView, StructureView};
