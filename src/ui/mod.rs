pub mod app;
pub mod events;
pub mod panels;

pub use app::App;
pub use events::{AppEvent, Prompt, ToolbarItem};
