// Terminal UI using Ratatui

pub mod chart;
pub mod components;
pub mod constants;
pub mod events;
pub mod state;
pub mod tabs;
pub mod widgets;

pub use events::{run_ui, run_ui_with_options};
pub use state::{AppState, Tab};
