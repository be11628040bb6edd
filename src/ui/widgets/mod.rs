// Custom widgets for the TUI

pub mod progress;

pub use progress::MeterBar;
