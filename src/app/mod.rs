// ABOUTME: Application state, events, and timer plumbing for the TUI

pub mod events;
pub mod state;
pub mod timers;

pub use events::{AppEvent, EventHandler};
pub use state::{AppState, Route};
pub use timers::{TimerAction, TimerHandle, TimerQueue};
