//! Port definitions: traits that host adapters implement.
//!
//! Ports are the boundaries between the counter logic and the environment
//! it runs in (a browser, a terminal, a test).

pub mod display;
pub mod frame_scheduler;

pub use display::CounterDisplay;
pub use frame_scheduler::{FrameCallback, FrameScheduler};
