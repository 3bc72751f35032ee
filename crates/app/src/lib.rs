//! # folio-app
//!
//! Application layer: the counter use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the host environment implements:
//!   - `FrameScheduler`: run a callback before the next repaint, cancel it
//!   - `CounterDisplay`: the surface the formatted text is rendered on
//! - Provide the cancellable **`CounterTask`** that owns one frame chain
//! - Provide the **`NumericCounter`** controller: trigger policy, restarts,
//!   teardown
//! - Provide **in-process infrastructure** (`ManualFrameClock`) that drives
//!   frames from explicit timestamps
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod counter_task;
pub mod frame_clock;
pub mod numeric_counter;
pub mod ports;
