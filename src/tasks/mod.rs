//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a session.
//!
//! # Tasks
//! - Cache sweep: removes stale response bodies once per cache interval

mod sweep;

pub use sweep::{spawn_sweep_task, SweepHandle, MIN_SWEEP_PERIOD};
