//! Core traits for platform-agnostic reminder logic.
//!
//! Platform services are injected through these traits so the registry can be
//! tested on the host with fixed clock values.

pub mod time;

pub use time::{ClockSource, MockClock};
