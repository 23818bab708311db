//! `embedded-hal` adapters
//!
//! Lets any HAL pin implementing the `embedded-hal` 1.0 digital traits drive a
//! watering indicator.

pub mod gpio;

pub use gpio::HalOutputPin;
