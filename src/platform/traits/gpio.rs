//! GPIO interface trait
//!
//! This module defines the output pin interface used for watering indicators.

use crate::platform::Result;

/// GPIO output interface trait
///
/// Platform implementations must provide this interface for indicator LEDs.
///
/// # Safety Invariants
///
/// - GPIO pin must be configured as an output before use
/// - Only one owner per GPIO pin instance
pub trait GpioInterface {
    /// Set GPIO pin high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the pin cannot be driven.
    fn set_high(&mut self) -> Result<()>;

    /// Set GPIO pin low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the pin cannot be driven.
    fn set_low(&mut self) -> Result<()>;

    /// Returns `true` if the pin is currently driven high
    fn is_set_high(&mut self) -> Result<bool>;

    /// Drive the pin to `high`
    fn set_state(&mut self, high: bool) -> Result<()> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}
