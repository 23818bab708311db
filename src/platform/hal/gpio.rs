//! GPIO adapter for `embedded-hal` output pins

use embedded_hal::digital::StatefulOutputPin;

use crate::platform::{error::GpioError, traits::GpioInterface, Result};

/// Wraps an `embedded-hal` stateful output pin as a [`GpioInterface`]
///
/// HAL errors are mapped to [`GpioError`] and their payload is dropped.
pub struct HalOutputPin<P> {
    pin: P,
}

impl<P: StatefulOutputPin> HalOutputPin<P> {
    /// Wrap a pin that is already configured as an output
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the underlying HAL pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> GpioInterface for HalOutputPin<P> {
    fn set_high(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| GpioError::WriteFailed.into())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| GpioError::WriteFailed.into())
    }

    fn is_set_high(&mut self) -> Result<bool> {
        self.pin.is_set_high().map_err(|_| GpioError::ReadFailed.into())
    }
}
