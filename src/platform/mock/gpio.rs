//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::GpioInterface,
    Result,
};

/// Mock GPIO output
///
/// Tracks pin level and the number of level writes for test verification.
#[derive(Debug, Default)]
pub struct MockGpio {
    state: bool,
    writes: u32,
    faulted: bool,
}

impl MockGpio {
    /// Create a new mock output pin driven low
    pub fn new_output() -> Self {
        Self::default()
    }

    /// Number of `set_high`/`set_low` calls so far
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Make every further write fail
    pub fn set_faulted(&mut self, faulted: bool) {
        self.faulted = faulted;
    }

    /// Current level without going through the trait
    pub fn level(&self) -> bool {
        self.state
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        if self.faulted {
            return Err(PlatformError::Gpio(GpioError::WriteFailed));
        }
        self.state = high;
        self.writes += 1;
        Ok(())
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn is_set_high(&mut self) -> Result<bool> {
        Ok(self.state)
    }
}
