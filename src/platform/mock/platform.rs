//! Mock Platform implementation for testing

use heapless::Vec;

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{Platform, PwmConfig},
    Result,
};

use super::{MockGpio, MockPwm};

/// Pin pool size (GPIO 0..=29)
const PIN_COUNT: usize = 30;

/// Mock Platform implementation
///
/// Hands out mock pins and tracks which pin numbers have been claimed.
/// New GPIOs come back unconfigured (input mode), like a freshly reset board.
#[derive(Debug)]
pub struct MockPlatform {
    allocated: Vec<u8, PIN_COUNT>,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            allocated: Vec::new(),
        }
    }

    /// Maximum GPIO pin number
    pub const MAX_GPIO: u8 = 29;

    /// Whether `pin` has been handed out
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    fn claim(&mut self, pin: u8) -> Result<()> {
        if pin > Self::MAX_GPIO {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.is_allocated(pin) {
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }
        self.allocated
            .push(pin)
            .map_err(|_| PlatformError::ResourceUnavailable)
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Pwm = MockPwm;
    type Gpio = MockGpio;

    fn create_pwm(&mut self, pin: u8, config: PwmConfig) -> Result<Self::Pwm> {
        self.claim(pin)?;
        Ok(MockPwm::new(config))
    }

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        self.claim(pin)?;
        Ok(MockGpio::new_input())
    }

    fn release_pin(&mut self, pin: u8) {
        self.allocated.retain(|&p| p != pin);
    }
}
