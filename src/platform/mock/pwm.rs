//! Mock PWM implementation for testing

use crate::platform::{
    traits::{PwmConfig, PwmInterface},
    Result,
};

/// Mock PWM implementation
///
/// Tracks duty value, enabled state and write count for test verification.
/// Like the HAL adapter, a disabled channel outputs nothing but remembers its duty.
#[derive(Debug)]
pub struct MockPwm {
    duty: u8,
    frequency: u32,
    enabled: bool,
    writes: u32,
}

impl MockPwm {
    /// Create a new mock PWM
    pub fn new(config: PwmConfig) -> Self {
        Self {
            duty: config.duty,
            frequency: config.frequency,
            enabled: false,
            writes: 0,
        }
    }

    /// Configured frequency in Hz
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Number of duty writes
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Duty actually present on the line (0 while disabled)
    pub fn output(&self) -> u8 {
        if self.enabled {
            self.duty
        } else {
            0
        }
    }
}

impl PwmInterface for MockPwm {
    fn set_duty(&mut self, duty: u8) -> Result<()> {
        self.duty = duty;
        self.writes += 1;
        Ok(())
    }

    fn duty(&self) -> u8 {
        self.duty
    }

    fn enable(&mut self) -> Result<()> {
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
