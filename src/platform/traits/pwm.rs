//! PWM interface trait
//!
//! This module defines the 8-bit PWM output interface used for the motor speed line.

use crate::platform::Result;

/// PWM configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// PWM frequency in Hz
    pub frequency: u32,
    /// Initial duty value (0 = 0%, 255 = 100%)
    pub duty: u8,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: 490, // Classic 8-bit analog-write rate
            duty: 0,
        }
    }
}

/// PWM interface trait
///
/// Platform implementations must provide this interface for PWM output control.
/// Duty values use the full `u8` range, so every value is valid.
///
/// # Safety Invariants
///
/// - Only one owner per PWM channel
/// - No concurrent access to the same PWM channel from multiple contexts
pub trait PwmInterface {
    /// Set PWM duty value (0 = always low, 255 = always high)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` if the hardware rejects the write.
    fn set_duty(&mut self, duty: u8) -> Result<()>;

    /// Get the last duty value written
    fn duty(&self) -> u8;

    /// Enable PWM output, driving the last duty value written
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` if the hardware rejects the write.
    fn enable(&mut self) -> Result<()>;

    /// Disable PWM output (line held fully off, stored duty kept)
    fn disable(&mut self);

    /// Check if PWM is enabled
    fn is_enabled(&self) -> bool;
}
