//! Motor channel configuration
//!
//! Pin assignments and behavioral flags fixed at construction time.
//!
//! | Field                | Default | Effect                                          |
//! |----------------------|---------|-------------------------------------------------|
//! | `direction_reversed` | false   | Swap forward/backward in `run` (wiring polarity) |
//! | `speed_inverted`     | false   | `set_speed` writes `1.0 - magnitude`            |
//! | `debug`              | false   | Emit trace events to the channel's sink         |
//! | `label`              | `'M'`   | Channel tag carried by every trace event        |

use crate::platform::{PlatformError, PwmConfig, Result};

/// Default channel label
pub const DEFAULT_LABEL: char = 'M';

/// Configuration for a single motor channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// Pin driving the direction input of the H-bridge
    pub direction_pin: u8,
    /// PWM-capable pin driving the speed input of the H-bridge
    pub speed_pin: u8,
    /// Swap logical forward/backward (compensates motor wiring)
    pub direction_reversed: bool,
    /// Complement the magnitude on the `set_speed` path
    pub speed_inverted: bool,
    /// Emit trace events
    pub debug: bool,
    /// Single-character channel tag for traces
    pub label: char,
    /// Speed line PWM settings
    pub pwm: PwmConfig,
}

impl MotorConfig {
    /// Configuration with the given pins and all flags off
    pub fn new(direction_pin: u8, speed_pin: u8) -> Self {
        Self {
            direction_pin,
            speed_pin,
            direction_reversed: false,
            speed_inverted: false,
            debug: false,
            label: DEFAULT_LABEL,
            pwm: PwmConfig::default(),
        }
    }

    /// Set direction reversal
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.direction_reversed = reversed;
        self
    }

    /// Set speed inversion
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.speed_inverted = inverted;
        self
    }

    /// Enable or disable trace events
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the trace label
    pub fn label(mut self, label: char) -> Self {
        self.label = label;
        self
    }

    /// Set the speed line PWM settings
    pub fn pwm(mut self, pwm: PwmConfig) -> Self {
        self.pwm = pwm;
        self
    }

    /// Check the pin assignment
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if both lines share one pin.
    pub fn validate(&self) -> Result<()> {
        if self.direction_pin == self.speed_pin {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }
}
