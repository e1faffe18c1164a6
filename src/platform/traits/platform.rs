//! Root platform trait
//!
//! This module defines the root Platform trait that hands out the pins a motor channel needs.

use super::{GpioInterface, PwmConfig, PwmInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete pin types via associated types,
/// enabling zero-cost abstractions through compile-time dispatch.
///
/// # Example
///
/// ```ignore
/// impl Platform for BoardPlatform {
///     type Pwm = BoardPwm;
///     type Gpio = BoardGpio;
///
///     fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
///         // Claim the pin and configure it
///     }
///
///     fn release_pin(&mut self, pin: u8) {
///         // Return the pin to the free pool
///     }
///
///     // ...
/// }
/// ```
pub trait Platform {
    /// PWM peripheral type
    type Pwm: PwmInterface;

    /// GPIO peripheral type
    type Gpio: GpioInterface;

    /// Create a PWM peripheral instance
    ///
    /// # Arguments
    ///
    /// * `pin` - GPIO pin number for PWM output
    /// * `config` - PWM configuration
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` if the pin number is
    /// invalid or cannot drive PWM, `PlatformError::Gpio(GpioError::PinInUse)` if
    /// it is already claimed.
    fn create_pwm(&mut self, pin: u8, config: PwmConfig) -> Result<Self::Pwm>;

    /// Create a GPIO peripheral instance
    ///
    /// # Arguments
    ///
    /// * `pin` - GPIO pin number
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` if the pin number is
    /// invalid, `PlatformError::Gpio(GpioError::PinInUse)` if it is already claimed.
    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio>;

    /// Return a claimed pin to the platform
    ///
    /// Releasing a pin that was never claimed is a no-op.
    fn release_pin(&mut self, pin: u8);
}
