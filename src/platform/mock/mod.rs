//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use motor_channel::platform::mock::MockPlatform;
//! use motor_channel::{MotorChannel, MotorConfig};
//!
//! let mut platform = MockPlatform::new();
//! let mut motor = MotorChannel::new(&mut platform, MotorConfig::new(4, 5))?;
//! motor.run(0.75)?;
//! assert_eq!(motor.speed_pin().duty(), 63);
//! ```

#![cfg(any(test, feature = "mock"))]

mod gpio;
mod platform;
mod pwm;
mod sink;

pub use gpio::MockGpio;
pub use platform::MockPlatform;
pub use pwm::MockPwm;
pub use sink::RecordingSink;
