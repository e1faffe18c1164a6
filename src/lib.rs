#![cfg_attr(not(test), no_std)]

//! motor_channel - Direction + PWM DC motor control for small robots
//!
//! This library turns a normalized "how fast, which way" command into the two
//! signals an HG7881CP-class H-bridge expects: a digital direction level and an
//! 8-bit PWM duty.
//!
//! - [`platform`]: hardware boundary (GPIO/PWM traits, embedded-hal adapters, mocks)
//! - [`libraries::motor_driver`]: the motor channel itself
//! - [`logging`]: target-independent log macros
//!
//! # Features
//!
//! - `defmt`: route log macros and derive `defmt::Format` on public types
//! - `mock`: export [`platform::mock`] for host tests outside this crate

pub mod logging;

// Platform abstraction layer
pub mod platform;

// Driver libraries
pub mod libraries;

pub use libraries::motor_driver::{
    Direction, Drive, LogSink, MotorChannel, MotorConfig, MotorEvent, NoopSink, TraceSink,
};
pub use platform::{PlatformError, Result};
