//! Common libraries
//!
//! Hardware-agnostic driver logic built on the platform traits.
//!
//! ## Libraries
//!
//! - `motor_driver`: Direction + PWM DC motor channel (HG7881CP-class H-bridge)

pub mod motor_driver;

// Re-export commonly used types
pub use motor_driver::{
    Direction, Drive, LogSink, MotorChannel, MotorConfig, MotorEvent, NoopSink, TraceSink,
};
