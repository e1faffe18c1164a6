//! Motor driver abstraction
//!
//! This module drives a DC motor through a two-line H-bridge interface of the
//! HG7881CP kind: one digital line selects the rotation sense, one 8-bit PWM line
//! sets the magnitude.
//!
//! ## Features
//!
//! - `MotorChannel`: one motor, one direction pin, one PWM pin
//! - Unsigned `set_speed` primitive with explicit clamping and optional inversion
//! - Signed `run` command with per-channel wiring reversal
//! - Structured trace events through an injected `TraceSink`
//!
//! ## Clamping
//!
//! Normalized inputs are never rejected. Magnitudes are clamped to `[0.0, 1.0]`
//! (`NaN` counts as `0.0`) and signed commands to `[-1.0, 1.0]`. The PWM value
//! is `magnitude * 255` truncated toward zero, so `0.5` gives `127`.
//!
//! ## Example
//!
//! ```ignore
//! use motor_channel::platform::mock::MockPlatform;
//! use motor_channel::{Direction, MotorChannel, MotorConfig};
//!
//! let mut platform = MockPlatform::new();
//! let config = MotorConfig::new(4, 5).reversed(true).label('L');
//! let mut left = MotorChannel::new(&mut platform, config)?;
//!
//! let drive = left.run(-0.5)?;
//! assert_eq!(drive.direction, Direction::Forward); // reversed wiring
//! ```

pub mod channel;
pub mod config;
pub mod trace;

// Re-export main types
pub use channel::MotorChannel;
pub use config::MotorConfig;
pub use trace::{LogSink, MotorEvent, NoopSink, TraceSink};

use core::fmt;

/// Maximum PWM value written to the speed line
pub const MAX_PWM: u8 = 255;

/// Lowest normalized speed; anything at or below it drives PWM 0
pub const MIN_SPEED: f32 = 0.0;

/// Logical rotation sense
///
/// `Forward` is driven as a HIGH level on the direction line, `Backward` as LOW.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Direction line HIGH
    Forward,
    /// Direction line LOW
    Backward,
}

impl Direction {
    /// The opposite direction
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Level to drive on the direction line (`true` = HIGH)
    #[inline]
    pub fn level(self) -> bool {
        matches!(self, Direction::Forward)
    }

    /// Direction encoded by a direction-line level
    #[inline]
    pub fn from_level(high: bool) -> Self {
        if high {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("FORWARD"),
            Direction::Backward => f.write_str("BACKWARD"),
        }
    }
}

/// Clamp a normalized magnitude to `[0.0, 1.0]`, mapping `NaN` to `0.0`
#[inline]
pub fn clamp_magnitude(magnitude: f32) -> f32 {
    // `!(x > MIN)` also catches NaN
    if !(magnitude > MIN_SPEED) {
        return MIN_SPEED;
    }
    magnitude.min(1.0)
}

/// Convert an in-range magnitude to a PWM value, truncating toward zero
#[inline]
pub fn magnitude_to_pwm(magnitude: f32) -> u8 {
    // Float-to-int casts truncate and saturate
    (magnitude * MAX_PWM as f32) as u8
}

/// Outputs resolved from a signed `run` command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Drive {
    /// Level driven on the direction line
    pub direction: Direction,
    /// Commanded magnitude in `[0.0, 1.0]`
    pub magnitude: f32,
    /// Value written to the PWM line
    pub pwm: u8,
}

impl Drive {
    /// Resolve a signed speed command for an HG7881CP-style driver
    ///
    /// Direction starts at `Forward`, flips once for a negative command and once
    /// more when the channel wiring is reversed.
    ///
    /// The driver's PWM input is active-low relative to a HIGH direction line, so
    /// `Forward` writes `1.0 - magnitude` while `Backward` writes `magnitude`.
    pub fn resolve(signed_speed: f32, reversed: bool) -> Self {
        let signed_speed = if signed_speed.is_nan() {
            0.0
        } else {
            signed_speed.clamp(-1.0, 1.0)
        };
        let magnitude = signed_speed.abs();

        let mut direction = Direction::Forward;
        if signed_speed < 0.0 {
            direction = direction.reversed();
        }
        if reversed {
            direction = direction.reversed();
        }

        let duty = Self::duty_for(direction, magnitude);
        Self {
            direction,
            magnitude,
            pwm: magnitude_to_pwm(duty),
        }
    }

    /// Normalized duty for the speed line, before scaling to PWM
    #[inline]
    pub fn duty(&self) -> f32 {
        Self::duty_for(self.direction, self.magnitude)
    }

    #[inline]
    fn duty_for(direction: Direction, magnitude: f32) -> f32 {
        match direction {
            Direction::Forward => 1.0 - magnitude,
            Direction::Backward => magnitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_levels() {
        assert!(Direction::Forward.level());
        assert!(!Direction::Backward.level());
        assert_eq!(Direction::from_level(true), Direction::Forward);
        assert_eq!(Direction::from_level(false), Direction::Backward);
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
        assert_eq!(Direction::Backward.reversed().reversed(), Direction::Backward);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(format!("{}", Direction::Forward), "FORWARD");
        assert_eq!(format!("{}", Direction::Backward), "BACKWARD");
    }

    #[test]
    fn test_clamp_magnitude() {
        assert_eq!(clamp_magnitude(-0.3), 0.0);
        assert_eq!(clamp_magnitude(0.0), 0.0);
        assert_eq!(clamp_magnitude(0.4), 0.4);
        assert_eq!(clamp_magnitude(1.0), 1.0);
        assert_eq!(clamp_magnitude(7.5), 1.0);
        assert_eq!(clamp_magnitude(f32::NAN), 0.0);
        assert_eq!(clamp_magnitude(f32::INFINITY), 1.0);
        assert_eq!(clamp_magnitude(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_magnitude_to_pwm_truncates() {
        assert_eq!(magnitude_to_pwm(0.0), 0);
        assert_eq!(magnitude_to_pwm(0.5), 127); // 127.5, not rounded
        assert_eq!(magnitude_to_pwm(0.25), 63);
        assert_eq!(magnitude_to_pwm(1.0), 255);
    }

    #[test]
    fn test_resolve_forward_uses_inverted_duty() {
        let drive = Drive::resolve(0.75, false);
        assert_eq!(drive.direction, Direction::Forward);
        assert_eq!(drive.magnitude, 0.75);
        assert_eq!(drive.pwm, 63);
    }

    #[test]
    fn test_resolve_backward_uses_direct_duty() {
        let drive = Drive::resolve(-0.75, false);
        assert_eq!(drive.direction, Direction::Backward);
        assert_eq!(drive.magnitude, 0.75);
        assert_eq!(drive.pwm, 191);
    }

    #[test]
    fn test_resolve_zero_is_baseline() {
        let drive = Drive::resolve(0.0, false);
        assert_eq!(drive.direction, Direction::Forward);
        assert_eq!(drive.magnitude, 0.0);
        assert_eq!(drive.pwm, 255);

        let drive = Drive::resolve(0.0, true);
        assert_eq!(drive.direction, Direction::Backward);
        assert_eq!(drive.magnitude, 0.0);
        assert_eq!(drive.pwm, 0);
    }

    #[test]
    fn test_resolve_sign_flips_direction() {
        for &x in &[0.1_f32, 0.5, 0.9, 1.0] {
            let pos = Drive::resolve(x, false);
            let neg = Drive::resolve(-x, false);
            assert_eq!(pos.direction, neg.direction.reversed());
            assert_eq!(pos.magnitude, neg.magnitude);
        }
    }

    #[test]
    fn test_resolve_reversed_flips_direction() {
        for &x in &[-1.0_f32, -0.3, 0.3, 1.0] {
            let normal = Drive::resolve(x, false);
            let reversed = Drive::resolve(x, true);
            assert_eq!(normal.direction, reversed.direction.reversed());
            assert_eq!(normal.magnitude, reversed.magnitude);
        }

        // Reversed channel given a negative command drives FORWARD
        assert_eq!(Drive::resolve(-0.5, true).direction, Direction::Forward);
    }

    #[test]
    fn test_resolve_clamps_out_of_range() {
        assert_eq!(Drive::resolve(1.5, false), Drive::resolve(1.0, false));
        assert_eq!(Drive::resolve(-3.0, false), Drive::resolve(-1.0, false));
        assert_eq!(Drive::resolve(1.5, false).magnitude, 1.0);
        assert_eq!(Drive::resolve(f32::NAN, false), Drive::resolve(0.0, false));
    }

    #[test]
    fn test_drive_duty_matches_pwm() {
        let forward = Drive::resolve(0.75, false);
        assert_eq!(forward.duty(), 0.25);
        assert_eq!(magnitude_to_pwm(forward.duty()), forward.pwm);

        let backward = Drive::resolve(-0.75, false);
        assert_eq!(backward.duty(), 0.75);
        assert_eq!(magnitude_to_pwm(backward.duty()), backward.pwm);
    }

    #[test]
    fn test_resolve_full_scale() {
        let drive = Drive::resolve(1.0, false);
        assert_eq!(drive.direction, Direction::Forward);
        assert_eq!(drive.pwm, 0);

        let drive = Drive::resolve(-1.0, false);
        assert_eq!(drive.direction, Direction::Backward);
        assert_eq!(drive.pwm, 255);
    }
}
