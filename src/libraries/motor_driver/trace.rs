//! Motor trace events
//!
//! Debug output is emitted as structured [`MotorEvent`]s to an injected
//! [`TraceSink`] instead of being printed directly. The rendered text is for
//! humans only and carries no stability guarantee.

use core::fmt;

use super::Direction;

/// Structured trace record from a motor channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorEvent {
    /// Channel constructed and pins configured
    Configured {
        label: char,
        direction_pin: u8,
        speed_pin: u8,
    },
    /// `set_speed` applied a normalized (post-inversion) value
    Speed { label: char, normalized: f32, pwm: u8 },
    /// `run` resolved a signed command
    Run {
        label: char,
        direction: Direction,
        magnitude: f32,
        pwm: u8,
    },
}

impl MotorEvent {
    /// Label of the channel that emitted the event
    pub fn label(&self) -> char {
        match *self {
            MotorEvent::Configured { label, .. }
            | MotorEvent::Speed { label, .. }
            | MotorEvent::Run { label, .. } => label,
        }
    }
}

impl fmt::Display for MotorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorEvent::Configured {
                label,
                direction_pin,
                speed_pin,
            } => write!(
                f,
                "[{}] motor ready: dir pin {}, speed pin {}",
                label, direction_pin, speed_pin
            ),
            MotorEvent::Speed {
                label,
                normalized,
                pwm,
            } => write!(f, "[{}] normalized speed {:.2} -> pwm {}", label, normalized, pwm),
            MotorEvent::Run {
                label,
                direction,
                magnitude,
                pwm,
            } => write!(
                f,
                "[{}] run {:.2} {} -> pwm {}",
                label, magnitude, direction, pwm
            ),
        }
    }
}

/// Receiver for motor trace events
pub trait TraceSink {
    /// Record one event
    fn record(&mut self, event: &MotorEvent);
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    #[inline]
    fn record(&mut self, event: &MotorEvent) {
        (**self).record(event);
    }
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    #[inline]
    fn record(&mut self, _event: &MotorEvent) {}
}

/// Sink that forwards events to the crate's debug log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, event: &MotorEvent) {
        crate::log_debug!("{}", event);
    }
}
