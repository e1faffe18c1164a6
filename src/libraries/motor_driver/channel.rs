//! Direction + PWM motor channel
//!
//! One [`MotorChannel`] owns the two output lines of one motor. Every call fully
//! re-asserts the lines it touches; no speed or direction is cached between calls.
//!
//! ## HG7881CP Input Logic
//!
//! | Direction line | PWM duty | Motor                                   |
//! |----------------|----------|-----------------------------------------|
//! | HIGH (forward) | `d`      | Forward, speed `1 - d` (PWM active-low) |
//! | LOW (backward) | `d`      | Backward, speed `d`                     |
//!
//! `run` applies this table; `set_speed` writes the duty as given.

use super::{
    clamp_magnitude, magnitude_to_pwm, Direction, Drive, MotorConfig, MotorEvent, NoopSink,
    TraceSink,
};
use crate::platform::{GpioInterface, GpioMode, Platform, PwmInterface, Result};

/// A DC motor driven by one direction line and one PWM line
///
/// # Type Parameters
///
/// * `D` - Digital output for the direction line
/// * `P` - PWM output for the speed line
/// * `S` - Trace sink, [`NoopSink`] unless injected
///
/// # Pin Ownership
///
/// The channel owns both lines. Two channels must never be built on the same
/// pin numbers; the channel itself does not check this.
pub struct MotorChannel<D, P, S = NoopSink>
where
    D: GpioInterface,
    P: PwmInterface,
    S: TraceSink,
{
    direction: D,
    speed: P,
    config: MotorConfig,
    sink: S,
}

impl<D, P> MotorChannel<D, P, NoopSink>
where
    D: GpioInterface,
    P: PwmInterface,
{
    /// Claim and configure both pins from `platform`, without tracing
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if both lines share one pin, or the
    /// platform's error if a pin cannot be claimed or configured.
    pub fn new<PL>(platform: &mut PL, config: MotorConfig) -> Result<Self>
    where
        PL: Platform<Gpio = D, Pwm = P>,
    {
        Self::with_sink(platform, config, NoopSink)
    }
}

impl<D, P, S> MotorChannel<D, P, S>
where
    D: GpioInterface,
    P: PwmInterface,
    S: TraceSink,
{
    /// Claim and configure both pins from `platform`, tracing to `sink`
    ///
    /// # Errors
    ///
    /// Same as [`MotorChannel::new`].
    pub fn with_sink<PL>(platform: &mut PL, config: MotorConfig, sink: S) -> Result<Self>
    where
        PL: Platform<Gpio = D, Pwm = P>,
    {
        config.validate()?;
        let direction = platform.create_gpio(config.direction_pin)?;
        let speed = match platform.create_pwm(config.speed_pin, config.pwm) {
            Ok(speed) => speed,
            Err(e) => {
                platform.release_pin(config.direction_pin);
                return Err(e);
            }
        };

        Self::from_parts(direction, speed, config, sink).inspect_err(|_| {
            platform.release_pin(config.direction_pin);
            platform.release_pin(config.speed_pin);
        })
    }

    /// Build a channel from already-created pins
    ///
    /// The direction line is switched to push-pull output and is not written
    /// until the first command. The PWM line is enabled, which drives its
    /// current duty (the `PwmConfig` initial duty for fresh pins).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the config names one pin twice,
    /// or the pin's error if it cannot be made an output or enabled.
    pub fn from_parts(mut direction: D, mut speed: P, config: MotorConfig, sink: S) -> Result<Self> {
        config.validate()?;
        direction.set_mode(GpioMode::OutputPushPull)?;
        speed.enable()?;

        let mut channel = Self {
            direction,
            speed,
            config,
            sink,
        };
        channel.trace(MotorEvent::Configured {
            label: config.label,
            direction_pin: config.direction_pin,
            speed_pin: config.speed_pin,
        });
        Ok(channel)
    }

    /// Drive the direction line
    ///
    /// # Errors
    ///
    /// Returns the pin's error if the write fails.
    #[inline]
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.direction.write(direction.level())
    }

    /// Write a normalized magnitude to the PWM line, applying the configured inversion
    ///
    /// Returns the PWM value written.
    ///
    /// # Errors
    ///
    /// Returns the pin's error if the write fails.
    #[inline]
    pub fn set_speed(&mut self, magnitude: f32) -> Result<u8> {
        self.set_speed_with(magnitude, self.config.speed_inverted)
    }

    /// Write a normalized magnitude to the PWM line
    ///
    /// The magnitude is clamped to `[0.0, 1.0]` (`NaN` and anything at or below
    /// zero become `0.0`). With `invert` the clamped value is replaced by
    /// `1.0 - magnitude`. The result is scaled to 0..=255 by truncation.
    ///
    /// Returns the PWM value written.
    ///
    /// # Errors
    ///
    /// Returns the pin's error if the write fails.
    pub fn set_speed_with(&mut self, magnitude: f32, invert: bool) -> Result<u8> {
        let mut normalized = clamp_magnitude(magnitude);
        if invert {
            normalized = 1.0 - normalized;
        }

        let pwm = self.write_duty(normalized)?;

        self.trace(MotorEvent::Speed {
            label: self.config.label,
            normalized,
            pwm,
        });
        Ok(pwm)
    }

    /// Run the motor at a signed speed in `[-1.0, 1.0]`
    ///
    /// The sign selects the direction, the magnitude the speed. Out-of-range
    /// commands are clamped. See [`Drive::resolve`] for how the direction and the
    /// PWM value are derived.
    ///
    /// Returns the resolved outputs.
    ///
    /// # Errors
    ///
    /// Returns the pin's error if either write fails.
    pub fn run(&mut self, signed_speed: f32) -> Result<Drive> {
        let drive = Drive::resolve(signed_speed, self.config.direction_reversed);

        self.set_direction(drive.direction)?;
        // Duty already resolved; no clamping or inversion on this path
        let pwm = self.write_duty(drive.duty())?;
        debug_assert_eq!(pwm, drive.pwm);

        self.trace(MotorEvent::Run {
            label: self.config.label,
            direction: drive.direction,
            magnitude: drive.magnitude,
            pwm: drive.pwm,
        });
        Ok(drive)
    }

    /// Direction currently held by the direction line
    pub fn current_direction(&self) -> Direction {
        Direction::from_level(self.direction.read())
    }

    /// PWM value currently held by the speed line
    pub fn current_pwm(&self) -> u8 {
        self.speed.duty()
    }

    /// Channel configuration
    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    /// Channel trace label
    pub fn label(&self) -> char {
        self.config.label
    }

    /// Direction line
    pub fn direction_pin(&self) -> &D {
        &self.direction
    }

    /// Speed line
    pub fn speed_pin(&self) -> &P {
        &self.speed
    }

    /// Trace sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable trace sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Take the channel apart, disabling the PWM line
    pub fn release(mut self) -> (D, P, S) {
        self.speed.disable();
        (self.direction, self.speed, self.sink)
    }

    /// Scale an in-range duty to 0..=255 and write it, unclamped
    #[inline]
    fn write_duty(&mut self, duty: f32) -> Result<u8> {
        let pwm = magnitude_to_pwm(duty);
        self.speed.set_duty(pwm)?;
        Ok(pwm)
    }

    #[inline]
    fn trace(&mut self, event: MotorEvent) {
        if self.config.debug {
            self.sink.record(&event);
        }
    }
}
