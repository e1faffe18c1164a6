//! embedded-hal adapters
//!
//! Wraps any embedded-hal 1.0 `OutputPin` / `SetDutyCycle` so it can serve as the
//! direction or speed line of a motor channel. HAL errors collapse to
//! `WriteFailed`; the underlying error type is HAL-specific and not forwarded.
//!
//! ```ignore
//! use motor_channel::platform::{HalOutput, HalPwm};
//! use motor_channel::{MotorChannel, MotorConfig, NoopSink};
//!
//! let dir = HalOutput::new(pins.gpio4.into_push_pull_output());
//! let speed = HalPwm::new(pwm_slice.channel_b);
//! let mut motor = MotorChannel::from_parts(dir, speed, MotorConfig::new(4, 5), NoopSink)?;
//! motor.run(-0.4)?;
//! ```

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use super::{
    error::{GpioError, PlatformError, PwmError},
    traits::{GpioInterface, GpioMode, PwmInterface},
    Result,
};

/// Full-scale duty value of [`PwmInterface`]
const DUTY_SCALE: u16 = u8::MAX as u16;

/// Digital output backed by an embedded-hal `OutputPin`
///
/// embedded-hal output pins are already typed as outputs, so only output modes
/// are accepted by `set_mode`. The level is cached because `OutputPin` cannot be
/// read back.
#[derive(Debug)]
pub struct HalOutput<P> {
    pin: P,
    state: bool,
    mode: GpioMode,
}

impl<P: OutputPin> HalOutput<P> {
    /// Wrap a HAL output pin (assumed low)
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            state: false,
            mode: GpioMode::OutputPushPull,
        }
    }

    /// Give back the HAL pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> GpioInterface for HalOutput<P> {
    fn set_high(&mut self) -> Result<()> {
        self.pin.set_high().map_err(|_| {
            crate::log_warn!("HAL output rejected set_high");
            PlatformError::Gpio(GpioError::WriteFailed)
        })?;
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin.set_low().map_err(|_| {
            crate::log_warn!("HAL output rejected set_low");
            PlatformError::Gpio(GpioError::WriteFailed)
        })?;
        self.state = false;
        Ok(())
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        if !mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

/// 8-bit PWM output backed by an embedded-hal `SetDutyCycle` channel
///
/// Duty values 0..=255 are scaled onto the channel's `max_duty_cycle`.
/// Disabling forces the channel fully off; enabling re-applies the last duty.
#[derive(Debug)]
pub struct HalPwm<P> {
    pwm: P,
    duty: u8,
    enabled: bool,
}

impl<P: SetDutyCycle> HalPwm<P> {
    /// Wrap a HAL PWM channel
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            duty: 0,
            enabled: false,
        }
    }

    /// Give back the HAL channel
    pub fn into_inner(self) -> P {
        self.pwm
    }

    fn apply(&mut self, duty: u8) -> Result<()> {
        self.pwm
            .set_duty_cycle_fraction(u16::from(duty), DUTY_SCALE)
            .map_err(|_| {
                crate::log_warn!("HAL PWM rejected duty {}", duty);
                PlatformError::Pwm(PwmError::WriteFailed)
            })
    }
}

impl<P: SetDutyCycle> PwmInterface for HalPwm<P> {
    fn set_duty(&mut self, duty: u8) -> Result<()> {
        self.apply(duty)?;
        self.duty = duty;
        Ok(())
    }

    fn duty(&self) -> u8 {
        self.duty
    }

    fn enable(&mut self) -> Result<()> {
        self.apply(self.duty)?;
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) {
        self.enabled = false;
        if self.pwm.set_duty_cycle_fully_off().is_err() {
            crate::log_warn!("HAL PWM rejected fully-off");
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{self, ErrorKind as DigitalErrorKind};
    use embedded_hal::pwm::{self, ErrorKind as PwmErrorKind};

    struct FakePin {
        high: bool,
        broken: bool,
    }

    impl digital::ErrorType for FakePin {
        type Error = DigitalErrorKind;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
            if self.broken {
                return Err(DigitalErrorKind::Other);
            }
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
            if self.broken {
                return Err(DigitalErrorKind::Other);
            }
            self.high = true;
            Ok(())
        }
    }

    struct FakePwm {
        duty: u16,
        broken: bool,
    }

    impl pwm::ErrorType for FakePwm {
        type Error = PwmErrorKind;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> core::result::Result<(), Self::Error> {
            if self.broken {
                return Err(PwmErrorKind::Other);
            }
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_hal_output_levels() {
        let mut out = HalOutput::new(FakePin {
            high: false,
            broken: false,
        });

        out.set_high().unwrap();
        assert!(out.read());

        out.write(false).unwrap();
        assert!(!out.read());
        assert!(!out.into_inner().high);
    }

    #[test]
    fn test_hal_output_rejects_input_mode() {
        let mut out = HalOutput::new(FakePin {
            high: false,
            broken: false,
        });

        assert_eq!(
            out.set_mode(GpioMode::Input),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
        assert!(out.set_mode(GpioMode::OutputOpenDrain).is_ok());
        assert_eq!(out.mode(), GpioMode::OutputOpenDrain);
    }

    #[test]
    fn test_hal_output_error_keeps_state() {
        let mut out = HalOutput::new(FakePin {
            high: false,
            broken: true,
        });

        assert_eq!(
            out.set_high(),
            Err(PlatformError::Gpio(GpioError::WriteFailed))
        );
        assert!(!out.read());
    }

    #[test]
    fn test_hal_pwm_scales_to_max_duty() {
        let mut pwm = HalPwm::new(FakePwm {
            duty: 0,
            broken: false,
        });

        pwm.set_duty(255).unwrap();
        assert_eq!(pwm.duty(), 255);

        pwm.set_duty(127).unwrap();
        assert_eq!(pwm.into_inner().duty, 498); // 127 * 1000 / 255
    }

    #[test]
    fn test_hal_pwm_disable_and_enable() {
        let mut pwm = HalPwm::new(FakePwm {
            duty: 0,
            broken: false,
        });
        pwm.enable().unwrap();
        pwm.set_duty(51).unwrap();

        pwm.disable();
        assert!(!pwm.is_enabled());
        assert_eq!(pwm.duty(), 51);

        pwm.enable().unwrap();
        assert!(pwm.is_enabled());
        assert_eq!(pwm.into_inner().duty, 200);
    }

    #[test]
    fn test_hal_pwm_enable_error() {
        let mut pwm = HalPwm::new(FakePwm {
            duty: 0,
            broken: true,
        });

        assert_eq!(
            pwm.enable(),
            Err(PlatformError::Pwm(PwmError::WriteFailed))
        );
        assert!(!pwm.is_enabled());
    }

    #[test]
    fn test_hal_pwm_error() {
        let mut pwm = HalPwm::new(FakePwm {
            duty: 0,
            broken: true,
        });

        assert_eq!(
            pwm.set_duty(10),
            Err(PlatformError::Pwm(PwmError::WriteFailed))
        );
        assert_eq!(pwm.duty(), 0);
    }
}
