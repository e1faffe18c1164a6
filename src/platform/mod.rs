//! Platform abstraction layer
//!
//! This module isolates hardware access behind small traits so motor logic can be
//! exercised on the host. Boards either implement [`Platform`] directly or wrap
//! embedded-hal pins with the adapters in [`hal`].

pub mod error;
pub mod hal;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, PlatformError, PwmError, Result};
pub use hal::{HalOutput, HalPwm};
pub use traits::{GpioInterface, GpioMode, Platform, PwmConfig, PwmInterface};
