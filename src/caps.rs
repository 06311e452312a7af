//! Per-pin capability sets.
//!
//! Every physical header position carries a [`CapabilitySet`]: eight
//! independent flags describing which peripheral functions the pin can be
//! muxed to. Power rails, ground, and reserved positions have all flags
//! cleared — they are valid header positions with no function.
//!
//! The const builder methods exist so board definition tables read
//! declaratively:
//!
//! ```
//! use boardmap::caps::CapabilitySet;
//!
//! const SDA: CapabilitySet = CapabilitySet::gpio().with_i2c();
//! assert!(SDA.gpio && SDA.i2c);
//! assert!(!SDA.uart);
//! ```

use serde::Serialize;

/// The peripheral functions a single pin supports.
///
/// A pin may have zero or more flags set. Bindings on the pin descriptor
/// (GPIO line, PWM channel, ...) may only be populated for flags that are
/// set here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CapabilitySet {
    /// Digital I/O through the kernel GPIO character device.
    pub gpio: bool,
    /// Memory-mapped "raw" digital I/O fast path.
    pub fast_gpio: bool,
    /// PWM output.
    pub pwm: bool,
    /// Fast (hardware-buffered) analog input.
    pub fast_aio: bool,
    /// Analog input via the IIO subsystem.
    pub aio: bool,
    /// I2C bus role (SDA or SCL).
    pub i2c: bool,
    /// SPI bus role (CS, MOSI, MISO, or SCLK).
    pub spi: bool,
    /// UART role (RX, TX, CTS, or RTS).
    pub uart: bool,
}

impl CapabilitySet {
    /// All flags cleared: a power rail, ground, or reserved position.
    pub const fn none() -> Self {
        CapabilitySet {
            gpio: false,
            fast_gpio: false,
            pwm: false,
            fast_aio: false,
            aio: false,
            i2c: false,
            spi: false,
            uart: false,
        }
    }

    /// A plain digital I/O pin.
    pub const fn gpio() -> Self {
        CapabilitySet {
            gpio: true,
            ..Self::none()
        }
    }

    /// A PWM-only pin (no digital I/O fallback).
    pub const fn pwm_only() -> Self {
        CapabilitySet {
            pwm: true,
            ..Self::none()
        }
    }

    /// Add PWM capability.
    pub const fn with_pwm(self) -> Self {
        CapabilitySet { pwm: true, ..self }
    }

    /// Add analog-input capability.
    pub const fn with_aio(self) -> Self {
        CapabilitySet { aio: true, ..self }
    }

    /// Add I2C capability.
    pub const fn with_i2c(self) -> Self {
        CapabilitySet { i2c: true, ..self }
    }

    /// Add SPI capability.
    pub const fn with_spi(self) -> Self {
        CapabilitySet { spi: true, ..self }
    }

    /// Add UART capability.
    pub const fn with_uart(self) -> Self {
        CapabilitySet { uart: true, ..self }
    }

    /// Add the memory-mapped fast digital I/O flag.
    pub const fn with_fast_gpio(self) -> Self {
        CapabilitySet {
            fast_gpio: true,
            ..self
        }
    }

    /// Returns `true` when no flag is set (non-functional header position).
    pub const fn is_none(&self) -> bool {
        !(self.gpio
            || self.fast_gpio
            || self.pwm
            || self.fast_aio
            || self.aio
            || self.i2c
            || self.spi
            || self.uart)
    }
}
