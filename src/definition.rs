//! Declarative board definition tables.
//!
//! Each supported board is one `const` [`BoardDefinition`]: the pin table,
//! the logical buses with their stable discovery identifiers, optional
//! platform-driver probes, and override hooks. A single generic builder
//! ([`crate::builder`]) turns any definition into a [`crate::board::BoardDescriptor`],
//! so adding a board means adding data, not code.
//!
//! [`PinDef`] rows are built with const constructors so a table reads like
//! the board's schematic:
//!
//! ```
//! use boardmap::definition::PinDef;
//! use boardmap::pin::I2cRole;
//!
//! const ROW: PinDef = PinDef::gpio(3, "I2C_SDA", 1, 22, 354).i2c(I2cRole::Sda);
//! assert!(ROW.caps.gpio && ROW.caps.i2c);
//! ```

use crate::board::{AdcResolution, BoardHooks, PwmPeriodLimits};
use crate::caps::CapabilitySet;
use crate::pin::{AioBinding, GpioBinding, I2cRole, PwmBinding, SpiRole, UartRole};

/// One row of a board's pin table.
#[derive(Debug, Clone, Copy)]
pub struct PinDef {
    /// 1-based physical header position.
    pub position: usize,
    /// Pin name, unique within the board.
    pub name: &'static str,
    /// Capability flags for this position.
    pub caps: CapabilitySet,
    /// GPIO addressing, for gpio-capable rows.
    pub gpio: Option<GpioBinding>,
    /// Analog addressing. Usually assigned by the channel table instead.
    pub aio: Option<AioBinding>,
    /// I2C role, for i2c-capable rows.
    pub i2c_role: Option<I2cRole>,
    /// SPI role, for spi-capable rows.
    pub spi_role: Option<SpiRole>,
    /// UART role, for uart-capable rows.
    pub uart_role: Option<UartRole>,
}

impl PinDef {
    /// A bare position with no capabilities yet. Role builders below add
    /// function without GPIO addressing (carrier-board bus pins that are
    /// not muxable to digital I/O).
    pub const fn bare(position: usize, name: &'static str) -> Self {
        PinDef {
            position,
            name,
            caps: CapabilitySet::none(),
            gpio: None,
            aio: None,
            i2c_role: None,
            spi_role: None,
            uart_role: None,
        }
    }

    /// A non-functional position: power rail, ground, reserved.
    pub const fn power(position: usize, name: &'static str) -> Self {
        Self::bare(position, name)
    }

    /// A digital I/O pin with its chip/line/raw addressing.
    pub const fn gpio(
        position: usize,
        name: &'static str,
        chip: u32,
        line: u32,
        raw_pin: u32,
    ) -> Self {
        PinDef {
            caps: CapabilitySet::gpio(),
            gpio: Some(GpioBinding {
                chip,
                line,
                raw_pin,
            }),
            ..Self::power(position, name)
        }
    }

    /// A PWM-only pin (no digital I/O fallback, no GPIO addressing).
    pub const fn pwm(position: usize, name: &'static str) -> Self {
        PinDef {
            caps: CapabilitySet::pwm_only(),
            ..Self::power(position, name)
        }
    }

    /// Mark the row PWM-capable. The channel table assigns the binding.
    pub const fn with_pwm(self) -> Self {
        PinDef {
            caps: self.caps.with_pwm(),
            ..self
        }
    }

    /// Mark the row analog-capable. The channel table assigns the binding.
    pub const fn with_aio(self) -> Self {
        PinDef {
            caps: self.caps.with_aio(),
            ..self
        }
    }

    /// Give the row an I2C role (sets the capability flag too).
    pub const fn i2c(self, role: I2cRole) -> Self {
        PinDef {
            caps: self.caps.with_i2c(),
            i2c_role: Some(role),
            ..self
        }
    }

    /// Give the row an SPI role (sets the capability flag too).
    pub const fn spi(self, role: SpiRole) -> Self {
        PinDef {
            caps: self.caps.with_spi(),
            spi_role: Some(role),
            ..self
        }
    }

    /// Give the row a UART role (sets the capability flag too).
    pub const fn uart(self, role: UartRole) -> Self {
        PinDef {
            caps: self.caps.with_uart(),
            uart_role: Some(role),
            ..self
        }
    }
}

/// A PCI-backed I2C adapter and the header pins it drives.
///
/// The triple (`domain_prefix`, `pci_address`, `adapter_name`) is the
/// stable topological identity handed to discovery; the kernel bus number
/// is learned at build time.
#[derive(Debug, Clone, Copy)]
pub struct I2cBusDef {
    /// PCI domain/bus prefix (e.g. `"0000:00"`).
    pub domain_prefix: &'static str,
    /// Exact PCI device/function address (e.g. `"0000:00:15.3"`).
    pub pci_address: &'static str,
    /// Expected controller driver-instance name (e.g. `"i2c_designware.4"`).
    pub adapter_name: &'static str,
    /// Name of the SDA pin.
    pub sda: &'static str,
    /// Name of the SCL pin.
    pub scl: &'static str,
}

/// An SPI controller/chip-select pair and the header pins it drives.
///
/// spidev numbering on the supported platforms derives from ACPI and is
/// stable, so SPI buses carry static ids instead of a discovery step.
#[derive(Debug, Clone, Copy)]
pub struct SpiBusDef {
    /// Kernel bus number.
    pub bus_id: u32,
    /// Chip-select number.
    pub slave_select: u32,
    /// Name of the chip-select pin.
    pub cs: &'static str,
    /// Name of the MOSI pin.
    pub mosi: &'static str,
    /// Name of the MISO pin.
    pub miso: &'static str,
    /// Name of the clock pin.
    pub sclk: &'static str,
}

/// A UART port, its controller's sysfs `tty/` directory, and its pins.
#[derive(Debug, Clone, Copy)]
pub struct UartDef {
    /// Root-relative `tty/` directory of the controller
    /// (e.g. `"bus/pci/devices/0000:00:1e.1/dw-apb-uart.9/tty"`).
    pub tty_dir: &'static str,
    /// Name of the RX pin.
    pub rx: &'static str,
    /// Name of the TX pin.
    pub tx: &'static str,
    /// Name of the CTS pin.
    pub cts: &'static str,
    /// Name of the RTS pin.
    pub rts: &'static str,
}

/// A PWM channel and the pin carrying its output.
#[derive(Debug, Clone, Copy)]
pub struct PwmChannelDef {
    /// Name of the output pin.
    pub pin: &'static str,
    /// PWM controller (pwmchip) id.
    pub controller: u32,
    /// Channel index within the controller.
    pub channel: u32,
}

/// An analog input channel and the pin carrying it.
#[derive(Debug, Clone, Copy)]
pub struct AioChannelDef {
    /// Name of the input pin.
    pub pin: &'static str,
    /// ADC channel index.
    pub channel: u32,
}

/// An optional platform-driver probe.
#[derive(Debug, Clone, Copy)]
pub struct DriverProbe {
    /// Short label used in log output (e.g. `"upboard-pinctrl"`).
    pub label: &'static str,
    /// Root-relative driver path
    /// (e.g. `"bus/platform/drivers/upboard-pinctrl"`).
    pub path: &'static str,
}

/// What optional-driver absence means for construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPolicy {
    /// Presence is informational only; construction always proceeds.
    Ignore,
    /// At least one declared probe must succeed or construction fails.
    RequireAny,
}

/// Everything the generic builder needs to construct one board.
#[derive(Debug, Clone, Copy)]
pub struct BoardDefinition {
    /// Platform name (e.g. `"UP2_6000"`).
    pub platform_name: &'static str,
    /// Platform version string.
    pub platform_version: &'static str,
    /// Physical header pin count (excluding the index-0 sentinel).
    pub phy_pin_count: usize,
    /// Number of GPIO-capable lines.
    pub gpio_count: u32,
    /// Pin table. Positions not listed stay at the invalid sentinel.
    pub pins: &'static [PinDef],
    /// Declared I2C adapters, in priority order.
    pub i2c_buses: &'static [I2cBusDef],
    /// Declared SPI controllers.
    pub spi_buses: &'static [SpiBusDef],
    /// Declared UART ports.
    pub uart_devices: &'static [UartDef],
    /// Declared PWM channels.
    pub pwm_channels: &'static [PwmChannelDef],
    /// Declared analog channels.
    pub aio_channels: &'static [AioChannelDef],
    /// PWM period bounds; `None` for boards without PWM channels.
    pub pwm_limits: Option<PwmPeriodLimits>,
    /// ADC sample widths; `None` for boards without analog channels.
    pub adc_resolution: Option<AdcResolution>,
    /// Optional platform-driver probes.
    pub drivers: &'static [DriverProbe],
    /// How driver absence affects construction.
    pub driver_policy: DriverPolicy,
    /// Board-specific override hooks copied onto the descriptor.
    pub hooks: BoardHooks,
}
