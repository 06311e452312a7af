//! Board descriptors -- the assembled, immutable model of one board.
//!
//! A [`BoardDescriptor`] owns the full pin sequence and every bus-binding
//! collection; dropping it releases everything. Construction (see
//! [`crate::builder`]) either completes and hands out a fully populated
//! descriptor or fails and hands out nothing -- no partially built
//! descriptor is ever observable.
//!
//! Physical positions are 1-based: index 0 always holds the invalid
//! sentinel pin, so `pins.len()` equals the declared physical pin count
//! plus one.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::pin::PinDescriptor;

/// Maximum number of I2C bus entries per board.
pub const MAX_I2C_BUSES: usize = 12;
/// Maximum number of SPI bus entries per board.
pub const MAX_SPI_BUSES: usize = 12;
/// Maximum number of UART device entries per board.
pub const MAX_UART_DEVICES: usize = 6;
/// Maximum number of PWM channel entries per board.
pub const MAX_PWM_CHANNELS: usize = 12;
/// Maximum number of analog channel entries per board.
pub const MAX_AIO_CHANNELS: usize = 8;

/// An I2C adapter bound to its SDA/SCL pins.
///
/// `bus_id` is the kernel-assigned adapter number learned through
/// discovery, valid for `/dev/i2c-<bus_id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct I2cBusEntry {
    /// Kernel adapter number (`/dev/i2c-N`).
    pub bus_id: u32,
    /// Pin index of the SDA line.
    pub sda: usize,
    /// Pin index of the SCL line.
    pub scl: usize,
}

/// An SPI controller/chip-select pair bound to its four pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpiBusEntry {
    /// Kernel bus number (`/dev/spidevB.S`, the `B`).
    pub bus_id: u32,
    /// Chip-select number (`/dev/spidevB.S`, the `S`).
    pub slave_select: u32,
    /// Pin index of the chip-select line.
    pub cs: usize,
    /// Pin index of the MOSI line.
    pub mosi: usize,
    /// Pin index of the MISO line.
    pub miso: usize,
    /// Pin index of the clock line.
    pub sclk: usize,
}

/// A UART port bound to its device node and four pins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UartDeviceEntry {
    /// Resolved terminal device node (e.g. `/dev/ttyS4`).
    pub device_path: String,
    /// Pin index of the RX line.
    pub rx: usize,
    /// Pin index of the TX line.
    pub tx: usize,
    /// Pin index of the CTS line.
    pub cts: usize,
    /// Pin index of the RTS line.
    pub rts: usize,
}

/// A PWM channel bound to its pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PwmChannelEntry {
    /// PWM controller (pwmchip) id.
    pub controller: u32,
    /// Channel index within the controller.
    pub channel: u32,
    /// Pin index carrying the output.
    pub pin: usize,
}

/// An analog input channel bound to its pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AioChannelEntry {
    /// ADC channel index.
    pub channel: u32,
    /// Pin index carrying the input.
    pub pin: usize,
}

/// PWM period bounds, in microseconds, for boards exposing PWM channels.
///
/// The peripheral-access layer clamps period requests to `[min_us, max_us]`
/// and applies `default_us` when a channel is first opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PwmPeriodLimits {
    /// Period applied when a channel is first opened.
    pub default_us: u32,
    /// Smallest accepted period.
    pub min_us: u32,
    /// Largest accepted period.
    pub max_us: u32,
}

/// ADC sample widths, in bits, for boards exposing analog channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdcResolution {
    /// Bit width of the raw kernel reading.
    pub raw_bits: u32,
    /// Bit width reported to callers after scaling.
    pub supported_bits: u32,
}

/// Board-specific override hooks the peripheral-access layer consults
/// instead of its generic defaults.
///
/// Function pointers rather than closures: hooks are declared in `const`
/// board definition tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardHooks {
    /// Override for the analog-input raw-voltage file path. Receives the
    /// ADC channel index and returns the sysfs file to read.
    pub aio_path: Option<fn(u32) -> String>,
}

/// The assembled model of one board: pins, buses, metadata.
///
/// Treated as read-only by all consumers once construction completes.
#[derive(Debug, Clone, Serialize)]
pub struct BoardDescriptor {
    /// Platform name (e.g. `"UP2_6000"`).
    pub platform_name: &'static str,
    /// Platform version string.
    pub platform_version: &'static str,
    /// Pin sequence, 1-based; index 0 is the invalid sentinel.
    pub pins: Vec<PinDescriptor>,
    /// Number of GPIO-capable lines the board exposes.
    pub gpio_count: u32,
    /// Discovered I2C adapters. At most [`MAX_I2C_BUSES`].
    pub i2c_buses: Vec<I2cBusEntry>,
    /// Declared SPI controllers. At most [`MAX_SPI_BUSES`].
    pub spi_buses: Vec<SpiBusEntry>,
    /// Discovered UART ports. At most [`MAX_UART_DEVICES`].
    pub uart_devices: Vec<UartDeviceEntry>,
    /// PWM channels. At most [`MAX_PWM_CHANNELS`].
    pub pwm_channels: Vec<PwmChannelEntry>,
    /// Analog channels. At most [`MAX_AIO_CHANNELS`].
    pub aio_channels: Vec<AioChannelEntry>,
    /// PWM period bounds; `None` when the board exposes no PWM channels.
    pub pwm_limits: Option<PwmPeriodLimits>,
    /// ADC sample widths; `None` when the board exposes no analog channels.
    pub adc_resolution: Option<AdcResolution>,
    /// Index into `i2c_buses` of the default adapter.
    pub default_i2c_bus: usize,
    /// Index into `spi_buses` of the default controller.
    pub default_spi_bus: usize,
    /// Index into `uart_devices` of the default port.
    pub default_uart: usize,
    /// Degraded-mode notes recorded during construction (missing pins,
    /// absent controllers, capability violations).
    pub warnings: Vec<String>,
    /// Board-specific override hooks.
    #[serde(skip)]
    pub hooks: BoardHooks,
}

impl BoardDescriptor {
    /// Resolve a pin name to its position in the pin sequence.
    ///
    /// Linear scan in index order; comparison is exact (no case folding, no
    /// partial match). When a board carries duplicate names the earliest
    /// index wins. Returns `None` when no pin matches.
    pub fn pin_index(&self, name: &str) -> Option<usize> {
        self.pins.iter().position(|p| p.name == name)
    }

    /// Like [`pin_index`](Self::pin_index), but a miss is an error.
    pub fn require_pin(&self, name: &str) -> Result<usize> {
        self.pin_index(name).ok_or_else(|| Error::PinNotFound {
            name: name.to_string(),
            board: self.platform_name.to_string(),
        })
    }

    /// Number of physical header positions (excludes the index-0 sentinel).
    pub fn phy_pin_count(&self) -> usize {
        self.pins.len().saturating_sub(1)
    }
}
