//! UP Xtreme i11 (Tiger Lake) board definition.
//!
//! 40-pin HAT header on the SoC pinctrl (chip 0) plus a 40-position
//! expansion block routed through a secondary expander (chip 1). Raw GPIO
//! numbers for the main header derive from the Tiger Lake pinctrl base;
//! expansion lines use their line index directly. Expansion positions
//! carrying only power or ground are left undeclared and stay at the
//! invalid sentinel.

use crate::board::{AdcResolution, BoardHooks};
use crate::definition::{
    AioChannelDef, BoardDefinition, DriverPolicy, DriverProbe, I2cBusDef, PinDef, SpiBusDef,
    UartDef,
};
use crate::pin::{I2cRole, SpiRole, UartRole};

const PLATFORM_NAME: &str = "UPXTREME_I11";
const PLATFORM_VERSION: &str = "1.0.0";

const PHY_PIN_COUNT: usize = 80;
const GPIO_COUNT: u32 = 28;

// Tiger Lake pinctrl base for the legacy global numbering.
const POOL_BASE: u32 = 152;

#[rustfmt::skip]
const PINS: &[PinDef] = &[
    PinDef::power(1,  "3.3v"),
    PinDef::power(2,  "5v"),
    PinDef::gpio(3,  "I2C_SDA",   0, 136, POOL_BASE + 136).i2c(I2cRole::Sda),
    PinDef::power(4,  "5v"),
    PinDef::gpio(5,  "I2C_SCL",   0, 137, POOL_BASE + 137).i2c(I2cRole::Scl),
    PinDef::power(6,  "GND"),
    PinDef::gpio(7,  "ADC0",      0, 163, POOL_BASE + 163).with_aio(),
    PinDef::gpio(8,  "UART_TX",   0, 265, POOL_BASE + 265).uart(UartRole::Tx),
    PinDef::power(9,  "GND"),
    PinDef::gpio(10, "UART_RX",   0, 264, POOL_BASE + 264).uart(UartRole::Rx),
    PinDef::gpio(11, "UART_RTS",  0, 266, POOL_BASE + 266).uart(UartRole::Rts),
    PinDef::gpio(12, "I2S_CLK",   0, 71,  POOL_BASE + 71),
    PinDef::gpio(13, "GPIO27",    0, 322, POOL_BASE + 322),
    PinDef::power(14, "GND"),
    PinDef::gpio(15, "GPIO22",    0, 331, POOL_BASE + 331),
    PinDef::gpio(16, "GPIO23",    0, 330, POOL_BASE + 330),
    PinDef::power(17, "3.3v"),
    PinDef::gpio(18, "GPIO24",    0, 333, POOL_BASE + 333),
    PinDef::gpio(19, "SPI0_MOSI", 0, 22,  POOL_BASE + 22).spi(SpiRole::Mosi),
    PinDef::power(20, "GND"),
    PinDef::gpio(21, "SPI0_MISO", 0, 21,  POOL_BASE + 21).spi(SpiRole::Miso),
    PinDef::gpio(22, "GPIO25",    0, 332, POOL_BASE + 332),
    PinDef::gpio(23, "SPI0_CLK",  0, 20,  POOL_BASE + 20).spi(SpiRole::Sclk),
    PinDef::gpio(24, "SPI0_CS0",  0, 19,  POOL_BASE + 19).spi(SpiRole::Cs),
    PinDef::power(25, "GND"),
    PinDef::gpio(26, "SPI0_CS1",  0, 23,  POOL_BASE + 23).spi(SpiRole::Cs),
    PinDef::gpio(27, "ID_SD",     0, 134, POOL_BASE + 134).i2c(I2cRole::Sda),
    PinDef::gpio(28, "ID_SC",     0, 135, POOL_BASE + 135).i2c(I2cRole::Scl),
    PinDef::gpio(29, "GPIO5",     0, 178, POOL_BASE + 178),
    PinDef::power(30, "GND"),
    PinDef::gpio(31, "GPIO6",     0, 335, POOL_BASE + 335),
    PinDef::gpio(32, "GPIO12",    0, 160, POOL_BASE + 160),
    PinDef::gpio(33, "GPIO13",    0, 161, POOL_BASE + 161),
    PinDef::power(34, "GND"),
    PinDef::gpio(35, "I2S_FRM",   0, 72,  POOL_BASE + 72),
    PinDef::gpio(36, "UART_CTS",  0, 267, POOL_BASE + 267).uart(UartRole::Cts),
    PinDef::gpio(37, "GPIO26",    0, 321, POOL_BASE + 321),
    PinDef::gpio(38, "I2S_DIN",   0, 74,  POOL_BASE + 74),
    PinDef::power(39, "GND"),
    PinDef::gpio(40, "I2S_DOUT",  0, 73,  POOL_BASE + 73),
    // Expansion header (secondary expander; power/ground positions omitted)
    PinDef::gpio(43, "RPI_GPIO2",  1, 2,  2),
    PinDef::gpio(45, "RPI_GPIO3",  1, 3,  3),
    PinDef::gpio(47, "RPI_GPIO4",  1, 4,  4),
    PinDef::gpio(48, "RPI_GPIO14", 1, 14, 14),
    PinDef::gpio(50, "RPI_GPIO15", 1, 15, 15),
    PinDef::gpio(51, "RPI_GPIO17", 1, 17, 17),
    PinDef::gpio(52, "RPI_GPIO18", 1, 18, 18),
    PinDef::gpio(53, "RPI_GPIO27", 1, 27, 27),
    PinDef::gpio(55, "RPI_GPIO22", 1, 22, 22),
    PinDef::gpio(56, "RPI_GPIO23", 1, 23, 23),
    PinDef::gpio(58, "RPI_GPIO24", 1, 24, 24),
    PinDef::gpio(59, "RPI_GPIO10", 1, 10, 10),
    PinDef::gpio(61, "RPI_GPIO9",  1, 9,  9),
    PinDef::gpio(62, "RPI_GPIO25", 1, 25, 25),
    PinDef::gpio(63, "RPI_GPIO11", 1, 11, 11),
    PinDef::gpio(64, "RPI_GPIO8",  1, 8,  8),
    PinDef::gpio(66, "RPI_GPIO7",  1, 7,  7),
    PinDef::gpio(67, "RPI_GPIO0",  1, 0,  0),
    PinDef::gpio(68, "RPI_GPIO1",  1, 1,  1),
    PinDef::gpio(69, "RPI_GPIO5",  1, 5,  5),
    PinDef::gpio(71, "RPI_GPIO6",  1, 6,  6),
    PinDef::gpio(72, "RPI_GPIO12", 1, 12, 12),
    PinDef::gpio(73, "RPI_GPIO13", 1, 13, 13),
    PinDef::gpio(75, "RPI_GPIO19", 1, 19, 19),
    PinDef::gpio(76, "RPI_GPIO16", 1, 16, 16),
    PinDef::gpio(77, "RPI_GPIO26", 1, 26, 26),
    PinDef::gpio(78, "RPI_GPIO20", 1, 20, 20),
    PinDef::gpio(80, "RPI_GPIO21", 1, 21, 21),
];

const I2C_BUSES: &[I2cBusDef] = &[
    I2cBusDef {
        domain_prefix: "0000:00",
        pci_address: "0000:00:19.0",
        adapter_name: "i2c_designware.4",
        sda: "I2C_SDA",
        scl: "I2C_SCL",
    },
    I2cBusDef {
        domain_prefix: "0000:00",
        pci_address: "0000:00:15.3",
        adapter_name: "i2c_designware.3",
        sda: "ID_SD",
        scl: "ID_SC",
    },
];

const SPI_BUSES: &[SpiBusDef] = &[
    SpiBusDef {
        bus_id: 0,
        slave_select: 0,
        cs: "SPI0_CS0",
        mosi: "SPI0_MOSI",
        miso: "SPI0_MISO",
        sclk: "SPI0_CLK",
    },
    SpiBusDef {
        bus_id: 0,
        slave_select: 1,
        cs: "SPI0_CS1",
        mosi: "SPI0_MOSI",
        miso: "SPI0_MISO",
        sclk: "SPI0_CLK",
    },
];

const UART_DEVICES: &[UartDef] = &[UartDef {
    tty_dir: "bus/pci/devices/0000:00:1e.0/dw-apb-uart.6/tty",
    rx: "UART_RX",
    tx: "UART_TX",
    cts: "UART_CTS",
    rts: "UART_RTS",
}];

const AIO_CHANNELS: &[AioChannelDef] = &[AioChannelDef {
    pin: "ADC0",
    channel: 0,
}];

// The single ADC channel lives on iio:device0 and its attribute carries no
// channel index, so the default `in_voltage<N>_raw` pattern does not apply.
fn aio_path(_channel: u32) -> String {
    "/sys/bus/iio/devices/iio:device0/in_voltage_raw".to_string()
}

const DRIVERS: &[DriverProbe] = &[
    DriverProbe {
        label: "upboard-pinctrl",
        path: "bus/platform/drivers/upboard-pinctrl",
    },
    DriverProbe {
        label: "gpio-aaeon",
        path: "bus/platform/drivers/gpio-aaeon",
    },
];

/// The UP Xtreme i11 definition table.
///
/// Driver policy is `RequireAny`: without the UP pinctrl driver (or the
/// AAEON WMI fallback) the header is not routed to the SoC and nothing
/// built from this table would work.
pub const DEFINITION: BoardDefinition = BoardDefinition {
    platform_name: PLATFORM_NAME,
    platform_version: PLATFORM_VERSION,
    phy_pin_count: PHY_PIN_COUNT,
    gpio_count: GPIO_COUNT,
    pins: PINS,
    i2c_buses: I2C_BUSES,
    spi_buses: SPI_BUSES,
    uart_devices: UART_DEVICES,
    pwm_channels: &[],
    aio_channels: AIO_CHANNELS,
    pwm_limits: None,
    adc_resolution: Some(AdcResolution {
        raw_bits: 8,
        supported_bits: 8,
    }),
    drivers: DRIVERS,
    driver_policy: DriverPolicy::RequireAny,
    hooks: BoardHooks {
        aio_path: Some(aio_path),
    },
};
