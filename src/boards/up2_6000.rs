//! UP Squared 6000 (Elkhart Lake) board definition.
//!
//! 40-pin HAT header plus a 40-position carrier-board block. Raw GPIO
//! numbers derive from the Elkhart Lake pinctrl community bases; chip/line
//! pairs address the kernel GPIO character devices. Carrier-board CAN,
//! QEP, and ADC positions are wired to an onboard MCU rather than the SoC
//! and expose no host-side function here (the PWM block excepted).

use crate::board::{BoardHooks, PwmPeriodLimits};
use crate::definition::{
    BoardDefinition, DriverPolicy, DriverProbe, I2cBusDef, PinDef, PwmChannelDef, SpiBusDef,
    UartDef,
};
use crate::pin::{I2cRole, SpiRole, UartRole};

const PLATFORM_NAME: &str = "UP2_6000";
const PLATFORM_VERSION: &str = "1.0.0";

const PHY_PIN_COUNT: usize = 80;
const GPIO_COUNT: u32 = 28;

// Elkhart Lake pinctrl community bases for the legacy global numbering.
const COMMUNITY0_BASE: u32 = 445;
const COMMUNITY1_BASE: u32 = 332;
const COMMUNITY4_BASE: u32 = 205;

#[rustfmt::skip]
const PINS: &[PinDef] = &[
    PinDef::power(1,  "3.3v"),
    PinDef::power(2,  "5v"),
    PinDef::gpio(3,  "I2C_SDA",   1, 22, COMMUNITY1_BASE + 22).i2c(I2cRole::Sda),
    PinDef::power(4,  "5v"),
    PinDef::gpio(5,  "I2C_SCL",   1, 23, COMMUNITY1_BASE + 23).i2c(I2cRole::Scl),
    PinDef::power(6,  "GND"),
    PinDef::gpio(7,  "GPIO4",     3, 31, COMMUNITY4_BASE + 31),
    PinDef::gpio(8,  "UART_TX",   3, 13, COMMUNITY4_BASE + 13).uart(UartRole::Tx),
    PinDef::power(9,  "GND"),
    PinDef::gpio(10, "UART_RX",   3, 12, COMMUNITY4_BASE + 12).uart(UartRole::Rx),
    PinDef::gpio(11, "UART_RTS",  3, 14, COMMUNITY4_BASE + 14).uart(UartRole::Rts),
    PinDef::gpio(12, "I2S_CLK",   0, 53, COMMUNITY0_BASE + 53),
    PinDef::gpio(13, "GPIO27",    3, 11, COMMUNITY4_BASE + 11),
    PinDef::power(14, "GND"),
    PinDef::gpio(15, "GPIO22",    3, 9,  COMMUNITY4_BASE + 9),
    PinDef::gpio(16, "GPIO19",    3, 78, COMMUNITY4_BASE + 78),
    PinDef::power(17, "3.3v"),
    PinDef::gpio(18, "GPIO24",    3, 77, COMMUNITY4_BASE + 77),
    PinDef::gpio(19, "SPI0_MOSI", 0, 22, COMMUNITY0_BASE + 22).spi(SpiRole::Mosi),
    PinDef::power(20, "GND"),
    PinDef::gpio(21, "SPI0_MISO", 0, 21, COMMUNITY0_BASE + 22).spi(SpiRole::Miso),
    PinDef::gpio(22, "GPIO25",    0, 11, COMMUNITY0_BASE + 11),
    PinDef::gpio(23, "SPI0_CLK",  0, 20, COMMUNITY0_BASE + 20).spi(SpiRole::Sclk),
    PinDef::gpio(24, "SPI0_CS0",  0, 19, COMMUNITY0_BASE + 19).spi(SpiRole::Cs),
    PinDef::power(25, "GND"),
    PinDef::gpio(26, "SPI0_CS1",  0, 23, COMMUNITY0_BASE + 23).spi(SpiRole::Cs),
    PinDef::gpio(27, "ID_SD",     0, 9,  COMMUNITY0_BASE + 9).i2c(I2cRole::Sda),
    PinDef::gpio(28, "ID_SC",     0, 10, COMMUNITY0_BASE + 9).i2c(I2cRole::Scl),
    PinDef::gpio(29, "GPIO5",     3, 42, COMMUNITY4_BASE + 42),
    PinDef::power(30, "GND"),
    PinDef::gpio(31, "GPIO6",     3, 43, COMMUNITY4_BASE + 43),
    PinDef::gpio(32, "PWM0",      3, 5,  COMMUNITY4_BASE + 5).with_pwm(),
    PinDef::gpio(33, "PWM1",      1, 44, COMMUNITY1_BASE + 44).with_pwm(),
    PinDef::power(34, "GND"),
    PinDef::gpio(35, "I2S_FRM",   0, 54, COMMUNITY0_BASE + 54),
    PinDef::gpio(36, "UART_CTS",  3, 15, COMMUNITY4_BASE + 15).uart(UartRole::Cts),
    PinDef::gpio(37, "GPIO26",    3, 34, COMMUNITY4_BASE + 34),
    PinDef::gpio(38, "I2S_DIN",   0, 56, COMMUNITY0_BASE + 56),
    PinDef::power(39, "GND"),
    PinDef::gpio(40, "I2S_DOUT",  0, 55, COMMUNITY0_BASE + 55),
    // Carrier board
    PinDef::power(41, "5v"),
    PinDef::power(42, "3.3v"),
    PinDef::power(43, "5v"),
    PinDef::power(44, "3.3v"),
    PinDef::power(45, "GND"),
    PinDef::power(46, "GND"),
    PinDef::power(47, "CAN0_TX"),
    PinDef::power(48, "CAN0_RX"),
    PinDef::power(49, "GND"),
    PinDef::power(50, "GND"),
    PinDef::power(51, "CAN1_TX"),
    PinDef::power(52, "CAN1_RX"),
    PinDef::power(53, "GND"),
    PinDef::power(54, "GND"),
    PinDef::power(55, "QEP_A0"),
    PinDef::power(56, "QEP_B0"),
    PinDef::power(57, "QEP_A1"),
    PinDef::power(58, "QEP_B1"),
    PinDef::power(59, "QEP_A2"),
    PinDef::power(60, "QEP_B2"),
    PinDef::power(61, "QEP_A3"),
    PinDef::power(62, "QEP_B3"),
    PinDef::power(63, "QEP_I0"),
    PinDef::power(64, "QEP_I2"),
    PinDef::power(65, "QEP_I1"),
    PinDef::power(66, "QEP_I3"),
    PinDef::pwm(67, "PWM4"),
    PinDef::pwm(68, "PWM2"),
    PinDef::pwm(69, "PWM5"),
    PinDef::pwm(70, "PWM3"),
    PinDef::power(71, "GND"),
    PinDef::power(72, "GND"),
    PinDef::power(73, "ADC0"),
    PinDef::power(74, "ADC2"),
    PinDef::power(75, "ADC1"),
    PinDef::power(76, "ADC3"),
    PinDef::power(77, "GND"),
    PinDef::power(78, "GND"),
    PinDef::bare(79, "I2C2_SDA").i2c(I2cRole::Sda),
    PinDef::bare(80, "I2C2_SCL").i2c(I2cRole::Scl),
];

const I2C_BUSES: &[I2cBusDef] = &[
    // Adapter #0 (default). For consistency with Raspberry Pi 2, the
    // header I2C1 lines are the primary bus.
    I2cBusDef {
        domain_prefix: "0000:00",
        pci_address: "0000:00:15.3",
        adapter_name: "i2c_designware.4",
        sda: "I2C_SDA",
        scl: "I2C_SCL",
    },
    // Adapter #1, normally reserved for the HAT identity EEPROM.
    I2cBusDef {
        domain_prefix: "0000:00",
        pci_address: "0000:00:19.1",
        adapter_name: "i2c_designware.6",
        sda: "ID_SD",
        scl: "ID_SC",
    },
    // Adapter #2, carrier-board bus.
    I2cBusDef {
        domain_prefix: "0000:00",
        pci_address: "0000:00:15.2",
        adapter_name: "i2c_designware.3",
        sda: "I2C2_SDA",
        scl: "I2C2_SCL",
    },
];

const SPI_BUSES: &[SpiBusDef] = &[
    SpiBusDef {
        bus_id: 2,
        slave_select: 0,
        cs: "SPI0_CS0",
        mosi: "SPI0_MOSI",
        miso: "SPI0_MISO",
        sclk: "SPI0_CLK",
    },
    SpiBusDef {
        bus_id: 1,
        slave_select: 1,
        cs: "SPI0_CS1",
        mosi: "SPI0_MOSI",
        miso: "SPI0_MISO",
        sclk: "SPI0_CLK",
    },
];

const UART_DEVICES: &[UartDef] = &[UartDef {
    tty_dir: "bus/pci/devices/0000:00:1e.1/dw-apb-uart.9/tty",
    rx: "UART_RX",
    tx: "UART_TX",
    cts: "UART_CTS",
    rts: "UART_RTS",
}];

const PWM_CHANNELS: &[PwmChannelDef] = &[
    PwmChannelDef { pin: "PWM0", controller: 0, channel: 1 },
    PwmChannelDef { pin: "PWM1", controller: 0, channel: 2 },
    PwmChannelDef { pin: "PWM2", controller: 0, channel: 3 },
    PwmChannelDef { pin: "PWM3", controller: 0, channel: 4 },
    PwmChannelDef { pin: "PWM4", controller: 0, channel: 5 },
    PwmChannelDef { pin: "PWM5", controller: 0, channel: 6 },
];

const DRIVERS: &[DriverProbe] = &[DriverProbe {
    label: "gpio-aaeon",
    path: "bus/platform/drivers/gpio-aaeon",
}];

/// The UP Squared 6000 definition table.
///
/// Driver policy is `Ignore`: the AAEON WMI GPIO driver is probed and
/// reported but never gates construction. Whether its absence should gate
/// on this platform is unconfirmed on hardware.
pub const DEFINITION: BoardDefinition = BoardDefinition {
    platform_name: PLATFORM_NAME,
    platform_version: PLATFORM_VERSION,
    phy_pin_count: PHY_PIN_COUNT,
    gpio_count: GPIO_COUNT,
    pins: PINS,
    i2c_buses: I2C_BUSES,
    spi_buses: SPI_BUSES,
    uart_devices: UART_DEVICES,
    pwm_channels: PWM_CHANNELS,
    aio_channels: &[],
    pwm_limits: Some(PwmPeriodLimits {
        default_us: 5000,
        min_us: 1,
        max_us: 218453,
    }),
    adc_resolution: None,
    drivers: DRIVERS,
    driver_policy: DriverPolicy::Ignore,
    hooks: BoardHooks { aio_path: None },
};
