//! Pin descriptors -- identity, capabilities, and per-function addressing.
//!
//! A [`PinDescriptor`] models one physical header position: its name, its
//! [`CapabilitySet`], and the addressing data for each function the pin can
//! perform. Bindings are `Option`s populated only for capabilities that are
//! set; an absent binding is never consulted.

use serde::Serialize;

use crate::caps::CapabilitySet;

/// Maximum accepted pin-name length in bytes.
///
/// Names longer than this are rejected by the builder's bound check; the
/// limit mirrors the fixed-width name storage of the descriptor's consumers.
pub const MAX_PIN_NAME_LEN: usize = 48;

/// Name given to the index-0 sentinel position and to reserved positions.
pub const INVALID_PIN_NAME: &str = "INVALID";

/// GPIO addressing for a digital I/O capable pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GpioBinding {
    /// Kernel GPIO chip id (`/dev/gpiochipN`).
    pub chip: u32,
    /// Line offset within the chip.
    pub line: u32,
    /// Legacy global (sysfs) GPIO number.
    pub raw_pin: u32,
}

/// PWM addressing for a PWM-capable pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PwmBinding {
    /// PWM controller (pwmchip) id.
    pub controller: u32,
    /// Channel index within the controller.
    pub channel: u32,
}

/// Analog-input addressing for an AIO-capable pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AioBinding {
    /// ADC channel index.
    pub channel: u32,
}

/// The role an I2C-capable pin plays on its bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum I2cRole {
    Sda,
    Scl,
}

/// The role an SPI-capable pin plays on its bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiRole {
    Cs,
    Mosi,
    Miso,
    Sclk,
}

/// The role a UART-capable pin plays on its port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UartRole {
    Rx,
    Tx,
    Cts,
    Rts,
}

/// One physical header position, fully described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinDescriptor {
    /// Pin name, unique within a board (e.g. `"I2C_SDA"`, `"GPIO22"`).
    pub name: String,
    /// Functions this pin supports.
    pub capabilities: CapabilitySet,
    /// GPIO addressing; present only when `capabilities.gpio` is set.
    pub gpio: Option<GpioBinding>,
    /// PWM addressing; present only when `capabilities.pwm` is set.
    pub pwm: Option<PwmBinding>,
    /// Analog addressing; present only when `capabilities.aio` is set.
    pub aio: Option<AioBinding>,
    /// I2C role; present only when `capabilities.i2c` is set.
    pub i2c_role: Option<I2cRole>,
    /// SPI role; present only when `capabilities.spi` is set.
    pub spi_role: Option<SpiRole>,
    /// UART role; present only when `capabilities.uart` is set.
    pub uart_role: Option<UartRole>,
}

impl PinDescriptor {
    /// The invalid sentinel pin: all capabilities cleared, no bindings.
    ///
    /// Occupies index 0 of every board's pin sequence and any position the
    /// definition table leaves unset.
    pub fn invalid() -> Self {
        PinDescriptor {
            name: INVALID_PIN_NAME.to_string(),
            capabilities: CapabilitySet::none(),
            gpio: None,
            pwm: None,
            aio: None,
            i2c_role: None,
            spi_role: None,
            uart_role: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pin_has_no_function() {
        let pin = PinDescriptor::invalid();
        assert_eq!(pin.name, INVALID_PIN_NAME);
        assert!(pin.capabilities.is_none());
        assert!(pin.gpio.is_none());
        assert!(pin.pwm.is_none());
        assert!(pin.aio.is_none());
        assert!(pin.i2c_role.is_none());
        assert!(pin.spi_role.is_none());
        assert!(pin.uart_role.is_none());
    }

    #[test]
    fn test_pin_descriptor_serialize() {
        let pin = PinDescriptor {
            name: "I2C_SDA".into(),
            capabilities: CapabilitySet::gpio().with_i2c(),
            gpio: Some(GpioBinding {
                chip: 1,
                line: 22,
                raw_pin: 354,
            }),
            pwm: None,
            aio: None,
            i2c_role: Some(I2cRole::Sda),
            spi_role: None,
            uart_role: None,
        };
        let json = serde_json::to_value(&pin).unwrap();
        assert_eq!(json["name"], "I2C_SDA");
        assert_eq!(json["capabilities"]["i2c"], true);
        assert_eq!(json["gpio"]["line"], 22);
        assert_eq!(json["i2c_role"], "sda");
    }

    #[test]
    fn test_role_serialization_is_lowercase() {
        assert_eq!(serde_json::to_value(UartRole::Cts).unwrap(), "cts");
        assert_eq!(serde_json::to_value(SpiRole::Mosi).unwrap(), "mosi");
    }
}
