//! Supported board catalog.
//!
//! One submodule per board, each exporting a `DEFINITION` table. This
//! module maps board identifiers to those tables and fronts the generic
//! builder, so callers never touch a definition directly.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::board::BoardDescriptor;
use crate::builder;
use crate::definition::BoardDefinition;
use crate::error::{Error, Result};
use crate::sysfs::Sysfs;

pub mod up2_6000;
pub mod up_xtreme_i11;

/// Identifier for a supported board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoardKind {
    /// UP Squared 6000 (Elkhart Lake).
    Up2_6000,
    /// UP Xtreme i11 (Tiger Lake).
    UpXtremeI11,
}

impl BoardKind {
    /// Every supported board, in catalog order.
    pub const ALL: &'static [BoardKind] = &[BoardKind::Up2_6000, BoardKind::UpXtremeI11];

    /// The definition table for this board.
    pub fn definition(self) -> &'static BoardDefinition {
        match self {
            BoardKind::Up2_6000 => &up2_6000::DEFINITION,
            BoardKind::UpXtremeI11 => &up_xtreme_i11::DEFINITION,
        }
    }

    /// Stable identifier used on the command line and in serialized output.
    pub fn id(self) -> &'static str {
        match self {
            BoardKind::Up2_6000 => "up2-6000",
            BoardKind::UpXtremeI11 => "up-xtreme-i11",
        }
    }

    /// Platform name reported by the built descriptor.
    pub fn platform_name(self) -> &'static str {
        self.definition().platform_name
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BoardKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BoardKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s || kind.platform_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownBoard(s.to_string()))
    }
}

/// Construct the descriptor for `kind`, probing buses through `sysfs`.
pub fn build(kind: BoardKind, sysfs: &Sysfs) -> Result<BoardDescriptor> {
    builder::build(kind.definition(), sysfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_id() {
        for kind in BoardKind::ALL {
            assert_eq!(kind.id().parse::<BoardKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_kind_parses_platform_name() {
        assert_eq!("UP2_6000".parse::<BoardKind>().unwrap(), BoardKind::Up2_6000);
        assert_eq!(
            "upxtreme_i11".parse::<BoardKind>().unwrap(),
            BoardKind::UpXtremeI11
        );
    }

    #[test]
    fn test_unknown_board_is_an_error() {
        let err = "galileo".parse::<BoardKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownBoard(name) if name == "galileo"));
    }

    #[test]
    fn test_definitions_declare_full_headers() {
        for kind in BoardKind::ALL {
            let def = kind.definition();
            assert_eq!(def.phy_pin_count, 80);
            assert!(!def.pins.is_empty());
            assert!(!def.i2c_buses.is_empty());
        }
    }

    #[test]
    fn test_build_against_empty_tree_degrades() {
        // No staged devices: the UP2 6000 (driver policy Ignore) still
        // builds, just with every bus unresolved and warnings recorded.
        let dir = tempfile::tempdir().unwrap();
        let sysfs = Sysfs::with_root(dir.path());
        let board = build(BoardKind::Up2_6000, &sysfs).unwrap();
        assert_eq!(board.platform_name, "UP2_6000");
        assert!(board.i2c_buses.is_empty());
        assert!(board.uart_devices.is_empty());
        assert!(!board.warnings.is_empty());
    }

    #[test]
    fn test_build_requires_driver_for_xtreme() {
        let dir = tempfile::tempdir().unwrap();
        let sysfs = Sysfs::with_root(dir.path());
        let err = build(BoardKind::UpXtremeI11, &sysfs).unwrap_err();
        assert!(matches!(err, Error::PlatformUnsupported { .. }));
    }

    #[test]
    fn test_build_xtreme_with_pinctrl_driver() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bus/platform/drivers/upboard-pinctrl")).unwrap();
        let sysfs = Sysfs::with_root(dir.path());
        let board = build(BoardKind::UpXtremeI11, &sysfs).unwrap();
        assert_eq!(board.platform_name, "UPXTREME_I11");
        // ADC0 resolved through the channel table with the fixed iio path.
        assert_eq!(board.aio_channels.len(), 1);
        assert_eq!(board.adc_resolution.map(|a| a.raw_bits), Some(8));
        let idx = board.pin_index("ADC0").unwrap();
        assert_eq!(board.pins[idx].aio.map(|a| a.channel), Some(0));
    }

    #[test]
    fn test_build_up2_6000_with_staged_buses() {
        let dir = tempfile::tempdir().unwrap();
        for rel in [
            "devices/pci0000:00/0000:00:15.3/i2c_designware.4/i2c-5",
            "devices/pci0000:00/0000:00:19.1/i2c_designware.6/i2c-7",
            "devices/pci0000:00/0000:00:15.2/i2c_designware.3/i2c-1",
            "bus/pci/devices/0000:00:1e.1/dw-apb-uart.9/tty/ttyS4",
        ] {
            std::fs::create_dir_all(dir.path().join(rel)).unwrap();
        }
        let sysfs = Sysfs::with_root(dir.path());
        let board = build(BoardKind::Up2_6000, &sysfs).unwrap();

        assert_eq!(board.i2c_buses.len(), 3);
        assert_eq!(board.i2c_buses[0].bus_id, 5);
        assert_eq!(board.i2c_buses[1].bus_id, 7);
        assert_eq!(board.i2c_buses[2].bus_id, 1);
        assert_eq!(board.spi_buses.len(), 2);
        assert_eq!(board.uart_devices.len(), 1);
        assert_eq!(board.uart_devices[0].device_path, "/dev/ttyS4");
        assert_eq!(board.pwm_channels.len(), 6);
        assert_eq!(board.pwm_limits.map(|l| l.max_us), Some(218453));

        // Repeated rail names resolve to their earliest position and stay
        // capability-free.
        assert_eq!(board.pin_index("3.3v"), Some(1));
        assert!(board.pins[1].capabilities.is_none());
        assert_eq!(board.pin_index("I2C_SDA"), Some(3));
    }
}
