//! Generic board builder -- one state machine, many boards.
//!
//! [`build`] turns a declarative [`BoardDefinition`] into an immutable
//! [`BoardDescriptor`], passing through the states
//! `Allocating → PopulatingPins → ResolvingBuses → DetectingOptionalDrivers`
//! and terminating in `Ready` or `Failed`.
//!
//! Failure handling is two-tier. Allocation failure (and an unmet
//! `RequireAny` driver policy) is fatal: the builder drops all partial
//! state and returns `Err`, so no partially populated descriptor ever
//! escapes. Everything else -- a pin name that does not resolve, an I2C
//! controller the kernel did not enumerate, a missing UART node -- is
//! degraded: the affected bus is omitted, a warning is logged and recorded
//! on the descriptor, and construction proceeds.

use tracing::{debug, info, warn};

use crate::board::{
    AioChannelEntry, BoardDescriptor, I2cBusEntry, PwmChannelEntry, SpiBusEntry, UartDeviceEntry,
    MAX_AIO_CHANNELS, MAX_I2C_BUSES, MAX_PWM_CHANNELS, MAX_SPI_BUSES, MAX_UART_DEVICES,
};
use crate::caps::CapabilitySet;
use crate::definition::{BoardDefinition, DriverPolicy};
use crate::discovery;
use crate::error::{Error, Result};
use crate::pin::{AioBinding, PinDescriptor, PwmBinding, MAX_PIN_NAME_LEN};
use crate::sysfs::Sysfs;

/// Construction phases, in order. Only `Allocating` and
/// `DetectingOptionalDrivers` (under `RequireAny`) can end in `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildState {
    Allocating,
    PopulatingPins,
    ResolvingBuses,
    DetectingOptionalDrivers,
    Ready,
}

struct Builder<'a> {
    def: &'a BoardDefinition,
    sysfs: &'a Sysfs,
    board: BoardDescriptor,
}

/// Build a board descriptor from its definition table.
///
/// Runs Bus Discovery against `sysfs` for every kernel-backed bus the
/// definition declares. Synchronous, single-pass; intended to run once per
/// board-selection event.
///
/// # Errors
///
/// [`Error::Allocation`] when the pin storage cannot be reserved, and
/// [`Error::PlatformUnsupported`] when the board's
/// [`DriverPolicy::RequireAny`] finds none of its declared drivers. All
/// other conditions degrade the descriptor instead of failing.
pub fn build(def: &BoardDefinition, sysfs: &Sysfs) -> Result<BoardDescriptor> {
    let mut state = BuildState::Allocating;
    debug!(board = def.platform_name, ?state, "board construction started");

    let mut builder = Builder::allocate(def, sysfs)?;

    state = BuildState::PopulatingPins;
    debug!(board = def.platform_name, ?state, "pin storage allocated");
    builder.populate_pins();

    state = BuildState::ResolvingBuses;
    debug!(board = def.platform_name, ?state, "pins populated");
    builder.resolve_i2c();
    builder.resolve_spi();
    builder.resolve_uart();
    builder.resolve_pwm();
    builder.resolve_aio();

    state = BuildState::DetectingOptionalDrivers;
    debug!(board = def.platform_name, ?state, "buses resolved");
    builder.detect_drivers()?;

    state = BuildState::Ready;
    let board = builder.board;
    info!(
        board = def.platform_name,
        ?state,
        i2c = board.i2c_buses.len(),
        spi = board.spi_buses.len(),
        uart = board.uart_devices.len(),
        pwm = board.pwm_channels.len(),
        aio = board.aio_channels.len(),
        warnings = board.warnings.len(),
        "board construction complete"
    );
    Ok(board)
}

impl<'a> Builder<'a> {
    /// `Allocating`: reserve the descriptor and its pin storage, sized
    /// exactly to the physical pin count plus the index-0 sentinel.
    fn allocate(def: &'a BoardDefinition, sysfs: &'a Sysfs) -> Result<Self> {
        let mut pins: Vec<PinDescriptor> = Vec::new();
        pins.try_reserve_exact(def.phy_pin_count + 1)
            .map_err(|source| Error::Allocation {
                board: def.platform_name,
                source,
            })?;
        pins.resize_with(def.phy_pin_count + 1, PinDescriptor::invalid);

        Ok(Builder {
            def,
            sysfs,
            board: BoardDescriptor {
                platform_name: def.platform_name,
                platform_version: def.platform_version,
                pins,
                gpio_count: def.gpio_count,
                i2c_buses: Vec::new(),
                spi_buses: Vec::new(),
                uart_devices: Vec::new(),
                pwm_channels: Vec::new(),
                aio_channels: Vec::new(),
                pwm_limits: def.pwm_limits,
                adc_resolution: def.adc_resolution,
                default_i2c_bus: 0,
                default_spi_bus: 0,
                default_uart: 0,
                warnings: Vec::new(),
                hooks: def.hooks,
            },
        })
    }

    fn record_warning(&mut self, message: String) {
        warn!(board = self.def.platform_name, "{message}");
        self.board.warnings.push(message);
    }

    /// `PopulatingPins`: copy each table row into the pin sequence.
    ///
    /// Rows with an out-of-range position or an over-long name are
    /// rejected and the position stays at the invalid sentinel; duplicate
    /// names are surfaced as a warning (the earliest index wins at
    /// resolution time).
    fn populate_pins(&mut self) {
        for row in self.def.pins {
            if row.position == 0 || row.position > self.def.phy_pin_count {
                self.record_warning(format!(
                    "pin {:?} declared at out-of-range position {}",
                    row.name, row.position
                ));
                continue;
            }
            if row.name.is_empty() || row.name.len() > MAX_PIN_NAME_LEN {
                self.record_warning(format!(
                    "pin at position {} has invalid name length {}",
                    row.position,
                    row.name.len()
                ));
                continue;
            }
            // Rail names (GND, 5v, ...) repeat by design; only functional
            // pins participate in name resolution, so only they are held
            // to uniqueness. Tables may declare positions in any order, so
            // every populated slot except the row's own is checked.
            if !row.caps.is_none()
                && self
                    .board
                    .pins
                    .iter()
                    .enumerate()
                    .any(|(i, p)| {
                        i != row.position && p.name == row.name && !p.capabilities.is_none()
                    })
            {
                self.record_warning(format!(
                    "duplicate pin name {:?} at position {}",
                    row.name, row.position
                ));
            }

            let pin = &mut self.board.pins[row.position];
            pin.name = row.name.to_string();
            pin.capabilities = row.caps;
            // Bindings follow the capability flags; anything else in the
            // table row is ignored.
            pin.gpio = if row.caps.gpio { row.gpio } else { None };
            pin.aio = if row.caps.aio { row.aio } else { None };
            pin.i2c_role = if row.caps.i2c { row.i2c_role } else { None };
            pin.spi_role = if row.caps.spi { row.spi_role } else { None };
            pin.uart_role = if row.caps.uart { row.uart_role } else { None };
        }
    }

    /// Resolve a named pin and enforce the capability invariant for the
    /// bus type referencing it. Returns `None` (with a recorded warning)
    /// on a lookup miss or a capability violation.
    fn resolve_pin(
        &mut self,
        name: &str,
        bus: &str,
        has_cap: fn(&CapabilitySet) -> bool,
    ) -> Option<usize> {
        let Some(index) = self.board.pin_index(name) else {
            self.record_warning(format!("{bus}: pin {name:?} not found"));
            return None;
        };
        if !has_cap(&self.board.pins[index].capabilities) {
            self.record_warning(format!(
                "{bus}: pin {name:?} at index {index} lacks the required capability"
            ));
            return None;
        }
        Some(index)
    }

    fn resolve_i2c(&mut self) {
        for bus in self.def.i2c_buses {
            if self.board.i2c_buses.len() >= MAX_I2C_BUSES {
                self.record_warning(format!(
                    "I2C bus table exceeds {MAX_I2C_BUSES} entries; dropping {}",
                    bus.adapter_name
                ));
                continue;
            }
            let Some(bus_id) = discovery::find_i2c_bus_pci(
                self.sysfs,
                bus.domain_prefix,
                bus.pci_address,
                bus.adapter_name,
            ) else {
                self.record_warning(format!(
                    "failed to find I2C controller {} at {}",
                    bus.adapter_name, bus.pci_address
                ));
                continue;
            };
            let label = format!("i2c-{bus_id}");
            let (Some(sda), Some(scl)) = (
                self.resolve_pin(bus.sda, &label, |c| c.i2c),
                self.resolve_pin(bus.scl, &label, |c| c.i2c),
            ) else {
                continue;
            };
            self.board.i2c_buses.push(I2cBusEntry { bus_id, sda, scl });
        }
    }

    fn resolve_spi(&mut self) {
        for bus in self.def.spi_buses {
            if self.board.spi_buses.len() >= MAX_SPI_BUSES {
                self.record_warning(format!(
                    "SPI bus table exceeds {MAX_SPI_BUSES} entries; dropping spidev{}.{}",
                    bus.bus_id, bus.slave_select
                ));
                continue;
            }
            let label = format!("spidev{}.{}", bus.bus_id, bus.slave_select);
            let (Some(cs), Some(mosi), Some(miso), Some(sclk)) = (
                self.resolve_pin(bus.cs, &label, |c| c.spi),
                self.resolve_pin(bus.mosi, &label, |c| c.spi),
                self.resolve_pin(bus.miso, &label, |c| c.spi),
                self.resolve_pin(bus.sclk, &label, |c| c.spi),
            ) else {
                continue;
            };
            self.board.spi_buses.push(SpiBusEntry {
                bus_id: bus.bus_id,
                slave_select: bus.slave_select,
                cs,
                mosi,
                miso,
                sclk,
            });
        }
    }

    fn resolve_uart(&mut self) {
        for dev in self.def.uart_devices {
            if self.board.uart_devices.len() >= MAX_UART_DEVICES {
                self.record_warning(format!(
                    "UART table exceeds {MAX_UART_DEVICES} entries; dropping {}",
                    dev.tty_dir
                ));
                continue;
            }
            let Some(device_path) = discovery::find_uart_device(self.sysfs, dev.tty_dir) else {
                self.record_warning(format!("failed to find UART controller under {}", dev.tty_dir));
                continue;
            };
            let (Some(rx), Some(tx), Some(cts), Some(rts)) = (
                self.resolve_pin(dev.rx, &device_path, |c| c.uart),
                self.resolve_pin(dev.tx, &device_path, |c| c.uart),
                self.resolve_pin(dev.cts, &device_path, |c| c.uart),
                self.resolve_pin(dev.rts, &device_path, |c| c.uart),
            ) else {
                continue;
            };
            self.board.uart_devices.push(UartDeviceEntry {
                device_path,
                rx,
                tx,
                cts,
                rts,
            });
        }
    }

    fn resolve_pwm(&mut self) {
        for ch in self.def.pwm_channels {
            if self.board.pwm_channels.len() >= MAX_PWM_CHANNELS {
                self.record_warning(format!(
                    "PWM table exceeds {MAX_PWM_CHANNELS} entries; dropping channel {}",
                    ch.channel
                ));
                continue;
            }
            let label = format!("pwm{}:{}", ch.controller, ch.channel);
            let Some(pin) = self.resolve_pin(ch.pin, &label, |c| c.pwm) else {
                continue;
            };
            self.board.pins[pin].pwm = Some(PwmBinding {
                controller: ch.controller,
                channel: ch.channel,
            });
            self.board.pwm_channels.push(PwmChannelEntry {
                controller: ch.controller,
                channel: ch.channel,
                pin,
            });
        }
    }

    fn resolve_aio(&mut self) {
        for ch in self.def.aio_channels {
            if self.board.aio_channels.len() >= MAX_AIO_CHANNELS {
                self.record_warning(format!(
                    "AIO table exceeds {MAX_AIO_CHANNELS} entries; dropping channel {}",
                    ch.channel
                ));
                continue;
            }
            let label = format!("aio{}", ch.channel);
            let Some(pin) = self.resolve_pin(ch.pin, &label, |c| c.aio) else {
                continue;
            };
            self.board.pins[pin].aio = Some(AioBinding {
                channel: ch.channel,
            });
            self.board.aio_channels.push(AioChannelEntry {
                channel: ch.channel,
                pin,
            });
        }
    }

    /// `DetectingOptionalDrivers`: probe for board-specific kernel drivers.
    ///
    /// Presence is informational; under [`DriverPolicy::RequireAny`] the
    /// board is unusable when every probe misses.
    fn detect_drivers(&mut self) -> Result<()> {
        let mut any_present = false;
        for probe in self.def.drivers {
            let present = discovery::driver_present(self.sysfs, probe.path);
            any_present |= present;
            info!(
                board = self.def.platform_name,
                driver = probe.label,
                present,
                "platform driver probe"
            );
            if !present {
                self.board
                    .warnings
                    .push(format!("platform driver {} unavailable", probe.label));
            }
        }
        if self.def.driver_policy == DriverPolicy::RequireAny
            && !self.def.drivers.is_empty()
            && !any_present
        {
            warn!(
                board = self.def.platform_name,
                "platform failed to initialise: no required driver present"
            );
            return Err(Error::PlatformUnsupported {
                board: self.def.platform_name,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{AdcResolution, BoardHooks, PwmPeriodLimits};
    use crate::definition::{
        AioChannelDef, DriverProbe, I2cBusDef, PinDef, PwmChannelDef, SpiBusDef, UartDef,
    };
    use crate::pin::{I2cRole, SpiRole, UartRole};
    use std::fs;
    use std::path::Path;

    const TEST_PINS: &[PinDef] = &[
        PinDef::power(1, "3.3v"),
        PinDef::power(2, "GND"),
        PinDef::gpio(3, "I2C_SDA", 1, 22, 354).i2c(I2cRole::Sda),
        PinDef::gpio(4, "I2C_SCL", 1, 23, 355).i2c(I2cRole::Scl),
        PinDef::gpio(5, "UART_TX", 3, 13, 218).uart(UartRole::Tx),
        PinDef::gpio(6, "UART_RX", 3, 12, 217).uart(UartRole::Rx),
        PinDef::gpio(7, "UART_CTS", 3, 15, 220).uart(UartRole::Cts),
        PinDef::gpio(8, "UART_RTS", 3, 14, 219).uart(UartRole::Rts),
        PinDef::gpio(9, "SPI0_CS0", 0, 19, 464).spi(SpiRole::Cs),
        PinDef::gpio(10, "SPI0_MOSI", 0, 22, 467).spi(SpiRole::Mosi),
        PinDef::gpio(11, "SPI0_MISO", 0, 21, 466).spi(SpiRole::Miso),
        PinDef::gpio(12, "SPI0_CLK", 0, 20, 465).spi(SpiRole::Sclk),
        PinDef::gpio(13, "PWM0", 3, 5, 210).with_pwm(),
        PinDef::gpio(14, "ADC0", 0, 163, 315).with_aio(),
    ];

    const TEST_I2C: &[I2cBusDef] = &[I2cBusDef {
        domain_prefix: "0000:00",
        pci_address: "0000:00:15.3",
        adapter_name: "i2c_designware.4",
        sda: "I2C_SDA",
        scl: "I2C_SCL",
    }];

    const TEST_SPI: &[SpiBusDef] = &[SpiBusDef {
        bus_id: 2,
        slave_select: 0,
        cs: "SPI0_CS0",
        mosi: "SPI0_MOSI",
        miso: "SPI0_MISO",
        sclk: "SPI0_CLK",
    }];

    const TEST_UART: &[UartDef] = &[UartDef {
        tty_dir: "bus/pci/devices/0000:00:1e.1/dw-apb-uart.9/tty",
        rx: "UART_RX",
        tx: "UART_TX",
        cts: "UART_CTS",
        rts: "UART_RTS",
    }];

    const TEST_PWM: &[PwmChannelDef] = &[PwmChannelDef {
        pin: "PWM0",
        controller: 0,
        channel: 1,
    }];

    const TEST_AIO: &[AioChannelDef] = &[AioChannelDef {
        pin: "ADC0",
        channel: 0,
    }];

    fn test_def() -> BoardDefinition {
        BoardDefinition {
            platform_name: "TESTBOARD",
            platform_version: "1.0.0",
            phy_pin_count: 14,
            gpio_count: 12,
            pins: TEST_PINS,
            i2c_buses: TEST_I2C,
            spi_buses: TEST_SPI,
            uart_devices: TEST_UART,
            pwm_channels: TEST_PWM,
            aio_channels: TEST_AIO,
            pwm_limits: Some(PwmPeriodLimits {
                default_us: 5000,
                min_us: 1,
                max_us: 218453,
            }),
            adc_resolution: Some(AdcResolution {
                raw_bits: 8,
                supported_bits: 8,
            }),
            drivers: &[],
            driver_policy: DriverPolicy::Ignore,
            hooks: BoardHooks { aio_path: None },
        }
    }

    fn stage(root: &Path, rel: &str) {
        fs::create_dir_all(root.join(rel)).unwrap();
    }

    fn full_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        stage(
            dir.path(),
            "devices/pci0000:00/0000:00:15.3/i2c_designware.4/i2c-5",
        );
        stage(
            dir.path(),
            "bus/pci/devices/0000:00:1e.1/dw-apb-uart.9/tty/ttyS4",
        );
        dir
    }

    #[test]
    fn test_build_full_tree() {
        let dir = full_tree();
        let board = build(&test_def(), &Sysfs::with_root(dir.path())).unwrap();

        assert_eq!(board.phy_pin_count(), 14);
        assert_eq!(board.pins.len(), 15);
        // Scenario A: one I2C bus, pins resolve to I2C_SDA / I2C_SCL.
        assert_eq!(board.i2c_buses.len(), 1);
        let i2c = board.i2c_buses[0];
        assert_eq!(i2c.bus_id, 5);
        assert_eq!(board.pins[i2c.sda].name, "I2C_SDA");
        assert_eq!(board.pins[i2c.scl].name, "I2C_SCL");
        // Scenario D: all four UART pins populated, non-empty device path.
        assert_eq!(board.uart_devices.len(), 1);
        let uart = &board.uart_devices[0];
        assert_eq!(uart.device_path, "/dev/ttyS4");
        assert_eq!(board.pins[uart.rx].name, "UART_RX");
        assert_eq!(board.pins[uart.tx].name, "UART_TX");
        assert_eq!(board.pins[uart.cts].name, "UART_CTS");
        assert_eq!(board.pins[uart.rts].name, "UART_RTS");
        assert_eq!(board.spi_buses.len(), 1);
        assert_eq!(board.pwm_channels.len(), 1);
        assert_eq!(board.aio_channels.len(), 1);
        // Board metadata is carried onto the descriptor verbatim.
        assert_eq!(board.pwm_limits.unwrap().default_us, 5000);
        assert_eq!(board.adc_resolution.unwrap().supported_bits, 8);
        assert!(board.warnings.is_empty());
    }

    #[test]
    fn test_build_sentinel_pin_zero() {
        let dir = full_tree();
        let board = build(&test_def(), &Sysfs::with_root(dir.path())).unwrap();
        assert_eq!(board.pins[0].name, "INVALID");
        assert!(board.pins[0].capabilities.is_none());
    }

    #[test]
    fn test_build_empty_tree_degrades() {
        // Scenario B: absent I2C controller and UART node. Construction
        // still succeeds with empty collections and recorded warnings.
        let dir = tempfile::tempdir().unwrap();
        let board = build(&test_def(), &Sysfs::with_root(dir.path())).unwrap();

        assert!(board.i2c_buses.is_empty());
        assert!(board.uart_devices.is_empty());
        // SPI/PWM/AIO need no discovery and survive.
        assert_eq!(board.spi_buses.len(), 1);
        assert_eq!(board.pwm_channels.len(), 1);
        assert!(board
            .warnings
            .iter()
            .any(|w| w.contains("I2C controller")));
        assert!(board
            .warnings
            .iter()
            .any(|w| w.contains("UART controller")));
    }

    #[test]
    fn test_build_power_pin_has_no_caps() {
        // Scenario C: ground/power positions have all flags false and no
        // bindings.
        let dir = full_tree();
        let board = build(&test_def(), &Sysfs::with_root(dir.path())).unwrap();
        let gnd = board.pin_index("GND").unwrap();
        let pin = &board.pins[gnd];
        assert!(pin.capabilities.is_none());
        assert!(pin.gpio.is_none() && pin.pwm.is_none() && pin.aio.is_none());
    }

    #[test]
    fn test_build_capability_invariant_on_all_entries() {
        let dir = full_tree();
        let board = build(&test_def(), &Sysfs::with_root(dir.path())).unwrap();
        for bus in &board.i2c_buses {
            assert!(board.pins[bus.sda].capabilities.i2c);
            assert!(board.pins[bus.scl].capabilities.i2c);
        }
        for bus in &board.spi_buses {
            for idx in [bus.cs, bus.mosi, bus.miso, bus.sclk] {
                assert!(board.pins[idx].capabilities.spi);
            }
        }
        for dev in &board.uart_devices {
            for idx in [dev.rx, dev.tx, dev.cts, dev.rts] {
                assert!(board.pins[idx].capabilities.uart);
            }
        }
        for ch in &board.pwm_channels {
            assert!(board.pins[ch.pin].capabilities.pwm);
        }
        for ch in &board.aio_channels {
            assert!(board.pins[ch.pin].capabilities.aio);
        }
    }

    #[test]
    fn test_build_pwm_binding_assigned() {
        let dir = full_tree();
        let board = build(&test_def(), &Sysfs::with_root(dir.path())).unwrap();
        let pwm0 = board.pin_index("PWM0").unwrap();
        let binding = board.pins[pwm0].pwm.unwrap();
        assert_eq!(binding.controller, 0);
        assert_eq!(binding.channel, 1);
    }

    #[test]
    fn test_build_missing_bus_pin_skips_bus() {
        let dir = full_tree();
        let mut def = test_def();
        const BROKEN_SPI: &[SpiBusDef] = &[SpiBusDef {
            bus_id: 0,
            slave_select: 0,
            cs: "SPI9_CS0",
            mosi: "SPI0_MOSI",
            miso: "SPI0_MISO",
            sclk: "SPI0_CLK",
        }];
        def.spi_buses = BROKEN_SPI;
        let board = build(&def, &Sysfs::with_root(dir.path())).unwrap();
        assert!(board.spi_buses.is_empty());
        assert!(board.warnings.iter().any(|w| w.contains("SPI9_CS0")));
    }

    #[test]
    fn test_build_capability_violation_skips_bus() {
        let dir = full_tree();
        let mut def = test_def();
        // GND resolves but has no PWM capability.
        const BROKEN_PWM: &[PwmChannelDef] = &[PwmChannelDef {
            pin: "GND",
            controller: 0,
            channel: 1,
        }];
        def.pwm_channels = BROKEN_PWM;
        let board = build(&def, &Sysfs::with_root(dir.path())).unwrap();
        assert!(board.pwm_channels.is_empty());
        assert!(board
            .warnings
            .iter()
            .any(|w| w.contains("lacks the required capability")));
    }

    #[test]
    fn test_build_out_of_range_position_rejected() {
        let dir = full_tree();
        let mut def = test_def();
        const OVERFLOW_PINS: &[PinDef] = &[
            PinDef::power(1, "3.3v"),
            PinDef::gpio(99, "GHOST", 0, 0, 0),
        ];
        def.pins = OVERFLOW_PINS;
        def.i2c_buses = &[];
        def.spi_buses = &[];
        def.uart_devices = &[];
        def.pwm_channels = &[];
        def.aio_channels = &[];
        let board = build(&def, &Sysfs::with_root(dir.path())).unwrap();
        assert_eq!(board.pin_index("GHOST"), None);
        assert!(board.warnings.iter().any(|w| w.contains("out-of-range")));
    }

    #[test]
    fn test_build_duplicate_name_warns_earliest_wins() {
        let dir = tempfile::tempdir().unwrap();
        let mut def = test_def();
        const DUP_PINS: &[PinDef] = &[
            PinDef::gpio(1, "GPIO4", 0, 1, 1),
            PinDef::gpio(2, "GPIO4", 0, 2, 2),
        ];
        def.pins = DUP_PINS;
        def.phy_pin_count = 2;
        def.i2c_buses = &[];
        def.spi_buses = &[];
        def.uart_devices = &[];
        def.pwm_channels = &[];
        def.aio_channels = &[];
        let board = build(&def, &Sysfs::with_root(dir.path())).unwrap();
        assert_eq!(board.pin_index("GPIO4"), Some(1));
        assert!(board.warnings.iter().any(|w| w.contains("duplicate")));
    }

    #[test]
    fn test_build_duplicate_name_warns_regardless_of_declaration_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut def = test_def();
        // Higher position declared first; the duplicate at the lower
        // position must still be flagged.
        const DUP_PINS: &[PinDef] = &[
            PinDef::gpio(2, "GPIO4", 0, 2, 2),
            PinDef::gpio(1, "GPIO4", 0, 1, 1),
        ];
        def.pins = DUP_PINS;
        def.phy_pin_count = 2;
        def.i2c_buses = &[];
        def.spi_buses = &[];
        def.uart_devices = &[];
        def.pwm_channels = &[];
        def.aio_channels = &[];
        let board = build(&def, &Sysfs::with_root(dir.path())).unwrap();
        assert_eq!(board.pin_index("GPIO4"), Some(1));
        assert!(board.warnings.iter().any(|w| w.contains("duplicate")));
    }

    #[test]
    fn test_build_capacity_overflow_drops_excess() {
        let dir = tempfile::tempdir().unwrap();
        let mut def = test_def();
        // One more channel than the collection admits; all resolve to the
        // same AIO-capable pin.
        const OVERFULL_AIO: &[AioChannelDef] = &[
            AioChannelDef { pin: "ADC0", channel: 0 },
            AioChannelDef { pin: "ADC0", channel: 1 },
            AioChannelDef { pin: "ADC0", channel: 2 },
            AioChannelDef { pin: "ADC0", channel: 3 },
            AioChannelDef { pin: "ADC0", channel: 4 },
            AioChannelDef { pin: "ADC0", channel: 5 },
            AioChannelDef { pin: "ADC0", channel: 6 },
            AioChannelDef { pin: "ADC0", channel: 7 },
            AioChannelDef { pin: "ADC0", channel: 8 },
        ];
        def.aio_channels = OVERFULL_AIO;
        def.i2c_buses = &[];
        def.uart_devices = &[];
        let board = build(&def, &Sysfs::with_root(dir.path())).unwrap();
        assert_eq!(board.aio_channels.len(), MAX_AIO_CHANNELS);
        assert!(board
            .warnings
            .iter()
            .any(|w| w.contains("AIO table exceeds")));
    }

    #[test]
    fn test_build_driver_policy_require_any_fails_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut def = test_def();
        const DRIVERS: &[DriverProbe] = &[DriverProbe {
            label: "upboard-pinctrl",
            path: "bus/platform/drivers/upboard-pinctrl",
        }];
        def.drivers = DRIVERS;
        def.driver_policy = DriverPolicy::RequireAny;
        let err = build(&def, &Sysfs::with_root(dir.path())).unwrap_err();
        assert!(matches!(err, Error::PlatformUnsupported { .. }));
    }

    #[test]
    fn test_build_driver_policy_require_any_passes_when_present() {
        let dir = tempfile::tempdir().unwrap();
        stage(dir.path(), "bus/platform/drivers/upboard-pinctrl");
        let mut def = test_def();
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
        def.drivers = DRIVERS;
        def.driver_policy = DriverPolicy::RequireAny;
        let board = build(&def, &Sysfs::with_root(dir.path())).unwrap();
        // The missing second driver is a notice, not a failure.
        assert!(board
            .warnings
            .iter()
            .any(|w| w.contains("gpio-aaeon")));
    }

    #[test]
    fn test_build_driver_policy_ignore_never_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut def = test_def();
        const DRIVERS: &[DriverProbe] = &[DriverProbe {
            label: "gpio-aaeon",
            path: "bus/platform/drivers/gpio-aaeon",
        }];
        def.drivers = DRIVERS;
        def.driver_policy = DriverPolicy::Ignore;
        assert!(build(&def, &Sysfs::with_root(dir.path())).is_ok());
    }

    #[test]
    fn test_build_idempotent_against_same_tree() {
        let dir = full_tree();
        let sysfs = Sysfs::with_root(dir.path());
        let a = build(&test_def(), &sysfs).unwrap();
        let b = build(&test_def(), &sysfs).unwrap();
        assert_eq!(a.i2c_buses, b.i2c_buses);
        assert_eq!(a.uart_devices, b.uart_devices);
        assert_eq!(a.warnings, b.warnings);
    }
}
