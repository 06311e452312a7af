//! Dynamic bus discovery -- match logical buses to live kernel devices.
//!
//! Kernel enumeration order for I2C adapters and serial ports is not
//! stable across kernel versions or boot configurations, so board tables
//! never declare raw bus numbers. They declare the stable part -- the PCI
//! topology and the controller driver-instance name -- and discovery walks
//! the device tree at build time to learn the number currently assigned.
//!
//! Every probe is read-only and idempotent: re-running against an
//! unchanged tree yields the same result. A miss is reported as `None`,
//! never as an error; an absent controller degrades the board (one fewer
//! bus) instead of failing construction.

use tracing::debug;

use crate::sysfs::Sysfs;

/// Find the kernel adapter number of a PCI-backed I2C controller.
///
/// Inspects `<root>/devices/pci<domain_prefix>/<pci_address>/<adapter_name>/`
/// and extracts `N` from the first `i2c-N` child entry. The directory only
/// exists when the PCI function at `pci_address` is bound to the expected
/// driver instance, so a hit identifies both topology and driver at once.
///
/// Returns `None` when the controller is absent or exposes no adapter.
pub fn find_i2c_bus_pci(
    sysfs: &Sysfs,
    domain_prefix: &str,
    pci_address: &str,
    adapter_name: &str,
) -> Option<u32> {
    let dir = format!("devices/pci{domain_prefix}/{pci_address}/{adapter_name}");
    for entry in sysfs.entries(&dir) {
        if let Some(num) = entry.strip_prefix("i2c-") {
            if let Ok(bus) = num.parse::<u32>() {
                debug!(adapter = adapter_name, bus, "I2C adapter found");
                return Some(bus);
            }
        }
    }
    debug!(adapter = adapter_name, address = pci_address, "I2C adapter not found");
    None
}

/// Find the terminal device node of a UART controller.
///
/// `tty_dir` is the controller's root-relative `tty/` directory (e.g.
/// `"bus/pci/devices/0000:00:1e.1/dw-apb-uart.9/tty"`). Returns
/// `/dev/<name>` for the first `tty*` entry beneath it, or `None` when the
/// controller or its terminal node is absent.
pub fn find_uart_device(sysfs: &Sysfs, tty_dir: &str) -> Option<String> {
    for entry in sysfs.entries(tty_dir) {
        if entry.starts_with("tty") {
            debug!(dir = tty_dir, node = %entry, "UART device found");
            return Some(format!("/dev/{entry}"));
        }
    }
    debug!(dir = tty_dir, "UART device not found");
    None
}

/// Existence check for an optional platform driver.
///
/// `driver_path` is root-relative (e.g.
/// `"bus/platform/drivers/upboard-pinctrl"`).
pub fn driver_present(sysfs: &Sysfs, driver_path: &str) -> bool {
    sysfs.exists(driver_path)
}
