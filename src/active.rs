//! Process-wide active board.
//!
//! Peripheral-access code needs one agreed-upon descriptor without
//! threading it through every call site, so the selected board is held in
//! a process-wide slot. The descriptor itself stays immutable; the slot
//! only swaps which `Arc` is current.

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::board::BoardDescriptor;

static ACTIVE: Lazy<RwLock<Option<Arc<BoardDescriptor>>>> = Lazy::new(|| RwLock::new(None));

/// Install `board` as the active board, returning the previous one if set.
pub fn set(board: BoardDescriptor) -> Option<Arc<BoardDescriptor>> {
    let mut slot = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    slot.replace(Arc::new(board))
}

/// The currently active board, if one has been installed.
pub fn get() -> Option<Arc<BoardDescriptor>> {
    let slot = ACTIVE.read().unwrap_or_else(|e| e.into_inner());
    slot.clone()
}

/// Clear the active board, returning it if one was set.
pub fn clear() -> Option<Arc<BoardDescriptor>> {
    let mut slot = ACTIVE.write().unwrap_or_else(|e| e.into_inner());
    slot.take()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardHooks;
    use crate::pin::PinDescriptor;

    fn dummy(name: &'static str) -> BoardDescriptor {
        BoardDescriptor {
            platform_name: name,
            platform_version: "0.0",
            pins: vec![PinDescriptor::invalid()],
            gpio_count: 0,
            i2c_buses: Vec::new(),
            spi_buses: Vec::new(),
            uart_devices: Vec::new(),
            pwm_channels: Vec::new(),
            aio_channels: Vec::new(),
            pwm_limits: None,
            adc_resolution: None,
            default_i2c_bus: 0,
            default_spi_bus: 0,
            default_uart: 0,
            warnings: Vec::new(),
            hooks: BoardHooks::default(),
        }
    }

    // One test exercises the whole lifecycle: the slot is process-global,
    // so independent tests would race each other.
    #[test]
    fn test_active_slot_lifecycle() {
        clear();
        assert!(get().is_none());

        assert!(set(dummy("FIRST")).is_none());
        let current = get().unwrap();
        assert_eq!(current.platform_name, "FIRST");
        // Repeated reads hand out the same allocation until replaced.
        assert!(Arc::ptr_eq(&current, &get().unwrap()));

        let previous = set(dummy("SECOND")).unwrap();
        assert_eq!(previous.platform_name, "FIRST");
        assert_eq!(get().unwrap().platform_name, "SECOND");

        // Holders of the old Arc keep a consistent snapshot.
        assert_eq!(current.platform_name, "FIRST");

        let removed = clear().unwrap();
        assert_eq!(removed.platform_name, "SECOND");
        assert!(get().is_none());
    }
}
