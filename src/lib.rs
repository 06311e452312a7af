//! boardmap — board descriptor layer for x86 single-board computers.
//!
//! Models the physical pin header of a supported board as an immutable
//! [`board::BoardDescriptor`]: per-pin capability flags and subsystem
//! addressing, plus the board's I2C, SPI, UART, PWM, and analog bindings.
//! Kernel bus numbers are never hardcoded; they are discovered from sysfs
//! PCI topology at build time, so descriptors stay correct across kernel
//! versions that renumber adapters.
//!
//! Typical use:
//!
//! ```no_run
//! use boardmap::{boards, boards::BoardKind, sysfs::Sysfs};
//!
//! let board = boards::build(BoardKind::Up2_6000, &Sysfs::system())?;
//! let sda = board.pin_index("I2C_SDA").unwrap();
//! assert!(board.pins[sda].capabilities.i2c);
//! # Ok::<(), boardmap::Error>(())
//! ```

pub mod active;
pub mod board;
pub mod boards;
pub mod builder;
pub mod caps;
pub mod definition;
pub mod discovery;
pub mod error;
pub mod pin;
pub mod sysfs;

pub use board::BoardDescriptor;
pub use boards::BoardKind;
pub use caps::CapabilitySet;
pub use error::{Error, Result};
pub use pin::PinDescriptor;
