//! Error types for boardmap.
//!
//! Board construction distinguishes two failure tiers:
//!
//! - **Fatal** ([`Error::Allocation`], [`Error::PlatformUnsupported`]):
//!   construction aborts and the caller receives no descriptor.
//! - **Degraded**: pin-name misses, discovery misses, and absent optional
//!   drivers are logged and recorded as warnings on the descriptor; they
//!   never surface as an `Err`.
//!
//! Lookup helpers outside the builder ([`Error::PinNotFound`],
//! [`Error::UnknownBoard`]) use the same enum so callers get one error
//! surface for the whole crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by boardmap.
#[derive(Debug, Error)]
pub enum Error {
    /// Reserving the pin-sequence storage failed. The only resource-level
    /// fatal error class: construction aborts and returns no descriptor.
    #[error("failed to allocate pin storage for {board}: {source}")]
    Allocation {
        /// Platform name of the board being built.
        board: &'static str,
        #[source]
        source: std::collections::TryReserveError,
    },

    /// The board's driver policy requires an optional platform driver and
    /// none of the declared probes found one.
    #[error("{board}: no required platform driver present")]
    PlatformUnsupported {
        /// Platform name of the board being built.
        board: &'static str,
    },

    /// A pin name was not found in the board's pin sequence.
    #[error("pin {name:?} not found on {board}")]
    PinNotFound {
        /// The name that failed to resolve.
        name: String,
        /// Platform name of the board searched.
        board: String,
    },

    /// The requested board identifier matches no known board.
    #[error("unknown board {0:?}")]
    UnknownBoard(String),
}
