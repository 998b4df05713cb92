//! Fatal, init-time error taxonomy (spec §7: "Fatal at init").
//!
//! The interrupt handler and the reader never surface these — recoverable
//! producer-side conditions are logged and dropped (see [`crate::logging`]),
//! and recoverable consumer-side conditions surface as
//! [`crate::reader::ReadError`]. `DriverError` is reserved for the handful of
//! failures that keep the module from loading at all.

use thiserror::Error;

/// Failures that prevent the driver from coming up.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The keyboard IRQ line could not be requested (shared or otherwise).
    #[error("failed to request IRQ {irq}")]
    IrqRequestFailed {
        /// The IRQ number that was requested.
        irq: u32,
    },

    /// The misc character device could not be registered under `minor`.
    #[error("failed to register misc device on minor {minor}")]
    DeviceRegistrationFailed {
        /// The requested minor number.
        minor: u32,
    },
}

/// Shorthand for driver init results.
pub type DriverResult<T> = Result<T, DriverError>;
