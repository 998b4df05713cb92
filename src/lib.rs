//! PS/2 keyboard scan-code decoder and event-log core.
//!
//! This crate is the hard part of a PS/2 keyboard driver lifted out of its
//! kernel module: the multi-byte scan-code reassembly state machine, the
//! modifier/latch tracker, the interrupt-to-reader event log, and the lazy
//! text rendering of that log. Character-device registration, IRQ
//! request/release, the scan-code-table code generator and module load/unload
//! plumbing are treated as external collaborators and are not part of this
//! crate — see `device::KeyboardState` for the seam a host driver wires
//! itself into.

pub mod device;
pub mod error;
pub mod eventlog;
pub mod io;
pub mod logging;
pub mod modifiers;
pub mod reader;
pub mod reassembler;
pub mod scancode;

pub use device::{DeviceHandle, DriverConfig, KeyboardState};
pub use error::DriverError;
pub use eventlog::{EventLog, KeyEntry, Timestamp};
pub use modifiers::ModifierFlags;
pub use reader::ReadError;
pub use reassembler::PendingCode;
pub use scancode::{KeyState, ScanCodeSet, ScanKeyCode, SCAN_CODE_SET_1, SCAN_CODE_SET_2};
