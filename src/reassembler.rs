//! Multi-byte scan-code reassembly (spec §4.2).
//!
//! Mirrors `ps2_pending_code`/`ps2_add_to_pending_code`/`ps2_reset_pending_code`
//! in the original kernel module: bytes arrive one at a time from the IRQ
//! line and are packed big-endian into a `u64` until either a complete code
//! is recognized in the active [`crate::scancode::ScanCodeSet`] or the
//! accumulated prefix stops being a prefix of anything in that set.

use crate::logging;
use crate::scancode::{self, ScanCodeSet};

/// Longest scan code in either table is the 6-byte Pause sequence.
const MAX_CODE_BYTES: u8 = 8;

/// Byte-by-byte accumulator for one in-flight scan code.
///
/// `index` counts how many bytes have been folded into `pending_code` so
/// far; `pending` is false only in the freshly-reset state. The `index <= 8`
/// invariant is enforced by [`PendingCode::push`] itself (spec §3 invariant).
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingCode {
    pending_code: u64,
    pending: bool,
    index: u8,
}

/// Outcome of folding one byte into a [`PendingCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Byte accepted, but no complete code recognized yet.
    Accumulating,
    /// Byte completed a recognized code; the accumulator has been reset.
    Complete(u64),
    /// Byte could not extend the pending prefix; it was folded in anyway
    /// (matching the original's behavior of logging and resetting rather
    /// than silently discarding the unrecognized byte), then reset.
    Dropped,
}

impl PendingCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `byte` into the accumulator, checking `set` for a match.
    pub fn push(&mut self, set: ScanCodeSet, byte: u8) -> PushOutcome {
        if !scancode::prefix_member(set, byte, self.index) {
            logging::warn(
                "reassembler",
                format!("dropping impossible prefix byte {byte:#04x}"),
            );
            self.reset();
            return PushOutcome::Dropped;
        }

        self.pending_code = (self.pending_code << 8) | byte as u64;
        self.pending = true;
        self.index += 1;

        if self.index > MAX_CODE_BYTES {
            logging::warn("reassembler", "overflow: resetting pending code");
            self.reset();
            return PushOutcome::Dropped;
        }

        match scancode::find(set, self.pending_code) {
            Some(_) => {
                let code = self.pending_code;
                self.reset();
                PushOutcome::Complete(code)
            }
            None => PushOutcome::Accumulating,
        }
    }

    /// Drop whatever has been accumulated so far without logging.
    pub fn reset(&mut self) {
        self.pending_code = 0;
        self.pending = false;
        self.index = 0;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn bytes_accumulated(&self) -> u8 {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{CapturingSink, Severity};
    use crate::scancode::SCAN_CODE_SET_1;

    #[test]
    fn single_byte_code_completes_immediately() {
        let mut pending = PendingCode::new();
        assert_eq!(pending.push(SCAN_CODE_SET_1, 0x1e), PushOutcome::Complete(0x1e));
        assert!(!pending.is_pending());
    }

    #[test]
    fn two_byte_code_accumulates_then_completes() {
        let mut pending = PendingCode::new();
        assert_eq!(pending.push(SCAN_CODE_SET_1, 0xe0), PushOutcome::Accumulating);
        assert!(pending.is_pending());
        assert_eq!(pending.bytes_accumulated(), 1);
        assert_eq!(pending.push(SCAN_CODE_SET_1, 0x1d), PushOutcome::Complete(0xe01d));
        assert!(!pending.is_pending());
    }

    #[test]
    fn six_byte_pause_sequence_completes() {
        let mut pending = PendingCode::new();
        let bytes = [0xe1u8, 0x1d, 0x45, 0xe1, 0x9d, 0xc5];
        for &b in &bytes[..bytes.len() - 1] {
            assert_eq!(pending.push(SCAN_CODE_SET_1, b), PushOutcome::Accumulating);
        }
        assert_eq!(
            pending.push(SCAN_CODE_SET_1, bytes[bytes.len() - 1]),
            PushOutcome::Complete(0xe11d45e19dc5)
        );
    }

    #[test]
    fn impossible_prefix_is_dropped_and_logged() {
        let sink = CapturingSink::new();
        logging::set_sink(sink.clone());

        let mut pending = PendingCode::new();
        pending.push(SCAN_CODE_SET_1, 0xe0);
        let outcome = pending.push(SCAN_CODE_SET_1, 0xff);

        logging::set_sink(logging::NullSink);
        assert_eq!(outcome, PushOutcome::Dropped);
        assert!(!pending.is_pending());
        assert!(sink
            .records()
            .iter()
            .any(|r| r.severity == Severity::Warn && r.tag == "reassembler"));
    }

    #[test]
    fn unrecognized_single_byte_keeps_accumulating_until_dropped() {
        // 0xff is not a valid first byte in Set 1, so it is dropped on the
        // very first push rather than accumulated indefinitely.
        let mut pending = PendingCode::new();
        assert_eq!(pending.push(SCAN_CODE_SET_1, 0xff), PushOutcome::Dropped);
        assert!(!pending.is_pending());
    }

    #[test]
    fn reset_clears_in_flight_state() {
        let mut pending = PendingCode::new();
        pending.push(SCAN_CODE_SET_1, 0xe0);
        assert!(pending.is_pending());
        pending.reset();
        assert!(!pending.is_pending());
        assert_eq!(pending.bytes_accumulated(), 0);
    }
}
