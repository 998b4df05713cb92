//! Reader-side line formatting and cursor (spec §4.5, §6).
//!
//! Grounded on `driver_seq_show`'s format string
//! (`"%02lld:%02lld:%02lld %s(%#02llx) %s\n"`) — this renders the raw key
//! name and state, not the ASCII-substituted form the IRQ handler's own
//! `printk` line uses. The blocking-until-non-empty `driver_open` behavior
//! (`wait_event_interruptible` in a loop under `open_mutex`) lives on
//! [`crate::device::DeviceHandle`]; this module only owns the parts that
//! don't need the lock/condvar plumbing.

use std::fmt::Write as _;

use crate::eventlog::KeyEntry;

/// Recoverable failure reading from an open device handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The blocking wait for a new entry was interrupted before one
    /// arrived, mirroring `wait_event_interruptible`'s `-ERESTARTSYS`.
    #[error("read interrupted before an entry arrived")]
    Interrupted,
}

/// A single reader's position in the log. Readers do not share a cursor —
/// each `DeviceHandle` open gets its own, matching one `struct seq_file`
/// per open fd.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(self) -> usize {
        self.position
    }

    pub fn advance(&mut self, by: usize) {
        self.position += by;
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }
}

/// Render one entry exactly as `driver_seq_show` does: zero-padded
/// hours:minutes:seconds, the bare key name, its code in lowercase hex with
/// no leading zeros, and the state word.
pub fn format_line(entry: &KeyEntry) -> String {
    let (hours, minutes, seconds) = entry.date.hms();
    let mut line = String::new();
    let _ = write!(
        line,
        "{hours:02}:{minutes:02}:{seconds:02} {}({:#x}) {}\n",
        entry.key.name,
        entry.key.code,
        entry.key.state.as_str(),
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventlog::Timestamp;
    use crate::scancode::{find, SCAN_CODE_SET_1};

    #[test]
    fn format_line_matches_the_original_layout() {
        let entry = KeyEntry {
            date: Timestamp { secs: 3_661, micros: 0 }, // 01:01:01
            key: find(SCAN_CODE_SET_1, 0x1e).unwrap(),
        };
        assert_eq!(format_line(&entry), "01:01:01 A(0x1e) Pressed\n");
    }

    #[test]
    fn format_line_uses_unpadded_lowercase_hex_for_multi_byte_codes() {
        let entry = KeyEntry {
            date: Timestamp { secs: 0, micros: 0 },
            key: find(SCAN_CODE_SET_1, 0xe01d).unwrap(),
        };
        assert_eq!(format_line(&entry), "00:00:00 right control(0xe01d) Pressed\n");
    }

    #[test]
    fn cursor_advances_and_rewinds() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.position(), 0);
        cursor.advance(3);
        assert_eq!(cursor.position(), 3);
        cursor.rewind();
        assert_eq!(cursor.position(), 0);
    }
}
