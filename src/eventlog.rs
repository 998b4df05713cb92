//! The interrupt-to-reader event log (spec §3, §4.4).
//!
//! Grounded on `main.c`'s `key_entry` list: the IRQ handler appends under a
//! spinlock (`list_add_tail` under `spin_lock_irqsave`), and the reader
//! drains from the front. Unlike the original's `kmalloc`'d linked list this
//! is a `VecDeque`, but the FIFO ordering and locking discipline — producer
//! never blocks, consumer never runs concurrently with the producer's
//! append — are unchanged.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use spin::Mutex;

use crate::modifiers::ModifierFlags;
use crate::scancode::ScanKeyCode;

/// Wall-clock moment a key event was recorded, mirroring `do_gettimeofday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub secs: u64,
    pub micros: u32,
}

impl Timestamp {
    /// Capture the current time. Falls back to the epoch if the system
    /// clock is somehow before it, which cannot happen on any real host but
    /// keeps this infallible rather than panicking in an interrupt path.
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp {
            secs: duration.as_secs(),
            micros: duration.subsec_micros(),
        }
    }

    /// Hours/minutes/seconds-of-day, matching the original's
    /// `now.tv_sec / 3600 % 24`, `/ 60 % 60`, `% 60` split used when
    /// formatting each logged line.
    pub fn hms(self) -> (u64, u64, u64) {
        let hours = (self.secs / 3600) % 24;
        let minutes = (self.secs / 60) % 60;
        let seconds = self.secs % 60;
        (hours, minutes, seconds)
    }
}

/// One recorded key event: when it happened and which table entry fired.
#[derive(Debug, Clone, Copy)]
pub struct KeyEntry {
    pub date: Timestamp,
    pub key: &'static ScanKeyCode,
}

/// FIFO log of key events, safe to append to from interrupt context.
pub struct EventLog {
    entries: Mutex<VecDeque<KeyEntry>>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            entries: Mutex::new(VecDeque::new()),
        }
    }

    /// Append one entry. Never blocks; the spinlock is held only for the
    /// duration of the push, same as `list_add_tail` under `spin_lock`.
    pub fn append(&self, entry: KeyEntry) {
        self.entries.lock().push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Snapshot of every entry from `start` onward, for the reader's
    /// cursor-based iteration (spec §4.5). Does not remove anything.
    pub fn snapshot_from(&self, start: usize) -> Vec<KeyEntry> {
        self.entries.lock().iter().skip(start).copied().collect()
    }

    /// Remove and return every entry, in order.
    ///
    /// The original module's `cleanup()` does the equivalent while tearing
    /// the driver down: it walks the list freeing each `key_entry`, and for
    /// any entry that is still `PRESSED` and has an ASCII value, prints that
    /// character first — the one piece of `main.c`'s teardown the distilled
    /// spec dropped and this crate reinstates as an explicit, optional
    /// caller-driven step rather than an implicit side effect of `drop`.
    pub fn drain(&self) -> Vec<KeyEntry> {
        self.entries.lock().drain(..).collect()
    }
}

/// ASCII characters of still-pressed, text-producing entries, in order —
/// the content the original prints during `cleanup()` before freeing each
/// `key_entry`. `modifiers` is applied as of the moment of the dump, not as
/// of when each key was originally pressed.
pub fn pressed_ascii_dump(entries: &[KeyEntry], modifiers: ModifierFlags) -> String {
    use crate::scancode::KeyState;

    entries
        .iter()
        .filter(|entry| entry.key.state == KeyState::Pressed)
        .filter_map(|entry| modifiers.modified_ascii(entry.key))
        .map(|byte| byte as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scancode::{find, SCAN_CODE_SET_1};

    fn entry(code: u64, secs: u64) -> KeyEntry {
        KeyEntry {
            date: Timestamp { secs, micros: 0 },
            key: find(SCAN_CODE_SET_1, code).unwrap(),
        }
    }

    #[test]
    fn append_preserves_fifo_order() {
        let log = EventLog::new();
        log.append(entry(0x1e, 1)); // A press
        log.append(entry(0x9e, 2)); // A release
        let all = log.snapshot_from(0);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].key.name, "A");
        assert_eq!(all[0].key.state, crate::scancode::KeyState::Pressed);
        assert_eq!(all[1].key.state, crate::scancode::KeyState::Released);
    }

    #[test]
    fn snapshot_from_respects_cursor() {
        let log = EventLog::new();
        log.append(entry(0x1e, 1));
        log.append(entry(0x1f, 2));
        log.append(entry(0x20, 3));
        let rest = log.snapshot_from(1);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].key.name, "S");
    }

    #[test]
    fn drain_empties_the_log() {
        let log = EventLog::new();
        log.append(entry(0x1e, 1));
        assert_eq!(log.len(), 1);
        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn hms_splits_seconds_of_day() {
        let ts = Timestamp { secs: 90_061, micros: 0 }; // 1 day + 1h1m1s
        assert_eq!(ts.hms(), (1, 1, 1));
    }

    #[test]
    fn pressed_ascii_dump_skips_released_and_non_text_keys() {
        let pressed_a = entry(0x1e, 1);
        let released_a = entry(0x9e, 2);
        let pressed_ctrl = entry(0x1d, 3);
        let dump = pressed_ascii_dump(
            &[pressed_a, released_a, pressed_ctrl],
            ModifierFlags::default(),
        );
        assert_eq!(dump, "a");
    }

    #[test]
    fn pressed_ascii_dump_applies_modifiers_at_dump_time() {
        let pressed_a = entry(0x1e, 1);
        let mut mods = ModifierFlags::default();
        mods.apply("left shift", crate::scancode::KeyState::Pressed);
        let dump = pressed_ascii_dump(&[pressed_a], mods);
        assert_eq!(dump, "A");
    }
}
