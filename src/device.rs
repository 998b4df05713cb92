//! The root aggregate and the producer/consumer seam (spec §2, §5, §6).
//!
//! [`KeyboardState::handle_scancode`] is the interrupt-context entry point —
//! the Rust equivalent of `keyboard_irq_handler`: reassemble, update
//! modifiers, append to the log, wake any waiting reader. [`DeviceHandle`]
//! is the process-context consumer, grounded on `driver_open`/
//! `driver_seq_show`/`driver_release`: exactly one handle may be open at a
//! time (`mutex_lock(&open_mutex)` held for the whole session, not just the
//! open call), and opening blocks until the log holds at least one entry.

use std::sync::{Arc, Condvar, Mutex as StdMutex};

use spin::Mutex;

use crate::eventlog::{pressed_ascii_dump, EventLog, KeyEntry, Timestamp};
use crate::modifiers::ModifierFlags;
use crate::reader::{format_line, Cursor, ReadError};
use crate::reassembler::{PendingCode, PushOutcome};
use crate::scancode::{self, ScanCodeSet};

/// Configuration a host driver would normally take from module parameters
/// (`handle_params` in the original: `irq=0` and `minor=0` both mean "use
/// the compiled-in default").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub irq: u32,
    pub minor: u32,
}

impl DriverConfig {
    /// `PS2_DEFAULT_IRQ` in the original module.
    pub const DEFAULT_IRQ: u32 = 1;
    /// `DRIVER_DEFAULT_MINOR` in the original module.
    pub const DEFAULT_MINOR: u32 = 42;

    /// A `0` for either field means "use the default", matching
    /// `handle_params`.
    pub fn new(irq: u32, minor: u32) -> Self {
        DriverConfig {
            irq: if irq == 0 { Self::DEFAULT_IRQ } else { irq },
            minor: if minor == 0 { Self::DEFAULT_MINOR } else { minor },
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Producer-side state touched only from `handle_scancode`: the in-flight
/// byte accumulator and the modifier/lock tracker. Grouped under one
/// `spin::Mutex` since both are only ever mutated together, in interrupt
/// context, and never block.
struct ProducerState {
    pending: PendingCode,
    modifiers: ModifierFlags,
}

/// Gate enforcing "at most one open handle at a time", mirroring
/// `open_mutex` being held across the whole open session rather than just
/// across `driver_open` itself.
struct OpenGate {
    occupied: StdMutex<bool>,
    released: Condvar,
}

impl OpenGate {
    fn new() -> Self {
        OpenGate {
            occupied: StdMutex::new(false),
            released: Condvar::new(),
        }
    }
}

/// The decoder's full runtime state: one per keyboard.
pub struct KeyboardState {
    config: DriverConfig,
    active_set: ScanCodeSet,
    producer: Mutex<ProducerState>,
    log: EventLog,
    read_ready: (StdMutex<()>, Condvar),
    open_gate: OpenGate,
}

impl KeyboardState {
    pub fn new(config: DriverConfig, active_set: ScanCodeSet) -> Arc<Self> {
        Arc::new(KeyboardState {
            config,
            active_set,
            producer: Mutex::new(ProducerState {
                pending: PendingCode::new(),
                modifiers: ModifierFlags::default(),
            }),
            log: EventLog::new(),
            read_ready: (StdMutex::new(()), Condvar::new()),
            open_gate: OpenGate::new(),
        })
    }

    pub fn config(&self) -> DriverConfig {
        self.config
    }

    pub fn active_set(&self) -> ScanCodeSet {
        self.active_set
    }

    /// Feed one raw byte from the controller. Never blocks and never
    /// allocates in a way that can fail — the one place `main.c`'s handler
    /// can drop an event for lack of memory (`kmalloc(GFP_ATOMIC)` failing)
    /// has no Rust equivalent here, since the log grows the ordinary way a
    /// `VecDeque` does (see DESIGN.md).
    ///
    /// Returns the entry appended to the log, if the byte completed one.
    pub fn handle_scancode(&self, byte: u8) -> Option<KeyEntry> {
        let code = {
            let mut producer = self.producer.lock();
            match producer.pending.push(self.active_set, byte) {
                PushOutcome::Accumulating | PushOutcome::Dropped => return None,
                PushOutcome::Complete(code) => code,
            }
        };

        let key = scancode::find(self.active_set, code)
            .expect("reassembler only reports Complete for a recognized code");

        {
            let mut producer = self.producer.lock();
            producer.modifiers.apply(key.name, key.state);
        }

        let entry = KeyEntry {
            date: Timestamp::now(),
            key,
        };
        self.log.append(entry);

        let _guard = self.read_ready.0.lock().unwrap();
        self.read_ready.1.notify_all();

        Some(entry)
    }

    /// Drains the log and logs the ASCII text of whatever was still
    /// `Pressed`, mirroring `cleanup()`'s pre-free print loop. Returns the
    /// same text for callers that want it directly instead of scraping the
    /// log side-channel.
    pub fn shutdown_ascii_dump(&self) -> String {
        let entries = self.log.drain();
        let modifiers = self.producer.lock().modifiers;
        let dump = pressed_ascii_dump(&entries, modifiers);
        if !dump.is_empty() {
            crate::logging::info("eventlog", format!("still pressed at shutdown: {dump:?}"));
        }
        dump
    }

    /// Block until the log holds an entry this cursor hasn't seen yet,
    /// matching `driver_open`'s `wait_event_interruptible` loop. Gating on
    /// `cursor_pos` rather than global log emptiness matters because the
    /// log never shrinks except via `drain()`: once any entry has ever been
    /// appended, `log.is_empty()` is false forever, even for a reader whose
    /// cursor has long since caught up.
    fn wait_for_entry_after(&self, cursor_pos: usize) {
        let (lock, cvar) = &self.read_ready;
        let mut guard = lock.lock().unwrap();
        while self.log.len() <= cursor_pos {
            guard = cvar.wait(guard).unwrap();
        }
    }

    fn wait_for_entry_after_timeout(&self, cursor_pos: usize, timeout: std::time::Duration) -> bool {
        let (lock, cvar) = &self.read_ready;
        let guard = lock.lock().unwrap();
        if self.log.len() > cursor_pos {
            return true;
        }
        let (_guard, result) = cvar.wait_timeout(guard, timeout).unwrap();
        !result.timed_out() && self.log.len() > cursor_pos
    }
}

/// One open session against a [`KeyboardState`]. Only one may exist at a
/// time; [`KeyboardState::open`] blocks until any prior handle is dropped.
pub struct DeviceHandle {
    state: Arc<KeyboardState>,
    cursor: Cursor,
}

impl KeyboardState {
    /// Open a handle, blocking until both the exclusivity gate is free and
    /// at least one entry exists in the log — `driver_open`'s two waits
    /// collapsed into one method.
    pub fn open(self: &Arc<Self>) -> DeviceHandle {
        let mut occupied = self.open_gate.occupied.lock().unwrap();
        while *occupied {
            occupied = self.open_gate.released.wait(occupied).unwrap();
        }
        *occupied = true;
        drop(occupied);

        self.wait_for_entry_after(0);

        DeviceHandle {
            state: Arc::clone(self),
            cursor: Cursor::new(),
        }
    }
}

impl DeviceHandle {
    /// Render and consume the next unread entry, if one is already
    /// buffered. Never blocks: once `open` has returned, each read just
    /// drains whatever is currently available relative to this handle's own
    /// cursor, matching spec §4.5 — "a single read() returns all currently
    /// buffered lines and then returns zero bytes" — rather than blocking
    /// for the next byte that may never arrive.
    pub fn read_line(&mut self) -> Option<String> {
        let entries = self.state.log.snapshot_from(self.cursor.position());
        let entry = entries.first()?;
        self.cursor.advance(1);
        Some(format_line(entry))
    }

    /// Like [`Self::read_line`], but blocks up to `timeout` waiting for a
    /// new entry to arrive for this cursor instead of returning `None`
    /// immediately — the closest Rust analogue to `driver_open`'s
    /// `-ERESTARTSYS` on a signal interrupting the wait (see DESIGN.md).
    pub fn read_line_timeout(&mut self, timeout: std::time::Duration) -> Result<String, ReadError> {
        if !self
            .state
            .wait_for_entry_after_timeout(self.cursor.position(), timeout)
        {
            return Err(ReadError::Interrupted);
        }
        self.read_line().ok_or(ReadError::Interrupted)
    }

    /// Reset this handle's cursor to the start of the log, matching
    /// `driver_seq_start` being invoked again from offset zero.
    pub fn seek_to_start(&mut self) {
        self.cursor.rewind();
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor.position()
    }
}

impl Drop for DeviceHandle {
    fn drop(&mut self) {
        let mut occupied = self.state.open_gate.occupied.lock().unwrap();
        *occupied = false;
        self.state.open_gate.released.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scancode::SCAN_CODE_SET_1;
    use std::time::Duration;

    #[test]
    fn default_config_uses_documented_defaults() {
        let config = DriverConfig::default();
        assert_eq!(config.irq, DriverConfig::DEFAULT_IRQ);
        assert_eq!(config.minor, DriverConfig::DEFAULT_MINOR);
    }

    #[test]
    fn explicit_config_overrides_defaults() {
        let config = DriverConfig::new(9, 7);
        assert_eq!(config.irq, 9);
        assert_eq!(config.minor, 7);
    }

    #[test]
    fn handle_scancode_appends_on_complete_code_only() {
        let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
        assert!(state.handle_scancode(0xe0).is_none()); // accumulating
        let entry = state.handle_scancode(0x1d).expect("right control completes");
        assert_eq!(entry.key.name, "right control");
        assert_eq!(state.log.len(), 1);
    }

    #[test]
    fn open_blocks_until_an_entry_exists() {
        let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
        let state_for_producer = Arc::clone(&state);
        let producer = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            state_for_producer.handle_scancode(0x1e);
        });
        let mut handle = state.open();
        let line = handle.read_line().expect("open only returns once an entry exists");
        assert!(line.contains("A(0x1e) Pressed"));
        producer.join().unwrap();
    }

    #[test]
    fn only_one_handle_may_be_open_at_once() {
        let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
        state.handle_scancode(0x1e);
        let first = state.open();

        let state_for_second = Arc::clone(&state);
        let second_opened = std::thread::spawn(move || {
            let _second = state_for_second.open();
        });

        std::thread::sleep(Duration::from_millis(20));
        assert!(!second_opened.is_finished(), "second open must block while first is held");

        drop(first);
        second_opened.join().unwrap();
    }

    #[test]
    fn read_line_timeout_reports_interrupted_when_nothing_arrives() {
        let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
        state.handle_scancode(0x1e);
        let mut handle = state.open();
        assert!(handle.read_line().is_some());
        assert!(handle.read_line().is_none(), "cursor has caught up, no blocking");
        let result = handle.read_line_timeout(Duration::from_millis(10));
        assert_eq!(result, Err(ReadError::Interrupted));
    }

    #[test]
    fn shutdown_ascii_dump_renders_pressed_text_keys_and_drains_log() {
        let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
        state.handle_scancode(0x1e); // A pressed
        state.handle_scancode(0x9e); // A released
        state.handle_scancode(0x1f); // S pressed
        let dump = state.shutdown_ascii_dump();
        assert_eq!(dump, "as");
        assert_eq!(state.log.len(), 0);
    }
}
