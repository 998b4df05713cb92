//! Integration tests for the literal scenarios in the scan-code decoding
//! spec (S1-S6), run against the full [`KeyboardState`]/[`DeviceHandle`]
//! seam rather than any single module in isolation.

use std::time::Duration;

use ps2_keyboard_driver::{DriverConfig, KeyboardState, SCAN_CODE_SET_1};

fn feed(state: &std::sync::Arc<KeyboardState>, bytes: &[u8]) {
    for &byte in bytes {
        state.handle_scancode(byte);
    }
}

#[test]
fn s1_two_single_byte_codes_produce_two_lines() {
    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
    feed(&state, &[0x1e, 0xa0]);

    let mut handle = state.open();
    assert!(handle.read_line().unwrap().contains("A(0x1e) Pressed"));
    assert!(handle.read_line().unwrap().contains("D(0xa0) Released"));
    assert!(handle.read_line().is_none());
}

#[test]
fn s2_shift_bracketing_a_press_and_release_clears_modifiers() {
    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
    feed(&state, &[0x2a, 0x1e, 0x9e, 0xaa]);

    let mut handle = state.open();
    assert!(handle.read_line().unwrap().contains("left shift(0x2a) Pressed"));
    assert!(handle.read_line().unwrap().contains("A(0x1e) Pressed"));
    assert!(handle.read_line().unwrap().contains("A(0x9e) Released"));
    assert!(handle.read_line().unwrap().contains("left shift(0xaa) Released"));

    // ModifierFlags back to empty: shifting a fresh letter yields lowercase.
    feed(&state, &[0x1e]);
    let dump = state.shutdown_ascii_dump();
    assert_eq!(dump, "a");
}

#[test]
fn s3_print_screen_make_sequence_emits_a_single_line() {
    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);

    assert!(state.handle_scancode(0xe0).is_none());
    assert!(state.handle_scancode(0x2a).is_none());
    assert!(state.handle_scancode(0xe0).is_none());
    let entry = state.handle_scancode(0x37).expect("fourth byte completes print screen");
    assert_eq!(entry.key.name, "print screen");
    assert_eq!(entry.key.code, 0xe02ae037);

    let mut handle = state.open();
    let line = handle.read_line().unwrap();
    assert!(line.contains("print screen(0xe02ae037) Pressed"));
}

#[test]
fn s4_pause_sequence_emits_a_single_line() {
    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
    for &byte in &[0xe1, 0x1d, 0x45, 0xe1, 0x9d] {
        assert!(state.handle_scancode(byte).is_none());
    }
    let entry = state.handle_scancode(0xc5).expect("sixth byte completes pause");
    assert_eq!(entry.key.name, "pause");

    let mut handle = state.open();
    assert!(handle.read_line().unwrap().contains("pause(0xe11d45e19dc5) Pressed"));
}

#[test]
fn s5_impossible_byte_drops_silently_with_no_event() {
    use ps2_keyboard_driver::logging::{self, CapturingSink, Severity};

    let sink = CapturingSink::new();
    logging::set_sink(sink.clone());

    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
    assert!(state.handle_scancode(0xff).is_none());

    logging::set_sink(logging::NullSink);
    assert_eq!(state.shutdown_ascii_dump(), "");
    assert!(sink.records().iter().any(|r| r.severity == Severity::Warn));
}

#[test]
fn s6_open_blocks_until_first_entry_then_read_exhausts() {
    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
    let producer = std::sync::Arc::clone(&state);
    let feeder = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(15));
        producer.handle_scancode(0x1c); // enter
    });

    let mut handle = state.open();
    let line = handle.read_line().unwrap();
    assert!(line.contains("enter(0x1c) Pressed"));
    feeder.join().unwrap();

    // The cursor has caught up: a plain read returns zero bytes immediately
    // rather than blocking, and the timeout-based variant reports it was
    // interrupted rather than handed a new entry.
    assert!(handle.read_line().is_none());
    let timed_out = handle.read_line_timeout(Duration::from_millis(20));
    assert!(timed_out.is_err());
}

#[test]
fn fifo_ordering_holds_across_many_entries() {
    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
    feed(&state, &[0x1e, 0x1f, 0x20, 0x21]); // A S D F presses

    let mut handle = state.open();
    assert!(handle.read_line().unwrap().contains("A(0x1e)"));
    assert!(handle.read_line().unwrap().contains("S(0x1f)"));
    assert!(handle.read_line().unwrap().contains("D(0x20)"));
    assert!(handle.read_line().unwrap().contains("F(0x21)"));
    assert!(handle.read_line().is_none());
}

#[test]
fn only_one_reader_may_hold_the_device_open_at_a_time() {
    let state = KeyboardState::new(DriverConfig::default(), SCAN_CODE_SET_1);
    feed(&state, &[0x1e]);

    let first = state.open();
    let state_for_second = std::sync::Arc::clone(&state);
    let second = std::thread::spawn(move || {
        let _handle = state_for_second.open();
    });

    std::thread::sleep(Duration::from_millis(20));
    assert!(!second.is_finished());

    drop(first);
    second.join().unwrap();
}
