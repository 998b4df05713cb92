//! Static scan-code tables (spec §4.1).
//!
//! Two independent, read-only tables exist — Set 1 and Set 2 — each an
//! ordered slice of [`ScanKeyCode`]. Exactly one is active per
//! [`crate::device::KeyboardState`]. Both are transcribed verbatim from the
//! original kernel module's `scan_code_set_1`/`scan_code_set_2` C arrays,
//! including the two known typo entries in Set 1 (`0x88` and `0xd1`) — per
//! the design notes, these are preserved rather than silently corrected.

mod set1;
mod set2;

pub use set1::SCAN_CODE_SET_1;
pub use set2::SCAN_CODE_SET_2;

/// Whether a scan code represents a key going down or coming back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

impl KeyState {
    /// The exact string the line-format renderer writes (spec §4.5, §6).
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyState::Pressed => "Pressed",
            KeyState::Released => "Released",
        }
    }
}

/// One immutable entry in a scan-code table.
///
/// `code` packs the 1-to-8-byte raw scan code big-endian into a `u64`, high
/// byte first, per spec §3: a single-byte code occupies only the low byte, a
/// two-byte `E0 1C` is `0xE01C`, and the six-byte Pause sequence is
/// `0xE11D45E19DC5`.
#[derive(Debug, Clone, Copy)]
pub struct ScanKeyCode {
    pub code: u64,
    pub name: &'static str,
    pub state: KeyState,
    /// Unshifted ASCII value, or `0` if the key produces no text.
    pub ascii: u8,
}

impl ScanKeyCode {
    /// True iff this entry produces text (spec §4.1 `has_ascii`).
    pub const fn has_ascii(&self) -> bool {
        self.ascii != 0
    }
}

/// A static, ordered table of scan codes. Lookup is linear; duplicate codes
/// are forbidden (the first match wins if the source data has one anyway).
pub type ScanCodeSet = &'static [ScanKeyCode];

/// Returns the unique entry whose `code` equals `code`, or `None`.
///
/// O(n) over the table, matching `find_scan_key_code` in the original
/// module — n is small enough (~230) that this is never worth indexing.
pub fn find(set: ScanCodeSet, code: u64) -> Option<&'static ScanKeyCode> {
    set.iter().find(|entry| entry.code == code)
}

/// Returns the byte of `entry.code` at big-endian position `n`, where
/// position 0 is the first non-zero byte of the packed code. Mirrors
/// `get_nth_byte_in_key_code` in the original module: scan code integers are
/// left-padded with zero bytes, so the "first" byte is wherever the first
/// non-zero byte of the 64-bit value actually sits.
fn nth_byte(entry: &ScanKeyCode, n: u8) -> u8 {
    let bytes = entry.code.to_be_bytes();
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != 0 {
            let index = i + n as usize;
            if index >= bytes.len() {
                return 0;
            }
            return bytes[index];
        }
    }
    0
}

/// Could `byte` be the `(index + 1)`-th byte of some entry's scan code in
/// `set`, given that `index` bytes have already been accumulated?
///
/// Mirrors `maybe_in_scan_set`: used by the reassembler to reject impossible
/// prefixes before they're appended to [`crate::reassembler::PendingCode`].
pub fn prefix_member(set: ScanCodeSet, byte: u8, index: u8) -> bool {
    set.iter().any(|entry| nth_byte(entry, index) == byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_locates_known_entries() {
        let a_pressed = find(SCAN_CODE_SET_1, 0x1e).expect("A press exists");
        assert_eq!(a_pressed.name, "A");
        assert_eq!(a_pressed.state, KeyState::Pressed);
        assert_eq!(a_pressed.ascii, b'a');
    }

    #[test]
    fn find_locates_multi_byte_entries() {
        let print_screen = find(SCAN_CODE_SET_1, 0xe02ae037).expect("print screen press exists");
        assert_eq!(print_screen.name, "print screen");
        assert_eq!(print_screen.state, KeyState::Pressed);

        let pause = find(SCAN_CODE_SET_1, 0xe11d45e19dc5).expect("pause exists");
        assert_eq!(pause.name, "pause");
        assert_eq!(pause.state, KeyState::Pressed);
    }

    #[test]
    fn find_misses_unknown_codes() {
        assert!(find(SCAN_CODE_SET_1, 0xdead_beef).is_none());
    }

    #[test]
    fn prefix_member_accepts_real_first_bytes() {
        // 0x1e (A press) is a legitimate single first byte.
        assert!(prefix_member(SCAN_CODE_SET_1, 0x1e, 0));
        // 0xe0 is the first byte of many extended codes.
        assert!(prefix_member(SCAN_CODE_SET_1, 0xe0, 0));
        // Having seen 0xe0, 0x2a is a legitimate second byte (PrintScreen).
        assert!(prefix_member(SCAN_CODE_SET_1, 0x2a, 1));
    }

    #[test]
    fn prefix_member_rejects_impossible_bytes() {
        assert!(!prefix_member(SCAN_CODE_SET_1, 0xff, 0));
    }

    #[test]
    fn set1_preserves_known_source_typos() {
        // Spec design notes: these are bugs in the original table but must
        // not be silently corrected.
        let release_7 = find(SCAN_CODE_SET_1, 0x88).unwrap();
        assert_eq!(release_7.name, "7");
        assert_eq!(release_7.ascii, b'6');

        let release_kp3 = find(SCAN_CODE_SET_1, 0xd1).unwrap();
        assert_eq!(release_kp3.name, "(keypad) 3");
        assert_eq!(release_kp3.ascii, b'4');
    }

    #[test]
    fn set2_does_not_repeat_set1_typos() {
        let release_7 = find(SCAN_CODE_SET_2, 0x88).unwrap();
        assert_eq!(release_7.ascii, b'7');

        let release_kp3 = find(SCAN_CODE_SET_2, 0xd1).unwrap();
        assert_eq!(release_kp3.ascii, b'3');
    }

    #[test]
    fn print_screen_release_has_no_ascii_and_pause_has_no_release() {
        let release = find(SCAN_CODE_SET_1, 0xe0b7e0aa).unwrap();
        assert!(!release.has_ascii());
        assert!(find(SCAN_CODE_SET_1, 0xe19dc5).is_none());
    }
}
