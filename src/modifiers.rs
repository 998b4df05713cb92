//! Modifier and lock-key tracking (spec §4.3).
//!
//! Grounded on `ps2_keyboard_state.c`'s modifier dispatch table and
//! `ps2_key_name_with_modifiers`: held modifiers (shift, control, alt) set
//! on press and clear on release, while the three lock keys (CapsLock,
//! NumberLock, ScrollLock) latch — they flip on press only, and their
//! release is ignored.

use bitflags::bitflags;

use crate::scancode::{KeyState, ScanKeyCode};

bitflags! {
    /// Which modifiers and locks are currently active.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ModifierFlags: u16 {
        const ESCAPE         = 0b0000_0000_0001;
        const LEFT_CONTROL   = 0b0000_0000_0010;
        const RIGHT_CONTROL  = 0b0000_0000_0100;
        const LEFT_SHIFT     = 0b0000_0000_1000;
        const RIGHT_SHIFT    = 0b0000_0001_0000;
        const LEFT_ALT       = 0b0000_0010_0000;
        const RIGHT_ALT      = 0b0000_0100_0000;
        const CAPS_LOCK      = 0b0000_1000_0000;
        const NUM_LOCK       = 0b0001_0000_0000;
        const SCROLL_LOCK    = 0b0010_0000_0000;
    }
}

/// Byte-for-byte transcription of `ps2_keyboard_state.c`'s two lookup
/// strings: `has_shifted_value[i]` shifts into `shifted_values[i]`.
const HAS_SHIFTED_VALUE: &[u8] = b"1234567890-=[]\\';/.,`";
const SHIFTED_VALUES: &[u8] = b"!@#$%^&*()_+{}|\":?><~";

impl ModifierFlags {
    /// Update held/latched state in response to a key's name and state.
    /// Keys not in the dispatch table (`ps2_keyboard_state.c`'s
    /// `modifier_names`) leave the flags unchanged.
    pub fn apply(&mut self, name: &str, state: KeyState) {
        let held = |flags: &mut Self, bit: Self| match state {
            KeyState::Pressed => flags.insert(bit),
            KeyState::Released => flags.remove(bit),
        };
        let latch = |flags: &mut Self, bit: Self| {
            if state == KeyState::Pressed {
                flags.toggle(bit);
            }
        };

        match name {
            "escape" => held(self, Self::ESCAPE),
            "left control" => held(self, Self::LEFT_CONTROL),
            "right control" => held(self, Self::RIGHT_CONTROL),
            "left shift" => held(self, Self::LEFT_SHIFT),
            "right shift" => held(self, Self::RIGHT_SHIFT),
            "left alt" => held(self, Self::LEFT_ALT),
            "right alt" | "right alt (or altGr)" => held(self, Self::RIGHT_ALT),
            "CapsLock" => latch(self, Self::CAPS_LOCK),
            "NumberLock" => latch(self, Self::NUM_LOCK),
            "ScrollLock" => latch(self, Self::SCROLL_LOCK),
            _ => {}
        }
    }

    fn shift_active(self) -> bool {
        self.intersects(Self::LEFT_SHIFT | Self::RIGHT_SHIFT)
    }

    /// The ASCII value `key` produces under the current modifier state, or
    /// `None` if the key has no text value at all. Mirrors
    /// `ps2_key_name_with_modifiers`'s character substitution: letters
    /// uppercase if either shift or CapsLock (or both) is active — no
    /// distinction is made between the two — punctuation shifts via the
    /// fixed lookup table above, and nothing else is affected.
    pub fn modified_ascii(self, key: &ScanKeyCode) -> Option<u8> {
        if !key.has_ascii() {
            return None;
        }
        let ascii = key.ascii;

        if ascii.is_ascii_lowercase() {
            let upper = self.shift_active() || self.contains(Self::CAPS_LOCK);
            return Some(if upper { ascii.to_ascii_uppercase() } else { ascii });
        }

        if self.shift_active() {
            if let Some(pos) = HAS_SHIFTED_VALUE.iter().position(|&b| b == ascii) {
                return Some(SHIFTED_VALUES[pos]);
            }
        }

        Some(ascii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scancode::{find, SCAN_CODE_SET_1};

    fn key(code: u64) -> &'static ScanKeyCode {
        find(SCAN_CODE_SET_1, code).unwrap()
    }

    #[test]
    fn shift_is_held_not_latched() {
        let mut mods = ModifierFlags::default();
        mods.apply("left shift", KeyState::Pressed);
        assert!(mods.contains(ModifierFlags::LEFT_SHIFT));
        mods.apply("left shift", KeyState::Released);
        assert!(!mods.contains(ModifierFlags::LEFT_SHIFT));
    }

    #[test]
    fn caps_lock_latches_on_press_and_ignores_release() {
        let mut mods = ModifierFlags::default();
        mods.apply("CapsLock", KeyState::Pressed);
        assert!(mods.contains(ModifierFlags::CAPS_LOCK));
        mods.apply("CapsLock", KeyState::Released);
        assert!(mods.contains(ModifierFlags::CAPS_LOCK), "release must not clear a latch");
        mods.apply("CapsLock", KeyState::Pressed);
        assert!(!mods.contains(ModifierFlags::CAPS_LOCK), "second press toggles off");
    }

    #[test]
    fn letter_case_follows_shift_or_capslock() {
        let a = key(0x1e); // 'a'
        let plain = ModifierFlags::default();
        assert_eq!(plain.modified_ascii(a), Some(b'a'));

        let mut shifted = ModifierFlags::default();
        shifted.apply("left shift", KeyState::Pressed);
        assert_eq!(shifted.modified_ascii(a), Some(b'A'));

        let mut capped = ModifierFlags::default();
        capped.apply("CapsLock", KeyState::Pressed);
        assert_eq!(capped.modified_ascii(a), Some(b'A'));

        let mut both = capped;
        both.apply("left shift", KeyState::Pressed);
        assert_eq!(both.modified_ascii(a), Some(b'A'), "shift and capslock never cancel out");
    }

    #[test]
    fn punctuation_shifts_via_lookup_table() {
        let one = key(0x2); // '1'
        let mut shifted = ModifierFlags::default();
        shifted.apply("left shift", KeyState::Pressed);
        assert_eq!(shifted.modified_ascii(one), Some(b'!'));

        let slash = key(0x35); // '/'
        assert_eq!(shifted.modified_ascii(slash), Some(b'?'));
    }

    #[test]
    fn non_ascii_key_yields_none() {
        let left_ctrl = key(0x1d);
        assert_eq!(ModifierFlags::default().modified_ascii(left_ctrl), None);
    }

    #[test]
    fn unrelated_key_name_leaves_flags_unchanged() {
        let mut mods = ModifierFlags::default();
        mods.apply("A", KeyState::Pressed);
        assert_eq!(mods, ModifierFlags::default());
    }
}
