//! Scan Code Set 2 — transcribed verbatim from the original kernel module's
//! `scan_code_set_2` array (`examples/original_source/main.c`). Identical to
//! Set 1 except the two typo entries at `0x88` and `0xd1` carry their
//! correct ascii values here.

use super::{KeyState::{Pressed, Released}, ScanCodeSet, ScanKeyCode};

pub static SCAN_CODE_SET_2: ScanCodeSet = &[
    ScanKeyCode { code: 0x1, name: "escape", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x2, name: "1", state: Pressed, ascii: b'1' },
    ScanKeyCode { code: 0x3, name: "2", state: Pressed, ascii: b'2' },
    ScanKeyCode { code: 0x4, name: "3", state: Pressed, ascii: b'3' },
    ScanKeyCode { code: 0x5, name: "4", state: Pressed, ascii: b'4' },
    ScanKeyCode { code: 0x6, name: "5", state: Pressed, ascii: b'5' },
    ScanKeyCode { code: 0x7, name: "6", state: Pressed, ascii: b'6' },
    ScanKeyCode { code: 0x8, name: "7", state: Pressed, ascii: b'7' },
    ScanKeyCode { code: 0x9, name: "8", state: Pressed, ascii: b'8' },
    ScanKeyCode { code: 0xa, name: "9", state: Pressed, ascii: b'9' },
    ScanKeyCode { code: 0xb, name: "0 (zero)", state: Pressed, ascii: b'0' },
    ScanKeyCode { code: 0xc, name: "-", state: Pressed, ascii: b'-' },
    ScanKeyCode { code: 0xd, name: "=", state: Pressed, ascii: b'=' },
    ScanKeyCode { code: 0xe, name: "backspace", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xf, name: "tab", state: Pressed, ascii: b'\t' },
    ScanKeyCode { code: 0x10, name: "Q", state: Pressed, ascii: b'q' },
    ScanKeyCode { code: 0x11, name: "W", state: Pressed, ascii: b'w' },
    ScanKeyCode { code: 0x12, name: "E", state: Pressed, ascii: b'e' },
    ScanKeyCode { code: 0x13, name: "R", state: Pressed, ascii: b'r' },
    ScanKeyCode { code: 0x14, name: "T", state: Pressed, ascii: b't' },
    ScanKeyCode { code: 0x15, name: "Y", state: Pressed, ascii: b'y' },
    ScanKeyCode { code: 0x16, name: "U", state: Pressed, ascii: b'u' },
    ScanKeyCode { code: 0x17, name: "I", state: Pressed, ascii: b'i' },
    ScanKeyCode { code: 0x18, name: "O", state: Pressed, ascii: b'o' },
    ScanKeyCode { code: 0x19, name: "P", state: Pressed, ascii: b'p' },
    ScanKeyCode { code: 0x1a, name: "[", state: Pressed, ascii: b'[' },
    ScanKeyCode { code: 0x1b, name: "]", state: Pressed, ascii: b']' },
    ScanKeyCode { code: 0x1c, name: "enter", state: Pressed, ascii: b'\n' },
    ScanKeyCode { code: 0x1d, name: "left control", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x1e, name: "A", state: Pressed, ascii: b'a' },
    ScanKeyCode { code: 0x1f, name: "S", state: Pressed, ascii: b's' },
    ScanKeyCode { code: 0x20, name: "D", state: Pressed, ascii: b'd' },
    ScanKeyCode { code: 0x21, name: "F", state: Pressed, ascii: b'f' },
    ScanKeyCode { code: 0x22, name: "G", state: Pressed, ascii: b'g' },
    ScanKeyCode { code: 0x23, name: "H", state: Pressed, ascii: b'h' },
    ScanKeyCode { code: 0x24, name: "J", state: Pressed, ascii: b'j' },
    ScanKeyCode { code: 0x25, name: "K", state: Pressed, ascii: b'k' },
    ScanKeyCode { code: 0x26, name: "L", state: Pressed, ascii: b'l' },
    ScanKeyCode { code: 0x27, name: ";", state: Pressed, ascii: b';' },
    ScanKeyCode { code: 0x28, name: "' (single quote)", state: Pressed, ascii: b'\'' },
    ScanKeyCode { code: 0x29, name: "` (back tick)", state: Pressed, ascii: b'`' },
    ScanKeyCode { code: 0x2a, name: "left shift", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x2b, name: "\\", state: Pressed, ascii: b'\\' },
    ScanKeyCode { code: 0x2c, name: "Z", state: Pressed, ascii: b'z' },
    ScanKeyCode { code: 0x2d, name: "X", state: Pressed, ascii: b'x' },
    ScanKeyCode { code: 0x2e, name: "C", state: Pressed, ascii: b'c' },
    ScanKeyCode { code: 0x2f, name: "V", state: Pressed, ascii: b'v' },
    ScanKeyCode { code: 0x30, name: "B", state: Pressed, ascii: b'b' },
    ScanKeyCode { code: 0x31, name: "N", state: Pressed, ascii: b'n' },
    ScanKeyCode { code: 0x32, name: "M", state: Pressed, ascii: b'm' },
    ScanKeyCode { code: 0x33, name: ",", state: Pressed, ascii: b',' },
    ScanKeyCode { code: 0x34, name: ".", state: Pressed, ascii: b'.' },
    ScanKeyCode { code: 0x35, name: "/", state: Pressed, ascii: b'/' },
    ScanKeyCode { code: 0x36, name: "right shift", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x37, name: "(keypad) *", state: Pressed, ascii: b'*' },
    ScanKeyCode { code: 0x38, name: "left alt", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x39, name: "space", state: Pressed, ascii: b' ' },
    ScanKeyCode { code: 0x3a, name: "CapsLock", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x3b, name: "F1", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x3c, name: "F2", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x3d, name: "F3", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x3e, name: "F4", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x3f, name: "F5", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x40, name: "F6", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x41, name: "F7", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x42, name: "F8", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x43, name: "F9", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x44, name: "F10", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x45, name: "NumberLock", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x46, name: "ScrollLock", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x47, name: "(keypad) 7", state: Pressed, ascii: b'7' },
    ScanKeyCode { code: 0x48, name: "(keypad) 8", state: Pressed, ascii: b'8' },
    ScanKeyCode { code: 0x49, name: "(keypad) 9", state: Pressed, ascii: b'9' },
    ScanKeyCode { code: 0x4a, name: "(keypad) -", state: Pressed, ascii: b'-' },
    ScanKeyCode { code: 0x4b, name: "(keypad) 4", state: Pressed, ascii: b'4' },
    ScanKeyCode { code: 0x4c, name: "(keypad) 5", state: Pressed, ascii: b'5' },
    ScanKeyCode { code: 0x4d, name: "(keypad) 6", state: Pressed, ascii: b'6' },
    ScanKeyCode { code: 0x4e, name: "(keypad) +", state: Pressed, ascii: b'+' },
    ScanKeyCode { code: 0x4f, name: "(keypad) 1", state: Pressed, ascii: b'1' },
    ScanKeyCode { code: 0x50, name: "(keypad) 2", state: Pressed, ascii: b'2' },
    ScanKeyCode { code: 0x51, name: "(keypad) 3", state: Pressed, ascii: b'3' },
    ScanKeyCode { code: 0x52, name: "(keypad) 0", state: Pressed, ascii: b'0' },
    ScanKeyCode { code: 0x53, name: "(keypad) .", state: Pressed, ascii: b'.' },
    ScanKeyCode { code: 0x57, name: "F11", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x58, name: "F12", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0x81, name: "escape", state: Released, ascii: 0 },
    ScanKeyCode { code: 0x82, name: "1", state: Released, ascii: b'1' },
    ScanKeyCode { code: 0x83, name: "2", state: Released, ascii: b'2' },
    ScanKeyCode { code: 0x84, name: "3", state: Released, ascii: b'3' },
    ScanKeyCode { code: 0x85, name: "4", state: Released, ascii: b'4' },
    ScanKeyCode { code: 0x86, name: "5", state: Released, ascii: b'5' },
    ScanKeyCode { code: 0x87, name: "6", state: Released, ascii: b'6' },
    ScanKeyCode { code: 0x88, name: "7", state: Released, ascii: b'7' },
    ScanKeyCode { code: 0x89, name: "8", state: Released, ascii: b'8' },
    ScanKeyCode { code: 0x8a, name: "9", state: Released, ascii: b'9' },
    ScanKeyCode { code: 0x8b, name: "0 (zero)", state: Released, ascii: b'0' },
    ScanKeyCode { code: 0x8c, name: "-", state: Released, ascii: b'-' },
    ScanKeyCode { code: 0x8d, name: "=", state: Released, ascii: b'=' },
    ScanKeyCode { code: 0x8e, name: "backspace", state: Released, ascii: 0 },
    ScanKeyCode { code: 0x8f, name: "tab", state: Released, ascii: b'\t' },
    ScanKeyCode { code: 0x90, name: "Q", state: Released, ascii: b'q' },
    ScanKeyCode { code: 0x91, name: "W", state: Released, ascii: b'w' },
    ScanKeyCode { code: 0x92, name: "E", state: Released, ascii: b'e' },
    ScanKeyCode { code: 0x93, name: "R", state: Released, ascii: b'r' },
    ScanKeyCode { code: 0x94, name: "T", state: Released, ascii: b't' },
    ScanKeyCode { code: 0x95, name: "Y", state: Released, ascii: b'y' },
    ScanKeyCode { code: 0x96, name: "U", state: Released, ascii: b'u' },
    ScanKeyCode { code: 0x97, name: "I", state: Released, ascii: b'i' },
    ScanKeyCode { code: 0x98, name: "O", state: Released, ascii: b'o' },
    ScanKeyCode { code: 0x99, name: "P", state: Released, ascii: b'p' },
    ScanKeyCode { code: 0x9a, name: "[", state: Released, ascii: b'[' },
    ScanKeyCode { code: 0x9b, name: "]", state: Released, ascii: b']' },
    ScanKeyCode { code: 0x9c, name: "enter", state: Released, ascii: b'\n' },
    ScanKeyCode { code: 0x9d, name: "left control", state: Released, ascii: 0 },
    ScanKeyCode { code: 0x9e, name: "A", state: Released, ascii: b'a' },
    ScanKeyCode { code: 0x9f, name: "S", state: Released, ascii: b's' },
    ScanKeyCode { code: 0xa0, name: "D", state: Released, ascii: b'd' },
    ScanKeyCode { code: 0xa1, name: "F", state: Released, ascii: b'f' },
    ScanKeyCode { code: 0xa2, name: "G", state: Released, ascii: b'g' },
    ScanKeyCode { code: 0xa3, name: "H", state: Released, ascii: b'h' },
    ScanKeyCode { code: 0xa4, name: "J", state: Released, ascii: b'j' },
    ScanKeyCode { code: 0xa5, name: "K", state: Released, ascii: b'k' },
    ScanKeyCode { code: 0xa6, name: "L", state: Released, ascii: b'l' },
    ScanKeyCode { code: 0xa7, name: ";", state: Released, ascii: b';' },
    ScanKeyCode { code: 0xa8, name: "' (single quote)", state: Released, ascii: b'\'' },
    ScanKeyCode { code: 0xa9, name: "` (back tick)", state: Released, ascii: b'`' },
    ScanKeyCode { code: 0xaa, name: "left shift", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xab, name: "\\", state: Released, ascii: b'\\' },
    ScanKeyCode { code: 0xac, name: "Z", state: Released, ascii: b'z' },
    ScanKeyCode { code: 0xad, name: "X", state: Released, ascii: b'x' },
    ScanKeyCode { code: 0xae, name: "C", state: Released, ascii: b'c' },
    ScanKeyCode { code: 0xaf, name: "V", state: Released, ascii: b'v' },
    ScanKeyCode { code: 0xb0, name: "B", state: Released, ascii: b'b' },
    ScanKeyCode { code: 0xb1, name: "N", state: Released, ascii: b'n' },
    ScanKeyCode { code: 0xb2, name: "M", state: Released, ascii: b'm' },
    ScanKeyCode { code: 0xb3, name: ",", state: Released, ascii: b',' },
    ScanKeyCode { code: 0xb4, name: ".", state: Released, ascii: b'.' },
    ScanKeyCode { code: 0xb5, name: "/", state: Released, ascii: b'/' },
    ScanKeyCode { code: 0xb6, name: "right shift", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xb7, name: "(keypad) *", state: Released, ascii: b'*' },
    ScanKeyCode { code: 0xb8, name: "left alt", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xb9, name: "space", state: Released, ascii: b' ' },
    ScanKeyCode { code: 0xba, name: "CapsLock", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xbb, name: "F1", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xbc, name: "F2", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xbd, name: "F3", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xbe, name: "F4", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xbf, name: "F5", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc0, name: "F6", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc1, name: "F7", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc2, name: "F8", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc3, name: "F9", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc4, name: "F10", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc5, name: "NumberLock", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc6, name: "ScrollLock", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xc7, name: "(keypad) 7", state: Released, ascii: b'7' },
    ScanKeyCode { code: 0xc8, name: "(keypad) 8", state: Released, ascii: b'8' },
    ScanKeyCode { code: 0xc9, name: "(keypad) 9", state: Released, ascii: b'9' },
    ScanKeyCode { code: 0xca, name: "(keypad) -", state: Released, ascii: b'-' },
    ScanKeyCode { code: 0xcb, name: "(keypad) 4", state: Released, ascii: b'4' },
    ScanKeyCode { code: 0xcc, name: "(keypad) 5", state: Released, ascii: b'5' },
    ScanKeyCode { code: 0xcd, name: "(keypad) 6", state: Released, ascii: b'6' },
    ScanKeyCode { code: 0xce, name: "(keypad) +", state: Released, ascii: b'+' },
    ScanKeyCode { code: 0xcf, name: "(keypad) 1", state: Released, ascii: b'1' },
    ScanKeyCode { code: 0xd0, name: "(keypad) 2", state: Released, ascii: b'2' },
    ScanKeyCode { code: 0xd1, name: "(keypad) 3", state: Released, ascii: b'3' },
    ScanKeyCode { code: 0xd2, name: "(keypad) 0", state: Released, ascii: b'0' },
    ScanKeyCode { code: 0xd3, name: "(keypad) .", state: Released, ascii: b'.' },
    ScanKeyCode { code: 0xd7, name: "F11", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xd8, name: "F12", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe010, name: "(multimedia) previous track", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe019, name: "(multimedia) next track", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe01c, name: "(keypad) enter", state: Pressed, ascii: b'\n' },
    ScanKeyCode { code: 0xe01d, name: "right control", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe020, name: "(multimedia) mute", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe021, name: "(multimedia) calculator", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe022, name: "(multimedia) play", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe024, name: "(multimedia) stop", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe02e, name: "(multimedia) volume down", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe030, name: "(multimedia) volume up", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe032, name: "(multimedia) WWW home", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe035, name: "(keypad) /", state: Pressed, ascii: b'/' },
    ScanKeyCode { code: 0xe038, name: "right alt (or altGr)", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe047, name: "home", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe048, name: "cursor up", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe049, name: "page up", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe04b, name: "cursor left", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe04d, name: "cursor right", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe04f, name: "end", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe050, name: "cursor down", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe051, name: "page down", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe052, name: "insert", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe053, name: "delete", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe05b, name: "left GUI", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe05c, name: "right GUI", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe05d, name: "\"apps\"", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe05e, name: "(ACPI) power", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe05f, name: "(ACPI) sleep", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe063, name: "(ACPI) wake", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe065, name: "(multimedia) WWW search", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe066, name: "(multimedia) WWW favorites", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe067, name: "(multimedia) WWW refresh", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe068, name: "(multimedia) WWW stop", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe069, name: "(multimedia) WWW forward", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe06a, name: "(multimedia) WWW back", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe06b, name: "(multimedia) my computer", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe06c, name: "(multimedia) email", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe06d, name: "(multimedia) media select", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe090, name: "(multimedia) previous track", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe099, name: "(multimedia) next track", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe09c, name: "(keypad) enter", state: Released, ascii: b'\n' },
    ScanKeyCode { code: 0xe09d, name: "right control", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0a0, name: "(multimedia) mute", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0a1, name: "(multimedia) calculator", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0a2, name: "(multimedia) play", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0a4, name: "(multimedia) stop", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0ae, name: "(multimedia) volume down", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0b0, name: "(multimedia) volume up", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0b2, name: "(multimedia) WWW home", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0b5, name: "(keypad) /", state: Released, ascii: b'/' },
    ScanKeyCode { code: 0xe0b8, name: "right alt (or altGr)", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0c7, name: "home", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0c8, name: "cursor up", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0c9, name: "page up", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0cb, name: "cursor left", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0cd, name: "cursor right", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0cf, name: "end", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0d0, name: "cursor down", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0d1, name: "page down", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0d2, name: "insert", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0d3, name: "delete", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0db, name: "left GUI", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0dc, name: "right GUI", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0dd, name: "\"apps\"", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0de, name: "(ACPI) power", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0df, name: "(ACPI) sleep", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0e3, name: "(ACPI) wake", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0e5, name: "(multimedia) WWW search", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0e6, name: "(multimedia) WWW favorites", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0e7, name: "(multimedia) WWW refresh", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0e8, name: "(multimedia) WWW stop", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0e9, name: "(multimedia) WWW forward", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0ea, name: "(multimedia) WWW back", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0eb, name: "(multimedia) my computer", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0ec, name: "(multimedia) email", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe0ed, name: "(multimedia) media select", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe02ae037, name: "print screen", state: Pressed, ascii: 0 },
    ScanKeyCode { code: 0xe0b7e0aa, name: "print screen", state: Released, ascii: 0 },
    ScanKeyCode { code: 0xe11d45e19dc5, name: "pause", state: Pressed, ascii: 0 },
];
