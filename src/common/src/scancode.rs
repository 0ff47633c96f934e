//! PS/2 scan code set 1 vocabulary.

use bitflags::bitflags;

use crate::keymap;

/// Make code of the Enter key.
pub const ENTER: u8 = 0x1C;

/// Make code of the left Alt key, bound to "clear screen".
pub const ALT: u8 = 0x38;

/// Set on every break (key release) code.
pub const RELEASE_BIT: u8 = 0x80;

bitflags! {
    /// Bits of the keyboard controller status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyboardStatus: u8 {
        const OUTPUT_FULL   = 1 << 0; // A scan code is waiting on the data port
        const INPUT_FULL    = 1 << 1;
        const SYSTEM        = 1 << 2;
        const COMMAND       = 1 << 3;
        const TIMEOUT       = 1 << 6;
        const PARITY        = 1 << 7;
    }
}

impl KeyboardStatus {
    /// Interprets a raw status byte, keeping bits without a name.
    pub const fn from_raw(raw: u8) -> Self {
        Self::from_bits_retain(raw)
    }

    /// Returns true if a scan code can be read from the data port.
    pub fn has_scancode(self) -> bool {
        self.contains(KeyboardStatus::OUTPUT_FULL)
    }
}

/// What the terminal should do with a scan code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the current line.
    Submit,
    /// Clear the screen and reprint the prompt.
    ClearScreen,
    /// A key was released; nothing to do.
    Release,
    /// Append and echo the translated byte.
    Character(u8),
}

/// A raw byte read from the keyboard data port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ScanCode(pub u8);

impl ScanCode {
    /// Returns true for break codes.
    pub const fn is_release(self) -> bool {
        self.0 & RELEASE_BIT != 0
    }

    /// Classifies the scan code.
    ///
    /// Control codes are checked before the release bit, matching the order in
    /// which the keyboard handler has always dispatched them.
    pub fn action(self) -> KeyAction {
        match self.0 {
            ENTER => KeyAction::Submit,
            ALT => KeyAction::ClearScreen,
            _ if self.is_release() => KeyAction::Release,
            code => KeyAction::Character(keymap::translate(code)),
        }
    }
}

impl From<u8> for ScanCode {
    fn from(raw: u8) -> Self {
        ScanCode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_codes() {
        assert_eq!(ScanCode(ENTER).action(), KeyAction::Submit);
        assert_eq!(ScanCode(ALT).action(), KeyAction::ClearScreen);
    }

    #[test]
    fn test_release_codes_are_ignored() {
        for raw in 0x80..=0xFFu8 {
            assert_eq!(ScanCode(raw).action(), KeyAction::Release);
        }
    }

    #[test]
    fn test_character_codes_use_keymap() {
        assert_eq!(ScanCode(0x19).action(), KeyAction::Character(b'p'));
        assert_eq!(ScanCode(0x1E).action(), KeyAction::Character(b'a'));
        // Unmapped codes still translate, to zero.
        assert_eq!(ScanCode(0x3B).action(), KeyAction::Character(0));
    }

    #[test]
    fn test_status_output_full() {
        assert!(KeyboardStatus::from_raw(0x01).has_scancode());
        assert!(KeyboardStatus::from_raw(0x1D).has_scancode());
        assert!(!KeyboardStatus::from_raw(0x1C).has_scancode());
        assert!(!KeyboardStatus::from_raw(0x00).has_scancode());
    }
}
