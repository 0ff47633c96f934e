//! US QWERTY keymap for scan code set 1.
//!
//! Indices without a printable mapping hold 0.

/// Number of entries in the keymap.
pub const KEYMAP_LEN: usize = 128;

/// Scan code to byte translation table.
pub static KEYMAP: [u8; KEYMAP_LEN] = build();

const fn place(mut map: [u8; KEYMAP_LEN], start: usize, row: &[u8]) -> [u8; KEYMAP_LEN] {
    let mut i = 0;
    while i < row.len() {
        map[start + i] = row[i];
        i += 1;
    }
    map
}

const fn build() -> [u8; KEYMAP_LEN] {
    let mut map = [0u8; KEYMAP_LEN];
    map[0x01] = 0x1B; // Escape
    map = place(map, 0x02, b"1234567890-=");
    map[0x0E] = 0x08; // Backspace
    map[0x0F] = b'\t';
    map = place(map, 0x10, b"qwertyuiop[]");
    map[0x1C] = b'\n';
    map = place(map, 0x1E, b"asdfghjkl;'`");
    map = place(map, 0x2B, b"\\zxcvbnm,./");
    map[0x37] = b'*';
    map[0x39] = b' ';
    map[0x4A] = b'-';
    map[0x4E] = b'+';
    map
}

/// Translates a scan code to its keymap byte.
///
/// Codes past the end of the table translate to 0.
pub fn translate(code: u8) -> u8 {
    KEYMAP.get(usize::from(code)).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        assert_eq!(translate(0x02), b'1');
        assert_eq!(translate(0x0B), b'0');
        assert_eq!(translate(0x10), b'q');
        assert_eq!(translate(0x19), b'p');
        assert_eq!(translate(0x1F), b's');
        assert_eq!(translate(0x2C), b'z');
        assert_eq!(translate(0x35), b'/');
        assert_eq!(translate(0x39), b' ');
    }

    #[test]
    fn test_modifiers_are_unmapped() {
        assert_eq!(translate(0x1D), 0); // Control
        assert_eq!(translate(0x2A), 0); // Left shift
        assert_eq!(translate(0x36), 0); // Right shift
        assert_eq!(translate(0x38), 0); // Alt
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(translate(0x80), 0);
        assert_eq!(translate(0xFF), 0);
    }
}
