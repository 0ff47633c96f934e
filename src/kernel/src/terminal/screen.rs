//! Text output over a 25x80 character grid.
//!
//! The grid is a run of (character, attribute) byte pairs. `Screen` owns the
//! cursor and is the only writer of the grid.

use core::fmt;
use keygate_hal::TextMemory;

/// Number of rows in VGA text mode.
pub const BUFFER_HEIGHT: usize = 25;

/// Number of columns in VGA text mode.
pub const BUFFER_WIDTH: usize = 80;

/// Bytes per cell: character then attribute.
pub const BYTES_PER_CELL: usize = 2;

/// Bytes per row.
pub const LINE_BYTES: usize = BUFFER_WIDTH * BYTES_PER_CELL;

/// Bytes in the whole grid.
pub const SCREEN_BYTES: usize = LINE_BYTES * BUFFER_HEIGHT;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[allow(dead_code, missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Combined foreground and background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// The attribute byte stored next to each character.
    pub const fn attribute(self) -> u8 {
        self.0
    }
}

/// Light gray on black, attribute 0x07.
pub const DEFAULT_COLOR: ColorCode = ColorCode::new(Color::LightGray, Color::Black);

/// Cursor-tracking writer over a text grid.
pub struct Screen<M> {
    memory: M,
    /// Byte offset of the next cell to write.
    cursor: usize,
    color_code: ColorCode,
}

impl<M: TextMemory> Screen<M> {
    /// Wraps `memory`. The grid contents are left as they are.
    pub fn new(memory: M, color_code: ColorCode) -> Self {
        debug_assert!(memory.len() >= SCREEN_BYTES, "text memory too small");
        Screen {
            memory,
            cursor: 0,
            color_code,
        }
    }

    /// Current cursor as a byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The underlying grid.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Reads the (character, attribute) pair at `row`, `col`.
    pub fn cell(&self, row: usize, col: usize) -> (u8, u8) {
        let offset = row * LINE_BYTES + col * BYTES_PER_CELL;
        (self.memory.read(offset), self.memory.read(offset + 1))
    }

    /// Writes one cell at the cursor and advances it by one cell.
    ///
    /// A full grid scrolls up one row first.
    pub fn put_byte(&mut self, byte: u8) {
        if self.cursor + BYTES_PER_CELL > SCREEN_BYTES {
            self.scroll();
        }
        self.memory.write(self.cursor, byte);
        self.memory.write(self.cursor + 1, self.color_code.attribute());
        self.cursor += BYTES_PER_CELL;
    }

    /// Writes every byte of `text` as-is, newlines included.
    pub fn write(&mut self, text: &str) {
        for byte in text.bytes() {
            self.put_byte(byte);
        }
    }

    /// Moves the cursor to the start of the next row.
    ///
    /// From a row start this always leaves one blank row behind, even when
    /// the grid was just filled and has to scroll twice.
    pub fn newline(&mut self) {
        self.cursor += LINE_BYTES - self.cursor % LINE_BYTES;
        while self.cursor >= SCREEN_BYTES {
            self.scroll();
        }
    }

    /// Blanks every cell and homes the cursor.
    pub fn clear(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.cursor = 0;
    }

    /// Clears a single row by filling it with spaces.
    fn clear_row(&mut self, row: usize) {
        debug_assert!(row < BUFFER_HEIGHT, "row index out of bounds");

        let start = row * LINE_BYTES;
        for offset in (start..start + LINE_BYTES).step_by(BYTES_PER_CELL) {
            self.memory.write(offset, b' ');
            self.memory.write(offset + 1, self.color_code.attribute());
        }
    }

    /// Shifts every row up by one and moves the cursor up with them.
    fn scroll(&mut self) {
        for offset in LINE_BYTES..SCREEN_BYTES {
            let byte = self.memory.read(offset);
            self.memory.write(offset - LINE_BYTES, byte);
        }
        self.clear_row(BUFFER_HEIGHT - 1);
        self.cursor = self.cursor.saturating_sub(LINE_BYTES);
    }
}

impl<M: TextMemory> fmt::Write for Screen<M> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                b'\n' => self.newline(),
                byte => self.put_byte(byte),
            }
        }
        Ok(())
    }
}
