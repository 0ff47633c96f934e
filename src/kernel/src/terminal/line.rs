//! The line being typed, before it is submitted.

use keygate_common::LineError;

/// Maximum input line length.
pub const LINE_CAPACITY: usize = 256;

/// NUL-terminated input line with a fixed capacity.
#[derive(Clone)]
pub struct LineBuffer {
    /// Always holds a 0 at `len`.
    bytes: [u8; LINE_CAPACITY + 1],
    len: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Creates an empty line.
    pub const fn new() -> Self {
        Self {
            bytes: [0; LINE_CAPACITY + 1],
            len: 0,
        }
    }

    /// Appends one byte, or fails without changing the line if it is full.
    ///
    /// A 0 byte lands on the terminator and leaves the line unchanged.
    pub fn push(&mut self, byte: u8) -> Result<(), LineError> {
        if byte == 0 {
            return Ok(());
        }
        if self.len == LINE_CAPACITY {
            return Err(LineError::Full);
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        self.bytes[self.len] = 0;
        Ok(())
    }

    /// Empties the line.
    pub fn clear(&mut self) {
        self.len = 0;
        self.bytes[0] = 0;
    }

    /// Number of bytes appended since the last clear.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The typed bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The typed bytes followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Compares the line with `text` up to the first terminator.
    ///
    /// Exact and case-sensitive.
    pub fn matches(&self, text: &str) -> bool {
        let line = self.as_bytes_with_nul();
        let text = text.as_bytes();
        let mut i = 0;
        loop {
            let a = line.get(i).copied().unwrap_or(0);
            let b = text.get(i).copied().unwrap_or(0);
            if a != b {
                return false;
            }
            if a == 0 {
                return true;
            }
            i += 1;
        }
    }
}

impl core::fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("line", &self.as_bytes().escape_ascii())
            .field("len", &self.len)
            .finish()
    }
}
