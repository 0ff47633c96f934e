//! VGA text mode memory for x86_64.

use core::ptr;
use keygate_hal::TextMemory;

use crate::terminal::screen::SCREEN_BYTES;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// The 25x80 text grid at 0xB8000.
pub struct VgaMemory {
    /// SAFETY: This pointer is valid for the lifetime of the kernel.
    /// The VGA buffer at 0xB8000 is identity-mapped by the bootloader.
    base: *mut u8,
}

// SAFETY: VgaMemory only accesses the VGA buffer through volatile operations.
// The buffer is memory-mapped hardware that exists for the kernel's lifetime,
// and the only instance lives behind the terminal spinlock.
unsafe impl Send for VgaMemory {}

impl VgaMemory {
    /// Wraps the VGA buffer.
    ///
    /// # Safety
    ///
    /// At most one `VgaMemory` may exist at a time.
    pub const unsafe fn new() -> Self {
        VgaMemory {
            base: VGA_BUFFER_ADDR as *mut u8,
        }
    }
}

impl TextMemory for VgaMemory {
    fn len(&self) -> usize {
        SCREEN_BYTES
    }

    fn read(&self, offset: usize) -> u8 {
        assert!(offset < SCREEN_BYTES, "VGA offset out of bounds");
        // SAFETY: offset is within the mapped 4000-byte buffer. Volatile
        // because the display hardware reads this memory concurrently.
        unsafe { ptr::read_volatile(self.base.add(offset)) }
    }

    fn write(&mut self, offset: usize, value: u8) {
        assert!(offset < SCREEN_BYTES, "VGA offset out of bounds");
        // SAFETY: As in `read`.
        unsafe { ptr::write_volatile(self.base.add(offset), value) }
    }
}
