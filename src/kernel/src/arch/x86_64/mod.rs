//! x86_64 architecture support.
//!
//! Provides port I/O, the table register, VGA text memory, serial output and
//! the keyboard interrupt entry for x86_64 platforms.

pub mod interrupts;
pub mod port;
pub mod serial;
pub mod vga;

pub use port::{HardwarePorts, TableRegister};
pub use vga::VgaMemory;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// This is the idle loop once boot is complete; interrupts still run.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
