//! keygate Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the capabilities the kernel core needs from the machine.
//! Real implementations live in the kernel's `arch` module; tests substitute
//! in-memory fakes.

#![no_std]

/// Trait for the legacy x86 I/O port address space.
pub trait PortIo {
    /// Reads a single byte from the given port.
    fn read_port(&mut self, port: u16) -> u8;
    /// Writes a single byte to the given port.
    fn write_port(&mut self, port: u16, value: u8);
}

/// Trait for the processor's interrupt descriptor table register.
pub trait DescriptorTableRegister {
    /// Loads the two-word table pointer into the register.
    fn load(&mut self, pointer: &[usize; 2]);
}

/// Trait for a memory-mapped text-mode character grid.
///
/// Offsets are byte offsets into the region: even bytes hold characters,
/// odd bytes hold display attributes.
pub trait TextMemory {
    /// Size of the region in bytes.
    fn len(&self) -> usize;
    /// Reads the byte at `offset`.
    fn read(&self, offset: usize) -> u8;
    /// Writes `value` at `offset`.
    fn write(&mut self, offset: usize, value: u8);

    /// Returns true if the region has no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
