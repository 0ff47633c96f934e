//! Interrupt Descriptor Table (IDT) construction.
//!
//! Each gate starts with the legacy 8-byte protected-mode layout. On 64-bit
//! targets the long-mode tail (upper address bits and a reserved dword) follows,
//! so the same table is valid for the x86_64 boot image.

use core::mem::size_of;
use keygate_hal::DescriptorTableRegister;

/// Number of vectors in the table.
pub const IDT_ENTRIES: usize = 256;

/// Type/attribute byte of a present, ring-0 interrupt gate.
pub const INTERRUPT_GATE: u8 = 0x8E;

/// Kernel code segment selector used when no other selector is known.
pub const KERNEL_CODE_SELECTOR: u16 = 0x08;

/// Size of one gate descriptor in bytes.
pub const GATE_SIZE: usize = size_of::<GateDescriptor>();

/// A single gate in the descriptor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct GateDescriptor {
    offset_low: u16,
    selector: u16,
    reserved: u8,
    type_attr: u8,
    offset_high: u16,
    #[cfg(target_pointer_width = "64")]
    offset_upper: u32,
    #[cfg(target_pointer_width = "64")]
    reserved_upper: u32,
}

impl GateDescriptor {
    /// An unused gate. Triggering it faults.
    pub const fn missing() -> Self {
        Self {
            offset_low: 0,
            selector: 0,
            reserved: 0,
            type_attr: 0,
            offset_high: 0,
            #[cfg(target_pointer_width = "64")]
            offset_upper: 0,
            #[cfg(target_pointer_width = "64")]
            reserved_upper: 0,
        }
    }

    /// Creates an interrupt gate that jumps to `handler` through `selector`.
    pub const fn interrupt_gate(handler: usize, selector: u16) -> Self {
        Self {
            offset_low: handler as u16,
            selector,
            reserved: 0,
            type_attr: INTERRUPT_GATE,
            offset_high: (handler >> 16) as u16,
            #[cfg(target_pointer_width = "64")]
            offset_upper: ((handler as u64) >> 32) as u32,
            #[cfg(target_pointer_width = "64")]
            reserved_upper: 0,
        }
    }

    /// Reassembles the handler address from its split fields.
    pub fn handler_address(&self) -> usize {
        let address = usize::from(self.offset_low) | usize::from(self.offset_high) << 16;
        #[cfg(target_pointer_width = "64")]
        let address = address | (self.offset_upper as usize) << 32;
        address
    }

    /// Code segment selector.
    pub fn selector(&self) -> u16 {
        self.selector
    }

    /// Type/attribute byte.
    pub fn type_attr(&self) -> u8 {
        self.type_attr
    }

    /// Returns true if the present bit is set.
    pub fn is_present(&self) -> bool {
        self.type_attr & 0x80 != 0
    }

    /// The gate as it appears in memory.
    pub fn to_bytes(&self) -> [u8; GATE_SIZE] {
        let mut bytes = [0u8; GATE_SIZE];
        bytes[0..2].copy_from_slice(&self.offset_low.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.selector.to_le_bytes());
        bytes[4] = self.reserved;
        bytes[5] = self.type_attr;
        bytes[6..8].copy_from_slice(&self.offset_high.to_le_bytes());
        #[cfg(target_pointer_width = "64")]
        {
            bytes[8..12].copy_from_slice(&self.offset_upper.to_le_bytes());
            bytes[12..16].copy_from_slice(&self.reserved_upper.to_le_bytes());
        }
        bytes
    }
}

/// The value handed to the table-register load instruction.
///
/// Word 0 holds the table size in its low 16 bits and the table address
/// shifted up by 16. Word 1 holds the address bits that did not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct TablePointer {
    words: [usize; 2],
}

impl TablePointer {
    const SPILL_SHIFT: u32 = usize::BITS - 16;

    /// Packs `size` and `base` into the two-word encoding.
    pub const fn new(size: u16, base: usize) -> Self {
        Self {
            words: [size as usize | base << 16, base >> Self::SPILL_SHIFT],
        }
    }

    /// Rebuilds a pointer from its raw words.
    pub const fn from_words(words: [usize; 2]) -> Self {
        Self { words }
    }

    /// The raw words.
    pub fn words(&self) -> &[usize; 2] {
        &self.words
    }

    /// Table size in bytes.
    pub fn size(&self) -> u16 {
        self.words[0] as u16
    }

    /// Linear address of the table.
    pub fn base(&self) -> usize {
        self.words[0] >> 16 | self.words[1] << Self::SPILL_SHIFT
    }
}

/// The Interrupt Descriptor Table.
#[derive(Debug, Clone)]
#[repr(C, align(16))]
pub struct DescriptorTable {
    entries: [GateDescriptor; IDT_ENTRIES],
}

impl Default for DescriptorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorTable {
    /// Size of the whole table in bytes.
    pub const BYTE_SIZE: usize = GATE_SIZE * IDT_ENTRIES;

    /// Creates a table with every gate missing.
    pub const fn new() -> Self {
        Self {
            entries: [GateDescriptor::missing(); IDT_ENTRIES],
        }
    }

    /// Points `vector` at `handler` through `selector`.
    ///
    /// Installing the same triple twice leaves the gate byte-identical.
    pub fn install(&mut self, vector: u8, handler: usize, selector: u16) {
        self.entries[usize::from(vector)] = GateDescriptor::interrupt_gate(handler, selector);
    }

    /// Returns the gate for `vector`.
    pub fn entry(&self, vector: u8) -> &GateDescriptor {
        &self.entries[usize::from(vector)]
    }

    /// Builds the pointer describing this table at its current address.
    pub fn pointer(&self) -> TablePointer {
        TablePointer::new(Self::BYTE_SIZE as u16, self as *const Self as usize)
    }

    /// Hands the table to the processor.
    ///
    /// The table must stay at this address, unmodified, for as long as
    /// interrupts can be delivered through it.
    pub fn load<R: DescriptorTableRegister>(&self, register: &mut R) {
        let pointer = self.pointer();
        log::info!(
            "loading IDT: base={:#x} size={}",
            pointer.base(),
            pointer.size()
        );
        register.load(pointer.words());
    }
}
