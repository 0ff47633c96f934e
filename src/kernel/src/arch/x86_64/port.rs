//! Real port I/O and table-register primitives.

use keygate_hal::{DescriptorTableRegister, PortIo};
use x86_64::instructions::port::Port;
use x86_64::instructions::tables::lidt;
use x86_64::structures::DescriptorTablePointer;
use x86_64::VirtAddr;

use crate::interrupts::TablePointer;

/// The processor's I/O port space.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardwarePorts;

impl PortIo for HardwarePorts {
    fn read_port(&mut self, port: u16) -> u8 {
        // SAFETY: The kernel runs in ring 0. Only the PIC and PS/2 controller
        // ports are ever read through this handle.
        unsafe { Port::<u8>::new(port).read() }
    }

    fn write_port(&mut self, port: u16, value: u8) {
        // SAFETY: As above; the callers encode the 8259 and PS/2 protocols.
        unsafe { Port::<u8>::new(port).write(value) }
    }
}

/// The IDTR.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableRegister;

impl DescriptorTableRegister for TableRegister {
    fn load(&mut self, pointer: &[usize; 2]) {
        let pointer = TablePointer::from_words(*pointer);
        let descriptor = DescriptorTablePointer {
            limit: pointer.size(),
            base: VirtAddr::new(pointer.base() as u64),
        };
        // SAFETY: The only table loaded is the `'static` IDT in
        // `arch::x86_64::interrupts`, which is never modified after this.
        unsafe { lidt(&descriptor) };
    }
}
