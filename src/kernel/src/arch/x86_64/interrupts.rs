//! Interrupt Descriptor Table (IDT) and the keyboard interrupt entry for x86_64.

use lazy_static::lazy_static;
use spin::{Mutex, Once};
use x86_64::instructions::interrupts;
use x86_64::instructions::segmentation::{Segment, CS};
use x86_64::structures::idt::InterruptStackFrame;

use super::port::{HardwarePorts, TableRegister};
use super::vga::VgaMemory;
use crate::config::TerminalConfig;
use crate::interrupts::keyboard;
use crate::interrupts::{DescriptorTable, InterruptIndex, PICS};
use crate::terminal::Terminal;

/// The one terminal session, shared with the keyboard handler.
pub static TERMINAL: Once<Mutex<Terminal<VgaMemory>>> = Once::new();

lazy_static! {
    /// The Interrupt Descriptor Table (IDT).
    static ref IDT: DescriptorTable = {
        let mut idt = DescriptorTable::new();
        idt.install(
            InterruptIndex::Keyboard.as_u8(),
            keyboard_interrupt_handler as usize,
            CS::get_reg().0,
        );
        idt
    };
}

/// Creates the terminal session. Idempotent.
pub fn init_terminal(config: TerminalConfig) -> &'static Mutex<Terminal<VgaMemory>> {
    TERMINAL.call_once(|| {
        // SAFETY: This is the only place a VgaMemory is created, and
        // call_once runs it at most once.
        let memory = unsafe { VgaMemory::new() };
        Mutex::new(Terminal::new(memory, config))
    })
}

/// Runs `f` on the terminal with interrupts disabled.
///
/// Returns `None` before [`init_terminal`].
pub fn with_terminal<R>(f: impl FnOnce(&mut Terminal<VgaMemory>) -> R) -> Option<R> {
    interrupts::without_interrupts(|| TERMINAL.get().map(|terminal| f(&mut terminal.lock())))
}

/// Programs the PICs, loads the IDT and enables interrupts.
pub fn init_idt() {
    crate::boot::init_interrupts(&mut HardwarePorts, &mut TableRegister, || &*IDT);
    interrupts::enable();
}

/// The keyboard entry point.
///
/// Takes nothing and returns nothing; the session is reached through
/// [`TERMINAL`].
pub fn keyboard_entry() {
    let mut ports = HardwarePorts;
    match TERMINAL.get() {
        Some(terminal) => keyboard::handle_interrupt(&mut ports, &mut terminal.lock()),
        None => PICS.notify_end_of_interrupt(&mut ports),
    }
}

/// Handler for the keyboard interrupt.
///
/// The `x86-interrupt` ABI saves every register and returns with `iretq`.
extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    keyboard_entry();
}
