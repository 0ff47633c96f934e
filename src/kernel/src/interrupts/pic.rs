//! Support for the primary and secondary 8259 Programmable Interrupt Controllers (PICs).
//!
//! The controllers are write-only from our side: nothing here can detect a
//! misprogrammed chip.

use keygate_hal::PortIo;

/// The offset of the first PIC (primary).
///
/// IRQs 0..7 are mapped to interrupts 32..39.
pub const PIC_1_OFFSET: u8 = 0x20;

/// The offset of the second PIC (secondary).
///
/// IRQs 8..15 are mapped to interrupts 40..47.
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

/// Primary PIC command port.
pub const PRIMARY_COMMAND: u16 = 0x20;
/// Primary PIC data port.
pub const PRIMARY_DATA: u16 = 0x21;
/// Secondary PIC command port.
pub const SECONDARY_COMMAND: u16 = 0xA0;
/// Secondary PIC data port.
pub const SECONDARY_DATA: u16 = 0xA1;

/// ICW1: begin initialization, ICW4 follows.
const ICW1_INIT: u8 = 0x11;
/// ICW3: cascade wiring byte.
const ICW3_CASCADE: u8 = 0x00;
/// ICW4: 8086 mode.
const ICW4_8086: u8 = 0x01;
/// Non-specific end-of-interrupt command.
const CMD_END_OF_INTERRUPT: u8 = 0x20;
/// Mask with every line disabled.
const MASK_ALL: u8 = 0xFF;

/// IRQ line of the PS/2 keyboard.
pub const KEYBOARD_IRQ: u8 = 1;

/// Possible IRQ indices.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptIndex {
    /// Keyboard interrupt.
    Keyboard = PIC_1_OFFSET + KEYBOARD_IRQ,
}

impl InterruptIndex {
    /// Returns the internal u8 value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the internal usize value.
    pub fn as_usize(self) -> usize {
        usize::from(self as u8)
    }
}

/// One 8259 chip.
#[derive(Debug, Clone, Copy)]
struct Pic {
    offset: u8,
    command: u16,
    data: u16,
}

/// The primary and secondary PICs wired in cascade.
#[derive(Debug, Clone, Copy)]
pub struct ChainedPics {
    pics: [Pic; 2],
}

/// The controllers at their standard PC/AT ports.
pub const PICS: ChainedPics = ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET);

impl ChainedPics {
    /// Describes the pair with the given vector offsets.
    pub const fn new(primary_offset: u8, secondary_offset: u8) -> Self {
        Self {
            pics: [
                Pic {
                    offset: primary_offset,
                    command: PRIMARY_COMMAND,
                    data: PRIMARY_DATA,
                },
                Pic {
                    offset: secondary_offset,
                    command: SECONDARY_COMMAND,
                    data: SECONDARY_DATA,
                },
            ],
        }
    }

    /// Runs the ICW1..ICW4 sequence on both chips.
    ///
    /// Each step goes to the primary first, then the secondary.
    pub fn initialize<P: PortIo>(&self, ports: &mut P) {
        let [primary, secondary] = self.pics;

        ports.write_port(primary.command, ICW1_INIT);
        ports.write_port(secondary.command, ICW1_INIT);

        ports.write_port(primary.data, primary.offset);
        ports.write_port(secondary.data, secondary.offset);

        ports.write_port(primary.data, ICW3_CASCADE);
        ports.write_port(secondary.data, ICW3_CASCADE);

        ports.write_port(primary.data, ICW4_8086);
        ports.write_port(secondary.data, ICW4_8086);

        log::info!(
            "PICs remapped to {:#04x}/{:#04x}",
            primary.offset,
            secondary.offset
        );
    }

    /// Disables every IRQ line on both chips.
    pub fn mask_all<P: PortIo>(&self, ports: &mut P) {
        for pic in &self.pics {
            ports.write_port(pic.data, MASK_ALL);
        }
    }

    /// Enables the keyboard line and nothing else on the primary chip.
    pub fn unmask_keyboard<P: PortIo>(&self, ports: &mut P) {
        ports.write_port(self.pics[0].data, !(1 << KEYBOARD_IRQ));
        log::info!("IRQ{} unmasked", KEYBOARD_IRQ);
    }

    /// Acknowledges the interrupt currently in service on the primary chip.
    pub fn notify_end_of_interrupt<P: PortIo>(&self, ports: &mut P) {
        ports.write_port(self.pics[0].command, CMD_END_OF_INTERRUPT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Event, FakePorts, Timeline};

    #[test]
    fn test_initialize_sequence() {
        let timeline = Timeline::new();
        let mut ports = FakePorts::new(&timeline);
        PICS.initialize(&mut ports);

        assert_eq!(
            timeline.writes(),
            [
                (0x20, 0x11),
                (0xA0, 0x11),
                (0x21, 0x20),
                (0xA1, 0x28),
                (0x21, 0x00),
                (0xA1, 0x00),
                (0x21, 0x01),
                (0xA1, 0x01),
            ]
        );
    }

    #[test]
    fn test_masks() {
        let timeline = Timeline::new();
        let mut ports = FakePorts::new(&timeline);
        PICS.mask_all(&mut ports);
        PICS.unmask_keyboard(&mut ports);

        assert_eq!(timeline.writes(), [(0x21, 0xFF), (0xA1, 0xFF), (0x21, 0xFD)]);
    }

    #[test]
    fn test_end_of_interrupt() {
        let timeline = Timeline::new();
        let mut ports = FakePorts::new(&timeline);
        PICS.notify_end_of_interrupt(&mut ports);

        assert_eq!(timeline.events(), [Event::Write { port: 0x20, value: 0x20 }]);
    }

    #[test]
    fn test_keyboard_vector() {
        assert_eq!(InterruptIndex::Keyboard.as_u8(), 0x21);
        assert_eq!(InterruptIndex::Keyboard.as_usize(), 33);
    }
}
