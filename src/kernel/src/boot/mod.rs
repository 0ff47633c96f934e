//! Boot sequence.
//!
//! The order is fixed: program the controllers with every line masked, build
//! the descriptor table, load it, and only then unmask the keyboard. Anything
//! else risks an interrupt arriving through a gate that does not exist yet.

pub mod banner;

use keygate_hal::{DescriptorTableRegister, PortIo};

use crate::interrupts::{DescriptorTable, PICS};

/// Brings up interrupt delivery for the keyboard line.
///
/// `build_table` installs the gates and returns the table that will be
/// loaded. It runs after the controllers are programmed and masked.
pub fn init_interrupts<'a, P, R, F>(ports: &mut P, register: &mut R, build_table: F) -> &'a DescriptorTable
where
    P: PortIo,
    R: DescriptorTableRegister,
    F: FnOnce() -> &'a DescriptorTable,
{
    PICS.initialize(ports);
    PICS.mask_all(ports);

    let table = build_table();
    table.load(register);

    PICS.unmask_keyboard(ports);
    log::info!("keyboard interrupts armed");
    table
}
