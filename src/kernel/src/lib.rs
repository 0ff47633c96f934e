//! keygate Kernel
//!
//! The interrupt-driven input layer of a bare-metal x86 system: programs the
//! 8259 PICs, builds the IDT, services keyboard interrupts and drives a
//! password-gated shell on the VGA text screen.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `interrupts`: PIC programming, IDT construction, the keyboard handler
//! - `terminal`: screen writer, line buffer and login session
//! - `boot`: the boot ordering and banner
//! - `arch`: real hardware behind the HAL traits (bare-metal x86_64 only)
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is confined to `arch` and
//! documented with the invariants that make it sound.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(
    all(target_arch = "x86_64", target_os = "none"),
    feature(abi_x86_interrupt)
)]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod config;
pub mod interrupts;
pub mod terminal;

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod logger;

#[cfg(test)]
mod testutil;

/// Initializes core kernel subsystems.
///
/// Called first thing at boot, before anything logs.
pub fn init() {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        arch::x86_64::serial::init();
        #[cfg(feature = "serial-log")]
        {
            if let Err(err) = logger::init() {
                serial_println!("logger unavailable: {}", err);
            }
        }
    }
}
