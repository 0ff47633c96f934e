//! Interrupt plumbing: controller programming, the descriptor table and the
//! keyboard handler.
//!
//! Everything here talks to hardware only through the HAL traits.

pub mod idt;
pub mod keyboard;
pub mod pic;

pub use idt::{DescriptorTable, GateDescriptor, TablePointer};
pub use pic::{ChainedPics, InterruptIndex, PICS};
