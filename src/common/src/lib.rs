//! Shared vocabulary for the keygate kernel.
//!
//! Holds the pieces that are pure data: keyboard scan codes, the keymap and
//! the error types returned by the terminal.

#![no_std]
#![warn(missing_docs)]

pub mod error;
pub mod keymap;
pub mod scancode;

pub use error::LineError;
pub use scancode::{KeyAction, KeyboardStatus, ScanCode};
