//! Terminal configuration.

use crate::terminal::screen::{ColorCode, DEFAULT_COLOR};

/// Text and credentials the terminal runs with.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfig {
    /// Line that logs the session in.
    pub password: &'static str,
    /// Printed before every input line.
    pub prompt: &'static str,
    /// First line of the boot banner.
    pub greeting: &'static str,
    /// Colors used for every cell.
    pub color_code: ColorCode,
}

impl TerminalConfig {
    /// The stock configuration.
    pub const DEFAULT: TerminalConfig = TerminalConfig {
        password: "pass",
        prompt: "keygate > ",
        greeting: "Welcome to keygate!",
        color_code: DEFAULT_COLOR,
    };
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
