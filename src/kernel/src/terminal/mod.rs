//! Terminal subsystem for keygate.
//!
//! Provides the line-buffered, password-gated shell driven by keyboard
//! interrupts.
//!
//! # Architecture
//!
//! - `screen`: cursor-tracking writer over the text grid
//! - `line`: the line being typed
//! - `session`: login state and built-in commands

pub mod line;
pub mod screen;
pub mod session;

pub use line::LineBuffer;
pub use screen::Screen;
pub use session::{Session, SessionState};

use keygate_common::{KeyAction, ScanCode};
use keygate_hal::TextMemory;

use crate::config::TerminalConfig;

/// Everything the keyboard handler mutates, owned in one place.
pub struct Terminal<M> {
    screen: Screen<M>,
    line: LineBuffer,
    session: Session,
    config: TerminalConfig,
}

impl<M: TextMemory> Terminal<M> {
    /// Creates a logged-out terminal drawing into `memory`.
    pub fn new(memory: M, config: TerminalConfig) -> Self {
        Self {
            screen: Screen::new(memory, config.color_code),
            line: LineBuffer::new(),
            session: Session::new(),
            config,
        }
    }

    /// Display the shell prompt.
    pub fn prompt(&mut self) {
        self.screen.write(self.config.prompt);
    }

    /// Feeds one scan code through the line editor.
    pub fn handle_scancode(&mut self, code: ScanCode) {
        match code.action() {
            KeyAction::Submit => self.submit(),
            KeyAction::ClearScreen => {
                self.screen.clear();
                self.prompt();
            }
            KeyAction::Release => {}
            KeyAction::Character(byte) => match self.line.push(byte) {
                Ok(()) => self.screen.put_byte(byte),
                Err(err) => log::warn!("dropping scan code {:#04x}: {}", code.0, err),
            },
        }
    }

    /// Hands the line to the session, framed by blank rows, and reprompts.
    fn submit(&mut self) {
        self.screen.newline();
        self.screen.newline();
        self.session
            .handle_line(&mut self.line, &mut self.screen, self.config.password);
        self.screen.newline();
        self.screen.newline();
        self.prompt();
    }

    /// The screen writer.
    pub fn screen(&self) -> &Screen<M> {
        &self.screen
    }

    /// Mutable access to the screen writer.
    pub fn screen_mut(&mut self) -> &mut Screen<M> {
        &mut self.screen
    }

    /// The line typed so far.
    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    /// Current login state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The configuration this terminal runs with.
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }
}
