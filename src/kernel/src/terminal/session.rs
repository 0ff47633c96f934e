//! Password gate and command dispatch.

use keygate_hal::TextMemory;

use super::line::LineBuffer;
use super::screen::Screen;

/// Printed after a successful login, one entry per row.
pub const LOGIN_MESSAGE: [&str; 2] = [
    "You have now logged in!",
    "To open the help menu, type 'help'.",
];

/// Printed after a wrong password.
pub const LOGIN_ERROR: &str = "Error! Please try again:";

/// Printed for `help`, one entry per row.
pub const HELP_MESSAGE: [&str; 2] = ["Clear Screen: Alt", "Log out: exit"];

/// Printed on a cleared screen after `exit`.
pub const PASSWORD_PROMPT: &str = "Please enter your password:";

/// Printed for anything else once logged in.
pub const UNKNOWN_COMMAND: &str =
    "That command was not recognised! Please try again, or type 'help' for the help menu.";

/// Whether the password has been entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the password.
    #[default]
    LoggedOut,
    /// Accepting commands.
    LoggedIn,
}

/// Commands understood once logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the command summary.
    Help,
    /// Log out.
    Exit,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parses a submitted line. Whole-line, case-sensitive, no trimming.
    pub fn parse(line: &LineBuffer) -> Command {
        if line.matches("help") {
            Command::Help
        } else if line.matches("exit") {
            Command::Exit
        } else {
            Command::Unknown
        }
    }
}

/// The login state machine.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Creates a logged-out session.
    pub const fn new() -> Self {
        Self {
            state: SessionState::LoggedOut,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Acts on a submitted line, then empties it.
    pub fn handle_line<M: TextMemory>(
        &mut self,
        line: &mut LineBuffer,
        screen: &mut Screen<M>,
        password: &str,
    ) {
        self.state = match self.state {
            SessionState::LoggedOut if line.matches(password) => {
                print_rows(screen, &LOGIN_MESSAGE);
                log::debug!("session: logged in");
                SessionState::LoggedIn
            }
            SessionState::LoggedOut => {
                screen.write(LOGIN_ERROR);
                log::debug!("session: wrong password");
                SessionState::LoggedOut
            }
            SessionState::LoggedIn => self.execute(Command::parse(line), screen),
        };
        line.clear();
    }

    fn execute<M: TextMemory>(&self, command: Command, screen: &mut Screen<M>) -> SessionState {
        log::debug!("session: {:?}", command);
        match command {
            Command::Help => {
                print_rows(screen, &HELP_MESSAGE);
                SessionState::LoggedIn
            }
            Command::Exit => {
                screen.clear();
                screen.write(PASSWORD_PROMPT);
                SessionState::LoggedOut
            }
            Command::Unknown => {
                screen.write(UNKNOWN_COMMAND);
                SessionState::LoggedIn
            }
        }
    }
}

fn print_rows<M: TextMemory>(screen: &mut Screen<M>, rows: &[&str]) {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            screen.newline();
        }
        screen.write(row);
    }
}
