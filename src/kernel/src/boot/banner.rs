//! Boot banner.

use keygate_hal::TextMemory;

use crate::terminal::session::PASSWORD_PROMPT;
use crate::terminal::Terminal;

/// Clears the screen and prints the greeting and the first prompt.
pub fn print_banner<M: TextMemory>(terminal: &mut Terminal<M>) {
    let greeting = terminal.config().greeting;
    let screen = terminal.screen_mut();
    screen.clear();
    screen.write(greeting);
    screen.newline();
    screen.write(PASSWORD_PROMPT);
    screen.newline();
    terminal.prompt();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerminalConfig;
    use crate::testutil::FakeScreen;

    #[test]
    fn test_banner() {
        let mut terminal = Terminal::new(FakeScreen::new(), TerminalConfig::DEFAULT);
        print_banner(&mut terminal);

        let screen = terminal.screen().memory();
        assert_eq!(screen.row_text(0), "Welcome to keygate!");
        assert_eq!(screen.row_text(1), PASSWORD_PROMPT);
        assert_eq!(screen.row_text(2), "keygate >");
        assert_eq!(screen.row_text(3), "");
    }
}
