//! Keyboard interrupt servicing.

use keygate_common::{KeyboardStatus, ScanCode};
use keygate_hal::{PortIo, TextMemory};

use super::pic::PICS;
use crate::terminal::Terminal;

/// PS/2 controller data port.
pub const DATA_PORT: u16 = 0x60;

/// PS/2 controller status port.
pub const STATUS_PORT: u16 = 0x64;

/// Services one keyboard interrupt.
///
/// Acknowledges the controller before anything else, so the acknowledgement
/// happens exactly once whichever way the scan code is handled.
pub fn handle_interrupt<P: PortIo, M: TextMemory>(ports: &mut P, terminal: &mut Terminal<M>) {
    PICS.notify_end_of_interrupt(ports);

    let status = KeyboardStatus::from_raw(ports.read_port(STATUS_PORT));
    if !status.has_scancode() {
        return;
    }

    let code = ScanCode(ports.read_port(DATA_PORT));
    log::trace!("scan code {:#04x}", code.0);
    terminal.handle_scancode(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerminalConfig;
    use crate::interrupts::pic::PRIMARY_COMMAND;
    use crate::testutil::{Event, FakePorts, FakeScreen, Timeline};

    fn terminal() -> Terminal<FakeScreen> {
        let mut terminal = Terminal::new(FakeScreen::new(), TerminalConfig::DEFAULT);
        terminal.screen_mut().clear();
        terminal
    }

    fn end_of_interrupts(timeline: &Timeline) -> usize {
        timeline
            .writes()
            .iter()
            .filter(|&&write| write == (PRIMARY_COMMAND, 0x20))
            .count()
    }

    #[test]
    fn test_acknowledges_first() {
        let timeline = Timeline::new();
        let mut ports = FakePorts::new(&timeline);
        ports.queue(STATUS_PORT, 0x01);
        ports.queue(DATA_PORT, 0x19);
        let mut terminal = terminal();

        handle_interrupt(&mut ports, &mut terminal);

        assert_eq!(
            timeline.events(),
            [
                Event::Write {
                    port: 0x20,
                    value: 0x20
                },
                Event::Read { port: STATUS_PORT },
                Event::Read { port: DATA_PORT },
            ]
        );
        assert_eq!(terminal.line().as_bytes(), b"p");
    }

    #[test]
    fn test_acknowledges_once_on_every_branch() {
        // Character, release, Enter, clear-screen and empty-buffer paths.
        for (status, code) in [(0x01, 0x19), (0x01, 0x99), (0x01, 0x1C), (0x01, 0x38), (0x00, 0x19)] {
            let timeline = Timeline::new();
            let mut ports = FakePorts::new(&timeline);
            ports.queue(STATUS_PORT, status);
            ports.queue(DATA_PORT, code);
            let mut terminal = terminal();

            handle_interrupt(&mut ports, &mut terminal);

            assert_eq!(end_of_interrupts(&timeline), 1, "scan code {:#04x}", code);
        }
    }

    #[test]
    fn test_empty_buffer_reads_no_scancode() {
        let timeline = Timeline::new();
        let mut ports = FakePorts::new(&timeline);
        ports.queue(STATUS_PORT, 0x1C);
        let mut terminal = terminal();

        handle_interrupt(&mut ports, &mut terminal);

        assert!(!timeline.events().contains(&Event::Read { port: DATA_PORT }));
        assert!(terminal.line().is_empty());
        assert_eq!(terminal.screen().cursor(), 0);
    }
}
