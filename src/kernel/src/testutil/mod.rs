//! In-memory stand-ins for the hardware boundary.
//!
//! Every fake built from the same [`Timeline`] records into it, so tests can
//! assert on the relative order of port writes and table loads.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use keygate_hal::{DescriptorTableRegister, PortIo, TextMemory};

use crate::interrupts::idt::TablePointer;
use crate::terminal::screen::SCREEN_BYTES;

/// One observable action against the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A byte was written to a port.
    Write { port: u16, value: u8 },
    /// A byte was read from a port.
    Read { port: u16 },
    /// A gate was installed in the descriptor table.
    Install { vector: u8 },
    /// The table register was loaded.
    LoadTable { size: u16, base: usize },
}

/// Shared, ordered record of hardware events.
#[derive(Debug, Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Port writes only, as `(port, value)` pairs.
    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match *event {
                Event::Write { port, value } => Some((port, value)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// Port space that records writes and serves queued reads.
///
/// Reads from a port with nothing queued return 0.
#[derive(Debug)]
pub struct FakePorts {
    timeline: Timeline,
    pending: HashMap<u16, VecDeque<u8>>,
}

impl FakePorts {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            timeline: timeline.clone(),
            pending: HashMap::new(),
        }
    }

    /// Queues `value` to be returned by the next read of `port`.
    pub fn queue(&mut self, port: u16, value: u8) {
        self.pending.entry(port).or_default().push_back(value);
    }
}

impl PortIo for FakePorts {
    fn read_port(&mut self, port: u16) -> u8 {
        self.timeline.record(Event::Read { port });
        self.pending
            .get_mut(&port)
            .and_then(VecDeque::pop_front)
            .unwrap_or(0)
    }

    fn write_port(&mut self, port: u16, value: u8) {
        self.timeline.record(Event::Write { port, value });
    }
}

/// Table register that records each load.
#[derive(Debug)]
pub struct FakeTableRegister {
    timeline: Timeline,
}

impl FakeTableRegister {
    pub fn new(timeline: &Timeline) -> Self {
        Self {
            timeline: timeline.clone(),
        }
    }
}

impl DescriptorTableRegister for FakeTableRegister {
    fn load(&mut self, pointer: &[usize; 2]) {
        let pointer = TablePointer::from_words(*pointer);
        self.timeline.record(Event::LoadTable {
            size: pointer.size(),
            base: pointer.base(),
        });
    }
}

/// A text grid in ordinary memory.
///
/// Starts filled with 0xEE so untouched cells are easy to spot.
#[derive(Debug, Clone)]
pub struct FakeScreen {
    bytes: Vec<u8>,
}

impl FakeScreen {
    pub fn new() -> Self {
        Self {
            bytes: vec![0xEE; SCREEN_BYTES],
        }
    }

    /// Characters of `row`, with trailing spaces trimmed.
    pub fn row_text(&self, row: usize) -> String {
        let start = row * crate::terminal::screen::LINE_BYTES;
        let text: String = self.bytes[start..start + crate::terminal::screen::LINE_BYTES]
            .iter()
            .step_by(2)
            .map(|&b| char::from(b))
            .collect();
        text.trim_end().into()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl TextMemory for FakeScreen {
    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn read(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    fn write(&mut self, offset: usize, value: u8) {
        self.bytes[offset] = value;
    }
}
