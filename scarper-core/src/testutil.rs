//! Mock device implementations shared by the dialog and controller tests

use core::cell::RefCell;
use core::convert::Infallible;

use heapless::{Deque, String, Vec};

use crate::time::CalendarTime;
use crate::traits::{ButtonEvent, Buttons, Buzzer, CharacterDisplay, Distance, Motor, RangeFinder, Rtc};

/// A character grid capturing everything the code under test draws
pub struct TestDisplay {
    cols: u8,
    rows: u8,
    grid: [[u8; 20]; 4],
    cursor: (u8, u8),
    /// Number of clear commands issued
    pub clear_count: usize,
}

impl TestDisplay {
    pub fn new(cols: u8, rows: u8) -> Self {
        assert!(cols <= 20 && rows <= 4);
        Self {
            cols,
            rows,
            grid: [[b' '; 20]; 4],
            cursor: (0, 0),
            clear_count: 0,
        }
    }

    /// One row of the last frame, right-trimmed
    pub fn row_text(&self, row: u8) -> String<20> {
        let bytes = &self.grid[row as usize][..self.cols as usize];
        let end = bytes.iter().rposition(|&b| b != b' ').map_or(0, |i| i + 1);
        let mut s = String::new();
        for &b in &bytes[..end] {
            let _ = s.push(b as char);
        }
        s
    }
}

impl CharacterDisplay for TestDisplay {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Infallible> {
        self.clear()
    }

    fn clear(&mut self) -> Result<(), Infallible> {
        self.grid = [[b' '; 20]; 4];
        self.cursor = (0, 0);
        self.clear_count += 1;
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Infallible> {
        assert!(col < self.cols && row < self.rows, "cursor off-grid");
        self.cursor = (col, row);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), Infallible> {
        for b in text.bytes() {
            let (col, row) = self.cursor;
            // Overdraw past the right edge is a caller bug; fail loudly
            assert!(col < self.cols, "wrote past column {}", self.cols);
            self.grid[row as usize][col as usize] = b;
            self.cursor.0 += 1;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.cols, self.rows)
    }
}

/// Button pad fed from two scripts: press-release edges consumed by
/// `wait_for_edge`, and raw levels consumed one per `any_pressed` call
/// (false once the level script runs out)
pub struct ScriptedButtons {
    edges: Deque<ButtonEvent, 16>,
    levels: RefCell<Deque<bool, 32>>,
}

impl ScriptedButtons {
    pub fn with_edges(edges: &[ButtonEvent]) -> Self {
        Self::with_script(edges, &[])
    }

    pub fn with_script(edges: &[ButtonEvent], levels: &[bool]) -> Self {
        let mut e = Deque::new();
        for &edge in edges {
            e.push_back(edge).unwrap();
        }
        let mut l = Deque::new();
        for &level in levels {
            l.push_back(level).unwrap();
        }
        Self {
            edges: e,
            levels: RefCell::new(l),
        }
    }

    /// Edges the code under test never consumed
    pub fn unconsumed_edges(&self) -> usize {
        self.edges.len()
    }
}

impl Buttons for ScriptedButtons {
    fn is_pressed(&self, _index: usize) -> bool {
        false
    }

    fn any_pressed(&self) -> bool {
        self.levels.borrow_mut().pop_front().unwrap_or(false)
    }

    fn wait_for_edge(&mut self) -> ButtonEvent {
        self.edges
            .pop_front()
            .expect("dialog waited for an edge the script did not provide")
    }
}

/// RTC replaying a scripted sequence of reads and recording writes
pub struct MockRtc {
    reads: Deque<CalendarTime, 8>,
    last: CalendarTime,
    /// What the controller wrote back, if anything
    pub written: Option<CalendarTime>,
}

impl MockRtc {
    /// Read the given records in order, repeating the last one after
    pub fn returning(reads: &[CalendarTime]) -> Self {
        assert!(!reads.is_empty());
        let mut q = Deque::new();
        for &r in reads {
            q.push_back(r).unwrap();
        }
        Self {
            reads: q,
            last: reads[reads.len() - 1],
            written: None,
        }
    }
}

impl Rtc for MockRtc {
    type Error = Infallible;

    fn read(&mut self) -> Result<CalendarTime, Infallible> {
        Ok(self.reads.pop_front().unwrap_or(self.last))
    }

    fn write(&mut self, time: &CalendarTime) -> Result<(), Infallible> {
        self.written = Some(*time);
        Ok(())
    }
}

/// Ranger replaying scripted samples, repeating the last one
pub struct MockRanger {
    samples: Deque<Distance, 16>,
    last: Distance,
    /// Number of measurements taken
    pub measure_count: usize,
}

impl MockRanger {
    pub fn returning(samples: &[Distance]) -> Self {
        let mut q = Deque::new();
        for &s in samples {
            q.push_back(s).unwrap();
        }
        Self {
            samples: q,
            last: samples.last().copied().unwrap_or(Distance::NoEcho),
            measure_count: 0,
        }
    }
}

impl RangeFinder for MockRanger {
    fn measure(&mut self) -> Distance {
        self.measure_count += 1;
        self.samples.pop_front().unwrap_or(self.last)
    }
}

/// Motor recording every drive command
#[derive(Default)]
pub struct RecordingMotor {
    /// Commands in call order
    pub commands: Vec<f32, 32>,
}

impl Motor for RecordingMotor {
    fn drive(&mut self, value: f32) {
        self.commands.push(value).unwrap();
    }
}

/// Buzzer recording on/off calls
#[derive(Default)]
pub struct RecordingBuzzer {
    pub on_calls: usize,
    pub off_calls: usize,
    pub frequency: Option<u32>,
}

impl Buzzer for RecordingBuzzer {
    fn on(&mut self) {
        self.on_calls += 1;
    }

    fn off(&mut self) {
        self.off_calls += 1;
    }

    fn set_frequency(&mut self, hz: u32) {
        self.frequency = Some(hz);
    }
}

/// Delay provider that only accumulates requested time
#[derive(Default)]
pub struct CountingDelay {
    /// Total delay requested, in nanoseconds
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
