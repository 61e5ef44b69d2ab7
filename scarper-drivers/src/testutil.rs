//! Mock peripherals shared by the driver tests

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use heapless::{Deque, Vec};
use scarper_hal::{Clock, I2cBus, InputPin, OutputPin, PwmChannel};

/// Records every bus write; `write_read` answers from a scripted response.
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8, 8>), 64>,
    pub register_reads: Vec<(u8, Vec<u8, 8>), 8>,
    pub read_response: Vec<u8, 8>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            register_reads: Vec::new(),
            read_response: Vec::new(),
        }
    }

    pub fn with_read_response(bytes: &[u8]) -> Self {
        let mut mock = Self::new();
        mock.read_response = Vec::from_slice(bytes).unwrap();
        mock
    }

    /// Flatten the write log, asserting every write was a single byte
    pub fn byte_writes(&self) -> Vec<(u8, u8), 64> {
        self.writes
            .iter()
            .map(|(addr, data)| {
                assert_eq!(data.len(), 1, "expected single-byte write");
                (*addr, data[0])
            })
            .collect()
    }
}

impl I2cBus for MockI2c {
    type Error = Infallible;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Infallible> {
        self.writes
            .push((address, Vec::from_slice(data).unwrap()))
            .unwrap();
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Infallible> {
        self.register_reads
            .push((address, Vec::from_slice(write_data).unwrap()))
            .unwrap();
        read_buf.copy_from_slice(&self.read_response[..read_buf.len()]);
        Ok(())
    }
}

/// Output pin remembering its current level and every transition
pub struct MockOutputPin {
    state: bool,
    transitions: Vec<bool, 32>,
}

impl MockOutputPin {
    pub fn new() -> Self {
        Self {
            state: false,
            transitions: Vec::new(),
        }
    }

    pub fn level(&self) -> bool {
        self.state
    }

    pub fn history(&self) -> &[bool] {
        &self.transitions
    }
}

impl OutputPin for MockOutputPin {
    fn set_high(&mut self) {
        self.state = true;
        self.transitions.push(true).unwrap();
    }

    fn set_low(&mut self) {
        self.state = false;
        self.transitions.push(false).unwrap();
    }
}

/// Input pin replaying a scripted sequence of levels
///
/// Each `is_high` pops the next level; once the script runs out the last
/// level repeats forever.
pub struct MockInputPin {
    levels: RefCell<Deque<bool, 64>>,
    last: Cell<bool>,
}

impl MockInputPin {
    pub fn with_levels(levels: &[bool]) -> Self {
        let mut script = Deque::new();
        for &level in levels {
            script.push_back(level).unwrap();
        }
        Self {
            levels: RefCell::new(script),
            last: Cell::new(levels.last().copied().unwrap_or(false)),
        }
    }
}

impl InputPin for MockInputPin {
    fn is_high(&self) -> bool {
        match self.levels.borrow_mut().pop_front() {
            Some(level) => {
                self.last.set(level);
                level
            }
            None => self.last.get(),
        }
    }
}

/// Monotonic clock advancing by a fixed step on every read
pub struct MockClock {
    now: Cell<u64>,
    step: u64,
}

impl MockClock {
    pub fn stepping(step: u64) -> Self {
        Self {
            now: Cell::new(0),
            step,
        }
    }
}

impl Clock for MockClock {
    fn now_us(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

/// PWM channel remembering the latest frequency and every duty command
pub struct MockPwm {
    pub frequency: Option<u32>,
    pub duties: Vec<u32, 32>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            frequency: None,
            duties: Vec::new(),
        }
    }

    pub fn last_duty(&self) -> u32 {
        self.duties.last().copied().unwrap_or(0)
    }
}

impl PwmChannel for MockPwm {
    fn set_frequency(&mut self, hz: u32) {
        self.frequency = Some(hz);
    }

    fn set_duty(&mut self, duty: u32) {
        self.duties.push(duty).unwrap();
    }
}

/// Delay that returns immediately
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
