//! DS1307-style I2C real-time clock
//!
//! Seven consecutive BCD registers starting at 0x00 hold seconds,
//! minutes, hours, weekday, day, month and year. A read is one
//! register-pointer write followed by a 7-byte burst; a write replaces
//! the whole block in one transaction so the time stays coherent.

use scarper_core::bcd;
use scarper_core::time::{CalendarTime, WallClockTime};
use scarper_core::traits::Rtc;
use scarper_hal::I2cBus;

/// Fixed bus address of the clock chip
pub const ADDRESS: u8 = 0x68;

/// First register of the timekeeping block
const BASE_REGISTER: u8 = 0x00;

/// The seconds register carries the clock-halt flag in bit 7
const SECONDS_MASK: u8 = 0x7F;
/// The hours register carries 12/24-hour mode flags in the top bits
const HOURS_MASK: u8 = 0x3F;

/// The clock driver
pub struct Ds1307<I> {
    i2c: I,
    address: u8,
}

impl<I: I2cBus> Ds1307<I> {
    /// Create a driver at the standard address
    pub fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: ADDRESS,
        }
    }
}

impl<I: I2cBus> Rtc for Ds1307<I> {
    type Error = I::Error;

    fn read(&mut self) -> Result<CalendarTime, I::Error> {
        let mut registers = [0u8; 7];
        self.i2c
            .write_read(self.address, &[BASE_REGISTER], &mut registers)?;

        Ok(CalendarTime {
            time: WallClockTime {
                seconds: bcd::to_decimal(registers[0] & SECONDS_MASK),
                minutes: bcd::to_decimal(registers[1]),
                hours: bcd::to_decimal(registers[2] & HOURS_MASK),
            },
            weekday: bcd::to_decimal(registers[3]),
            day: bcd::to_decimal(registers[4]),
            month: bcd::to_decimal(registers[5]),
            year: bcd::to_decimal(registers[6]),
        })
    }

    fn write(&mut self, calendar: &CalendarTime) -> Result<(), I::Error> {
        let block = [
            BASE_REGISTER,
            bcd::to_packed(calendar.time.seconds),
            bcd::to_packed(calendar.time.minutes),
            bcd::to_packed(calendar.time.hours),
            bcd::to_packed(calendar.weekday),
            bcd::to_packed(calendar.day),
            bcd::to_packed(calendar.month),
            bcd::to_packed(calendar.year),
        ];
        self.i2c.write(self.address, &block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockI2c;

    #[test]
    fn test_read_decodes_bcd_registers() {
        // 12:34:56, Friday 29 Aug 2025
        let mock = MockI2c::with_read_response(&[0x56, 0x34, 0x12, 0x05, 0x29, 0x08, 0x25]);
        let mut rtc = Ds1307::new(mock);

        let calendar = rtc.read().unwrap();
        assert_eq!(calendar.time, WallClockTime::new(12, 34, 56));
        assert_eq!(
            (calendar.weekday, calendar.day, calendar.month, calendar.year),
            (5, 29, 8, 25)
        );
        assert_eq!(rtc.i2c.register_reads.len(), 1);
        let (address, pointer) = &rtc.i2c.register_reads[0];
        assert_eq!(*address, ADDRESS);
        assert_eq!(pointer.as_slice(), &[0x00]);
    }

    #[test]
    fn test_read_masks_control_bits() {
        // Clock-halt flag set in seconds, 12-hour flag set in hours
        let mock = MockI2c::with_read_response(&[0xD6, 0x00, 0x52, 0x01, 0x01, 0x01, 0x00]);
        let mut rtc = Ds1307::new(mock);

        let calendar = rtc.read().unwrap();
        assert_eq!(calendar.time.seconds, 56);
        assert_eq!(calendar.time.hours, 12);
    }

    #[test]
    fn test_write_sends_one_packed_block() {
        let mut rtc = Ds1307::new(MockI2c::new());
        let calendar = CalendarTime {
            time: WallClockTime::new(7, 30, 0),
            weekday: 1,
            day: 31,
            month: 12,
            year: 24,
        };

        rtc.write(&calendar).unwrap();
        assert_eq!(rtc.i2c.writes.len(), 1);
        let (address, block) = &rtc.i2c.writes[0];
        assert_eq!(*address, ADDRESS);
        assert_eq!(
            block.as_slice(),
            &[0x00, 0x00, 0x30, 0x07, 0x01, 0x31, 0x12, 0x24]
        );
    }
}
