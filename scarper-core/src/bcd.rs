//! Packed-BCD codec for RTC registers
//!
//! The clock chip stores every calendar field as two 4-bit decimal digits
//! in one byte. These functions convert between that packing and plain
//! decimal values.

/// Decode a packed-BCD byte into its decimal value.
///
/// `0x59` decodes to 59. Any status bits must be masked off by the
/// caller before decoding.
pub fn to_decimal(packed: u8) -> u8 {
    (packed >> 4) * 10 + (packed & 0x0F)
}

/// Encode a decimal value in `0..=99` as a packed-BCD byte.
///
/// Values outside `0..=99` produce garbage rather than an error; the
/// time types in this crate keep their fields in range by construction.
pub fn to_packed(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}
