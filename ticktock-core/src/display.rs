//! 7-segment display encoding
//!
//! The display takes one decimal digit per nibble: thousands in bits
//! 15..12, hundreds in 11..8, tens in 7..4 and units in 3..0.

/// Number of digits on the display
pub const DISPLAY_DIGITS: u32 = 4;

/// Largest value the display shows without losing digits
pub const DISPLAY_MAX: u32 = 9_999;

/// Pack the low four decimal digits of `value` into nibbles
///
/// Values above [`DISPLAY_MAX`] keep only their low four digits, so 12345
/// shows as 2345. There is no overflow signal.
pub fn encode(value: u32) -> u32 {
    let mut word = 0;
    let mut rest = value;
    for position in 0..DISPLAY_DIGITS {
        word |= (rest % 10) << (4 * position);
        rest /= 10;
    }
    word
}

/// Unpack a display word into its digits, most significant first
pub fn digits(word: u32) -> [u8; DISPLAY_DIGITS as usize] {
    [
        ((word >> 12) & 0xF) as u8,
        ((word >> 8) & 0xF) as u8,
        ((word >> 4) & 0xF) as u8,
        (word & 0xF) as u8,
    ]
}
