//! UART report line
//!
//! Once per cycle the elapsed-seconds count goes out over the UART as
//! `"Nb of sec: <n>\n\r"`.

use core::fmt::Write;

use heapless::String;

/// Fixed text in front of the count
pub const LINE_PREFIX: &str = "Nb of sec: ";

/// Line terminator expected by the serial terminal
pub const LINE_END: &str = "\n\r";

/// Capacity of a report line: prefix, up to ten digits, terminator
pub const LINE_CAPACITY: usize = 24;

/// A formatted report line
pub type ReportLine = String<LINE_CAPACITY>;

/// Format the report line for `seconds`
pub fn format_seconds(seconds: u32) -> ReportLine {
    let mut line = ReportLine::new();
    // Capacity covers u32::MAX, so the write cannot overflow.
    let _ = write!(line, "{}{}{}", LINE_PREFIX, seconds, LINE_END);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit() {
        assert_eq!(format_seconds(7).as_str(), "Nb of sec: 7\n\r");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_seconds(0).as_str(), "Nb of sec: 0\n\r");
    }

    #[test]
    fn test_largest_count_fits() {
        let line = format_seconds(u32::MAX);
        assert_eq!(line.as_str(), "Nb of sec: 4294967295\n\r");
        assert!(line.len() <= LINE_CAPACITY);
    }

    #[test]
    fn test_past_display_range_is_not_truncated() {
        // Only the 7-segment display truncates; the UART line carries the
        // full count.
        assert_eq!(format_seconds(12_345).as_str(), "Nb of sec: 12345\n\r");
    }
}
