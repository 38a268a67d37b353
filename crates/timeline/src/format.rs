//! Timestamp formatting for reports.

/// Formats a millisecond offset as `MM:SS.mmm`.
///
/// Negative offsets keep their magnitude and gain a leading `-`.
///
/// # Example
///
/// ```
/// use apex_timeline::format_offset;
///
/// assert_eq!(format_offset(0), "00:00.000");
/// assert_eq!(format_offset(64_500), "01:04.500");
/// ```
pub fn format_offset(ms: i64) -> String {
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) as f64 / 1000.0;
    format!("{sign}{minutes:02}:{seconds:06.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_offset(0), "00:00.000");
    }

    #[test]
    fn test_sub_minute() {
        assert_eq!(format_offset(4_500), "00:04.500");
        assert_eq!(format_offset(59_999), "00:59.999");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_offset(60_000), "01:00.000");
        assert_eq!(format_offset(754_321), "12:34.321");
    }

    #[test]
    fn test_beyond_an_hour_keeps_minutes() {
        assert_eq!(format_offset(3_600_000), "60:00.000");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_offset(-1_500), "-00:01.500");
    }
}
