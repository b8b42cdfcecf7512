/// Format a seconds count as a clock label.
///
/// Truncates to whole seconds. Produces `H:MM:SS` when an hour is reached,
/// else `M:SS`; the most significant unit is never zero-padded. Negative or
/// non-finite input formats as `0:00`.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_minutes_and_seconds() {
        assert_eq!(format_timestamp(0.0), "0:00");
    }

    #[test]
    fn minutes_are_not_zero_padded() {
        assert_eq!(format_timestamp(61.0), "1:01");
        assert_eq!(format_timestamp(9.0), "0:09");
        assert_eq!(format_timestamp(600.0), "10:00");
    }

    #[test]
    fn hours_appear_once_reached() {
        assert_eq!(format_timestamp(3661.0), "1:01:01");
        assert_eq!(format_timestamp(3599.0), "59:59");
        assert_eq!(format_timestamp(36000.0), "10:00:00");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(format_timestamp(64.9), "1:04");
    }

    #[test]
    fn pathological_input_formats_as_zero() {
        assert_eq!(format_timestamp(-5.0), "0:00");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
        assert_eq!(format_timestamp(f64::INFINITY), "0:00");
    }
}
