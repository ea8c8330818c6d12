//! Elapsed/duration label formatting

/// Format a time in seconds as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// The input is rounded to the nearest whole second first. Negative or
/// non-finite input renders as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.round() as u64;
    let minutes = total / 60;
    let secs = total % 60;

    if minutes < 60 {
        return format!("{:02}:{:02}", minutes, secs);
    }

    let hours = minutes / 60;
    format!("{}:{:02}:{:02}", hours, minutes % 60, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(59.4), "00:59");
        assert_eq!(format_time(59.5), "01:00");
        assert_eq!(format_time(3599.0), "59:59");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3661.0), "1:01:01");
        assert_eq!(format_time(3599.6), "1:00:00");
        assert_eq!(format_time(36_000.0 + 125.0), "10:02:05");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(f64::INFINITY), "00:00");
        assert_eq!(format_time(-3.0), "00:00");
    }
}
