//! Wall-clock helpers for the hourly schedule and the countdown display.
//!
//! Kept free of AppKit types so the math runs as plain host tests.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds from `now` until the next wall-clock instant whose minute and
/// second are both zero, strictly in the future. Exactly at a top of hour
/// the answer is a full 3600. Returns `None` when local time cannot be
/// resolved; the caller is expected to give up quietly.
pub fn seconds_until_next_hour(now: SystemTime) -> Option<u64> {
    let Ok(duration) = now.duration_since(UNIX_EPOCH) else {
        return None;
    };

    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    let seconds: libc::time_t = libc::time_t::try_from(duration.as_secs()).ok()?;
    let tm_ptr =
        unsafe { libc::localtime_r(std::ptr::addr_of!(seconds), std::ptr::addr_of_mut!(tm)) };
    if tm_ptr.is_null() {
        return None;
    }

    let minute = u64::try_from(tm.tm_min).ok()?;
    let second = u64::try_from(tm.tm_sec).ok()?;
    Some(delay_to_hour_top(minute, second))
}

/// Delay in seconds from `minute:second` within an hour to the next hour
/// top. Out-of-range positions (leap seconds) fold onto the last second,
/// so the result stays in `1..=3600`.
pub fn delay_to_hour_top(minute: u64, second: u64) -> u64 {
    3600 - (minute * 60 + second).min(3599)
}

/// Whole minutes left, rounded up. Any sub-minute remainder counts as a
/// full minute; only a fully elapsed countdown yields zero.
pub fn remaining_minutes(remaining: Duration) -> u64 {
    let secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
    secs.div_ceil(60)
}

/// Status-item title suffix while a countdown is running (" -12m"), empty
/// once no time is left.
pub fn countdown_suffix(remaining: Duration) -> String {
    let minutes = remaining_minutes(remaining);
    if minutes == 0 {
        String::new()
    } else {
        format!(" -{minutes}m")
    }
}

/// 格式化时间为 HH:MM 格式
pub fn format_hhmm(t: SystemTime) -> String {
    let Ok(duration) = t.duration_since(UNIX_EPOCH) else {
        return "--:--".to_string();
    };

    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    let seconds: libc::time_t = libc::time_t::try_from(duration.as_secs()).unwrap_or_default();
    let tm_ptr =
        unsafe { libc::localtime_r(std::ptr::addr_of!(seconds), std::ptr::addr_of_mut!(tm)) };
    if tm_ptr.is_null() {
        return "--:--".to_string();
    }

    let mut buf = [0u8; 6]; // "HH:MM\0"
    let fmt = b"%H:%M\0";
    let written = unsafe {
        libc::strftime(
            buf.as_mut_ptr().cast(),
            buf.len(),
            fmt.as_ptr().cast(),
            std::ptr::addr_of!(tm),
        )
    };
    if written == 0 {
        return "--:--".to_string();
    }
    String::from_utf8_lossy(&buf[..written]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_to_hour_top() {
        // 14:47:00 -> 15:00:00
        assert_eq!(delay_to_hour_top(47, 0), 780);
        assert_eq!(delay_to_hour_top(0, 0), 3600);
        assert_eq!(delay_to_hour_top(59, 59), 1);
        assert_eq!(delay_to_hour_top(0, 1), 3599);
    }

    #[test]
    fn test_delay_folds_out_of_range_positions() {
        assert_eq!(delay_to_hour_top(59, 60), 1);
        assert_eq!(delay_to_hour_top(99, 99), 1);
    }

    #[test]
    fn test_seconds_until_next_hour_in_range() {
        let delay = seconds_until_next_hour(SystemTime::now()).unwrap();
        assert!(delay >= 1);
        assert!(delay <= 3600);
    }

    #[test]
    fn test_remaining_minutes_rounds_up() {
        assert_eq!(remaining_minutes(Duration::ZERO), 0);
        assert_eq!(remaining_minutes(Duration::from_secs(1)), 1);
        assert_eq!(remaining_minutes(Duration::from_secs(60)), 1);
        assert_eq!(remaining_minutes(Duration::from_secs(61)), 2);
        assert_eq!(remaining_minutes(Duration::from_secs(5 * 60)), 5);
        assert_eq!(remaining_minutes(Duration::from_millis(500)), 1);
    }

    #[test]
    fn test_countdown_suffix() {
        assert_eq!(countdown_suffix(Duration::from_secs(30 * 60)), " -30m");
        assert_eq!(countdown_suffix(Duration::from_secs(29 * 60 + 1)), " -30m");
        assert_eq!(countdown_suffix(Duration::from_secs(59)), " -1m");
        assert_eq!(countdown_suffix(Duration::ZERO), "");
    }

    #[test]
    fn test_format_hhmm_shape() {
        let s = format_hhmm(SystemTime::now());
        assert_eq!(s.len(), 5);
        assert_eq!(s.as_bytes()[2], b':');
    }
}
