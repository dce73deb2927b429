use time::{Duration, PrimitiveDateTime};

pub(crate) fn within_window(
    window_start: PrimitiveDateTime,
    window_end: PrimitiveDateTime,
    now: PrimitiveDateTime,
) -> bool {
    window_start <= now && now <= window_end
}

pub(crate) fn deadline(started_at: PrimitiveDateTime, allowed_minutes: i32) -> PrimitiveDateTime {
    started_at + Duration::minutes(allowed_minutes as i64)
}

/// The allowance is spent once elapsed time reaches allowed_minutes exactly.
pub(crate) fn time_exceeded(
    started_at: PrimitiveDateTime,
    allowed_minutes: i32,
    now: PrimitiveDateTime,
) -> bool {
    now >= deadline(started_at, allowed_minutes)
}

pub(crate) fn remaining_seconds(
    started_at: PrimitiveDateTime,
    allowed_minutes: i32,
    now: PrimitiveDateTime,
) -> i64 {
    let remaining = (deadline(started_at, allowed_minutes) - now).whole_seconds();
    remaining.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Time};

    fn at(hour: u8, minute: u8, second: u8) -> PrimitiveDateTime {
        let date = Date::from_calendar_date(2025, time::Month::March, 10).unwrap();
        PrimitiveDateTime::new(date, Time::from_hms(hour, minute, second).unwrap())
    }

    #[test]
    fn within_window_includes_both_endpoints() {
        let start = at(9, 0, 0);
        let end = at(18, 0, 0);
        assert!(within_window(start, end, start));
        assert!(within_window(start, end, end));
        assert!(within_window(start, end, at(12, 30, 0)));
        assert!(!within_window(start, end, at(8, 59, 59)));
        assert!(!within_window(start, end, at(18, 0, 1)));
    }

    #[test]
    fn time_exceeded_at_exact_allowance() {
        let started = at(10, 0, 0);
        assert!(time_exceeded(started, 120, at(12, 0, 0)));
        assert!(time_exceeded(started, 120, at(12, 0, 1)));
        assert!(!time_exceeded(started, 120, at(11, 59, 59)));
    }

    #[test]
    fn remaining_seconds_counts_down_and_clamps() {
        let started = at(10, 0, 0);
        assert_eq!(remaining_seconds(started, 120, at(10, 0, 0)), 7200);
        assert_eq!(remaining_seconds(started, 120, at(11, 59, 59)), 1);
        assert_eq!(remaining_seconds(started, 120, at(12, 0, 0)), 0);
        assert_eq!(remaining_seconds(started, 120, at(13, 0, 0)), 0);
    }
}
