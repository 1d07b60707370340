use time::{Duration, OffsetDateTime};

pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Short relative age label for something created at `created_at`, as seen at `now`.
///
/// Units are truncated, never rounded: 59 seconds is still "Just now" and
/// 119 minutes is "1h ago". A `created_at` in the future reads as "Just now".
pub fn format_time_ago(created_at: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - created_at;

    if elapsed < Duration::MINUTE {
        "Just now".to_string()
    } else if elapsed < Duration::HOUR {
        format!("{}m ago", elapsed.whole_minutes())
    } else if elapsed < Duration::DAY {
        format!("{}h ago", elapsed.whole_hours())
    } else {
        format!("{}d ago", elapsed.whole_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2024-03-10 12:00:00 UTC);

    #[test]
    fn test_just_now() {
        assert_eq!(format_time_ago(NOW, NOW), "Just now");
        assert_eq!(format_time_ago(NOW - Duration::seconds(59), NOW), "Just now");
    }

    #[test]
    fn test_minutes_truncated() {
        assert_eq!(format_time_ago(NOW - Duration::seconds(60), NOW), "1m ago");
        assert_eq!(format_time_ago(NOW - Duration::seconds(150), NOW), "2m ago");
        assert_eq!(format_time_ago(NOW - Duration::minutes(59), NOW), "59m ago");
    }

    #[test]
    fn test_hours_truncated() {
        assert_eq!(format_time_ago(NOW - Duration::minutes(60), NOW), "1h ago");
        assert_eq!(format_time_ago(NOW - Duration::minutes(119), NOW), "1h ago");
        assert_eq!(format_time_ago(NOW - Duration::hours(23), NOW), "23h ago");
    }

    #[test]
    fn test_days_truncated() {
        assert_eq!(format_time_ago(NOW - Duration::hours(24), NOW), "1d ago");
        assert_eq!(format_time_ago(NOW - Duration::hours(47), NOW), "1d ago");
        assert_eq!(format_time_ago(NOW - Duration::days(40), NOW), "40d ago");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(format_time_ago(NOW + Duration::hours(2), NOW), "Just now");
    }
}
