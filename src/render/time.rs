use chrono::{DateTime, TimeDelta, Utc};

/// Age label for a publication instant: minutes, hours or days ago, then a short date
pub fn format_relative(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // Future timestamps read as "0 minutes ago"
    let elapsed = (now - published).max(TimeDelta::zero());

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return ago(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return ago(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return ago(days, "day");
    }

    published.format("%b %-d, %Y").to_string()
}

fn ago(count: i64, unit: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_relative(now() - Duration::minutes(30), now()), "30 minutes ago");
        assert_eq!(format_relative(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(format_relative(now() - Duration::seconds(59), now()), "0 minutes ago");
        assert_eq!(format_relative(now() - Duration::minutes(59), now()), "59 minutes ago");
    }

    #[test]
    fn test_hours_floor() {
        assert_eq!(format_relative(now() - Duration::minutes(90), now()), "1 hour ago");
        assert_eq!(format_relative(now() - Duration::minutes(60), now()), "1 hour ago");
        assert_eq!(format_relative(now() - Duration::hours(23), now()), "23 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(format_relative(now() - Duration::hours(24), now()), "1 day ago");
        assert_eq!(format_relative(now() - Duration::hours(36), now()), "1 day ago");
        assert_eq!(format_relative(now() - Duration::days(6), now()), "6 days ago");
    }

    #[test]
    fn test_absolute_date_after_a_week() {
        assert_eq!(format_relative(now() - Duration::days(10), now()), "Jan 5, 2024");
        assert_eq!(format_relative(now() - Duration::days(7), now()), "Jan 8, 2024");
    }

    #[test]
    fn test_future_clamps_to_zero() {
        assert_eq!(format_relative(now() + Duration::hours(3), now()), "0 minutes ago");
    }
}
