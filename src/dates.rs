use chrono::{Duration, NaiveDate, Utc};

/// IST is UTC+5:30 and has no daylight saving transitions.
const IST_OFFSET_MINUTES: i64 = 5 * 60 + 30;

/// Today's calendar date under the fixed UTC+5:30 offset, regardless of the
/// host timezone.
pub fn today_ist() -> NaiveDate {
    (Utc::now() + Duration::minutes(IST_OFFSET_MINUTES)).date_naive()
}

/// Renders a date as `YYYY-MM-DD` with zero-padded month and day.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Every calendar date from `start` to `end` inclusive, one day at a time.
/// Empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let mut current = start;
    std::iter::from_fn(move || {
        if current > end {
            return None;
        }
        let date = current;
        current += Duration::days(1);
        Some(date)
    })
}
