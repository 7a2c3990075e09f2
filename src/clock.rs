use chrono::{DateTime, Local};

/// 12-hour wall clock line, e.g. "07:05 PM".
pub fn clock_line(now: &DateTime<Local>) -> String {
    now.format("%I:%M %p").to_string()
}

/// Day-of-month plus month name, e.g. "05 August".
pub fn date_line(now: &DateTime<Local>) -> String {
    now.format("%d %B").to_string()
}
