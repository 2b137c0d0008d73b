//! Formatting helpers for chart captions and tooltips.

use time::macros::format_description;
use time::Date;

pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "—".to_string())
}

pub fn format_month(year: i32, month: u8) -> String {
    format!("{year}-{month:02}")
}

pub fn format_scrobbles(count: u32) -> String {
    if count == 1 {
        "1 scrobble".to_string()
    } else {
        format!("{count} scrobbles")
    }
}
