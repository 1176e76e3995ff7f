//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
///
/// Fractional seconds and the zone suffix (`Z`, `+03:00`, `-05:00`) are dropped.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let end = time_part
                    .find(|c: char| matches!(c, '.' | 'Z' | 'z' | '+' | '-'))
                    .unwrap_or(time_part.len());
                return format!("{}.{}.{} {}", day, month, year, &time_part[..end]);
            }
        }
    }
    datetime_str.to_string()
}

/// Today's date as `YYYY-MM-DD` (UTC, as the booking API expects)
pub fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso_date_part(&iso).to_string()
}

/// "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn iso_date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = iso_date_part(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}
