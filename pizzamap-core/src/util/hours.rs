use crate::entities::{OpeningHours, Weekday};

pub const HOURS_NOT_AVAILABLE: &str = "Hours not available";
pub const CLOSED: &str = "Closed";

fn day_lines(hours: &OpeningHours) -> impl Iterator<Item = String> + '_ {
    hours
        .iter()
        .map(|(day, value)| format!("{}: {value}", day.label()))
}

/// All specified days on a single line, e.g. `Mon: 11-9 | Tue: 11-9`.
pub fn format_hours(hours: Option<&OpeningHours>) -> String {
    let lines: Vec<_> = hours.map(|h| day_lines(h).collect()).unwrap_or_default();
    if lines.is_empty() {
        HOURS_NOT_AVAILABLE.to_string()
    } else {
        lines.join(" | ")
    }
}

/// One line per specified day.
pub fn format_hours_compact(hours: Option<&OpeningHours>) -> Vec<String> {
    let lines: Vec<_> = hours.map(|h| day_lines(h).collect()).unwrap_or_default();
    if lines.is_empty() {
        vec![HOURS_NOT_AVAILABLE.to_string()]
    } else {
        lines
    }
}

pub fn today_hours(hours: Option<&OpeningHours>, today: Weekday) -> &str {
    match hours {
        None => HOURS_NOT_AVAILABLE,
        Some(hours) => hours.get(today).filter(|v| !v.is_empty()).unwrap_or(CLOSED),
    }
}
