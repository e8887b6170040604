//! Human-readable rendering of dates, times and table cells.
//!
//! The day and month abbreviations are the ones the rest of the site already
//! uses ("Tues", "Thurs", "Sept", ...), so they are spelled out here instead of
//! coming from a locale.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::schema::{FieldKind, RowSchema};

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tues", "Wed", "Thurs", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Line break placed between the time and date of a timestamp cell.
pub const TIMESTAMP_BREAK: &str = "<br />";

/// 12-hour clock time, e.g. `12:00 AM`, `1:05 PM`.
pub fn format_ampm(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    let suffix = if pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), suffix)
}

/// Date as `Wed, Aug 12, 2015`.
pub fn format_date_string(date: NaiveDate) -> String {
    let day = DAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{}, {} {}, {}", day, month, date.day(), date.year())
}

/// `"1"` becomes `Yes`; everything else, including malformed input, is `No`.
pub fn format_boolean(cell: &str) -> &'static str {
    if cell == "1" {
        "Yes"
    } else {
        "No"
    }
}

/// Parse the server's `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// The text is split on space, colon and hyphen; the first six pieces are read
/// as year, month (1-based), day, hour, minute and second.
pub fn parse_cell_timestamp(cell: &str) -> Option<NaiveDateTime> {
    let parts: Vec<&str> = cell
        .trim()
        .split([' ', ':', '-'])
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() < 6 {
        return None;
    }
    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;
    let hour: u32 = parts[3].parse().ok()?;
    let minute: u32 = parts[4].parse().ok()?;
    // Fractional seconds are dropped.
    let second: u32 = parts[5].split('.').next()?.parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(date.and_time(time))
}

/// `<time><br /><date>` rendering of a timestamp cell.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    format!(
        "{}{}{}",
        format_ampm(value.time()),
        TIMESTAMP_BREAK,
        format_date_string(value.date())
    )
}

/// Rewrite one cell according to its field kind.
///
/// Timestamps that cannot be parsed are left as sent.
pub fn format_cell(kind: FieldKind, cell: &str) -> String {
    match kind {
        FieldKind::Id => format!("#{cell}"),
        FieldKind::Boolean => format_boolean(cell).to_string(),
        FieldKind::Timestamp => match parse_cell_timestamp(cell) {
            Some(value) => format_timestamp(value),
            None => {
                tracing::warn!("Unreadable timestamp cell: {:?}", cell);
                cell.to_string()
            }
        },
        FieldKind::Text => cell.to_string(),
    }
}

/// Format a flattened cell sequence in place, row by row.
///
/// A trailing partial row is formatted up to its last cell.
pub fn format_rows(cells: &mut [String], schema: &RowSchema) {
    for (index, cell) in cells.iter_mut().enumerate() {
        let Some(field) = schema.field_at(index) else {
            return;
        };
        if field.kind != FieldKind::Text {
            *cell = format_cell(field.kind, cell);
        }
    }
}
