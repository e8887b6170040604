//! Reservation time windows chosen in the date and time pickers.

use chrono::{NaiveDate, NaiveTime, TimeZone};

use crate::error::ValidationError;

/// Unix timestamp (seconds) of a picked date and time in the time zone `tz`.
///
/// `date` is the `YYYY-MM-DD` value of a date option and `time` the `HH:MM`
/// value of a time option. A local time that occurs twice (end of daylight
/// saving) resolves to the earlier instant; one that never occurs is an error.
pub fn local_timestamp<Tz: TimeZone>(tz: &Tz, date: &str, time: &str) -> Result<i64, ValidationError> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidSelection {
            field: "date",
            value: date.to_string(),
        }
    })?;
    let clock = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| {
        ValidationError::InvalidSelection {
            field: "time",
            value: time.to_string(),
        }
    })?;

    tz.from_local_datetime(&day.and_time(clock))
        .earliest()
        .map(|instant| instant.timestamp())
        .ok_or_else(|| ValidationError::NonexistentLocalTime {
            date: date.to_string(),
            time: time.to_string(),
        })
}

/// A begin/end pair of Unix timestamps with `begin < end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReservationWindow {
    begin: i64,
    end: i64,
}

impl ReservationWindow {
    pub fn new(begin: i64, end: i64) -> Result<Self, ValidationError> {
        if begin >= end {
            return Err(ValidationError::EmptyWindow);
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> i64 {
        self.begin
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}

/// Raw values of the four picker selects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowSelection {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl WindowSelection {
    /// Begin and end timestamps without ordering checks, as searches use them.
    pub fn timestamps<Tz: TimeZone>(&self, tz: &Tz) -> Result<(i64, i64), ValidationError> {
        let begin = local_timestamp(tz, &self.start_date, &self.start_time)?;
        let end = local_timestamp(tz, &self.end_date, &self.end_time)?;
        Ok((begin, end))
    }

    /// A validated window, as reservations need.
    pub fn window<Tz: TimeZone>(&self, tz: &Tz) -> Result<ReservationWindow, ValidationError> {
        let (begin, end) = self.timestamps(tz)?;
        ReservationWindow::new(begin, end)
    }
}
