//! Date and time choices for the reservation pickers.

use chrono::{Days, NaiveDate, NaiveTime, Timelike};

use crate::format::{format_ampm, format_date_string};

/// Minutes between two time options.
pub const TIME_STEP_MINUTES: u32 = 15;

/// Number of time options in one day.
pub const TIME_OPTIONS_PER_DAY: usize = (24 * 60 / TIME_STEP_MINUTES) as usize;

/// One `<option>` of a select list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// Value of the option a select list starts on: the last option marked
/// `selected`, or the first option.
pub fn initial_value(options: &[SelectOption]) -> Option<&str> {
    options
        .iter()
        .rev()
        .find(|o| o.selected)
        .or_else(|| options.first())
        .map(|o| o.value.as_str())
}

/// The start and end lists of a picker. Both always hold the same options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerOptions {
    pub start: Vec<SelectOption>,
    pub end: Vec<SelectOption>,
}

impl PickerOptions {
    fn mirrored(options: Vec<SelectOption>) -> Self {
        Self {
            start: options.clone(),
            end: options,
        }
    }
}

/// `days` consecutive days starting at `today`. Values are ISO dates.
pub fn date_options(today: NaiveDate, days: u32) -> PickerOptions {
    let options = (0..days)
        .filter_map(|offset| today.checked_add_days(Days::new(offset.into())))
        .map(|date| SelectOption::new(date.format("%Y-%m-%d").to_string(), format_date_string(date)))
        .collect();
    PickerOptions::mirrored(options)
}

/// Quarter hour the time pickers start on.
///
/// The current minute is rounded down to a quarter hour and 15 minutes added, so
/// 10:07 gives 10:15 and 10:15 gives 10:30. 23:45 and later wrap to midnight.
pub fn next_quarter_hour(now: NaiveTime) -> NaiveTime {
    let minute = now.minute();
    let total = now.hour() * 60 + (minute - minute % TIME_STEP_MINUTES) + TIME_STEP_MINUTES;
    let total = total % (24 * 60);
    NaiveTime::from_hms_opt(total / 60, total % 60, 0).unwrap_or_default()
}

/// Every quarter hour of a day, labelled `12:00 AM` to `11:45 PM` with values
/// `HH:MM`, the [`next_quarter_hour`] after `now` selected.
pub fn time_options(now: NaiveTime) -> PickerOptions {
    let preselect = next_quarter_hour(now);
    let options = (0..TIME_OPTIONS_PER_DAY as u32)
        .filter_map(|slot| {
            let minutes = slot * TIME_STEP_MINUTES;
            NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        })
        .map(|time| {
            let option = SelectOption::new(time.format("%H:%M").to_string(), format_ampm(time));
            if time == preselect {
                option.selected()
            } else {
                option
            }
        })
        .collect();
    PickerOptions::mirrored(options)
}
