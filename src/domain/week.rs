//! ISO week bucketing used by the weekly reports.

use std::fmt::{Display, Formatter};

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::domain::types::DateRange;

/// ISO-8601 week identifier. Ordering follows the calendar.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Monday opening the week.
    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Label in the `2026-W07` form.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Display for WeekKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Every ISO week overlapping the range, in calendar order.
pub fn weeks_in(range: &DateRange) -> Vec<WeekKey> {
    let mut weeks = Vec::new();
    let mut cursor = WeekKey::of(range.start()).start();
    while cursor <= range.end() {
        weeks.push(WeekKey::of(cursor));
        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    weeks
}

/// Monday of the week `weeks_back` weeks before the one containing `today`.
pub fn monday_weeks_back(today: NaiveDate, weeks_back: u64) -> NaiveDate {
    let monday = WeekKey::of(today).start();
    monday
        .checked_sub_days(Days::new(7 * weeks_back))
        .unwrap_or(monday)
}
