//! Period resolution: maps a symbolic selection (preset identifier or a
//! custom draft range) to a concrete `[start, end]` pair in local time.
//!
//! Resolved ranges always span whole days: `start` is at 00:00:00.000 and
//! `end` at 23:59:59.999 of the respective boundary day. Weeks start on
//! Monday.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A concrete resolved period, inclusive at both ends.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Builds a whole-day range from two calendar dates, swapping the
    /// boundaries when they arrive reversed.
    pub fn over_days(start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        Self {
            start: day_start(start),
            end: day_end(end),
        }
    }

    /// Number of calendar days covered, inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start.date() <= date && date <= self.end.date()
    }

    /// Iterates the calendar dates of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.start.date();
        (0..self.num_days()).filter_map(move |offset| start.checked_add_days(chrono::Days::new(offset as u64)))
    }
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999 without unwrapping a time constructor.
    day_start(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Named relative date ranges offered by the period picker.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PeriodPreset {
    Today,
    Yesterday,
    Last7,
    Last30,
    Last90,
    /// Previous full calendar month.
    LastMonth,
    /// Previous full calendar year.
    LastYear,
    WeekToDate,
    MonthToDate,
    QuarterToDate,
    YearToDate,
    Tomorrow,
    Next7,
    /// Next full calendar month.
    NextMonth,
    Next30,
    /// From the earliest known record to today.
    SinceStart,
}

impl PeriodPreset {
    /// Resolves the preset against `now`.
    ///
    /// `since_floor` supplies the earliest known record timestamp for
    /// [`PeriodPreset::SinceStart`]; with no records at all the range falls
    /// back to Jan 1 of the current year.
    pub fn resolve(self, now: NaiveDateTime, since_floor: Option<NaiveDateTime>) -> DateRange {
        let today = now.date();
        match self {
            PeriodPreset::Today => DateRange::over_days(today, today),
            PeriodPreset::Yesterday => {
                let d = today - Duration::days(1);
                DateRange::over_days(d, d)
            }
            PeriodPreset::Last7 => DateRange::over_days(today - Duration::days(6), today),
            PeriodPreset::Last30 => DateRange::over_days(today - Duration::days(29), today),
            PeriodPreset::Last90 => DateRange::over_days(today - Duration::days(89), today),
            PeriodPreset::LastMonth => {
                let first_this = first_of_month(today);
                let last_prev = first_this - Duration::days(1);
                DateRange::over_days(first_of_month(last_prev), last_prev)
            }
            PeriodPreset::LastYear => {
                let year = today.year() - 1;
                DateRange::over_days(ymd(year, 1, 1, today), ymd(year, 12, 31, today))
            }
            PeriodPreset::WeekToDate => {
                // Monday is day 0.
                let monday =
                    today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                DateRange::over_days(monday, today)
            }
            PeriodPreset::MonthToDate => DateRange::over_days(first_of_month(today), today),
            PeriodPreset::QuarterToDate => {
                let quarter_month = (today.month0() / 3) * 3 + 1;
                DateRange::over_days(ymd(today.year(), quarter_month, 1, today), today)
            }
            PeriodPreset::YearToDate => DateRange::over_days(ymd(today.year(), 1, 1, today), today),
            PeriodPreset::Tomorrow => {
                let d = today + Duration::days(1);
                DateRange::over_days(d, d)
            }
            PeriodPreset::Next7 => DateRange::over_days(today, today + Duration::days(6)),
            PeriodPreset::NextMonth => {
                let first_next = first_of_month(today)
                    .checked_add_months(Months::new(1))
                    .unwrap_or(today);
                let last_next = first_next
                    .checked_add_months(Months::new(1))
                    .map(|d| d - Duration::days(1))
                    .unwrap_or(first_next);
                DateRange::over_days(first_next, last_next)
            }
            PeriodPreset::Next30 => DateRange::over_days(today, today + Duration::days(29)),
            PeriodPreset::SinceStart => {
                let floor = since_floor
                    .map(|dt| dt.date())
                    .unwrap_or_else(|| ymd(today.year(), 1, 1, today));
                DateRange::over_days(floor, today)
            }
        }
    }
}

/// The user's period control selection: a preset or an explicit draft range.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PeriodSelection {
    Preset(PeriodPreset),
    /// Draft range taken verbatim; reversed boundaries are swapped, not
    /// rejected.
    Custom { start: NaiveDate, end: NaiveDate },
}

impl PeriodSelection {
    pub fn resolve(&self, now: NaiveDateTime, since_floor: Option<NaiveDateTime>) -> DateRange {
        match *self {
            PeriodSelection::Preset(preset) => preset.resolve(now, since_floor),
            PeriodSelection::Custom { start, end } => DateRange::over_days(start, end),
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Infallible for the calendar values used above; falls back to `default`
/// so the resolver never panics.
fn ymd(year: i32, month: u32, day: u32, default: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(default)
}
