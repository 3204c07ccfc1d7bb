//! Date windows for the event list filters
//!
//! Calendar boundaries (day, week, month) are computed in the offset of the
//! reference time, so "today" means today where the viewer is.

use chrono::{DateTime, Datelike, Days, Duration, FixedOffset, Months, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};

use crate::models::filter::{DateRange, FilterCriteria};

/// Closed interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl Interval {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    /// An interval no instant falls into
    pub fn empty() -> Self {
        Self {
            start: DateTime::<Utc>::MAX_UTC.fixed_offset(),
            end: DateTime::<Utc>::MIN_UTC.fixed_offset(),
        }
    }

    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Resolve the date constraint of `criteria`; `None` means unconstrained.
///
/// An explicit date wins over the range and is bounded above by `now`, not by
/// the end of that day.
pub fn resolve_window(
    criteria: &FilterCriteria,
    now: DateTime<FixedOffset>,
    week_start: Weekday,
) -> Option<Interval> {
    if let Some(date) = criteria.explicit_date {
        return Some(bounded(start_of_day(date, *now.offset()).map(|start| (start, now))));
    }

    let window = match criteria.date_range {
        DateRange::All => return None,
        DateRange::Today => start_of_day(now.date_naive(), *now.offset()).map(|start| (start, now)),
        DateRange::CurrentWeek => start_of_week(now, week_start).map(|start| (start, now)),
        DateRange::LastWeek => start_of_week(now, week_start).and_then(|this_week| {
            let start = this_week.checked_sub_days(Days::new(7))?;
            Some((start, just_before(this_week)?))
        }),
        DateRange::CurrentMonth => start_of_month(now).map(|start| (start, now)),
        DateRange::LastMonth => start_of_month(now).and_then(|this_month| {
            let start = this_month.checked_sub_months(Months::new(1))?;
            Some((start, just_before(this_month)?))
        }),
    };

    Some(bounded(window))
}

fn bounded(window: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>) -> Interval {
    window
        .map(|(start, end)| Interval::new(start, end))
        .unwrap_or_else(Interval::empty)
}

/// Midnight at the start of `date` in `offset`
pub fn start_of_day(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&date.and_time(NaiveTime::MIN)).single()
}

/// Midnight on the most recent `week_start` on or before `now`
pub fn start_of_week(now: DateTime<FixedOffset>, week_start: Weekday) -> Option<DateTime<FixedOffset>> {
    let today = now.date_naive();
    let days_back = (7 + today.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    let first_day = today.checked_sub_days(Days::new(u64::from(days_back)))?;
    start_of_day(first_day, *now.offset())
}

/// Midnight on the first day of the month containing `now`
pub fn start_of_month(now: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    start_of_day(now.date_naive().with_day(1)?, *now.offset())
}

fn just_before(instant: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    instant.checked_sub_signed(Duration::nanoseconds(1))
}
