//! Single-day classification.

use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::period::Period;

/// Classification of a single calendar day.
///
/// Variants are mutually exclusive; [`classify`] applies them in a fixed
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayType {
    /// Before the reference day.
    Past,
    /// Saturday or Sunday.
    Weekend,
    /// A public holiday (or company-designated day off).
    Holiday,
    /// Inside a planned leave period.
    Vacation,
    /// An ordinary working day.
    Workday,
}

/// Classify `date` relative to `reference_today`.
///
/// Priority, first match wins: past, weekend, holiday, vacation, workday.
/// Company-designated days off are classified by folding them into
/// `holidays`. Pure — the result depends only on the arguments.
pub fn classify(
    date: NaiveDate,
    holidays: &BTreeSet<NaiveDate>,
    vacation_periods: &[Period],
    reference_today: NaiveDate,
) -> DayType {
    if date < reference_today {
        return DayType::Past;
    }
    if is_weekend(date) {
        return DayType::Weekend;
    }
    if holidays.contains(&date) {
        return DayType::Holiday;
    }
    if vacation_periods.iter().any(|p| p.contains(date)) {
        return DayType::Vacation;
    }
    DayType::Workday
}

/// Like [`classify`], with the reference day taken from the local clock
/// truncated to day granularity.
pub fn classify_today(
    date: NaiveDate,
    holidays: &BTreeSet<NaiveDate>,
    vacation_periods: &[Period],
) -> DayType {
    classify(date, holidays, vacation_periods, Local::now().date_naive())
}

/// Return `true` if `date` falls on a Saturday or Sunday.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
