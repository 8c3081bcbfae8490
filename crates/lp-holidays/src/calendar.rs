//! `HolidayCalendar` trait and calendar utilities.
//!
//! A holiday calendar enumerates the named public holidays of a year.
//! Unlike a business-day calendar it answers "which days, and what are
//! they called", not "is this day tradable".

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::calendars::{Germany, Sweden, UnitedStates};
use crate::holiday::Holiday;

/// A supplier of public holidays.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Germany"`).
    fn name(&self) -> &str;

    /// All public holidays of `year`, ordered by date and deduplicated.
    ///
    /// Includes both fixed-date and movable (Easter-derived) holidays.
    fn holidays(&self, year: i32) -> Vec<Holiday>;

    /// Return `true` if `date` is a public holiday in this calendar.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays(date.year()).iter().any(|h| h.date == date)
    }

    /// The holiday dates of `year` as an ordered set, names dropped.
    ///
    /// This is the shape the optimizer consumes.
    fn holiday_dates(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.holidays(year).into_iter().map(|h| h.date).collect()
    }
}

/// A calendar whose holidays are entered manually at run time.
///
/// Useful for locales without a built-in implementation, or for layering
/// regional extras on top of data fetched elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CustomCalendar {
    name: String,
    entries: BTreeMap<NaiveDate, String>,
}

impl CustomCalendar {
    /// Create an empty custom calendar with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Add a holiday. Replaces any existing entry on the same date.
    pub fn add_holiday(&mut self, date: NaiveDate, name: impl Into<String>) {
        self.entries.insert(date, name.into());
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) {
        self.entries.remove(&date);
    }

    /// Number of entered holidays across all years.
    pub fn holiday_count(&self) -> usize {
        self.entries.len()
    }
}

impl HolidayCalendar for CustomCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        // BTreeMap iteration is already date-ordered.
        self.entries
            .iter()
            .filter(|(d, _)| d.year() == year)
            .map(|(d, n)| Holiday::new(*d, n.clone()))
            .collect()
    }
}

/// Look up a built-in calendar by ISO 3166 country code.
///
/// Returns `None` for unknown locales; callers degrade to an empty holiday
/// set (weekend-only bridging), never an error.
pub fn for_locale(code: &str) -> Option<Box<dyn HolidayCalendar>> {
    match code.to_ascii_uppercase().as_str() {
        "DE" => Some(Box::new(Germany)),
        "SE" => Some(Box::new(Sweden)),
        "US" => Some(Box::new(UnitedStates)),
        _ => None,
    }
}
