//! Sweden calendar.

use chrono::{Duration, Weekday};

use super::{weekday_between, ymd};
use crate::calendar::HolidayCalendar;
use crate::easter::easter_sunday;
use crate::holiday::{normalize, Holiday};

/// Sweden.
///
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Good Friday (Easter − 2)
/// * Easter Monday (Easter + 1)
/// * Labour Day (May 1)
/// * Ascension Day (Easter + 39)
/// * National Day (Jun 6)
/// * Midsummer Eve (Friday between Jun 19–25)
/// * Christmas Eve (Dec 24)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
/// * New Year's Eve (Dec 31)
///
/// Christmas Eve and New Year's Eve are de-facto days off and treated as
/// holidays here, as most Swedish employers do.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sweden;

impl HolidayCalendar for Sweden {
    fn name(&self) -> &str {
        "Sweden"
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        let easter = easter_sunday(year);
        normalize(vec![
            Holiday::new(ymd(year, 1, 1), "New Year's Day"),
            Holiday::new(ymd(year, 1, 6), "Epiphany"),
            Holiday::new(easter - Duration::days(2), "Good Friday"),
            Holiday::new(easter + Duration::days(1), "Easter Monday"),
            Holiday::new(ymd(year, 5, 1), "Labour Day"),
            Holiday::new(easter + Duration::days(39), "Ascension Day"),
            Holiday::new(ymd(year, 6, 6), "National Day"),
            Holiday::new(
                weekday_between(year, 6, 19, 25, Weekday::Fri),
                "Midsummer Eve",
            ),
            Holiday::new(ymd(year, 12, 24), "Christmas Eve"),
            Holiday::new(ymd(year, 12, 25), "Christmas Day"),
            Holiday::new(ymd(year, 12, 26), "Boxing Day"),
            Holiday::new(ymd(year, 12, 31), "New Year's Eve"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epiphany() {
        assert!(Sweden.is_holiday(ymd(2023, 1, 6)));
    }

    #[test]
    fn midsummer_eve_is_the_friday() {
        assert!(Sweden.is_holiday(ymd(2023, 6, 23)));
        assert!(Sweden.is_holiday(ymd(2026, 6, 19)));
        assert!(!Sweden.is_holiday(ymd(2023, 6, 22)));
    }

    #[test]
    fn national_day() {
        assert!(Sweden.is_holiday(ymd(2023, 6, 6)));
    }

    #[test]
    fn christmas_week_and_new_years_eve() {
        assert!(Sweden.is_holiday(ymd(2024, 12, 24)));
        assert!(Sweden.is_holiday(ymd(2024, 12, 25)));
        assert!(Sweden.is_holiday(ymd(2024, 12, 26)));
        assert!(Sweden.is_holiday(ymd(2024, 12, 31)));
    }

    #[test]
    fn twelve_holidays_per_year() {
        assert_eq!(Sweden.holidays(2025).len(), 12);
    }

    #[test]
    fn normal_day_is_not_a_holiday() {
        assert!(!Sweden.is_holiday(ymd(2023, 6, 15)));
    }
}
