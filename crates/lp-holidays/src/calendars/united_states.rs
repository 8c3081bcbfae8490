//! United States calendar.

use chrono::{Datelike, NaiveDate, Weekday};

use super::{last_weekday, nth_weekday, ymd};
use crate::calendar::HolidayCalendar;
use crate::holiday::{normalize, Holiday};

/// United States — federal holidays.
///
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1983)
/// * Presidents' Day (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2022)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25)
///
/// Fixed-date holidays falling on a weekend also yield the federally
/// observed weekday: Saturday → preceding Friday, Sunday → following
/// Monday.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl HolidayCalendar for UnitedStates {
    fn name(&self) -> &str {
        "United States"
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        let mut list = Vec::new();
        push_observed(&mut list, ymd(year, 1, 1), "New Year's Day");
        // Next year's Jan 1 on a Saturday is observed on this year's Dec 31.
        if ymd(year + 1, 1, 1).weekday() == Weekday::Sat {
            list.push(Holiday::new(ymd(year, 12, 31), "New Year's Day (observed)"));
        }
        if year >= 1983 {
            list.push(Holiday::new(
                nth_weekday(year, 1, Weekday::Mon, 3),
                "Martin Luther King Jr. Day",
            ));
        }
        list.push(Holiday::new(
            nth_weekday(year, 2, Weekday::Mon, 3),
            "Presidents' Day",
        ));
        list.push(Holiday::new(
            last_weekday(year, 5, Weekday::Mon),
            "Memorial Day",
        ));
        if year >= 2022 {
            push_observed(&mut list, ymd(year, 6, 19), "Juneteenth");
        }
        push_observed(&mut list, ymd(year, 7, 4), "Independence Day");
        list.push(Holiday::new(
            nth_weekday(year, 9, Weekday::Mon, 1),
            "Labor Day",
        ));
        list.push(Holiday::new(
            nth_weekday(year, 10, Weekday::Mon, 2),
            "Columbus Day",
        ));
        push_observed(&mut list, ymd(year, 11, 11), "Veterans Day");
        list.push(Holiday::new(
            nth_weekday(year, 11, Weekday::Thu, 4),
            "Thanksgiving Day",
        ));
        push_observed(&mut list, ymd(year, 12, 25), "Christmas Day");
        normalize(list)
    }
}

/// Push the actual date plus, for weekend dates, the observed weekday —
/// but only when the observed day lands in the same year.
fn push_observed(list: &mut Vec<Holiday>, date: NaiveDate, name: &str) {
    list.push(Holiday::new(date, name));
    let observed = match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => None,
    };
    if let Some(obs) = observed {
        if obs.year() == date.year() {
            list.push(Holiday::new(obs, format!("{name} (observed)")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_holidays_2023() {
        let cal = UnitedStates;
        assert!(cal.is_holiday(ymd(2023, 1, 16))); // MLK Day
        assert!(cal.is_holiday(ymd(2023, 2, 20))); // Presidents' Day
        assert!(cal.is_holiday(ymd(2023, 5, 29))); // Memorial Day
        assert!(cal.is_holiday(ymd(2023, 9, 4))); // Labor Day
        assert!(cal.is_holiday(ymd(2023, 10, 9))); // Columbus Day
    }

    #[test]
    fn thanksgiving_2023() {
        assert!(UnitedStates.is_holiday(ymd(2023, 11, 23)));
    }

    #[test]
    fn christmas_2021_observed_on_friday() {
        // Dec 25, 2021 was a Saturday.
        let cal = UnitedStates;
        assert!(cal.is_holiday(ymd(2021, 12, 25)));
        assert!(cal.is_holiday(ymd(2021, 12, 24)));
    }

    #[test]
    fn new_year_2022_observed_in_previous_year() {
        // Jan 1, 2022 was a Saturday — observed Friday Dec 31, 2021.
        assert!(UnitedStates.is_holiday(ymd(2021, 12, 31)));
    }

    #[test]
    fn juneteenth_from_2022_only() {
        assert!(!UnitedStates.is_holiday(ymd(2021, 6, 19)));
        assert!(UnitedStates.is_holiday(ymd(2022, 6, 19)));
        assert!(UnitedStates.is_holiday(ymd(2022, 6, 20))); // Sunday → Monday
    }

    #[test]
    fn independence_day_2026_observed_on_friday() {
        // Jul 4, 2026 is a Saturday.
        let cal = UnitedStates;
        assert!(cal.is_holiday(ymd(2026, 7, 4)));
        assert!(cal.is_holiday(ymd(2026, 7, 3)));
    }

    #[test]
    fn normal_day_is_not_a_holiday() {
        assert!(!UnitedStates.is_holiday(ymd(2023, 6, 15)));
    }
}
