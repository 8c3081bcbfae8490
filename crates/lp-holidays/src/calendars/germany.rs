//! Germany calendar.

use chrono::Duration;

use super::ymd;
use crate::calendar::HolidayCalendar;
use crate::easter::easter_sunday;
use crate::holiday::{normalize, Holiday};

/// Germany — nationwide statutory holidays.
///
/// * New Year's Day (Jan 1)
/// * Good Friday (Easter − 2)
/// * Easter Monday (Easter + 1)
/// * Labour Day (May 1)
/// * Ascension Day (Easter + 39)
/// * Whit Monday (Easter + 50)
/// * German Unity Day (Oct 3)
/// * Christmas Day (Dec 25)
/// * Boxing Day (Dec 26)
///
/// State-specific extras (Epiphany, Corpus Christi, Reformation Day, …)
/// can be layered on with a [`CustomCalendar`](crate::CustomCalendar).
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl HolidayCalendar for Germany {
    fn name(&self) -> &str {
        "Germany"
    }

    fn holidays(&self, year: i32) -> Vec<Holiday> {
        let easter = easter_sunday(year);
        normalize(vec![
            Holiday::new(ymd(year, 1, 1), "New Year's Day"),
            Holiday::new(easter - Duration::days(2), "Good Friday"),
            Holiday::new(easter + Duration::days(1), "Easter Monday"),
            Holiday::new(ymd(year, 5, 1), "Labour Day"),
            Holiday::new(easter + Duration::days(39), "Ascension Day"),
            Holiday::new(easter + Duration::days(50), "Whit Monday"),
            Holiday::new(ymd(year, 10, 3), "German Unity Day"),
            Holiday::new(ymd(year, 12, 25), "Christmas Day"),
            Holiday::new(ymd(year, 12, 26), "Boxing Day"),
        ])
    }
}
