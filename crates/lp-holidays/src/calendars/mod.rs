//! Concrete calendar implementations (locale specific).

pub mod germany;
pub mod sweden;
pub mod united_states;

pub use germany::Germany;
pub use sweden::Sweden;
pub use united_states::UnitedStates;

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Build a date from components known to be valid.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed holiday date is valid")
}

/// The n-th occurrence of `weekday` in `year`/`month` (`n` >= 1, <= 4).
pub(crate) fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
    let first = ymd(year, month, 1);
    let skip =
        (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    first + Days::new(u64::from(skip + 7 * (n - 1)))
}

/// The last occurrence of `weekday` in `year`/`month`.
pub(crate) fn last_weekday(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
    let last = last_day_of_month(year, month);
    let back =
        (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    last - Days::new(u64::from(back))
}

/// The `weekday` falling within day-of-month `[lo, hi]` of `year`/`month`.
///
/// The window must span at least seven days' worth of candidates
/// (e.g. Swedish Midsummer Eve: the Friday between June 19 and 25).
pub(crate) fn weekday_between(
    year: i32,
    month: u32,
    lo: u32,
    hi: u32,
    weekday: Weekday,
) -> NaiveDate {
    (lo..=hi)
        .map(|d| ymd(year, month, d))
        .find(|d| d.weekday() == weekday)
        .expect("a seven-day window contains every weekday")
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    ymd(next_y, next_m, 1)
        .pred_opt()
        .expect("predecessor of a first-of-month exists")
}
