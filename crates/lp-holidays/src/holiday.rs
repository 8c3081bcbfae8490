//! `Holiday` — a dated, named public day off.

use chrono::NaiveDate;

/// A public holiday: a calendar date with a display name.
///
/// Holidays for a year form an ordered list, deduplicated by date
/// (see [`normalize`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// The calendar day.
    pub date: NaiveDate,
    /// Display name, e.g. `"Easter Monday"`.
    pub name: String,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

impl PartialOrd for Holiday {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Holiday {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.date)
    }
}

/// Sort holidays by date and drop duplicate dates, keeping the first name.
///
/// Calendar implementations call this before returning their year list so
/// that consumers always see an ordered, deduplicated set.
pub fn normalize(mut holidays: Vec<Holiday>) -> Vec<Holiday> {
    holidays.sort();
    holidays.dedup_by_key(|h| h.date);
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ordered_by_date() {
        let a = Holiday::new(date(2025, 12, 25), "Christmas Day");
        let b = Holiday::new(date(2025, 1, 1), "New Year's Day");
        assert!(b < a);
    }

    #[test]
    fn normalize_sorts_and_dedups() {
        let list = vec![
            Holiday::new(date(2025, 12, 26), "Boxing Day"),
            Holiday::new(date(2025, 1, 1), "New Year's Day"),
            Holiday::new(date(2025, 1, 1), "Jour de l'an"),
        ];
        let normalized = normalize(list);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].date, date(2025, 1, 1));
        assert_eq!(normalized[1].date, date(2025, 12, 26));
    }

    #[test]
    fn display() {
        let h = Holiday::new(date(2025, 5, 1), "Labour Day");
        assert_eq!(h.to_string(), "Labour Day (2025-05-01)");
    }
}
