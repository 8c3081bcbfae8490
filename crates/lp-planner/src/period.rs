//! `Period` — one planned break.

use chrono::NaiveDate;

use crate::break_type::BreakType;

/// A planned break: an inclusive date range plus its vacation cost.
///
/// Invariants: `end >= start`; `total_days == end - start + 1`;
/// `vacation_days_needed` is the number of days in the range that would
/// otherwise be ordinary workdays.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// First day off (inclusive).
    pub start: NaiveDate,
    /// Last day off (inclusive).
    pub end: NaiveDate,
    /// Length of the range in days.
    pub total_days: u32,
    /// Vacation days spent on this break.
    pub vacation_days_needed: u32,
    /// Length bucket.
    pub break_type: BreakType,
    /// Human-readable label, e.g. `"Long weekend in April"`.
    pub description: String,
}

impl Period {
    /// Build a period over `[start, end]`, deriving `total_days`, the
    /// break bucket, and the description.
    ///
    /// Returns `None` when the range is reversed or spans fewer than
    /// 3 days — such ranges are never surfaced as breaks.
    pub(crate) fn from_range(
        start: NaiveDate,
        end: NaiveDate,
        vacation_days_needed: u32,
    ) -> Option<Self> {
        let total_days = (end - start).num_days() + 1;
        let break_type = BreakType::from_length(total_days)?;
        let description = format!("{} in {}", break_type.label(), start.format("%B"));
        Some(Self {
            start,
            end,
            total_days: total_days as u32,
            vacation_days_needed,
            break_type,
            description,
        })
    }

    /// Return `true` if `date` falls within the period (inclusive bounds).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Return `true` if the two periods share at least one date.
    pub fn overlaps(&self, other: &Period) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} – {}: {} ({} vacation days)",
            self.start, self.end, self.description, self.vacation_days_needed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn derives_length_and_bucket() {
        let p = Period::from_range(date(2026, 4, 3), date(2026, 4, 6), 1).unwrap();
        assert_eq!(p.total_days, 4);
        assert_eq!(p.break_type, BreakType::LongWeekend);
        assert_eq!(p.description, "Long weekend in April");
    }

    #[test]
    fn rejects_short_and_reversed_ranges() {
        assert!(Period::from_range(date(2026, 1, 3), date(2026, 1, 4), 0).is_none());
        assert!(Period::from_range(date(2026, 1, 4), date(2026, 1, 1), 0).is_none());
    }

    #[test]
    fn contains_is_inclusive() {
        let p = Period::from_range(date(2026, 7, 4), date(2026, 7, 12), 5).unwrap();
        assert!(p.contains(date(2026, 7, 4)));
        assert!(p.contains(date(2026, 7, 12)));
        assert!(!p.contains(date(2026, 7, 13)));
        assert!(!p.contains(date(2026, 7, 3)));
    }

    #[test]
    fn overlap() {
        let a = Period::from_range(date(2026, 5, 1), date(2026, 5, 3), 0).unwrap();
        let b = Period::from_range(date(2026, 5, 3), date(2026, 5, 5), 1).unwrap();
        let c = Period::from_range(date(2026, 5, 4), date(2026, 5, 6), 1).unwrap();
        assert!(a.overlaps(&b)); // share May 3
        assert!(!a.overlaps(&c)); // adjacent, no shared date
    }

    #[test]
    fn display() {
        let p = Period::from_range(date(2026, 4, 3), date(2026, 4, 6), 1).unwrap();
        assert_eq!(
            p.to_string(),
            "2026-04-03 – 2026-04-06: Long weekend in April (1 vacation days)"
        );
    }
}
