//! `Schedule` — the assembled result of one optimizer run.

use lp_core::{ensure, Error, Result};

use crate::candidate::{FreeDayGrid, FreeRun};
use crate::mode::Mode;
use crate::period::Period;
use crate::selector::Selected;

/// The final, validated plan for one year.
///
/// Consumers treat `periods` as read-only; a new schedule replaces the
/// old one wholesale on any input change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// The planning year.
    pub year: i32,
    /// Strategy preference the schedule was computed under.
    pub mode: Mode,
    /// Breaks sorted by start date, pairwise disjoint.
    pub periods: Vec<Period>,
    /// Sum of the periods' lengths.
    pub total_days_off: u32,
    /// Sum of the periods' vacation costs.
    pub vacation_days_used: u32,
}

impl Schedule {
    /// Days off gained per vacation day spent, formatted `"X.XX"`.
    pub fn efficiency(&self) -> String {
        crate::efficiency::efficiency(
            i64::from(self.total_days_off),
            i64::from(self.vacation_days_used),
        )
    }
}

/// Merge the selected ranges and surviving free runs into a `Schedule`.
///
/// Every total is recomputed from the final period list — selector
/// bookkeeping is re-derived, not trusted — and the disjointness and
/// budget invariants are re-checked. A violation here is a defect in the
/// selector and surfaces as [`Error::Internal`], never a corrected
/// result.
pub(crate) fn assemble(
    year: i32,
    mode: Mode,
    budget: u32,
    selected: &[Selected],
    runs: &[FreeRun],
    grid: &FreeDayGrid,
) -> Result<Schedule> {
    let mut periods: Vec<Period> = Vec::new();

    for s in selected {
        let cost = grid.workdays_between(s.start, s.end);
        ensure!(
            cost == s.vacation_days_needed,
            Error::Internal(format!(
                "stale cost for {}..{}: recorded {}, recomputed {}",
                s.start, s.end, s.vacation_days_needed, cost
            ))
        );
        if let Some(p) = Period::from_range(s.start, s.end, cost) {
            periods.push(p);
        }
    }

    // Free runs of 3+ days not swallowed by a selection are breaks in
    // their own right, at zero cost. Plain weekends stay unreported.
    for run in runs {
        if run.total_days() < 3 {
            continue;
        }
        if selected.iter().any(|s| s.start <= run.end && run.start <= s.end) {
            continue;
        }
        if let Some(p) = Period::from_range(run.start, run.end, 0) {
            periods.push(p);
        }
    }

    periods.sort_by_key(|p| p.start);
    for pair in periods.windows(2) {
        ensure!(
            pair[0].end < pair[1].start,
            Error::Internal(format!(
                "overlapping periods starting {} and {}",
                pair[0].start, pair[1].start
            ))
        );
    }

    let total_days_off = periods.iter().map(|p| p.total_days).sum();
    let vacation_days_used: u32 = periods.iter().map(|p| p.vacation_days_needed).sum();
    ensure!(
        vacation_days_used <= budget,
        Error::Internal(format!(
            "vacation days used {vacation_days_used} exceed budget {budget}"
        ))
    );

    Ok(Schedule {
        year,
        mode,
        periods,
        total_days_off,
        vacation_days_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grid(year: i32, holidays: &[NaiveDate]) -> FreeDayGrid {
        FreeDayGrid::new(
            year,
            &holidays.iter().copied().collect(),
            &BTreeSet::new(),
        )
    }

    #[test]
    fn totals_come_from_the_period_list() {
        let g = grid(2026, &[date(2026, 1, 1)]);
        let selected = [Selected {
            start: date(2026, 1, 1),
            end: date(2026, 1, 4),
            vacation_days_needed: 1,
        }];
        let schedule = assemble(2026, Mode::Balanced, 1, &selected, &[], &g).unwrap();
        assert_eq!(schedule.total_days_off, 4);
        assert_eq!(schedule.vacation_days_used, 1);
        assert_eq!(schedule.periods.len(), 1);
    }

    #[test]
    fn stale_selector_cost_is_fatal() {
        let g = grid(2026, &[date(2026, 1, 1)]);
        let selected = [Selected {
            start: date(2026, 1, 1),
            end: date(2026, 1, 4),
            vacation_days_needed: 2, // actually costs 1
        }];
        let err = assemble(2026, Mode::Balanced, 5, &selected, &[], &g).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn over_budget_is_fatal() {
        let g = grid(2026, &[date(2026, 1, 1)]);
        let selected = [Selected {
            start: date(2026, 1, 1),
            end: date(2026, 1, 4),
            vacation_days_needed: 1,
        }];
        let err = assemble(2026, Mode::Balanced, 0, &selected, &[], &g).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn overlap_is_fatal() {
        let g = grid(2026, &[date(2026, 1, 1)]);
        let selected = [
            Selected {
                start: date(2026, 1, 1),
                end: date(2026, 1, 4),
                vacation_days_needed: 1,
            },
            Selected {
                start: date(2026, 1, 4),
                end: date(2026, 1, 7),
                vacation_days_needed: 3,
            },
        ];
        let err = assemble(2026, Mode::Balanced, 5, &selected, &[], &g).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn short_free_runs_are_suppressed() {
        let g = grid(2026, &[]);
        // Plain weekends only: every run is 2 days, nothing surfaces.
        let runs = crate::candidate::free_runs(&g);
        let schedule = assemble(2026, Mode::Balanced, 0, &[], &runs, &g).unwrap();
        assert!(schedule.periods.is_empty());
        assert_eq!(schedule.total_days_off, 0);
    }

    #[test]
    fn long_free_runs_surface_at_zero_cost() {
        // Good Friday + Easter Monday 2026 (Apr 3 / Apr 6): Fri–Mon run.
        let g = grid(2026, &[date(2026, 4, 3), date(2026, 4, 6)]);
        let runs = crate::candidate::free_runs(&g);
        let schedule = assemble(2026, Mode::Balanced, 0, &[], &runs, &g).unwrap();
        let easter = schedule
            .periods
            .iter()
            .find(|p| p.start == date(2026, 4, 3))
            .expect("Easter run surfaces");
        assert_eq!(easter.total_days, 4);
        assert_eq!(easter.vacation_days_needed, 0);
    }
}
