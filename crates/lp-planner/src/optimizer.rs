//! Optimizer entry point.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use lp_core::{ensure, Error, Result};

use crate::candidate::{self, FreeDayGrid, MAX_BRIDGE_GAP};
use crate::mode::Mode;
use crate::schedule::{assemble, Schedule};
use crate::selector;

/// First supported planning year.
pub const MIN_YEAR: i32 = 1970;

/// Last supported planning year.
pub const MAX_YEAR: i32 = 2100;

/// Builder for one optimizer run.
///
/// One call computes one [`Schedule`] from one immutable snapshot of
/// inputs; recomputation with the same inputs yields the same schedule.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use lp_planner::{Mode, Optimizer};
///
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let schedule = Optimizer::new(2026, 25)
///     .with_holidays([new_year])
///     .with_mode(Mode::Weeks)
///     .optimize()
///     .unwrap();
/// assert!(schedule.vacation_days_used <= 25);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer {
    year: i32,
    vacation_day_budget: i32,
    holidays: BTreeSet<NaiveDate>,
    company_days_off: BTreeSet<NaiveDate>,
    mode: Mode,
    max_bridge_gap: u32,
}

impl Optimizer {
    /// Begin configuring a run for `year` with the given leave budget.
    pub fn new(year: i32, vacation_day_budget: i32) -> Self {
        Self {
            year,
            vacation_day_budget,
            holidays: BTreeSet::new(),
            company_days_off: BTreeSet::new(),
            mode: Mode::default(),
            max_bridge_gap: MAX_BRIDGE_GAP,
        }
    }

    /// Set the public holidays. May be empty — the optimizer then bridges
    /// weekends (and company days) only.
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays = dates.into_iter().collect();
        self
    }

    /// Set company-designated days off, treated as pre-existing free days
    /// exactly like holidays.
    pub fn with_company_days(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.company_days_off = dates.into_iter().collect();
        self
    }

    /// Set the strategy preference (default [`Mode::Balanced`]).
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Override the largest bridgeable workday gap (default
    /// [`MAX_BRIDGE_GAP`]).
    pub fn with_max_bridge_gap(mut self, gap: u32) -> Self {
        self.max_bridge_gap = gap;
        self
    }

    /// Run the optimizer.
    ///
    /// # Errors
    /// [`Error::InvalidBudget`] on a negative budget,
    /// [`Error::InvalidYear`] outside `[MIN_YEAR, MAX_YEAR]`, and
    /// [`Error::Internal`] if assembly detects a violated invariant.
    pub fn optimize(self) -> Result<Schedule> {
        ensure!(
            self.vacation_day_budget >= 0,
            Error::InvalidBudget {
                budget: self.vacation_day_budget
            }
        );
        ensure!(
            (MIN_YEAR..=MAX_YEAR).contains(&self.year),
            Error::InvalidYear {
                year: self.year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            }
        );
        let budget = self.vacation_day_budget as u32;

        // Dates outside the target year never affect the plan.
        let holidays: BTreeSet<_> = self
            .holidays
            .into_iter()
            .filter(|d| d.year() == self.year)
            .collect();
        let company_days: BTreeSet<_> = self
            .company_days_off
            .into_iter()
            .filter(|d| d.year() == self.year)
            .collect();

        let grid = FreeDayGrid::new(self.year, &holidays, &company_days);
        let (runs, candidates) = candidate::generate(&grid, self.max_bridge_gap);
        let selected = selector::select(candidates, budget, self.mode, &grid);
        assemble(self.year, self.mode, budget, &selected, &runs, &grid)
    }
}

/// One-call convenience over [`Optimizer`].
pub fn optimize(
    year: i32,
    vacation_day_budget: i32,
    holidays: &BTreeSet<NaiveDate>,
    mode: Mode,
) -> Result<Schedule> {
    Optimizer::new(year, vacation_day_budget)
        .with_holidays(holidays.iter().copied())
        .with_mode(mode)
        .optimize()
}
