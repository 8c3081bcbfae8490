//! Bridge-candidate generation.
//!
//! One date-ascending walk of the year over a free-day grid (weekends,
//! public holidays, company days off) yields the maximal free runs and,
//! from them, the candidate leave periods: bridges that buy the workday
//! gap between two free runs, and extensions that tack a few leave days
//! directly onto one run. Candidates may overlap each other — the
//! selector enforces disjointness later.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::break_type::BreakType;
use crate::day_type::is_weekend;

/// Largest workday gap between two free runs that a single bridge may buy.
///
/// A full Mon–Fri week between two weekends is the limit, so taking a
/// plain workweek off (9 consecutive days for 5 leave days) is always a
/// candidate; longer gaps are multi-week blocks the generator never
/// proposes as one bridge.
pub const MAX_BRIDGE_GAP: u32 = 5;

/// Most extra workdays tacked directly onto one side of a free run.
pub const MAX_RUN_EXTENSION: u32 = 3;

/// One year of free/workday flags, indexed by day of year.
///
/// Days outside the year are unavailable: runs and candidates are
/// truncated at the January 1 / December 31 boundaries.
#[derive(Debug, Clone)]
pub(crate) struct FreeDayGrid {
    year: i32,
    first: NaiveDate,
    free: Vec<bool>,
}

impl FreeDayGrid {
    /// Mark every weekend, holiday, and company day of `year` as free.
    pub fn new(
        year: i32,
        holidays: &BTreeSet<NaiveDate>,
        company_days: &BTreeSet<NaiveDate>,
    ) -> Self {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 exists");
        let next_first = NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("January 1 exists");
        let len = (next_first - first).num_days() as usize;
        let mut free = vec![false; len];
        for (i, flag) in free.iter_mut().enumerate() {
            let date = first + Days::new(i as u64);
            *flag = is_weekend(date) || holidays.contains(&date) || company_days.contains(&date);
        }
        Self { year, first, free }
    }

    /// Number of days in the year (365 or 366).
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// The date at `index` (0 = January 1).
    pub fn date(&self, index: usize) -> NaiveDate {
        self.first + Days::new(index as u64)
    }

    /// The index of `date`, or `None` when it lies outside the year.
    pub fn index(&self, date: NaiveDate) -> Option<usize> {
        (date.year() == self.year).then(|| (date - self.first).num_days() as usize)
    }

    fn is_free_index(&self, index: usize) -> bool {
        self.free[index]
    }

    /// `true` when `date` is inside the year and not a working day.
    pub fn is_free(&self, date: NaiveDate) -> bool {
        self.index(date).is_some_and(|i| self.free[i])
    }

    /// `true` when `date` is inside the year and a working day.
    pub fn is_workday(&self, date: NaiveDate) -> bool {
        self.index(date).is_some_and(|i| !self.free[i])
    }

    /// Number of workdays in `[start, end]` — the vacation cost of taking
    /// that range off.
    pub fn workdays_between(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        let mut count = 0;
        let mut d = start;
        while d <= end {
            if self.is_workday(d) {
                count += 1;
            }
            d += Duration::days(1);
        }
        count
    }
}

/// A maximal run of consecutive free days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FreeRun {
    /// First free day.
    pub start: NaiveDate,
    /// Last free day.
    pub end: NaiveDate,
}

impl FreeRun {
    /// Length of the run in days.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A proposed leave period: a date range plus the vacation days it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    /// First day off (inclusive).
    pub start: NaiveDate,
    /// Last day off (inclusive).
    pub end: NaiveDate,
    /// Workdays inside the range that must be bought with leave.
    pub vacation_days_needed: u32,
    /// Resulting consecutive days off.
    pub total_days: u32,
    /// Locality tag: calendar month (1–12) of the start date.
    pub month: u32,
    /// Locality tag: calendar quarter (1–4) of the start date.
    pub quarter: u8,
}

impl Candidate {
    /// Build a candidate, dropping ranges under 3 days: they can never
    /// surface as a break, and accepting one would only waste budget.
    fn from_range(start: NaiveDate, end: NaiveDate, vacation_days_needed: u32) -> Option<Self> {
        let total_days = (end - start).num_days() + 1;
        BreakType::from_length(total_days)?;
        Some(Self {
            start,
            end,
            vacation_days_needed,
            total_days: total_days as u32,
            month: start.month(),
            quarter: (start.month0() / 3 + 1) as u8,
        })
    }

    /// The break bucket this candidate would land in if selected as-is.
    pub fn projected_break_type(&self) -> BreakType {
        BreakType::from_length(self.total_days as i64).expect("candidates span at least 3 days")
    }
}

/// Collect the maximal free runs of the year, date-ascending.
pub(crate) fn free_runs(grid: &FreeDayGrid) -> Vec<FreeRun> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < grid.len() {
        if grid.is_free_index(i) {
            let start = i;
            while i < grid.len() && grid.is_free_index(i) {
                i += 1;
            }
            runs.push(FreeRun {
                start: grid.date(start),
                end: grid.date(i - 1),
            });
        } else {
            i += 1;
        }
    }
    runs
}

/// Propose the year's bridge and extension candidates.
///
/// Returns the free runs alongside so the assembler can surface unselected
/// zero-cost runs.
pub(crate) fn generate(grid: &FreeDayGrid, max_bridge_gap: u32) -> (Vec<FreeRun>, Vec<Candidate>) {
    let runs = free_runs(grid);
    let mut candidates = Vec::new();

    // Bridges between consecutive free runs.
    for pair in runs.windows(2) {
        let gap = (pair[1].start - pair[0].end).num_days() - 1;
        if (1..=i64::from(max_bridge_gap)).contains(&gap) {
            if let Some(c) = Candidate::from_range(pair[0].start, pair[1].end, gap as u32) {
                candidates.push(c);
            }
        }
    }

    // Extensions: 1..=MAX_RUN_EXTENSION workdays directly before or after
    // a run, stopping at the first non-workday (year boundary or another
    // free run) on that side.
    for run in &runs {
        for j in 1..=i64::from(MAX_RUN_EXTENSION) {
            let day = run.start - Duration::days(j);
            if !grid.is_workday(day) {
                break;
            }
            if let Some(c) = Candidate::from_range(day, run.end, j as u32) {
                candidates.push(c);
            }
        }
        for j in 1..=i64::from(MAX_RUN_EXTENSION) {
            let day = run.end + Duration::days(j);
            if !grid.is_workday(day) {
                break;
            }
            if let Some(c) = Candidate::from_range(run.start, day, j as u32) {
                candidates.push(c);
            }
        }
    }

    log::trace!(
        "year {}: {} free runs, {} candidates",
        grid.year,
        runs.len(),
        candidates.len()
    );
    (runs, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn grid_marks_weekends_and_holidays() {
        let g = grid(2026, &[date(2026, 1, 1)]);
        assert!(g.is_free(date(2026, 1, 1))); // Thursday holiday
        assert!(g.is_free(date(2026, 1, 3))); // Saturday
        assert!(g.is_workday(date(2026, 1, 2))); // Friday
        // Out of year: neither free nor a workday.
        assert!(!g.is_free(date(2025, 12, 31)));
        assert!(!g.is_workday(date(2025, 12, 31)));
    }

    #[test]
    fn grid_length_tracks_leap_years() {
        assert_eq!(grid(2026, &[]).len(), 365);
        assert_eq!(grid(2028, &[]).len(), 366);
    }

    #[test]
    fn workdays_between_counts_cost() {
        let g = grid(2026, &[date(2026, 1, 1)]);
        // Thu Jan 1 (holiday) .. Sun Jan 4: only Fri Jan 2 is a workday.
        assert_eq!(g.workdays_between(date(2026, 1, 1), date(2026, 1, 4)), 1);
        // A plain workweek.
        assert_eq!(g.workdays_between(date(2026, 1, 5), date(2026, 1, 9)), 5);
    }

    #[test]
    fn free_runs_are_maximal_and_ascending() {
        // 2026 with New Year only: first runs are [Jan 1], [Jan 3–4].
        let g = grid(2026, &[date(2026, 1, 1)]);
        let runs = free_runs(&g);
        assert_eq!(runs[0].start, date(2026, 1, 1));
        assert_eq!(runs[0].end, date(2026, 1, 1));
        assert_eq!(runs[1].start, date(2026, 1, 3));
        assert_eq!(runs[1].end, date(2026, 1, 4));
        assert!(runs.windows(2).all(|w| w[0].end < w[1].start));
    }

    #[test]
    fn bridge_over_single_workday() {
        let g = grid(2026, &[date(2026, 1, 1)]);
        let (_, candidates) = generate(&g, MAX_BRIDGE_GAP);
        let bridge = candidates
            .iter()
            .find(|c| c.start == date(2026, 1, 1) && c.end == date(2026, 1, 4))
            .expect("New Year bridge proposed");
        assert_eq!(bridge.vacation_days_needed, 1);
        assert_eq!(bridge.total_days, 4);
        assert_eq!(bridge.month, 1);
        assert_eq!(bridge.quarter, 1);
    }

    #[test]
    fn plain_workweeks_are_bridged_at_gap_five() {
        let g = grid(2026, &[]);
        let (_, candidates) = generate(&g, MAX_BRIDGE_GAP);
        // Sat Jan 10 .. Sun Jan 18 spans the full Mon–Fri week between.
        let week = candidates
            .iter()
            .find(|c| c.start == date(2026, 1, 10) && c.end == date(2026, 1, 18))
            .expect("workweek bridge proposed");
        assert_eq!(week.vacation_days_needed, 5);
        assert_eq!(week.total_days, 9);
    }

    #[test]
    fn no_bridges_beyond_the_gap_bound() {
        let g = grid(2026, &[]);
        let (_, candidates) = generate(&g, 2);
        // With a gap bound of 2 no plain workweek is bridged: nothing
        // spans from one weekend to the next.
        assert!(candidates.iter().all(|c| c.total_days < 9));
        assert!(candidates
            .iter()
            .all(|c| c.vacation_days_needed <= MAX_RUN_EXTENSION));
    }

    #[test]
    fn extensions_stop_at_year_boundary() {
        // New Year's Day 2026 is a Thursday; the run [Jan 1] cannot be
        // extended backwards into 2025.
        let g = grid(2026, &[date(2026, 1, 1)]);
        let (_, candidates) = generate(&g, MAX_BRIDGE_GAP);
        assert!(candidates.iter().all(|c| c.start.year() == 2026));
    }

    #[test]
    fn extensions_grow_a_weekend_both_ways() {
        let g = grid(2026, &[]);
        let (_, candidates) = generate(&g, MAX_BRIDGE_GAP);
        // Weekend Jan 10–11: Friday Jan 9 off makes a 3-day range.
        assert!(candidates
            .iter()
            .any(|c| c.start == date(2026, 1, 9)
                && c.end == date(2026, 1, 11)
                && c.vacation_days_needed == 1));
        // Monday + Tuesday after make a 4-day range for 2 days of leave.
        assert!(candidates
            .iter()
            .any(|c| c.start == date(2026, 1, 10)
                && c.end == date(2026, 1, 13)
                && c.vacation_days_needed == 2));
    }

    #[test]
    fn sub_break_ranges_are_not_proposed() {
        let g = grid(2026, &[]);
        let (_, candidates) = generate(&g, MAX_BRIDGE_GAP);
        assert!(candidates.iter().all(|c| c.total_days >= 3));
    }
}
