//! Greedy period selection.
//!
//! Deterministic heuristic: candidates are ranked by mode-weighted
//! efficiency and accepted greedily under the disjointness and budget
//! constraints; leftover budget then grows the most recently accepted
//! period outward. Identical inputs always produce identical selections;
//! global optimality is explicitly not claimed.

use chrono::NaiveDate;

use crate::candidate::{Candidate, FreeDayGrid};
use crate::mode::Mode;

/// An accepted date range and its accumulated vacation cost.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Selected {
    /// First day off (inclusive).
    pub start: NaiveDate,
    /// Last day off (inclusive).
    pub end: NaiveDate,
    /// Workdays bought with leave, kept current through extension.
    pub vacation_days_needed: u32,
}

impl Selected {
    fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && start <= self.end
    }
}

/// Mode-weighted efficiency score of a candidate.
///
/// Base ratio is days off gained per vacation day spent; the weight table
/// biases it toward the mode's preferred break length.
pub(crate) fn score(candidate: &Candidate, mode: Mode) -> f64 {
    let ratio = f64::from(candidate.total_days) / f64::from(candidate.vacation_days_needed);
    ratio * mode.weight(candidate.projected_break_type())
}

/// Choose a disjoint, budget-respecting subset of `candidates`.
pub(crate) fn select(
    mut candidates: Vec<Candidate>,
    budget: u32,
    mode: Mode,
    grid: &FreeDayGrid,
) -> Vec<Selected> {
    // Highest weighted score first; ties broken by earlier start date,
    // then by lower cost. total_cmp keeps the order total and stable.
    candidates.sort_by(|a, b| {
        score(b, mode)
            .total_cmp(&score(a, mode))
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.vacation_days_needed.cmp(&b.vacation_days_needed))
    });

    let mut accepted: Vec<Selected> = Vec::new();
    let mut remaining = budget;
    for c in &candidates {
        if c.vacation_days_needed > remaining {
            continue;
        }
        if accepted.iter().any(|s| s.overlaps(c.start, c.end)) {
            continue;
        }
        remaining -= c.vacation_days_needed;
        log::debug!(
            "accepted {}..{} (month {}, Q{}, cost {}, score {:.2}, budget left {})",
            c.start,
            c.end,
            c.month,
            c.quarter,
            c.vacation_days_needed,
            score(c, mode),
            remaining
        );
        accepted.push(Selected {
            start: c.start,
            end: c.end,
            vacation_days_needed: c.vacation_days_needed,
        });
    }

    // Convert leftover budget into a larger last break.
    if let Some(last) = accepted.len().checked_sub(1) {
        extend_outward(&mut accepted, last, remaining, grid);
    }
    accepted
}

/// Grow `accepted[idx]` one day at a time on whichever side is cheaper
/// (free day 0, workday 1; ties prefer the later side), stopping at the
/// year boundary, at another accepted period, or when no affordable step
/// remains.
fn extend_outward(accepted: &mut [Selected], idx: usize, mut remaining: u32, grid: &FreeDayGrid) {
    loop {
        let current = accepted[idx];
        let left = step_cost(current.start.pred_opt(), accepted, idx, grid);
        let right = step_cost(current.end.succ_opt(), accepted, idx, grid);

        let (grow_right, cost) = match (left, right) {
            (None, None) => break,
            (Some(l), None) => (false, l),
            (None, Some(r)) => (true, r),
            // Equal cost prefers the later side.
            (Some(l), Some(r)) => (r <= l, r.min(l)),
        };
        if cost > remaining {
            break;
        }
        remaining -= cost;
        let period = &mut accepted[idx];
        if grow_right {
            period.end = period.end.succ_opt().expect("inside supported year range");
        } else {
            period.start = period.start.pred_opt().expect("inside supported year range");
        }
        period.vacation_days_needed += cost;
    }
}

/// Cost of absorbing `day` into the period being extended, or `None` when
/// the step is blocked (year boundary or another accepted period).
fn step_cost(
    day: Option<NaiveDate>,
    accepted: &[Selected],
    idx: usize,
    grid: &FreeDayGrid,
) -> Option<u32> {
    let day = day?;
    grid.index(day)?;
    if accepted
        .iter()
        .enumerate()
        .any(|(i, s)| i != idx && s.contains(day))
    {
        return None;
    }
    Some(u32::from(grid.is_workday(day)))
}
