//! # lp-planner
//!
//! The date-range optimizer: given a year, a public-holiday list, a
//! vacation-day budget, and a strategy preference, produce a disjoint,
//! budget-respecting set of leave periods maximizing consecutive days off.
//!
//! One call computes one [`Schedule`] from one immutable snapshot of
//! inputs — synchronous, no I/O, idempotent. The selection itself is a
//! deterministic greedy heuristic, not a proven global optimum.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BreakType` — length bucket of a finished break.
pub mod break_type;

/// Bridge-candidate generation over the year's free-day grid.
pub mod candidate;

/// `DayType` and single-day classification.
pub mod day_type;

/// Efficiency ratio formatting.
pub mod efficiency;

/// `Mode` — strategy preference and its score weight table.
pub mod mode;

/// Optimizer entry point and builder.
pub mod optimizer;

/// `Period` — one planned break.
pub mod period;

/// `Schedule` and the final assembly/validation step.
pub mod schedule;

/// Greedy period selection.
mod selector;

/// Onboarding wizard finite-state machine.
pub mod wizard;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use break_type::BreakType;
pub use candidate::{MAX_BRIDGE_GAP, MAX_RUN_EXTENSION};
pub use day_type::{classify, classify_today, DayType};
pub use efficiency::efficiency;
pub use mode::Mode;
pub use optimizer::{optimize, Optimizer, MAX_YEAR, MIN_YEAR};
pub use period::Period;
pub use schedule::Schedule;
pub use wizard::{Wizard, WizardError, WizardState};
