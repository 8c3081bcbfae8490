//! # leaveplan
//!
//! Optimal vacation-day planning: given a year, a public-holiday
//! calendar, a leave-day budget, and a strategy preference, compute the
//! disjoint set of leave periods that maximizes consecutive days off.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `lp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! leaveplan = "0.1"
//! ```
//!
//! ```rust
//! use leaveplan::holidays::{Germany, HolidayCalendar};
//! use leaveplan::planner::{optimize, Mode};
//!
//! let holidays = Germany.holiday_dates(2026);
//! let schedule = optimize(2026, 25, &holidays, Mode::Balanced).unwrap();
//! assert!(schedule.vacation_days_used <= 25);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared definitions.
pub use lp_core as core;

/// Public-holiday calendars.
pub use lp_holidays as holidays;

/// The date-range optimizer.
pub use lp_planner as planner;
