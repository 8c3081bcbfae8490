//! # lp-holidays
//!
//! Public-holiday calendars: the `HolidayCalendar` trait, a handful of
//! locale implementations, and a user-defined custom calendar.
//!
//! The optimizer in `lp-planner` never computes holiday dates itself — it
//! consumes a plain list. This crate is the default supplier of that list.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait, `CustomCalendar`, and the locale registry.
pub mod calendar;

/// Concrete calendar implementations (locale specific).
pub mod calendars;

/// Easter Sunday computus.
pub mod easter;

/// `Holiday` — a dated, named day off.
pub mod holiday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{for_locale, CustomCalendar, HolidayCalendar};
pub use calendars::{Germany, Sweden, UnitedStates};
pub use easter::easter_sunday;
pub use holiday::{normalize, Holiday};
