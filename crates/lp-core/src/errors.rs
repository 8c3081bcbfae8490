//! Error types for leaveplan.
//!
//! A single `thiserror`-derived enum covers the whole workspace. User-input
//! errors (`InvalidBudget`, `InvalidYear`) are separate variants from
//! `Internal`, which signals a violated invariant inside the optimizer and
//! is never produced by bad caller input.

use thiserror::Error;

/// The top-level error type used throughout leaveplan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The vacation-day budget was negative.
    #[error("invalid vacation budget {budget}: must be >= 0")]
    InvalidBudget {
        /// The rejected budget value.
        budget: i32,
    },

    /// The planning year is outside the supported range.
    #[error("year {year} outside supported range [{min}, {max}]")]
    InvalidYear {
        /// The rejected year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Date-related error (construction, arithmetic, ordering).
    #[error("date error: {0}")]
    Date(String),

    /// Internal consistency failure — a violated optimizer invariant.
    ///
    /// Indicates a defect in the library, not in caller input.
    #[error("internal consistency failure: {0}")]
    Internal(String),
}

/// Shorthand `Result` type used throughout leaveplan.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error if a condition does not hold.
///
/// # Example
/// ```
/// use lp_core::{ensure, Error};
/// fn check_budget(budget: i32) -> lp_core::Result<i32> {
///     ensure!(budget >= 0, Error::InvalidBudget { budget });
///     Ok(budget)
/// }
/// assert!(check_budget(25).is_ok());
/// assert!(check_budget(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return early with the given error.
///
/// # Example
/// ```
/// use lp_core::{fail, Error};
/// fn unsupported() -> lp_core::Result<()> {
///     fail!(Error::Date("no such date".into()));
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr $(,)?) => {
        return Err($err)
    };
}
