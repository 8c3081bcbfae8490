//! Onboarding wizard — an explicit finite-state machine.
//!
//! The surrounding UI collects inputs step by step while the optimizer
//! stays a pure function of explicit arguments. States advance
//! CollectBudget → CollectPreferences → Review → Done; an out-of-order
//! event is rejected, never silently reordered.

use thiserror::Error;

use crate::mode::Mode;
use crate::optimizer::Optimizer;

/// Wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Waiting for the yearly leave budget.
    CollectBudget,
    /// Waiting for the strategy preference.
    CollectPreferences,
    /// Inputs complete, awaiting confirmation.
    Review,
    /// Confirmed; the optimizer has been handed off.
    Done,
}

/// A rejected wizard event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The event is not allowed in the current state.
    #[error("event `{event}` not allowed in state {state:?}")]
    InvalidTransition {
        /// State the wizard was in.
        state: WizardState,
        /// The rejected event.
        event: &'static str,
    },

    /// A negative budget was entered.
    #[error("budget must be >= 0, got {0}")]
    NegativeBudget(i32),
}

/// Step-by-step collection of optimizer inputs.
#[derive(Debug, Clone)]
pub struct Wizard {
    year: i32,
    state: WizardState,
    budget: Option<i32>,
    mode: Option<Mode>,
}

impl Wizard {
    /// Start a wizard for the given planning year.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            state: WizardState::CollectBudget,
            budget: None,
            mode: None,
        }
    }

    /// The current step.
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Enter the leave budget: CollectBudget → CollectPreferences.
    pub fn set_budget(&mut self, budget: i32) -> Result<(), WizardError> {
        if self.state != WizardState::CollectBudget {
            return Err(WizardError::InvalidTransition {
                state: self.state,
                event: "set_budget",
            });
        }
        if budget < 0 {
            return Err(WizardError::NegativeBudget(budget));
        }
        self.budget = Some(budget);
        self.state = WizardState::CollectPreferences;
        Ok(())
    }

    /// Choose the strategy preference: CollectPreferences → Review.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), WizardError> {
        if self.state != WizardState::CollectPreferences {
            return Err(WizardError::InvalidTransition {
                state: self.state,
                event: "set_mode",
            });
        }
        self.mode = Some(mode);
        self.state = WizardState::Review;
        Ok(())
    }

    /// Confirm the collected inputs: Review → Done.
    ///
    /// Yields an [`Optimizer`] configured with everything entered so far;
    /// holidays and company days are attached by the caller before
    /// running it.
    pub fn confirm(&mut self) -> Result<Optimizer, WizardError> {
        let (WizardState::Review, Some(budget), Some(mode)) = (self.state, self.budget, self.mode)
        else {
            return Err(WizardError::InvalidTransition {
                state: self.state,
                event: "confirm",
            });
        };
        self.state = WizardState::Done;
        Ok(Optimizer::new(self.year, budget).with_mode(mode))
    }

    /// Step back one state (Review → CollectPreferences → CollectBudget).
    pub fn back(&mut self) -> Result<(), WizardError> {
        self.state = match self.state {
            WizardState::CollectPreferences => WizardState::CollectBudget,
            WizardState::Review => WizardState::CollectPreferences,
            state => {
                return Err(WizardError::InvalidTransition {
                    state,
                    event: "back",
                })
            }
        };
        Ok(())
    }

    /// Restart from CollectBudget, discarding collected inputs.
    pub fn reset(&mut self) {
        *self = Wizard::new(self.year);
    }
}
