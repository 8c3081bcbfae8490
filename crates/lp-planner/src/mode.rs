//! `Mode` — strategy preference and its score weight table.

use crate::break_type::BreakType;

/// User-selected shape preference.
///
/// Biases which break lengths the selector favors when the budget cannot
/// fund every candidate; never affects the correctness invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No length preference.
    #[default]
    Balanced,
    /// Favor many 3–4 day breaks.
    LongWeekends,
    /// Favor 5–6 day breaks.
    MiniBreaks,
    /// Favor 7–9 day breaks.
    Weeks,
    /// Favor 10+ day breaks.
    Extended,
}

/// Score multipliers, rows keyed by mode, columns by projected break type
/// (long weekend, mini break, week-long, extended).
///
/// Adding a mode is a new row, not new control flow.
const WEIGHT_TABLE: [[f64; 4]; 5] = [
    [1.0, 1.0, 1.0, 1.0], // Balanced
    [1.5, 1.0, 0.7, 0.4], // LongWeekends
    [0.8, 1.5, 1.0, 0.6], // MiniBreaks
    [0.6, 0.9, 1.5, 1.0], // Weeks
    [0.4, 0.6, 1.0, 1.6], // Extended
];

impl Mode {
    /// Score multiplier for a candidate projected to land in `break_type`.
    pub fn weight(self, break_type: BreakType) -> f64 {
        WEIGHT_TABLE[self.index()][break_type.index()]
    }

    fn index(self) -> usize {
        match self {
            Mode::Balanced => 0,
            Mode::LongWeekends => 1,
            Mode::MiniBreaks => 2,
            Mode::Weeks => 3,
            Mode::Extended => 4,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Balanced => "Balanced",
            Mode::LongWeekends => "Long weekends",
            Mode::MiniBreaks => "Mini breaks",
            Mode::Weeks => "Weeks",
            Mode::Extended => "Extended",
        };
        write!(f, "{name}")
    }
}
