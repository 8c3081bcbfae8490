//! `BreakType` — length bucket of a finished break.

/// Length classification of a planned break.
///
/// Ranges shorter than 3 days have no break type: an ordinary free
/// weekend is not a break and never appears in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakType {
    /// 3–4 consecutive days off.
    LongWeekend,
    /// 5–6 consecutive days off.
    MiniBreak,
    /// 7–9 consecutive days off.
    WeekLong,
    /// 10 or more consecutive days off.
    Extended,
}

impl BreakType {
    /// Bucket for a run of `total_days` consecutive days off.
    ///
    /// Returns `None` under 3 days.
    pub fn from_length(total_days: i64) -> Option<Self> {
        match total_days {
            ..=2 => None,
            3..=4 => Some(BreakType::LongWeekend),
            5..=6 => Some(BreakType::MiniBreak),
            7..=9 => Some(BreakType::WeekLong),
            _ => Some(BreakType::Extended),
        }
    }

    /// Display label (`"Long weekend"`, `"Mini break"`, …).
    pub fn label(&self) -> &'static str {
        match self {
            BreakType::LongWeekend => "Long weekend",
            BreakType::MiniBreak => "Mini break",
            BreakType::WeekLong => "Week-long break",
            BreakType::Extended => "Extended break",
        }
    }

    /// Column index into the mode weight table.
    pub(crate) fn index(self) -> usize {
        match self {
            BreakType::LongWeekend => 0,
            BreakType::MiniBreak => 1,
            BreakType::WeekLong => 2,
            BreakType::Extended => 3,
        }
    }
}

impl std::fmt::Display for BreakType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
