//! Efficiency — days off gained per vacation day spent.

/// Ratio of total days off to vacation days spent, rendered with exactly
/// two decimals, rounded half away from zero.
///
/// `vacation_days_used <= 0` yields the defined sentinel `"0.00"`: a
/// schedule with zero spent leave still reports a value instead of
/// failing on the division.
pub fn efficiency(total_days_off: i64, vacation_days_used: i64) -> String {
    if vacation_days_used <= 0 {
        return "0.00".to_string();
    }
    let ratio = total_days_off as f64 / vacation_days_used as f64;
    // f64::round is half-away-from-zero; bare "{:.2}" is not.
    format!("{:.2}", (ratio * 100.0).round() / 100.0)
}
