//! Number formatting for user-facing messages
//!
//! Halves round away from zero (`12.5` -> `13`, `0.125` -> `0.13`). Plain
//! `{:.0}` rounds them to even instead.

/// Round to `places` decimals, halves away from zero
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Whole-number percentage, e.g. `63`
pub fn percent(value: f64) -> String {
    format!("{:.0}", round_half_up(value, 0))
}

/// Dollar amount with two decimals and no sign, e.g. `1234.50`
pub fn money(value: f64) -> String {
    format!("{:.2}", round_half_up(value, 2))
}
