//! "Nice" axis-maximum rounding for chart legibility.
//!
//! Purely cosmetic: a raw series maximum is rounded up to a human-friendly
//! ceiling so axis labels do not land on values like 1371.5. Both functions
//! satisfy `nice(x) >= x` for `x >= 0`, and 0 maps to a fixed default
//! ceiling so an empty chart still renders a sensible axis.

/// Default ceiling for an all-zero currency series.
pub const DEFAULT_CURRENCY_MAX: f64 = 1000.0;
/// Default ceiling for an all-zero count series.
pub const DEFAULT_COUNT_MAX: u32 = 4;

const CURRENCY_STEPS: [f64; 7] = [1.0, 2.0, 3.0, 4.0, 5.0, 7.5, 10.0];

/// Rounds a currency maximum up to 1/2/3/4/5/7.5/10 times a power of ten.
pub fn nice_currency_max(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return DEFAULT_CURRENCY_MAX;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    for step in CURRENCY_STEPS {
        let candidate = step * magnitude;
        if candidate >= raw {
            return candidate;
        }
    }
    10.0 * magnitude
}

/// Rounds a small integer count up to 4/6/8/10, then multiples of 5.
pub fn nice_count_max(raw: u32) -> u32 {
    match raw {
        0..=4 => DEFAULT_COUNT_MAX,
        5..=6 => 6,
        7..=8 => 8,
        9..=10 => 10,
        n => n.div_ceil(5) * 5,
    }
}
