//! Rounding helpers shared by formatting and unit display.

/// Round half toward +∞, matching the rounding the bench calculator displays
/// (`round_half_up(-2.5) == -2.0`, `round_half_up(2.5) == 3.0`).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to `decimals` places (half away from zero).
/// Non-finite values pass through unchanged.
#[inline]
pub fn round_to(x: f64, decimals: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (x * scale).round() / scale
}

/// Fixed-point text the way the bench calculator prints it (ECMAScript
/// `toFixed`): an exact half at `decimals` places rounds away from zero,
/// everything else formats as `{:.N}`. Non-finite values print as
/// `NaN`, `Infinity` or `-Infinity`.
pub fn to_fixed(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return number_text(x);
    }
    let x = tie_away_from_zero(x, decimals).unwrap_or(x);
    format!("{x:.decimals$}")
}

/// Shortest text for a number, with `-0` shown as `0` and non-finite
/// values spelled out.
pub fn number_text(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x == f64::INFINITY {
        "Infinity".to_string()
    } else if x == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        (x + 0.0).to_string()
    }
}

/// `Some(rounded)` when `x` lies exactly halfway between two values with
/// `decimals` places.
fn tie_away_from_zero(x: f64, decimals: usize) -> Option<f64> {
    let d = i32::try_from(decimals).ok().filter(|d| *d <= 15)?;
    let scale = 10f64.powi(d);
    let scaled = x.abs() * scale;
    // k + 0.5 must be exactly representable
    if scaled >= 4.0e15 {
        return None;
    }
    // A tie at d places is an odd multiple of 2^-(d+1); scaling by a power
    // of two is exact.
    let halves = x * 2f64.powi(d + 1);
    if halves.fract() != 0.0 || halves % 2.0 == 0.0 {
        return None;
    }
    Some((scaled.ceil() / scale).copysign(x))
}
