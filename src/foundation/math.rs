/// Replace a non-finite value with `fallback`.
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Clamp into `[lo, hi]`, mapping NaN to `fallback` first.
///
/// Infinities clamp to the nearest bound.
pub(crate) fn clamp_or(v: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    if v.is_nan() {
        return fallback.clamp(lo, hi);
    }
    v.clamp(lo, hi)
}

/// Linear interpolation `a + (b - a) * t`.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
