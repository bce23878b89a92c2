use std::f64::consts::TAU;

/// Linear remap of `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
///
/// Not clamped: values outside the input range extrapolate. A zero-width input range maps
/// everything to `out_lo`.
pub fn map_range(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    out_lo + (value - in_lo) / span * (out_hi - out_lo)
}

/// Normalize an angle in radians into `[0, 2π)`.
pub fn normalize_angle(rad: f64) -> f64 {
    let a = rad.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU { 0.0 } else { a }
}

/// Cut-angle offset in radians: `0` for a perpendicular (90°) cut.
pub fn cut_offset_rad(cut_deg: f64) -> f64 {
    (cut_deg - 90.0).to_radians()
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
