/// Helpers for CLP amounts.
///
/// CLP is a zero-decimal currency: amounts surfaced to callers are whole
/// pesos. Internal arithmetic stays in f64 and is rounded exactly once,
/// at the point a value leaves the engine.

/// Round an amount to the nearest whole peso.
///
/// Half-way cases round away from zero; for the positive amounts this
/// engine produces that matches the reference implementation's rounding.
pub fn round_clp(amount: f64) -> i64 {
    amount.round() as i64
}

/// True when a value is a usable monetary input: finite and strictly positive.
pub fn is_positive_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
