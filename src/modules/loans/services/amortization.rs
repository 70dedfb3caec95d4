//! Fixed-installment amortization.
//!
//! Computes the constant monthly payment for an amortising loan with the
//! French annuity formula. Pure, no rounding: callers round only when a
//! value is surfaced.

/// Default monthly rate used when estimating the installment for scoring.
pub const DEFAULT_MONTHLY_RATE: f64 = 0.015;

/// Constant monthly payment for a principal, term and periodic rate.
///
/// A term of zero is the degenerate single-payment case and returns the
/// principal unchanged; it is defined behavior, not an error.
///
/// Formula: `A = P * i / (1 - (1 + i)^-n)`, evaluated in f64 with `powf`
/// so results match the reference outputs exactly.
pub fn monthly_payment(amount: f64, term_months: u32, rate: f64) -> f64 {
    if term_months == 0 {
        return amount;
    }

    amount * rate / (1.0 - (1.0 + rate).powf(-(term_months as f64)))
}
