//! Credit scoring policy.
//!
//! Three independent, order-insensitive sub-scores on a 0-100 scale:
//! debt load (0-50), requested amount vs annual income (0-20) and
//! employment status (0-15). Each sub-scorer is pure and total over valid
//! numeric input.
//!
//! Non-finite or non-positive ratios score as the best case. That is the
//! documented behavior of this policy (a zero-income request never reaches
//! scoring anyway; the guard here keeps the functions total).

use crate::core::money::round_clp;
use crate::modules::loans::models::evaluation::{EmploymentCategory, ScoreBreakdown};

use super::amortization::{monthly_payment, DEFAULT_MONTHLY_RATE};

/// Score the applicant's debt load: estimated installment over monthly
/// income. Lower ratios score higher. Returns 0-50.
pub fn score_debt_load(payment: f64, monthly_income: f64) -> f64 {
    let ratio = payment / monthly_income;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 50.0;
    }
    if ratio > 0.5 {
        0.0
    } else if ratio > 0.4 {
        15.0
    } else if ratio > 0.3 {
        30.0
    } else if ratio > 0.2 {
        40.0
    } else {
        50.0
    }
}

/// Score the requested principal against annual income. Returns 0-20.
pub fn score_amount_vs_income(amount: f64, monthly_income: f64) -> f64 {
    let annual_income = monthly_income * 12.0;
    let ratio = amount / annual_income;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 20.0;
    }
    if ratio > 2.0 {
        0.0
    } else if ratio > 1.0 {
        5.0
    } else if ratio > 0.5 {
        10.0
    } else {
        20.0
    }
}

/// Score the employment category. Returns 0-15, with 10 as the neutral
/// value for unrecognised labels.
pub fn score_employment(category: EmploymentCategory) -> f64 {
    match category {
        EmploymentCategory::Employed => 15.0,
        EmploymentCategory::SelfEmployed => 8.0,
        EmploymentCategory::Unemployed => 0.0,
        EmploymentCategory::Unknown => 10.0,
    }
}

/// Raw scoring output: total score, its breakdown and the estimated
/// installment both unrounded (for callers that keep computing) and
/// rounded (for surfacing).
#[derive(Debug, Clone, Copy)]
pub struct ScoreOutcome {
    pub score: i64,
    pub breakdown: ScoreBreakdown,
    /// Unrounded installment used by the debt-load sub-score
    pub raw_monthly_payment: f64,
    /// Installment rounded to whole CLP for surfacing
    pub monthly_payment: i64,
}

/// Compute the total credit score for a request.
///
/// The debt-load sub-score uses the *unrounded* installment; the rounded
/// value is only what callers surface. The total is rounded to the nearest
/// integer; with the current weight tables the sum is already integral, but
/// rounding stays part of the contract.
pub fn compute_score(
    amount: f64,
    term_months: u32,
    monthly_income: f64,
    employment_status: &str,
) -> ScoreOutcome {
    let payment = monthly_payment(amount, term_months, DEFAULT_MONTHLY_RATE);

    let breakdown = ScoreBreakdown {
        debt_load: score_debt_load(payment, monthly_income),
        amount_income: score_amount_vs_income(amount, monthly_income),
        employment: score_employment(EmploymentCategory::from_label(employment_status)),
    };

    ScoreOutcome {
        score: breakdown.total().round() as i64,
        breakdown,
        raw_monthly_payment: payment,
        monthly_payment: round_clp(payment),
    }
}
