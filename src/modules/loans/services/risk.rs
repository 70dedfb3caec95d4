//! Risk classification.
//!
//! Pure decision table over the total score:
//!
//! | score     | tier   | monthly rate | rejected |
//! |-----------|--------|--------------|----------|
//! | < 50      | HIGH   | -            | yes      |
//! | 50..70    | MEDIUM | 0.02         | no       |
//! | >= 70     | LOW    | 0.015        | no       |
//!
//! Both range lower bounds are inclusive. The annual rate is the compounded
//! equivalent `(1 + monthly)^12 - 1`, not a simple multiplication.

use crate::modules::loans::models::evaluation::RiskTier;

/// Minimum acceptable score; anything below is rejected outright.
pub const MIN_ACCEPTABLE_SCORE: i64 = 50;
/// Score at which the applicant qualifies for the low-risk rate.
pub const LOW_RISK_SCORE: i64 = 70;

const MEDIUM_RISK_MONTHLY_RATE: f64 = 0.02;
const LOW_RISK_MONTHLY_RATE: f64 = 0.015;

/// Classification outcome: tier, rate offer (absent iff rejected).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub risk: RiskTier,
    pub interest_rate_monthly: Option<f64>,
    pub interest_rate_annual: Option<f64>,
    pub rejected: bool,
}

/// Compounded annual equivalent of a monthly rate.
pub fn annual_rate(monthly_rate: f64) -> f64 {
    (1.0 + monthly_rate).powf(12.0) - 1.0
}

/// Map a score to its risk tier and rate offer.
pub fn classify(score: i64) -> RiskAssessment {
    if score < MIN_ACCEPTABLE_SCORE {
        return RiskAssessment {
            risk: RiskTier::High,
            interest_rate_monthly: None,
            interest_rate_annual: None,
            rejected: true,
        };
    }

    let monthly = if score < LOW_RISK_SCORE {
        MEDIUM_RISK_MONTHLY_RATE
    } else {
        LOW_RISK_MONTHLY_RATE
    };

    RiskAssessment {
        risk: if score < LOW_RISK_SCORE {
            RiskTier::Medium
        } else {
            RiskTier::Low
        },
        interest_rate_monthly: Some(monthly),
        interest_rate_annual: Some(annual_rate(monthly)),
        rejected: false,
    }
}
