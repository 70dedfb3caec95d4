//! Evaluation orchestrator.
//!
//! Single deterministic pass: installment estimate, three sub-scores,
//! total, risk classification. No retries, no partial results. Input is
//! assumed pre-validated (`LoanRequest::validate`); callers must reject
//! malformed numerics before invoking this.

use crate::modules::loans::models::evaluation::{EvaluationResult, LoanRequest};

use super::risk::classify;
use super::scoring::compute_score;

/// Evaluate a loan request into a score, risk tier and rate offer.
///
/// The debt-load sub-score sees the unrounded installment; the result
/// carries the installment rounded to whole CLP. That ordering is load
/// bearing for reproducibility.
pub fn evaluate(request: &LoanRequest) -> EvaluationResult {
    let outcome = compute_score(
        request.amount,
        request.term_months,
        request.monthly_income,
        &request.employment_status,
    );
    let assessment = classify(outcome.score);

    EvaluationResult {
        score: outcome.score,
        risk: assessment.risk,
        interest_rate_monthly: assessment.interest_rate_monthly,
        interest_rate_annual: assessment.interest_rate_annual,
        rejected: assessment.rejected,
        monthly_payment: outcome.monthly_payment,
        breakdown: outcome.breakdown,
    }
}
