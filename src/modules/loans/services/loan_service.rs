//! Application lifecycle: evaluate, and persist only what was accepted.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::core::Result;
use crate::modules::loans::models::{
    ApplyRequest, EvaluationResult, LoanApplication, LoanRequest,
};
use crate::modules::loans::repositories::LoanApplicationRepository;

use super::evaluation::evaluate;

/// Result of submitting an application: the evaluation, plus the stored
/// record when (and only when) the evaluation was accepted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOutcome {
    #[serde(flatten)]
    pub evaluation: EvaluationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<LoanApplication>,
}

/// Service coordinating evaluation and persistence of loan applications.
pub struct LoanService {
    repository: Arc<dyn LoanApplicationRepository>,
}

impl LoanService {
    pub fn new(repository: Arc<dyn LoanApplicationRepository>) -> Self {
        Self { repository }
    }

    /// Evaluate a request without persisting anything.
    pub fn simulate(&self, request: &LoanRequest) -> Result<EvaluationResult> {
        request.validate()?;

        let result = evaluate(request);
        info!(
            score = result.score,
            risk = %result.risk,
            rejected = result.rejected,
            "loan simulation evaluated"
        );

        Ok(result)
    }

    /// Evaluate an application and persist it when accepted.
    ///
    /// Rejected evaluations leave no persistent trace; that is policy, not
    /// an error. Persistence failures propagate unchanged to the caller.
    pub async fn apply(&self, request: ApplyRequest) -> Result<ApplyOutcome> {
        request.validate()?;

        let evaluation = evaluate(&request.loan_request());

        if evaluation.rejected {
            info!(
                identification = %request.identification,
                score = evaluation.score,
                "application rejected, nothing persisted"
            );
            return Ok(ApplyOutcome {
                evaluation,
                application: None,
            });
        }

        let record = LoanApplication::from_evaluation(
            request.applicant(),
            request.monthly_income,
            request.employment_status.clone(),
            request.amount,
            request.term_months,
            &evaluation,
        );

        let stored = self.repository.create(&record).await?;
        info!(
            application_id = %stored.id,
            score = evaluation.score,
            risk = %evaluation.risk,
            "application accepted and persisted"
        );

        Ok(ApplyOutcome {
            evaluation,
            application: Some(stored),
        })
    }

    /// Look up a stored application by identifier.
    pub async fn find_application(&self, id: &str) -> Result<Option<LoanApplication>> {
        self.repository.find_by_id(id).await
    }
}
