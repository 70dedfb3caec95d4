// Persistent loan application record.
//
// Created exactly once when an evaluation is accepted; never created for
// rejected evaluations and never deleted by this engine. The `signed` flag
// is mutated by a later contract-signing workflow that lives outside this
// service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::evaluation::{EvaluationResult, RiskTier};

/// Applicant identity and contact fields collected by the application flow.
///
/// Identity extraction (OCR) and contact verification (OTP) happen upstream;
/// this engine receives the fields already validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDetails {
    /// National identification number (RUT), checksum-validated upstream
    pub identification: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Incoming application: applicant details plus the requested terms.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub identification: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub monthly_income: f64,
    pub employment_status: String,
    pub amount: f64,
    pub term_months: u32,
}

impl ApplyRequest {
    /// The evaluation-relevant slice of this application.
    pub fn loan_request(&self) -> super::evaluation::LoanRequest {
        super::evaluation::LoanRequest::new(
            self.amount,
            self.term_months,
            self.monthly_income,
            self.employment_status.clone(),
        )
    }

    pub fn validate(&self) -> crate::core::Result<()> {
        if self.identification.trim().is_empty() {
            return Err(crate::core::AppError::validation(
                "identification must not be empty",
            ));
        }
        if self.full_name.trim().is_empty() {
            return Err(crate::core::AppError::validation(
                "fullName must not be empty",
            ));
        }
        self.loan_request().validate()
    }

    pub fn applicant(&self) -> ApplicantDetails {
        ApplicantDetails {
            identification: self.identification.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// A stored loan application with its evaluation flattened in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: String,
    pub identification: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub monthly_income: f64,
    pub employment_status: String,
    pub requested_amount: f64,
    pub requested_term_months: u32,
    pub score: i64,
    pub risk: RiskTier,
    pub interest_rate_monthly: Option<f64>,
    pub interest_rate_annual: Option<f64>,
    pub monthly_payment: i64,
    pub rejected: bool,
    pub signed: bool,
    pub created_at: DateTime<Utc>,
}

impl LoanApplication {
    /// Assemble a record from an accepted evaluation.
    ///
    /// The identifier and timestamp are assigned here, once, at accept time;
    /// `signed` always starts false.
    pub fn from_evaluation(
        applicant: ApplicantDetails,
        monthly_income: f64,
        employment_status: String,
        requested_amount: f64,
        requested_term_months: u32,
        evaluation: &EvaluationResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            identification: applicant.identification,
            full_name: applicant.full_name,
            email: applicant.email,
            phone: applicant.phone,
            monthly_income,
            employment_status,
            requested_amount,
            requested_term_months,
            score: evaluation.score,
            risk: evaluation.risk,
            interest_rate_monthly: evaluation.interest_rate_monthly,
            interest_rate_annual: evaluation.interest_rate_annual,
            monthly_payment: evaluation.monthly_payment,
            rejected: evaluation.rejected,
            signed: false,
            created_at: Utc::now(),
        }
    }
}
