// Evaluation-side models: the ephemeral request, the score breakdown and
// the evaluation result returned by the decision engine.
//
// Wire names are camelCase to match the public API contract
// (monthlyPayment, interestRateMonthly, ...).

use serde::{Deserialize, Serialize};

use crate::core::money::is_positive_amount;
use crate::core::{AppError, Result};

/// A loan request as submitted for evaluation. Ephemeral, owned by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Requested principal, in CLP
    pub amount: f64,
    /// Repayment term in months
    pub term_months: u32,
    /// Applicant's declared monthly income, in CLP
    pub monthly_income: f64,
    /// Free-form employment status label, matched case-insensitively
    pub employment_status: String,
}

impl LoanRequest {
    pub fn new(
        amount: f64,
        term_months: u32,
        monthly_income: f64,
        employment_status: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            term_months,
            monthly_income,
            employment_status: employment_status.into(),
        }
    }

    /// Reject malformed numeric input before it reaches the scoring engine.
    ///
    /// The engine itself assumes pre-validated input; an invalid request
    /// must never reach it.
    pub fn validate(&self) -> Result<()> {
        if !is_positive_amount(self.amount) {
            return Err(AppError::validation(
                "amount must be a finite, positive number",
            ));
        }

        if self.term_months == 0 {
            return Err(AppError::validation("termMonths must be at least 1"));
        }

        if !is_positive_amount(self.monthly_income) {
            return Err(AppError::validation(
                "monthlyIncome must be a finite, positive number",
            ));
        }

        Ok(())
    }
}

/// Employment category resolved from the applicant's status label.
///
/// The label table is closed and case-normalised; anything outside it
/// (including the empty string) falls back to `Unknown`, which scores the
/// documented neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentCategory {
    Employed,
    SelfEmployed,
    Unemployed,
    Unknown,
}

impl EmploymentCategory {
    /// Resolve a status label to a category, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "employed" | "empleado" | "empleado/a" => EmploymentCategory::Employed,
            "self-employed" | "independiente" | "autonomo" | "autónomo" => {
                EmploymentCategory::SelfEmployed
            }
            "unemployed" | "cesante" | "desempleado" | "desempleado/a" => {
                EmploymentCategory::Unemployed
            }
            _ => EmploymentCategory::Unknown,
        }
    }
}

/// Risk tier derived solely from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::Low => write!(f, "LOW"),
            RiskTier::Medium => write!(f, "MEDIUM"),
            RiskTier::High => write!(f, "HIGH"),
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(RiskTier::Low),
            "MEDIUM" => Ok(RiskTier::Medium),
            "HIGH" => Ok(RiskTier::High),
            _ => Err(format!("Invalid risk tier: {}", s)),
        }
    }
}

/// The three sub-scores making up the total credit score.
///
/// Components are kept unrounded; only the total is rounded to an integer.
/// With the current weight tables every component is integral, so the
/// components always sum exactly to the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Debt-load sub-score, 0-50
    pub debt_load: f64,
    /// Amount-vs-annual-income sub-score, 0-20
    pub amount_income: f64,
    /// Employment sub-score, 0-15
    pub employment: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.debt_load + self.amount_income + self.employment
    }
}

/// Full outcome of evaluating a loan request.
///
/// Invariants: `rejected` is true iff `risk` is HIGH; the interest rates are
/// present iff the request was not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Credit score, integer in [0, 100]
    pub score: i64,
    pub risk: RiskTier,
    pub interest_rate_monthly: Option<f64>,
    pub interest_rate_annual: Option<f64>,
    pub rejected: bool,
    /// Estimated fixed monthly installment, rounded to whole CLP
    pub monthly_payment: i64,
    pub breakdown: ScoreBreakdown,
}
