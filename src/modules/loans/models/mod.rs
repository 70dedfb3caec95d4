pub mod evaluation;
pub mod loan_application;

pub use evaluation::{
    EmploymentCategory, EvaluationResult, LoanRequest, RiskTier, ScoreBreakdown,
};
pub use loan_application::{ApplicantDetails, ApplyRequest, LoanApplication};
