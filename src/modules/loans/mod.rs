// Loans module: the credit decision engine and its HTTP surface.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{EvaluationResult, LoanApplication, LoanRequest, RiskTier};
pub use repositories::{LoanApplicationRepository, MySqlLoanApplicationRepository};
pub use services::{evaluate, LoanService};
