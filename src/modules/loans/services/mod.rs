pub mod amortization;
pub mod evaluation;
pub mod loan_service;
pub mod risk;
pub mod scoring;

pub use evaluation::evaluate;
pub use loan_service::{ApplyOutcome, LoanService};
