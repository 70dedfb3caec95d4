//! Credisur loan decision service library
//!
//! Turns a loan request into a credit score, a risk tier and an
//! interest-rate offer (or a rejection), and persists accepted
//! applications.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::loans;
