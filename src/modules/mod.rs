pub mod health;
pub mod loans;
