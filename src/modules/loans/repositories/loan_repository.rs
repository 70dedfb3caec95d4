// Loan application persistence.
//
// The service talks to the `LoanApplicationRepository` trait; the MySQL
// implementation below is the production store. The insert is a single
// statement, so a request either leaves a complete record or nothing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};
use std::str::FromStr;

use crate::core::{AppError, Result};
use crate::modules::loans::models::{LoanApplication, RiskTier};

/// Storage contract for loan applications.
#[async_trait]
pub trait LoanApplicationRepository: Send + Sync {
    /// Persist a new application. One create-or-nothing operation.
    async fn create(&self, application: &LoanApplication) -> Result<LoanApplication>;

    /// Fetch an application by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<LoanApplication>>;
}

/// MySQL-backed repository.
pub struct MySqlLoanApplicationRepository {
    pool: MySqlPool,
}

impl MySqlLoanApplicationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanApplicationRepository for MySqlLoanApplicationRepository {
    async fn create(&self, application: &LoanApplication) -> Result<LoanApplication> {
        sqlx::query(
            r#"
            INSERT INTO loan_applications (
                id, identification, full_name, email, phone,
                monthly_income, employment_status,
                requested_amount, requested_term_months,
                score, risk, interest_rate_monthly, interest_rate_annual,
                monthly_payment, rejected, signed, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&application.id)
        .bind(&application.identification)
        .bind(&application.full_name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(application.monthly_income)
        .bind(&application.employment_status)
        .bind(application.requested_amount)
        .bind(application.requested_term_months)
        .bind(application.score)
        .bind(application.risk.to_string())
        .bind(application.interest_rate_monthly)
        .bind(application.interest_rate_annual)
        .bind(application.monthly_payment)
        .bind(application.rejected)
        .bind(application.signed)
        .bind(application.created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(application.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LoanApplication>> {
        let row = sqlx::query_as::<_, LoanApplicationRow>(
            r#"
            SELECT
                id, identification, full_name, email, phone,
                monthly_income, employment_status,
                requested_amount, requested_term_months,
                score, risk, interest_rate_monthly, interest_rate_annual,
                monthly_payment, rejected, signed, created_at
            FROM loan_applications
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        row.map(LoanApplicationRow::into_application).transpose()
    }
}

#[derive(Debug, FromRow)]
struct LoanApplicationRow {
    id: String,
    identification: String,
    full_name: String,
    email: Option<String>,
    phone: Option<String>,
    monthly_income: f64,
    employment_status: String,
    requested_amount: f64,
    requested_term_months: u32,
    score: i64,
    risk: String,
    interest_rate_monthly: Option<f64>,
    interest_rate_annual: Option<f64>,
    monthly_payment: i64,
    rejected: bool,
    signed: bool,
    created_at: DateTime<Utc>,
}

impl LoanApplicationRow {
    fn into_application(self) -> Result<LoanApplication> {
        let risk = RiskTier::from_str(&self.risk)
            .map_err(|e| AppError::internal(format!("Invalid risk tier in database: {}", e)))?;

        Ok(LoanApplication {
            id: self.id,
            identification: self.identification,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            monthly_income: self.monthly_income,
            employment_status: self.employment_status,
            requested_amount: self.requested_amount,
            requested_term_months: self.requested_term_months,
            score: self.score,
            risk,
            interest_rate_monthly: self.interest_rate_monthly,
            interest_rate_annual: self.interest_rate_annual,
            monthly_payment: self.monthly_payment,
            rejected: self.rejected,
            signed: self.signed,
            created_at: self.created_at,
        })
    }
}
