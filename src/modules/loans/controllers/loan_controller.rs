use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::loans::models::{ApplyRequest, LoanRequest};
use crate::modules::loans::services::loan_service::LoanService;

/// Simulate a loan offer.
/// POST /api/loans/simulate
///
/// Returns the evaluation for the given terms without persisting anything.
/// A rejection is a successful response carrying `rejected: true`, so the
/// frontend can render it; only malformed input is an error.
pub async fn simulate_loan(
    service: web::Data<Arc<LoanService>>,
    request: web::Json<LoanRequest>,
) -> Result<HttpResponse, AppError> {
    let result = service.simulate(&request.into_inner())?;

    Ok(HttpResponse::Ok().json(result))
}

/// Apply for a loan: evaluate and, if accepted, persist.
/// POST /api/loans/apply
///
/// The response always carries the evaluation; the stored application is
/// attached only when the evaluation was accepted.
pub async fn apply_loan(
    service: web::Data<Arc<LoanService>>,
    request: web::Json<ApplyRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = service.apply(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(outcome))
}

/// Fetch a stored application.
/// GET /api/loans/{id}
pub async fn get_application(
    service: web::Data<Arc<LoanService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let application = service
        .find_application(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("application '{}' not found", id)))?;

    Ok(HttpResponse::Ok().json(application))
}

/// Configure loan routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/loans")
            .route("/simulate", web::post().to(simulate_loan))
            .route("/apply", web::post().to(apply_loan))
            .route("/{id}", web::get().to(get_application)),
    );
}
