// Application lifecycle: persistence happens only on acceptance, exactly
// once, and repository failures surface unchanged.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use credisur::core::{AppError, Result};
use credisur::modules::loans::models::{ApplyRequest, LoanApplication, LoanRequest};
use credisur::modules::loans::repositories::LoanApplicationRepository;
use credisur::modules::loans::services::LoanService;

/// In-memory store standing in for the MySQL repository.
#[derive(Default)]
struct InMemoryRepository {
    records: Mutex<HashMap<String, LoanApplication>>,
    create_calls: AtomicUsize,
}

impl InMemoryRepository {
    fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl LoanApplicationRepository for InMemoryRepository {
    async fn create(&self, application: &LoanApplication) -> Result<LoanApplication> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .insert(application.id.clone(), application.clone());
        Ok(application.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LoanApplication>> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }
}

/// Repository whose writes always fail, for error propagation tests.
struct UnavailableRepository;

#[async_trait]
impl LoanApplicationRepository for UnavailableRepository {
    async fn create(&self, _application: &LoanApplication) -> Result<LoanApplication> {
        Err(AppError::internal("store unavailable"))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<LoanApplication>> {
        Err(AppError::internal("store unavailable"))
    }
}

fn accepted_request() -> ApplyRequest {
    ApplyRequest {
        identification: "12345678-9".to_string(),
        full_name: "Juan Pérez".to_string(),
        email: Some("juan@example.com".to_string()),
        phone: Some("+56912345678".to_string()),
        monthly_income: 1_200_000.0,
        employment_status: "employed".to_string(),
        amount: 50000.0,
        term_months: 60,
    }
}

fn rejected_request() -> ApplyRequest {
    ApplyRequest {
        identification: "11111111-1".to_string(),
        full_name: "Pedro Soto".to_string(),
        email: None,
        phone: None,
        monthly_income: 300_000.0,
        employment_status: "unemployed".to_string(),
        amount: 5_000_000.0,
        term_months: 12,
    }
}

#[tokio::test]
async fn test_accepted_application_is_persisted_exactly_once() {
    let repository = Arc::new(InMemoryRepository::default());
    let service = LoanService::new(repository.clone());

    let outcome = service.apply(accepted_request()).await.unwrap();

    assert!(!outcome.evaluation.rejected);
    let stored = outcome.application.expect("accepted application must be stored");
    assert_eq!(repository.create_calls.load(Ordering::SeqCst), 1);
    assert_eq!(repository.len(), 1);

    // server-assigned fields
    assert!(!stored.id.is_empty());
    assert!(!stored.signed);
    assert_eq!(stored.score, outcome.evaluation.score);
    assert_eq!(stored.monthly_payment, outcome.evaluation.monthly_payment);
}

#[tokio::test]
async fn test_rejected_application_leaves_no_trace() {
    let repository = Arc::new(InMemoryRepository::default());
    let service = LoanService::new(repository.clone());

    let outcome = service.apply(rejected_request()).await.unwrap();

    assert!(outcome.evaluation.rejected);
    assert!(outcome.application.is_none());
    assert_eq!(repository.create_calls.load(Ordering::SeqCst), 0);
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn test_stored_application_is_retrievable() {
    let repository = Arc::new(InMemoryRepository::default());
    let service = LoanService::new(repository.clone());

    let outcome = service.apply(accepted_request()).await.unwrap();
    let id = outcome.application.unwrap().id;

    let found = service.find_application(&id).await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().identification, "12345678-9");

    let missing = service.find_application("no-such-id").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_persistence_failure_propagates() {
    let service = LoanService::new(Arc::new(UnavailableRepository));

    let result = service.apply(accepted_request()).await;
    assert!(matches!(result, Err(AppError::Internal(_))));
}

#[tokio::test]
async fn test_persistence_is_not_touched_for_rejections_even_when_broken() {
    // A broken store does not matter for rejections: no write is attempted.
    let service = LoanService::new(Arc::new(UnavailableRepository));

    let outcome = service.apply(rejected_request()).await.unwrap();
    assert!(outcome.evaluation.rejected);
    assert!(outcome.application.is_none());
}

#[tokio::test]
async fn test_simulate_never_persists() {
    let repository = Arc::new(InMemoryRepository::default());
    let service = LoanService::new(repository.clone());

    let request = LoanRequest::new(50000.0, 60, 1_200_000.0, "employed");
    let result = service.simulate(&request).unwrap();

    assert_eq!(result.score, 85);
    assert_eq!(repository.create_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_invalid_input_is_refused_before_evaluation() {
    let service = LoanService::new(Arc::new(InMemoryRepository::default()));

    let request = LoanRequest::new(-1.0, 60, 1_200_000.0, "employed");
    assert!(matches!(
        service.simulate(&request),
        Err(AppError::Validation(_))
    ));

    let mut apply = accepted_request();
    apply.monthly_income = f64::NAN;
    assert!(matches!(
        service.apply(apply).await,
        Err(AppError::Validation(_))
    ));

    let mut apply = accepted_request();
    apply.identification = "  ".to_string();
    assert!(matches!(
        service.apply(apply).await,
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn test_concurrent_submissions_get_distinct_records() {
    let repository = Arc::new(InMemoryRepository::default());
    let service = Arc::new(LoanService::new(repository.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(
            async move { service.apply(accepted_request()).await },
        ));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        ids.insert(outcome.application.unwrap().id);
    }

    assert_eq!(ids.len(), 8);
    assert_eq!(repository.len(), 8);
}
