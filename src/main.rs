use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use credisur::config::Config;
use credisur::modules::health::controllers::health_controller;
use credisur::modules::loans::controllers::loan_controller;
use credisur::modules::loans::repositories::MySqlLoanApplicationRepository;
use credisur::modules::loans::services::LoanService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credisur=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting Credisur loan decision service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config.database.create_pool().await?;
    tracing::info!(
        "Database pool initialized ({} max connections)",
        config.database.max_connections
    );

    // Schema setup is a storage concern; run it once at boot
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    let loan_service = Arc::new(LoanService::new(Arc::new(
        MySqlLoanApplicationRepository::new(db_pool.clone()),
    )));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let cors_origin = config.app.cors_origin.clone();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(loan_service.clone()))
            .service(
                web::scope("/api")
                    .configure(health_controller::configure)
                    .configure(loan_controller::configure),
            )
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
