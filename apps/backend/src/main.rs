use std::time::Duration;

use actix_web::{web, App, HttpServer};
use guess_backend::config::app::ServerConfig;
use guess_backend::infra::state::build_state;
use guess_backend::middleware::cors::cors_middleware;
use guess_backend::middleware::request_trace::RequestTrace;
use guess_backend::middleware::structured_logger::StructuredLogger;
use guess_backend::{routes, telemetry};

const AUDIT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if !config.range.is_valid() {
        tracing::warn!(
            min_range = config.range.min_range,
            max_range = config.range.max_range,
            "configured range is empty; new games will be rejected until it is fixed"
        );
    }

    let app_state = match build_state().with_range(config.range).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(host = %config.host, port = config.port, "starting guess backend");

    let audit_writer = app_state.take_audit_writer();
    let data = web::Data::new(app_state);
    let origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    // Workers are gone, so the last audit sender has been dropped.
    if let Some(writer) = audit_writer {
        match tokio::time::timeout(AUDIT_DRAIN_TIMEOUT, writer).await {
            Ok(Ok(())) => tracing::info!("audit queue drained"),
            Ok(Err(e)) => tracing::error!(error = %e, "audit writer task failed"),
            Err(_) => tracing::warn!("audit queue not drained before shutdown timeout"),
        }
    }

    Ok(())
}
