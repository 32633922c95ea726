use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use guess_backend::middleware::request_trace::RequestTrace;
use guess_backend::middleware::structured_logger::StructuredLogger;
use guess_backend::routes;
use guess_backend::state::app_state::AppState;

/// Build a test service with the production routes.
///
/// CORS is left out; `main.rs` adds it around the same route table.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
