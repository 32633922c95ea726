use actix_web::{web, Result};

use crate::domain::range::RangeConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// GET /api/config
///
/// The range the frontend should offer; the same one guesses are checked
/// against at this moment.
async fn get_config(app_state: web::Data<AppState>) -> Result<web::Json<RangeConfig>, AppError> {
    Ok(web::Json(app_state.config().get_config().await?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_config));
}
