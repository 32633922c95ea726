//! Game HTTP routes.
//!
//! Thin adapter over `GuessEngine`: parse, call, serialize. Response bodies
//! are built from explicit view structs so the secret can never leak through
//! a derived `Serialize`.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::session::{GameSession, GameStatus, SessionId};
use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::services::guess_engine::{GuessOutcome, NewGame};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct NewGameResponse {
    game_id: SessionId,
    status: GameStatus,
    attempts: u32,
    min_range: i64,
    max_range: i64,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
struct GameView {
    game_id: SessionId,
    status: GameStatus,
    attempts: u32,
    guess_history: Vec<i64>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        Self {
            game_id: session.id(),
            status: session.status(),
            attempts: session.attempts(),
            guess_history: session.guess_history().to_vec(),
            created_at: session.created_at(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GuessRequest {
    guess: i64,
}

/// POST /api/games
async fn start_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let NewGame { session, range } = app_state.engine().start_game().await?;

    Ok(HttpResponse::Created().json(NewGameResponse {
        game_id: session.id(),
        status: session.status(),
        attempts: session.attempts(),
        min_range: range.min_range,
        max_range: range.max_range,
        created_at: session.created_at(),
    }))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameView>, AppError> {
    let session = app_state.engine().get_game(game_id.0).await?;
    Ok(web::Json(GameView::from(&session)))
}

/// POST /api/games/{game_id}/guesses
async fn make_guess(
    game_id: GameId,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GuessOutcome>, AppError> {
    let outcome = app_state
        .engine()
        .make_guess(game_id.0, body.guess)
        .await?;
    Ok(web::Json(outcome))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(start_game)))
        .service(web::resource("/{game_id}").route(web::get().to(get_game)))
        .service(web::resource("/{game_id}/guesses").route(web::post().to(make_guess)));
}
