use crate::domain::errors::NewGameError;
use crate::domain::state::ReplayDraft;
use crate::interface_adapters::protocol::{
    ErrorResponse, GameStateResponse, NewGameQuery, ValidateGameRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{NewGameUseCase, ReplayOutcome, ReplayUseCase};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::{debug, info, warn};

const INVALID_DIMENSIONS_MESSAGE: &str =
    "Invalid request, width and height must be positive numbers.";
const FRUIT_NOT_FOUND_MESSAGE: &str =
    "Fruit not found, the ticks do not lead the snake to the fruit position.";
const GAME_OVER_MESSAGE: &str = "Game is over, snake went out of bounds or made an invalid move.";
const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed.";
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Handler for starting a new game on a `w` x `h` field.
pub async fn new_game(
    State(state): State<AppState>,
    Query(query): Query<NewGameQuery>,
) -> Result<Json<GameStateResponse>, HandlerError> {
    let (Some(width), Some(height)) = (parse_dimension(&query.w), parse_dimension(&query.h))
    else {
        debug!(w = ?query.w, h = ?query.h, "rejected new game dimensions");
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            INVALID_DIMENSIONS_MESSAGE,
        ));
    };

    let use_case = NewGameUseCase {
        random: state.random_source(),
    };
    let game = use_case.execute(width, height).map_err(|err| match err {
        NewGameError::InvalidDimensions => {
            error_response(StatusCode::BAD_REQUEST, INVALID_DIMENSIONS_MESSAGE)
        }
        NewGameError::Spawn(err) => {
            warn!(error = %err, width, height, "failed to place initial fruit");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    })?;

    info!(game_id = %game.game_id, width, height, "game created");
    Ok(Json(game.into()))
}

// Handler for replaying ticks against a caller-held game state.
pub async fn validate_game(
    State(state): State<AppState>,
    Json(payload): Json<ValidateGameRequest>,
) -> Result<Json<GameStateResponse>, HandlerError> {
    let draft = ReplayDraft::from(payload);
    let game_id = draft.game_id.clone().unwrap_or_default();

    let use_case = ReplayUseCase {
        random: state.random_source(),
    };
    let outcome = use_case.execute(draft).map_err(|err| {
        warn!(%game_id, error = %err, "failed to respawn fruit");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    })?;

    match outcome {
        ReplayOutcome::Success(game) => {
            info!(%game_id, score = game.score, "fruit reached");
            Ok(Json(game.into()))
        }
        ReplayOutcome::Invalid(violations) => {
            debug!(%game_id, %violations, "rejected replay request");
            Err(error_response(
                StatusCode::BAD_REQUEST,
                &violations.to_string(),
            ))
        }
        ReplayOutcome::NotFound => {
            info!(%game_id, "ticks did not reach fruit");
            Err(error_response(StatusCode::NOT_FOUND, FRUIT_NOT_FOUND_MESSAGE))
        }
        ReplayOutcome::Fail => {
            info!(%game_id, "game over");
            Err(error_response(StatusCode::IM_A_TEAPOT, GAME_OVER_MESSAGE))
        }
    }
}

// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> HandlerError {
    error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn parse_dimension(raw: &Option<String>) -> Option<i64> {
    raw.as_deref()?
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|value| *value > 0)
}
