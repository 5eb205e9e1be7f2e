use crate::interface_adapters::handlers::{method_not_allowed, new_game, validate_game};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

// Build the HTTP router for the game endpoints.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/newGame", get(new_game).fallback(method_not_allowed))
        .route("/validateGame", post(validate_game).fallback(method_not_allowed))
        .with_state(state)
}
