use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::geometry::{Position, Velocity};
use crate::domain::state::{GameState, ReplayDraft, Snake};

// Query string for creating a new game. Kept as raw strings so parse failures
// map to the endpoint's own error message.
#[derive(Debug, Deserialize)]
pub struct NewGameQuery {
    pub w: Option<String>,
    pub h: Option<String>,
}

// Cell coordinates on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: i64,
    pub y: i64,
}

// One tick, or a snake's heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityDto {
    pub vel_x: i64,
    pub vel_y: i64,
}

// Snake head and heading, flattened into one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakeDto {
    pub x: i64,
    pub y: i64,
    pub vel_x: i64,
    pub vel_y: i64,
}

// Request payload for replaying ticks against a submitted game state.
// Every field is optional so absence is reported by the precondition checks.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateGameRequest {
    pub game_id: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    // Outer `None` when the key is absent, `Some(None)` for an explicit null.
    #[serde(default, deserialize_with = "present")]
    pub score: Option<Option<i64>>,
    pub fruit: Option<PositionDto>,
    pub snake: Option<SnakeDto>,
    pub ticks: Option<Vec<VelocityDto>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

// Full game state returned to the caller. Never carries ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub game_id: String,
    pub width: i64,
    pub height: i64,
    pub score: u64,
    pub fruit: PositionDto,
    pub snake: SnakeDto,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<PositionDto> for Position {
    fn from(dto: PositionDto) -> Self {
        Position::new(dto.x, dto.y)
    }
}

impl From<Position> for PositionDto {
    fn from(position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
        }
    }
}

impl From<VelocityDto> for Velocity {
    fn from(dto: VelocityDto) -> Self {
        Velocity::new(dto.vel_x, dto.vel_y)
    }
}

impl From<SnakeDto> for Snake {
    fn from(dto: SnakeDto) -> Self {
        Snake::new(Position::new(dto.x, dto.y), Velocity::new(dto.vel_x, dto.vel_y))
    }
}

impl From<Snake> for SnakeDto {
    fn from(snake: Snake) -> Self {
        Self {
            x: snake.position.x,
            y: snake.position.y,
            vel_x: snake.velocity.vel_x,
            vel_y: snake.velocity.vel_y,
        }
    }
}

impl From<ValidateGameRequest> for ReplayDraft {
    fn from(request: ValidateGameRequest) -> Self {
        Self {
            game_id: request.game_id,
            width: request.width,
            height: request.height,
            // Only an absent score is missing; null counts as zero.
            score: request.score.map(|score| score.unwrap_or(0)),
            fruit: request.fruit.map(Position::from),
            snake: request.snake.map(Snake::from),
            ticks: request
                .ticks
                .map(|ticks| ticks.into_iter().map(Velocity::from).collect()),
        }
    }
}

impl From<GameState> for GameStateResponse {
    fn from(state: GameState) -> Self {
        Self {
            game_id: state.game_id,
            width: state.width,
            height: state.height,
            score: state.score,
            fruit: state.fruit.into(),
            snake: state.snake.into(),
        }
    }
}
