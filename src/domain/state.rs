// Game state as exchanged with the caller on every round trip.

use crate::domain::geometry::{Position, Velocity};

// The target cell.
pub type Fruit = Position;

// Only the head is modelled; there is no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub position: Position,
    pub velocity: Velocity,
}

impl Snake {
    pub fn new(position: Position, velocity: Velocity) -> Self {
        Self { position, velocity }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub game_id: String,
    pub width: i64,
    pub height: i64,
    pub score: u64,
    pub fruit: Fruit,
    pub snake: Snake,
}

/// A well-formed replay: a full game state plus a non-empty tick sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayRequest {
    pub state: GameState,
    pub ticks: Vec<Velocity>,
}

/// An unvalidated replay as submitted by the caller. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayDraft {
    pub game_id: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub score: Option<i64>,
    pub fruit: Option<Fruit>,
    pub snake: Option<Snake>,
    pub ticks: Option<Vec<Velocity>>,
}
