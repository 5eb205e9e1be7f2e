// Domain layer: grid geometry, move rules and game state.

pub mod errors;
pub mod geometry;
pub mod ports;
pub mod rules;
pub mod state;

pub use errors::{NewGameError, SpawnError, Violation, Violations};
pub use geometry::{Position, Velocity, is_out_of_bounds, next_position};
pub use ports::RandomSource;
pub use rules::{is_fruit_found, is_valid_move};
pub use state::{Fruit, GameState, ReplayDraft, ReplayRequest, Snake};
