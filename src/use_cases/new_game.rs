use uuid::Uuid;

use crate::domain::errors::NewGameError;
use crate::domain::geometry::{Position, Velocity};
use crate::domain::ports::RandomSource;
use crate::domain::state::{GameState, Snake};
use crate::use_cases::fruit_spawner::FruitSpawner;

// Every game starts in the origin corner heading right.
const INITIAL_POSITION: Position = Position { x: 0, y: 0 };
const INITIAL_VELOCITY: Velocity = Velocity { vel_x: 1, vel_y: 0 };

// New game use case with an injected random source.
pub struct NewGameUseCase<R> {
    pub random: R,
}

impl<R> NewGameUseCase<R>
where
    R: RandomSource,
{
    pub fn execute(self, width: i64, height: i64) -> Result<GameState, NewGameError> {
        if width <= 0 || height <= 0 {
            return Err(NewGameError::InvalidDimensions);
        }

        let mut spawner = FruitSpawner::new(self.random);
        let fruit = spawner.spawn(width, height)?;

        Ok(GameState {
            game_id: Uuid::new_v4().to_string(),
            width,
            height,
            score: 0,
            fruit,
            snake: Snake::new(INITIAL_POSITION, INITIAL_VELOCITY),
        })
    }
}
