// Replays a tick sequence against the movement rules.

use crate::domain::errors::SpawnError;
use crate::domain::geometry::{is_out_of_bounds, next_position};
use crate::domain::ports::RandomSource;
use crate::domain::rules::{is_fruit_found, is_valid_move};
use crate::domain::state::{GameState, ReplayRequest, Snake};
use crate::use_cases::fruit_spawner::FruitSpawner;

/// Terminal result of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    // The fruit was reached; carries the advanced state.
    Success(GameState),
    // Ticks ran out before reaching the fruit.
    NotFound,
    // A tick left the field or was an illegal turn.
    GameOver,
}

/// Steps through `request.ticks` in order and stops at the first terminal
/// condition. Ticks after a capture or a failure are ignored.
pub fn simulate<R>(
    request: &ReplayRequest,
    spawner: &mut FruitSpawner<R>,
) -> Result<TickOutcome, SpawnError>
where
    R: RandomSource,
{
    let state = &request.state;
    let mut position = state.snake.position;
    let mut velocity = state.snake.velocity;

    for &tick in &request.ticks {
        let proposed = next_position(position, tick);

        if is_out_of_bounds(proposed, state.width, state.height) || !is_valid_move(velocity, tick) {
            return Ok(TickOutcome::GameOver);
        }

        if is_fruit_found(proposed, state.fruit) {
            let fruit = spawner.respawn_different(state.fruit, state.width, state.height)?;
            return Ok(TickOutcome::Success(GameState {
                game_id: state.game_id.clone(),
                width: state.width,
                height: state.height,
                score: state.score + 1,
                fruit,
                snake: Snake::new(state.fruit, tick),
            }));
        }

        position = proposed;
        velocity = tick;
    }

    Ok(TickOutcome::NotFound)
}
