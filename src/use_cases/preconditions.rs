// Sanity checks run on a submitted replay before any tick is simulated.

use crate::domain::errors::{Violation, Violations};
use crate::domain::geometry::is_out_of_bounds;
use crate::domain::state::{GameState, ReplayDraft, ReplayRequest};

/// Runs every check and returns all failures in a fixed order. Nothing is
/// short-circuited except the bounds checks, which need a usable field.
pub fn collect_violations(draft: &ReplayDraft) -> Violations {
    let mut violations = Violations::default();

    // Empty ids and zero dimensions count as absent.
    let has_game_id = draft.game_id.as_deref().is_some_and(|id| !id.is_empty());
    let has_width = draft.width.is_some_and(|width| width != 0);
    let has_height = draft.height.is_some_and(|height| height != 0);
    if !has_game_id
        || draft.fruit.is_none()
        || !has_height
        || !has_width
        || draft.snake.is_none()
        || draft.ticks.is_none()
        || draft.score.is_none()
    {
        violations.push(Violation::MissingFields);
    }

    let non_positive = |value: Option<i64>| value.is_some_and(|value| value <= 0);
    if non_positive(draft.width) || non_positive(draft.height) {
        violations.push(Violation::InvalidDimensions);
    } else if let (Some(width), Some(height)) = (draft.width, draft.height) {
        if let Some(snake) = draft.snake
            && is_out_of_bounds(snake.position, width, height)
        {
            violations.push(Violation::SnakeOutOfBounds);
        }
        if let Some(fruit) = draft.fruit
            && is_out_of_bounds(fruit, width, height)
        {
            violations.push(Violation::FruitOutOfBounds);
        }
    }

    if let Some(snake) = draft.snake {
        let velocity = snake.velocity;
        // Equal components rule out (0,0), (1,1) and (-1,-1) but not the anti-diagonals.
        if !velocity.has_unit_components() || velocity.vel_x == velocity.vel_y {
            violations.push(Violation::InvalidSnakeVelocity);
        }
    }

    if draft.score.is_some_and(|score| score < 0) {
        violations.push(Violation::NegativeScore);
    }

    if draft.ticks.as_ref().is_none_or(|ticks| ticks.is_empty()) {
        violations.push(Violation::MissingTicks);
    }

    violations
}

/// Turns a draft into a well-formed replay, or reports why it is not one.
pub fn validate(draft: ReplayDraft) -> Result<ReplayRequest, Violations> {
    let violations = collect_violations(&draft);
    if !violations.is_empty() {
        return Err(violations);
    }

    let ReplayDraft {
        game_id: Some(game_id),
        width: Some(width),
        height: Some(height),
        score: Some(score),
        fruit: Some(fruit),
        snake: Some(snake),
        ticks: Some(ticks),
    } = draft
    else {
        return Err(Violations(vec![Violation::MissingFields]));
    };
    let score = u64::try_from(score).map_err(|_| Violations(vec![Violation::NegativeScore]))?;

    Ok(ReplayRequest {
        state: GameState {
            game_id,
            width,
            height,
            score,
            fruit,
            snake,
        },
        ticks,
    })
}
