// Movement and fruit rules applied on every replayed tick.

use crate::domain::geometry::{Position, Velocity};
use crate::domain::state::Fruit;

/// Decides whether the snake may switch from `current` to `proposed`.
///
/// The proposal must keep at least one moving axis from flipping sign and must
/// itself be a single-axis unit step. Straight-on and 90 degree turns pass;
/// reversals, diagonals and stopping do not. A stationary `current` accepts
/// nothing.
pub fn is_valid_move(current: Velocity, proposed: Velocity) -> bool {
    if !proposed.has_unit_components() {
        return false;
    }

    let keeps_x = current.vel_x != 0 && proposed.vel_x != -current.vel_x;
    let keeps_y = current.vel_y != 0 && proposed.vel_y != -current.vel_y;
    if keeps_x || keeps_y {
        return proposed.is_axis_unit();
    }

    false
}

pub fn is_fruit_found(position: Position, fruit: Fruit) -> bool {
    position.x == fruit.x && position.y == fruit.y
}
