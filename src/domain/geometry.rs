// Grid coordinates and unit-step velocities.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    pub vel_x: i64,
    pub vel_y: i64,
}

impl Velocity {
    pub fn new(vel_x: i64, vel_y: i64) -> Self {
        Self { vel_x, vel_y }
    }

    // True when both components are in {-1, 0, 1}.
    pub fn has_unit_components(&self) -> bool {
        is_unit_component(self.vel_x) && is_unit_component(self.vel_y)
    }

    // A step along exactly one axis.
    pub fn is_axis_unit(&self) -> bool {
        (self.vel_x != 0 && self.vel_y == 0) || (self.vel_y != 0 && self.vel_x == 0)
    }
}

pub fn is_unit_component(value: i64) -> bool {
    (-1..=1).contains(&value)
}

// Saturates at the i64 limits; a saturated coordinate is always off the field.
pub fn next_position(position: Position, velocity: Velocity) -> Position {
    Position {
        x: position.x.saturating_add(velocity.vel_x),
        y: position.y.saturating_add(velocity.vel_y),
    }
}

/// Returns true when `position` lies outside the half-open field
/// `[0, width) x [0, height)`.
pub fn is_out_of_bounds(position: Position, width: i64, height: i64) -> bool {
    position.x < 0 || position.x >= width || position.y < 0 || position.y >= height
}
