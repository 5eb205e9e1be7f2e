use std::fmt;

// A single precondition failure on an incoming replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    MissingFields,
    InvalidDimensions,
    SnakeOutOfBounds,
    FruitOutOfBounds,
    InvalidSnakeVelocity,
    NegativeScore,
    MissingTicks,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Violation::MissingFields => "Missing fields in request body",
            Violation::InvalidDimensions => "Invalid width or height",
            Violation::SnakeOutOfBounds => "Snake has invalid initial position",
            Violation::FruitOutOfBounds => "Fruit has invalid initial position",
            Violation::InvalidSnakeVelocity => "Snake has invalid initial velocity",
            Violation::NegativeScore => "Score must be positive",
            Violation::MissingTicks => "Ticks are not specified",
        };
        f.write_str(message)
    }
}

// All precondition failures for one request, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

// Errors raised while placing fruit on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    // Width or height is not positive.
    EmptyField,
    // The field has a single cell, so a relocated fruit cannot exist.
    NoFreeCell,
    RetriesExhausted { attempts: u32 },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::EmptyField => f.write_str("field has no cells"),
            SpawnError::NoFreeCell => f.write_str("field has no free cell for a new fruit"),
            SpawnError::RetriesExhausted { attempts } => {
                write!(f, "no new fruit position after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for SpawnError {}

// Errors for creating a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewGameError {
    InvalidDimensions,
    Spawn(SpawnError),
}

impl From<SpawnError> for NewGameError {
    fn from(err: SpawnError) -> Self {
        NewGameError::Spawn(err)
    }
}

impl fmt::Display for NewGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewGameError::InvalidDimensions => f.write_str("width and height must be positive"),
            NewGameError::Spawn(err) => write!(f, "fruit spawn failed: {err}"),
        }
    }
}

impl std::error::Error for NewGameError {}
