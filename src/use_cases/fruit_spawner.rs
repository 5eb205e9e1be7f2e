// Fruit placement over an injected random source.

use crate::domain::errors::SpawnError;
use crate::domain::ports::RandomSource;
use crate::domain::state::Fruit;

/// Upper bound on redraws when relocating an eaten fruit.
pub const RESPAWN_ATTEMPT_LIMIT: u32 = 1024;

pub struct FruitSpawner<R> {
    random: R,
}

impl<R> FruitSpawner<R>
where
    R: RandomSource,
{
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Draws a cell uniformly from `[0, width) x [0, height)`, each axis
    /// independently.
    pub fn spawn(&mut self, width: i64, height: i64) -> Result<Fruit, SpawnError> {
        if width <= 0 || height <= 0 {
            return Err(SpawnError::EmptyField);
        }

        Ok(Fruit {
            x: self.random.index_below(width),
            y: self.random.index_below(height),
        })
    }

    /// Draws until the new cell differs from `current`.
    ///
    /// Single-cell fields are rejected up front since no other cell exists.
    /// The redraw loop is capped at [`RESPAWN_ATTEMPT_LIMIT`].
    pub fn respawn_different(
        &mut self,
        current: Fruit,
        width: i64,
        height: i64,
    ) -> Result<Fruit, SpawnError> {
        if width <= 0 || height <= 0 {
            return Err(SpawnError::EmptyField);
        }
        if width.saturating_mul(height) <= 1 {
            return Err(SpawnError::NoFreeCell);
        }

        for _ in 0..RESPAWN_ATTEMPT_LIMIT {
            let candidate = self.spawn(width, height)?;
            if candidate != current {
                return Ok(candidate);
            }
        }

        Err(SpawnError::RetriesExhausted {
            attempts: RESPAWN_ATTEMPT_LIMIT,
        })
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> R {
        self.random
    }
}
