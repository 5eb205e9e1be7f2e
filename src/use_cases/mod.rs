// Use cases layer: fruit placement, request checks and tick replay.

pub mod fruit_spawner;
pub mod new_game;
pub mod preconditions;
pub mod replay;
pub mod tick_simulator;

#[cfg(test)]
pub(crate) mod test_support;

pub use fruit_spawner::FruitSpawner;
pub use new_game::NewGameUseCase;
pub use replay::{ReplayOutcome, ReplayUseCase};
pub use tick_simulator::TickOutcome;
