use crate::domain::errors::{SpawnError, Violations};
use crate::domain::ports::RandomSource;
use crate::domain::state::{GameState, ReplayDraft};
use crate::use_cases::fruit_spawner::FruitSpawner;
use crate::use_cases::preconditions::validate;
use crate::use_cases::tick_simulator::{TickOutcome, simulate};

// Outcome of one validate-and-replay call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutcome {
    Invalid(Violations),
    Success(GameState),
    NotFound,
    Fail,
}

impl From<TickOutcome> for ReplayOutcome {
    fn from(outcome: TickOutcome) -> Self {
        match outcome {
            TickOutcome::Success(state) => ReplayOutcome::Success(state),
            TickOutcome::NotFound => ReplayOutcome::NotFound,
            TickOutcome::GameOver => ReplayOutcome::Fail,
        }
    }
}

// Replay use case with an injected random source.
pub struct ReplayUseCase<R> {
    pub random: R,
}

impl<R> ReplayUseCase<R>
where
    R: RandomSource,
{
    pub fn execute(self, draft: ReplayDraft) -> Result<ReplayOutcome, SpawnError> {
        let request = match validate(draft) {
            Ok(request) => request,
            Err(violations) => return Ok(ReplayOutcome::Invalid(violations)),
        };

        let mut spawner = FruitSpawner::new(self.random);
        let outcome = simulate(&request, &mut spawner)?;
        tracing::debug!(
            game_id = %request.state.game_id,
            ticks = request.ticks.len(),
            ?outcome,
            "replay finished"
        );

        Ok(outcome.into())
    }
}
