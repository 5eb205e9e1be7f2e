use std::collections::VecDeque;

use crate::domain::ports::RandomSource;

// Replays a fixed script of draws, wrapped into range. Once the script runs
// out the last value repeats.
#[derive(Clone, Debug)]
pub(crate) struct ScriptedRandom {
    script: VecDeque<i64>,
    last: i64,
    pub(crate) draws: usize,
}

impl ScriptedRandom {
    pub(crate) fn new(script: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: 0,
            draws: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn index_below(&mut self, bound: i64) -> i64 {
        self.draws += 1;
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last.rem_euclid(bound)
    }
}
