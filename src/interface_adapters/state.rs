use rand::Rng;
use std::sync::Arc;

use crate::domain::ports::RandomSource;

// Builds a fresh random source for each request.
pub type RandomFactory = Arc<dyn Fn() -> Box<dyn RandomSource + Send> + Send + Sync>;

// Application state for the HTTP handlers. Holds no game data; each request
// carries its own state.
#[derive(Clone)]
pub struct AppState {
    pub random: RandomFactory,
}

impl AppState {
    pub fn new(random: RandomFactory) -> Self {
        Self { random }
    }

    // Production state drawing from the thread-local generator.
    pub fn with_thread_random() -> Self {
        Self::new(Arc::new(|| {
            Box::new(ThreadRandom) as Box<dyn RandomSource + Send>
        }))
    }

    pub fn random_source(&self) -> Box<dyn RandomSource + Send> {
        (self.random)()
    }
}

// Random source adapter backed by `rand::rng()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index_below(&mut self, bound: i64) -> i64 {
        rand::rng().random_range(0..bound)
    }
}
