// Boots a server per test with a pinned fruit sequence.
use snake_server::AppState;
use snake_server::domain::RandomSource;
use std::collections::VecDeque;
use std::sync::Arc;

// Plays back a fixed list of draws, wrapped into range; the last value repeats.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: VecDeque<i64>,
    last: i64,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn index_below(&mut self, bound: i64) -> i64 {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last.rem_euclid(bound)
    }
}

// Start a server on an ephemeral port and return its base URL. Every request
// replays `script` from the start, so fruit positions are predictable.
pub async fn spawn_server(script: Vec<i64>) -> String {
    let source = ScriptedSource::new(script);
    let state = AppState::new(Arc::new(move || {
        Box::new(source.clone()) as Box<dyn RandomSource + Send>
    }));

    // The listener is bound before the task starts, so connections queue
    // until the server accepts them.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        if let Err(e) = snake_server::run_with_state(listener, state).await {
            panic!("server failed: {e}");
        }
    });

    format!("http://{addr}")
}
