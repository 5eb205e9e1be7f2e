pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::server::{run, run_with_config, run_with_state};
pub use interface_adapters::state::AppState;
