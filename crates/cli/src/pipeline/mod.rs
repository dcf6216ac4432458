//! Replay orchestration: blueprint loading, the cursor walk, and run statistics.

mod orchestrator;
mod stats;

pub use orchestrator::{load_blueprint, run_replay};
pub use stats::ReplayStats;
