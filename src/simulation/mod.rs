pub mod decisions;
pub mod deck;
pub mod engine;
pub mod mulligan;
pub mod params;
pub mod report;
pub mod runner;
pub mod sweep;

pub use deck::{build_library, LandSplit};
pub use engine::{run_trial, TrialResult};
pub use mulligan::resolve_mulligans;
pub use params::TrialParams;
pub use runner::{AggregateResult, TrialBatch, TrialRunner};
pub use sweep::{parameter_grid, run_sweep};
