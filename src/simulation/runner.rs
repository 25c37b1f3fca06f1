//! Parallel trial execution and reduction to summary statistics.
//!
//! Trials share nothing: each builds its own deck from its own generator
//! (`GameRng::for_trial`), so the pool may run them in any order and the
//! aggregate only depends on the seed.

use crate::card::{CardId, TargetCard};
use crate::error::{ConfigError, SimError, TrialError};
use crate::rng::mix_seed;
use crate::simulation::deck::LandSplit;
use crate::simulation::engine::{run_trial, TrialResult};
use crate::simulation::params::TrialParams;
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;
use serde::Serialize;
use std::collections::BTreeMap;

/// Upper bound on the worker pool size
pub const MAX_WORKERS: usize = 16;

/// Hardware concurrency plus a little headroom, capped at `MAX_WORKERS`
pub fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_add(4)
        .min(MAX_WORKERS)
}

/// Seed for one parameter combination, derived from the run's base seed.
/// Fields are folded in one at a time so no value range aliases another.
pub fn combination_seed(base_seed: u64, params: &TrialParams) -> u64 {
    [
        params.mana_value,
        params.on_color_pips,
        params.off_color_pips,
        params.on_color_land_count,
    ]
    .iter()
    .fold(base_seed, |seed, &field| mix_seed(seed, field as u64))
}

/// Trials dropped from a batch, by error class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscardCounts {
    pub config: usize,
    pub consistency: usize,
}

impl DiscardCounts {
    pub fn record(&mut self, error: &TrialError) {
        if error.is_config() {
            self.config += 1;
        } else {
            self.consistency += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.config + self.consistency
    }
}

/// One row of the results table.
///
/// `average_cast_turn` only covers trials that cast the target, while
/// `average_mulligan_count` covers every successful trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub mana_value: u32,
    pub on_color_pips: u32,
    pub off_color_pips: u32,
    pub on_color_land_count: u32,
    pub off_color_land_count: u32,
    pub iterations: usize,
    pub average_cast_turn: Option<f64>,
    pub average_mulligan_count: f64,
}

/// Everything a batch of trials produced, in trial-index order
#[derive(Debug, Clone)]
pub struct TrialBatch {
    pub params: TrialParams,
    pub iterations: usize,
    pub results: Vec<TrialResult>,
    pub discarded: DiscardCounts,
}

impl TrialBatch {
    /// Reduce to a results row. None when every trial was discarded.
    pub fn aggregate(&self) -> Option<AggregateResult> {
        if self.results.is_empty() {
            return None;
        }

        let cast_turns: Vec<u32> = self.results.iter().filter_map(|r| r.cast_turn).collect();
        let average_cast_turn = if cast_turns.is_empty() {
            None
        } else {
            let sum: u64 = cast_turns.iter().map(|&t| t as u64).sum();
            Some(sum as f64 / cast_turns.len() as f64)
        };
        let mulligans: u64 = self.results.iter().map(|r| r.mulligan_count as u64).sum();

        Some(AggregateResult {
            mana_value: self.params.mana_value,
            on_color_pips: self.params.on_color_pips,
            off_color_pips: self.params.off_color_pips,
            on_color_land_count: self.params.on_color_land_count,
            off_color_land_count: self.params.off_color_land_count(),
            iterations: self.iterations,
            average_cast_turn,
            average_mulligan_count: mulligans as f64 / self.results.len() as f64,
        })
    }

    pub fn cast_count(&self) -> usize {
        self.results.iter().filter(|r| r.cast_turn.is_some()).count()
    }

    /// Fraction of successful trials that cast the target
    pub fn cast_rate(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.cast_count() as f64 / self.results.len() as f64
        }
    }

    /// Number of trials casting on each turn
    pub fn turn_distribution(&self) -> BTreeMap<u32, usize> {
        let mut dist = BTreeMap::new();
        for turn in self.results.iter().filter_map(|r| r.cast_turn) {
            *dist.entry(turn).or_insert(0) += 1;
        }
        dist
    }
}

/// Runs batches of trials on a bounded worker pool
pub struct TrialRunner {
    pool: ThreadPool,
    base_seed: u64,
}

impl TrialRunner {
    /// `workers` defaults to `default_worker_count()` and is capped at
    /// `MAX_WORKERS`
    pub fn new(workers: Option<usize>, base_seed: u64) -> Result<Self, SimError> {
        let workers = match workers {
            Some(0) => return Err(ConfigError::NoWorkers.into()),
            Some(n) => n.min(MAX_WORKERS),
            None => default_worker_count(),
        };
        let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
        Ok(TrialRunner { pool, base_seed })
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Run `num_trials` independent trials of `params`.
    ///
    /// Invalid or infeasible parameters are rejected before any trial
    /// starts. Trials that fail once running are dropped and counted.
    pub fn run(&self, params: &TrialParams, num_trials: usize) -> Result<TrialBatch, ConfigError> {
        params.validate()?;
        if num_trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        let target = TargetCard::new(
            CardId(0),
            params.mana_value,
            params.on_color_pips,
            params.off_color_pips,
        )?;
        LandSplit::for_target(&target, params.on_color_land_count)?;

        let seed = combination_seed(self.base_seed, params);
        let outcomes: Vec<Result<TrialResult, TrialError>> = self.pool.install(|| {
            (0..num_trials)
                .into_par_iter()
                .map(|i| run_trial(params, seed, i as u64, false))
                .collect()
        });

        let mut results = Vec::with_capacity(outcomes.len());
        let mut discarded = DiscardCounts::default();
        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) => discarded.record(&e),
            }
        }
        if discarded.total() > 0 {
            debug!(
                "{}: discarded {} of {} trials ({} config, {} consistency)",
                params,
                discarded.total(),
                num_trials,
                discarded.config,
                discarded.consistency
            );
        }

        Ok(TrialBatch {
            params: *params,
            iterations: num_trials,
            results,
            discarded,
        })
    }

    /// Run a batch and reduce it to a results row
    pub fn aggregate(
        &self,
        params: &TrialParams,
        num_trials: usize,
    ) -> Result<Option<AggregateResult>, ConfigError> {
        Ok(self.run(params, num_trials)?.aggregate())
    }
}
