use std::path::PathBuf;
use thiserror::Error;

/// Rejected simulation parameters. Raised before any deck is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("mana value must be at least 1, got {0}")]
    ManaValueTooLow(u32),
    #[error("on-color pips must be at least 1, got {0}")]
    OnColorPipsTooLow(u32),
    #[error("mana value {mana_value} is too low for {on_color_pips} on-color and {off_color_pips} off-color pips")]
    PipsExceedManaValue {
        mana_value: u32,
        on_color_pips: u32,
        off_color_pips: u32,
    },
    #[error("on-color land count must be between 1 and {max}, got {count}")]
    LandCountOutOfRange { count: u32, max: u32 },
    #[error("not enough on-color lands: {lands} < {pips}")]
    NotEnoughOnColorLands { lands: u32, pips: u32 },
    #[error("not enough off-color lands: {lands} < {pips}")]
    NotEnoughOffColorLands { lands: u32, pips: u32 },
    #[error("trial count must be at least 1")]
    NoTrials,
    #[error("worker count must be at least 1")]
    NoWorkers,
    #[error("invalid sweep range: {0}")]
    InvalidRange(String),
}

/// A broken invariant inside a trial. Never expected with valid parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("library size mismatch: {actual} != {expected}")]
    LibrarySize { actual: usize, expected: usize },
    #[error("library composition mismatch: {on_color} on-color, {off_color} off-color, {filler} filler")]
    LibraryComposition {
        on_color: usize,
        off_color: usize,
        filler: usize,
    },
    #[error("hand size mismatch: {actual} != {expected}")]
    HandSize { actual: usize, expected: usize },
    #[error("cannot draw {requested} cards from a library of {available}")]
    DrawPastEnd { requested: usize, available: usize },
    #[error("target card missing from hand")]
    TargetNotInHand,
    #[error("no card left to put on the bottom")]
    NothingToBottom,
}

/// Anything that can end a single trial early
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrialError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("internal consistency fault: {0}")]
    Consistency(#[from] ConsistencyError),
}

impl TrialError {
    pub fn is_config(&self) -> bool {
        matches!(self, TrialError::Config(_))
    }

    pub fn is_consistency(&self) -> bool {
        matches!(self, TrialError::Consistency(_))
    }
}

/// Failures writing the results table
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Top-level error for the command line driver
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write results: {0}")]
    Report(#[from] ReportError),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
