use crate::config::SweepConfig;
use crate::error::SimError;
use crate::simulation::params::TrialParams;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mana-value-sim")]
#[command(about = "Expected cast turn by on-color land count", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep every mana value / pip split / land count and write a results table (default)
    Sweep(SweepArgs),

    /// Run many trials of one parameter combination
    Run {
        #[command(flatten)]
        combo: ComboArgs,

        /// Number of trials to simulate
        #[arg(short, long, default_value = "10000")]
        num_trials: usize,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Worker threads (capped at 16)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Play a single trial
    Trial {
        #[command(flatten)]
        combo: ComboArgs,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Which trial stream of the seed to play
        #[arg(short, long, default_value = "0")]
        trial_index: u64,

        /// Narrate the game turn by turn
        #[arg(short, long)]
        verbose: bool,

        /// Print the trial result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Target card and deck for one parameter combination
#[derive(Args, Debug, Clone)]
pub struct ComboArgs {
    /// Total mana value of the target card
    #[arg(short, long)]
    pub mana_value: u32,

    /// On-color pips in the cost
    #[arg(long)]
    pub on_pips: u32,

    /// Off-color pips in the cost
    #[arg(long, default_value = "0")]
    pub off_pips: u32,

    /// On-color lands among the deck's 17
    #[arg(short, long)]
    pub lands: u32,
}

impl ComboArgs {
    pub fn params(&self) -> Result<TrialParams, SimError> {
        Ok(TrialParams::new(
            self.mana_value,
            self.on_pips,
            self.off_pips,
            self.lands,
        )?)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SweepArgs {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Trials per parameter combination
    #[arg(short, long)]
    pub iterations: Option<usize>,

    #[arg(long)]
    pub min_mana_value: Option<u32>,

    #[arg(long)]
    pub max_mana_value: Option<u32>,

    /// Only mono-colored targets (no off-color pips)
    #[arg(long)]
    pub no_gold: bool,

    /// Seed for reproducibility
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Worker threads (capped at 16)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Results table path (.csv or .json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SweepArgs {
    /// Defaults, then the config file, then flags
    pub fn resolve(&self) -> Result<SweepConfig, SimError> {
        let mut config = match &self.config {
            Some(path) => SweepConfig::from_file(path)?,
            None => SweepConfig::default(),
        };
        if let Some(n) = self.iterations {
            config.iterations_per_simulation = n;
        }
        if let Some(mv) = self.min_mana_value {
            config.min_mana_value = mv;
        }
        if let Some(mv) = self.max_mana_value {
            config.max_mana_value = mv;
        }
        if self.no_gold {
            config.include_gold_cards = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
        if let Some(path) = &self.output {
            config.output = path.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "mana-value-sim",
            "sweep",
            "--iterations",
            "200",
            "--max-mana-value",
            "4",
            "--no-gold",
            "--seed",
            "9",
            "--output",
            "out.json",
        ]);
        let Some(Commands::Sweep(args)) = cli.command else {
            panic!("expected sweep subcommand");
        };
        let config = args.resolve().expect("valid config");
        assert_eq!(config.iterations_per_simulation, 200);
        assert_eq!(config.max_mana_value, 4);
        assert!(!config.include_gold_cards);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = SweepArgs {
            min_mana_value: Some(6),
            max_mana_value: Some(2),
            ..SweepArgs::default()
        };
        assert!(matches!(args.resolve(), Err(SimError::Config(_))));
    }

    #[test]
    fn test_combo_args_validate() {
        let cli = Cli::parse_from([
            "mana-value-sim", "trial", "--mana-value", "2", "--on-pips", "0", "--lands", "5",
        ]);
        let Some(Commands::Trial { combo, .. }) = cli.command else {
            panic!("expected trial subcommand");
        };
        assert!(matches!(combo.params(), Err(SimError::Config(_))));
    }
}
