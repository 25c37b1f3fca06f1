use crate::config::SweepConfig;
use crate::simulation::deck::LAND_COUNT;
use crate::simulation::params::TrialParams;
use crate::simulation::runner::{AggregateResult, TrialRunner};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

/// Every parameter combination of the sweep, in output order: land count,
/// then mana value, then on-color pips, then off-color pips.
///
/// Without gold cards the off-color pip count is always zero.
pub fn parameter_grid(config: &SweepConfig) -> Vec<TrialParams> {
    let mut grid = Vec::new();
    for on_color_land_count in 1..=LAND_COUNT {
        for mana_value in config.min_mana_value..=config.max_mana_value {
            for on_color_pips in 1..=mana_value {
                let max_off = if config.include_gold_cards {
                    mana_value - on_color_pips
                } else {
                    0
                };
                for off_color_pips in 0..=max_off {
                    grid.push(TrialParams {
                        mana_value,
                        on_color_pips,
                        off_color_pips,
                        on_color_land_count,
                    });
                }
            }
        }
    }
    grid
}

/// Rows produced by a sweep plus how many combinations were left out
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    pub rows: Vec<AggregateResult>,
    pub combinations: usize,
    pub omitted: usize,
}

pub fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} combinations ({eta}) {msg}",
    ) {
        bar.set_style(style);
    }
    bar
}

/// Run every combination in turn. Infeasible combinations and those whose
/// trials were all discarded are omitted, never fatal.
pub fn run_sweep(config: &SweepConfig, runner: &TrialRunner, progress: &ProgressBar) -> SweepSummary {
    let grid = parameter_grid(config);
    let mut summary = SweepSummary {
        rows: Vec::with_capacity(grid.len()),
        combinations: grid.len(),
        omitted: 0,
    };

    for params in &grid {
        progress.set_message(format!(
            "MV {} ({}+{} pips), {} lands",
            params.mana_value, params.on_color_pips, params.off_color_pips, params.on_color_land_count
        ));
        match runner.aggregate(params, config.iterations_per_simulation) {
            Ok(Some(row)) => summary.rows.push(row),
            Ok(None) => {
                debug!("Omitting {}: every trial was discarded", params);
                summary.omitted += 1;
            }
            Err(e) => {
                debug!("Omitting {}: {}", params, e);
                summary.omitted += 1;
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    summary
}
