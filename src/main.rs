use clap::Parser;
use log::info;
use mana_value_sim::cli::{Cli, Commands, ComboArgs, SweepArgs};
use mana_value_sim::error::SimError;
use mana_value_sim::rng::random_seed;
use mana_value_sim::simulation::report::write_results;
use mana_value_sim::simulation::runner::combination_seed;
use mana_value_sim::simulation::sweep::{parameter_grid, progress_bar};
use mana_value_sim::simulation::{run_sweep, run_trial, TrialRunner};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Sweep(args)) => run_full_sweep(&args),
        Some(Commands::Run {
            combo,
            num_trials,
            seed,
            workers,
        }) => run_combination(&combo, num_trials, seed, workers),
        Some(Commands::Trial {
            combo,
            seed,
            trial_index,
            verbose,
            json,
        }) => run_single_trial(&combo, seed, trial_index, verbose, json),
        None => run_full_sweep(&SweepArgs::default()),
    };

    if let Err(e) = outcome {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn run_full_sweep(args: &SweepArgs) -> Result<(), SimError> {
    let config = args.resolve()?;
    let seed = config.seed.unwrap_or_else(random_seed);
    let runner = TrialRunner::new(config.workers, seed)?;

    let combinations = parameter_grid(&config).len();
    info!(
        "Sweeping {} combinations x {} trials (MV {}..={}, gold cards {})",
        combinations,
        config.iterations_per_simulation,
        config.min_mana_value,
        config.max_mana_value,
        if config.include_gold_cards { "on" } else { "off" }
    );
    info!("Seed: {} ({} workers)", runner.base_seed(), runner.workers());

    let start = std::time::Instant::now();
    let summary = run_sweep(&config, &runner, &progress_bar(combinations));
    let elapsed = start.elapsed();

    if summary.omitted > 0 {
        info!(
            "Omitted {} infeasible combinations of {}",
            summary.omitted, summary.combinations
        );
    }

    let format = write_results(&summary.rows, &config.output)?;
    info!(
        "Wrote {} rows to {} ({:?}) in {:.2?}",
        summary.rows.len(),
        config.output.display(),
        format,
        elapsed
    );
    Ok(())
}

fn run_combination(
    combo: &ComboArgs,
    num_trials: usize,
    seed: Option<u64>,
    workers: Option<usize>,
) -> Result<(), SimError> {
    let params = combo.params()?;
    let seed = seed.unwrap_or_else(random_seed);
    let runner = TrialRunner::new(workers, seed)?;

    println!("\n=== Mana Value Simulator ===\n");
    println!("Target: {}", params);
    println!("Trials: {}", num_trials);
    println!("Seed: {}", seed);
    println!();

    let start = std::time::Instant::now();
    let batch = runner.run(&params, num_trials)?;
    let elapsed = start.elapsed();

    let completed = batch.results.len();
    println!("=== Results ===\n");
    println!(
        "Cast rate: {:.1}% ({}/{})",
        batch.cast_rate() * 100.0,
        batch.cast_count(),
        completed
    );
    match batch.aggregate() {
        Some(row) => {
            match row.average_cast_turn {
                Some(turn) => println!("Average cast turn: {:.2}", turn),
                None => println!("Average cast turn: never cast"),
            }
            println!("Average mulligans: {:.3}", row.average_mulligan_count);
        }
        None => println!("Every trial was discarded"),
    }
    if batch.discarded.total() > 0 {
        println!(
            "Discarded trials: {} ({} config, {} consistency)",
            batch.discarded.total(),
            batch.discarded.config,
            batch.discarded.consistency
        );
    }
    println!();

    if completed > 0 {
        println!("Turn distribution:");
        for (turn, count) in batch.turn_distribution() {
            let pct = count as f64 / completed as f64 * 100.0;
            let bar = "█".repeat((pct / 2.0) as usize);
            println!("  Turn {:2}: {:5.1}% {} ({})", turn, pct, bar, count);
        }
        let never = completed - batch.cast_count();
        if never > 0 {
            let pct = never as f64 / completed as f64 * 100.0;
            println!("  Never:   {:5.1}% ({})", pct, never);
        }
        println!();
    }

    println!("Time: {:.2?} ({} workers)", elapsed, runner.workers());
    Ok(())
}

fn run_single_trial(
    combo: &ComboArgs,
    seed: Option<u64>,
    trial_index: u64,
    verbose: bool,
    json: bool,
) -> Result<(), SimError> {
    let params = combo.params()?;
    let seed = seed.unwrap_or_else(random_seed);
    if !json {
        println!("Seed: {} (trial {})", seed, trial_index);
    }

    let result = match run_trial(
        &params,
        combination_seed(seed, &params),
        trial_index,
        verbose && !json,
    ) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("✗ Trial discarded: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to serialize trial: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    match result.cast_turn {
        Some(turn) => println!("Cast on turn {}", turn),
        None => println!("Never cast"),
    }
    println!("Mulligans: {}", result.mulligan_count);
    Ok(())
}
