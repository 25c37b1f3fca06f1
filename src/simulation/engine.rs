use crate::card::CardFactory;
use crate::error::TrialError;
use crate::game::state::TrialState;
use crate::game::turns::{can_cast_target, draw_step, land_drop, start_turn};
use crate::rng::GameRng;
use crate::simulation::deck::build_library;
use crate::simulation::mulligan::{draw_opening_hand, resolve_mulligans};
use crate::simulation::params::TrialParams;
use serde::Serialize;

/// Result of a single trial
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    /// Turn the target was cast (None if the library ran out first)
    pub cast_turn: Option<u32>,
    pub mana_value: u32,
    pub on_color_pips: u32,
    pub off_color_pips: u32,
    pub generic: u32,
    pub mulligan_count: u32,
}

/// Run one complete trial with the generator for `trial_index` of a
/// combination seeded by `seed`
pub fn run_trial(
    params: &TrialParams,
    seed: u64,
    trial_index: u64,
    verbose: bool,
) -> Result<TrialResult, TrialError> {
    let mut rng = GameRng::for_trial(seed, trial_index);
    run_trial_with_rng(params, &mut rng, verbose)
}

/// Deck construction, mulligans, then turns until cast or exhaustion
pub fn run_trial_with_rng(
    params: &TrialParams,
    rng: &mut GameRng,
    verbose: bool,
) -> Result<TrialResult, TrialError> {
    let mut factory = CardFactory::new();
    let target = factory.target(params.mana_value, params.on_color_pips, params.off_color_pips)?;
    let mut library = build_library(&target, params.on_color_land_count, &mut factory, rng)?;
    let mut hand = draw_opening_hand(&mut library, &target)?;
    let mulligan_count = resolve_mulligans(&mut hand, &mut library)?;

    if verbose {
        println!("=== Trial: {} ===", params);
        println!("Mulligans: {}", mulligan_count);
        println!("Kept hand ({} cards):", hand.size());
        for card in hand.cards() {
            println!("  {}", card);
        }
    }

    let mut state = TrialState::new(target, hand, library);
    let cast_turn = play_game(&mut state, verbose);

    Ok(TrialResult {
        cast_turn,
        mana_value: state.target.mana_value(),
        on_color_pips: state.target.on_color_pips(),
        off_color_pips: state.target.off_color_pips(),
        generic: state.target.generic(),
        mulligan_count,
    })
}

/// Play turns from turn 1 until the target is castable or a draw is
/// due with an empty library. Returns the cast turn.
pub fn play_game(state: &mut TrialState, verbose: bool) -> Option<u32> {
    loop {
        start_turn(state);

        if !draw_step(state) {
            if verbose {
                println!("[Turn {}] Library empty, target never cast", state.turn);
            }
            return None;
        }

        let played = land_drop(state);
        let mana = state.board_mana();
        if verbose {
            match played {
                Some(color) => println!(
                    "[Turn {}] Played {} land (board: {} on, {} off; hand {}, library {})",
                    state.turn,
                    color,
                    mana.on_color,
                    mana.off_color,
                    state.hand.size(),
                    state.library.size()
                ),
                None => println!(
                    "[Turn {}] No land drop (board: {} on, {} off; hand {}, library {})",
                    state.turn,
                    mana.on_color,
                    mana.off_color,
                    state.hand.size(),
                    state.library.size()
                ),
            }
        }

        if can_cast_target(state) {
            if verbose {
                println!("[Turn {}] Cast target", state.turn);
            }
            return Some(state.turn);
        }
    }
}
