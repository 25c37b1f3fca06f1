use crate::card::{Card, LandColor};
use crate::game::state::TrialState;
use crate::simulation::decisions::DecisionEngine;

/// Start a new turn: increment turn counter, reset land drop
pub fn start_turn(state: &mut TrialState) {
    state.turn += 1;
    state.reset_turn_state();
}

/// Draw step: no draw on turn 1, otherwise draw one card.
///
/// Returns false when a draw was due but the library is empty; the game
/// cannot continue past that point.
pub fn draw_step(state: &mut TrialState) -> bool {
    if state.turn <= 1 {
        return true;
    }
    state.draw_card()
}

/// Play at most one land, chosen by the land-drop policy.
/// Returns the color of the land played, if any.
pub fn land_drop(state: &mut TrialState) -> Option<LandColor> {
    if !can_play_land(state) {
        return None;
    }
    let id = DecisionEngine::choose_land_to_play(&state.hand, state.board_mana(), &state.target)?;
    let color = state
        .hand
        .cards()
        .iter()
        .find(|c| c.id() == id)
        .and_then(Card::land_color)?;
    if state.play_land(id) {
        Some(color)
    } else {
        None
    }
}

/// Can the target be paid for with the lands on the board right now
pub fn can_cast_target(state: &TrialState) -> bool {
    state.board_mana().can_cast(&state.target)
}

/// Check if player can play a land this turn
pub fn can_play_land(state: &TrialState) -> bool {
    !state.land_played_this_turn
}
