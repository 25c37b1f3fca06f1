use crate::card::{Card, LandColor, TargetCard};
use crate::error::ConsistencyError;
use crate::game::zones::{Hand, Library};
use crate::simulation::decisions::DecisionEngine;
use crate::simulation::deck::DECK_SIZE;

/// Cards drawn from the library for every hand; the target makes seven
pub const OPENING_DRAW: usize = 6;
pub const STARTING_HAND_SIZE: usize = OPENING_DRAW + 1;
/// Hard floor: never go below a four-card hand
pub const MAX_MULLIGANS: u32 = 3;

/// Draw six cards and add the target to make the opening hand
pub fn draw_opening_hand(library: &mut Library, target: &TargetCard) -> Result<Hand, ConsistencyError> {
    let mut hand = Hand::from_cards(library.draw_n(OPENING_DRAW)?);
    hand.add_card(Card::Target(target.clone()));
    Ok(hand)
}

/// Decide whether to mulligan a hand at the given attempt.
///
/// Seven- and six-card hands go back without an on-color land; a
/// five-card hand goes back only with no land at all; a four-card hand
/// is always kept.
pub fn should_mulligan(hand: &Hand, attempt: u32) -> bool {
    match attempt {
        0 | 1 => hand.count_lands_of(LandColor::OnColor) == 0,
        2 => hand.count_lands() == 0,
        _ => false,
    }
}

/// Put everything but the target on the bottom and draw a fresh six
fn redraw_hand(hand: &mut Hand, library: &mut Library) -> Result<(), ConsistencyError> {
    let (target, rest) = hand.take_all_but_target();
    let target = target.ok_or(ConsistencyError::TargetNotInHand)?;
    library.put_all_on_bottom(rest);

    *hand = Hand::from_cards(library.draw_n(OPENING_DRAW)?);
    hand.add_card(target);
    Ok(())
}

/// Bottom `count` cards one at a time, re-evaluating the priority after
/// each removal
fn bottom_cards(hand: &mut Hand, library: &mut Library, count: u32) -> Result<(), ConsistencyError> {
    for _ in 0..count {
        let card = DecisionEngine::choose_card_to_bottom(hand)
            .and_then(|id| hand.remove_by_id(id))
            .ok_or(ConsistencyError::NothingToBottom)?;
        library.put_on_bottom(card);
    }
    Ok(())
}

/// Resolve mulligans starting from the opening hand.
///
/// Mutates `hand` and `library` in place and returns the number of
/// mulligans taken (0..=3). After `k` mulligans the hand holds `7 - k`
/// cards and every other card is back in the library.
pub fn resolve_mulligans(hand: &mut Hand, library: &mut Library) -> Result<u32, ConsistencyError> {
    let mut mulligan_count = 0;
    while mulligan_count < MAX_MULLIGANS && should_mulligan(hand, mulligan_count) {
        redraw_hand(hand, library)?;
        mulligan_count += 1;
    }

    bottom_cards(hand, library, mulligan_count)?;

    let expected_hand = STARTING_HAND_SIZE - mulligan_count as usize;
    if hand.size() != expected_hand {
        return Err(ConsistencyError::HandSize {
            actual: hand.size(),
            expected: expected_hand,
        });
    }
    let expected_library = DECK_SIZE - expected_hand;
    if library.size() != expected_library {
        return Err(ConsistencyError::LibrarySize {
            actual: library.size(),
            expected: expected_library,
        });
    }

    Ok(mulligan_count)
}
