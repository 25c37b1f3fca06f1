use crate::card::{Card, CardId, LandColor, TargetCard};
use crate::game::mana::BoardMana;
use crate::game::zones::Hand;

/// Card-choice policies for the simulated player
pub struct DecisionEngine;

impl DecisionEngine {
    /// Choose which land to play this turn.
    ///
    /// On-color lands come first while the board is short of on-color
    /// pips, then off-color lands while short of off-color pips, then
    /// whatever land is in hand. Ties go to the earliest card in hand.
    pub fn choose_land_to_play(hand: &Hand, mana: BoardMana, target: &TargetCard) -> Option<CardId> {
        if mana.needs_on_color(target) {
            if let Some(id) = hand.find(|c| c.is_land_of(LandColor::OnColor)) {
                return Some(id);
            }
        }
        if mana.needs_off_color(target) {
            if let Some(id) = hand.find(|c| c.is_land_of(LandColor::OffColor)) {
                return Some(id);
            }
        }
        hand.find(Card::is_land)
    }

    /// Choose the next card to put on the bottom after a mulligan:
    /// filler, then off-color lands, then on-color lands. Never the target.
    pub fn choose_card_to_bottom(hand: &Hand) -> Option<CardId> {
        hand.find(Card::is_filler)
            .or_else(|| hand.find(|c| c.is_land_of(LandColor::OffColor)))
            .or_else(|| hand.find(|c| c.is_land_of(LandColor::OnColor)))
    }
}
