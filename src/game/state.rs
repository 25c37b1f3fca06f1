use crate::card::{CardId, TargetCard};
use crate::game::mana::BoardMana;
use crate::game::zones::{Board, Hand, Library};

/// Complete state of one trial. Owned by that trial alone.
#[derive(Debug, Clone)]
pub struct TrialState {
    // Zones
    pub library: Library,
    pub hand: Hand,
    pub board: Board,

    // Game info
    pub target: TargetCard,
    pub turn: u32,
    pub land_played_this_turn: bool,
}

impl TrialState {
    pub fn new(target: TargetCard, hand: Hand, library: Library) -> Self {
        TrialState {
            library,
            hand,
            board: Board::new(),
            target,
            turn: 0,
            land_played_this_turn: false,
        }
    }

    /// Draw a card from the library to hand
    pub fn draw_card(&mut self) -> bool {
        if let Some(card) = self.library.draw() {
            self.hand.add_card(card);
            true
        } else {
            false
        }
    }

    /// Move a land from hand to the board. Fails if a land was already
    /// played this turn or the card is not a land in hand.
    pub fn play_land(&mut self, id: CardId) -> bool {
        if self.land_played_this_turn {
            return false;
        }
        match self.hand.remove_land(id) {
            Some(land) => {
                self.board.play(land, self.turn);
                self.land_played_this_turn = true;
                true
            }
            None => false,
        }
    }

    pub fn board_mana(&self) -> BoardMana {
        BoardMana::from_board(&self.board)
    }

    /// Reset turn state
    pub fn reset_turn_state(&mut self) {
        self.land_played_this_turn = false;
    }
}
