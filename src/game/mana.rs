use crate::card::{LandColor, TargetCard};
use crate::game::zones::Board;

/// Mana the board can produce, split by color side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardMana {
    pub on_color: u32,
    pub off_color: u32,
}

impl BoardMana {
    pub fn from_board(board: &Board) -> Self {
        BoardMana {
            on_color: board.count_of(LandColor::OnColor),
            off_color: board.count_of(LandColor::OffColor),
        }
    }

    pub fn total(&self) -> u32 {
        self.on_color + self.off_color
    }

    /// Colored pips are paid first; every remaining land covers generic
    pub fn can_cast(&self, target: &TargetCard) -> bool {
        self.on_color >= target.on_color_pips()
            && self.off_color >= target.off_color_pips()
            && self.total() >= target.mana_value()
    }

    /// Still short of on-color sources for the target's pips
    pub fn needs_on_color(&self, target: &TargetCard) -> bool {
        self.on_color < target.on_color_pips()
    }

    /// Still short of off-color sources for the target's pips
    pub fn needs_off_color(&self, target: &TargetCard) -> bool {
        self.off_color < target.off_color_pips()
    }
}
