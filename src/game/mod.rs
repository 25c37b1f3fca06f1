pub mod mana;
pub mod state;
pub mod turns;
pub mod zones;

pub use mana::BoardMana;
pub use state::TrialState;
pub use zones::{Board, Hand, Library, PlayedLand};
