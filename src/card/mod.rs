pub mod factory;
pub mod types;

pub use factory::CardFactory;
pub use types::{Card, CardId, FillerCard, LandCard, LandColor, TargetCard};
