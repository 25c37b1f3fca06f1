use crate::card::types::{Card, CardId, FillerCard, LandCard, LandColor, TargetCard};
use crate::error::ConfigError;

/// Mints cards for one trial, handing each a fresh identity
#[derive(Debug, Default)]
pub struct CardFactory {
    next_id: u32,
}

impl CardFactory {
    pub fn new() -> Self {
        CardFactory { next_id: 0 }
    }

    fn mint(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Build the target card, validating its cost split
    pub fn target(
        &mut self,
        mana_value: u32,
        on_color_pips: u32,
        off_color_pips: u32,
    ) -> Result<TargetCard, ConfigError> {
        let target = TargetCard::new(CardId(self.next_id), mana_value, on_color_pips, off_color_pips)?;
        self.mint();
        Ok(target)
    }

    pub fn land(&mut self, color: LandColor) -> Card {
        Card::Land(LandCard {
            id: self.mint(),
            color,
        })
    }

    pub fn filler(&mut self) -> Card {
        Card::Filler(FillerCard { id: self.mint() })
    }

    /// Number of cards minted so far
    pub fn minted(&self) -> usize {
        self.next_id as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let mut factory = CardFactory::new();
        let target = factory.target(3, 1, 0).expect("valid target");
        let mut ids = HashSet::new();
        ids.insert(target.id());
        for _ in 0..17 {
            assert!(ids.insert(factory.land(LandColor::OnColor).id()));
        }
        for _ in 0..22 {
            assert!(ids.insert(factory.filler().id()));
        }
        assert_eq!(factory.minted(), 40);
    }

    #[test]
    fn test_rejected_target_does_not_consume_id() {
        let mut factory = CardFactory::new();
        assert!(factory.target(1, 0, 0).is_err());
        assert_eq!(factory.minted(), 0);
    }
}
