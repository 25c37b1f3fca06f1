use crate::card::{Card, CardFactory, LandColor, TargetCard};
use crate::error::{ConfigError, ConsistencyError, TrialError};
use crate::game::zones::Library;
use crate::rng::GameRng;

/// Cards in the full deck, target included
pub const DECK_SIZE: usize = 40;
/// Lands in the deck, split between on-color and off-color
pub const LAND_COUNT: u32 = 17;
/// The target starts in hand, so the library holds one card fewer
pub const LIBRARY_SIZE: usize = DECK_SIZE - 1;
pub const FILLER_COUNT: usize = DECK_SIZE - LAND_COUNT as usize - 1;

/// On-color / off-color land counts for one deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandSplit {
    pub on_color: u32,
    pub off_color: u32,
}

impl LandSplit {
    pub fn new(on_color_land_count: u32) -> Result<Self, ConfigError> {
        if !(1..=LAND_COUNT).contains(&on_color_land_count) {
            return Err(ConfigError::LandCountOutOfRange {
                count: on_color_land_count,
                max: LAND_COUNT,
            });
        }
        Ok(LandSplit {
            on_color: on_color_land_count,
            off_color: LAND_COUNT - on_color_land_count,
        })
    }

    /// Split that can supply every colored pip of `target`
    pub fn for_target(target: &TargetCard, on_color_land_count: u32) -> Result<Self, ConfigError> {
        let split = Self::new(on_color_land_count)?;
        if split.on_color < target.on_color_pips() {
            return Err(ConfigError::NotEnoughOnColorLands {
                lands: split.on_color,
                pips: target.on_color_pips(),
            });
        }
        if split.off_color < target.off_color_pips() {
            return Err(ConfigError::NotEnoughOffColorLands {
                lands: split.off_color,
                pips: target.off_color_pips(),
            });
        }
        Ok(split)
    }
}

/// Build the shuffled 39-card library that surrounds `target`.
/// The target itself is not included; it goes straight to the opening hand.
pub fn build_library(
    target: &TargetCard,
    on_color_land_count: u32,
    factory: &mut CardFactory,
    rng: &mut GameRng,
) -> Result<Library, TrialError> {
    let split = LandSplit::for_target(target, on_color_land_count)?;

    let mut cards = Vec::with_capacity(LIBRARY_SIZE);
    for _ in 0..split.on_color {
        cards.push(factory.land(LandColor::OnColor));
    }
    for _ in 0..split.off_color {
        cards.push(factory.land(LandColor::OffColor));
    }
    for _ in 0..FILLER_COUNT {
        cards.push(factory.filler());
    }

    verify_composition(&cards, split)?;

    rng.shuffle(&mut cards);
    Ok(Library::from_cards(cards))
}

fn verify_composition(cards: &[Card], split: LandSplit) -> Result<(), ConsistencyError> {
    if cards.len() != LIBRARY_SIZE {
        return Err(ConsistencyError::LibrarySize {
            actual: cards.len(),
            expected: LIBRARY_SIZE,
        });
    }
    let on_color = cards.iter().filter(|c| c.is_land_of(LandColor::OnColor)).count();
    let off_color = cards.iter().filter(|c| c.is_land_of(LandColor::OffColor)).count();
    let filler = cards.iter().filter(|c| c.is_filler()).count();
    if on_color != split.on_color as usize
        || off_color != split.off_color as usize
        || filler != FILLER_COUNT
    {
        return Err(ConsistencyError::LibraryComposition {
            on_color,
            off_color,
            filler,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(factory: &mut CardFactory, mana_value: u32, on: u32, off: u32) -> TargetCard {
        factory.target(mana_value, on, off).expect("valid target")
    }

    #[test]
    fn test_library_composition_for_every_land_count() {
        for lands in 1..=LAND_COUNT {
            let mut factory = CardFactory::new();
            let t = target(&mut factory, 1, 1, 0);
            let mut rng = GameRng::new(Some(lands as u64));
            let library = build_library(&t, lands, &mut factory, &mut rng).expect("valid deck");

            assert_eq!(library.size(), 39);
            let cards = library.cards();
            let on = cards.iter().filter(|c| c.is_land_of(LandColor::OnColor)).count();
            let off = cards.iter().filter(|c| c.is_land_of(LandColor::OffColor)).count();
            let filler = cards.iter().filter(|c| c.is_filler()).count();
            assert_eq!(on, lands as usize);
            assert_eq!(off, (LAND_COUNT - lands) as usize);
            assert_eq!(filler, 22);
            assert!(!cards.iter().any(Card::is_target));
        }
    }

    #[test]
    fn test_not_enough_on_color_lands() {
        let mut factory = CardFactory::new();
        let t = target(&mut factory, 3, 3, 0);
        let mut rng = GameRng::new(Some(1));
        let result = build_library(&t, 2, &mut factory, &mut rng);
        assert_eq!(
            result.map(|l| l.size()),
            Err(TrialError::Config(ConfigError::NotEnoughOnColorLands { lands: 2, pips: 3 }))
        );
    }

    #[test]
    fn test_not_enough_off_color_lands() {
        let mut factory = CardFactory::new();
        let t = target(&mut factory, 3, 1, 2);
        let mut rng = GameRng::new(Some(1));
        let result = build_library(&t, 16, &mut factory, &mut rng);
        assert_eq!(
            result.map(|l| l.size()),
            Err(TrialError::Config(ConfigError::NotEnoughOffColorLands { lands: 1, pips: 2 }))
        );
    }

    #[test]
    fn test_land_count_out_of_range() {
        assert!(matches!(
            LandSplit::new(0),
            Err(ConfigError::LandCountOutOfRange { count: 0, .. })
        ));
        assert!(matches!(
            LandSplit::new(18),
            Err(ConfigError::LandCountOutOfRange { count: 18, .. })
        ));
        assert_eq!(
            LandSplit::new(17),
            Ok(LandSplit { on_color: 17, off_color: 0 })
        );
    }

    #[test]
    fn test_shuffle_depends_on_seed() {
        let order = |seed| {
            let mut factory = CardFactory::new();
            let t = target(&mut factory, 2, 1, 0);
            let mut rng = GameRng::new(Some(seed));
            build_library(&t, 9, &mut factory, &mut rng)
                .expect("valid deck")
                .cards()
                .iter()
                .map(Card::id)
                .collect::<Vec<_>>()
        };
        assert_eq!(order(5), order(5));
        assert_ne!(order(5), order(6));
    }

    #[test]
    fn test_composition_mismatch_is_reported() {
        let mut factory = CardFactory::new();
        let cards: Vec<Card> = (0..LIBRARY_SIZE).map(|_| factory.filler()).collect();
        let split = LandSplit::new(10).expect("valid split");
        assert!(matches!(
            verify_composition(&cards, split),
            Err(ConsistencyError::LibraryComposition { filler: 39, .. })
        ));
    }
}
