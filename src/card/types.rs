use crate::error::ConfigError;
use std::fmt;

/// Identity of a single physical card within one trial.
///
/// Lands of the same color and filler cards are otherwise interchangeable,
/// so zones remove cards by id rather than by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the color split a land belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandColor {
    OnColor,
    OffColor,
}

impl fmt::Display for LandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandColor::OnColor => write!(f, "on-color"),
            LandColor::OffColor => write!(f, "off-color"),
        }
    }
}

/// The card whose cast turn is being measured.
///
/// `on_color_pips + off_color_pips + generic == mana_value` always holds;
/// `generic` is derived and never stored independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCard {
    id: CardId,
    mana_value: u32,
    on_color_pips: u32,
    off_color_pips: u32,
    generic: u32,
}

impl TargetCard {
    pub fn new(
        id: CardId,
        mana_value: u32,
        on_color_pips: u32,
        off_color_pips: u32,
    ) -> Result<Self, ConfigError> {
        if mana_value < 1 {
            return Err(ConfigError::ManaValueTooLow(mana_value));
        }
        if on_color_pips < 1 {
            return Err(ConfigError::OnColorPipsTooLow(on_color_pips));
        }
        let generic = mana_value
            .checked_sub(on_color_pips)
            .and_then(|rest| rest.checked_sub(off_color_pips))
            .ok_or(ConfigError::PipsExceedManaValue {
                mana_value,
                on_color_pips,
                off_color_pips,
            })?;

        Ok(TargetCard {
            id,
            mana_value,
            on_color_pips,
            off_color_pips,
            generic,
        })
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn mana_value(&self) -> u32 {
        self.mana_value
    }

    pub fn on_color_pips(&self) -> u32 {
        self.on_color_pips
    }

    pub fn off_color_pips(&self) -> u32 {
        self.off_color_pips
    }

    pub fn generic(&self) -> u32 {
        self.generic
    }
}

/// Land card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandCard {
    pub id: CardId,
    pub color: LandColor,
}

/// Any card that is neither a land nor the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillerCard {
    pub id: CardId,
}

/// Unified card enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    Target(TargetCard),
    Land(LandCard),
    Filler(FillerCard),
}

impl Card {
    pub fn id(&self) -> CardId {
        match self {
            Card::Target(c) => c.id,
            Card::Land(c) => c.id,
            Card::Filler(c) => c.id,
        }
    }

    pub fn land_color(&self) -> Option<LandColor> {
        match self {
            Card::Land(l) => Some(l.color),
            _ => None,
        }
    }

    pub fn is_land(&self) -> bool {
        matches!(self, Card::Land(_))
    }

    pub fn is_land_of(&self, color: LandColor) -> bool {
        self.land_color() == Some(color)
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, Card::Filler(_))
    }

    pub fn is_target(&self) -> bool {
        matches!(self, Card::Target(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Target(t) => write!(
                f,
                "Target{} (MV {}: {} on, {} off, {} generic)",
                t.id, t.mana_value, t.on_color_pips, t.off_color_pips, t.generic
            ),
            Card::Land(l) => write!(f, "Land{} ({})", l.id, l.color),
            Card::Filler(c) => write!(f, "Filler{}", c.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_card_computes_generic() {
        let card = TargetCard::new(CardId(0), 5, 2, 1).expect("valid target");
        assert_eq!(card.generic(), 2);
        assert_eq!(
            card.on_color_pips() + card.off_color_pips() + card.generic(),
            card.mana_value()
        );
    }

    #[test]
    fn test_target_card_rejects_zero_on_color_pips() {
        let result = TargetCard::new(CardId(0), 3, 0, 0);
        assert_eq!(result, Err(ConfigError::OnColorPipsTooLow(0)));
    }

    #[test]
    fn test_target_card_rejects_zero_mana_value() {
        let result = TargetCard::new(CardId(0), 0, 1, 0);
        assert_eq!(result, Err(ConfigError::ManaValueTooLow(0)));
    }

    #[test]
    fn test_target_card_rejects_pips_over_mana_value() {
        let result = TargetCard::new(CardId(0), 2, 2, 1);
        assert!(matches!(result, Err(ConfigError::PipsExceedManaValue { .. })));
    }

    #[test]
    fn test_land_predicates() {
        let land = Card::Land(LandCard {
            id: CardId(1),
            color: LandColor::OffColor,
        });
        assert!(land.is_land());
        assert!(land.is_land_of(LandColor::OffColor));
        assert!(!land.is_land_of(LandColor::OnColor));

        let filler = Card::Filler(FillerCard { id: CardId(2) });
        assert!(filler.is_filler());
        assert_eq!(filler.land_color(), None);
    }
}
