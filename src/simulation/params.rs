use crate::error::ConfigError;
use crate::simulation::deck::LAND_COUNT;
use serde::Serialize;
use std::fmt;

/// One point in the parameter space: the target's cost split and the
/// deck's on-color land count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TrialParams {
    pub mana_value: u32,
    pub on_color_pips: u32,
    pub off_color_pips: u32,
    pub on_color_land_count: u32,
}

impl TrialParams {
    /// Validated constructor. Land feasibility against the pips is
    /// checked separately when the deck is built.
    pub fn new(
        mana_value: u32,
        on_color_pips: u32,
        off_color_pips: u32,
        on_color_land_count: u32,
    ) -> Result<Self, ConfigError> {
        let params = TrialParams {
            mana_value,
            on_color_pips,
            off_color_pips,
            on_color_land_count,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mana_value < 1 {
            return Err(ConfigError::ManaValueTooLow(self.mana_value));
        }
        if self.on_color_pips < 1 {
            return Err(ConfigError::OnColorPipsTooLow(self.on_color_pips));
        }
        let colored = self.on_color_pips.checked_add(self.off_color_pips);
        if colored.map_or(true, |pips| pips > self.mana_value) {
            return Err(ConfigError::PipsExceedManaValue {
                mana_value: self.mana_value,
                on_color_pips: self.on_color_pips,
                off_color_pips: self.off_color_pips,
            });
        }
        if !(1..=LAND_COUNT).contains(&self.on_color_land_count) {
            return Err(ConfigError::LandCountOutOfRange {
                count: self.on_color_land_count,
                max: LAND_COUNT,
            });
        }
        Ok(())
    }

    pub fn off_color_land_count(&self) -> u32 {
        LAND_COUNT.saturating_sub(self.on_color_land_count)
    }

    pub fn generic(&self) -> u32 {
        self.on_color_pips
            .checked_add(self.off_color_pips)
            .map_or(0, |pips| self.mana_value.saturating_sub(pips))
    }
}

impl fmt::Display for TrialParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MV {} ({} on-color, {} off-color, {} generic) with {}/{} on/off-color lands",
            self.mana_value,
            self.on_color_pips,
            self.off_color_pips,
            self.generic(),
            self.on_color_land_count,
            self.off_color_land_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = TrialParams::new(4, 2, 1, 12).expect("valid params");
        assert_eq!(params.generic(), 1);
        assert_eq!(params.off_color_land_count(), 5);
    }

    #[test]
    fn test_rejects_zero_on_color_pips() {
        assert_eq!(
            TrialParams::new(3, 0, 0, 10),
            Err(ConfigError::OnColorPipsTooLow(0))
        );
    }

    #[test]
    fn test_rejects_out_of_range_land_count() {
        assert!(matches!(
            TrialParams::new(1, 1, 0, 0),
            Err(ConfigError::LandCountOutOfRange { .. })
        ));
        assert!(matches!(
            TrialParams::new(1, 1, 0, 18),
            Err(ConfigError::LandCountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_pips_over_mana_value() {
        assert!(matches!(
            TrialParams::new(2, 2, 1, 10),
            Err(ConfigError::PipsExceedManaValue { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_pips() {
        assert_eq!(
            TrialParams::new(1, u32::MAX, 1, 5),
            Err(ConfigError::PipsExceedManaValue {
                mana_value: 1,
                on_color_pips: u32::MAX,
                off_color_pips: 1,
            })
        );

        let unchecked = TrialParams {
            mana_value: 3,
            on_color_pips: u32::MAX,
            off_color_pips: u32::MAX,
            on_color_land_count: 5,
        };
        assert_eq!(unchecked.generic(), 0);
    }
}
