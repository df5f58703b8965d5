use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Named phase of the hill, derived from progress by fixed bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Clarificar,
    Refinar,
    Implementar,
    Aprimorar,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Clarificar,
        Stage::Refinar,
        Stage::Implementar,
        Stage::Aprimorar,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clarificar => "Clarificar",
            Self::Refinar => "Refinar",
            Self::Implementar => "Implementar",
            Self::Aprimorar => "Aprimorar",
        }
    }

    /// Caption drawn above the stage band on the chart.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Clarificar => "CLARIFICAR",
            Self::Refinar => "REFINAR",
            Self::Implementar => "IMPLEMENTAR",
            Self::Aprimorar => "APRIMORAR",
        }
    }

    /// Inclusive upper progress bound of the band.
    #[must_use]
    pub const fn upper_bound(self) -> f64 {
        match self {
            Self::Clarificar => 25.0,
            Self::Refinar => 50.0,
            Self::Implementar => 75.0,
            Self::Aprimorar => 100.0,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Clarificar => Color::from_rgb_hex(0xFCA5A5),
            Self::Refinar => Color::from_rgb_hex(0xFDE047),
            Self::Implementar => Color::from_rgb_hex(0x86EFAC),
            Self::Aprimorar => Color::from_rgb_hex(0x60A5FA),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies progress into a stage, checking bands in ascending order.
///
/// Anything not caught by the first three bands, including values above 100
/// and NaN, falls into `Aprimorar`; negative values land in `Clarificar`.
#[must_use]
pub fn map_stage(progress: f64) -> Stage {
    Stage::ALL[..3]
        .iter()
        .copied()
        .find(|stage| progress <= stage.upper_bound())
        .unwrap_or(Stage::Aprimorar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_bounds_are_inclusive() {
        assert_eq!(map_stage(25.0), Stage::Clarificar);
        assert_eq!(map_stage(25.0001), Stage::Refinar);
        assert_eq!(map_stage(75.0), Stage::Implementar);
    }

    #[test]
    fn out_of_range_values_fall_to_the_outer_bands() {
        assert_eq!(map_stage(-10.0), Stage::Clarificar);
        assert_eq!(map_stage(140.0), Stage::Aprimorar);
        assert_eq!(map_stage(f64::NAN), Stage::Aprimorar);
    }
}
