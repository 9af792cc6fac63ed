use crate::color::Color;

/// Explosion shape of a firework effect.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FireworkType {
    #[default]
    Ball,
    BallLarge,
    Star,
    Burst,
    Creeper,
}

/// One firework explosion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireworkEffect {
    pub kind: FireworkType,
    pub colors: Vec<Color>,
    pub fade_colors: Vec<Color>,
    pub flicker: bool,
    pub trail: bool,
}

impl FireworkEffect {
    pub fn new(kind: FireworkType, colors: Vec<Color>) -> Self {
        Self {
            kind,
            colors,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fade(mut self, fade_colors: Vec<Color>) -> Self {
        self.fade_colors = fade_colors;
        self
    }

    #[must_use]
    pub fn with_flicker(mut self, flicker: bool) -> Self {
        self.flicker = flicker;
        self
    }

    #[must_use]
    pub fn with_trail(mut self, trail: bool) -> Self {
        self.trail = trail;
        self
    }
}
