//! Potion bases and status effects.

/// Kind of status effect a potion or stew applies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PotionEffectType {
    Speed,
    Slowness,
    Haste,
    MiningFatigue,
    Strength,
    InstantHealth,
    InstantDamage,
    JumpBoost,
    Nausea,
    Regeneration,
    Resistance,
    FireResistance,
    WaterBreathing,
    Invisibility,
    Blindness,
    NightVision,
    Hunger,
    Weakness,
    Poison,
    Wither,
    Absorption,
    Saturation,
    Glowing,
    Levitation,
    Luck,
    SlowFalling,
}

/// Base potion brewed in a stand.
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
pub enum PotionType {
    #[default]
    Uncraftable,
    Water,
    Mundane,
    Thick,
    Awkward,
    NightVision,
    Invisibility,
    Jump,
    FireResistance,
    Speed,
    Slowness,
    WaterBreathing,
    InstantHeal,
    InstantDamage,
    Poison,
    Regen,
    Strength,
    Weakness,
    Luck,
    TurtleMaster,
    SlowFalling,
}

impl PotionType {
    /// Whether the base can be brewed with redstone for a longer duration.
    pub const fn is_extendable(self) -> bool {
        matches!(
            self,
            Self::NightVision
                | Self::Invisibility
                | Self::Jump
                | Self::FireResistance
                | Self::Speed
                | Self::Slowness
                | Self::WaterBreathing
                | Self::Poison
                | Self::Regen
                | Self::Strength
                | Self::Weakness
                | Self::TurtleMaster
                | Self::SlowFalling
        )
    }

    /// Whether the base can be brewed with glowstone for a stronger effect.
    pub const fn is_upgradeable(self) -> bool {
        matches!(
            self,
            Self::Jump
                | Self::Speed
                | Self::Slowness
                | Self::InstantHeal
                | Self::InstantDamage
                | Self::Poison
                | Self::Regen
                | Self::Strength
                | Self::TurtleMaster
        )
    }

    /// Effect applied by drinking the base, if any.
    pub const fn effect_type(self) -> Option<PotionEffectType> {
        match self {
            Self::NightVision => Some(PotionEffectType::NightVision),
            Self::Invisibility => Some(PotionEffectType::Invisibility),
            Self::Jump => Some(PotionEffectType::JumpBoost),
            Self::FireResistance => Some(PotionEffectType::FireResistance),
            Self::Speed => Some(PotionEffectType::Speed),
            Self::Slowness => Some(PotionEffectType::Slowness),
            Self::WaterBreathing => Some(PotionEffectType::WaterBreathing),
            Self::InstantHeal => Some(PotionEffectType::InstantHealth),
            Self::InstantDamage => Some(PotionEffectType::InstantDamage),
            Self::Poison => Some(PotionEffectType::Poison),
            Self::Regen => Some(PotionEffectType::Regeneration),
            Self::Strength => Some(PotionEffectType::Strength),
            Self::Weakness => Some(PotionEffectType::Weakness),
            Self::Luck => Some(PotionEffectType::Luck),
            Self::SlowFalling => Some(PotionEffectType::SlowFalling),
            Self::TurtleMaster => Some(PotionEffectType::Slowness),
            Self::Uncraftable | Self::Water | Self::Mundane | Self::Thick | Self::Awkward => None,
        }
    }
}

/// Base potion descriptor: kind plus brewing modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionData {
    pub kind: PotionType,
    pub extended: bool,
    pub upgraded: bool,
}

impl PotionData {
    pub fn new(kind: PotionType, extended: bool, upgraded: bool) -> Self {
        Self {
            kind,
            extended,
            upgraded,
        }
    }

    /// Unmodified base potion.
    pub fn base(kind: PotionType) -> Self {
        Self::new(kind, false, false)
    }
}

/// Single applied status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionEffect {
    pub kind: PotionEffectType,
    /// Duration in ticks.
    pub duration: i32,
    pub amplifier: i32,
    pub ambient: bool,
    pub particles: bool,
    pub icon: bool,
}

impl PotionEffect {
    /// Effect with visible particles and icon, not ambient.
    pub fn new(kind: PotionEffectType, duration: i32, amplifier: i32) -> Self {
        Self {
            kind,
            duration,
            amplifier,
            ambient: false,
            particles: true,
            icon: true,
        }
    }

    #[must_use]
    pub fn ambient(mut self, ambient: bool) -> Self {
        self.ambient = ambient;
        self
    }

    #[must_use]
    pub fn particles(mut self, particles: bool) -> Self {
        self.particles = particles;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: bool) -> Self {
        self.icon = icon;
        self
    }
}
