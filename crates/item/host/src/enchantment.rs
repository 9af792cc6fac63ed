/// Enchantment identifiers known to the host registry.
///
/// The host decides legality; this crate never checks whether an enchantment
/// fits a material or whether a level is in range.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Enchantment {
    // ========================================================================
    // Armor
    // ========================================================================
    Protection,
    FireProtection,
    FeatherFalling,
    BlastProtection,
    ProjectileProtection,
    Respiration,
    AquaAffinity,
    Thorns,
    DepthStrider,
    FrostWalker,

    // ========================================================================
    // Melee
    // ========================================================================
    Sharpness,
    Smite,
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,
    SweepingEdge,

    // ========================================================================
    // Tools
    // ========================================================================
    Efficiency,
    SilkTouch,
    Fortune,

    // ========================================================================
    // Ranged
    // ========================================================================
    Power,
    Punch,
    Flame,
    Infinity,
    Multishot,
    QuickCharge,
    Piercing,
    Loyalty,
    Riptide,
    Channeling,
    Impaling,

    // ========================================================================
    // Any item
    // ========================================================================
    Unbreaking,
    Mending,
    BindingCurse,
    VanishingCurse,
}

impl Enchantment {
    /// Highest level the host offers through normal play.
    pub const fn max_level(self) -> i32 {
        match self {
            Self::Protection
            | Self::FireProtection
            | Self::FeatherFalling
            | Self::BlastProtection
            | Self::ProjectileProtection
            | Self::Efficiency
            | Self::Power
            | Self::Piercing => 4,
            Self::Sharpness | Self::Smite | Self::BaneOfArthropods | Self::Impaling => 5,
            Self::Respiration
            | Self::Thorns
            | Self::DepthStrider
            | Self::Looting
            | Self::SweepingEdge
            | Self::Fortune
            | Self::QuickCharge
            | Self::Loyalty
            | Self::Riptide
            | Self::Unbreaking => 3,
            Self::FrostWalker | Self::Knockback | Self::FireAspect | Self::Punch => 2,
            Self::AquaAffinity
            | Self::SilkTouch
            | Self::Flame
            | Self::Infinity
            | Self::Multishot
            | Self::Channeling
            | Self::Mending
            | Self::BindingCurse
            | Self::VanishingCurse => 1,
        }
    }

    pub const fn is_curse(self) -> bool {
        matches!(self, Self::BindingCurse | Self::VanishingCurse)
    }
}
