//! Item kinds and the attribute-record shape each one carries.

/// Shape of the extended attribute record a material carries.
///
/// Damage and repair cost are not shapes: they are facets of a record (see
/// [`Material::is_damageable`]).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MetaShape {
    /// Common attributes only.
    Plain,
    AxolotlBucket,
    Banner,
    Book,
    Bundle,
    Compass,
    Crossbow,
    EnchantmentStorage,
    FireworkEffect,
    Firework,
    KnowledgeBook,
    LeatherArmor,
    Map,
    Potion,
    Skull,
    SuspiciousStew,
    TropicalFishBucket,
}

/// Item kind identifier.
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
pub enum Material {
    Air,

    // ========================================================================
    // Plain records
    // ========================================================================
    Stone,
    Stick,
    Diamond,
    Apple,
    Arrow,
    Book,

    // ========================================================================
    // Tools, weapons and wearables (durability)
    // ========================================================================
    DiamondSword,
    IronPickaxe,
    Bow,
    Trident,
    FishingRod,
    Shield,
    Elytra,
    Crossbow,
    LeatherHelmet,
    LeatherChestplate,
    LeatherLeggings,
    LeatherBoots,
    LeatherHorseArmor,

    // ========================================================================
    // Shape-specific records
    // ========================================================================
    WritableBook,
    WrittenBook,
    EnchantedBook,
    KnowledgeBook,
    WhiteBanner,
    RedBanner,
    BlueBanner,
    BlackBanner,
    Bundle,
    Compass,
    FilledMap,
    Potion,
    SplashPotion,
    LingeringPotion,
    TippedArrow,
    PlayerHead,
    SkeletonSkull,
    ZombieHead,
    CreeperHead,
    SuspiciousStew,
    TropicalFishBucket,
    AxolotlBucket,
    FireworkRocket,
    FireworkStar,
}

impl Material {
    /// Shape of the record this material carries, or `None` when it cannot
    /// carry one at all.
    pub const fn meta_shape(self) -> Option<MetaShape> {
        use Material::*;
        let shape = match self {
            Air => return None,
            Stone | Stick | Diamond | Apple | Arrow | Book | DiamondSword | IronPickaxe | Bow
            | Trident | FishingRod | Shield | Elytra => MetaShape::Plain,
            Crossbow => MetaShape::Crossbow,
            LeatherHelmet | LeatherChestplate | LeatherLeggings | LeatherBoots
            | LeatherHorseArmor => MetaShape::LeatherArmor,
            WritableBook | WrittenBook => MetaShape::Book,
            EnchantedBook => MetaShape::EnchantmentStorage,
            KnowledgeBook => MetaShape::KnowledgeBook,
            WhiteBanner | RedBanner | BlueBanner | BlackBanner => MetaShape::Banner,
            Bundle => MetaShape::Bundle,
            Compass => MetaShape::Compass,
            FilledMap => MetaShape::Map,
            Potion | SplashPotion | LingeringPotion | TippedArrow => MetaShape::Potion,
            PlayerHead | SkeletonSkull | ZombieHead | CreeperHead => MetaShape::Skull,
            SuspiciousStew => MetaShape::SuspiciousStew,
            TropicalFishBucket => MetaShape::TropicalFishBucket,
            AxolotlBucket => MetaShape::AxolotlBucket,
            FireworkRocket => MetaShape::Firework,
            FireworkStar => MetaShape::FireworkEffect,
        };
        Some(shape)
    }

    /// Uses before the item breaks; 0 for items without durability.
    pub const fn max_durability(self) -> u16 {
        use Material::*;
        match self {
            DiamondSword => 1561,
            IronPickaxe => 250,
            Bow => 384,
            Trident => 250,
            FishingRod => 64,
            Shield => 336,
            Elytra => 432,
            Crossbow => 465,
            LeatherHelmet => 55,
            LeatherChestplate => 80,
            LeatherLeggings => 75,
            LeatherBoots => 65,
            _ => 0,
        }
    }

    pub const fn is_damageable(self) -> bool {
        self.max_durability() > 0
    }

    /// Name the host shows when no display name overrides it.
    pub fn default_label(self) -> String {
        self.as_ref()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_air_lacks_a_record() {
        for material in Material::iter() {
            assert_eq!(
                material.meta_shape().is_none(),
                material == Material::Air,
                "{material}"
            );
        }
    }

    #[test]
    fn durability_marks_damageable_items() {
        assert_eq!(Material::DiamondSword.max_durability(), 1561);
        assert!(Material::Crossbow.is_damageable());
        assert!(Material::LeatherBoots.is_damageable());
        assert!(!Material::Stick.is_damageable());
        assert!(!Material::LeatherHorseArmor.is_damageable());
    }

    #[test]
    fn default_label_title_cases_the_identifier() {
        assert_eq!(Material::Stick.default_label(), "Stick");
        assert_eq!(Material::DiamondSword.default_label(), "Diamond Sword");
        assert_eq!("written_book".parse(), Ok(Material::WrittenBook));
    }
}
