//! Extended attribute record attached to an item stack.

mod shapes;

pub use shapes::{
    AxolotlBucketMeta, BannerMeta, BookGeneration, BookMeta, BundleMeta, CompassMeta, CrossbowMeta,
    DamageableMeta, EnchantmentStorageMeta, FireworkEffectMeta, FireworkMeta, KnowledgeBookMeta,
    LeatherArmorMeta, MapMeta, PotionMeta, RepairableMeta, SkullMeta, SuspiciousStewMeta,
    TropicalFishBucketMeta,
};

use crate::flags::ItemFlags;
use crate::material::{Material, MetaShape};

/// Shape-specific part of an [`ItemMeta`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaData {
    Plain,
    AxolotlBucket(AxolotlBucketMeta),
    Banner(BannerMeta),
    Book(BookMeta),
    Bundle(BundleMeta),
    Compass(CompassMeta),
    Crossbow(CrossbowMeta),
    EnchantmentStorage(EnchantmentStorageMeta),
    FireworkEffect(FireworkEffectMeta),
    Firework(FireworkMeta),
    KnowledgeBook(KnowledgeBookMeta),
    LeatherArmor(LeatherArmorMeta),
    Map(MapMeta),
    Potion(PotionMeta),
    Skull(SkullMeta),
    SuspiciousStew(SuspiciousStewMeta),
    TropicalFishBucket(TropicalFishBucketMeta),
}

impl MetaData {
    /// Empty record of the given shape.
    pub fn empty(shape: MetaShape) -> Self {
        match shape {
            MetaShape::Plain => Self::Plain,
            MetaShape::AxolotlBucket => Self::AxolotlBucket(Default::default()),
            MetaShape::Banner => Self::Banner(Default::default()),
            MetaShape::Book => Self::Book(Default::default()),
            MetaShape::Bundle => Self::Bundle(Default::default()),
            MetaShape::Compass => Self::Compass(Default::default()),
            MetaShape::Crossbow => Self::Crossbow(Default::default()),
            MetaShape::EnchantmentStorage => Self::EnchantmentStorage(Default::default()),
            MetaShape::FireworkEffect => Self::FireworkEffect(Default::default()),
            MetaShape::Firework => Self::Firework(Default::default()),
            MetaShape::KnowledgeBook => Self::KnowledgeBook(Default::default()),
            MetaShape::LeatherArmor => Self::LeatherArmor(Default::default()),
            MetaShape::Map => Self::Map(Default::default()),
            MetaShape::Potion => Self::Potion(Default::default()),
            MetaShape::Skull => Self::Skull(Default::default()),
            MetaShape::SuspiciousStew => Self::SuspiciousStew(Default::default()),
            MetaShape::TropicalFishBucket => Self::TropicalFishBucket(Default::default()),
        }
    }

    pub fn shape(&self) -> MetaShape {
        match self {
            Self::Plain => MetaShape::Plain,
            Self::AxolotlBucket(_) => MetaShape::AxolotlBucket,
            Self::Banner(_) => MetaShape::Banner,
            Self::Book(_) => MetaShape::Book,
            Self::Bundle(_) => MetaShape::Bundle,
            Self::Compass(_) => MetaShape::Compass,
            Self::Crossbow(_) => MetaShape::Crossbow,
            Self::EnchantmentStorage(_) => MetaShape::EnchantmentStorage,
            Self::FireworkEffect(_) => MetaShape::FireworkEffect,
            Self::Firework(_) => MetaShape::Firework,
            Self::KnowledgeBook(_) => MetaShape::KnowledgeBook,
            Self::LeatherArmor(_) => MetaShape::LeatherArmor,
            Self::Map(_) => MetaShape::Map,
            Self::Potion(_) => MetaShape::Potion,
            Self::Skull(_) => MetaShape::Skull,
            Self::SuspiciousStew(_) => MetaShape::SuspiciousStew,
            Self::TropicalFishBucket(_) => MetaShape::TropicalFishBucket,
        }
    }
}

/// Attribute record of an item: common display attributes plus the
/// shape-specific [`MetaData`] decided by the material.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMeta {
    material: Material,
    display_name: Option<String>,
    lore: Vec<String>,
    flags: ItemFlags,
    durability: Option<DamageableMeta>,
    repair: RepairableMeta,
    data: MetaData,
}

/// Generates the shared/mutable cast pair for one shape.
macro_rules! shape_casts {
    ($($variant:ident => $ty:ty, $as_ref:ident, $as_mut:ident;)*) => {
        $(
            pub fn $as_ref(&self) -> Option<&$ty> {
                match &self.data {
                    MetaData::$variant(meta) => Some(meta),
                    _ => None,
                }
            }

            pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                match &mut self.data {
                    MetaData::$variant(meta) => Some(meta),
                    _ => None,
                }
            }
        )*
    };
}

impl ItemMeta {
    /// Fresh record for `material`, or `None` when the material carries none.
    pub fn for_material(material: Material) -> Option<Self> {
        let shape = material.meta_shape()?;
        Some(Self {
            material,
            display_name: None,
            lore: Vec::new(),
            flags: ItemFlags::empty(),
            durability: material.is_damageable().then(DamageableMeta::default),
            repair: RepairableMeta::default(),
            data: MetaData::empty(shape),
        })
    }

    /// Material the record was created for.
    pub fn material(&self) -> Material {
        self.material
    }

    pub fn shape(&self) -> MetaShape {
        self.data.shape()
    }

    pub fn data(&self) -> &MetaData {
        &self.data
    }

    /// Re-associates the record with another material of the same shape.
    ///
    /// The durability facet follows the new material.
    pub(crate) fn rebind(&mut self, material: Material) {
        self.material = material;
        self.durability = match (material.is_damageable(), self.durability) {
            (true, Some(durability)) => Some(durability),
            (true, None) => Some(DamageableMeta::default()),
            (false, _) => None,
        };
    }

    // ------------------------------------------------------------------
    // Common attributes
    // ------------------------------------------------------------------

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    /// `None` clears the name so the host falls back to its default label.
    pub fn set_display_name(&mut self, name: Option<String>) {
        self.display_name = name;
    }

    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    pub fn has_lore(&self) -> bool {
        !self.lore.is_empty()
    }

    pub fn set_lore(&mut self, lore: Vec<String>) {
        self.lore = lore;
    }

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    pub fn has_flag(&self, flag: ItemFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn add_flags(&mut self, flags: ItemFlags) {
        self.flags.insert(flags);
    }

    /// Name a player sees: the display name, else a shape label, else the
    /// material's default label.
    pub fn visible_name(&self) -> String {
        if let Some(name) = &self.display_name {
            return name.clone();
        }
        let shape_label = match &self.data {
            MetaData::Book(book) => book.title(),
            MetaData::Map(map) if map.has_location_name() => map.location_name(),
            _ => None,
        };
        shape_label
            .map(str::to_owned)
            .unwrap_or_else(|| self.material.default_label())
    }

    // ------------------------------------------------------------------
    // Facets
    // ------------------------------------------------------------------

    /// Durability facet; `None` for materials without durability.
    pub fn as_damageable(&self) -> Option<&DamageableMeta> {
        self.durability.as_ref()
    }

    pub fn as_damageable_mut(&mut self) -> Option<&mut DamageableMeta> {
        self.durability.as_mut()
    }

    pub fn as_repairable(&self) -> Option<&RepairableMeta> {
        Some(&self.repair)
    }

    pub fn as_repairable_mut(&mut self) -> Option<&mut RepairableMeta> {
        Some(&mut self.repair)
    }

    // ------------------------------------------------------------------
    // Shape casts
    // ------------------------------------------------------------------

    shape_casts! {
        AxolotlBucket => AxolotlBucketMeta, as_axolotl_bucket, as_axolotl_bucket_mut;
        Banner => BannerMeta, as_banner, as_banner_mut;
        Book => BookMeta, as_book, as_book_mut;
        Bundle => BundleMeta, as_bundle, as_bundle_mut;
        Compass => CompassMeta, as_compass, as_compass_mut;
        Crossbow => CrossbowMeta, as_crossbow, as_crossbow_mut;
        EnchantmentStorage => EnchantmentStorageMeta,
            as_enchantment_storage, as_enchantment_storage_mut;
        FireworkEffect => FireworkEffectMeta, as_firework_effect, as_firework_effect_mut;
        Firework => FireworkMeta, as_firework, as_firework_mut;
        KnowledgeBook => KnowledgeBookMeta, as_knowledge_book, as_knowledge_book_mut;
        LeatherArmor => LeatherArmorMeta, as_leather_armor, as_leather_armor_mut;
        Map => MapMeta, as_map, as_map_mut;
        Potion => PotionMeta, as_potion, as_potion_mut;
        Skull => SkullMeta, as_skull, as_skull_mut;
        SuspiciousStew => SuspiciousStewMeta, as_suspicious_stew, as_suspicious_stew_mut;
        TropicalFishBucket => TropicalFishBucketMeta,
            as_tropical_fish_bucket, as_tropical_fish_bucket_mut;
    }
}
