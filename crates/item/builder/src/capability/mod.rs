//! Capability payloads.
//!
//! A capability is the category-specific part of an item descriptor: the
//! fields meaningful only to books, banners, potions and so on. The set is
//! closed. [`Capability`] is sealed, and assembly matches exhaustively over
//! [`Payload`], so adding a variant is a compile error until every dispatch
//! site handles it.
//!
//! Capabilities hold data only. Writing a payload onto a host record lives in
//! [`crate::assembly`].

mod axolotl_bucket;
mod banner;
mod book;
mod bundle;
mod compass;
mod crossbow;
mod damageable;
mod enchantment_storage;
mod firework;
mod firework_effect;
mod knowledge_book;
mod leather_armor;
mod map;
mod plain;
mod potion;
mod repairable;
mod skull;
mod suspicious_stew;
mod tropical_fish_bucket;

pub use axolotl_bucket::AxolotlBucket;
pub use banner::Banner;
pub use book::Book;
pub use bundle::Bundle;
pub use compass::Compass;
pub use crossbow::Crossbow;
pub use damageable::Damageable;
pub use enchantment_storage::EnchantmentStorage;
pub use firework::Firework;
pub use firework_effect::FireworkEffect;
pub use knowledge_book::KnowledgeBook;
pub use leather_armor::LeatherArmor;
pub use map::Map;
pub use plain::Plain;
pub use potion::Potion;
pub use repairable::Repairable;
pub use skull::Skull;
pub use suspicious_stew::SuspiciousStew;
pub use tropical_fish_bucket::TropicalFishBucket;

use item_host::{ItemMeta, PotionEffect, PotionEffectType};

use crate::error::BuildError;

mod sealed {
    pub trait Sealed {}
}

/// Discriminant of a capability payload.
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
pub enum CapabilityKind {
    /// No capability: common attributes only.
    Plain,
    AxolotlBucket,
    Banner,
    Book,
    Bundle,
    Compass,
    Crossbow,
    Damageable,
    EnchantmentStorage,
    FireworkEffect,
    Firework,
    KnowledgeBook,
    LeatherArmor,
    Map,
    Potion,
    Repairable,
    Skull,
    SuspiciousStew,
    TropicalFishBucket,
}

/// Borrowed view of the active capability, used for dispatch.
#[derive(Clone, Copy, Debug)]
pub enum Payload<'a> {
    Plain,
    AxolotlBucket(&'a AxolotlBucket),
    Banner(&'a Banner),
    Book(&'a Book),
    Bundle(&'a Bundle),
    Compass(&'a Compass),
    Crossbow(&'a Crossbow),
    Damageable(&'a Damageable),
    EnchantmentStorage(&'a EnchantmentStorage),
    FireworkEffect(&'a FireworkEffect),
    Firework(&'a Firework),
    KnowledgeBook(&'a KnowledgeBook),
    LeatherArmor(&'a LeatherArmor),
    Map(&'a Map),
    Potion(&'a Potion),
    Repairable(&'a Repairable),
    Skull(&'a Skull),
    SuspiciousStew(&'a SuspiciousStew),
    TropicalFishBucket(&'a TropicalFishBucket),
}

impl Payload<'_> {
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Self::Plain => CapabilityKind::Plain,
            Self::AxolotlBucket(_) => CapabilityKind::AxolotlBucket,
            Self::Banner(_) => CapabilityKind::Banner,
            Self::Book(_) => CapabilityKind::Book,
            Self::Bundle(_) => CapabilityKind::Bundle,
            Self::Compass(_) => CapabilityKind::Compass,
            Self::Crossbow(_) => CapabilityKind::Crossbow,
            Self::Damageable(_) => CapabilityKind::Damageable,
            Self::EnchantmentStorage(_) => CapabilityKind::EnchantmentStorage,
            Self::FireworkEffect(_) => CapabilityKind::FireworkEffect,
            Self::Firework(_) => CapabilityKind::Firework,
            Self::KnowledgeBook(_) => CapabilityKind::KnowledgeBook,
            Self::LeatherArmor(_) => CapabilityKind::LeatherArmor,
            Self::Map(_) => CapabilityKind::Map,
            Self::Potion(_) => CapabilityKind::Potion,
            Self::Repairable(_) => CapabilityKind::Repairable,
            Self::Skull(_) => CapabilityKind::Skull,
            Self::SuspiciousStew(_) => CapabilityKind::SuspiciousStew,
            Self::TropicalFishBucket(_) => CapabilityKind::TropicalFishBucket,
        }
    }
}

/// A capability payload an [`ItemBuilder`](crate::ItemBuilder) can carry.
///
/// Sealed: the set of capabilities is fixed by this crate.
pub trait Capability: sealed::Sealed + Clone + Default + core::fmt::Debug {
    const KIND: CapabilityKind;

    fn as_payload(&self) -> Payload<'_>;

    /// Reads the payload back from a host record.
    ///
    /// Fails with [`BuildError::CapabilityMismatch`] when the record does not
    /// have the shape this capability needs.
    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError>;
}

/// Mismatch error for capability `C` against the record's material.
pub(crate) fn mismatch<C: Capability>(meta: &ItemMeta) -> BuildError {
    BuildError::CapabilityMismatch {
        capability: C::KIND,
        material: meta.material(),
    }
}

/// Casts `meta` to the shape `C` reads from.
pub(crate) fn require_shape<C: Capability, T>(
    meta: &ItemMeta,
    cast: fn(&ItemMeta) -> Option<&T>,
) -> Result<&T, BuildError> {
    cast(meta).ok_or_else(|| mismatch::<C>(meta))
}

/// Casts `meta` to the shape `C` writes to.
pub(crate) fn require_shape_mut<C: Capability, T>(
    meta: &mut ItemMeta,
    cast: fn(&mut ItemMeta) -> Option<&mut T>,
) -> Result<&mut T, BuildError> {
    let err = mismatch::<C>(meta);
    cast(meta).ok_or(err)
}

/// Removes every effect of `kind`; returns how many were removed.
pub(crate) fn remove_effects_of_kind(
    effects: &mut Vec<PotionEffect>,
    kind: PotionEffectType,
) -> usize {
    let before = effects.len();
    effects.retain(|effect| effect.kind != kind);
    before - effects.len()
}

macro_rules! impl_sealed {
    ($($ty:ty),* $(,)?) => {
        $(impl sealed::Sealed for $ty {})*
    };
}

impl_sealed!(
    Plain,
    AxolotlBucket,
    Banner,
    Book,
    Bundle,
    Compass,
    Crossbow,
    Damageable,
    EnchantmentStorage,
    FireworkEffect,
    Firework,
    KnowledgeBook,
    LeatherArmor,
    Map,
    Potion,
    Repairable,
    Skull,
    SuspiciousStew,
    TropicalFishBucket,
);
