//! Host-side item model consumed by the item builder.
//!
//! `item-host` defines the value types a game host hands out (materials,
//! enchantments, colors, potion data, ...), the extended attribute record
//! attached to an item ([`ItemMeta`]) and the stack that owns it
//! ([`ItemStack`]). The record's shape is decided by the material: casting
//! a record to a shape it does not have yields `None`, never a silent
//! reinterpretation.
pub mod banner;
pub mod color;
pub mod config;
pub mod enchantment;
pub mod entity;
pub mod error;
pub mod firework;
pub mod flags;
pub mod key;
pub mod material;
pub mod meta;
pub mod potion;
pub mod stack;
pub mod world;

pub use banner::{Pattern, PatternType};
pub use color::{Color, DyeColor};
pub use config::ItemConfig;
pub use enchantment::Enchantment;
pub use entity::{AxolotlVariant, TropicalFishPattern};
pub use error::{KeyError, MetaError};
pub use firework::{FireworkEffect, FireworkType};
pub use flags::ItemFlags;
pub use key::NamespacedKey;
pub use material::{Material, MetaShape};
pub use meta::{
    AxolotlBucketMeta, BannerMeta, BookGeneration, BookMeta, BundleMeta, CompassMeta, CrossbowMeta,
    DamageableMeta, EnchantmentStorageMeta, FireworkEffectMeta, FireworkMeta, ItemMeta,
    KnowledgeBookMeta, LeatherArmorMeta, MapMeta, MetaData, PotionMeta, RepairableMeta, SkullMeta,
    SuspiciousStewMeta, TropicalFishBucketMeta,
};
pub use potion::{PotionData, PotionEffect, PotionEffectType, PotionType};
pub use stack::ItemStack;
pub use world::{Location, MapView, PlayerProfile};
