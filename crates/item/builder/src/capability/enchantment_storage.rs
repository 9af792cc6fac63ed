use std::collections::BTreeMap;

use item_host::{Enchantment, ItemMeta};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::{AccessError, BuildError};

/// Enchantments stored in a book rather than applied to the item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentStorage {
    stored: BTreeMap<Enchantment, i32>,
}

impl EnchantmentStorage {
    /// Whether any enchantment is stored.
    pub fn has_stored_enchants(&self) -> bool {
        !self.stored.is_empty()
    }

    /// Whether `enchantment` is stored at any level.
    pub fn has_stored_enchant(&self, enchantment: Enchantment) -> bool {
        self.stored.contains_key(&enchantment)
    }

    pub fn stored_enchants(&self) -> &BTreeMap<Enchantment, i32> {
        &self.stored
    }

    /// Stored level of `enchantment`, or
    /// [`AccessError::StoredEnchantMissing`] when none is stored.
    pub fn stored_enchant_level(&self, enchantment: Enchantment) -> Result<i32, AccessError> {
        self.stored
            .get(&enchantment)
            .copied()
            .ok_or(AccessError::StoredEnchantMissing(enchantment))
    }

    /// Inserts or overwrites the stored level.
    pub fn add_stored_enchant(&mut self, enchantment: Enchantment, level: i32) -> &mut Self {
        self.stored.insert(enchantment, level);
        self
    }

    pub fn remove_stored_enchant(&mut self, enchantment: Enchantment) -> Option<i32> {
        self.stored.remove(&enchantment)
    }
}

impl Capability for EnchantmentStorage {
    const KIND: CapabilityKind = CapabilityKind::EnchantmentStorage;

    fn as_payload(&self) -> Payload<'_> {
        Payload::EnchantmentStorage(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let storage = require_shape::<Self, _>(meta, ItemMeta::as_enchantment_storage)?;
        Ok(Self {
            stored: storage.stored_enchants().clone(),
        })
    }
}
