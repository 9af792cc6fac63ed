//! Item stacks as the host stores them.

use std::collections::BTreeMap;

use crate::config::ItemConfig;
use crate::enchantment::Enchantment;
use crate::error::MetaError;
use crate::material::Material;
use crate::meta::ItemMeta;

/// A quantity of one material with its optional attribute record and
/// stack-level enchantments.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    material: Material,
    amount: i32,
    meta: Option<ItemMeta>,
    enchantments: BTreeMap<Enchantment, i32>,
}

impl ItemStack {
    pub fn new(material: Material, amount: i32) -> Self {
        Self {
            material,
            amount,
            meta: None,
            enchantments: BTreeMap::new(),
        }
    }

    /// Stack of [`ItemConfig::DEFAULT_AMOUNT`] items.
    pub fn of(material: Material) -> Self {
        Self::new(material, ItemConfig::DEFAULT_AMOUNT)
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
    }

    /// Whether a record has been attached to this stack.
    pub fn has_item_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// Copy of the attached record, or a fresh one for the material.
    ///
    /// Returns `None` only when the material cannot carry a record.
    pub fn item_meta(&self) -> Option<ItemMeta> {
        match &self.meta {
            Some(meta) => Some(meta.clone()),
            None => ItemMeta::for_material(self.material),
        }
    }

    /// Attaches `meta`, rebinding it to this stack's material.
    pub fn set_item_meta(&mut self, mut meta: ItemMeta) -> Result<(), MetaError> {
        let shape = self
            .material
            .meta_shape()
            .ok_or(MetaError::Unsupported(self.material))?;
        if meta.shape() != shape {
            return Err(MetaError::ShapeMismatch {
                material: self.material,
                shape: meta.shape(),
            });
        }
        meta.rebind(self.material);
        self.meta = Some(meta);
        Ok(())
    }

    pub fn enchantments(&self) -> &BTreeMap<Enchantment, i32> {
        &self.enchantments
    }

    pub fn enchantment_level(&self, enchantment: Enchantment) -> Option<i32> {
        self.enchantments.get(&enchantment).copied()
    }

    /// Writes every entry without checking level bounds or applicability.
    pub fn add_enchantments(&mut self, enchantments: &BTreeMap<Enchantment, i32>) {
        self.enchantments.extend(enchantments);
    }

    pub fn add_enchantment(&mut self, enchantment: Enchantment, level: i32) {
        self.enchantments.insert(enchantment, level);
    }

    pub fn remove_enchantment(&mut self, enchantment: Enchantment) -> Option<i32> {
        self.enchantments.remove(&enchantment)
    }
}
