//! Attributes common to every item descriptor.

use std::collections::BTreeMap;

use item_host::{Enchantment, ItemConfig, ItemFlags, ItemMeta, ItemStack, Material};

/// Name, amount, material, enchantments, lore and flags of a descriptor.
///
/// Everything here is stored as given. Legality (stack size, enchantment
/// levels, negative amounts) is the host's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAttributes {
    pub(crate) amount: i32,
    pub(crate) name: Option<String>,
    pub(crate) material: Option<Material>,
    pub(crate) enchantments: BTreeMap<Enchantment, i32>,
    pub(crate) lore: Vec<String>,
    pub(crate) flags: ItemFlags,
}

impl Default for ItemAttributes {
    fn default() -> Self {
        Self {
            amount: ItemConfig::DEFAULT_AMOUNT,
            name: None,
            material: None,
            enchantments: BTreeMap::new(),
            lore: Vec::new(),
            flags: ItemFlags::empty(),
        }
    }
}

impl ItemAttributes {
    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Display name; `None` means the host's default label.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn material(&self) -> Option<Material> {
        self.material
    }

    pub fn enchantments(&self) -> &BTreeMap<Enchantment, i32> {
        &self.enchantments
    }

    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    /// Reads stack-level attributes from `stack` and display attributes from
    /// its record, if one is available.
    pub(crate) fn from_stack(stack: &ItemStack, meta: Option<&ItemMeta>) -> Self {
        let mut attributes = Self {
            amount: stack.amount(),
            material: Some(stack.material()),
            enchantments: stack.enchantments().clone(),
            ..Self::default()
        };
        if let Some(meta) = meta {
            attributes.name = meta.display_name().map(str::to_owned);
            attributes.lore = meta.lore().to_vec();
            attributes.flags = meta.flags();
        }
        attributes
    }

    /// Writes name, lore and flags onto `meta`, in that order.
    ///
    /// The name is written even when `None` so it always wins over anything
    /// a capability writer left on the record. Lore replaces; flags add.
    pub(crate) fn overlay(&self, meta: &mut ItemMeta) {
        meta.set_display_name(self.name.clone());
        meta.set_lore(self.lore.clone());
        meta.add_flags(self.flags);
    }
}
