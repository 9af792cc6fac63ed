use item_host::{ItemMeta, ItemStack};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::{AccessError, BuildError, get_indexed, set_indexed};

/// Stacks held inside a bundle, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    items: Vec<ItemStack>,
}

impl Bundle {
    /// Whether the bundle holds any stack.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<ItemStack>) -> &mut Self {
        self.items = items;
        self
    }

    pub fn item(&self, index: usize) -> Result<&ItemStack, AccessError> {
        get_indexed("bundle items", &self.items, index)
    }

    /// Replaces the stack at `index`; the index must name an existing stack.
    pub fn set_item(&mut self, index: usize, item: ItemStack) -> Result<&mut Self, AccessError> {
        set_indexed("bundle items", &mut self.items, index, item)?;
        Ok(self)
    }

    pub fn add_item(&mut self, item: ItemStack) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = ItemStack>) -> &mut Self {
        self.items.extend(items);
        self
    }
}

impl Capability for Bundle {
    const KIND: CapabilityKind = CapabilityKind::Bundle;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Bundle(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let bundle = require_shape::<Self, _>(meta, ItemMeta::as_bundle)?;
        Ok(Self {
            items: bundle.items().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_host::Material;

    #[test]
    fn set_item_rejects_an_index_past_the_end() {
        let mut bundle = Bundle::default();
        bundle.add_item(ItemStack::new(Material::Arrow, 16));

        let apple = ItemStack::of(Material::Apple);
        let err = bundle.set_item(1, apple.clone()).unwrap_err();
        assert_eq!(
            err,
            AccessError::IndexOutOfRange {
                collection: "bundle items",
                index: 1,
                len: 1,
            }
        );

        bundle.set_item(0, apple.clone()).unwrap();
        assert_eq!(bundle.item(0), Ok(&apple));
        assert!(bundle.item(1).is_err());
    }
}
