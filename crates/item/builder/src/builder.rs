//! The item descriptor.

use std::collections::BTreeMap;

use item_host::{Enchantment, ItemFlags, ItemStack, Material};

use crate::assembly;
use crate::attributes::ItemAttributes;
use crate::capability::{Capability, CapabilityKind, Plain};
use crate::error::{AccessError, BuildError, set_indexed};

/// In-memory description of an item, assembled into an [`ItemStack`] by
/// [`build`](Self::build).
///
/// The capability `C` is fixed for the lifetime of the descriptor. Plain
/// descriptors carry only the common [`ItemAttributes`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBuilder<C = Plain> {
    attributes: ItemAttributes,
    payload: C,
}

impl<C: Capability> ItemBuilder<C> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    pub fn new() -> Self {
        Self {
            attributes: ItemAttributes::default(),
            payload: C::default(),
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut builder = Self::new();
        builder.attributes.name = Some(name.into());
        builder
    }

    pub fn with_material(material: Material) -> Self {
        let mut builder = Self::new();
        builder.attributes.material = Some(material);
        builder
    }

    pub fn with_name_and_material(name: impl Into<String>, material: Material) -> Self {
        let mut builder = Self::with_material(material);
        builder.attributes.name = Some(name.into());
        builder
    }

    /// Hydrates a descriptor from an existing stack.
    ///
    /// Amount, material and stack enchantments come from the stack; name,
    /// lore, flags and the payload come from its attribute record. Fails with
    /// [`BuildError::CapabilityMismatch`] when the record does not have the
    /// shape `C` reads.
    pub fn from_stack(stack: &ItemStack) -> Result<Self, BuildError> {
        let meta = stack.item_meta();
        let attributes = ItemAttributes::from_stack(stack, meta.as_ref());
        let payload = match &meta {
            Some(meta) => C::from_meta(meta)?,
            None if C::KIND == CapabilityKind::Plain => C::default(),
            None => {
                return Err(BuildError::CapabilityMismatch {
                    capability: C::KIND,
                    material: stack.material(),
                });
            }
        };
        Ok(Self {
            attributes,
            payload,
        })
    }

    pub fn kind(&self) -> CapabilityKind {
        C::KIND
    }

    // ------------------------------------------------------------------
    // Common attributes
    // ------------------------------------------------------------------

    pub fn attributes(&self) -> &ItemAttributes {
        &self.attributes
    }

    pub fn amount(&self) -> i32 {
        self.attributes.amount
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name()
    }

    pub fn material(&self) -> Option<Material> {
        self.attributes.material
    }

    pub fn enchantments(&self) -> &BTreeMap<Enchantment, i32> {
        &self.attributes.enchantments
    }

    pub fn lore(&self) -> &[String] {
        &self.attributes.lore
    }

    pub fn flags(&self) -> ItemFlags {
        self.attributes.flags
    }

    /// Stored as given; negative amounts are the host's problem.
    pub fn set_amount(&mut self, amount: i32) -> &mut Self {
        self.attributes.amount = amount;
        self
    }

    pub fn set_name(&mut self, name: Option<String>) -> &mut Self {
        self.attributes.name = name;
        self
    }

    pub fn set_material(&mut self, material: Material) -> &mut Self {
        self.attributes.material = Some(material);
        self
    }

    /// Inserts or overwrites the level for `enchantment`.
    pub fn add_enchantment(&mut self, enchantment: Enchantment, level: i32) -> &mut Self {
        self.attributes.enchantments.insert(enchantment, level);
        self
    }

    pub fn set_enchantments(&mut self, enchantments: BTreeMap<Enchantment, i32>) -> &mut Self {
        self.attributes.enchantments = enchantments;
        self
    }

    pub fn add_lore_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .lore
            .extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn set_lore_line(
        &mut self,
        index: usize,
        line: impl Into<String>,
    ) -> Result<&mut Self, AccessError> {
        set_indexed("lore", &mut self.attributes.lore, index, line.into())?;
        Ok(self)
    }

    pub fn set_lore(&mut self, lore: Vec<String>) -> &mut Self {
        self.attributes.lore = lore;
        self
    }

    pub fn clear_lore(&mut self) -> &mut Self {
        self.attributes.lore.clear();
        self
    }

    /// Adding a flag that is already set is a no-op.
    pub fn add_flag(&mut self, flag: ItemFlags) -> &mut Self {
        self.attributes.flags.insert(flag);
        self
    }

    pub fn set_flags(&mut self, flags: ItemFlags) -> &mut Self {
        self.attributes.flags = flags;
        self
    }

    // ------------------------------------------------------------------
    // Capability
    // ------------------------------------------------------------------

    pub fn payload(&self) -> &C {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut C {
        &mut self.payload
    }

    // ------------------------------------------------------------------
    // Assembly
    // ------------------------------------------------------------------

    /// Assembles a new stack. The descriptor is left unchanged, so repeated
    /// calls yield equal stacks.
    pub fn build(&self) -> Result<ItemStack, BuildError> {
        assembly::assemble(&self.attributes, self.payload.as_payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Book;

    #[test]
    fn constructors_default_amount_to_one() {
        assert_eq!(ItemBuilder::<Plain>::new().amount(), 1);
        assert_eq!(ItemBuilder::<Book>::with_name("Notes").amount(), 1);

        let builder = ItemBuilder::<Book>::with_name_and_material("Notes", Material::WritableBook);
        assert_eq!(builder.name(), Some("Notes"));
        assert_eq!(builder.material(), Some(Material::WritableBook));
        assert_eq!(builder.kind(), CapabilityKind::Book);
    }

    #[test]
    fn lore_mutation_boundaries() {
        let mut builder: ItemBuilder = ItemBuilder::new();
        builder.add_lore_lines(["first", "second"]);
        let out_of_range = AccessError::IndexOutOfRange {
            collection: "lore",
            index: 5,
            len: 2,
        };
        assert_eq!(builder.set_lore_line(5, "x").unwrap_err(), out_of_range);

        builder.clear_lore().add_lore_lines(["a"]);
        assert_eq!(builder.lore(), ["a"]);
    }

    #[test]
    fn enchantment_last_write_wins() {
        let mut builder: ItemBuilder = ItemBuilder::new();
        builder
            .add_enchantment(Enchantment::Efficiency, 1)
            .add_enchantment(Enchantment::Efficiency, 3);
        assert_eq!(builder.enchantments().len(), 1);
        assert_eq!(builder.enchantments()[&Enchantment::Efficiency], 3);
    }

    #[test]
    fn missing_material_fails_without_touching_descriptor() {
        let builder = ItemBuilder::<Book>::with_name("Unbound");
        let before = builder.clone();
        assert_eq!(builder.build(), Err(BuildError::MissingMaterial));
        assert_eq!(builder, before);
    }
}
