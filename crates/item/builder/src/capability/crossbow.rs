use item_host::{ItemMeta, ItemStack};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::{AccessError, BuildError, get_indexed, set_indexed};

/// Projectiles loaded into a crossbow, fired in order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossbow {
    projectiles: Vec<ItemStack>,
}

impl Crossbow {
    /// Whether the crossbow is loaded.
    pub fn has_charged_projectiles(&self) -> bool {
        !self.projectiles.is_empty()
    }

    pub fn charged_projectiles(&self) -> &[ItemStack] {
        &self.projectiles
    }

    pub fn set_charged_projectiles(&mut self, projectiles: Vec<ItemStack>) -> &mut Self {
        self.projectiles = projectiles;
        self
    }

    pub fn charged_projectile(&self, index: usize) -> Result<&ItemStack, AccessError> {
        get_indexed("charged projectiles", &self.projectiles, index)
    }

    pub fn set_charged_projectile(
        &mut self,
        index: usize,
        projectile: ItemStack,
    ) -> Result<&mut Self, AccessError> {
        set_indexed(
            "charged projectiles",
            &mut self.projectiles,
            index,
            projectile,
        )?;
        Ok(self)
    }

    pub fn add_charged_projectile(&mut self, projectile: ItemStack) -> &mut Self {
        self.projectiles.push(projectile);
        self
    }

    pub fn add_charged_projectiles(
        &mut self,
        projectiles: impl IntoIterator<Item = ItemStack>,
    ) -> &mut Self {
        self.projectiles.extend(projectiles);
        self
    }
}

impl Capability for Crossbow {
    const KIND: CapabilityKind = CapabilityKind::Crossbow;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Crossbow(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let crossbow = require_shape::<Self, _>(meta, ItemMeta::as_crossbow)?;
        Ok(Self {
            projectiles: crossbow.charged_projectiles().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_host::Material;

    #[test]
    fn charged_projectiles_are_point_addressable() {
        let arrow = ItemStack::of(Material::Arrow);
        let rocket = ItemStack::of(Material::FireworkRocket);

        let mut crossbow = Crossbow::default();
        assert!(!crossbow.has_charged_projectiles());
        assert_eq!(
            crossbow.charged_projectile(0).unwrap_err(),
            AccessError::IndexOutOfRange {
                collection: "charged projectiles",
                index: 0,
                len: 0,
            }
        );

        crossbow.add_charged_projectile(arrow.clone());
        crossbow.set_charged_projectile(0, rocket.clone()).unwrap();
        assert_eq!(crossbow.charged_projectile(0), Ok(&rocket));
        assert_eq!(crossbow.charged_projectiles().len(), 1);

        let err = crossbow.set_charged_projectile(3, arrow).unwrap_err();
        assert_eq!(
            err,
            AccessError::IndexOutOfRange {
                collection: "charged projectiles",
                index: 3,
                len: 1,
            }
        );
    }
}
