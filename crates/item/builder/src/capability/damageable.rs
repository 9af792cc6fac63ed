use item_host::ItemMeta;

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

/// Wear on an item with durability. `None` until a damage value is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Damageable {
    damage: Option<i32>,
}

impl Damageable {
    /// Whether a damage value will be written at build.
    pub fn has_damage(&self) -> bool {
        self.damage.is_some()
    }

    pub fn damage(&self) -> Option<i32> {
        self.damage
    }

    pub fn set_damage(&mut self, damage: Option<i32>) -> &mut Self {
        self.damage = damage;
        self
    }
}

impl Capability for Damageable {
    const KIND: CapabilityKind = CapabilityKind::Damageable;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Damageable(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let durability = require_shape::<Self, _>(meta, ItemMeta::as_damageable)?;
        Ok(Self {
            damage: durability.has_damage().then(|| durability.damage()),
        })
    }
}
