use item_host::{ItemMeta, PlayerProfile};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skull {
    owning_player: Option<PlayerProfile>,
}

impl Skull {
    /// Whether an owning player is set.
    pub fn has_owner(&self) -> bool {
        self.owning_player.is_some()
    }

    pub fn owning_player(&self) -> Option<&PlayerProfile> {
        self.owning_player.as_ref()
    }

    pub fn set_owning_player(&mut self, owner: Option<PlayerProfile>) -> &mut Self {
        self.owning_player = owner;
        self
    }
}

impl Capability for Skull {
    const KIND: CapabilityKind = CapabilityKind::Skull;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Skull(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let skull = require_shape::<Self, _>(meta, ItemMeta::as_skull)?;
        Ok(Self {
            owning_player: skull.owning_player().cloned(),
        })
    }
}
