use item_host::ItemMeta;

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

/// Single explosion carried by a firework star.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireworkEffect {
    effect: Option<item_host::FireworkEffect>,
}

impl FireworkEffect {
    /// Whether the star carries an effect.
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    pub fn effect(&self) -> Option<&item_host::FireworkEffect> {
        self.effect.as_ref()
    }

    pub fn set_effect(&mut self, effect: Option<item_host::FireworkEffect>) -> &mut Self {
        self.effect = effect;
        self
    }
}

impl Capability for FireworkEffect {
    const KIND: CapabilityKind = CapabilityKind::FireworkEffect;

    fn as_payload(&self) -> Payload<'_> {
        Payload::FireworkEffect(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let star = require_shape::<Self, _>(meta, ItemMeta::as_firework_effect)?;
        Ok(Self {
            effect: star.effect().cloned(),
        })
    }
}
