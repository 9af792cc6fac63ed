use item_host::{ItemMeta, PotionEffect, PotionEffectType};

use super::{Capability, CapabilityKind, Payload, remove_effects_of_kind, require_shape};
use crate::error::BuildError;

/// Effects granted by eating a suspicious stew. Same effect rules as
/// [`Potion`](super::Potion).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuspiciousStew {
    effects: Vec<PotionEffect>,
}

impl SuspiciousStew {
    /// Whether the stew carries any effect.
    pub fn has_custom_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Whether an effect of `kind` is configured.
    pub fn has_custom_effect(&self, kind: PotionEffectType) -> bool {
        self.effects.iter().any(|effect| effect.kind == kind)
    }

    pub fn custom_effects(&self) -> &[PotionEffect] {
        &self.effects
    }

    pub fn add_custom_effect(&mut self, effect: PotionEffect) -> &mut Self {
        self.effects.push(effect);
        self
    }

    /// Removes every effect of `kind`; returns how many were removed.
    pub fn remove_custom_effect(&mut self, kind: PotionEffectType) -> usize {
        remove_effects_of_kind(&mut self.effects, kind)
    }

    pub fn clear_custom_effects(&mut self) -> &mut Self {
        self.effects.clear();
        self
    }
}

impl Capability for SuspiciousStew {
    const KIND: CapabilityKind = CapabilityKind::SuspiciousStew;

    fn as_payload(&self) -> Payload<'_> {
        Payload::SuspiciousStew(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let stew = require_shape::<Self, _>(meta, ItemMeta::as_suspicious_stew)?;
        Ok(Self {
            effects: stew.custom_effects().to_vec(),
        })
    }
}
