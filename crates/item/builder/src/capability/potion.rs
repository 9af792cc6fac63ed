use item_host::{Color, ItemMeta, PotionData, PotionEffect, PotionEffectType};

use super::{Capability, CapabilityKind, Payload, remove_effects_of_kind, require_shape};
use crate::error::BuildError;

/// Potion base, custom effects and liquid color.
///
/// Custom effects may repeat a kind here. The host keeps only the first
/// effect of each kind when the potion is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Potion {
    base_data: Option<PotionData>,
    effects: Vec<PotionEffect>,
    color: Option<Color>,
}

impl Potion {
    pub fn base_potion_data(&self) -> Option<PotionData> {
        self.base_data
    }

    pub fn set_base_potion_data(&mut self, data: Option<PotionData>) -> &mut Self {
        self.base_data = data;
        self
    }

    /// Whether any custom effect is configured.
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

    /// Whether a custom color is set.
    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
        self.color = color;
        self
    }
}

impl Capability for Potion {
    const KIND: CapabilityKind = CapabilityKind::Potion;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Potion(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let potion = require_shape::<Self, _>(meta, ItemMeta::as_potion)?;
        Ok(Self {
            base_data: Some(potion.base_potion_data()),
            effects: potion.custom_effects().to_vec(),
            color: potion.color(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_by_kind_removes_every_match() {
        let mut potion = Potion::default();
        potion
            .add_custom_effect(PotionEffect::new(PotionEffectType::Speed, 100, 0))
            .add_custom_effect(PotionEffect::new(PotionEffectType::Luck, 100, 0))
            .add_custom_effect(PotionEffect::new(PotionEffectType::Speed, 600, 1));
        assert_eq!(potion.custom_effects().len(), 3);

        assert_eq!(potion.remove_custom_effect(PotionEffectType::Speed), 2);
        assert!(!potion.has_custom_effect(PotionEffectType::Speed));
        assert!(potion.has_custom_effect(PotionEffectType::Luck));
        assert_eq!(potion.remove_custom_effect(PotionEffectType::Speed), 0);
    }
}
