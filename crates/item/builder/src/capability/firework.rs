use item_host::ItemMeta;

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::{AccessError, BuildError, get_indexed, remove_indexed, set_indexed};

/// Firework rocket: explosions plus flight power.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Firework {
    effects: Vec<item_host::FireworkEffect>,
    power: i32,
}

impl Firework {
    /// Whether the rocket carries any effect.
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn effects(&self) -> &[item_host::FireworkEffect] {
        &self.effects
    }

    /// Number of explosions.
    pub fn effects_size(&self) -> usize {
        self.effects.len()
    }

    pub fn set_effects(&mut self, effects: Vec<item_host::FireworkEffect>) -> &mut Self {
        self.effects = effects;
        self
    }

    pub fn effect(&self, index: usize) -> Result<&item_host::FireworkEffect, AccessError> {
        get_indexed("firework effects", &self.effects, index)
    }

    pub fn set_effect(
        &mut self,
        index: usize,
        effect: item_host::FireworkEffect,
    ) -> Result<&mut Self, AccessError> {
        set_indexed("firework effects", &mut self.effects, index, effect)?;
        Ok(self)
    }

    pub fn add_effect(&mut self, effect: item_host::FireworkEffect) -> &mut Self {
        self.effects.push(effect);
        self
    }

    pub fn add_effects(
        &mut self,
        effects: impl IntoIterator<Item = item_host::FireworkEffect>,
    ) -> &mut Self {
        self.effects.extend(effects);
        self
    }

    /// Removes the explosion at `index`; later explosions move down by one.
    pub fn remove_effect(
        &mut self,
        index: usize,
    ) -> Result<item_host::FireworkEffect, AccessError> {
        remove_indexed("firework effects", &mut self.effects, index)
    }

    pub fn clear_effects(&mut self) -> &mut Self {
        self.effects.clear();
        self
    }

    /// Flight duration in units of roughly half a second.
    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn set_power(&mut self, power: i32) -> &mut Self {
        self.power = power;
        self
    }
}

impl Capability for Firework {
    const KIND: CapabilityKind = CapabilityKind::Firework;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Firework(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let rocket = require_shape::<Self, _>(meta, ItemMeta::as_firework)?;
        Ok(Self {
            effects: rocket.effects().to_vec(),
            power: rocket.power(),
        })
    }
}
