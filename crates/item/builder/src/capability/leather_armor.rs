use item_host::{Color, ItemMeta};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

/// Dye color of leather armor. `None` leaves the armor undyed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeatherArmor {
    color: Option<Color>,
}

impl LeatherArmor {
    /// The configured dye, if any. Undyed armor builds with the host default.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color>) -> &mut Self {
        self.color = color;
        self
    }
}

impl Capability for LeatherArmor {
    const KIND: CapabilityKind = CapabilityKind::LeatherArmor;

    fn as_payload(&self) -> Payload<'_> {
        Payload::LeatherArmor(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let armor = require_shape::<Self, _>(meta, ItemMeta::as_leather_armor)?;
        Ok(Self {
            color: armor.is_dyed().then(|| armor.color()),
        })
    }
}
