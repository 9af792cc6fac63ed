use item_host::{ItemMeta, Location};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

/// Lodestone binding of a compass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compass {
    lodestone: Option<Location>,
    tracked: bool,
}

impl Compass {
    /// Whether a lodestone location is set.
    pub fn has_lodestone(&self) -> bool {
        self.lodestone.is_some()
    }

    pub fn lodestone(&self) -> Option<&Location> {
        self.lodestone.as_ref()
    }

    pub fn set_lodestone(&mut self, lodestone: Option<Location>) -> &mut Self {
        self.lodestone = lodestone;
        self
    }

    /// Whether the compass stops pointing once the lodestone block is gone.
    pub fn is_lodestone_tracked(&self) -> bool {
        self.tracked
    }

    pub fn set_lodestone_tracked(&mut self, tracked: bool) -> &mut Self {
        self.tracked = tracked;
        self
    }
}

impl Capability for Compass {
    const KIND: CapabilityKind = CapabilityKind::Compass;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Compass(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let compass = require_shape::<Self, _>(meta, ItemMeta::as_compass)?;
        Ok(Self {
            lodestone: compass.lodestone().cloned(),
            tracked: compass.is_lodestone_tracked(),
        })
    }
}
