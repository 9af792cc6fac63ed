use item_host::{AxolotlVariant, ItemMeta};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxolotlBucket {
    variant: Option<AxolotlVariant>,
}

impl AxolotlBucket {
    pub fn variant(&self) -> Option<AxolotlVariant> {
        self.variant
    }

    /// Whether a variant will be written at build.
    pub fn has_variant(&self) -> bool {
        self.variant.is_some()
    }

    pub fn set_variant(&mut self, variant: Option<AxolotlVariant>) -> &mut Self {
        self.variant = variant;
        self
    }
}

impl Capability for AxolotlBucket {
    const KIND: CapabilityKind = CapabilityKind::AxolotlBucket;

    fn as_payload(&self) -> Payload<'_> {
        Payload::AxolotlBucket(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let bucket = require_shape::<Self, _>(meta, ItemMeta::as_axolotl_bucket)?;
        Ok(Self {
            variant: bucket.variant(),
        })
    }
}
