use item_host::ItemMeta;

use super::{Capability, CapabilityKind, Payload};
use crate::error::BuildError;

/// No capability payload. Every record can carry a plain descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plain;

impl Capability for Plain {
    const KIND: CapabilityKind = CapabilityKind::Plain;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Plain
    }

    fn from_meta(_meta: &ItemMeta) -> Result<Self, BuildError> {
        Ok(Self)
    }
}
