use item_host::ItemMeta;

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

/// Anvil repair cost.
///
/// The host stores 0 both for "never repaired" and for an explicit zero, so
/// hydration reads a zero cost back as `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repairable {
    repair_cost: Option<i32>,
}

impl Repairable {
    /// Whether a repair cost will be written at build.
    pub fn has_repair_cost(&self) -> bool {
        self.repair_cost.is_some()
    }

    pub fn repair_cost(&self) -> Option<i32> {
        self.repair_cost
    }

    pub fn set_repair_cost(&mut self, cost: Option<i32>) -> &mut Self {
        self.repair_cost = cost;
        self
    }
}

impl Capability for Repairable {
    const KIND: CapabilityKind = CapabilityKind::Repairable;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Repairable(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let repair = require_shape::<Self, _>(meta, ItemMeta::as_repairable)?;
        Ok(Self {
            repair_cost: repair.has_repair_cost().then(|| repair.repair_cost()),
        })
    }
}
