use item_host::{DyeColor, ItemMeta, TropicalFishPattern};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

/// Fish variant stored in a bucket.
///
/// Only the fields that were set are written to the host; the host fills the
/// rest with its own defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TropicalFishBucket {
    pattern: Option<TropicalFishPattern>,
    body_color: Option<DyeColor>,
    pattern_color: Option<DyeColor>,
    variant: bool,
}

impl TropicalFishBucket {
    /// Whether this descriptor describes a variant.
    ///
    /// True once any of pattern, body color or pattern color is set, and for
    /// descriptors hydrated from a bucket whose variant had been written.
    /// Clearing every field afterwards does not reset a hydrated variant.
    pub fn has_variant(&self) -> bool {
        self.variant
            || self.pattern.is_some()
            || self.body_color.is_some()
            || self.pattern_color.is_some()
    }

    pub fn pattern(&self) -> Option<TropicalFishPattern> {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: Option<TropicalFishPattern>) -> &mut Self {
        self.pattern = pattern;
        self
    }

    pub fn body_color(&self) -> Option<DyeColor> {
        self.body_color
    }

    pub fn set_body_color(&mut self, color: Option<DyeColor>) -> &mut Self {
        self.body_color = color;
        self
    }

    pub fn pattern_color(&self) -> Option<DyeColor> {
        self.pattern_color
    }

    pub fn set_pattern_color(&mut self, color: Option<DyeColor>) -> &mut Self {
        self.pattern_color = color;
        self
    }
}

impl Capability for TropicalFishBucket {
    const KIND: CapabilityKind = CapabilityKind::TropicalFishBucket;

    fn as_payload(&self) -> Payload<'_> {
        Payload::TropicalFishBucket(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let bucket = require_shape::<Self, _>(meta, ItemMeta::as_tropical_fish_bucket)?;
        if !bucket.has_variant() {
            return Ok(Self::default());
        }
        Ok(Self {
            pattern: Some(bucket.pattern()),
            body_color: Some(bucket.body_color()),
            pattern_color: Some(bucket.pattern_color()),
            variant: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_field_marks_a_variant() {
        let mut bucket = TropicalFishBucket::default();
        assert!(!bucket.has_variant());
        bucket.set_pattern_color(Some(DyeColor::Lime));
        assert!(bucket.has_variant());
    }
}
