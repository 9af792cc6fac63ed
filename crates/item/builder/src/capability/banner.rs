use item_host::{ItemMeta, Pattern};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::{AccessError, BuildError, get_indexed, remove_indexed, set_indexed};

/// Layered banner patterns, bottom layer first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Banner {
    patterns: Vec<Pattern>,
}

impl Banner {
    /// Whether at least one layer is set.
    pub fn has_patterns(&self) -> bool {
        !self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn number_of_patterns(&self) -> usize {
        self.patterns.len()
    }

    pub fn set_patterns(&mut self, patterns: Vec<Pattern>) -> &mut Self {
        self.patterns = patterns;
        self
    }

    /// Layer at `index`, counting from the bottom.
    pub fn pattern(&self, index: usize) -> Result<&Pattern, AccessError> {
        get_indexed("banner patterns", &self.patterns, index)
    }

    /// Replaces the layer at `index`; the index must name an existing layer.
    pub fn set_pattern(
        &mut self,
        index: usize,
        pattern: Pattern,
    ) -> Result<&mut Self, AccessError> {
        set_indexed("banner patterns", &mut self.patterns, index, pattern)?;
        Ok(self)
    }

    /// Paints `pattern` on top of the existing layers.
    pub fn add_pattern(&mut self, pattern: Pattern) -> &mut Self {
        self.patterns.push(pattern);
        self
    }

    /// Appends layers above the existing ones.
    pub fn add_patterns(&mut self, patterns: impl IntoIterator<Item = Pattern>) -> &mut Self {
        self.patterns.extend(patterns);
        self
    }

    /// Removes the layer at `index`; layers above it move down by one.
    pub fn remove_pattern(&mut self, index: usize) -> Result<Pattern, AccessError> {
        remove_indexed("banner patterns", &mut self.patterns, index)
    }
}

impl Capability for Banner {
    const KIND: CapabilityKind = CapabilityKind::Banner;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Banner(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let banner = require_shape::<Self, _>(meta, ItemMeta::as_banner)?;
        Ok(Self {
            patterns: banner.patterns().to_vec(),
        })
    }
}
