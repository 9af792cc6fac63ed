use item_host::{Color, ItemMeta, MapView};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::BuildError;

/// Filled map rendering options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    color: Option<Color>,
    location_name: Option<String>,
    map_view: Option<MapView>,
    scaling: bool,
}

impl Map {
    /// Whether a marker color is set.
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

    /// Whether a non-empty location name is set.
    ///
    /// `Some("")` is stored as given but counts as no name, matching what the
    /// host reports after the map is built.
    pub fn has_location_name(&self) -> bool {
        self.location_name
            .as_deref()
            .is_some_and(|name| !name.is_empty())
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }

    pub fn set_location_name(&mut self, name: Option<String>) -> &mut Self {
        self.location_name = name;
        self
    }

    /// Whether the map is bound to a view.
    pub fn has_map_view(&self) -> bool {
        self.map_view.is_some()
    }

    pub fn map_view(&self) -> Option<MapView> {
        self.map_view
    }

    pub fn set_map_view(&mut self, map_view: Option<MapView>) -> &mut Self {
        self.map_view = map_view;
        self
    }

    pub fn is_scaling(&self) -> bool {
        self.scaling
    }

    pub fn set_scaling(&mut self, scaling: bool) -> &mut Self {
        self.scaling = scaling;
        self
    }
}

impl Capability for Map {
    const KIND: CapabilityKind = CapabilityKind::Map;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Map(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let map = require_shape::<Self, _>(meta, ItemMeta::as_map)?;
        Ok(Self {
            color: map.color(),
            location_name: map.location_name().map(str::to_owned),
            map_view: map.map_view(),
            scaling: map.is_scaling(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_location_name_is_not_a_name() {
        let mut map = Map::default();
        assert!(!map.has_location_name());

        map.set_location_name(Some(String::new()));
        assert!(!map.has_location_name());
        assert_eq!(map.location_name(), Some(""));

        map.set_location_name(Some("Harbor".into()));
        assert!(map.has_location_name());
    }
}
