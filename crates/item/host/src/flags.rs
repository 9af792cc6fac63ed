use bitflags::bitflags;

bitflags! {
    /// Display flags hiding parts of an item's tooltip.
    ///
    /// Membership only: adding a flag twice is the same as adding it once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ItemFlags: u8 {
        const HIDE_ENCHANTS       = 1 << 0;
        const HIDE_ATTRIBUTES     = 1 << 1;
        const HIDE_UNBREAKABLE    = 1 << 2;
        const HIDE_DESTROYS       = 1 << 3;
        const HIDE_PLACED_ON      = 1 << 4;
        const HIDE_POTION_EFFECTS = 1 << 5;
        const HIDE_DYE            = 1 << 6;
    }
}
