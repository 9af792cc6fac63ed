use crate::color::Color;

/// Host item constants.
///
/// Mirrors the defaults the host applies when a value was never written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemConfig;

impl ItemConfig {
    /// Amount given to a freshly described item.
    pub const DEFAULT_AMOUNT: i32 = 1;
    /// Color reported by undyed leather armor.
    pub const DEFAULT_LEATHER_COLOR: Color = Color::from_rgb(0xA06540);
}
