//! RGB colors and the sixteen dye colors.

use std::fmt;

/// Opaque RGB color used by leather armor, maps, potions and fireworks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const WHITE: Self = Self::from_rgb(0xFFFFFF);
    pub const BLACK: Self = Self::from_rgb(0x000000);
    pub const RED: Self = Self::from_rgb(0xFF0000);
    pub const GREEN: Self = Self::from_rgb(0x008000);
    pub const BLUE: Self = Self::from_rgb(0x0000FF);
    pub const YELLOW: Self = Self::from_rgb(0xFFFF00);
    pub const PURPLE: Self = Self::from_rgb(0x800080);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from a packed `0xRRGGBB` value; the high byte is ignored.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            red: ((rgb >> 16) & 0xFF) as u8,
            green: ((rgb >> 8) & 0xFF) as u8,
            blue: (rgb & 0xFF) as u8,
        }
    }

    pub const fn as_rgb(self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.as_rgb())
    }
}

/// Dye colors (banner layers, tropical fish).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    /// RGB the host renders for this dye.
    pub const fn color(self) -> Color {
        match self {
            Self::White => Color::from_rgb(0xF9FFFE),
            Self::Orange => Color::from_rgb(0xF9801D),
            Self::Magenta => Color::from_rgb(0xC74EBD),
            Self::LightBlue => Color::from_rgb(0x3AB3DA),
            Self::Yellow => Color::from_rgb(0xFED83D),
            Self::Lime => Color::from_rgb(0x80C71F),
            Self::Pink => Color::from_rgb(0xF38BAA),
            Self::Gray => Color::from_rgb(0x474F52),
            Self::LightGray => Color::from_rgb(0x9D9D97),
            Self::Cyan => Color::from_rgb(0x169C9C),
            Self::Purple => Color::from_rgb(0x8932B8),
            Self::Blue => Color::from_rgb(0x3C44AA),
            Self::Brown => Color::from_rgb(0x835432),
            Self::Green => Color::from_rgb(0x5E7C16),
            Self::Red => Color::from_rgb(0xB02E26),
            Self::Black => Color::from_rgb(0x1D1D21),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn packed_rgb_round_trips_through_components() {
        let color = Color::from_rgb(0x123456);
        assert_eq!(color, Color::new(0x12, 0x34, 0x56));
        assert_eq!(color.as_rgb(), 0x123456);
        assert_eq!(color.to_string(), "#123456");
    }

    #[test]
    fn dye_names_are_snake_case() {
        assert_eq!(DyeColor::LightBlue.to_string(), "light_blue");
        assert_eq!(DyeColor::from_str("LIGHT_GRAY"), Ok(DyeColor::LightGray));
    }
}
