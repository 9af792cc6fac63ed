use crate::color::DyeColor;

/// Shape of a single banner layer.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PatternType {
    Base,
    StripeBottom,
    StripeTop,
    StripeLeft,
    StripeRight,
    StripeCenter,
    StripeMiddle,
    StripeDownright,
    StripeDownleft,
    Cross,
    StraightCross,
    TriangleBottom,
    TriangleTop,
    HalfVertical,
    HalfHorizontal,
    Border,
    CurlyBorder,
    Gradient,
    Bricks,
    Circle,
    Rhombus,
    Creeper,
    Skull,
    Flower,
    Mojang,
    Globe,
    Piglin,
}

/// One banner layer: a shape painted in a dye color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub color: DyeColor,
    pub shape: PatternType,
}

impl Pattern {
    pub fn new(color: DyeColor, shape: PatternType) -> Self {
        Self { color, shape }
    }
}
