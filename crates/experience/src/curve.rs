//! Experience needed per level.

/// One linear segment of a [`LevelCurve`].
///
/// A level `L` in this tier needs `per_level * L + base` points to reach
/// `L + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveTier {
    /// First level *not* covered by this tier; `None` for the last tier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub below: Option<i32>,
    pub per_level: i32,
    pub base: i32,
}

impl CurveTier {
    pub const fn new(below: Option<i32>, per_level: i32, base: i32) -> Self {
        Self {
            below,
            per_level,
            base,
        }
    }

    pub const fn experience_at(&self, level: i32) -> i32 {
        self.per_level * level + self.base
    }
}

/// Piecewise-linear experience curve.
///
/// Tiers are ordered by ascending `below`; the last one is unbounded. Every
/// level needs at least one point, so levelling always terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CurveTable", into = "CurveTable"))]
pub struct LevelCurve {
    tiers: Vec<CurveTier>,
}

impl LevelCurve {
    /// The vanilla curve: `2L + 7` below 15, `5L - 38` below 30, `9L - 158`
    /// from then on.
    pub fn vanilla() -> Self {
        Self {
            tiers: vec![
                CurveTier::new(Some(15), 2, 7),
                CurveTier::new(Some(30), 5, -38),
                CurveTier::new(None, 9, -158),
            ],
        }
    }

    pub fn new(tiers: Vec<CurveTier>) -> Result<Self, CurveError> {
        validate(&tiers)?;
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[CurveTier] {
        &self.tiers
    }

    /// Points needed to go from `level` to `level + 1`.
    pub fn experience_to_next(&self, level: i32) -> i32 {
        let level = level.max(0);
        self.tiers
            .iter()
            .find(|tier| tier.below.is_none_or(|below| level < below))
            .or(self.tiers.last())
            .map_or(1, |tier| tier.experience_at(level))
    }

    /// Total points needed to reach `level` from level 0.
    pub fn experience_for_level(&self, level: i32) -> i64 {
        (0..level.max(0))
            .map(|l| i64::from(self.experience_to_next(l)))
            .sum()
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::vanilla()
    }
}

fn validate(tiers: &[CurveTier]) -> Result<(), CurveError> {
    let (last, bounded) = tiers.split_last().ok_or(CurveError::Empty)?;
    if last.below.is_some() {
        return Err(CurveError::BoundedLastTier);
    }

    let mut start = 0;
    for tier in bounded {
        let Some(below) = tier.below else {
            return Err(CurveError::UnboundedInnerTier);
        };
        if below <= start {
            return Err(CurveError::Unordered { below });
        }
        // Linear, so both ends positive means every level in between is.
        check_positive(tier, start)?;
        check_positive(tier, below - 1)?;
        start = below;
    }

    check_positive(last, start)?;
    if last.per_level < 0 {
        return Err(CurveError::Decreasing {
            per_level: last.per_level,
        });
    }
    Ok(())
}

fn check_positive(tier: &CurveTier, level: i32) -> Result<(), CurveError> {
    let experience = tier.experience_at(level);
    if experience <= 0 {
        return Err(CurveError::NonPositive { level, experience });
    }
    Ok(())
}

/// Invalid curve configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error("level curve has no tiers")]
    Empty,

    #[error("the last tier must cover every remaining level")]
    BoundedLastTier,

    #[error("only the last tier may be unbounded")]
    UnboundedInnerTier,

    #[error("tier bound {below} is not above the previous tier")]
    Unordered { below: i32 },

    #[error("level {level} would need {experience} experience")]
    NonPositive { level: i32, experience: i32 },

    #[error("the last tier decreases by {per_level} per level")]
    Decreasing { per_level: i32 },
}

impl CurveError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "CURVE_EMPTY",
            Self::BoundedLastTier => "CURVE_BOUNDED_LAST_TIER",
            Self::UnboundedInnerTier => "CURVE_UNBOUNDED_INNER_TIER",
            Self::Unordered { .. } => "CURVE_UNORDERED",
            Self::NonPositive { .. } => "CURVE_NON_POSITIVE",
            Self::Decreasing { .. } => "CURVE_DECREASING",
        }
    }
}

/// Serialized form of a [`LevelCurve`]: a table with a `tiers` array.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CurveTable {
    tiers: Vec<CurveTier>,
}

#[cfg(feature = "serde")]
impl TryFrom<CurveTable> for LevelCurve {
    type Error = CurveError;

    fn try_from(table: CurveTable) -> Result<Self, Self::Error> {
        Self::new(table.tiers)
    }
}

#[cfg(feature = "serde")]
impl From<LevelCurve> for CurveTable {
    fn from(curve: LevelCurve) -> Self {
        Self { tiers: curve.tiers }
    }
}
