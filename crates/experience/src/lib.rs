//! Experience arithmetic for a player's level/progress pair.
//!
//! A player holds a whole `level` and a `progress` fraction towards the next
//! one. [`set_experience`], [`add_experience`] and [`remove_experience`]
//! move that pair by a number of experience points, levelling up or down as
//! many times as the points cover. How many points a level takes is decided
//! by a [`LevelCurve`].
pub mod curve;
pub mod holder;
pub mod leveling;
#[cfg(feature = "loaders")]
pub mod loaders;

pub use curve::{CurveError, CurveTier, LevelCurve};
pub use holder::{ExperienceHolder, PlayerExperience};
pub use leveling::{add_experience, points_in_level, remove_experience, set_experience};
#[cfg(feature = "loaders")]
pub use loaders::{CurveLoader, LoadResult};
