//! TOML loading for level curves.

use std::path::Path;

use crate::curve::LevelCurve;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Loader for [`LevelCurve`] definitions.
///
/// ```toml
/// [[tiers]]
/// below = 15
/// per_level = 2
/// base = 7
///
/// [[tiers]]
/// per_level = 3
/// base = -8
/// ```
pub struct CurveLoader;

impl CurveLoader {
    pub fn load(path: &Path) -> LoadResult<LevelCurve> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LevelCurve> {
        let curve: LevelCurve = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level curve TOML: {}", e))?;
        tracing::debug!("Loaded level curve with {} tiers", curve.tiers().len());
        Ok(curve)
    }
}

impl LevelCurve {
    pub fn from_toml_str(content: &str) -> LoadResult<Self> {
        CurveLoader::parse(content)
    }
}
