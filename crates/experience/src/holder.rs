/// Anything holding a level and a progress fraction towards the next level.
pub trait ExperienceHolder {
    fn level(&self) -> i32;

    fn set_level(&mut self, level: i32);

    /// Fraction of the current level already earned, in `0.0..1.0`.
    fn progress(&self) -> f32;

    fn set_progress(&mut self, progress: f32);
}

/// Plain level/progress pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerExperience {
    level: i32,
    progress: f32,
}

impl PlayerExperience {
    pub fn new(level: i32, progress: f32) -> Self {
        let mut experience = Self::default();
        experience.set_level(level);
        experience.set_progress(progress);
        experience
    }
}

impl ExperienceHolder for PlayerExperience {
    fn level(&self) -> i32 {
        self.level
    }

    fn set_level(&mut self, level: i32) {
        self.level = level.max(0);
    }

    fn progress(&self) -> f32 {
        self.progress
    }

    fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }
}
