//! Level/progress arithmetic.
//!
//! Points held inside the current level are `experience_to_next(level) *
//! progress`, rounded to the nearest point so a progress value written by
//! this module reads back as the exact point count it came from.

use crate::curve::LevelCurve;
use crate::holder::ExperienceHolder;

/// Points the holder has earned inside its current level.
pub fn points_in_level<H: ExperienceHolder + ?Sized>(holder: &H, curve: &LevelCurve) -> i32 {
    let to_next = curve.experience_to_next(holder.level());
    let held = (to_next as f32 * holder.progress()).round() as i32;
    held.clamp(0, to_next)
}

/// Resets the holder to level 0 and then adds `amount` points.
pub fn set_experience<H: ExperienceHolder + ?Sized>(
    holder: &mut H,
    curve: &LevelCurve,
    amount: i32,
) {
    holder.set_level(0);
    holder.set_progress(0.0);
    add_experience(holder, curve, amount);
}

/// Adds `amount` points, levelling up while they cover the rest of the
/// current level. Non-positive amounts do nothing.
pub fn add_experience<H: ExperienceHolder + ?Sized>(
    holder: &mut H,
    curve: &LevelCurve,
    amount: i32,
) {
    if amount <= 0 {
        return;
    }

    let mut level = holder.level();
    let mut held = points_in_level(&*holder, curve);
    let mut remaining = amount;

    loop {
        let to_next = curve.experience_to_next(level);
        let missing = to_next - held;
        if remaining < missing {
            break;
        }
        remaining -= missing;
        held = 0;
        level += 1;
        tracing::debug!("Level up to {} ({} experience left)", level, remaining);
    }

    held += remaining;
    store(holder, curve, level, held);
}

/// Removes `amount` points, levelling down while they exceed what the
/// current level holds. Never goes below level 0 with no progress.
/// Non-positive amounts do nothing.
pub fn remove_experience<H: ExperienceHolder + ?Sized>(
    holder: &mut H,
    curve: &LevelCurve,
    amount: i32,
) {
    if amount <= 0 {
        return;
    }

    let mut level = holder.level();
    let mut held = points_in_level(&*holder, curve);
    let mut remaining = amount;

    while remaining > held {
        remaining -= held;
        if level == 0 {
            tracing::debug!("Stopped at level 0 ({} not removed)", remaining);
            held = 0;
            remaining = 0;
            break;
        }
        level -= 1;
        held = curve.experience_to_next(level);
        tracing::debug!("Level down to {} ({} experience left)", level, remaining);
    }

    held -= remaining;
    store(holder, curve, level, held);
}

fn store<H: ExperienceHolder + ?Sized>(
    holder: &mut H,
    curve: &LevelCurve,
    level: i32,
    held: i32,
) {
    let to_next = curve.experience_to_next(level);
    holder.set_level(level);
    holder.set_progress(held as f32 / to_next as f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holder::PlayerExperience;

    #[test]
    fn partial_level_becomes_progress() {
        let curve = LevelCurve::vanilla();
        let mut player = PlayerExperience::default();
        add_experience(&mut player, &curve, 3);
        assert_eq!(player.level(), 0);
        assert_eq!(points_in_level(&player, &curve), 3);
    }

    #[test]
    fn removal_within_level_keeps_level() {
        let curve = LevelCurve::vanilla();
        let mut player = PlayerExperience::default();
        set_experience(&mut player, &curve, 7 + 5);
        remove_experience(&mut player, &curve, 4);
        assert_eq!(player.level(), 1);
        assert_eq!(points_in_level(&player, &curve), 1);
    }

    #[test]
    fn non_positive_amounts_are_ignored() {
        let curve = LevelCurve::vanilla();
        let mut player = PlayerExperience::new(4, 0.5);
        add_experience(&mut player, &curve, 0);
        remove_experience(&mut player, &curve, -3);
        assert_eq!(player, PlayerExperience::new(4, 0.5));
    }
}
