use std::path::Path;

use experience::{
    CurveLoader, ExperienceHolder, LevelCurve, PlayerExperience, add_experience, points_in_level,
    remove_experience, set_experience,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn one_level_worth_raises_level_with_no_progress() {
    init_tracing();
    let curve = LevelCurve::vanilla();
    let mut player = PlayerExperience::default();

    add_experience(&mut player, &curve, curve.experience_to_next(0));
    assert_eq!(player.level(), 1);
    assert_eq!(player.progress(), 0.0);
}

#[test]
fn large_amounts_cross_several_levels() {
    let curve = LevelCurve::vanilla();
    let mut player = PlayerExperience::default();

    set_experience(&mut player, &curve, 352 + 10);
    assert_eq!(player.level(), 16);
    assert_eq!(points_in_level(&player, &curve), 10);
}

#[test]
fn set_experience_discards_previous_state() {
    let curve = LevelCurve::vanilla();
    let mut player = PlayerExperience::new(40, 0.75);

    set_experience(&mut player, &curve, 8);
    assert_eq!(player.level(), 1);
    assert_eq!(points_in_level(&player, &curve), 1);
}

#[test]
fn removing_more_than_held_levels_down() {
    init_tracing();
    let curve = LevelCurve::vanilla();
    let mut player = PlayerExperience::default();
    set_experience(&mut player, &curve, 7 + 9 + 4);
    assert_eq!(player.level(), 2);

    remove_experience(&mut player, &curve, 6);
    assert_eq!(player.level(), 1);
    assert_eq!(points_in_level(&player, &curve), 7);
}

#[test]
fn level_never_drops_below_zero() {
    let curve = LevelCurve::vanilla();
    let mut player = PlayerExperience::default();
    set_experience(&mut player, &curve, 10);

    remove_experience(&mut player, &curve, 1_000);
    assert_eq!(player.level(), 0);
    assert_eq!(player.progress(), 0.0);
}

#[test]
fn add_then_remove_is_symmetric() {
    let curve = LevelCurve::vanilla();
    let mut player = PlayerExperience::default();
    set_experience(&mut player, &curve, 500);

    add_experience(&mut player, &curve, 1_234);
    remove_experience(&mut player, &curve, 1_234);

    let mut expected = PlayerExperience::default();
    set_experience(&mut expected, &curve, 500);
    assert_eq!(player.level(), expected.level());
    assert_eq!(
        points_in_level(&player, &curve),
        points_in_level(&expected, &curve)
    );
}

#[test]
fn custom_curve_from_toml_is_honored() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let path = dir.join("tests/data/steep_curve.toml");
    let curve = CurveLoader::load(&path).expect("curve file should load");

    assert_eq!(curve.experience_to_next(0), 10);
    assert_eq!(curve.experience_to_next(4), 10);
    assert_eq!(curve.experience_to_next(5), 30);

    let mut player = PlayerExperience::default();
    set_experience(&mut player, &curve, 50 + 30 + 5);
    assert_eq!(player.level(), 6);
    assert_eq!(points_in_level(&player, &curve), 5);

    let content = std::fs::read_to_string(&path).unwrap();
    let inline = LevelCurve::from_toml_str(&content).unwrap();
    assert_eq!(inline, curve);
}
