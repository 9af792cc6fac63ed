use std::collections::BTreeMap;

use item_builder::capability::{
    AxolotlBucket, Banner, Book, Compass, Damageable, EnchantmentStorage, Firework, FireworkEffect,
    LeatherArmor, Map, Potion, Repairable, Skull, SuspiciousStew, TropicalFishBucket,
};
use item_builder::{BuildError, CapabilityKind, ErrorCategory, ItemBuilder, ItemError};
use item_host::{
    AxolotlVariant, Color, DyeColor, Enchantment, FireworkType, ItemConfig, ItemFlags, Location,
    MapView, Material, Pattern, PatternType, PlayerProfile, PotionData, PotionEffect,
    PotionEffectType, PotionType, TropicalFishPattern,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Scenarios
// ============================================================================

/// Potion with a base, one custom effect and no color.
#[test]
fn potion_scenario() {
    init_tracing();

    let mut potion = ItemBuilder::<Potion>::with_material(Material::Potion);
    potion
        .payload_mut()
        .set_base_potion_data(Some(PotionData::new(PotionType::InstantHeal, false, false)))
        .add_custom_effect(PotionEffect::new(PotionEffectType::Regeneration, 100, 0));

    let stack = potion.build().expect("potion should build");
    let meta = stack.item_meta().expect("potion carries a record");
    let record = meta.as_potion().expect("record is a potion");

    let base = record.base_potion_data();
    assert_eq!(base.kind, PotionType::InstantHeal);
    assert!(!base.upgraded);
    assert_eq!(record.custom_effects().len(), 1);
    let effect = &record.custom_effects()[0];
    assert_eq!(effect.kind, PotionEffectType::Regeneration);
    assert_eq!(effect.duration, 100);
    assert!(!record.has_color());
}

/// Plain stick with an amount and a stack-level enchantment.
#[test]
fn plain_stick_scenario() {
    init_tracing();

    let mut stick: ItemBuilder = ItemBuilder::with_material(Material::Stick);
    stick
        .set_amount(3)
        .add_enchantment(Enchantment::Sharpness, 2);

    let stack = stick.build().expect("stick should build");
    assert_eq!(stack.amount(), 3);
    assert_eq!(stack.enchantment_level(Enchantment::Sharpness), Some(2));

    let meta = stack.item_meta().expect("stick carries a record");
    assert_eq!(meta.display_name(), None);
    assert_eq!(meta.visible_name(), "Stick");
}

// ============================================================================
// Assembly contract
// ============================================================================

#[test]
fn name_overrides_capability_label() {
    let mut book = ItemBuilder::<Book>::with_name_and_material("Override", Material::WrittenBook);
    book.payload_mut().set_title(Some("Original Title".into()));

    let meta = book.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.visible_name(), "Override");
    assert_eq!(meta.as_book().unwrap().title(), Some("Original Title"));

    let mut map = ItemBuilder::<Map>::with_name_and_material("Atlas", Material::FilledMap);
    map.payload_mut()
        .set_location_name(Some("North Camp".into()));
    let meta = map.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.visible_name(), "Atlas");
}

#[test]
fn unnamed_capability_label_shows_through() {
    let mut book = ItemBuilder::<Book>::with_material(Material::WrittenBook);
    book.payload_mut().set_title(Some("Field Notes".into()));
    let meta = book.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.visible_name(), "Field Notes");
}

#[test]
fn book_on_non_book_material_is_a_mismatch() {
    init_tracing();

    let mut book = ItemBuilder::<Book>::with_material(Material::Stick);
    book.payload_mut().add_page("lost words");

    let err = book.build().unwrap_err();
    assert_eq!(
        err,
        BuildError::CapabilityMismatch {
            capability: CapabilityKind::Book,
            material: Material::Stick,
        }
    );
    assert_eq!(err.category(), ErrorCategory::Capability);
    assert_eq!(err.error_code(), "BUILD_CAPABILITY_MISMATCH");
}

#[test]
fn damage_on_item_without_durability_is_a_mismatch() {
    let mut damageable = ItemBuilder::<Damageable>::with_material(Material::Apple);
    damageable.payload_mut().set_damage(Some(4));
    assert!(matches!(
        damageable.build(),
        Err(BuildError::CapabilityMismatch {
            capability: CapabilityKind::Damageable,
            ..
        })
    ));
}

#[test]
fn air_cannot_carry_a_record() {
    let air: ItemBuilder = ItemBuilder::with_material(Material::Air);
    let err = air.build().unwrap_err();
    assert_eq!(
        err,
        BuildError::MetaUnsupported {
            material: Material::Air,
        }
    );
    assert_eq!(err.error_code(), "BUILD_META_UNSUPPORTED");
}

#[test]
fn build_is_idempotent() {
    let mut banner = ItemBuilder::<Banner>::with_name_and_material("Standard", Material::RedBanner);
    banner
        .add_lore_lines(["Carried at the front"])
        .add_flag(ItemFlags::HIDE_ATTRIBUTES)
        .add_enchantment(Enchantment::Unbreaking, 1);
    banner.payload_mut().add_patterns([
        Pattern::new(DyeColor::White, PatternType::Cross),
        Pattern::new(DyeColor::Black, PatternType::Border),
    ]);

    let first = banner.build().unwrap();
    let second = banner.build().unwrap();
    assert_eq!(first, second);
}

#[test]
fn lore_replaces_and_flags_accumulate() {
    let mut builder: ItemBuilder = ItemBuilder::with_material(Material::Diamond);
    builder
        .add_lore_lines(["one", "two"])
        .add_flag(ItemFlags::HIDE_ENCHANTS)
        .add_flag(ItemFlags::HIDE_ENCHANTS)
        .add_flag(ItemFlags::HIDE_DYE);

    let meta = builder.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.lore(), ["one", "two"]);
    assert_eq!(meta.flags(), ItemFlags::HIDE_ENCHANTS | ItemFlags::HIDE_DYE);
}

#[test]
fn negative_amount_is_passed_through() {
    let mut builder: ItemBuilder = ItemBuilder::with_material(Material::Stone);
    builder.set_amount(-5);
    assert_eq!(builder.build().unwrap().amount(), -5);
}

// ============================================================================
// Capability writers
// ============================================================================

#[test]
fn potion_duplicates_collapse_to_first_at_build() {
    let mut potion = ItemBuilder::<Potion>::with_material(Material::SplashPotion);
    potion
        .payload_mut()
        .add_custom_effect(PotionEffect::new(PotionEffectType::Speed, 200, 0))
        .add_custom_effect(PotionEffect::new(PotionEffectType::Speed, 900, 2))
        .set_color(Some(Color::YELLOW));
    assert_eq!(potion.payload().custom_effects().len(), 2);

    let meta = potion.build().unwrap().item_meta().unwrap();
    let record = meta.as_potion().unwrap();
    assert_eq!(
        record.custom_effects(),
        [PotionEffect::new(PotionEffectType::Speed, 200, 0)]
    );
    assert_eq!(record.color(), Some(Color::YELLOW));
}

#[test]
fn stew_effects_are_written() {
    let mut stew = ItemBuilder::<SuspiciousStew>::with_material(Material::SuspiciousStew);
    stew.payload_mut()
        .add_custom_effect(PotionEffect::new(PotionEffectType::NightVision, 100, 0))
        .add_custom_effect(PotionEffect::new(PotionEffectType::Saturation, 7, 0));

    let meta = stew.build().unwrap().item_meta().unwrap();
    let record = meta.as_suspicious_stew().unwrap();
    assert!(record.has_custom_effect(PotionEffectType::NightVision));
    assert!(record.has_custom_effect(PotionEffectType::Saturation));
}

#[test]
fn stored_enchants_stay_off_the_stack() {
    let mut book = ItemBuilder::<EnchantmentStorage>::with_material(Material::EnchantedBook);
    book.payload_mut()
        .add_stored_enchant(Enchantment::Mending, 1)
        .add_stored_enchant(Enchantment::Protection, 4);

    let stack = book.build().unwrap();
    assert!(stack.enchantments().is_empty());

    let meta = stack.item_meta().unwrap();
    let record = meta.as_enchantment_storage().unwrap();
    assert_eq!(
        record.stored_enchants(),
        &BTreeMap::from([(Enchantment::Protection, 4), (Enchantment::Mending, 1)])
    );
}

#[test]
fn firework_power_and_effects() {
    let plain = item_host::FireworkEffect::new(FireworkType::Burst, vec![Color::RED]);
    let burst = plain.with_trail(true);
    let mut rocket = ItemBuilder::<Firework>::with_material(Material::FireworkRocket);
    rocket.payload_mut().set_power(2).add_effect(burst.clone());

    let meta = rocket.build().unwrap().item_meta().unwrap();
    let record = meta.as_firework().unwrap();
    assert_eq!(record.power(), 2);
    assert_eq!(record.effects(), std::slice::from_ref(&burst));

    let mut star = ItemBuilder::<FireworkEffect>::with_material(Material::FireworkStar);
    star.payload_mut().set_effect(Some(burst.clone()));
    let meta = star.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.as_firework_effect().unwrap().effect(), Some(&burst));
}

#[test]
fn leather_armor_without_color_stays_undyed() {
    let armor = ItemBuilder::<LeatherArmor>::with_material(Material::LeatherBoots);
    let meta = armor.build().unwrap().item_meta().unwrap();
    assert_eq!(
        meta.as_leather_armor().unwrap().color(),
        ItemConfig::DEFAULT_LEATHER_COLOR
    );

    let mut dyed = ItemBuilder::<LeatherArmor>::with_material(Material::LeatherHelmet);
    dyed.payload_mut().set_color(Some(Color::BLUE));
    let meta = dyed.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.as_leather_armor().unwrap().color(), Color::BLUE);
}

#[test]
fn durability_and_repair_cost() {
    let mut sword = ItemBuilder::<Damageable>::with_material(Material::DiamondSword);
    sword.payload_mut().set_damage(Some(120));
    let meta = sword.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.as_damageable().unwrap().damage(), 120);

    let mut pickaxe = ItemBuilder::<Repairable>::with_material(Material::IronPickaxe);
    pickaxe.payload_mut().set_repair_cost(Some(5));
    let meta = pickaxe.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.as_repairable().unwrap().repair_cost(), 5);
}

#[test]
fn world_references_are_written() {
    let mut compass = ItemBuilder::<Compass>::with_material(Material::Compass);
    compass
        .payload_mut()
        .set_lodestone(Some(Location::new("overworld", 10.5, 64.0, -3.2)))
        .set_lodestone_tracked(true);
    let meta = compass.build().unwrap().item_meta().unwrap();
    let record = meta.as_compass().unwrap();
    assert_eq!(record.lodestone().unwrap().block(), (10, 64, -4));
    assert!(record.is_lodestone_tracked());

    let mut skull = ItemBuilder::<Skull>::with_material(Material::PlayerHead);
    skull
        .payload_mut()
        .set_owning_player(Some(PlayerProfile::named(7, "Steve")));
    let meta = skull.build().unwrap().item_meta().unwrap();
    let owner = meta.as_skull().unwrap().owning_player().unwrap();
    assert_eq!(owner.name.as_deref(), Some("Steve"));

    let mut map = ItemBuilder::<Map>::with_material(Material::FilledMap);
    map.payload_mut()
        .set_map_view(Some(MapView(12)))
        .set_scaling(true);
    let meta = map.build().unwrap().item_meta().unwrap();
    assert_eq!(meta.as_map().unwrap().map_view(), Some(MapView(12)));
    assert!(meta.as_map().unwrap().is_scaling());
}

#[test]
fn buckets_write_their_variants() {
    let mut axolotl = ItemBuilder::<AxolotlBucket>::with_material(Material::AxolotlBucket);
    axolotl
        .payload_mut()
        .set_variant(Some(AxolotlVariant::Blue));
    let meta = axolotl.build().unwrap().item_meta().unwrap();
    assert_eq!(
        meta.as_axolotl_bucket().unwrap().variant(),
        Some(AxolotlVariant::Blue)
    );

    let mut fish = ItemBuilder::<TropicalFishBucket>::with_material(Material::TropicalFishBucket);
    fish.payload_mut()
        .set_pattern(Some(TropicalFishPattern::Glitter))
        .set_body_color(Some(DyeColor::Cyan));
    let meta = fish.build().unwrap().item_meta().unwrap();
    let record = meta.as_tropical_fish_bucket().unwrap();
    assert!(record.has_variant());
    assert_eq!(record.pattern(), TropicalFishPattern::Glitter);
    assert_eq!(record.body_color(), DyeColor::Cyan);
    assert_eq!(record.pattern_color(), DyeColor::White);

    let untouched = ItemBuilder::<TropicalFishBucket>::with_material(Material::TropicalFishBucket);
    let meta = untouched.build().unwrap().item_meta().unwrap();
    assert!(!meta.as_tropical_fish_bucket().unwrap().has_variant());
}
