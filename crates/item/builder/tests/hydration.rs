use item_builder::capability::{
    Book, Bundle, Crossbow, Damageable, KnowledgeBook, LeatherArmor, Plain, Potion, Repairable,
    TropicalFishBucket,
};
use item_builder::{BuildError, CapabilityKind, ItemBuilder};
use item_host::{
    BookGeneration, Color, DyeColor, Enchantment, ItemFlags, ItemStack, Material, NamespacedKey,
    PotionData, PotionType,
};

/// build -> from_stack -> build keeps name, lore and flags.
#[test]
fn common_attributes_round_trip() {
    let mut original: ItemBuilder =
        ItemBuilder::with_name_and_material("Walking Stick", Material::Stick);
    original
        .add_lore_lines(["l1", "l2"])
        .add_flag(ItemFlags::HIDE_UNBREAKABLE)
        .add_enchantment(Enchantment::Knockback, 2)
        .set_amount(4);

    let stack = original.build().expect("first build");
    let hydrated = ItemBuilder::<Plain>::from_stack(&stack).expect("hydrate");
    let rebuilt = hydrated.build().expect("second build");

    let meta = rebuilt.item_meta().unwrap();
    assert_eq!(meta.display_name(), Some("Walking Stick"));
    assert_eq!(meta.lore(), ["l1", "l2"]);
    assert_eq!(meta.flags(), ItemFlags::HIDE_UNBREAKABLE);
    assert_eq!(rebuilt, stack);
    assert_eq!(hydrated, original);
}

#[test]
fn book_payload_round_trips() {
    let mut book = ItemBuilder::<Book>::with_material(Material::WrittenBook);
    book.payload_mut()
        .set_title(Some("Almanac".into()))
        .set_author(Some("Archivist".into()))
        .set_generation(Some(BookGeneration::CopyOfOriginal))
        .add_pages(["spring", "summer"]);

    let stack = book.build().unwrap();
    let hydrated = ItemBuilder::<Book>::from_stack(&stack).unwrap();
    assert_eq!(hydrated.payload(), book.payload());
    assert!(!hydrated.payload().has_title());
    assert_eq!(hydrated.payload().title(), Some("Almanac"));
}

#[test]
fn hydrating_with_the_wrong_capability_fails() {
    let stack = ItemBuilder::<Potion>::with_material(Material::Potion)
        .build()
        .unwrap();

    let err = ItemBuilder::<Book>::from_stack(&stack).unwrap_err();
    assert_eq!(
        err,
        BuildError::CapabilityMismatch {
            capability: CapabilityKind::Book,
            material: Material::Potion,
        }
    );
    assert!(ItemBuilder::<Damageable>::from_stack(&stack).is_err());
}

#[test]
fn bare_stack_hydrates_from_a_fresh_record() {
    let stack = ItemStack::new(Material::LeatherChestplate, 1);
    let armor = ItemBuilder::<LeatherArmor>::from_stack(&stack).unwrap();
    assert_eq!(armor.payload().color(), None);
    assert_eq!(armor.name(), None);
    assert_eq!(armor.amount(), 1);

    let potion = ItemBuilder::<Potion>::from_stack(&ItemStack::new(Material::Potion, 1)).unwrap();
    assert_eq!(
        potion.payload().base_potion_data(),
        Some(PotionData::base(PotionType::Uncraftable))
    );
}

#[test]
fn air_hydrates_only_as_plain() {
    let air = ItemStack::new(Material::Air, 0);
    let plain = ItemBuilder::<Plain>::from_stack(&air).unwrap();
    assert_eq!(plain.material(), Some(Material::Air));
    assert_eq!(plain.amount(), 0);

    assert_eq!(
        ItemBuilder::<Bundle>::from_stack(&air).unwrap_err(),
        BuildError::CapabilityMismatch {
            capability: CapabilityKind::Bundle,
            material: Material::Air,
        }
    );
}

#[test]
fn zero_repair_cost_reads_back_as_unset() {
    let mut explicit_zero = ItemBuilder::<Repairable>::with_material(Material::Bow);
    explicit_zero.payload_mut().set_repair_cost(Some(0));
    let stack = explicit_zero.build().unwrap();
    let hydrated = ItemBuilder::<Repairable>::from_stack(&stack).unwrap();
    assert_eq!(hydrated.payload().repair_cost(), None);

    let mut costly = ItemBuilder::<Repairable>::with_material(Material::Bow);
    costly.payload_mut().set_repair_cost(Some(7));
    let stack = costly.build().unwrap();
    let hydrated = ItemBuilder::<Repairable>::from_stack(&stack).unwrap();
    assert_eq!(hydrated.payload().repair_cost(), Some(7));
}

#[test]
fn undamaged_reads_back_as_unset() {
    let sword = ItemBuilder::<Damageable>::with_material(Material::DiamondSword);
    let hydrated = ItemBuilder::<Damageable>::from_stack(&sword.build().unwrap()).unwrap();
    assert!(!hydrated.payload().has_damage());
}

#[test]
fn collections_survive_hydration() {
    let arrow = ItemStack::new(Material::Arrow, 1);
    let mut crossbow = ItemBuilder::<Crossbow>::with_material(Material::Crossbow);
    crossbow.payload_mut().add_charged_projectile(arrow.clone());
    let hydrated = ItemBuilder::<Crossbow>::from_stack(&crossbow.build().unwrap()).unwrap();
    assert_eq!(hydrated.payload().charged_projectile(0), Ok(&arrow));

    let recipe = NamespacedKey::minecraft("torch").unwrap();
    let mut knowledge = ItemBuilder::<KnowledgeBook>::with_material(Material::KnowledgeBook);
    knowledge.payload_mut().add_recipe(recipe.clone());
    let hydrated = ItemBuilder::<KnowledgeBook>::from_stack(&knowledge.build().unwrap()).unwrap();
    assert_eq!(hydrated.payload().recipes(), [recipe]);
}

#[test]
fn fish_variant_hydrates_all_fields() {
    let mut fish = ItemBuilder::<TropicalFishBucket>::with_material(Material::TropicalFishBucket);
    fish.payload_mut().set_pattern_color(Some(DyeColor::Orange));
    let hydrated = ItemBuilder::<TropicalFishBucket>::from_stack(&fish.build().unwrap()).unwrap();

    let payload = hydrated.payload();
    assert!(payload.has_variant());
    assert_eq!(payload.pattern_color(), Some(DyeColor::Orange));
    assert_eq!(payload.body_color(), Some(DyeColor::White));
}

#[test]
fn dyed_leather_hydrates_its_color() {
    let mut armor = ItemBuilder::<LeatherArmor>::with_material(Material::LeatherLeggings);
    armor.payload_mut().set_color(Some(Color::GREEN));
    let hydrated = ItemBuilder::<LeatherArmor>::from_stack(&armor.build().unwrap()).unwrap();
    assert_eq!(hydrated.payload().color(), Some(Color::GREEN));
}
