//! Assembly of a descriptor into a host item stack.
//!
//! [`assemble`] is the only place that knows how each capability maps onto
//! the host record. Dispatch is an exhaustive match over [`Payload`]; every
//! arm hands the payload to a writer that casts the record to the shape it
//! needs and copies the payload's fields across.

use item_host::{ItemMeta, ItemStack};

use crate::attributes::ItemAttributes;
use crate::capability::{
    AxolotlBucket, Banner, Book, Bundle, Compass, Crossbow, Damageable, EnchantmentStorage,
    Firework, FireworkEffect, KnowledgeBook, LeatherArmor, Map, Payload, Potion, Repairable, Skull,
    SuspiciousStew, TropicalFishBucket, require_shape_mut,
};
use crate::error::BuildError;

/// Builds a fresh stack from `attributes` and `payload`.
///
/// Steps, in order:
/// 1. Allocate a stack of the material and amount.
/// 2. Take its attribute record.
/// 3. Write the capability payload onto the record.
/// 4. Overlay name, lore and flags, then attach the record.
/// 5. Apply enchantments at stack level.
pub(crate) fn assemble(
    attributes: &ItemAttributes,
    payload: Payload<'_>,
) -> Result<ItemStack, BuildError> {
    let material = attributes.material.ok_or(BuildError::MissingMaterial)?;
    let kind = payload.kind();
    tracing::debug!(
        "Assembling {} x{} with {} capability",
        material,
        attributes.amount,
        kind
    );

    let mut stack = ItemStack::new(material, attributes.amount);
    let mut meta = stack
        .item_meta()
        .ok_or(BuildError::MetaUnsupported { material })?;

    if let Err(err) = write_payload(payload, &mut meta) {
        tracing::warn!("Rejected {} capability on {}: {}", kind, material, err);
        return Err(err);
    }

    attributes.overlay(&mut meta);
    stack.set_item_meta(meta)?;
    stack.add_enchantments(&attributes.enchantments);

    Ok(stack)
}

fn write_payload(payload: Payload<'_>, meta: &mut ItemMeta) -> Result<(), BuildError> {
    match payload {
        Payload::Plain => Ok(()),
        Payload::AxolotlBucket(bucket) => write_axolotl_bucket(bucket, meta),
        Payload::Banner(banner) => write_banner(banner, meta),
        Payload::Book(book) => write_book(book, meta),
        Payload::Bundle(bundle) => write_bundle(bundle, meta),
        Payload::Compass(compass) => write_compass(compass, meta),
        Payload::Crossbow(crossbow) => write_crossbow(crossbow, meta),
        Payload::Damageable(damageable) => write_damageable(damageable, meta),
        Payload::EnchantmentStorage(storage) => write_enchantment_storage(storage, meta),
        Payload::FireworkEffect(star) => write_firework_effect(star, meta),
        Payload::Firework(rocket) => write_firework(rocket, meta),
        Payload::KnowledgeBook(book) => write_knowledge_book(book, meta),
        Payload::LeatherArmor(armor) => write_leather_armor(armor, meta),
        Payload::Map(map) => write_map(map, meta),
        Payload::Potion(potion) => write_potion(potion, meta),
        Payload::Repairable(repairable) => write_repairable(repairable, meta),
        Payload::Skull(skull) => write_skull(skull, meta),
        Payload::SuspiciousStew(stew) => write_suspicious_stew(stew, meta),
        Payload::TropicalFishBucket(bucket) => write_tropical_fish_bucket(bucket, meta),
    }
}

// ============================================================================
// Writers
// ============================================================================

fn write_axolotl_bucket(bucket: &AxolotlBucket, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<AxolotlBucket, _>(meta, ItemMeta::as_axolotl_bucket_mut)?;
    record.set_variant(bucket.variant());
    Ok(())
}

fn write_banner(banner: &Banner, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Banner, _>(meta, ItemMeta::as_banner_mut)?;
    record.set_patterns(banner.patterns().to_vec());
    Ok(())
}

fn write_book(book: &Book, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Book, _>(meta, ItemMeta::as_book_mut)?;
    record.set_pages(book.pages().to_vec());
    record.set_title(book.title().map(str::to_owned));
    record.set_author(book.author().map(str::to_owned));
    record.set_generation(book.generation());
    Ok(())
}

fn write_bundle(bundle: &Bundle, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Bundle, _>(meta, ItemMeta::as_bundle_mut)?;
    record.set_items(bundle.items().to_vec());
    Ok(())
}

fn write_compass(compass: &Compass, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Compass, _>(meta, ItemMeta::as_compass_mut)?;
    record.set_lodestone(compass.lodestone().cloned());
    record.set_lodestone_tracked(compass.is_lodestone_tracked());
    Ok(())
}

fn write_crossbow(crossbow: &Crossbow, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Crossbow, _>(meta, ItemMeta::as_crossbow_mut)?;
    record.set_charged_projectiles(crossbow.charged_projectiles().to_vec());
    Ok(())
}

fn write_damageable(damageable: &Damageable, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Damageable, _>(meta, ItemMeta::as_damageable_mut)?;
    if let Some(damage) = damageable.damage() {
        record.set_damage(damage);
    }
    Ok(())
}

fn write_enchantment_storage(
    storage: &EnchantmentStorage,
    meta: &mut ItemMeta,
) -> Result<(), BuildError> {
    let record =
        require_shape_mut::<EnchantmentStorage, _>(meta, ItemMeta::as_enchantment_storage_mut)?;
    for (&enchantment, &level) in storage.stored_enchants() {
        record.add_stored_enchant(enchantment, level);
    }
    Ok(())
}

fn write_firework_effect(star: &FireworkEffect, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<FireworkEffect, _>(meta, ItemMeta::as_firework_effect_mut)?;
    record.set_effect(star.effect().cloned());
    Ok(())
}

fn write_firework(rocket: &Firework, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Firework, _>(meta, ItemMeta::as_firework_mut)?;
    record.set_power(rocket.power());
    record.add_effects(rocket.effects().iter().cloned());
    Ok(())
}

fn write_knowledge_book(book: &KnowledgeBook, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<KnowledgeBook, _>(meta, ItemMeta::as_knowledge_book_mut)?;
    record.set_recipes(book.recipes().to_vec());
    Ok(())
}

fn write_leather_armor(armor: &LeatherArmor, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<LeatherArmor, _>(meta, ItemMeta::as_leather_armor_mut)?;
    record.set_color(armor.color());
    Ok(())
}

fn write_map(map: &Map, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Map, _>(meta, ItemMeta::as_map_mut)?;
    record.set_color(map.color());
    record.set_location_name(map.location_name().map(str::to_owned));
    record.set_map_view(map.map_view());
    record.set_scaling(map.is_scaling());
    Ok(())
}

fn write_potion(potion: &Potion, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Potion, _>(meta, ItemMeta::as_potion_mut)?;
    if let Some(data) = potion.base_potion_data() {
        record.set_base_potion_data(data);
    }
    for effect in potion.custom_effects() {
        // Later effects of an already present kind are dropped by the host.
        record.add_custom_effect(*effect, false);
    }
    record.set_color(potion.color());
    Ok(())
}

fn write_repairable(repairable: &Repairable, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Repairable, _>(meta, ItemMeta::as_repairable_mut)?;
    if let Some(cost) = repairable.repair_cost() {
        record.set_repair_cost(cost);
    }
    Ok(())
}

fn write_skull(skull: &Skull, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<Skull, _>(meta, ItemMeta::as_skull_mut)?;
    record.set_owning_player(skull.owning_player().cloned());
    Ok(())
}

fn write_suspicious_stew(stew: &SuspiciousStew, meta: &mut ItemMeta) -> Result<(), BuildError> {
    let record = require_shape_mut::<SuspiciousStew, _>(meta, ItemMeta::as_suspicious_stew_mut)?;
    for effect in stew.custom_effects() {
        record.add_custom_effect(*effect, false);
    }
    Ok(())
}

fn write_tropical_fish_bucket(
    bucket: &TropicalFishBucket,
    meta: &mut ItemMeta,
) -> Result<(), BuildError> {
    let record =
        require_shape_mut::<TropicalFishBucket, _>(meta, ItemMeta::as_tropical_fish_bucket_mut)?;
    if let Some(pattern) = bucket.pattern() {
        record.set_pattern(pattern);
    }
    if let Some(color) = bucket.pattern_color() {
        record.set_pattern_color(color);
    }
    if let Some(color) = bucket.body_color() {
        record.set_body_color(color);
    }
    Ok(())
}
