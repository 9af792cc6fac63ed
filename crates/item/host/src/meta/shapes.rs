//! Shape-specific parts of an attribute record.
//!
//! Each record is reachable only through the matching cast on
//! [`ItemMeta`](super::ItemMeta).

use std::collections::BTreeMap;

use crate::banner::Pattern;
use crate::color::{Color, DyeColor};
use crate::config::ItemConfig;
use crate::enchantment::Enchantment;
use crate::entity::{AxolotlVariant, TropicalFishPattern};
use crate::firework::FireworkEffect;
use crate::key::NamespacedKey;
use crate::potion::{PotionData, PotionEffect, PotionEffectType};
use crate::stack::ItemStack;
use crate::world::{Location, MapView, PlayerProfile};

// ============================================================================
// Facets shared by several shapes
// ============================================================================

/// Durability facet, present on records of damageable materials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageableMeta {
    damage: i32,
}

impl DamageableMeta {
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// The host treats a damage of 0 as "undamaged".
    pub fn has_damage(&self) -> bool {
        self.damage > 0
    }

    pub fn set_damage(&mut self, damage: i32) {
        self.damage = damage;
    }
}

/// Anvil repair-cost facet, present on every record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepairableMeta {
    cost: i32,
}

impl RepairableMeta {
    pub fn repair_cost(&self) -> i32 {
        self.cost
    }

    /// The host treats a cost of 0 as "no cost recorded".
    pub fn has_repair_cost(&self) -> bool {
        self.cost > 0
    }

    pub fn set_repair_cost(&mut self, cost: i32) {
        self.cost = cost;
    }
}

// ============================================================================
// Shapes
// ============================================================================

/// Axolotl carried in a bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxolotlBucketMeta {
    variant: Option<AxolotlVariant>,
}

impl AxolotlBucketMeta {
    pub fn variant(&self) -> Option<AxolotlVariant> {
        self.variant
    }

    pub fn has_variant(&self) -> bool {
        self.variant.is_some()
    }

    pub fn set_variant(&mut self, variant: Option<AxolotlVariant>) {
        self.variant = variant;
    }
}

/// Banner layers, bottom layer first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BannerMeta {
    patterns: Vec<Pattern>,
}

impl BannerMeta {
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn set_patterns(&mut self, patterns: Vec<Pattern>) {
        self.patterns = patterns;
    }

    pub fn add_pattern(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// Layer at `index`, or `None` past the top layer.
    pub fn pattern(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn number_of_patterns(&self) -> usize {
        self.patterns.len()
    }
}

/// How many times a written book has been copied.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BookGeneration {
    #[default]
    Original,
    CopyOfOriginal,
    CopyOfCopy,
    Tattered,
}

/// Writable and written book contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookMeta {
    title: Option<String>,
    author: Option<String>,
    generation: Option<BookGeneration>,
    pages: Vec<String>,
}

impl BookMeta {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn has_author(&self) -> bool {
        self.author.is_some()
    }

    pub fn set_author(&mut self, author: Option<String>) {
        self.author = author;
    }

    pub fn generation(&self) -> Option<BookGeneration> {
        self.generation
    }

    pub fn set_generation(&mut self, generation: Option<BookGeneration>) {
        self.generation = generation;
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn has_pages(&self) -> bool {
        !self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn set_pages(&mut self, pages: Vec<String>) {
        self.pages = pages;
    }

    pub fn add_pages<I, S>(&mut self, pages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages.extend(pages.into_iter().map(Into::into));
    }
}

/// Stacks held inside a bundle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BundleMeta {
    items: Vec<ItemStack>,
}

impl BundleMeta {
    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn set_items(&mut self, items: Vec<ItemStack>) {
        self.items = items;
    }

    pub fn add_item(&mut self, item: ItemStack) {
        self.items.push(item);
    }
}

/// Lodestone binding of a compass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompassMeta {
    lodestone: Option<Location>,
    tracked: bool,
}

impl CompassMeta {
    pub fn lodestone(&self) -> Option<&Location> {
        self.lodestone.as_ref()
    }

    pub fn has_lodestone(&self) -> bool {
        self.lodestone.is_some()
    }

    pub fn set_lodestone(&mut self, lodestone: Option<Location>) {
        self.lodestone = lodestone;
    }

    /// Whether the compass stops pointing once the lodestone is gone.
    pub fn is_lodestone_tracked(&self) -> bool {
        self.tracked
    }

    pub fn set_lodestone_tracked(&mut self, tracked: bool) {
        self.tracked = tracked;
    }
}

/// Projectiles loaded into a crossbow.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossbowMeta {
    projectiles: Vec<ItemStack>,
}

impl CrossbowMeta {
    pub fn charged_projectiles(&self) -> &[ItemStack] {
        &self.projectiles
    }

    pub fn has_charged_projectiles(&self) -> bool {
        !self.projectiles.is_empty()
    }

    pub fn set_charged_projectiles(&mut self, projectiles: Vec<ItemStack>) {
        self.projectiles = projectiles;
    }

    pub fn add_charged_projectile(&mut self, projectile: ItemStack) {
        self.projectiles.push(projectile);
    }
}

/// Enchantments stored in an enchanted book, applied through an anvil.
///
/// Separate from the enchantments on the stack itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentStorageMeta {
    stored: BTreeMap<Enchantment, i32>,
}

impl EnchantmentStorageMeta {
    pub fn stored_enchants(&self) -> &BTreeMap<Enchantment, i32> {
        &self.stored
    }

    pub fn has_stored_enchants(&self) -> bool {
        !self.stored.is_empty()
    }

    pub fn has_stored_enchant(&self, enchantment: Enchantment) -> bool {
        self.stored.contains_key(&enchantment)
    }

    pub fn stored_enchant_level(&self, enchantment: Enchantment) -> Option<i32> {
        self.stored.get(&enchantment).copied()
    }

    /// Returns `true` when the stored table changed.
    pub fn add_stored_enchant(&mut self, enchantment: Enchantment, level: i32) -> bool {
        self.stored.insert(enchantment, level) != Some(level)
    }

    /// Returns `true` when an entry was removed.
    pub fn remove_stored_enchant(&mut self, enchantment: Enchantment) -> bool {
        self.stored.remove(&enchantment).is_some()
    }
}

/// Single explosion carried by a firework star.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireworkEffectMeta {
    effect: Option<FireworkEffect>,
}

impl FireworkEffectMeta {
    pub fn effect(&self) -> Option<&FireworkEffect> {
        self.effect.as_ref()
    }

    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    pub fn set_effect(&mut self, effect: Option<FireworkEffect>) {
        self.effect = effect;
    }
}

/// Explosions and flight power of a firework rocket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireworkMeta {
    effects: Vec<FireworkEffect>,
    power: i32,
}

impl FireworkMeta {
    pub fn effects(&self) -> &[FireworkEffect] {
        &self.effects
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn add_effect(&mut self, effect: FireworkEffect) {
        self.effects.push(effect);
    }

    pub fn add_effects(&mut self, effects: impl IntoIterator<Item = FireworkEffect>) {
        self.effects.extend(effects);
    }

    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn set_power(&mut self, power: i32) {
        self.power = power;
    }
}

/// Recipe keys a knowledge book unlocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeBookMeta {
    recipes: Vec<NamespacedKey>,
}

impl KnowledgeBookMeta {
    pub fn recipes(&self) -> &[NamespacedKey] {
        &self.recipes
    }

    pub fn has_recipes(&self) -> bool {
        !self.recipes.is_empty()
    }

    pub fn set_recipes(&mut self, recipes: Vec<NamespacedKey>) {
        self.recipes = recipes;
    }

    pub fn add_recipe(&mut self, recipe: NamespacedKey) {
        self.recipes.push(recipe);
    }
}

/// Dye color of leather armor.
///
/// Always reports a color; undyed armor reports
/// [`ItemConfig::DEFAULT_LEATHER_COLOR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeatherArmorMeta {
    color: Color,
}

impl LeatherArmorMeta {
    pub fn color(&self) -> Color {
        self.color
    }

    /// `None` restores the undyed leather color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color.unwrap_or(ItemConfig::DEFAULT_LEATHER_COLOR);
    }

    /// Whether the color differs from the undyed default.
    pub fn is_dyed(&self) -> bool {
        self.color != ItemConfig::DEFAULT_LEATHER_COLOR
    }
}

impl Default for LeatherArmorMeta {
    fn default() -> Self {
        Self {
            color: ItemConfig::DEFAULT_LEATHER_COLOR,
        }
    }
}

/// Filled map rendering options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapMeta {
    color: Option<Color>,
    location_name: Option<String>,
    map_view: Option<MapView>,
    scaling: bool,
}

impl MapMeta {
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn location_name(&self) -> Option<&str> {
        self.location_name.as_deref()
    }

    /// Whether a non-empty location name is set. An empty name counts as
    /// no name.
    pub fn has_location_name(&self) -> bool {
        self.location_name
            .as_deref()
            .is_some_and(|name| !name.is_empty())
    }

    pub fn set_location_name(&mut self, name: Option<String>) {
        self.location_name = name;
    }

    pub fn map_view(&self) -> Option<MapView> {
        self.map_view
    }

    pub fn has_map_view(&self) -> bool {
        self.map_view.is_some()
    }

    pub fn set_map_view(&mut self, map_view: Option<MapView>) {
        self.map_view = map_view;
    }

    pub fn is_scaling(&self) -> bool {
        self.scaling
    }

    pub fn set_scaling(&mut self, scaling: bool) {
        self.scaling = scaling;
    }
}

/// Inserts a custom effect keyed by kind.
///
/// An effect of the same kind is replaced only when `overwrite` is set; returns
/// `true` when the list changed.
fn insert_custom_effect(
    effects: &mut Vec<PotionEffect>,
    effect: PotionEffect,
    overwrite: bool,
) -> bool {
    let existing = effects.iter_mut().find(|e| e.kind == effect.kind);
    match existing {
        Some(existing) if overwrite => {
            let changed = *existing != effect;
            *existing = effect;
            changed
        }
        Some(_) => false,
        None => {
            effects.push(effect);
            true
        }
    }
}

fn remove_custom_effect(effects: &mut Vec<PotionEffect>, kind: PotionEffectType) -> bool {
    let before = effects.len();
    effects.retain(|effect| effect.kind != kind);
    effects.len() != before
}

/// Potion base type, custom effects and liquid color.
///
/// Custom effects are keyed by kind: at most one effect of each kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PotionMeta {
    base: PotionData,
    effects: Vec<PotionEffect>,
    color: Option<Color>,
}

impl PotionMeta {
    pub fn base_potion_data(&self) -> PotionData {
        self.base
    }

    pub fn set_base_potion_data(&mut self, data: PotionData) {
        self.base = data;
    }

    pub fn custom_effects(&self) -> &[PotionEffect] {
        &self.effects
    }

    pub fn has_custom_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn has_custom_effect(&self, kind: PotionEffectType) -> bool {
        self.effects.iter().any(|effect| effect.kind == kind)
    }

    /// Adds `effect`, replacing an effect of the same kind only when
    /// `overwrite` is set. Returns `true` when the effects changed.
    pub fn add_custom_effect(&mut self, effect: PotionEffect, overwrite: bool) -> bool {
        insert_custom_effect(&mut self.effects, effect, overwrite)
    }

    pub fn remove_custom_effect(&mut self, kind: PotionEffectType) -> bool {
        remove_custom_effect(&mut self.effects, kind)
    }

    pub fn clear_custom_effects(&mut self) -> bool {
        let had_effects = self.has_custom_effects();
        self.effects.clear();
        had_effects
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

/// Player whose head a skull shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkullMeta {
    owning_player: Option<PlayerProfile>,
}

impl SkullMeta {
    pub fn owning_player(&self) -> Option<&PlayerProfile> {
        self.owning_player.as_ref()
    }

    pub fn has_owner(&self) -> bool {
        self.owning_player.is_some()
    }

    pub fn set_owning_player(&mut self, owner: Option<PlayerProfile>) {
        self.owning_player = owner;
    }
}

/// Effects granted by a suspicious stew, keyed by kind like
/// [`PotionMeta`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuspiciousStewMeta {
    effects: Vec<PotionEffect>,
}

impl SuspiciousStewMeta {
    pub fn custom_effects(&self) -> &[PotionEffect] {
        &self.effects
    }

    pub fn has_custom_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    pub fn has_custom_effect(&self, kind: PotionEffectType) -> bool {
        self.effects.iter().any(|effect| effect.kind == kind)
    }

    pub fn add_custom_effect(&mut self, effect: PotionEffect, overwrite: bool) -> bool {
        insert_custom_effect(&mut self.effects, effect, overwrite)
    }

    pub fn remove_custom_effect(&mut self, kind: PotionEffectType) -> bool {
        remove_custom_effect(&mut self.effects, kind)
    }

    pub fn clear_custom_effects(&mut self) -> bool {
        let had_effects = self.has_custom_effects();
        self.effects.clear();
        had_effects
    }
}

/// Fish variant stored in a bucket.
///
/// The fields report host defaults until one of them is written; after that
/// the record counts as carrying a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TropicalFishBucketMeta {
    pattern: TropicalFishPattern,
    body_color: DyeColor,
    pattern_color: DyeColor,
    variant_set: bool,
}

impl TropicalFishBucketMeta {
    pub fn pattern(&self) -> TropicalFishPattern {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: TropicalFishPattern) {
        self.pattern = pattern;
        self.variant_set = true;
    }

    pub fn body_color(&self) -> DyeColor {
        self.body_color
    }

    pub fn set_body_color(&mut self, color: DyeColor) {
        self.body_color = color;
        self.variant_set = true;
    }

    pub fn pattern_color(&self) -> DyeColor {
        self.pattern_color
    }

    pub fn set_pattern_color(&mut self, color: DyeColor) {
        self.pattern_color = color;
        self.variant_set = true;
    }

    /// Whether any variant field has been written since the record was
    /// created.
    pub fn has_variant(&self) -> bool {
        self.variant_set
    }
}

impl Default for TropicalFishBucketMeta {
    fn default() -> Self {
        Self {
            pattern: TropicalFishPattern::default(),
            body_color: DyeColor::White,
            pattern_color: DyeColor::White,
            variant_set: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(kind: PotionEffectType, duration: i32) -> PotionEffect {
        PotionEffect::new(kind, duration, 0)
    }

    #[test]
    fn custom_effect_without_overwrite_keeps_first() {
        let mut meta = PotionMeta::default();
        let short = effect(PotionEffectType::Speed, 100);
        let long = effect(PotionEffectType::Speed, 400);

        assert!(meta.add_custom_effect(short, false));
        assert!(!meta.add_custom_effect(long, false));
        assert_eq!(meta.custom_effects(), &[short]);

        assert!(meta.add_custom_effect(long, true));
        assert_eq!(meta.custom_effects(), &[long]);
    }

    #[test]
    fn leather_color_resets_to_default() {
        let mut meta = LeatherArmorMeta::default();
        meta.set_color(Some(Color::RED));
        assert!(meta.is_dyed());
        meta.set_color(None);
        assert_eq!(meta.color(), ItemConfig::DEFAULT_LEATHER_COLOR);
        assert!(!meta.is_dyed());
    }

    #[test]
    fn fish_variant_is_reported_once_written() {
        let mut meta = TropicalFishBucketMeta::default();
        assert!(!meta.has_variant());
        meta.set_body_color(DyeColor::Orange);
        assert!(meta.has_variant());
        assert_eq!(meta.pattern(), TropicalFishPattern::Kob);
    }

    #[test]
    fn zero_cost_and_zero_damage_read_as_absent() {
        let mut repair = RepairableMeta::default();
        assert!(!repair.has_repair_cost());
        repair.set_repair_cost(3);
        assert!(repair.has_repair_cost());

        let mut durability = DamageableMeta::default();
        assert!(!durability.has_damage());
        durability.set_damage(12);
        assert_eq!(durability.damage(), 12);
    }
}
