use item_host::{ItemMeta, NamespacedKey};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::{AccessError, BuildError, get_indexed, set_indexed};

/// Recipes unlocked when a knowledge book is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeBook {
    recipes: Vec<NamespacedKey>,
}

impl KnowledgeBook {
    /// Whether any recipe is listed.
    pub fn has_recipes(&self) -> bool {
        !self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[NamespacedKey] {
        &self.recipes
    }

    pub fn set_recipes(&mut self, recipes: Vec<NamespacedKey>) -> &mut Self {
        self.recipes = recipes;
        self
    }

    pub fn recipe(&self, index: usize) -> Result<&NamespacedKey, AccessError> {
        get_indexed("recipes", &self.recipes, index)
    }

    /// Replaces the recipe at `index`; the index must name an existing recipe.
    pub fn set_recipe(
        &mut self,
        index: usize,
        recipe: NamespacedKey,
    ) -> Result<&mut Self, AccessError> {
        set_indexed("recipes", &mut self.recipes, index, recipe)?;
        Ok(self)
    }

    pub fn add_recipe(&mut self, recipe: NamespacedKey) -> &mut Self {
        self.recipes.push(recipe);
        self
    }

    pub fn add_recipes(&mut self, recipes: impl IntoIterator<Item = NamespacedKey>) -> &mut Self {
        self.recipes.extend(recipes);
        self
    }
}

impl Capability for KnowledgeBook {
    const KIND: CapabilityKind = CapabilityKind::KnowledgeBook;

    fn as_payload(&self) -> Payload<'_> {
        Payload::KnowledgeBook(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let book = require_shape::<Self, _>(meta, ItemMeta::as_knowledge_book)?;
        Ok(Self {
            recipes: book.recipes().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> NamespacedKey {
        NamespacedKey::minecraft(name).unwrap()
    }

    #[test]
    fn set_recipe_needs_an_existing_slot() {
        let mut book = KnowledgeBook::default();
        book.add_recipes([key("torch"), key("ladder")]);

        book.set_recipe(1, key("chest")).unwrap();
        assert_eq!(book.recipe(1), Ok(&key("chest")));

        assert_eq!(
            book.set_recipe(2, key("barrel")).unwrap_err(),
            AccessError::IndexOutOfRange {
                collection: "recipes",
                index: 2,
                len: 2,
            }
        );
        assert_eq!(book.recipes(), &[key("torch"), key("chest")]);
    }
}
