//! Item descriptors assembled into host item stacks.
//!
//! An [`ItemBuilder`] holds the attributes common to every item (name,
//! amount, material, enchantments, lore, display flags) plus one capability
//! payload chosen by its type parameter: a book's pages, a potion's effects,
//! a banner's patterns, and so on. [`ItemBuilder::build`] turns the
//! descriptor into an [`item_host::ItemStack`], failing loudly when the
//! capability does not fit the material.
//!
//! ```
//! use item_builder::{ItemBuilder, capability::Book};
//! use item_host::Material;
//!
//! let mut book = ItemBuilder::<Book>::with_material(Material::WrittenBook);
//! book.set_name(Some("Ledger".into()));
//! book.payload_mut().set_author(Some("Quartermaster".into())).add_page("Day one");
//!
//! let stack = book.build().unwrap();
//! let meta = stack.item_meta().unwrap();
//! assert_eq!(meta.visible_name(), "Ledger");
//! assert_eq!(meta.as_book().unwrap().pages(), ["Day one"]);
//! ```

mod assembly;
mod attributes;
mod builder;
pub mod capability;
pub mod error;

pub use attributes::ItemAttributes;
pub use builder::ItemBuilder;
pub use capability::{Capability, CapabilityKind, Payload};
pub use error::{AccessError, BuildError, ErrorCategory, ItemError};
