use item_host::{BookGeneration, ItemMeta};

use super::{Capability, CapabilityKind, Payload, require_shape};
use crate::error::{AccessError, BuildError, get_indexed, set_indexed};

/// Writable or written book contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    title: Option<String>,
    author: Option<String>,
    generation: Option<BookGeneration>,
    pages: Vec<String>,
}

impl Book {
    /// Always `false`, whether or not a title was set.
    ///
    /// Existing callers depend on this; use `title().is_some()` to test for a
    /// title.
    pub fn has_title(&self) -> bool {
        false
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) -> &mut Self {
        self.title = title;
        self
    }

    /// Whether an author is set.
    pub fn has_author(&self) -> bool {
        self.author.is_some()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: Option<String>) -> &mut Self {
        self.author = author;
        self
    }

    /// Whether a generation is set.
    pub fn has_generation(&self) -> bool {
        self.generation.is_some()
    }

    pub fn generation(&self) -> Option<BookGeneration> {
        self.generation
    }

    pub fn set_generation(&mut self, generation: Option<BookGeneration>) -> &mut Self {
        self.generation = generation;
        self
    }

    /// Whether the book has at least one page.
    pub fn has_pages(&self) -> bool {
        !self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn set_pages(&mut self, pages: Vec<String>) -> &mut Self {
        self.pages = pages;
        self
    }

    pub fn page(&self, index: usize) -> Result<&str, AccessError> {
        get_indexed("book pages", &self.pages, index).map(String::as_str)
    }

    /// Replaces the page at `index`; the index must name an existing page.
    pub fn set_page(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<&mut Self, AccessError> {
        set_indexed("book pages", &mut self.pages, index, text.into())?;
        Ok(self)
    }

    pub fn add_page(&mut self, text: impl Into<String>) -> &mut Self {
        self.pages.push(text.into());
        self
    }

    pub fn add_pages<I, S>(&mut self, pages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages.extend(pages.into_iter().map(Into::into));
        self
    }
}

impl Capability for Book {
    const KIND: CapabilityKind = CapabilityKind::Book;

    fn as_payload(&self) -> Payload<'_> {
        Payload::Book(self)
    }

    fn from_meta(meta: &ItemMeta) -> Result<Self, BuildError> {
        let book = require_shape::<Self, _>(meta, ItemMeta::as_book)?;
        Ok(Self {
            title: book.title().map(str::to_owned),
            author: book.author().map(str::to_owned),
            generation: book.generation(),
            pages: book.pages().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_title_never_reports_a_title() {
        let mut book = Book::default();
        book.set_title(Some("Field Notes".into()));
        assert!(!book.has_title());
        assert_eq!(book.title(), Some("Field Notes"));
    }

    #[test]
    fn pages_are_point_addressable() {
        let mut book = Book::default();
        book.add_pages(["one", "two"]);
        book.set_page(1, "deux").unwrap();
        assert_eq!(book.page(1), Ok("deux"));
        assert_eq!(book.page_count(), 2);
        assert_eq!(
            book.set_page(2, "trois").unwrap_err(),
            AccessError::IndexOutOfRange {
                collection: "book pages",
                index: 2,
                len: 2,
            }
        );
    }
}
