use serde::{Deserialize, Serialize};

use shelfguard_core::{DomainResult, Entity};

use crate::isbn::Isbn;

/// Entity: a book, identified by its ISBN.
///
/// Holds the ISBN by value, so a `Book` can only exist with a validated
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    isbn: Isbn,
    title: String,
}

impl Book {
    /// Validate `raw_isbn` and build the book around it.
    pub fn new(raw_isbn: &str, title: impl Into<String>) -> DomainResult<Self> {
        let isbn = Isbn::parse(raw_isbn)?;
        Ok(Self::from_isbn(isbn, title))
    }

    pub fn from_isbn(isbn: Isbn, title: impl Into<String>) -> Self {
        Self {
            isbn,
            title: title.into(),
        }
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Entity for Book {
    type Id = Isbn;

    fn id(&self) -> &Self::Id {
        &self.isbn
    }
}

impl core::fmt::Display for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.isbn, f)
    }
}
