//! Book (catalogue record) model

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;
use validator::Validate;

/// Exactly thirteen ASCII digits, nothing before or after.
static ISBN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{13}$").expect("ISBN pattern is a valid regex")
});

/// A single book in the catalogue.
///
/// The identifier is assigned once when the record is built and is the
/// store's primary key. All other fields are replaced as a whole on update.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[validate(regex(path = *ISBN_REGEX, message = "ISBN must be exactly 13 digits"))]
    pub isbn: String,
    pub published_year: i32,
}

impl Book {
    /// Build a new record with a freshly generated identifier
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        published_year: i32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, author, isbn, published_year)
    }

    /// Build a record with a caller-supplied identifier
    pub fn with_id(
        id: Uuid,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        published_year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            published_year,
        }
    }

    pub fn has_valid_isbn(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Catalogue listing line: `{id} | {title} by {author} ({year}) - ISBN: {isbn}`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} by {} ({}) - ISBN: {}",
            self.id, self.title, self.author, self.published_year, self.isbn
        )
    }
}
