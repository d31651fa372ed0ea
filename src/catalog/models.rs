// BookCatalog - Genre-organized reading list
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Catalog entry models
//!
//! A [`Book`] is one record in the catalog. It is built once by
//! [`crate::catalog::Library::add_book`] and never edited afterwards; the
//! only way to change a book is to delete it and add it again.
//!
//! # Loose input
//! - Status text other than `read`/`unread` is kept verbatim
//!   ([`ReadStatus::Other`]) and never counts as unread
//! - Ratings may be numbers or free text ([`Rating`])
//! - Empty titles and authors are accepted

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ENUMS
// ============================================================================

/// Reading status of a book
///
/// Serialized as the plain status word (`"read"`, `"unread"`, or whatever
/// text was supplied).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReadStatus {
    Read,
    #[default]
    Unread,
    /// Any other status word, stored exactly as given
    Other(String),
}

impl ReadStatus {
    /// Parse a status word
    ///
    /// Only the exact words `read` and `unread` are recognized. Anything
    /// else, including differently-cased or empty input, is kept as
    /// [`ReadStatus::Other`].
    pub fn parse(value: &str) -> Self {
        match value {
            "read" => ReadStatus::Read,
            "unread" => ReadStatus::Unread,
            other => ReadStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReadStatus::Read => "read",
            ReadStatus::Unread => "unread",
            ReadStatus::Other(text) => text,
        }
    }

    pub fn is_unread(&self) -> bool {
        matches!(self, ReadStatus::Unread)
    }
}

impl From<String> for ReadStatus {
    fn from(value: String) -> Self {
        ReadStatus::parse(&value)
    }
}

impl From<&str> for ReadStatus {
    fn from(value: &str) -> Self {
        ReadStatus::parse(value)
    }
}

impl From<ReadStatus> for String {
    fn from(status: ReadStatus) -> Self {
        match status {
            ReadStatus::Other(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUE OBJECTS
// ============================================================================

/// Optional rating attached to a book
///
/// Either a numeric score or free text such as `"5 stars"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Score(f64),
    Text(String),
}

impl Rating {
    /// Parse raw rating input
    ///
    /// Blank input means "no rating". Finite numbers become
    /// [`Rating::Score`]; everything else is kept as [`Rating::Text`].
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        match trimmed.parse::<f64>() {
            Ok(score) if score.is_finite() => Some(Rating::Score(score)),
            _ => Some(Rating::Text(value.to_string())),
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Rating::Score(score) => Some(*score),
            Rating::Text(_) => None,
        }
    }
}

impl From<f64> for Rating {
    fn from(score: f64) -> Self {
        Rating::Score(score)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{}", score),
            Rating::Text(text) => f.write_str(text),
        }
    }
}

// ============================================================================
// MAIN ENTITIES
// ============================================================================

/// One catalog entry
///
/// `genre` always equals the name of the shelf holding the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Lookup key for deletion (not required to be unique)
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub status: ReadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Book {
    /// Create an unread, unrated book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            status: ReadStatus::default(),
            rating: None,
        }
    }

    pub fn with_status(mut self, status: ReadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_rating(mut self, rating: Option<Rating>) -> Self {
        self.rating = rating;
        self
    }

    pub fn is_unread(&self) -> bool {
        self.status.is_unread()
    }

    /// Case-insensitive substring match against title or author
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    /// Check whether `keyword` occurs in the title or author, ignoring case
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.matches_lowercase(&keyword.to_lowercase())
    }
}

/// `title by author [status]`
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} [{}]", self.title, self.author, self.status)
    }
}
