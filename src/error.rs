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

//! Error types for BookCatalog
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors are categorized by domain (catalog lookups, configuration, external
//! libraries) for better error handling and reporting.
//!
//! ## What is (and is not) an error
//!
//! The catalog itself is almost total: adding, searching, counting and
//! listing never fail. The one miss that exists, deleting a title nobody
//! holds, is reported through [`crate::catalog::DeleteOutcome::NotFound`]
//! rather than an error. Only the operations that must hand something back
//! (`take_book`, `books_in_genre`) turn a miss into a [`CatalogError`].
//!
//! Configuration loading is the other source of errors: missing files,
//! malformed JSON and values that fail validation.

use thiserror::Error;

/// Result type alias using our CatalogError type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for BookCatalog
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== Catalog Errors =====

    /// No genre shelf holds a book with this exact title
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// No shelf exists for this genre name
    #[error("Genre not found: {0}")]
    GenreNotFound(String),

    // ===== Configuration Errors =====

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Configuration file does not exist
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    // ===== External Library Errors =====
    // Automatic conversions from external error types

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper methods for creating common errors
impl CatalogError {
    /// Create a BookNotFound error for a title
    pub fn not_found<S: Into<String>>(title: S) -> Self {
        CatalogError::BookNotFound(title.into())
    }

    /// Create an InvalidConfiguration error with a message
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        CatalogError::InvalidConfiguration(message.into())
    }

    /// Check if error is a catalog lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::BookNotFound(_) | CatalogError::GenreNotFound(_)
        )
    }

    /// Check if error came from loading or validating configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfiguration(_)
                | CatalogError::ConfigNotFound(_)
                | CatalogError::SerdeJsonError(_)
        )
    }

    /// Get user-friendly error message suitable for display
    ///
    /// Lookup misses use the same wording the catalog prints for a failed
    /// delete, so callers can show either without special casing.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::BookNotFound(title) => format!("Book '{}' not found.", title),
            CatalogError::GenreNotFound(genre) => format!("Genre '{}' not found.", genre),
            CatalogError::ConfigNotFound(path) => {
                format!("No configuration file at '{}'. Defaults will be used if you omit it.", path)
            }
            _ => self.to_string(),
        }
    }
}

// ===== IMPLEMENTATION NOTES =====
//
// - Return Result<T> = std::result::Result<T, CatalogError> from fallible
//   library functions; anyhow stays in binaries and demos.
// - A failed delete is an ordinary outcome, not an error:
//
//   ```rust
//   match library.delete_book("Dune") {
//       DeleteOutcome::Deleted { .. } => {}
//       DeleteOutcome::NotFound { title } => eprintln!("missing: {}", title),
//   }
//   ```
//
// - Use take_book when the removed record is needed:
//
//   ```rust
//   let book = library.take_book("Dune")?; // BookNotFound on a miss
//   ```
