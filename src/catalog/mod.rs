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

//! Book catalog organized by genre
//!
//! # Layout
//! - [`models`] - catalog entries ([`Book`], [`ReadStatus`], [`Rating`])
//! - [`shelf`] - one genre's books in insertion order ([`Shelf`])
//! - [`library`] - the genre-keyed catalog and its operations ([`Library`])
//! - [`shared`] - lock-guarded handle for async callers ([`SharedLibrary`])
//!
//! # Usage Example
//! ```
//! use book_catalog::catalog::{Library, ReadStatus};
//!
//! let mut library = Library::new();
//! library.add_book("Dune", "Herbert", "SciFi", None, None);
//! library.add_book("Foundation", "Asimov", "SciFi", Some(ReadStatus::Read), None);
//!
//! assert_eq!(library.count_unread_books(), 1);
//! assert_eq!(library.search_books("dune").len(), 1);
//! assert!(library.delete_book("Dune").is_deleted());
//! assert!(library.search_books("dune").is_empty());
//! ```

pub mod library;
pub mod models;
pub mod shared;
pub mod shelf;

// Re-export commonly used types
pub use library::{render_results, Added, DeleteOutcome, Library, Listing};
pub use models::{Book, Rating, ReadStatus};
pub use shared::SharedLibrary;
pub use shelf::Shelf;
