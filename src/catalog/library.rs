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

//! Genre-organized catalog
//!
//! # Genre order
//! Genres are visited in the order they were first used. Deletion stops at
//! the first genre (in that order) holding the title, and search results
//! and listings follow the same order, so every operation is deterministic.
//!
//! Shelves are never dropped. A genre emptied by deletions keeps its place
//! and still shows up (header only) in listings.

use super::models::{Book, Rating, ReadStatus};
use super::shelf::Shelf;
use crate::config::LibraryConfig;
use crate::error::{CatalogError, Result};
use std::collections::HashMap;
use std::fmt;
use std::io;
use tracing::{debug, info};

/// Confirmation returned by [`Library::add_book`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub title: String,
    pub genre: String,
}

impl fmt::Display for Added {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book '{}' added to genre '{}'.", self.title, self.genre)
    }
}

/// Result of [`Library::delete_book`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { title: String, genre: String },
    NotFound { title: String },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted { .. })
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted { title, .. } => write!(f, "Book '{}' deleted.", title),
            DeleteOutcome::NotFound { title } => write!(f, "Book '{}' not found.", title),
        }
    }
}

/// In-memory book catalog keyed by genre
#[derive(Debug, Clone, Default)]
pub struct Library {
    config: LibraryConfig,

    /// Shelves in first-use order
    shelves: Vec<Shelf>,

    /// Genre name -> position in `shelves`
    index: HashMap<String, usize>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Add a book, creating its genre shelf on first use
    ///
    /// `status` falls back to the configured default status. Never fails and
    /// does not check for duplicate titles.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        status: Option<ReadStatus>,
        rating: Option<Rating>,
    ) -> Added {
        let status = status.unwrap_or_else(|| self.config.default_status.clone());
        let book = Book::new(title, author, genre)
            .with_status(status)
            .with_rating(rating);
        self.insert(book)
    }

    /// Add a prebuilt book to the shelf named by its `genre`
    pub fn insert(&mut self, book: Book) -> Added {
        let added = Added {
            title: book.title.clone(),
            genre: book.genre.clone(),
        };

        let shelf = self.shelf_mut_or_create(&book.genre);
        shelf.append(book);

        debug!(title = %added.title, genre = %added.genre, "Added book");
        added
    }

    fn shelf_mut_or_create(&mut self, genre: &str) -> &mut Shelf {
        let pos = match self.index.get(genre) {
            Some(&pos) => pos,
            None => {
                let pos = self.shelves.len();
                self.shelves.push(Shelf::new(genre));
                self.index.insert(genre.to_string(), pos);
                info!(genre = %genre, "Created genre shelf");
                pos
            }
        };
        &mut self.shelves[pos]
    }

    /// Delete the first book with this exact title
    ///
    /// Genres are tried in first-use order; the scan stops at the first
    /// removal.
    pub fn delete_book(&mut self, title: &str) -> DeleteOutcome {
        for shelf in &mut self.shelves {
            if shelf.remove_by_title(title) {
                debug!(title = %title, genre = %shelf.genre(), "Deleted book");
                return DeleteOutcome::Deleted {
                    title: title.to_string(),
                    genre: shelf.genre().to_string(),
                };
            }
        }

        debug!(title = %title, "Delete found no matching book");
        DeleteOutcome::NotFound {
            title: title.to_string(),
        }
    }

    /// Remove the first book with this exact title and return it
    pub fn take_book(&mut self, title: &str) -> Result<Book> {
        self.shelves
            .iter_mut()
            .find_map(|shelf| shelf.take_by_title(title))
            .ok_or_else(|| CatalogError::not_found(title))
    }

    /// Case-insensitive substring search over titles and authors
    ///
    /// Results are ordered by genre, then by insertion within a genre.
    pub fn search_books(&self, keyword: &str) -> Vec<Book> {
        let needle = keyword.to_lowercase();
        let results: Vec<Book> = self
            .shelves
            .iter()
            .flat_map(|shelf| shelf.iter())
            .filter(|book| book.matches_lowercase(&needle))
            .cloned()
            .collect();

        debug!(keyword = %keyword, matches = results.len(), "Searched catalog");
        results
    }

    /// Number of books whose status is exactly `unread`
    pub fn count_unread_books(&self) -> usize {
        let unread: usize = self.shelves.iter().map(Shelf::count_unread).sum();
        debug!(unread, "Counted unread books");
        unread
    }

    /// `Unread books: <n>`
    pub fn unread_summary(&self) -> String {
        format!("Unread books: {}", self.count_unread_books())
    }

    /// Write the full listing to `out`
    pub fn display_library<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.listing())
    }

    /// Full listing as a string
    pub fn render_library(&self) -> String {
        self.listing().to_string()
    }

    /// Borrowed view that formats the full listing
    pub fn listing(&self) -> Listing<'_> {
        Listing { library: self }
    }

    /// Genre names in first-use order
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.shelves.iter().map(Shelf::genre)
    }

    pub fn shelves(&self) -> impl Iterator<Item = &Shelf> {
        self.shelves.iter()
    }

    pub fn shelf(&self, genre: &str) -> Option<&Shelf> {
        self.index.get(genre).map(|&pos| &self.shelves[pos])
    }

    /// Snapshot of one genre's books in insertion order
    pub fn books_in_genre(&self, genre: &str) -> Result<Vec<Book>> {
        self.shelf(genre)
            .map(Shelf::to_vec)
            .ok_or_else(|| CatalogError::GenreNotFound(genre.to_string()))
    }

    /// Total number of books across all genres
    pub fn len(&self) -> usize {
        self.shelves.iter().map(Shelf::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.iter().all(Shelf::is_empty)
    }
}

/// Listing of every genre and its books
///
/// With genre headers enabled each genre starts with a blank line and a
/// `Genre: <name>` line. Each book is one line: prefix, then
/// `title by author [status]`.
pub struct Listing<'a> {
    library: &'a Library,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = &self.library.config.display;

        for shelf in &self.library.shelves {
            if display.show_genre_headers {
                write!(f, "\nGenre: {}\n", shelf.genre())?;
            }
            for book in shelf {
                write!(f, "{}{}", display.item_prefix, book)?;
                if display.show_rating {
                    if let Some(rating) = &book.rating {
                        write!(f, " (rating: {})", rating)?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Render search results one per line, or `No books found.`
pub fn render_results(results: &[Book]) -> String {
    if results.is_empty() {
        return "No books found.".to_string();
    }

    results
        .iter()
        .map(|book| format!(" - {}", book))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use pretty_assertions::assert_eq;

    fn sample_library() -> Library {
        let mut library = Library::new();
        library.add_book("Dune", "Frank Herbert", "SciFi", None, None);
        library.add_book("Emma", "Jane Austen", "Classics", Some(ReadStatus::Read), None);
        library.add_book(
            "Foundation",
            "Isaac Asimov",
            "SciFi",
            Some(ReadStatus::Read),
            Rating::parse("4.5"),
        );
        library
    }

    #[test]
    fn test_add_confirmation() {
        let mut library = Library::new();
        let added = library.add_book("Dune", "Herbert", "SciFi", None, None);
        assert_eq!(added.to_string(), "Book 'Dune' added to genre 'SciFi'.");
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_genres_in_first_use_order() {
        let library = sample_library();
        assert_eq!(library.genres().collect::<Vec<_>>(), vec!["SciFi", "Classics"]);
    }

    #[test]
    fn test_default_status_from_config() {
        let config = LibraryConfig {
            default_status: ReadStatus::Read,
            ..LibraryConfig::default()
        };
        let mut library = Library::with_config(config);
        library.add_book("Dune", "Herbert", "SciFi", None, None);
        library.add_book("Emma", "Austen", "Classics", Some(ReadStatus::Unread), None);

        assert_eq!(library.count_unread_books(), 1);
    }

    #[test]
    fn test_delete_stops_at_first_genre() {
        let mut library = Library::new();
        library.add_book("Shared", "A", "First", None, None);
        library.add_book("Shared", "B", "Second", None, None);

        let outcome = library.delete_book("Shared");
        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                title: "Shared".to_string(),
                genre: "First".to_string(),
            }
        );
        assert_eq!(library.len(), 1);
        assert_eq!(library.search_books("shared")[0].genre, "Second");
    }

    #[test]
    fn test_delete_not_found_leaves_catalog_unchanged() {
        let mut library = sample_library();
        let before = library.render_library();

        let outcome = library.delete_book("Nonexistent");
        assert!(!outcome.is_deleted());
        assert_eq!(outcome.to_string(), "Book 'Nonexistent' not found.");
        assert_eq!(library.render_library(), before);
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn test_take_book() {
        let mut library = sample_library();
        let book = library.take_book("Emma").unwrap();
        assert_eq!(book.author, "Jane Austen");

        let err = library.take_book("Emma").unwrap_err();
        assert!(matches!(err, CatalogError::BookNotFound(_)));
    }

    #[test]
    fn test_search_order_and_case() {
        let mut library = sample_library();
        library.add_book("Persuasion", "Jane Austen", "Classics", None, None);
        library.add_book("The Moon Is a Harsh Mistress", "Heinlein", "SciFi", None, None);

        let titles: Vec<String> = library
            .search_books("AUSTEN")
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["Emma", "Persuasion"]);

        let titles: Vec<String> = library
            .search_books("n")
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Dune",
                "Foundation",
                "The Moon Is a Harsh Mistress",
                "Emma",
                "Persuasion"
            ]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let mut library = Library::new();
        assert!(library.is_empty());
        assert_eq!(library.count_unread_books(), 0);
        assert!(library.search_books("anything").is_empty());
        assert_eq!(library.render_library(), "");
        assert!(!library.delete_book("Nonexistent").is_deleted());
    }

    #[test]
    fn test_listing_format() {
        let library = sample_library();
        let expected = "\nGenre: SciFi\n - Dune by Frank Herbert [unread]\n - Foundation by Isaac Asimov [read]\n\nGenre: Classics\n - Emma by Jane Austen [read]\n";
        assert_eq!(library.render_library(), expected);

        let mut out = Vec::new();
        library.display_library(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_emptied_genre_keeps_header() {
        let mut library = sample_library();
        library.delete_book("Emma");

        assert!(library.render_library().ends_with("\nGenre: Classics\n"));
        assert_eq!(library.books_in_genre("Classics").unwrap(), Vec::<Book>::new());
    }

    #[test]
    fn test_listing_with_ratings_without_headers() {
        let config = LibraryConfig {
            display: DisplayConfig {
                show_genre_headers: false,
                show_rating: true,
                item_prefix: "* ".to_string(),
            },
            ..LibraryConfig::default()
        };
        let mut library = Library::with_config(config);
        library.add_book("Dune", "Herbert", "SciFi", None, None);
        library.add_book("Foundation", "Asimov", "SciFi", Some(ReadStatus::Read), Rating::parse("5"));

        assert_eq!(
            library.render_library(),
            "* Dune by Herbert [unread]\n* Foundation by Asimov [read] (rating: 5)\n"
        );
    }

    #[test]
    fn test_unknown_genre_lookup() {
        let library = sample_library();
        let err = library.books_in_genre("Horror").unwrap_err();
        assert!(matches!(err, CatalogError::GenreNotFound(_)));
        assert!(library.shelf("Horror").is_none());
    }

    #[test]
    fn test_render_results() {
        let library = sample_library();
        assert_eq!(render_results(&[]), "No books found.");
        assert_eq!(
            render_results(&library.search_books("dune")),
            " - Dune by Frank Herbert [unread]"
        );
    }

    #[test]
    fn test_unread_summary() {
        let library = sample_library();
        assert_eq!(library.unread_summary(), "Unread books: 1");
    }
}
