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

//! Per-genre ordered collection
//!
//! A shelf owns the books of one genre in the order they were added.
//! Removal keeps the relative order of the remaining books.

use super::models::Book;

/// Append-ordered collection of books for a single genre
#[derive(Debug, Clone, Default)]
pub struct Shelf {
    genre: String,
    books: Vec<Book>,
}

impl Shelf {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            books: Vec::new(),
        }
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Add a book at the tail
    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the first book whose title matches exactly
    ///
    /// Returns `true` if a book was removed.
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        self.take_by_title(title).is_some()
    }

    /// Remove and return the first book whose title matches exactly
    pub fn take_by_title(&mut self, title: &str) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.title == title)?;
        Some(self.books.remove(pos))
    }

    /// Snapshot of the shelf in insertion order
    pub fn to_vec(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn count_unread(&self) -> usize {
        self.books.iter().filter(|b| b.is_unread()).count()
    }
}

impl<'a> IntoIterator for &'a Shelf {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
