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

//! Shared catalog handle for async callers
//!
//! Wraps a [`Library`] in `Arc<RwLock<_>>`. Mutations take the write lock,
//! so they are serialized and never overlap a read. Searches, counts and
//! listings take the read lock and may run alongside each other.
//!
//! Clones share the same catalog.

use super::library::{Added, DeleteOutcome, Library};
use super::models::{Book, Rating, ReadStatus};
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct SharedLibrary {
    inner: Arc<RwLock<Library>>,
}

impl SharedLibrary {
    pub fn new(library: Library) -> Self {
        Self {
            inner: Arc::new(RwLock::new(library)),
        }
    }

    pub async fn add_book(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        status: Option<ReadStatus>,
        rating: Option<Rating>,
    ) -> Added {
        let mut library = self.inner.write().await;
        library.add_book(title, author, genre, status, rating)
    }

    pub async fn delete_book(&self, title: &str) -> DeleteOutcome {
        let mut library = self.inner.write().await;
        library.delete_book(title)
    }

    pub async fn take_book(&self, title: &str) -> Result<Book> {
        let mut library = self.inner.write().await;
        library.take_book(title)
    }

    pub async fn search_books(&self, keyword: &str) -> Vec<Book> {
        self.inner.read().await.search_books(keyword)
    }

    pub async fn count_unread_books(&self) -> usize {
        self.inner.read().await.count_unread_books()
    }

    pub async fn render_library(&self) -> String {
        self.inner.read().await.render_library()
    }

    pub async fn genres(&self) -> Vec<String> {
        self.inner
            .read()
            .await
            .genres()
            .map(str::to_string)
            .collect()
    }

    /// Run `f` with shared read access
    pub async fn with_read<R>(&self, f: impl FnOnce(&Library) -> R) -> R {
        let library = self.inner.read().await;
        f(&*library)
    }
}

impl From<Library> for SharedLibrary {
    fn from(library: Library) -> Self {
        Self::new(library)
    }
}
