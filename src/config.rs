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

//! Catalog configuration
//!
//! All fields have defaults, so an empty JSON object (or no file at all)
//! yields the stock behaviour:
//!
//! ```json
//! {
//!   "default_status": "unread",
//!   "display": {
//!     "show_genre_headers": true,
//!     "show_rating": false,
//!     "item_prefix": " - "
//!   }
//! }
//! ```

use crate::catalog::ReadStatus;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Status given to books added without one
    pub default_status: ReadStatus,

    /// Listing format for `display_library`
    pub display: DisplayConfig,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            default_status: ReadStatus::Unread,
            display: DisplayConfig::default(),
        }
    }
}

/// Listing format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print a `Genre: <name>` line before each genre's books
    pub show_genre_headers: bool,

    /// Append ` (rating: <r>)` to rated books
    pub show_rating: bool,

    /// Text written before each book line
    pub item_prefix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_genre_headers: true,
            show_rating: false,
            item_prefix: " - ".to_string(),
        }
    }
}

impl LibraryConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LibraryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::ConfigNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded library config");
        Ok(config)
    }

    /// Reject values that would corrupt the one-book-per-line listing
    pub fn validate(&self) -> Result<()> {
        if self.display.item_prefix.contains('\n') {
            return Err(CatalogError::invalid_config(
                "display.item_prefix must not contain a newline",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LibraryConfig::default();
        assert_eq!(config.default_status, ReadStatus::Unread);
        assert!(config.display.show_genre_headers);
        assert!(!config.display.show_rating);
        assert_eq!(config.display.item_prefix, " - ");
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = LibraryConfig::from_json_str("{}").unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = LibraryConfig::from_json_str(
            r#"{ "default_status": "read", "display": { "show_rating": true } }"#,
        )
        .unwrap();
        assert_eq!(config.default_status, ReadStatus::Read);
        assert!(config.display.show_rating);
        assert!(config.display.show_genre_headers);
    }

    #[test]
    fn test_newline_prefix_rejected() {
        let err = LibraryConfig::from_json_str(r#"{ "display": { "item_prefix": "\n* " } }"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = LibraryConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::SerdeJsonError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "display": {{ "item_prefix": "* " }} }}"#).unwrap();

        let config = LibraryConfig::load(file.path()).unwrap();
        assert_eq!(config.display.item_prefix, "* ");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LibraryConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CatalogError::ConfigNotFound(_)));
    }
}
