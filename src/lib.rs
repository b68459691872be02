//! Validate, format, and map BibTeX citation records into Zotero library items.
//!
//! `snapcite` holds the data model behind a capture-to-library workflow: a citation is
//! captured from the screen, its text recognized, a language model extracts a BibTeX
//! record from it, and the record is pushed into a Zotero library. This crate owns the
//! parts with real rules:
//!
//! - **Records**: a single flat [`BibRecord`] shape for all 14 BibTeX entry types,
//!   validated once at construction against a per-type required-field table.
//! - **Formatting**: deterministic BibTeX rendering with a fixed field order.
//! - **Mapping**: translation into the Zotero item payload ([`zotero::ZoteroItem`]),
//!   including creator-name decomposition and field renames that depend on the
//!   target item type.
//!
//! Screen capture, OCR, the extraction model, and the HTTP client are external. The
//! [`pipeline`] module describes them as traits and runs them in sequence.
//!
//! # Features
//!
//! - `toml` - Load and save [`ZoteroConfig`] as TOML (enabled by default)
//!
//! # Basic Usage
//!
//! ```rust
//! use snapcite::{BibRecord, ItemMapper, ZoteroMapper};
//!
//! let record = BibRecord::from_json(r#"{
//!     "entry_type": "inproceedings",
//!     "cite_key": "lee2019",
//!     "author": "Lee, Ann and Bo Chen",
//!     "title": "Attention Everywhere",
//!     "booktitle": "Proc. ABC",
//!     "year": 2019
//! }"#).unwrap();
//!
//! println!("{}", record.format(true));
//!
//! let item = ZoteroMapper::new().map(&record);
//! assert_eq!(item.item_type.as_str(), "conferencePaper");
//! assert_eq!(item.proceedings_title.as_deref(), Some("Proc. ABC"));
//! assert_eq!(item.creators.len(), 2);
//! ```
//!
//! # Error Handling
//!
//! Record construction fails with a [`ValidationError`] naming the entry type and the
//! missing fields. The other operations wrap their failures in [`CitationError`]:
//!
//! ```rust
//! use snapcite::{BibRecord, ValidationError};
//!
//! let result = BibRecord::builder("book", "anon").title("Untitled").build();
//! match result {
//!     Ok(record) => println!("{}", record),
//!     Err(ValidationError::MissingFields { entry_type, missing }) => {
//!         assert_eq!(entry_type, "book");
//!         assert_eq!(missing, vec!["publisher", "year", "author or editor"]);
//!     }
//!     Err(e) => eprintln!("Invalid record: {}", e),
//! }
//! ```
//!
//! # Thread Safety
//!
//! Records, items, and the mapper are immutable values; validation, formatting, and
//! mapping are pure functions that can run concurrently without coordination.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod config;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod zotero;

// Reexports
pub use config::{LibraryType, ZoteroConfig};
pub use error::{AUTHOR_OR_EDITOR, CitationError, ConfigError, Stage, ValidationError};
pub use record::{BibRecord, Field, RecordBuilder};
pub use zotero::{ItemType, ZoteroItem, ZoteroMapper};

mod utils;

/// The 14 standard BibTeX entry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Article,
    Book,
    Booklet,
    Conference,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    Misc,
    PhdThesis,
    Proceedings,
    TechReport,
    Unpublished,
}

impl EntryType {
    pub const ALL: [EntryType; 14] = [
        EntryType::Article,
        EntryType::Book,
        EntryType::Booklet,
        EntryType::Conference,
        EntryType::InBook,
        EntryType::InCollection,
        EntryType::InProceedings,
        EntryType::Manual,
        EntryType::MastersThesis,
        EntryType::Misc,
        EntryType::PhdThesis,
        EntryType::Proceedings,
        EntryType::TechReport,
        EntryType::Unpublished,
    ];

    /// The lower-case BibTeX name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Article => "article",
            EntryType::Book => "book",
            EntryType::Booklet => "booklet",
            EntryType::Conference => "conference",
            EntryType::InBook => "inbook",
            EntryType::InCollection => "incollection",
            EntryType::InProceedings => "inproceedings",
            EntryType::Manual => "manual",
            EntryType::MastersThesis => "mastersthesis",
            EntryType::Misc => "misc",
            EntryType::PhdThesis => "phdthesis",
            EntryType::Proceedings => "proceedings",
            EntryType::TechReport => "techreport",
            EntryType::Unpublished => "unpublished",
        }
    }

    /// Look up an entry type by name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<EntryType> {
        let name = name.trim();
        EntryType::ALL
            .into_iter()
            .find(|entry_type| entry_type.as_str().eq_ignore_ascii_case(name))
    }
}

impl FromStr for EntryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryType::parse(s).ok_or_else(|| ValidationError::UnknownEntryType(s.to_string()))
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for translating records into a reference manager's item representation.
pub trait ItemMapper {
    /// The target item payload.
    type Item;

    /// Map a validated record.
    ///
    /// Mapping is total: every record that passed validation produces an item.
    fn map(&self, record: &BibRecord) -> Self::Item;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("article", Some(EntryType::Article))]
    #[case("ARTICLE", Some(EntryType::Article))]
    #[case("InProceedings", Some(EntryType::InProceedings))]
    #[case(" phdthesis ", Some(EntryType::PhdThesis))]
    #[case("patent", None)]
    #[case("", None)]
    fn test_entry_type_parse(#[case] name: &str, #[case] expected: Option<EntryType>) {
        assert_eq!(EntryType::parse(name), expected);
    }

    #[test]
    fn test_entry_type_from_str_error() {
        let result: Result<EntryType, _> = "thesis".parse();
        assert!(matches!(result, Err(ValidationError::UnknownEntryType(name)) if name == "thesis"));
    }

    #[test]
    fn test_entry_type_serde_names() {
        for entry_type in EntryType::ALL {
            let json = serde_json::to_string(&entry_type).unwrap();
            assert_eq!(json, format!("\"{}\"", entry_type.as_str()));
        }
    }

    #[test]
    fn test_records_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BibRecord>();
        assert_send_sync::<ZoteroItem>();
        assert_send_sync::<ZoteroMapper>();
    }
}
