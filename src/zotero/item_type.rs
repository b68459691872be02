//! Zotero item types and the per-type field rename rules.
//!
//! # Design Decision
//!
//! All renames that depend on the target item type live in [`ItemType::rules`], so
//! the behaviour of every category can be read off one table:
//!
//! | item type | booktitle | number | type |
//! |---|---|---|---|
//! | conferencePaper | proceedingsTitle | issue | dropped |
//! | thesis | publicationTitle | issue | thesisType |
//! | report | publicationTitle | reportNumber | reportType |
//! | everything else | publicationTitle | issue | dropped |
//!
//! Renames that never vary are listed in [`FIXED_FIELDS`].

use super::structure::Slot;
use crate::{EntryType, Field};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Zotero item types that BibTeX entry types map onto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    #[default]
    JournalArticle,
    Book,
    BookSection,
    ConferencePaper,
    Thesis,
    Report,
    Manuscript,
    Document,
}

impl ItemType {
    /// The Zotero `itemType` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::JournalArticle => "journalArticle",
            ItemType::Book => "book",
            ItemType::BookSection => "bookSection",
            ItemType::ConferencePaper => "conferencePaper",
            ItemType::Thesis => "thesis",
            ItemType::Report => "report",
            ItemType::Manuscript => "manuscript",
            ItemType::Document => "document",
        }
    }

    /// Resolve the item type for a BibTeX entry type name, ignoring case.
    ///
    /// Names outside the 14 BibTeX entry types resolve to
    /// [`ItemType::JournalArticle`] rather than failing.
    pub fn from_entry_type(name: &str) -> ItemType {
        match EntryType::parse(name) {
            Some(entry_type) => entry_type.into(),
            None => {
                debug!(entry_type = name, "unrecognized entry type, using journalArticle");
                ItemType::default()
            }
        }
    }

    /// Category-dependent field renames for this item type.
    pub fn rules(&self) -> FieldRules {
        match self {
            ItemType::ConferencePaper => FieldRules {
                booktitle: Slot::ProceedingsTitle,
                ..FieldRules::DEFAULT
            },
            ItemType::Thesis => FieldRules {
                type_note: Some(Slot::ThesisType),
                ..FieldRules::DEFAULT
            },
            ItemType::Report => FieldRules {
                number: Slot::ReportNumber,
                type_note: Some(Slot::ReportType),
                ..FieldRules::DEFAULT
            },
            _ => FieldRules::DEFAULT,
        }
    }
}

impl From<EntryType> for ItemType {
    fn from(entry_type: EntryType) -> Self {
        match entry_type {
            EntryType::Article => ItemType::JournalArticle,
            EntryType::Book => ItemType::Book,
            EntryType::Booklet => ItemType::Book,
            EntryType::Conference => ItemType::ConferencePaper,
            EntryType::InBook => ItemType::BookSection,
            EntryType::InCollection => ItemType::BookSection,
            EntryType::InProceedings => ItemType::ConferencePaper,
            EntryType::Manual => ItemType::Book,
            EntryType::MastersThesis => ItemType::Thesis,
            EntryType::Misc => ItemType::Document,
            EntryType::PhdThesis => ItemType::Thesis,
            EntryType::Proceedings => ItemType::Book,
            EntryType::TechReport => ItemType::Report,
            EntryType::Unpublished => ItemType::Manuscript,
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record fields copied into the same item slot for every item type.
pub(crate) const FIXED_FIELDS: [(Field, Slot); 15] = [
    (Field::Title, Slot::Title),
    (Field::Journal, Slot::PublicationTitle),
    (Field::Publisher, Slot::Publisher),
    (Field::School, Slot::University),
    (Field::Institution, Slot::Institution),
    (Field::Volume, Slot::Volume),
    (Field::Pages, Slot::Pages),
    (Field::Series, Slot::Series),
    (Field::Edition, Slot::Edition),
    (Field::Address, Slot::Place),
    (Field::Doi, Slot::Doi),
    (Field::Url, Slot::Url),
    (Field::Isbn, Slot::Isbn),
    (Field::Issn, Slot::Issn),
    (Field::Abstract, Slot::AbstractNote),
];

/// Where the category-dependent record fields land in an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub booktitle: Slot,
    pub number: Slot,
    /// `None` drops the type qualifier.
    pub type_note: Option<Slot>,
}

impl FieldRules {
    const DEFAULT: FieldRules = FieldRules {
        booktitle: Slot::PublicationTitle,
        number: Slot::Issue,
        type_note: None,
    };

    /// The item slot a record field is copied into, if it maps to a single slot.
    ///
    /// Creators, date parts, notes, and keywords are assembled separately and
    /// return `None`, as does the type qualifier when the item type drops it.
    pub fn target(&self, field: Field) -> Option<Slot> {
        match field {
            Field::BookTitle => Some(self.booktitle),
            Field::Number => Some(self.number),
            Field::TypeNote => self.type_note,
            _ => FIXED_FIELDS
                .iter()
                .find(|(source, _)| *source == field)
                .map(|(_, slot)| *slot),
        }
    }
}
