//! Translation of records into Zotero items.
//!
//! # Example
//!
//! ```
//! use snapcite::{BibRecord, Field, ItemMapper, ZoteroMapper};
//!
//! let record = BibRecord::builder("techreport", "tr42")
//!     .author("Ada Lovelace")
//!     .title("Notes")
//!     .field(Field::Institution, "Analytical Society")
//!     .field(Field::Number, "42")
//!     .year(1843)
//!     .build()
//!     .unwrap();
//!
//! let item = ZoteroMapper::new().map(&record);
//! assert_eq!(item.item_type.as_str(), "report");
//! assert_eq!(item.report_number.as_deref(), Some("42"));
//! assert_eq!(item.issue, None);
//! ```

mod creators;
mod item_type;
mod request;
mod response;
mod structure;

pub use creators::{Creator, CreatorRole, parse_creators};
pub use item_type::{FieldRules, ItemType};
pub use request::{API_VERSION, CreateItemsRequest, MAX_ITEMS_PER_REQUEST};
pub use response::{CreateItemsResponse, FailedWrite, ImportSummary};
pub use structure::{Slot, Tag, ZoteroItem};

use crate::utils::is_blank;
use crate::{BibRecord, EntryType, Field, ItemMapper};
use itertools::Itertools;
use tracing::debug;

/// Record fields gathered into the `extra` note, in output order.
const NOTE_FIELDS: [Field; 4] = [
    Field::Chapter,
    Field::Note,
    Field::HowPublished,
    Field::Organization,
];

/// Maps records onto Zotero items.
///
/// The mapper is stateless; all category-dependent behaviour comes from
/// [`ItemType::rules`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoteroMapper;

impl ZoteroMapper {
    /// Creates a new Zotero mapper instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ItemMapper for ZoteroMapper {
    type Item = ZoteroItem;

    fn map(&self, record: &BibRecord) -> ZoteroItem {
        let item_type = ItemType::from_entry_type(record.entry_type());
        let rules = item_type.rules();
        let mut item = ZoteroItem::new(item_type);

        item.creators = collect_creators(record);

        for (field, value) in record.fields().filter(|(_, value)| !is_blank(value)) {
            match rules.target(field) {
                Some(slot) => {
                    item.assign(slot, value);
                }
                None if field == Field::TypeNote => {
                    debug!(%item_type, value, "type qualifier has no slot, dropping it");
                }
                None => {}
            }
        }

        if let Some(date) = format_date(record) {
            item.assign(Slot::Date, date);
        }
        if item_type == ItemType::Thesis && item.thesis_type.is_none() {
            item.thesis_type = default_thesis_type(record.kind()).map(str::to_string);
        }
        item.extra = collect_notes(record);
        item.tags = record
            .get(Field::Keywords)
            .map(|keywords| crate::utils::split_keywords(keywords).map(Tag::new).collect())
            .unwrap_or_default();

        item
    }
}

impl From<&BibRecord> for ZoteroItem {
    fn from(record: &BibRecord) -> Self {
        ZoteroMapper.map(record)
    }
}

/// Authors followed by editors.
fn collect_creators(record: &BibRecord) -> Vec<Creator> {
    let authors = record
        .author()
        .map(|names| parse_creators(names, CreatorRole::Author))
        .unwrap_or_default();
    let editors = record
        .editor()
        .map(|names| parse_creators(names, CreatorRole::Editor))
        .unwrap_or_default();
    authors.into_iter().chain(editors).collect()
}

/// `"<year>"`, or `"<month> <year>"` when the month is known. No year, no date.
fn format_date(record: &BibRecord) -> Option<String> {
    let year = record.year()?;
    Some(match record.get(Field::Month).filter(|month| !is_blank(month)) {
        Some(month) => format!("{} {}", month.trim(), year),
        None => year.to_string(),
    })
}

fn default_thesis_type(entry_type: EntryType) -> Option<&'static str> {
    match entry_type {
        EntryType::PhdThesis => Some("PhD thesis"),
        EntryType::MastersThesis => Some("Master's thesis"),
        _ => None,
    }
}

/// One line per note-like field with text.
fn collect_notes(record: &BibRecord) -> Option<String> {
    let notes = NOTE_FIELDS
        .iter()
        .filter_map(|field| record.get(*field))
        .filter(|value| !is_blank(value))
        .join("\n");
    (!notes.is_empty()).then_some(notes)
}
