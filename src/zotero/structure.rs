//! Zotero item payload structures.
//!
//! [`ZoteroItem`] serializes to the JSON body Zotero expects for one item in a
//! create-items request. Absent values are skipped, never written as `null`.

use super::ItemType;
use super::creators::Creator;
use crate::error::CitationError;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A Zotero item ready to be sent to the web API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoteroItem {
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub creators: Vec<Creator>,
    /// `"<year>"` or `"<month> <year>"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proceedings_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(rename = "ISSN", default, skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thesis_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    /// Free-text catch-all, one line per note-like record field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstract_note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl ZoteroItem {
    /// Create an empty item of the given type.
    pub fn new(item_type: ItemType) -> Self {
        Self {
            item_type,
            ..Self::default()
        }
    }

    /// Value held in a slot.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slot(slot).as_deref()
    }

    /// Write a value into an empty slot.
    ///
    /// A slot is written at most once; returns `false` and leaves the item
    /// unchanged if the slot already holds a value.
    pub fn assign(&mut self, slot: Slot, value: impl Into<String>) -> bool {
        let target = self.slot_mut(slot);
        if target.is_some() {
            debug!(?slot, "item slot already set, keeping first value");
            return false;
        }
        *target = Some(value.into());
        true
    }

    /// The item as a plain JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::Json`] if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value, CitationError> {
        Ok(serde_json::to_value(self)?)
    }

    fn slot(&self, slot: Slot) -> &Option<String> {
        match slot {
            Slot::Title => &self.title,
            Slot::Date => &self.date,
            Slot::PublicationTitle => &self.publication_title,
            Slot::ProceedingsTitle => &self.proceedings_title,
            Slot::Publisher => &self.publisher,
            Slot::University => &self.university,
            Slot::Institution => &self.institution,
            Slot::Volume => &self.volume,
            Slot::Issue => &self.issue,
            Slot::ReportNumber => &self.report_number,
            Slot::Pages => &self.pages,
            Slot::Series => &self.series,
            Slot::Edition => &self.edition,
            Slot::Place => &self.place,
            Slot::Doi => &self.doi,
            Slot::Url => &self.url,
            Slot::Isbn => &self.isbn,
            Slot::Issn => &self.issn,
            Slot::ThesisType => &self.thesis_type,
            Slot::ReportType => &self.report_type,
            Slot::Extra => &self.extra,
            Slot::AbstractNote => &self.abstract_note,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::Title => &mut self.title,
            Slot::Date => &mut self.date,
            Slot::PublicationTitle => &mut self.publication_title,
            Slot::ProceedingsTitle => &mut self.proceedings_title,
            Slot::Publisher => &mut self.publisher,
            Slot::University => &mut self.university,
            Slot::Institution => &mut self.institution,
            Slot::Volume => &mut self.volume,
            Slot::Issue => &mut self.issue,
            Slot::ReportNumber => &mut self.report_number,
            Slot::Pages => &mut self.pages,
            Slot::Series => &mut self.series,
            Slot::Edition => &mut self.edition,
            Slot::Place => &mut self.place,
            Slot::Doi => &mut self.doi,
            Slot::Url => &mut self.url,
            Slot::Isbn => &mut self.isbn,
            Slot::Issn => &mut self.issn,
            Slot::ThesisType => &mut self.thesis_type,
            Slot::ReportType => &mut self.report_type,
            Slot::Extra => &mut self.extra,
            Slot::AbstractNote => &mut self.abstract_note,
        }
    }
}

/// Single-valued text fields of a [`ZoteroItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Title,
    Date,
    PublicationTitle,
    ProceedingsTitle,
    Publisher,
    University,
    Institution,
    Volume,
    Issue,
    ReportNumber,
    Pages,
    Series,
    Edition,
    Place,
    Doi,
    Url,
    Isbn,
    Issn,
    ThesisType,
    ReportType,
    Extra,
    AbstractNote,
}

/// An item tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag: CompactString,
}

impl Tag {
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self { tag: tag.into() }
    }
}
