//! Required-field policy per entry type.
//!
//! Every entry type shares one record shape; validity is decided by looking the
//! type up in a fixed table rather than by the shape of the data.

use super::Field;
use crate::EntryType;
use crate::error::{AUTHOR_OR_EDITOR, ValidationError};
use tracing::debug;

impl EntryType {
    /// Fields that must be present for a record of this type to be valid.
    ///
    /// Types for which [`EntryType::accepts_author_or_editor`] is true carry an
    /// additional author-or-editor requirement that is not listed here.
    pub fn required_fields(&self) -> &'static [Field] {
        use Field::*;
        match self {
            EntryType::Article => &[Author, Title, Journal, Year],
            EntryType::Book => &[Title, Publisher, Year],
            EntryType::Booklet => &[Title],
            EntryType::Conference => &[Author, Title, BookTitle, Year],
            EntryType::InBook => &[Title, Publisher, Year],
            EntryType::InCollection => &[Author, Title, BookTitle, Publisher, Year],
            EntryType::InProceedings => &[Author, Title, BookTitle, Year],
            EntryType::Manual => &[Title],
            EntryType::MastersThesis => &[Author, Title, School, Year],
            EntryType::Misc => &[],
            EntryType::PhdThesis => &[Author, Title, School, Year],
            EntryType::Proceedings => &[Title, Year],
            EntryType::TechReport => &[Author, Title, Institution, Year],
            EntryType::Unpublished => &[Author, Title, Note],
        }
    }

    /// Whether an editor may stand in for the author.
    pub fn accepts_author_or_editor(&self) -> bool {
        matches!(
            self,
            EntryType::Book | EntryType::InBook | EntryType::Proceedings
        )
    }
}

/// Check that every field required by `entry_type` is present.
///
/// `is_present` reports whether the record under construction has a value for a
/// field. The missing list keeps table order, with [`AUTHOR_OR_EDITOR`] appended
/// last when applicable.
pub(crate) fn check_required<F>(entry_type: EntryType, is_present: F) -> Result<(), ValidationError>
where
    F: Fn(Field) -> bool,
{
    let mut missing: Vec<&'static str> = entry_type
        .required_fields()
        .iter()
        .filter(|field| !is_present(**field))
        .map(|field| field.as_key())
        .collect();

    if entry_type.accepts_author_or_editor() {
        let author_key = Field::Author.as_key();
        if missing.contains(&author_key) && is_present(Field::Editor) {
            missing.retain(|key| *key != author_key);
        } else if !is_present(Field::Author) && !is_present(Field::Editor) {
            missing.push(AUTHOR_OR_EDITOR);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        debug!(entry_type = entry_type.as_str(), ?missing, "record is missing required fields");
        Err(ValidationError::MissingFields {
            entry_type: entry_type.as_str().to_string(),
            missing,
        })
    }
}
