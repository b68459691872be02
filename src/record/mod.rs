//! Validated BibTeX records.
//!
//! A [`BibRecord`] can only be obtained through validation: via [`RecordBuilder`],
//! [`BibRecord::from_fields`], [`BibRecord::from_json`], or serde deserialization.
//! Once built it is read-only.
//!
//! # Example
//!
//! ```
//! use snapcite::{BibRecord, Field};
//!
//! let record = BibRecord::builder("article", "smith2020")
//!     .author("Smith, John")
//!     .title("On Things")
//!     .field(Field::Journal, "Journal of Stuff")
//!     .year(2020)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(record.get(Field::Journal), Some("Journal of Stuff"));
//! assert_eq!(record.year(), Some(2020));
//! ```

mod fields;
mod format;
mod requirements;
mod structure;

pub use fields::Field;

use crate::EntryType;
use crate::error::{CitationError, ValidationError};
use requirements::check_required;
use std::collections::BTreeMap;
use structure::RawRecord;

/// One validated bibliographic citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibRecord {
    /// Entry type as supplied, original casing kept for output.
    entry_type: String,
    kind: EntryType,
    cite_key: String,
    year: Option<i32>,
    /// Present fields only. `Year` holds the normalized integer text.
    values: BTreeMap<Field, String>,
}

impl BibRecord {
    /// Start building a record of the given entry type.
    pub fn builder(entry_type: impl Into<String>, cite_key: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(entry_type, cite_key)
    }

    /// Build a record from an untyped field mapping.
    ///
    /// `entry_type` and `cite_key` are mandatory keys; every other key must name a
    /// [`Field`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for missing or unknown keys, an unparsable year,
    /// or missing required fields.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entry_type = None;
        let mut cite_key = None;
        let mut values = BTreeMap::new();

        for (key, value) in fields {
            let key = key.as_ref();
            match reserved_key(key) {
                Some(ENTRY_TYPE) => entry_type = Some(value.into()),
                Some(_) => cite_key = Some(value.into()),
                None => {
                    let field = Field::from_key(key)
                        .ok_or_else(|| ValidationError::UnknownField(key.to_string()))?;
                    values.insert(field, value.into());
                }
            }
        }

        let entry_type = entry_type.ok_or(ValidationError::MissingKey(ENTRY_TYPE))?;
        let cite_key = cite_key.ok_or(ValidationError::MissingKey(CITE_KEY))?;
        RecordBuilder {
            entry_type,
            cite_key,
            values,
        }
        .build()
    }

    /// Parse a record from a JSON object, such as an extraction model's output.
    ///
    /// `null` values count as absent and `year` may be an integer or an integer
    /// string.
    ///
    /// # Errors
    ///
    /// [`CitationError::Json`] if the input is not a JSON object of scalar values,
    /// [`CitationError::Validation`] if the record is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use snapcite::BibRecord;
    ///
    /// let record = BibRecord::from_json(r#"{
    ///     "entry_type": "misc",
    ///     "cite_key": "notes",
    ///     "title": "Lecture notes",
    ///     "year": "2021",
    ///     "doi": null
    /// }"#).unwrap();
    /// assert_eq!(record.year(), Some(2021));
    /// ```
    pub fn from_json(input: &str) -> Result<Self, CitationError> {
        let raw: RawRecord = serde_json::from_str(input)?;
        let record = BibRecord::try_from(raw)?;
        Ok(record)
    }

    /// Entry type as originally supplied.
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    /// Parsed entry type.
    pub fn kind(&self) -> EntryType {
        self.kind
    }

    pub fn cite_key(&self) -> &str {
        &self.cite_key
    }

    /// Value of a field, if present. `Field::Year` yields the year's decimal text.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn author(&self) -> Option<&str> {
        self.get(Field::Author)
    }

    pub fn editor(&self) -> Option<&str> {
        self.get(Field::Editor)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(Field::Title)
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Present fields with their values, in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}

pub(crate) const ENTRY_TYPE: &str = "entry_type";
pub(crate) const CITE_KEY: &str = "cite_key";

/// Match the record keys that are not fields, with the same case rule as
/// [`Field::from_key`].
pub(crate) fn reserved_key(key: &str) -> Option<&'static str> {
    let key = key.trim();
    [ENTRY_TYPE, CITE_KEY]
        .into_iter()
        .find(|reserved| reserved.eq_ignore_ascii_case(key))
}

/// Incremental construction of a [`BibRecord`]; validation runs in [`RecordBuilder::build`].
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    entry_type: String,
    cite_key: String,
    values: BTreeMap<Field, String>,
}

impl RecordBuilder {
    pub fn new(entry_type: impl Into<String>, cite_key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            cite_key: cite_key.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set a field. A later value for the same field replaces the earlier one.
    #[must_use]
    pub fn field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    #[must_use]
    pub fn author(self, author: impl Into<String>) -> Self {
        self.field(Field::Author, author)
    }

    #[must_use]
    pub fn editor(self, editor: impl Into<String>) -> Self {
        self.field(Field::Editor, editor)
    }

    #[must_use]
    pub fn title(self, title: impl Into<String>) -> Self {
        self.field(Field::Title, title)
    }

    #[must_use]
    pub fn year(self, year: i32) -> Self {
        self.field(Field::Year, year.to_string())
    }

    /// Validate and produce the record.
    ///
    /// Any supplied value, including an empty string, counts as present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the entry type is unknown, the year is not an
    /// integer, or required fields are missing.
    pub fn build(self) -> Result<BibRecord, ValidationError> {
        let RecordBuilder {
            entry_type,
            cite_key,
            mut values,
        } = self;

        let kind: EntryType = entry_type.parse()?;

        let year = match values.get(&Field::Year) {
            Some(text) => {
                let year = crate::utils::parse_year(text).ok_or_else(|| {
                    ValidationError::BadValue {
                        field: Field::Year.as_key(),
                        value: text.clone(),
                        reason: "not an integer".to_string(),
                    }
                })?;
                values.insert(Field::Year, year.to_string());
                Some(year)
            }
            None => None,
        };

        check_required(kind, |field| values.contains_key(&field))?;

        Ok(BibRecord {
            entry_type,
            kind,
            cite_key,
            year,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AUTHOR_OR_EDITOR;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_article() {
        let record = BibRecord::builder("article", "smith2020")
            .author("Smith, John")
            .title("On Things")
            .field(Field::Journal, "Journal of Stuff")
            .year(2020)
            .build()
            .unwrap();

        assert_eq!(record.kind(), EntryType::Article);
        assert_eq!(record.cite_key(), "smith2020");
        assert_eq!(record.author(), Some("Smith, John"));
        assert_eq!(record.get(Field::Year), Some("2020"));
        assert_eq!(record.editor(), None);
    }

    #[test]
    fn test_entry_type_case_kept() {
        let record = BibRecord::builder("ARTICLE", "k")
            .author("A")
            .title("T")
            .field(Field::Journal, "J")
            .year(1999)
            .build()
            .unwrap();
        assert_eq!(record.entry_type(), "ARTICLE");
        assert_eq!(record.kind(), EntryType::Article);
    }

    #[test]
    fn test_missing_required_fields() {
        let error = BibRecord::builder("article", "k")
            .title("T")
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            ValidationError::MissingFields {
                entry_type: "article".to_string(),
                missing: vec!["author", "journal", "year"],
            }
        );
    }

    #[test]
    fn test_book_with_editor_only() {
        let record = BibRecord::builder("book", "k")
            .editor("Doe, Jane")
            .title("Collected Works")
            .field(Field::Publisher, "Press")
            .year(2001)
            .build();
        assert!(record.is_ok());
    }

    #[test]
    fn test_book_without_author_or_editor() {
        let error = BibRecord::builder("book", "k")
            .title("Collected Works")
            .field(Field::Publisher, "Press")
            .year(2001)
            .build()
            .unwrap_err();
        assert_eq!(error.missing_fields(), &[AUTHOR_OR_EDITOR]);
    }

    #[test]
    fn test_unknown_entry_type() {
        let error = BibRecord::builder("patent", "k").build().unwrap_err();
        assert_eq!(error, ValidationError::UnknownEntryType("patent".to_string()));
    }

    #[test]
    fn test_empty_values_are_present() {
        let record = BibRecord::builder("booklet", "k").title("").build().unwrap();
        assert!(record.has(Field::Title));
        assert_eq!(record.title(), Some(""));

        let record = BibRecord::from_json(
            r#"{"entry_type": "booklet", "cite_key": "k", "title": "", "note": "  "}"#,
        )
        .unwrap();
        assert_eq!(
            record.fields().collect::<Vec<_>>(),
            vec![(Field::Title, ""), (Field::Note, "  ")]
        );
    }

    #[test]
    fn test_null_values_are_absent() {
        let error = BibRecord::from_json(r#"{"entry_type": "booklet", "cite_key": "k", "title": null}"#)
            .unwrap_err();
        assert!(matches!(
            error,
            CitationError::Validation(ValidationError::MissingFields { ref missing, .. })
                if missing == &vec!["title"]
        ));
    }

    #[test]
    fn test_empty_cite_key() {
        let record = BibRecord::from_json(r#"{"entry_type": "misc", "cite_key": ""}"#).unwrap();
        assert_eq!(record.cite_key(), "");
        assert_eq!(record.format(true), "@misc{,\n}");
    }

    #[test]
    fn test_reserved_keys_ignore_case() {
        let record = BibRecord::from_fields([
            ("Entry_Type", "misc"),
            (" CITE_KEY ", "k"),
            ("Title", "T"),
        ])
        .unwrap();
        assert_eq!(record.entry_type(), "misc");
        assert_eq!(record.cite_key(), "k");
        assert_eq!(record.title(), Some("T"));
    }

    #[test]
    fn test_bad_year() {
        let error = BibRecord::builder("misc", "k")
            .field(Field::Year, "circa 1990")
            .build()
            .unwrap_err();
        assert!(matches!(error, ValidationError::BadValue { field: "year", .. }));
    }

    #[test]
    fn test_from_fields() {
        let record = BibRecord::from_fields([
            ("entry_type", "phdthesis"),
            ("cite_key", "doe1999"),
            ("author", "Jane Doe"),
            ("title", "A Thesis"),
            ("school", "MIT"),
            ("year", " 1999 "),
        ])
        .unwrap();
        assert_eq!(record.kind(), EntryType::PhdThesis);
        assert_eq!(record.year(), Some(1999));
        assert_eq!(record.get(Field::Year), Some("1999"));
    }

    #[test]
    fn test_from_fields_rejects_unknown_key() {
        let error = BibRecord::from_fields([
            ("entry_type", "misc"),
            ("cite_key", "k"),
            ("eprint", "2101.00001"),
        ])
        .unwrap_err();
        assert_eq!(error, ValidationError::UnknownField("eprint".to_string()));
    }

    #[test]
    fn test_from_fields_requires_keys() {
        let error = BibRecord::from_fields([("cite_key", "k")]).unwrap_err();
        assert_eq!(error, ValidationError::MissingKey("entry_type"));

        let error = BibRecord::from_fields([("entry_type", "misc")]).unwrap_err();
        assert_eq!(error, ValidationError::MissingKey("cite_key"));
    }

    #[test]
    fn test_fields_iterate_in_canonical_order() {
        let record = BibRecord::builder("misc", "k")
            .field(Field::Keywords, "a, b")
            .field(Field::Doi, "10.1/x")
            .title("T")
            .author("A")
            .build()
            .unwrap();
        let order: Vec<Field> = record.fields().map(|(field, _)| field).collect();
        assert_eq!(
            order,
            vec![Field::Author, Field::Title, Field::Doi, Field::Keywords]
        );
    }

    #[test]
    fn test_from_json_errors() {
        let result = BibRecord::from_json("{ not json");
        assert!(matches!(result, Err(CitationError::Json(_))));

        let result = BibRecord::from_json(r#"{"entry_type": "article", "cite_key": "k"}"#);
        assert!(matches!(
            result,
            Err(CitationError::Validation(ValidationError::MissingFields { .. }))
        ));
    }
}
