//! The closed set of optional BibTeX fields a record can carry.

/// Optional BibTeX fields, declared in canonical output order.
///
/// The derived `Ord` follows declaration order, so ordered collections keyed by
/// `Field` iterate in the order the formatter writes fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Author,
    Editor,
    Title,
    Year,
    Journal,
    BookTitle,
    Publisher,
    School,
    Institution,
    Organization,
    Volume,
    Number,
    Pages,
    Chapter,
    Series,
    Edition,
    Doi,
    Url,
    Isbn,
    Issn,
    Address,
    Month,
    Note,
    HowPublished,
    /// Free-text qualifier such as "PhD dissertation" (BibTeX `type`).
    TypeNote,
    Abstract,
    Keywords,
}

impl Field {
    /// Every field in canonical output order.
    pub const ALL: [Field; 27] = [
        Field::Author,
        Field::Editor,
        Field::Title,
        Field::Year,
        Field::Journal,
        Field::BookTitle,
        Field::Publisher,
        Field::School,
        Field::Institution,
        Field::Organization,
        Field::Volume,
        Field::Number,
        Field::Pages,
        Field::Chapter,
        Field::Series,
        Field::Edition,
        Field::Doi,
        Field::Url,
        Field::Isbn,
        Field::Issn,
        Field::Address,
        Field::Month,
        Field::Note,
        Field::HowPublished,
        Field::TypeNote,
        Field::Abstract,
        Field::Keywords,
    ];

    /// The BibTeX field name.
    pub fn as_key(&self) -> &'static str {
        match self {
            Field::Author => "author",
            Field::Editor => "editor",
            Field::Title => "title",
            Field::Year => "year",
            Field::Journal => "journal",
            Field::BookTitle => "booktitle",
            Field::Publisher => "publisher",
            Field::School => "school",
            Field::Institution => "institution",
            Field::Organization => "organization",
            Field::Volume => "volume",
            Field::Number => "number",
            Field::Pages => "pages",
            Field::Chapter => "chapter",
            Field::Series => "series",
            Field::Edition => "edition",
            Field::Doi => "doi",
            Field::Url => "url",
            Field::Isbn => "isbn",
            Field::Issn => "issn",
            Field::Address => "address",
            Field::Month => "month",
            Field::Note => "note",
            Field::HowPublished => "howpublished",
            Field::TypeNote => "type",
            Field::Abstract => "abstract",
            Field::Keywords => "keywords",
        }
    }

    /// Look up a field by key. Matching is case-insensitive.
    ///
    /// `type_field` is accepted as an alias of `type`, the name extraction prompts
    /// use to avoid the reserved word.
    pub fn from_key(key: &str) -> Option<Field> {
        let key = key.trim().to_ascii_lowercase();
        if key == "type_field" {
            return Some(Field::TypeNote);
        }
        Field::ALL.into_iter().find(|field| field.as_key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_is_sorted_by_declaration_order() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }

    #[rstest]
    #[case("author", Some(Field::Author))]
    #[case("BookTitle", Some(Field::BookTitle))]
    #[case("howpublished", Some(Field::HowPublished))]
    #[case("type", Some(Field::TypeNote))]
    #[case("type_field", Some(Field::TypeNote))]
    #[case(" doi ", Some(Field::Doi))]
    #[case("eprint", None)]
    #[case("entry_type", None)]
    fn test_from_key(#[case] key: &str, #[case] expected: Option<Field>) {
        assert_eq!(Field::from_key(key), expected);
    }

    #[test]
    fn test_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.as_key()), Some(field));
        }
    }
}
