//! BibTeX rendering of records.

use super::BibRecord;
use std::fmt;

impl BibRecord {
    /// Render the record as a BibTeX entry.
    ///
    /// Fields appear one per line in canonical order; absent fields are left out
    /// entirely. With `with_cite_key == false` the opening line is just
    /// `@<entry_type>{`.
    ///
    /// # Example
    ///
    /// ```
    /// use snapcite::BibRecord;
    ///
    /// let record = BibRecord::builder("misc", "key").title("X").build().unwrap();
    /// assert_eq!(record.format(true), "@misc{key,\n  title = {X},\n}");
    /// assert_eq!(record.format(false), "@misc{\n  title = {X},\n}");
    /// ```
    pub fn format(&self, with_cite_key: bool) -> String {
        let mut lines = Vec::with_capacity(self.values.len() + 2);
        if with_cite_key {
            lines.push(format!("@{}{{{},", self.entry_type, self.cite_key));
        } else {
            lines.push(format!("@{}{{", self.entry_type));
        }

        for (field, value) in self.fields() {
            lines.push(format!("  {} = {{{}}},", field.as_key(), value));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl fmt::Display for BibRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BibRecord, Field};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_misc() {
        let record = BibRecord::builder("misc", "key").title("X").build().unwrap();
        assert_eq!(record.format(true), "@misc{key,\n  title = {X},\n}");
    }

    #[test]
    fn test_without_cite_key() {
        let record = BibRecord::builder("misc", "key").title("X").build().unwrap();
        let formatted = record.format(false);
        assert_eq!(formatted.lines().next(), Some("@misc{"));
        assert_eq!(formatted, "@misc{\n  title = {X},\n}");
    }

    #[test]
    fn test_empty_misc() {
        let record = BibRecord::builder("misc", "empty").build().unwrap();
        assert_eq!(record.format(true), "@misc{empty,\n}");
    }

    #[test]
    fn test_full_field_order() {
        let record = BibRecord::builder("InProceedings", "vaswani2017")
            .field(Field::Keywords, "nlp, attention")
            .field(Field::Abstract, "We propose...")
            .field(Field::TypeNote, "Oral")
            .field(Field::HowPublished, "online")
            .field(Field::Note, "Best paper")
            .field(Field::Month, "Dec")
            .field(Field::Address, "Long Beach")
            .field(Field::Issn, "1049-5258")
            .field(Field::Isbn, "978-1")
            .field(Field::Url, "https://example.org")
            .field(Field::Doi, "10.5555/3295222")
            .field(Field::Edition, "1")
            .field(Field::Series, "NeurIPS")
            .field(Field::Chapter, "3")
            .field(Field::Pages, "5998--6008")
            .field(Field::Number, "7")
            .field(Field::Volume, "30")
            .field(Field::Organization, "NeurIPS Foundation")
            .field(Field::Publisher, "Curran")
            .field(Field::BookTitle, "Advances in NeurIPS")
            .year(2017)
            .title("Attention Is All You Need")
            .editor("Guyon, I.")
            .author("Vaswani, Ashish and Shazeer, Noam")
            .build()
            .unwrap();

        let expected = [
            "@InProceedings{vaswani2017,",
            "  author = {Vaswani, Ashish and Shazeer, Noam},",
            "  editor = {Guyon, I.},",
            "  title = {Attention Is All You Need},",
            "  year = {2017},",
            "  booktitle = {Advances in NeurIPS},",
            "  publisher = {Curran},",
            "  organization = {NeurIPS Foundation},",
            "  volume = {30},",
            "  number = {7},",
            "  pages = {5998--6008},",
            "  chapter = {3},",
            "  series = {NeurIPS},",
            "  edition = {1},",
            "  doi = {10.5555/3295222},",
            "  url = {https://example.org},",
            "  isbn = {978-1},",
            "  issn = {1049-5258},",
            "  address = {Long Beach},",
            "  month = {Dec},",
            "  note = {Best paper},",
            "  howpublished = {online},",
            "  type = {Oral},",
            "  abstract = {We propose...},",
            "  keywords = {nlp, attention},",
            "}",
        ];
        assert_eq!(record.format(true).lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_year_renders_as_integer() {
        let record = BibRecord::builder("misc", "k")
            .field(Field::Year, "0042")
            .build()
            .unwrap();
        assert_eq!(record.format(true), "@misc{k,\n  year = {42},\n}");
    }

    #[test]
    fn test_display_includes_cite_key() {
        let record = BibRecord::builder("booklet", "guide").title("Guide").build().unwrap();
        assert_eq!(record.to_string(), record.format(true));
    }
}
