/// Whether a value carries no text.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parses a year value (e.g., "2020", " 1999 ", "-44")
///
/// # Arguments
///
/// * `year_str` - The year string to parse
pub(crate) fn parse_year(year_str: &str) -> Option<i32> {
    year_str.trim().parse::<i32>().ok()
}

/// Splits a BibTeX name list on the literal `" and "` separator, trimming each
/// name and dropping blank ones.
pub(crate) fn split_names(names: &str) -> impl Iterator<Item = &str> {
    names
        .split(" and ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Splits a comma-separated keyword list into trimmed, non-blank keywords.
pub(crate) fn split_keywords(keywords: &str) -> impl Iterator<Item = &str> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
}

/// Splits a name on its last whitespace boundary into (before, after).
///
/// Returns `None` when the name has no inner whitespace.
pub(crate) fn split_last_whitespace(name: &str) -> Option<(&str, &str)> {
    let name = name.trim();
    name.rfind(char::is_whitespace).map(|index| {
        let (first, last) = name.split_at(index);
        (first.trim_end(), last.trim_start())
    })
}
