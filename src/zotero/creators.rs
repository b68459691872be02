//! Decomposition of BibTeX name lists into Zotero creators.
//!
//! A name list is split on `" and "`, then each name is classified by its commas:
//!
//! 1. More than one comma: a flat list of separate people, each written
//!    "First Last" (`"A, B, C"` is three creators).
//! 2. Exactly one comma: `"Last, First"`.
//! 3. No comma: split on the last whitespace, the tail being the last name. A
//!    single word is a last name with no first name.
//!
//! This is a heuristic. Multi-word surnames without a comma ("Ludwig van
//! Beethoven") and corporate names with a comma ("Acme, Inc.") come out wrong, and
//! the rules above are applied in that order regardless.

use crate::utils::{split_last_whitespace, split_names};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Creator role, matching the record field a name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatorRole {
    Author,
    Editor,
}

/// A person credited on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub creator_type: CreatorRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<CompactString>,
    pub last_name: CompactString,
}

impl Creator {
    /// Build a creator from "First Last" text.
    fn from_first_last(name: &str, role: CreatorRole) -> Self {
        match split_last_whitespace(name) {
            Some((first, last)) => Creator::new(role, Some(first), last),
            None => Creator::new(role, None, name.trim()),
        }
    }

    /// Build a creator from "Last, First" text.
    fn from_last_first(name: &str, role: CreatorRole) -> Self {
        match name.split_once(',') {
            Some((last, first)) if !last.trim().is_empty() => {
                Creator::new(role, Some(first), last)
            }
            Some((_, first)) => Creator::from_first_last(first, role),
            None => Creator::from_first_last(name, role),
        }
    }

    fn new(role: CreatorRole, first_name: Option<&str>, last_name: &str) -> Self {
        Self {
            creator_type: role,
            first_name: first_name
                .map(str::trim)
                .filter(|first| !first.is_empty())
                .map(CompactString::new),
            last_name: CompactString::new(last_name.trim()),
        }
    }
}

/// How a single name token is read, decided by its comma count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameForm {
    /// Several people separated by commas.
    List,
    /// `"Last, First"`
    LastFirst,
    /// `"First Last"` or a single word
    FirstLast,
}

impl NameForm {
    pub(crate) fn of(name: &str) -> Self {
        match name.matches(',').count() {
            0 => NameForm::FirstLast,
            1 => NameForm::LastFirst,
            _ => NameForm::List,
        }
    }
}

/// Parse one name token into one or more creators.
pub(crate) fn parse_name(name: &str, role: CreatorRole) -> Vec<Creator> {
    match NameForm::of(name) {
        NameForm::List => name
            .split(',')
            .map(str::trim)
            .filter(|person| !person.is_empty())
            .map(|person| Creator::from_first_last(person, role))
            .collect(),
        NameForm::LastFirst => vec![Creator::from_last_first(name, role)],
        NameForm::FirstLast => vec![Creator::from_first_last(name, role)],
    }
}

/// Parse a BibTeX name list (`"A and B and C"`) into creators with the given role.
pub fn parse_creators(names: &str, role: CreatorRole) -> Vec<Creator> {
    split_names(names)
        .flat_map(|name| parse_name(name, role))
        .filter(|creator| !creator.last_name.is_empty())
        .collect()
}
