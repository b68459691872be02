//! Create-items response inspection.
//!
//! Zotero answers a write with four objects keyed by the index of the item in
//! the request. Only which keys appear in which object matters here; the created
//! item bodies are kept as opaque JSON.

use crate::error::CitationError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Body of a create-items response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateItemsResponse {
    /// Created items, full JSON
    #[serde(default)]
    pub successful: BTreeMap<String, Value>,
    /// Created item keys
    #[serde(default)]
    pub success: BTreeMap<String, String>,
    #[serde(default)]
    pub unchanged: BTreeMap<String, String>,
    #[serde(default)]
    pub failed: BTreeMap<String, FailedWrite>,
}

/// A rejected item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedWrite {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
}

impl CreateItemsResponse {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::Json`] if the body is not a response object.
    pub fn from_json(body: &str) -> Result<Self, CitationError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Number of created items. Older servers only fill `success`.
    pub fn created(&self) -> usize {
        self.successful.len().max(self.success.len())
    }

    /// Condense the response into counts and failure messages.
    pub fn summary(&self) -> ImportSummary {
        let failures = self
            .failed
            .iter()
            .sorted_by_key(|(index, _)| index.parse::<usize>().unwrap_or(usize::MAX))
            .map(|(index, failure)| match failure.code {
                Some(code) => format!("item {}: {} ({})", index, failure.message, code),
                None => format!("item {}: {}", index, failure.message),
            })
            .collect();

        ImportSummary {
            created: self.created(),
            unchanged: self.unchanged.len(),
            failures,
        }
    }
}

/// Outcome of one or more create-items writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub unchanged: usize,
    pub failures: Vec<String>,
}

impl ImportSummary {
    /// Nothing failed and at least one item was created or already present.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.created + self.unchanged > 0
    }

    /// Fold the outcome of another write into this one.
    pub fn merge(&mut self, other: ImportSummary) {
        self.created += other.created;
        self.unchanged += other.unchanged;
        self.failures.extend(other.failures);
    }
}
