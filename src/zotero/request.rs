//! Create-items request descriptions.
//!
//! The HTTP client is external; this module only describes what it must send.

use super::ZoteroItem;
use crate::config::ZoteroConfig;
use crate::error::CitationError;
use itertools::Itertools;
use tracing::debug;

/// Zotero accepts at most this many items in one write request.
pub const MAX_ITEMS_PER_REQUEST: usize = 50;

/// Web API version the payloads are written against.
pub const API_VERSION: &str = "3";

/// One POST to the library's items endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItemsRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON array of items
    pub body: String,
}

impl CreateItemsRequest {
    /// Split `items` into as many requests as the per-request limit requires.
    ///
    /// # Errors
    ///
    /// [`CitationError::Config`] if the configuration is invalid,
    /// [`CitationError::Json`] if an item cannot be serialized.
    ///
    /// # Example
    ///
    /// ```
    /// use snapcite::{ItemType, ZoteroConfig, ZoteroItem};
    /// use snapcite::zotero::CreateItemsRequest;
    ///
    /// let config = ZoteroConfig::new("123456", "secret");
    /// let items = vec![ZoteroItem::new(ItemType::Document)];
    /// let requests = CreateItemsRequest::batch(&config, &items).unwrap();
    /// assert_eq!(requests.len(), 1);
    /// assert_eq!(requests[0].url, "https://api.zotero.org/users/123456/items");
    /// ```
    pub fn batch(config: &ZoteroConfig, items: &[ZoteroItem]) -> Result<Vec<Self>, CitationError> {
        config.validate()?;
        let url = config.items_url();

        let requests: Vec<Self> = items
            .chunks(MAX_ITEMS_PER_REQUEST)
            .map(|chunk| {
                Ok::<_, CitationError>(CreateItemsRequest {
                    method: "POST",
                    url: url.clone(),
                    headers: vec![
                        ("Zotero-API-Key", config.api_key().to_string()),
                        ("Zotero-API-Version", API_VERSION.to_string()),
                        ("Content-Type", "application/json".to_string()),
                    ],
                    body: serde_json::to_string(chunk)?,
                })
            })
            .try_collect()?;

        debug!(items = items.len(), requests = requests.len(), %url, "prepared create-items requests");
        Ok(requests)
    }

    /// Value of a header, if set.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemType;
    use crate::config::LibraryType;
    use pretty_assertions::assert_eq;

    fn items(count: usize) -> Vec<ZoteroItem> {
        (0..count).map(|_| ZoteroItem::new(ItemType::Document)).collect()
    }

    #[test]
    fn test_single_request() {
        let config = ZoteroConfig::new("123456", "secret");
        let requests = CreateItemsRequest::batch(&config, &items(2)).unwrap();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "https://api.zotero.org/users/123456/items");
        assert_eq!(request.header("zotero-api-key"), Some("secret"));
        assert_eq!(request.header("Zotero-API-Version"), Some("3"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            request.body,
            r#"[{"itemType":"document","creators":[]},{"itemType":"document","creators":[]}]"#
        );
    }

    #[test]
    fn test_batches_at_limit() {
        let config = ZoteroConfig::new("1", "key");
        let requests = CreateItemsRequest::batch(&config, &items(101)).unwrap();
        assert_eq!(requests.len(), 3);

        let sizes: Vec<usize> = requests
            .iter()
            .map(|request| {
                serde_json::from_str::<Vec<ZoteroItem>>(&request.body)
                    .unwrap()
                    .len()
            })
            .collect();
        assert_eq!(sizes, vec![50, 50, 1]);
    }

    #[test]
    fn test_no_items_no_requests() {
        let config = ZoteroConfig::new("1", "key");
        assert!(CreateItemsRequest::batch(&config, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_group_library_url() {
        let mut config = ZoteroConfig::new("987", "key");
        config.set_library_type(LibraryType::Group);
        let requests = CreateItemsRequest::batch(&config, &items(1)).unwrap();
        assert_eq!(requests[0].url, "https://api.zotero.org/groups/987/items");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ZoteroConfig::new("", "key");
        let result = CreateItemsRequest::batch(&config, &items(1));
        assert!(matches!(result, Err(CitationError::Config(_))));
    }
}
