//! Zotero library configuration.
//!
//! Identifies the library items are written to and the credentials used to write
//! them. Configuration can be built in code, read from the environment, or loaded
//! from TOML (`toml` feature).
//!
//! # Examples
//!
//! ```
//! use snapcite::{LibraryType, ZoteroConfig};
//!
//! let mut config = ZoteroConfig::new("123456", "secret");
//! config.set_library_type(LibraryType::Group);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.items_url(), "https://api.zotero.org/groups/123456/items");
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Public Zotero web API.
pub const DEFAULT_API_BASE: &str = "https://api.zotero.org";

/// Environment variable holding the library id.
pub const ENV_LIBRARY_ID: &str = "ZOTERO_USER_ID";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ZOTERO_API_KEY";
/// Optional environment variable selecting `user` or `group`.
pub const ENV_LIBRARY_TYPE: &str = "ZOTERO_LIBRARY_TYPE";
/// Optional environment variable overriding the API base URL.
pub const ENV_API_BASE: &str = "ZOTERO_API_BASE";

/// Kind of library an id refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    #[default]
    User,
    Group,
}

impl LibraryType {
    /// URL path segment for this library type.
    pub fn path_segment(&self) -> &'static str {
        match self {
            LibraryType::User => "users",
            LibraryType::Group => "groups",
        }
    }

    /// Parse `user` or `group`, ignoring case.
    pub fn parse(value: &str) -> Option<LibraryType> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(LibraryType::User),
            "group" => Some(LibraryType::Group),
            _ => None,
        }
    }
}

/// Where and how to write items.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoteroConfig {
    pub(crate) library_id: String,
    #[serde(default)]
    pub(crate) library_type: LibraryType,
    pub(crate) api_key: String,
    #[serde(default = "default_api_base")]
    pub(crate) api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl fmt::Debug for ZoteroConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoteroConfig")
            .field("library_id", &self.library_id)
            .field("library_type", &self.library_type)
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl ZoteroConfig {
    /// Configuration for a user library on the public API.
    #[must_use]
    pub fn new(library_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            library_id: library_id.into(),
            library_type: LibraryType::User,
            api_key: api_key.into(),
            api_base: default_api_base(),
        }
    }

    /// Read the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value is
    /// invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup using the `ZOTERO_*` names.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let library_id = lookup(ENV_LIBRARY_ID).ok_or(ConfigError::MissingEnv(ENV_LIBRARY_ID))?;
        let api_key = lookup(ENV_API_KEY).ok_or(ConfigError::MissingEnv(ENV_API_KEY))?;
        let mut config = Self::new(library_id.trim(), api_key.trim());

        if let Some(value) = lookup(ENV_LIBRARY_TYPE) {
            let library_type = LibraryType::parse(&value).ok_or_else(|| ConfigError::Invalid {
                key: ENV_LIBRARY_TYPE,
                reason: format!("expected \"user\" or \"group\", got \"{}\"", value),
            })?;
            config.set_library_type(library_type);
        }
        if let Some(api_base) = lookup(ENV_API_BASE) {
            config.set_api_base(api_base.trim());
        }

        config.validate()?;
        debug!(?config, "loaded library configuration from environment");
        Ok(config)
    }

    /// Sets the library type
    pub fn set_library_type(&mut self, library_type: LibraryType) -> &mut Self {
        self.library_type = library_type;
        self
    }

    /// Sets the API base URL
    pub fn set_api_base(&mut self, api_base: impl Into<String>) -> &mut Self {
        self.api_base = api_base.into();
        self
    }

    /// Sets the API key
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.api_key = api_key.into();
        self
    }

    pub fn library_id(&self) -> &str {
        &self.library_id
    }

    pub fn library_type(&self) -> LibraryType {
        self.library_type
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Endpoint that creates items in the configured library.
    pub fn items_url(&self) -> String {
        format!(
            "{}/{}/{}/items",
            self.api_base.trim_end_matches('/'),
            self.library_type.path_segment(),
            self.library_id
        )
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.library_id.is_empty() {
            return Err(ConfigError::Invalid {
                key: "library_id",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.library_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                key: "library_id",
                reason: format!("\"{}\" is not a numeric library id", self.library_id),
            });
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "api_key",
                reason: "must not be empty".to_string(),
            });
        }
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                key: "api_base",
                reason: format!("\"{}\" is not an http(s) URL", self.api_base),
            });
        }
        Ok(())
    }
}

#[cfg(feature = "toml")]
impl ZoteroConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
