//! Serde representation of records.
//!
//! Records travel as flat JSON objects: `entry_type`, `cite_key`, then one key per
//! present field. Deserialization goes through the same validation as
//! [`BibRecord::from_fields`].

use super::{BibRecord, Field, reserved_key};
use crate::error::ValidationError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Unvalidated record object as produced by an extraction model.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct RawRecord(BTreeMap<String, Value>);

impl TryFrom<RawRecord> for BibRecord {
    type Error = ValidationError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let mut fields = Vec::with_capacity(raw.0.len());
        for (key, value) in raw.0 {
            let text = match value {
                Value::Null => continue,
                Value::String(text) => text,
                Value::Number(number) => number.to_string(),
                other => {
                    return Err(ValidationError::BadValue {
                        field: static_key(&key)?,
                        value: other.to_string(),
                        reason: "expected a string or a number".to_string(),
                    });
                }
            };
            fields.push((key, text));
        }
        BibRecord::from_fields(fields)
    }
}

/// Resolve an input key to its canonical static name.
fn static_key(key: &str) -> Result<&'static str, ValidationError> {
    reserved_key(key)
        .or_else(|| Field::from_key(key).map(|field| field.as_key()))
        .ok_or_else(|| ValidationError::UnknownField(key.to_string()))
}

impl<'de> Deserialize<'de> for BibRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawRecord::deserialize(deserializer)?;
        BibRecord::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for BibRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len() + 2))?;
        map.serialize_entry("entry_type", &self.entry_type)?;
        map.serialize_entry("cite_key", &self.cite_key)?;
        for (field, value) in &self.values {
            match (field, self.year) {
                (Field::Year, Some(year)) => map.serialize_entry(field.as_key(), &year)?,
                _ => map.serialize_entry(field.as_key(), value)?,
            }
        }
        map.end()
    }
}
