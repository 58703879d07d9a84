//! Controlled-vocabulary value mappings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::text::normalize_str;

/// What to do with a non-null value that has no entry in the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Keep the value unchanged.
    #[default]
    PassThrough,
    /// Replace the value with a fixed sentinel.
    Sentinel(String),
    /// Abort the run.
    Fail,
}

/// Finite map from normalized raw values to canonical values.
///
/// Keys are required to be in [`normalize_str`] form so that lookups against
/// normalized columns are exact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ValueMappingRepr", into = "ValueMappingRepr")]
pub struct ValueMapping {
    entries: BTreeMap<String, String>,
    unmapped: UnmappedPolicy,
}

impl ValueMapping {
    /// Build a mapping from `(raw, canonical)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnnormalizedMappingKey`] if a key would change
    /// under normalization.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (key, value) in pairs {
            let key = key.into();
            let normalized = normalize_str(&key);
            if normalized != key {
                return Err(ModelError::UnnormalizedMappingKey { key, normalized });
            }
            entries.insert(key, value.into());
        }
        Ok(Self {
            entries,
            unmapped: UnmappedPolicy::default(),
        })
    }

    /// Build a mapping from `(raw, canonical)` pairs, normalizing each key.
    pub fn from_pairs_normalized<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (normalize_str(key.as_ref()), value.into()))
            .collect();
        Self {
            entries,
            unmapped: UnmappedPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_unmapped(mut self, policy: UnmappedPolicy) -> Self {
        self.unmapped = policy;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn unmapped(&self) -> &UnmappedPolicy {
        &self.unmapped
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Serialize, Deserialize)]
struct ValueMappingRepr {
    entries: BTreeMap<String, String>,
    #[serde(default)]
    unmapped: UnmappedPolicy,
}

impl TryFrom<ValueMappingRepr> for ValueMapping {
    type Error = ModelError;

    fn try_from(repr: ValueMappingRepr) -> Result<Self> {
        Ok(Self::from_pairs(repr.entries)?.with_unmapped(repr.unmapped))
    }
}

impl From<ValueMapping> for ValueMappingRepr {
    fn from(mapping: ValueMapping) -> Self {
        Self {
            entries: mapping.entries,
            unmapped: mapping.unmapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unnormalized_key() {
        let err = ValueMapping::from_pairs([("Refunded ", "refund")]).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnnormalizedMappingKey {
                key: "Refunded ".to_string(),
                normalized: "refunded".to_string(),
            }
        );
    }

    #[test]
    fn test_from_pairs_normalized() {
        let mapping = ValueMapping::from_pairs_normalized([(" Refunded ", "refund")]);
        assert_eq!(mapping.get("refunded"), Some("refund"));
    }

    #[test]
    fn test_lookup() {
        let mapping = ValueMapping::from_pairs([("refunded", "refund")]).unwrap();
        assert_eq!(mapping.get("refunded"), Some("refund"));
        assert_eq!(mapping.get("paid"), None);
        assert_eq!(mapping.unmapped(), &UnmappedPolicy::PassThrough);
    }

    #[test]
    fn test_deserialize_validates_keys() {
        let ok: ValueMapping = serde_json::from_str(
            r#"{"entries":{"paid":"paid"},"unmapped":{"sentinel":"other"}}"#,
        )
        .unwrap();
        assert_eq!(ok.unmapped(), &UnmappedPolicy::Sentinel("other".to_string()));

        let bad = serde_json::from_str::<ValueMapping>(r#"{"entries":{"PAID":"paid"}}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_unmapped_policy_defaults_to_pass_through() {
        let mapping: ValueMapping =
            serde_json::from_str(r#"{"entries":{"refund":"refund"}}"#).unwrap();
        assert_eq!(mapping.unmapped(), &UnmappedPolicy::PassThrough);
        assert_eq!(mapping.entries().count(), 1);
    }
}
