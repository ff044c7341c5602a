//! SecretRecord entity - a namespaced key/value secret
//!
//! The namespace is not stored here; it is implied by the cluster connection
//! the record is provisioned through.

use std::collections::BTreeMap;
use std::fmt;

/// A secret to be (re)created in the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRecord {
    name: String,
    /// Sorted so the generated command line is stable
    data: BTreeMap<String, String>,
}

/// Rejected `KEY=VALUE` input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretPairError {
    pub input: String,
}

impl fmt::Display for SecretPairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid secret entry '{}': expected KEY=VALUE with a non-empty key",
            self.input
        )
    }
}

impl std::error::Error for SecretPairError {}

impl SecretRecord {
    pub fn new(name: impl Into<String>, data: BTreeMap<String, String>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Build a record from `KEY=VALUE` strings.
    ///
    /// Values may contain `=`; only the first one separates key from value.
    /// A repeated key keeps the last value.
    pub fn from_pairs<I, S>(name: impl Into<String>, pairs: I) -> Result<Self, SecretPairError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = BTreeMap::new();
        for pair in pairs {
            let pair = pair.as_ref();
            match pair.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    data.insert(key.trim().to_string(), value.to_string());
                }
                _ => {
                    return Err(SecretPairError {
                        input: pair.to_string(),
                    })
                }
            }
        }
        Ok(Self::new(name, data))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_splits_on_first_equals() {
        let record =
            SecretRecord::from_pairs("acme", ["POSTGRES_PASSWORD=a=b", "POSTGRES_USER=acme"])
                .unwrap();
        assert_eq!(record.name(), "acme");
        assert_eq!(
            record.data().get("POSTGRES_PASSWORD").map(String::as_str),
            Some("a=b")
        );
        assert_eq!(
            record.keys().collect::<Vec<_>>(),
            vec!["POSTGRES_PASSWORD", "POSTGRES_USER"]
        );
    }

    #[test]
    fn from_pairs_rejects_missing_separator() {
        let err = SecretRecord::from_pairs("acme", ["POSTGRES_HOST"]).unwrap_err();
        assert_eq!(err.input, "POSTGRES_HOST");
    }

    #[test]
    fn from_pairs_rejects_empty_key() {
        assert!(SecretRecord::from_pairs("acme", ["=value"]).is_err());
    }

    #[test]
    fn from_pairs_allows_empty_value() {
        let record = SecretRecord::from_pairs("acme", ["TOKEN="]).unwrap();
        assert_eq!(record.data().get("TOKEN").map(String::as_str), Some(""));
    }
}
