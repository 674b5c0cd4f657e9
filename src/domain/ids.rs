//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for dataset identifiers.
//! The type ensures a registry key can never be empty.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Dataset identifier newtype wrapper
///
/// Represents the symbolic name of a registered dataset, e.g. `small_100k`.
///
/// # Examples
///
/// ```
/// use shardprep::domain::ids::DatasetId;
/// use std::str::FromStr;
///
/// let id = DatasetId::from_str("small_100k").unwrap();
/// assert_eq!(id.as_str(), "small_100k");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatasetId(String);

impl DatasetId {
    /// Creates a new DatasetId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The dataset identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(DatasetId)` if the identifier is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Dataset identifier cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatasetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DatasetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets a map keyed by DatasetId be queried with a plain &str
impl Borrow<str> for DatasetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
