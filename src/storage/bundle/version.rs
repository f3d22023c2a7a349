//! Version identifiers

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{Result, StoreError};

/// `chrono` format of generated version identifiers, e.g. `20240102-000000`
pub const VERSION_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Opaque, lexically sortable version identifier.
///
/// Ordering is plain string ordering, so the most recent version is the
/// maximum. A version is always exactly one storage path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionId(String);

impl VersionId {
    /// Validate a version token. Separators of any backend (`/`, `\`) are
    /// rejected so every backend can store the version as one segment.
    pub fn parse(token: &str) -> Result<Self> {
        let valid = !token.is_empty()
            && token != "."
            && token != ".."
            && !token.chars().any(|c| c == '/' || c == '\\' || c.is_whitespace() || c.is_control());
        if valid {
            Ok(Self(token.to_string()))
        } else {
            Err(StoreError::InvalidVersion(token.to_string()))
        }
    }

    /// Version for a training run starting now
    pub fn generate() -> Self {
        Self::at(Utc::now())
    }

    /// Version for a training run started at `time`
    pub fn at(time: DateTime<Utc>) -> Self {
        Self(time.format(VERSION_FORMAT).to_string())
    }

    /// The token as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creation time, when the token was produced by [`VersionId::generate`]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.0, VERSION_FORMAT).ok().map(|t| t.and_utc())
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for VersionId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionId {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<VersionId> for String {
    fn from(value: VersionId) -> Self {
        value.0
    }
}
