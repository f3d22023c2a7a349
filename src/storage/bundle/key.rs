//! Artifact names and the (version, name) → storage key mapping

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::version::VersionId;

/// Prefix under which every versioned bundle lives
pub const MODELS_PREFIX: &str = "models/";

/// The four artifacts of a model version bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactName {
    /// Serialized classifier state
    Model,
    /// Serialized feature-extraction state
    Vectorizer,
    /// Flat metric name → value mapping
    Metrics,
    /// Rendered confusion matrix image
    ConfusionImage,
}

impl ArtifactName {
    /// All artifact names in upload order
    pub const ALL: [ArtifactName; 4] = [
        ArtifactName::Model,
        ArtifactName::Vectorizer,
        ArtifactName::Metrics,
        ArtifactName::ConfusionImage,
    ];

    /// Name used as the last key segment
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactName::Model => "model",
            ArtifactName::Vectorizer => "vectorizer",
            ArtifactName::Metrics => "metrics",
            ArtifactName::ConfusionImage => "confusion_image",
        }
    }

    /// File name in the legacy flat layout
    pub fn legacy_file_name(&self) -> &'static str {
        match self {
            ArtifactName::Model => "model.joblib",
            ArtifactName::Vectorizer => "vectorizer.joblib",
            ArtifactName::Metrics => "metrics.json",
            ArtifactName::ConfusionImage => "confusion_matrix.png",
        }
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactName::ALL
            .into_iter()
            .find(|name| name.as_str() == s || name.legacy_file_name() == s)
            .or_else(|| (s == "confusion-image").then_some(ArtifactName::ConfusionImage))
            .ok_or_else(|| {
                format!(
                    "Unknown artifact: {s}. Valid artifacts: model, vectorizer, metrics, confusion_image"
                )
            })
    }
}

/// Storage address of one artifact of one version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactKey {
    pub version: VersionId,
    pub name: ArtifactName,
}

impl ArtifactKey {
    pub fn new(version: VersionId, name: ArtifactName) -> Self {
        Self { version, name }
    }

    /// `models/{version}/{name}`
    pub fn path(&self) -> String {
        format!("{MODELS_PREFIX}{}/{}", self.version, self.name)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Key of `name` in the legacy flat layout below `prefix`
pub fn legacy_path(prefix: &str, name: ArtifactName) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        name.legacy_file_name().to_string()
    } else {
        format!("{prefix}/{}", name.legacy_file_name())
    }
}

/// Extract the version folder from a listed key.
///
/// Only `models/{version}/...` keys name a version; flat files directly
/// under the prefix and malformed segments yield `None`.
pub fn version_from_key(key: &str) -> Option<VersionId> {
    let rest = key.strip_prefix(MODELS_PREFIX)?;
    let (token, _artifact) = rest.split_once('/')?;
    VersionId::parse(token).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(token: &str) -> VersionId {
        VersionId::parse(token).unwrap()
    }

    #[test]
    fn test_artifact_key_path() {
        let key = ArtifactKey::new(v("20240101-000000"), ArtifactName::ConfusionImage);
        assert_eq!(key.path(), "models/20240101-000000/confusion_image");
        assert_eq!(key.to_string(), key.path());
    }

    #[test]
    fn test_artifact_name_parse() {
        assert_eq!("model".parse::<ArtifactName>().unwrap(), ArtifactName::Model);
        assert_eq!("metrics.json".parse::<ArtifactName>().unwrap(), ArtifactName::Metrics);
        assert_eq!(
            "confusion-image".parse::<ArtifactName>().unwrap(),
            ArtifactName::ConfusionImage
        );
        assert!("weights".parse::<ArtifactName>().is_err());
    }

    #[test]
    fn test_artifact_name_display_roundtrip() {
        for name in ArtifactName::ALL {
            assert_eq!(name.to_string().parse::<ArtifactName>().unwrap(), name);
        }
    }

    #[test]
    fn test_legacy_path() {
        assert_eq!(legacy_path("", ArtifactName::Model), "model.joblib");
        assert_eq!(legacy_path("/", ArtifactName::Metrics), "metrics.json");
        assert_eq!(legacy_path("legacy/", ArtifactName::ConfusionImage), "legacy/confusion_matrix.png");
    }

    #[test]
    fn test_version_from_key() {
        assert_eq!(version_from_key("models/20240101-000000/model"), Some(v("20240101-000000")));
        assert_eq!(version_from_key("models/v1/"), Some(v("v1")));
        assert_eq!(version_from_key("models/v1/nested/extra"), Some(v("v1")));
    }

    #[test]
    fn test_version_from_key_skips_unrelated() {
        assert_eq!(version_from_key("models/model.joblib"), None);
        assert_eq!(version_from_key("models//model"), None);
        assert_eq!(version_from_key("models/"), None);
        assert_eq!(version_from_key("model.joblib"), None);
        assert_eq!(version_from_key("other/v1/model"), None);
    }
}
