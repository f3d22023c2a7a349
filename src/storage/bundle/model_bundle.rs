//! Model version bundles and training hand-off

use super::key::ArtifactName;
use super::metrics::Metrics;
use super::version::VersionId;

/// State of one artifact inside a loaded bundle
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactSlot<T> {
    Present(T),
    /// Not uploaded (yet)
    Missing,
    /// Present but unparseable
    Malformed(String),
}

impl<T> ArtifactSlot<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, ArtifactSlot::Present(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            ArtifactSlot::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Short status word for reports
    pub fn status(&self) -> &'static str {
        match self {
            ArtifactSlot::Present(_) => "present",
            ArtifactSlot::Missing => "missing",
            ArtifactSlot::Malformed(_) => "malformed",
        }
    }
}

/// The four co-versioned artifacts of one training run, possibly partial
#[derive(Debug, Clone, PartialEq)]
pub struct ModelBundle {
    pub model: ArtifactSlot<Vec<u8>>,
    pub vectorizer: ArtifactSlot<Vec<u8>>,
    pub metrics: ArtifactSlot<Metrics>,
    pub confusion_image: ArtifactSlot<Vec<u8>>,
}

impl ModelBundle {
    /// Status word of one artifact
    pub fn status(&self, name: ArtifactName) -> &'static str {
        match name {
            ArtifactName::Model => self.model.status(),
            ArtifactName::Vectorizer => self.vectorizer.status(),
            ArtifactName::Metrics => self.metrics.status(),
            ArtifactName::ConfusionImage => self.confusion_image.status(),
        }
    }

    fn is_present(&self, name: ArtifactName) -> bool {
        self.status(name) == "present"
    }

    /// Whether all four artifacts are present and readable
    pub fn is_complete(&self) -> bool {
        ArtifactName::ALL.iter().all(|name| self.is_present(*name))
    }

    /// Names of artifacts that were not found
    pub fn missing(&self) -> Vec<ArtifactName> {
        ArtifactName::ALL.into_iter().filter(|name| self.status(*name) == "missing").collect()
    }

    /// Names of artifacts that loaded successfully
    pub fn present(&self) -> Vec<ArtifactName> {
        ArtifactName::ALL.into_iter().filter(|name| self.is_present(*name)).collect()
    }

    /// Metrics if present, for rendering
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_option()
    }
}

/// Everything a training run hands to the store
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingOutput {
    /// Explicit version; generated from the clock when `None`
    pub version: Option<VersionId>,
    pub model: Vec<u8>,
    pub vectorizer: Vec<u8>,
    pub metrics: Metrics,
    pub confusion_image: Vec<u8>,
}

impl TrainingOutput {
    pub fn new(model: Vec<u8>, vectorizer: Vec<u8>, metrics: Metrics, confusion_image: Vec<u8>) -> Self {
        Self { version: None, model, vectorizer, metrics, confusion_image }
    }

    /// Publish under a fixed version instead of a generated one
    pub fn with_version(mut self, version: VersionId) -> Self {
        self.version = Some(version);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial() -> ModelBundle {
        ModelBundle {
            model: ArtifactSlot::Present(b"weights".to_vec()),
            vectorizer: ArtifactSlot::Missing,
            metrics: ArtifactSlot::Present(Metrics::new().with_metric("accuracy", 0.9)),
            confusion_image: ArtifactSlot::Missing,
        }
    }

    #[test]
    fn test_partial_bundle_reports_missing() {
        let bundle = partial();
        assert!(!bundle.is_complete());
        assert_eq!(bundle.missing(), vec![ArtifactName::Vectorizer, ArtifactName::ConfusionImage]);
        assert_eq!(bundle.present(), vec![ArtifactName::Model, ArtifactName::Metrics]);
        assert_eq!(bundle.metrics().and_then(|m| m.get("accuracy")), Some(0.9));
    }

    #[test]
    fn test_malformed_is_neither_missing_nor_present() {
        let mut bundle = partial();
        bundle.metrics = ArtifactSlot::Malformed("expected object".to_string());
        assert!(!bundle.missing().contains(&ArtifactName::Metrics));
        assert!(!bundle.present().contains(&ArtifactName::Metrics));
        assert_eq!(bundle.status(ArtifactName::Metrics), "malformed");
        assert!(bundle.metrics().is_none());
    }

    #[test]
    fn test_complete_bundle() {
        let bundle = ModelBundle {
            model: ArtifactSlot::Present(vec![1]),
            vectorizer: ArtifactSlot::Present(vec![2]),
            metrics: ArtifactSlot::Present(Metrics::new()),
            confusion_image: ArtifactSlot::Present(vec![3]),
        };
        assert!(bundle.is_complete());
        assert!(bundle.missing().is_empty());
    }

    #[test]
    fn test_slot_accessors() {
        let slot = ArtifactSlot::Present(5);
        assert_eq!(slot.as_option(), Some(&5));
        assert_eq!(ArtifactSlot::<u8>::Missing.as_option(), None);
        assert_eq!(ArtifactSlot::<u8>::Malformed("bad".to_string()).as_option(), None);
    }
}
