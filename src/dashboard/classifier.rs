//! Seam to the external classifier for interactive A/B scoring.
//!
//! The store hands out raw model and vectorizer bytes; turning them into a
//! predictor belongs to whichever runtime produced them.

use thiserror::Error;

use super::Sentiment;
use crate::storage::bundle::{ArtifactName, ModelBundle};

/// Classifier errors
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Cannot build a classifier: {0} is not available in this bundle")]
    MissingArtifact(ArtifactName),

    #[error("Failed to load classifier: {0}")]
    Load(String),

    #[error("Prediction failed: {0}")]
    Predict(String),
}

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// A loaded text classifier
pub trait Classifier {
    /// Raw numeric label for `text`
    fn predict(&self, text: &str) -> Result<i64>;

    /// Label mapped to a sentiment
    fn sentiment(&self, text: &str) -> Result<Sentiment> {
        self.predict(text).map(Sentiment::from_label)
    }
}

/// Turns serialized model and vectorizer state into a [`Classifier`]
pub trait ClassifierLoader {
    fn load(&self, model: &[u8], vectorizer: &[u8]) -> Result<Box<dyn Classifier>>;
}

impl ModelBundle {
    /// Build a classifier, refusing when either half of its state is absent
    pub fn classifier(&self, loader: &dyn ClassifierLoader) -> Result<Box<dyn Classifier>> {
        let model =
            self.model.as_option().ok_or(ClassifierError::MissingArtifact(ArtifactName::Model))?;
        let vectorizer = self
            .vectorizer
            .as_option()
            .ok_or(ClassifierError::MissingArtifact(ArtifactName::Vectorizer))?;
        loader.load(model, vectorizer)
    }
}

/// Predictions of two models for the same text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbPrediction {
    pub a: Sentiment,
    pub b: Sentiment,
}

impl AbPrediction {
    pub fn agree(&self) -> bool {
        self.a == self.b
    }
}

/// Score `text` with both models
pub fn ab_predict(a: &dyn Classifier, b: &dyn Classifier, text: &str) -> Result<AbPrediction> {
    Ok(AbPrediction { a: a.sentiment(text)?, b: b.sentiment(text)? })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::bundle::{ArtifactSlot, Metrics};

    /// Labels a text positive when it contains the keyword stored as the model
    struct KeywordClassifier {
        keyword: String,
    }

    impl Classifier for KeywordClassifier {
        fn predict(&self, text: &str) -> Result<i64> {
            Ok(i64::from(text.contains(&self.keyword)))
        }
    }

    struct KeywordLoader;

    impl ClassifierLoader for KeywordLoader {
        fn load(&self, model: &[u8], _vectorizer: &[u8]) -> Result<Box<dyn Classifier>> {
            let keyword = String::from_utf8(model.to_vec()).map_err(|e| ClassifierError::Load(e.to_string()))?;
            Ok(Box::new(KeywordClassifier { keyword }))
        }
    }

    fn bundle(model: &[u8]) -> ModelBundle {
        ModelBundle {
            model: ArtifactSlot::Present(model.to_vec()),
            vectorizer: ArtifactSlot::Present(Vec::new()),
            metrics: ArtifactSlot::Present(Metrics::new()),
            confusion_image: ArtifactSlot::Missing,
        }
    }

    #[test]
    fn test_ab_predict() {
        let a = bundle(b"great").classifier(&KeywordLoader).unwrap();
        let b = bundle(b"boring").classifier(&KeywordLoader).unwrap();

        let prediction = ab_predict(a.as_ref(), b.as_ref(), "a great book").unwrap();
        assert_eq!(prediction, AbPrediction { a: Sentiment::Positive, b: Sentiment::Negative });
        assert!(!prediction.agree());
    }

    #[test]
    fn test_classifier_requires_model_and_vectorizer() {
        let mut partial = bundle(b"great");
        partial.vectorizer = ArtifactSlot::Missing;
        assert!(matches!(
            partial.classifier(&KeywordLoader),
            Err(ClassifierError::MissingArtifact(ArtifactName::Vectorizer))
        ));

        partial.model = ArtifactSlot::Missing;
        assert!(matches!(
            partial.classifier(&KeywordLoader),
            Err(ClassifierError::MissingArtifact(ArtifactName::Model))
        ));
    }

    #[test]
    fn test_loader_error_propagates() {
        let broken = bundle(&[0xff, 0xfe]);
        assert!(matches!(broken.classifier(&KeywordLoader), Err(ClassifierError::Load(_))));
    }
}
