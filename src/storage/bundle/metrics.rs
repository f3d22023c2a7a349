//! Evaluation metrics artifact

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat metric name → value mapping stored as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, f64>);

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metric
    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: f64) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Metric names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Parse a metrics payload.
    ///
    /// Anything other than a flat object of numbers is rejected.
    pub fn from_json(payload: &[u8]) -> Result<Self, String> {
        serde_json::from_slice::<BTreeMap<String, f64>>(payload)
            .map(Self)
            .map_err(|e| format!("expected a flat JSON object of numbers: {e}"))
    }

    /// Serialize for upload. JSON has no encoding for NaN or infinities.
    pub fn to_json(&self) -> Result<Vec<u8>, String> {
        if let Some((name, value)) = self.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("metric {name} is not finite ({value})"));
        }
        serde_json::to_vec_pretty(&self.0).map_err(|e| e.to_string())
    }
}

impl FromIterator<(String, f64)> for Metrics {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_parse_example() {
        let metrics = Metrics::from_json(br#"{"accuracy": 0.91, "f1_score": 0.89}"#).unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics.get("accuracy"), Some(0.91));
        assert_eq!(metrics.get("f1_score"), Some(0.89));
    }

    #[test]
    fn test_metrics_integer_values() {
        let metrics = Metrics::from_json(br#"{"support": 400}"#).unwrap();
        assert_eq!(metrics.get("support"), Some(400.0));
    }

    #[test]
    fn test_metrics_rejects_non_flat() {
        let cases: [&[u8]; 6] = [
            br#"[0.91, 0.89]"#,
            br#"{"accuracy": "high"}"#,
            br#"{"report": {"precision": 0.9}}"#,
            br#"{"accuracy": null}"#,
            b"not json",
            b"\xff\xfe",
        ];
        for bad in cases {
            assert!(Metrics::from_json(bad).is_err());
        }
    }

    #[test]
    fn test_metrics_to_json_rejects_nan() {
        let metrics = Metrics::new().with_metric("loss", f64::NAN);
        assert!(metrics.to_json().unwrap_err().contains("loss"));
    }

    #[test]
    fn test_metrics_names_sorted() {
        let metrics = Metrics::new().with_metric("f1_score", 0.8).with_metric("accuracy", 0.9);
        assert_eq!(metrics.names().collect::<Vec<_>>(), vec!["accuracy", "f1_score"]);
    }
}
