//! Simulated training statistics
//!
//! The detector ships without trained models; these figures describe the
//! corpus and metrics the simulated models are presented as having, and are
//! served as-is by the stats endpoint. A real model backend replaces them
//! with measured values.

use serde::{Deserialize, Serialize};

/// Per-model metric values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(rename = "naiveBayes")]
    pub naive_bayes: f64,
    pub svm: f64,
    #[serde(rename = "randomForest")]
    pub random_forest: f64,
    #[serde(rename = "logisticRegression")]
    pub logistic_regression: f64,
}

/// Training corpus description and per-model quality metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    #[serde(rename = "totalEmails")]
    pub total_emails: u64,
    #[serde(rename = "spamEmails")]
    pub spam_emails: u64,
    #[serde(rename = "legitEmails")]
    pub legit_emails: u64,
    #[serde(rename = "spamPercentage")]
    pub spam_percentage: f64,
    pub features: String,
    #[serde(rename = "trainTestSplit")]
    pub train_test_split: String,
    #[serde(rename = "lastTrained")]
    pub last_trained: String,
    pub accuracy: ModelMetrics,
    pub precision: ModelMetrics,
    pub recall: ModelMetrics,
}

impl TrainingStats {
    /// The fixed, simulated statistics
    pub fn simulated() -> Self {
        Self {
            total_emails: 5728,
            spam_emails: 1368,
            legit_emails: 4360,
            spam_percentage: 23.9,
            features: "TF-IDF (3000 features), N-grams (1-3), URL analysis, Formatting metrics"
                .to_string(),
            train_test_split: "80/20".to_string(),
            last_trained: "Pattern-based (Ready for ML integration)".to_string(),
            accuracy: ModelMetrics {
                naive_bayes: 0.951,
                svm: 0.967,
                random_forest: 0.979,
                logistic_regression: 0.958,
            },
            precision: ModelMetrics {
                naive_bayes: 0.943,
                svm: 0.971,
                random_forest: 0.985,
                logistic_regression: 0.962,
            },
            recall: ModelMetrics {
                naive_bayes: 0.891,
                svm: 0.923,
                random_forest: 0.941,
                logistic_regression: 0.915,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_stats_are_consistent() {
        let stats = TrainingStats::simulated();
        assert_eq!(stats.spam_emails + stats.legit_emails, stats.total_emails);
        let pct = stats.spam_emails as f64 / stats.total_emails as f64 * 100.0;
        assert!((pct - stats.spam_percentage).abs() < 0.05);
    }

    #[test]
    fn test_stats_serialize_with_wire_names() {
        let json = serde_json::to_value(TrainingStats::simulated()).unwrap();
        assert!(json.get("totalEmails").is_some());
        assert!(json.get("accuracy").unwrap().get("randomForest").is_some());
    }
}
