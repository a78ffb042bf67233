//! Detection types and data structures

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Score added per matched suspicious keyword.
pub const KEYWORD_INCREMENT: f64 = 0.04;

/// Score removed per matched legitimacy indicator.
pub const LEGITIMACY_DECREMENT: f64 = 0.12;

/// Occurrences of a single rule counted before its contribution is capped.
pub const RULE_MATCH_CAP: usize = 2;

/// Keyword labels stop being appended to the evidence list once it holds
/// this many entries. Deliberately larger than [`MAX_PATTERNS`]; the final
/// list is deduplicated and truncated separately.
pub const KEYWORD_EVIDENCE_CAP: usize = 12;

/// Maximum unique evidence labels returned to the caller.
pub const MAX_PATTERNS: usize = 10;

/// Ensemble scores at or above this value classify as spam.
pub const SPAM_THRESHOLD: f64 = 0.5;

/// Category of a spam pattern rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    Lottery,
    Phishing,
    Urgency,
    Money,
    Investment,
    Job,
    Delivery,
    Tech,
    Romance,
    Blackmail,
    Tax,
    Subscription,
    Social,
    Giveaway,
    Charity,
    Otp,
    Payment,
    Suspicious,
    Formatting,
    /// Counter-signal; rules in this category carry negative weight
    Legitimate,
}

/// A weighted spam pattern
///
/// Immutable once the catalog is built. `weight` may be negative for
/// legitimacy counter-signals.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Compiled pattern; case sensitivity is encoded in the pattern itself
    pub regex: Regex,
    /// Score contribution per match, capped at [`RULE_MATCH_CAP`] matches
    pub weight: f64,
    /// Human-readable label appended to the evidence list
    pub label: &'static str,
    /// Rule category, used for the diversity bonus
    pub category: RuleCategory,
}

/// Per-model prediction scores, each in [0, 1]
///
/// These are deterministic-plus-jitter transforms of one shared base score,
/// not real trained classifiers. A real model backend replaces this layer
/// behind the same four-score contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPredictions {
    #[serde(rename = "naiveBayes")]
    pub naive_bayes: f64,
    pub svm: f64,
    #[serde(rename = "randomForest")]
    pub random_forest: f64,
    #[serde(rename = "logisticRegression")]
    pub logistic_regression: f64,
}

/// Result of classifying one message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Final verdict: ensemble score at or above [`SPAM_THRESHOLD`]
    #[serde(rename = "isSpam")]
    pub is_spam: bool,
    /// Ensemble score in [0, 1]
    pub score: f64,
    /// Deduplicated evidence labels in discovery order, at most
    /// [`MAX_PATTERNS`] entries
    pub patterns: Vec<String>,
    /// Per-model sub-scores
    #[serde(rename = "modelPredictions")]
    pub model_predictions: ModelPredictions,
}

/// Deterministic output of the base scoring pass, fed to the model
/// simulators
#[derive(Debug, Clone)]
pub struct BaseAnalysis {
    /// Base score clamped to [0, 1]
    pub score: f64,
    /// Deduplicated, truncated evidence labels
    pub patterns: Vec<String>,
    /// Suspicious keywords found
    pub keyword_count: usize,
    /// Distinct rule categories matched
    pub category_count: usize,
    /// `http(s)://` URLs found
    pub url_count: usize,
    /// Uppercase-to-letter ratio of the combined text
    pub caps_ratio: f64,
    /// Legitimacy indicators matched
    pub legitimate_count: usize,
}
