//! Spam detection engine
//!
//! Deterministic rule-and-feature scoring followed by four simulated model
//! transforms and a fixed-weight ensemble. The base pass is a pure function
//! of the catalog and the input text; all randomness is confined to the
//! model jitter and injected by the caller.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use super::catalog::RuleCatalog;
use super::features::{self, FeatureSet};
use super::models;
use super::types::*;
use crate::error::Result;

/// Spam detection engine
///
/// Immutable after construction; safe to share across threads and calls.
pub struct SpamDetector {
    catalog: RuleCatalog,
    features: FeatureSet,
}

impl SpamDetector {
    /// Create a detector with the built-in rule catalog
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: RuleCatalog::builtin()?,
            features: FeatureSet::compile()?,
        })
    }

    /// Classify a message using thread-local randomness for model jitter
    pub fn classify(&self, subject: &str, content: &str) -> DetectionResult {
        self.classify_with_rng(subject, content, &mut rand::thread_rng())
    }

    /// Classify a message with an injected jitter source
    ///
    /// Identical `(subject, content)` and an identically-seeded generator
    /// always produce an identical result.
    pub fn classify_with_rng<R: Rng>(
        &self,
        subject: &str,
        content: &str,
        rng: &mut R,
    ) -> DetectionResult {
        let base = self.analyze(subject, content);
        let model_predictions = models::simulate_all(&base, rng);
        let score = models::ensemble(&model_predictions);
        let is_spam = score >= SPAM_THRESHOLD;

        if is_spam {
            warn!(
                score,
                base_score = base.score,
                patterns = base.patterns.len(),
                "message classified as spam"
            );
        } else {
            debug!(score, base_score = base.score, "message classified as ham");
        }

        DetectionResult {
            is_spam,
            score,
            patterns: base.patterns,
            model_predictions,
        }
    }

    /// Run the deterministic base scoring pass
    ///
    /// Exposed so callers and tests can inspect the pre-jitter score and
    /// feature counts.
    pub fn analyze(&self, subject: &str, content: &str) -> BaseAnalysis {
        let text = format!("{} {}", subject, content);
        let text_lower = text.to_lowercase();

        let mut score = 0.0;
        let mut patterns: Vec<String> = Vec::new();
        let mut categories: HashSet<RuleCategory> = HashSet::new();

        // Catalog pass: each rule contributes weight * min(matches, cap)
        for rule in self.catalog.rules() {
            let matches = rule.regex.find_iter(&text).count();
            if matches > 0 {
                score += rule.weight * matches.min(RULE_MATCH_CAP) as f64;
                patterns.push(rule.label.to_string());
                categories.insert(rule.category);
            }
        }

        // Keyword containment on the lowercased text
        let mut keyword_count = 0;
        for keyword in self.catalog.keywords() {
            if text_lower.contains(keyword) {
                keyword_count += 1;
                score += KEYWORD_INCREMENT;
                if patterns.len() < KEYWORD_EVIDENCE_CAP {
                    patterns.push(keyword.to_string());
                }
            }
        }

        // Legitimacy counter-signals
        let mut legitimate_count = 0;
        for indicator in self.catalog.legitimacy_indicators() {
            if indicator.is_match(&text) {
                legitimate_count += 1;
                score -= LEGITIMACY_DECREMENT;
            }
        }

        // Feature extractors, in fixed order
        let urls = self.features.analyze_urls(&text);
        score += urls.adjustment;
        for label in &urls.labels {
            patterns.push(label.to_string());
        }

        let (adjustment, label) = self.features.email_density(&text);
        score += adjustment;
        if let Some(label) = label {
            patterns.push(label.to_string());
        }

        let (adjustment, label) = features::length_features(&text);
        score += adjustment;
        if let Some(label) = label {
            patterns.push(label.to_string());
        }

        let caps_ratio = features::caps_ratio(&text);
        if caps_ratio > 0.4 {
            score += 0.14;
            if !patterns.iter().any(|p| p == "excessive caps") {
                patterns.push("excessive caps".to_string());
            }
        }

        let (adjustment, label) = features::punctuation(&text);
        score += adjustment;
        if let Some(label) = label {
            patterns.push(label.to_string());
        }

        // Multi-vector scams fire rules across several categories
        if categories.len() >= 3 {
            score += 0.12;
        }

        let (adjustment, label) =
            self.features
                .subject_heuristics(subject, content.chars().count(), legitimate_count);
        score += adjustment;
        if let Some(label) = label {
            patterns.push(label.to_string());
        }

        score += self.features.currency_density(&text);

        let score = score.clamp(0.0, 1.0);

        // Deduplicate in first-seen order, then truncate
        let mut seen = HashSet::new();
        patterns.retain(|p| seen.insert(p.clone()));
        patterns.truncate(MAX_PATTERNS);

        BaseAnalysis {
            score,
            patterns,
            keyword_count,
            category_count: categories.len(),
            url_count: urls.url_count,
            caps_ratio,
            legitimate_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn detector() -> SpamDetector {
        SpamDetector::new().unwrap()
    }

    #[test]
    fn test_scores_stay_in_range() {
        let detector = detector();
        let mut rng = StdRng::seed_from_u64(7);
        let long_body = "spam ".repeat(600);
        let inputs = [
            ("", ""),
            ("URGENT!!!", "YOU WON $1,000,000 CLAIM NOW!!!"),
            ("Meeting Tomorrow", "See you at the office."),
            ("a", long_body.as_str()),
        ];

        for (subject, content) in inputs {
            let result = detector.classify_with_rng(subject, content, &mut rng);
            assert!((0.0..=1.0).contains(&result.score));
            let p = &result.model_predictions;
            for model in [p.naive_bayes, p.svm, p.random_forest, p.logistic_regression] {
                assert!((0.0..=1.0).contains(&model));
            }
            assert!(result.patterns.len() <= MAX_PATTERNS);
            let unique: std::collections::HashSet<_> = result.patterns.iter().collect();
            assert_eq!(unique.len(), result.patterns.len(), "duplicate evidence");
        }
    }

    #[test]
    fn test_identical_seed_identical_result() {
        let detector = detector();
        let subject = "URGENT: verify your account";
        let content = "Your account has been suspended. Click http://bit.ly/x to restore access.";

        let a = detector.classify_with_rng(subject, content, &mut StdRng::seed_from_u64(42));
        let b = detector.classify_with_rng(subject, content, &mut StdRng::seed_from_u64(42));

        assert_eq!(a.score, b.score);
        assert_eq!(a.is_spam, b.is_spam);
        assert_eq!(a.patterns, b.patterns);
        assert_eq!(a.model_predictions, b.model_predictions);
    }

    #[test]
    fn test_repeated_pattern_capped_at_two_matches() {
        let detector = detector();
        let filler = "plain filler words to keep the message over ten words in total length";

        let once = detector.analyze("", &format!("act now. {}", filler));
        let twice = detector.analyze("", &format!("act now. act now. {}", filler));
        let thrice = detector.analyze("", &format!("act now. act now. act now. {}", filler));

        assert!(twice.score > once.score);
        // Third occurrence is past the per-rule cap
        assert!((thrice.score - twice.score).abs() < 1e-9);
    }

    #[test]
    fn test_legitimacy_indicators_lower_score() {
        let detector = detector();
        let body = "We detected unusual activity on your profile yesterday evening somewhere.";
        let with_legit = format!("{} Thanks for your patience. Regards, Anna", body);

        let plain = detector.analyze("", body);
        let legit = detector.analyze("", &with_legit);

        assert!(legit.score < plain.score);
        assert!(legit.legitimate_count > 0);
    }

    #[test]
    fn test_scenario_plain_meeting_is_ham() {
        let detector = detector();
        let subject = "Meeting Tomorrow at 10 AM";
        let content = "hello Priya, let us meet tomorrow at 10 AM in the main conference room \
                       to walk through the quarterly numbers. Thanks for setting this up. \
                       Regards, Rahul";

        let result = detector.classify_with_rng(subject, content, &mut StdRng::seed_from_u64(1));
        assert!(!result.is_spam);
        assert!(result.score < 0.3);
    }

    #[test]
    fn test_scenario_lottery_blast_is_spam() {
        let detector = detector();
        let subject = "URGENT: You Won $1,000,000!!!";
        let content = "Congratulations! You have won a free reward. Act now to claim your \
                       prize money before the offer expires today. Limited time only. \
                       Win money instantly. Call now!";

        let result = detector.classify_with_rng(subject, content, &mut StdRng::seed_from_u64(2));
        assert!(result.is_spam);
        assert!(result.score > 0.7);
        assert!(result
            .patterns
            .iter()
            .any(|p| p == "urgent action" || p == "limited time"));
        assert!(result
            .patterns
            .iter()
            .any(|p| p == "lottery winner" || p == "prize money" || p == "claim prize"));
    }

    #[test]
    fn test_scenario_link_farm() {
        let detector = detector();
        let content = "grab these deals today: http://203.0.113.9/go plus \
                       http://promo.tk/win plus http://deals.example.org/a plus \
                       http://deals.example.org/b before they expire tonight";

        let base = detector.analyze("offers", content);
        assert!(base.patterns.iter().any(|p| p == "excessive links"));
        assert!(base.patterns.iter().any(|p| p == "IP address link"));
        assert!(base.patterns.iter().any(|p| p == "suspicious domain"));

        // Link tier (0.15) + IP host (0.18) + bad TLD (0.12) on their own
        // clear 0.3
        let urls_only = 0.15 + 0.18 + 0.12;
        assert!(urls_only > 0.3);
        assert!(base.score >= urls_only - 1e-9);
    }

    #[test]
    fn test_scenario_three_words_lowercase() {
        let detector = detector();
        let result = detector.classify_with_rng("", "see you soon", &mut StdRng::seed_from_u64(3));

        assert!(result.patterns.iter().any(|p| p == "too short"));
        assert!(result.score > 0.0);
        assert!(result.score < 0.2);
        assert!(!result.is_spam);
    }

    #[test]
    fn test_scenario_shouting_but_benign() {
        let detector = detector();
        let subject = "WEEKLY SYNC";
        let content = "REVIEW THE QUARTERLY NUMBERS BEFORE OUR CALL ON FRIDAY MORNING ! ! ! ! !";

        let base = detector.analyze(subject, content);
        assert!(base.patterns.iter().any(|p| p == "excessive caps"));
        assert!(base.patterns.iter().any(|p| p == "excessive punctuation"));

        // Base contributions: caps-run rule 0.09 * 2, caps-ratio 0.14,
        // punctuation 0.10; total 0.42 before models.
        assert!((base.score - 0.42).abs() < 1e-9);

        // From 0.42 the four transforms land the ensemble around 0.43
        // (0.42 NB, 0.32 polarized SVM, 0.42 RF, 0.57 squashed LR), inside
        // [0.40, 0.45] for any jitter draw, so this stays under the 0.5
        // threshold.
        let result = detector.classify_with_rng(subject, content, &mut StdRng::seed_from_u64(4));
        assert!(!result.is_spam);
    }

    #[test]
    fn test_keyword_evidence_cap_differs_from_final_truncation() {
        // The scan-time keyword cap (12) and the final unique-evidence cap
        // (10) are intentionally distinct constants.
        assert_eq!(KEYWORD_EVIDENCE_CAP, 12);
        assert_eq!(MAX_PATTERNS, 10);
        assert!(KEYWORD_EVIDENCE_CAP > MAX_PATTERNS);

        let detector = detector();
        let content = "lottery jackpot guaranteed bonus prize winner credit debt loan \
                       refinance investment profit income refund deposit urgent hurry";
        let base = detector.analyze("", content);
        assert_eq!(base.patterns.len(), MAX_PATTERNS);
    }
}
