//! Stateless feature extractors over the combined subject+body text
//!
//! Each extractor returns a score adjustment and zero or more evidence
//! labels. The scorer applies them in a fixed order after the catalog pass,
//! because the subject heuristic needs the legitimacy-indicator count.

use regex::Regex;

use crate::error::{DetectError, Result};

/// Result of the URL analysis pass
#[derive(Debug, Default)]
pub struct UrlAnalysis {
    pub adjustment: f64,
    pub labels: Vec<&'static str>,
    pub url_count: usize,
}

/// Precompiled feature regexes
pub struct FeatureSet {
    url: Regex,
    ip_url: Regex,
    suspicious_tld: Regex,
    shortener: Regex,
    url_keyword: Regex,
    email: Regex,
    fake_reply: Regex,
    urgent_subject: Regex,
    business_subject: Regex,
    currency_marker: Regex,
    currency_amount: Regex,
}

impl FeatureSet {
    pub fn compile() -> Result<Self> {
        let build = |label: &'static str, pattern: &str| {
            Regex::new(pattern).map_err(|source| DetectError::InvalidPattern { label, source })
        };

        Ok(Self {
            url: build("url", r"(?i)https?://[^\s]+")?,
            ip_url: build("ip url", r"(?i)https?://\d+\.\d+\.\d+\.\d+")?,
            suspicious_tld: build(
                "suspicious tld",
                r"(?i)\.(tk|ml|ga|cf|gq|xyz|top|club|work|click|link|online)/?\b",
            )?,
            shortener: build("shortener", r"(?i)(bit\.ly|tinyurl|goo\.gl|ow\.ly|t\.co)")?,
            url_keyword: build(
                "url keyword",
                r"(?i)(verify|secure|login|account|update|confirm|bank|paypal|amazon)",
            )?,
            email: build("email address", r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}")?,
            fake_reply: build("fake reply", r"(?i)^(re|fwd):")?,
            urgent_subject: build(
                "urgent subject",
                r"(?i)\b(urgent|immediate|action\s+required|security\s+alert)",
            )?,
            business_subject: build(
                "business subject",
                r"(?i)\b(meeting|schedule|invoice|receipt|confirmation|order|report|agenda)",
            )?,
            currency_marker: build("currency marker", r"(?i)₹|rs\.?|rupees?|inr")?,
            currency_amount: build("currency amount", r"(?i)₹\s*\d{1,3}(,\d{2,3})*|\brs\.?\s*\d+")?,
        })
    }

    /// Link count tiers plus per-URL penalties. The per-URL penalties are
    /// cumulative across all matching URLs and all matching checks per URL.
    pub fn analyze_urls(&self, text: &str) -> UrlAnalysis {
        let urls: Vec<&str> = self.url.find_iter(text).map(|m| m.as_str()).collect();
        let mut analysis = UrlAnalysis {
            url_count: urls.len(),
            ..Default::default()
        };

        if urls.is_empty() {
            return analysis;
        }

        if urls.len() > 3 {
            analysis.adjustment += 0.15;
            analysis.labels.push("excessive links");
        } else if urls.len() > 1 {
            analysis.adjustment += 0.06;
        }

        for url in &urls {
            if self.ip_url.is_match(url) {
                analysis.adjustment += 0.18;
                analysis.labels.push("IP address link");
            }
            if self.suspicious_tld.is_match(url) {
                analysis.adjustment += 0.12;
                analysis.labels.push("suspicious domain");
            }
            if self.shortener.is_match(url) {
                analysis.adjustment += 0.08;
                analysis.labels.push("shortened URL");
            }
            if self.url_keyword.is_match(url) {
                analysis.adjustment += 0.10;
                analysis.labels.push("suspicious URL keyword");
            }
        }

        analysis
    }

    /// More than 2 RFC-shaped addresses in the text is a bulk-mail signal
    pub fn email_density(&self, text: &str) -> (f64, Option<&'static str>) {
        if self.email.find_iter(text).count() > 2 {
            (0.09, Some("multiple emails"))
        } else {
            (0.0, None)
        }
    }

    /// Subject-line heuristics; runs last because it needs the
    /// legitimacy-indicator count from the catalog pass
    pub fn subject_heuristics(
        &self,
        subject: &str,
        body_chars: usize,
        legitimate_count: usize,
    ) -> (f64, Option<&'static str>) {
        let mut adjustment = 0.0;
        let mut label = None;

        if self.fake_reply.is_match(subject) && body_chars < 50 {
            adjustment += 0.10;
            label = Some("fake reply/forward");
        }

        if self.urgent_subject.is_match(subject) {
            adjustment += 0.08;
        }

        if self.business_subject.is_match(subject) && legitimate_count > 0 {
            adjustment -= 0.10;
        }

        (adjustment, label)
    }

    /// Indian currency markers with several amount-like tokens
    pub fn currency_density(&self, text: &str) -> f64 {
        if self.currency_marker.is_match(text) && self.currency_amount.find_iter(text).count() > 2 {
            0.06
        } else {
            0.0
        }
    }
}

/// Word-count features: very short messages are suspicious, very long ones
/// mildly so (no label for the long case)
pub fn length_features(text: &str) -> (f64, Option<&'static str>) {
    let word_count = text.split_whitespace().count();
    if word_count < 10 {
        (0.12, Some("too short"))
    } else if word_count > 500 {
        (0.06, None)
    } else {
        (0.0, None)
    }
}

/// Ratio of uppercase letters to all ASCII letters
pub fn caps_ratio(text: &str) -> f64 {
    let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
    if letters == 0 {
        return 0.0;
    }
    let caps = text.chars().filter(|c| c.is_ascii_uppercase()).count();
    caps as f64 / letters as f64
}

/// More than 3 exclamation marks across the full text
pub fn punctuation(text: &str) -> (f64, Option<&'static str>) {
    if text.chars().filter(|&c| c == '!').count() > 3 {
        (0.10, Some("excessive punctuation"))
    } else {
        (0.0, None)
    }
}
