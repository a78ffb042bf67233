//! Simulated classifier models and the ensemble combiner
//!
//! These are NOT trained models. Each one is a deterministic transform of
//! the shared base score plus bounded jitter, approximating how different
//! classifier families diverge from a common baseline. A real model backend
//! replaces this module behind the same four-score contract.

use rand::Rng;

use super::types::{BaseAnalysis, ModelPredictions};

/// Ensemble weights; random-forest gets the most as the usually-best model
const WEIGHT_NAIVE_BAYES: f64 = 0.20;
const WEIGHT_SVM: f64 = 0.25;
const WEIGHT_RANDOM_FOREST: f64 = 0.35;
const WEIGHT_LOGISTIC_REGRESSION: f64 = 0.20;

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Uniform jitter in [-span/2, span/2]
fn jitter<R: Rng>(rng: &mut R, span: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * span
}

/// Naive Bayes: keyword-sensitive
fn simulate_naive_bayes<R: Rng>(base: f64, keyword_count: usize, rng: &mut R) -> f64 {
    let keyword_bonus = (keyword_count as f64 * 0.06).min(0.22);
    clamp01(base + keyword_bonus + jitter(rng, 0.03))
}

/// SVM: margin-based, pushes confident scores away from the boundary
fn simulate_svm<R: Rng>(base: f64, category_count: usize, rng: &mut R) -> f64 {
    let adjustment = if category_count > 2 { 0.09 } else { -0.04 };
    let score = base + adjustment;
    let polarized = if score > 0.5 { score + 0.06 } else { score - 0.06 };
    clamp01(polarized + jitter(rng, 0.04))
}

/// Random forest: URL-sensitive, lowest variance
fn simulate_random_forest<R: Rng>(base: f64, url_count: usize, rng: &mut R) -> f64 {
    let url_penalty = if url_count > 2 {
        0.14
    } else if url_count > 0 {
        0.05
    } else {
        0.0
    };
    clamp01(base + url_penalty + jitter(rng, 0.025))
}

/// Logistic regression: caps-sensitive, squashed through a sigmoid
fn simulate_logistic_regression<R: Rng>(base: f64, caps_ratio: f64, rng: &mut R) -> f64 {
    let caps_bonus = if caps_ratio > 0.3 { 0.11 } else { 0.0 };
    let score = base + caps_bonus;
    let smoothed = 1.0 / (1.0 + (-10.0 * (score - 0.5)).exp());
    clamp01(smoothed + jitter(rng, 0.04))
}

/// Run all four simulators against one base analysis
///
/// Draw order is fixed so a seeded generator reproduces results exactly.
pub fn simulate_all<R: Rng>(base: &BaseAnalysis, rng: &mut R) -> ModelPredictions {
    ModelPredictions {
        naive_bayes: simulate_naive_bayes(base.score, base.keyword_count, rng),
        svm: simulate_svm(base.score, base.category_count, rng),
        random_forest: simulate_random_forest(base.score, base.url_count, rng),
        logistic_regression: simulate_logistic_regression(base.score, base.caps_ratio, rng),
    }
}

/// Fixed-weight linear combination of the four model scores
pub fn ensemble(predictions: &ModelPredictions) -> f64 {
    predictions.naive_bayes * WEIGHT_NAIVE_BAYES
        + predictions.svm * WEIGHT_SVM
        + predictions.random_forest * WEIGHT_RANDOM_FOREST
        + predictions.logistic_regression * WEIGHT_LOGISTIC_REGRESSION
}
