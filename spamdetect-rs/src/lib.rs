//! spamdetect-rs: Rule-based email spam detection engine
//!
//! Classifies a message (subject + body) against a fixed catalog of weighted
//! textual signals, derives four simulated per-model scores from the shared
//! base score, and combines them into a single ensemble decision.
//!
//! # Features
//!
//! - **Rule catalog**: weighted regex rules across 19 scam categories,
//!   suspicious-keyword list, legitimacy counter-indicators
//! - **Feature extractors**: links, email density, length, casing,
//!   punctuation, subject heuristics, currency density
//! - **Model simulators**: four deterministic-plus-jitter transforms
//!   standing in for trained classifiers
//! - **REST API**: predict/health/stats endpoints over axum
//! - **Remote fallback**: remote-first scoring that degrades to the local
//!   engine
//!
//! # Example
//!
//! ```
//! use spamdetect_rs::detection::SpamDetector;
//!
//! let detector = SpamDetector::new().unwrap();
//! let result = detector.classify(
//!     "URGENT: You Won $1,000,000!!!",
//!     "Act now to claim your prize money!",
//! );
//! assert!(result.is_spam);
//! ```
//!
//! # Modules
//!
//! - [`detection`]: the scoring engine (catalog, features, scorer, models)
//! - [`api`]: HTTP API endpoints
//! - [`remote`]: remote-first, local-fallback classification
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod remote;

// Re-export commonly used types
pub use config::Config;
pub use detection::{DetectionResult, ModelPredictions, SpamDetector};
pub use error::{DetectError, Result};
pub use remote::RemoteDetector;
