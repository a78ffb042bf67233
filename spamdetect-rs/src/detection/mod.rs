//! Spam detection module
//!
//! Rule-based scoring over a fixed catalog, four simulated model transforms,
//! and a fixed-weight ensemble decision.

pub mod catalog;
pub mod features;
pub mod models;
pub mod scorer;
pub mod stats;
pub mod types;

pub use catalog::RuleCatalog;
pub use scorer::SpamDetector;
pub use stats::TrainingStats;
pub use types::*;
