//! Chat Stats - Transcript Statistics
//!
//! A Rust library for turning an exported chat transcript into descriptive
//! statistics: per-sender message counts, word and emoji frequency rankings,
//! and hour-of-day / day-of-week activity histograms.
//!
//! # Features
//!
//! - Line-oriented transcript parsing with multi-line message support
//! - Stopword-filtered word ranking and emoji ranking
//! - Temporal activity histograms from message timestamps
//! - Single-pass, in-memory batch processing with a fixed console report

/// Running statistics over one transcript
pub mod aggregator;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// Generic insertion-ordered frequency tables
pub mod freq;
/// Logging setup and utilities
pub mod logging;
/// Data models and structures
pub mod models;
/// Console report formatting
pub mod report;
/// Timestamp parsing
pub mod timestamp;
/// Word and emoji tokenization
pub mod tokenize;
/// Line classification and transcript scanning
pub mod transcript;

// Re-export key components for easier access
pub use aggregator::TranscriptStats;
pub use config::AppConfig;
pub use error::{ChatStatsError, Result};
pub use freq::FreqTable;
pub use models::Message;
pub use report::{print_report, ReportLimits};
pub use tokenize::Tokenizer;
pub use transcript::TranscriptReader;
