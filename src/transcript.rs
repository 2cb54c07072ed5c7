//! Line classification and transcript scanning.
//!
//! Transcript lines come in two shapes:
//!
//! ```text
//! 14/08/2022, 8:18 am - Niall Dickin: test message one
//! and a continuation line like this one
//! ```
//!
//! A line matching the header pattern starts a new message. Any other
//! non-empty line belongs to a multi-line message and is attributed to the
//! most recently seen sender, as its own record. Blank lines, and leading
//! lines before any sender is known, are skipped.

use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::aggregator::TranscriptStats;
use crate::error::Result;
use crate::models::Message;

/// Header shape: timestamp, sender name (letters and whitespace only), body.
const HEADER_PATTERN: &str =
    r"([\d]{2}/[\d]{2}/[\d]{4}, [\d]{1,2}:[\d]{2} (?:am|pm)) - ([A-Za-z\s]+): (.*)";

/// Scans transcript lines and feeds message records into the accumulator.
pub struct TranscriptReader {
    header_regex: Regex,
}

impl TranscriptReader {
    /// Create a reader with the compiled header pattern.
    pub fn new() -> Result<Self> {
        Ok(Self {
            header_regex: Regex::new(HEADER_PATTERN)?,
        })
    }

    /// Read a transcript file and scan it. A missing or unreadable file is
    /// the one fatal condition of the whole run.
    pub fn scan_file(&self, path: &Path, stats: &mut TranscriptStats) -> Result<()> {
        let data = fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = data.len(), "read transcript");
        self.scan(&data, stats);
        Ok(())
    }

    /// Scan a full transcript, one line at a time.
    pub fn scan(&self, transcript: &str, stats: &mut TranscriptStats) {
        let mut previous_sender: Option<String> = None;

        for line in transcript.split('\n') {
            if let Some(captures) = self.header_regex.captures(line) {
                let (timestamp, sender, body) = (&captures[1], &captures[2], &captures[3]);
                previous_sender = Some(sender.to_string());
                stats.record(&Message::from_header(sender, body, timestamp));
            } else if let Some(sender) = previous_sender.as_deref() {
                if !line.is_empty() {
                    // Headerless: the rest of a multi-line message.
                    stats.record(&Message::continuation(sender, line));
                }
            }
            // No previous sender yet: the line cannot be attributed, drop it.
        }
    }
}
