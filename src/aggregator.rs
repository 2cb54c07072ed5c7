//! Running statistics accumulated over one transcript scan.

use chrono::{Datelike, Timelike};
use std::collections::HashMap;
use tracing::warn;

use crate::error::Result;
use crate::freq::FreqTable;
use crate::models::Message;
use crate::timestamp::parse_timestamp;
use crate::tokenize::Tokenizer;

/// The ordered message bodies authored by one sender.
#[derive(Debug, Clone)]
pub struct SenderMessages {
    /// Sender name as first seen in the transcript
    pub name: String,
    /// Bodies in transcript order; only the length is reported today
    pub bodies: Vec<String>,
}

/// Frequency tables for one transcript, filled by a single sequential scan.
///
/// Constructed once by the entry point and passed into the scan; there is no
/// ambient global state, so tests build a fresh instance per case. All tables
/// start empty, are mutated only while the transcript is consumed, and are
/// read-only afterwards.
pub struct TranscriptStats {
    tokenizer: Tokenizer,
    sender_index: HashMap<String, usize>,
    senders: Vec<SenderMessages>,
    words: FreqTable<String>,
    emojis: FreqTable<String>,
    hours: FreqTable<u32>,
    days: FreqTable<u32>,
}

impl TranscriptStats {
    /// Create an empty accumulator.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            sender_index: HashMap::new(),
            senders: Vec::new(),
            words: FreqTable::new(),
            emojis: FreqTable::new(),
            hours: FreqTable::new(),
            days: FreqTable::new(),
        })
    }

    /// Fold one message record into every table.
    ///
    /// Records without a timestamp (continuation lines) do not touch the hour
    /// and day histograms. A timestamp that fails to parse is downgraded to a
    /// warning and treated the same way, so malformed input degrades the
    /// report instead of aborting the run.
    pub fn record(&mut self, message: &Message) {
        let index = match self.sender_index.get(&message.sender) {
            Some(&index) => index,
            None => {
                self.sender_index
                    .insert(message.sender.clone(), self.senders.len());
                self.senders.push(SenderMessages {
                    name: message.sender.clone(),
                    bodies: Vec::new(),
                });
                self.senders.len() - 1
            }
        };
        self.senders[index].bodies.push(message.body.clone());

        if let Some(timestamp) = &message.timestamp {
            match parse_timestamp(timestamp) {
                Ok(date) => {
                    self.hours.bump(date.hour());
                    // 0 = Sunday, matching the day-name lookup.
                    self.days.bump(date.weekday().num_days_from_sunday());
                }
                Err(err) => {
                    warn!(sender = %message.sender, %err, "skipping time histograms");
                }
            }
        }

        let classes = self.tokenizer.classify(&message.body);
        for word in classes.words {
            self.words.bump(word);
        }
        for emoji in classes.emojis {
            self.emojis.bump(emoji);
        }
    }

    /// Senders in order of first appearance, with their message bodies.
    #[must_use]
    pub fn senders(&self) -> &[SenderMessages] {
        &self.senders
    }

    /// The `n` most common words, with stopwords excluded from the ranking.
    #[must_use]
    pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
        self.words.top_n(n, Some(self.tokenizer.stopwords()))
    }

    /// The `n` most common emoji glyphs.
    #[must_use]
    pub fn top_emojis(&self, n: usize) -> Vec<(String, u64)> {
        self.emojis.top_n(n, None)
    }

    /// The `n` busiest hours of the day (0-23).
    #[must_use]
    pub fn top_hours(&self, n: usize) -> Vec<(u32, u64)> {
        self.hours.top_n(n, None)
    }

    /// The `n` busiest days of the week (0 = Sunday).
    #[must_use]
    pub fn top_days(&self, n: usize) -> Vec<(u32, u64)> {
        self.days.top_n(n, None)
    }

    /// Word-frequency table, before stopword exclusion.
    #[must_use]
    pub fn words(&self) -> &FreqTable<String> {
        &self.words
    }

    /// Emoji-frequency table.
    #[must_use]
    pub fn emojis(&self) -> &FreqTable<String> {
        &self.emojis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> TranscriptStats {
        TranscriptStats::new().expect("Failed to create stats")
    }

    #[test]
    fn test_record_counts_words_per_sender() {
        let mut stats = stats();
        stats.record(&Message::from_header("Ann", "Hi I am ok!!", "14/08/2022, 8:18 am"));

        assert_eq!(stats.senders().len(), 1);
        assert_eq!(stats.senders()[0].name, "Ann");
        assert_eq!(stats.senders()[0].bodies.len(), 1);
        assert_eq!(stats.words().count(&"hi".to_string()), 1);
        assert_eq!(stats.words().count(&"am".to_string()), 1);
        assert_eq!(stats.words().count(&"ok".to_string()), 1);
        assert_eq!(stats.words().count(&"i".to_string()), 0);
    }

    #[test]
    fn test_timestamped_record_fills_histograms() {
        let mut stats = stats();
        // 14/08/2022 was a Sunday.
        stats.record(&Message::from_header("Ann", "hello", "14/08/2022, 8:18 am"));

        assert_eq!(stats.top_hours(5), vec![(8, 1)]);
        assert_eq!(stats.top_days(3), vec![(0, 1)]);
    }

    #[test]
    fn test_continuation_skips_histograms() {
        let mut stats = stats();
        stats.record(&Message::continuation("Ann", "a follow-up line"));

        assert!(stats.top_hours(5).is_empty());
        assert!(stats.top_days(3).is_empty());
        assert_eq!(stats.senders()[0].bodies.len(), 1);
    }

    #[test]
    fn test_unparseable_timestamp_degrades() {
        let mut stats = stats();
        stats.record(&Message::from_header("Ann", "hello", "99/99/9999, 8:18 am"));

        // The message still counts for the sender and the word table.
        assert!(stats.top_hours(5).is_empty());
        assert_eq!(stats.senders()[0].bodies.len(), 1);
        assert_eq!(stats.words().count(&"hello".to_string()), 1);
    }

    #[test]
    fn test_sender_order_is_first_appearance() {
        let mut stats = stats();
        stats.record(&Message::continuation("Ben", "one"));
        stats.record(&Message::continuation("Ann", "two"));
        stats.record(&Message::continuation("Ben", "three"));

        let names: Vec<&str> = stats.senders().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ben", "Ann"]);
        assert_eq!(stats.senders()[0].bodies.len(), 2);
    }

    #[test]
    fn test_top_words_excludes_stopwords() {
        let mut stats = stats();
        stats.record(&Message::continuation("Ann", "the the the zebra zebra"));

        let top = stats.top_words(10);
        assert_eq!(top, vec![("zebra".to_string(), 2)]);
    }
}
