use std::io::Write;

use chat_stats::transcript::TranscriptReader;
use chat_stats::TranscriptStats;

const SAMPLE: &str = concat!(
    "14/08/2022, 8:18 am - Niall Dickin: test message one 😀🎉\n",
    "14/08/2022, 8:20 am - John Smith: test message two\n",
    "Hi, Niall. Hope you're doing well.\n",
    "Best wishes, John\n",
    "\n",
    "15/08/2022, 12:05 pm - Niall Dickin: noon reply\n",
);

fn scan(transcript: &str) -> TranscriptStats {
    let reader = TranscriptReader::new().expect("Failed to create reader");
    let mut stats = TranscriptStats::new().expect("Failed to create stats");
    reader.scan(transcript, &mut stats);
    stats
}

#[test]
fn test_multiline_messages_attribute_to_previous_sender() {
    let stats = scan(SAMPLE);

    assert_eq!(stats.senders().len(), 2);
    assert_eq!(stats.senders()[0].name, "Niall Dickin");
    assert_eq!(stats.senders()[0].bodies.len(), 2);
    // John's header line plus his two continuation lines.
    assert_eq!(stats.senders()[1].name, "John Smith");
    assert_eq!(stats.senders()[1].bodies.len(), 3);
}

#[test]
fn test_only_header_lines_feed_time_histograms() {
    let stats = scan(SAMPLE);

    // Three headers: two at 8am, one at noon.
    let hours = stats.top_hours(5);
    assert_eq!(hours, vec![(8, 2), (12, 1)]);

    // 14/08/2022 was a Sunday, 15/08/2022 a Monday.
    let days = stats.top_days(3);
    assert_eq!(days, vec![(0, 2), (1, 1)]);
}

#[test]
fn test_word_counts_span_header_and_continuation_lines() {
    let stats = scan(SAMPLE);

    assert_eq!(stats.words().count(&"message".to_string()), 2);
    assert_eq!(stats.words().count(&"test".to_string()), 2);
    assert_eq!(stats.words().count(&"wishes".to_string()), 1);
    // "Niall." on the continuation line strips down to "niall".
    assert_eq!(stats.words().count(&"niall".to_string()), 1);
}

#[test]
fn test_emoji_counts_from_sample() {
    let stats = scan(SAMPLE);

    assert_eq!(stats.emojis().count(&"😀".to_string()), 1);
    assert_eq!(stats.emojis().count(&"🎉".to_string()), 1);
}

#[test]
fn test_scan_file_reads_transcript() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SAMPLE.as_bytes()).expect("Failed to write transcript");

    let reader = TranscriptReader::new().expect("Failed to create reader");
    let mut stats = TranscriptStats::new().expect("Failed to create stats");
    reader
        .scan_file(file.path(), &mut stats)
        .expect("Failed to scan file");

    assert_eq!(stats.senders().len(), 2);
}

#[test]
fn test_scan_file_missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.txt");

    let reader = TranscriptReader::new().expect("Failed to create reader");
    let mut stats = TranscriptStats::new().expect("Failed to create stats");
    let result = reader.scan_file(&missing, &mut stats);

    assert!(result.is_err());
}
