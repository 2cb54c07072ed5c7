//! Data models for transcript processing.

/// A single logical message record from the transcript.
///
/// A header line yields a message carrying the raw timestamp from the line;
/// each continuation line yields its own record attributed to the previous
/// sender, with no timestamp. Continuation records are therefore counted
/// separately per sender rather than merged into one multi-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Name of the message sender, exactly as written in the transcript
    pub sender: String,
    /// Message text content
    pub body: String,
    /// Raw timestamp string from the header line, if this record came from one
    pub timestamp: Option<String>,
}

impl Message {
    /// Build a message from a parsed header line.
    #[must_use]
    pub fn from_header(sender: &str, body: &str, timestamp: &str) -> Self {
        Self {
            sender: sender.to_string(),
            body: body.to_string(),
            timestamp: Some(timestamp.to_string()),
        }
    }

    /// Build a continuation record attributed to the previous sender.
    #[must_use]
    pub fn continuation(sender: &str, body: &str) -> Self {
        Self {
            sender: sender.to_string(),
            body: body.to_string(),
            timestamp: None,
        }
    }
}
