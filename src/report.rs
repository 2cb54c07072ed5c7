//! Console report formatting.
//!
//! Five fixed sections, in this order: top words, per-sender message counts,
//! top emojis, busiest hours, busiest days. Section order and framing match
//! the exporter's original report so output stays diffable against it.

use std::io::Write;

use crate::aggregator::TranscriptStats;
use crate::config::ReportConfig;
use crate::error::Result;

const SECTION_RULE: &str = "--------------------------------";

/// Day-of-week index (0 = Sunday) resolved to a display name.
const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// How many entries each ranked section shows.
#[derive(Debug, Clone, Copy)]
pub struct ReportLimits {
    /// Entries in the word section
    pub words: usize,
    /// Entries in the emoji section
    pub emojis: usize,
    /// Entries in the busy-hours section
    pub hours: usize,
    /// Entries in the busy-days section
    pub days: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            words: 100,
            emojis: 10,
            hours: 5,
            days: 3,
        }
    }
}

impl From<&ReportConfig> for ReportLimits {
    fn from(config: &ReportConfig) -> Self {
        Self {
            words: config.top_words,
            emojis: config.top_emojis,
            hours: config.top_hours,
            days: config.top_days,
        }
    }
}

/// Write the five report sections to `out`.
pub fn print_report<W: Write>(
    out: &mut W,
    stats: &TranscriptStats,
    limits: &ReportLimits,
) -> Result<()> {
    section_header(out, &format!("TOP {} MOST COMMON WORDS", limits.words))?;
    for (word, freq) in stats.top_words(limits.words) {
        writeln!(out, "{word}: {freq}")?;
    }

    // Senders print in order of first appearance, not ranked by count.
    section_header(out, "WHO SENT THE MOST MESSAGES")?;
    for sender in stats.senders() {
        writeln!(out, "{}: {}", sender.name, sender.bodies.len())?;
    }

    section_header(out, &format!("TOP {} MOST COMMON EMOJIS", limits.emojis))?;
    for (emoji, freq) in stats.top_emojis(limits.emojis) {
        writeln!(out, "{emoji}: {freq}")?;
    }

    section_header(
        out,
        &format!("TOP {} MOST BUSY HOURS FOR MESSAGING", limits.hours),
    )?;
    for (hour, freq) in stats.top_hours(limits.hours) {
        writeln!(out, "{hour}:00 : {freq}")?;
    }

    section_header(
        out,
        &format!("TOP {} MOST BUSY DAYS OF THE WEEK FOR MESSAGING", limits.days),
    )?;
    for (day, freq) in stats.top_days(limits.days) {
        let name = DAY_NAMES.get(day as usize).copied().unwrap_or("Unknown");
        writeln!(out, "{name}: {freq}")?;
    }

    Ok(())
}

fn section_header<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "{SECTION_RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{SECTION_RULE}")?;
    Ok(())
}
