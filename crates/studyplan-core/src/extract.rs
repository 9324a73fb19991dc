//! Free-text to checklist extraction.
//!
//! The generation service answers with unstructured prose. This module turns
//! that prose into an ordered list of dated tasks: the text is split at
//! day-boundary markers ("Day 1:", "day 2 -", and close variants), falling
//! back to sentence boundaries when no marker appears anywhere. Segments too
//! short to be tasks are dropped as formatting noise, and day numbers are
//! assigned sequentially by output position; numbers inside the text are
//! not trusted.

use regex::Regex;

use crate::models::Task;

/// Segments whose trimmed length falls below this are treated as
/// punctuation or formatting artifacts, not tasks.
pub const DEFAULT_MIN_SEGMENT_LEN: usize = 6;

/// Splits raw generated text into ordered tasks.
pub struct Extractor {
    day_marker: Regex,
    sentence_break: Regex,
    min_segment_len: usize,
}

impl Extractor {
    /// Creates an extractor with the default noise threshold.
    pub fn new() -> Self {
        // Tolerates arbitrary case and spacing: "Day 1:", "day  2 -", "DAY 3."
        let day_marker =
            Regex::new(r"(?i)\bday\s*\d+\s*[:.\-]?\s*").expect("day marker pattern is valid");
        let sentence_break = Regex::new(r"[.!?\n]+").expect("sentence break pattern is valid");
        Self {
            day_marker,
            sentence_break,
            min_segment_len: DEFAULT_MIN_SEGMENT_LEN,
        }
    }

    /// Overrides the minimum segment length.
    pub fn with_min_segment_len(mut self, len: usize) -> Self {
        self.min_segment_len = len;
        self
    }

    /// Extracts at most `max_days` tasks from `raw`.
    ///
    /// Surviving segments are numbered 1..n in original order. An empty
    /// result is a normal outcome (empty input, or nothing but noise), not a
    /// failure.
    pub fn extract(&self, raw: &str, max_days: u32) -> Vec<Task> {
        self.split_segments(raw)
            .into_iter()
            .map(str::trim)
            .filter(|segment| segment.chars().count() >= self.min_segment_len)
            .take(max_days as usize)
            .enumerate()
            .map(|(i, description)| Task::new(i as u32 + 1, description))
            .collect()
    }

    /// Splits on day markers, or on sentence boundaries when the text has no
    /// marker at all. With markers, each segment spans from the end of one
    /// marker to the start of the next; text before the first marker is
    /// preamble and is dropped.
    fn split_segments<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        let markers: Vec<_> = self.day_marker.find_iter(raw).collect();
        if markers.is_empty() {
            return self.sentence_break.split(raw).collect();
        }

        markers
            .iter()
            .enumerate()
            .map(|(i, marker)| {
                let end = markers.get(i + 1).map_or(raw.len(), |next| next.start());
                &raw[marker.end()..end]
            })
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts tasks with the default settings.
pub fn extract(raw: &str, max_days: u32) -> Vec<Task> {
    Extractor::new().extract(raw, max_days)
}
