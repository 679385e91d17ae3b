//! Data types flowing through the corpus pipeline.

use crate::syllabify::event::EventRecord;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// A chunk of consecutive corpus lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusJob {
    /// Position of the chunk in the corpus, starting at 0.
    pub sequence: u64,
    /// 1-based line number of the first line.
    pub first_line: u64,
    /// Raw line bytes without line terminators.
    pub lines: Vec<Vec<u8>>,
}

impl CorpusJob {
    pub fn new(sequence: u64, first_line: u64, lines: Vec<Vec<u8>>) -> Self {
        Self {
            sequence,
            first_line,
            lines,
        }
    }

    /// Line numbers paired with line bytes.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (u64, &[u8])> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (self.first_line + i as u64, line.as_slice()))
    }
}

/// A line left out of the event file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: u64,
    pub reason: String,
}

/// Output of one processed job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkResult {
    pub sequence: u64,
    /// Event records of the successful lines, in line order.
    pub records: Vec<EventRecord>,
    pub skipped_lines: Vec<SkippedLine>,
    pub skipped_words: u64,
}

/// Progress events emitted while a corpus runs.
#[derive(Debug, Clone, PartialEq)]
pub enum CorpusEvent {
    /// Lines written so far.
    Progress { lines: u64 },
    LineSkipped(SkippedLine),
    Finished(CorpusReport),
}

/// Summary of a corpus run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CorpusReport {
    pub lines_read: u64,
    pub lines_written: u64,
    pub lines_skipped: u64,
    pub words_skipped: u64,
    pub elapsed: Duration,
}

impl fmt::Display for CorpusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines written, {} lines skipped, {} words skipped in {:.2} minutes",
            self.lines_written,
            self.lines_skipped,
            self.words_skipped,
            self.elapsed.as_secs_f64() / 60.0
        )
    }
}
