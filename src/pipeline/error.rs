//! Problems met while syllabifying a corpus, and where they get reported.
//!
//! Skipped lines are recoverable: the run carries on without them. A worker
//! that fails or panics is fatal to the run.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationError {
    /// The run continues; the affected line is left out of the event file.
    Recoverable(String),
    /// The run stops and the event file is left unfinished.
    Fatal(String),
}

impl StationError {
    pub fn skipped_line(line: u64, reason: &str) -> Self {
        StationError::Recoverable(format!("line {line} skipped: {reason}"))
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, StationError::Fatal(_))
    }
}

impl fmt::Display for StationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationError::Recoverable(msg) => f.write_str(msg),
            StationError::Fatal(msg) => write!(f, "fatal: {msg}"),
        }
    }
}

impl std::error::Error for StationError {}

/// Receives skipped lines and worker failures as the corpus is processed.
///
/// `station` names the part of the pipeline that hit the problem
/// (`"syllabifier"`, `"worker"` or `"coordinator"`).
pub trait ErrorReporter: Send + Sync {
    fn report(&self, station: &str, error: &StationError);
}

/// Logs recoverable problems as warnings and fatal ones as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, station: &str, error: &StationError) {
        if error.is_fatal() {
            tracing::error!(station, "{error}");
        } else {
            tracing::warn!(station, "{error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collected(Mutex<Vec<(String, String)>>);

    impl ErrorReporter for Collected {
        fn report(&self, station: &str, error: &StationError) {
            self.0
                .lock()
                .unwrap()
                .push((station.to_string(), error.to_string()));
        }
    }

    #[test]
    fn test_skipped_line_message() {
        let error = StationError::skipped_line(3, "Line 3 is not valid UTF-8: invalid utf-8 sequence");
        assert!(!error.is_fatal());
        assert_eq!(
            error.to_string(),
            "line 3 skipped: Line 3 is not valid UTF-8: invalid utf-8 sequence"
        );
    }

    #[test]
    fn test_fatal_message_is_marked() {
        let error = StationError::Fatal("worker 2 panicked: transcriber exploded".to_string());
        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "fatal: worker 2 panicked: transcriber exploded");
    }

    #[test]
    fn test_reporter_as_trait_object() {
        let collected = Collected::default();
        let reporters: [&dyn ErrorReporter; 2] = [&LogReporter, &collected];
        for reporter in reporters {
            reporter.report("syllabifier", &StationError::skipped_line(7, "empty transcription"));
        }

        assert_eq!(
            *collected.0.lock().unwrap(),
            vec![(
                "syllabifier".to_string(),
                "line 7 skipped: empty transcription".to_string()
            )]
        );
    }
}
