//! Event records: one (cues, outcome) pair per corpus line.

use crate::defaults::FIELD_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A syllabified line ready for the event file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventRecord {
    /// Underscore-joined syllables of every word, in word order.
    pub cues: String,
    /// Underscore-joined lowercase words.
    pub outcome: String,
}

impl EventRecord {
    pub fn new(cues: impl Into<String>, outcome: impl Into<String>) -> Self {
        Self {
            cues: cues.into(),
            outcome: outcome.into(),
        }
    }

    /// Event file line: `<cues>\t<outcome>\n`.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }

    /// Parses one event file line, with or without its trailing newline.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let (cues, outcome) = line.split_once(FIELD_SEPARATOR)?;
        Some(Self::new(cues, outcome))
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.cues, FIELD_SEPARATOR, self.outcome)
    }
}
