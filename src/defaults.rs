//! Default configuration constants for sylcue.
//!
//! Shared between the config file, the CLI and the library entry points.

/// Separator between syllables and between words in cue and outcome strings.
pub const SEPARATOR: char = '_';

/// Marker wrapped around the outermost syllables of a word.
pub const BOUNDARY_MARKER: char = '#';

/// Separator between cues and outcome in an event file record.
pub const FIELD_SEPARATOR: char = '\t';

/// Default language code.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Whether boundary markers are added unless configured otherwise.
pub const ADD_BOUNDARIES: bool = true;

/// Default number of lines per corpus job.
pub const CHUNK_SIZE: usize = 125;

/// Progress is reported every this many written lines.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Jobs buffered per worker between the reader and the worker pool.
pub const JOBS_PER_WORKER: usize = 2;

/// Default external transcription program.
pub const TRANSCRIBER_PROGRAM: &str = "espeak-ng";

/// Number of worker threads when none is configured.
///
/// Falls back to a single worker if the parallelism cannot be queried.
pub fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
