//! Worker side of the corpus pipeline.

use crate::error::SylcueError;
use crate::pipeline::error::{ErrorReporter, StationError};
use crate::pipeline::station::Station;
use crate::pipeline::types::{ChunkResult, CorpusJob, SkippedLine};
use crate::syllabify::line::LineSyllabifier;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;

/// Station syllabifying every line of a job.
///
/// Line failures (invalid UTF-8, fatal transcriber errors) never fail the
/// job; the line is recorded as skipped and processing moves on.
pub struct SyllabifierStation {
    syllabifier: LineSyllabifier,
}

impl SyllabifierStation {
    pub fn new(syllabifier: LineSyllabifier) -> Self {
        Self { syllabifier }
    }
}

impl Station for SyllabifierStation {
    type Input = CorpusJob;
    type Output = ChunkResult;

    fn name(&self) -> &'static str {
        "syllabifier"
    }

    fn process(&mut self, job: CorpusJob) -> Result<Option<ChunkResult>, StationError> {
        let mut result = ChunkResult {
            sequence: job.sequence,
            records: Vec::with_capacity(job.lines.len()),
            ..ChunkResult::default()
        };

        for (number, bytes) in job.numbered_lines() {
            let outcome = std::str::from_utf8(bytes)
                .map_err(|e| SylcueError::LineDecode {
                    line: number,
                    message: e.to_string(),
                })
                .and_then(|line| self.syllabifier.syllabify_line(line));

            match outcome {
                Ok(line) => {
                    result.skipped_words += line.skipped_words as u64;
                    result.records.push(line.into_event());
                }
                Err(e) => result.skipped_lines.push(SkippedLine {
                    line: number,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(Some(result))
    }
}

/// Runs a station over every job until the job channel closes.
///
/// Each job must produce exactly one output, otherwise the coordinator could
/// never release later results; a station error or a dropped job stops the
/// worker with an error. Returns the number of jobs processed.
pub fn run_worker<S: Station>(
    id: usize,
    mut station: S,
    jobs: Receiver<S::Input>,
    results: Sender<S::Output>,
    reporter: Arc<dyn ErrorReporter>,
) -> Result<usize, StationError> {
    let mut processed = 0;

    for job in jobs.iter() {
        let output = match station.process(job) {
            Ok(Some(output)) => output,
            Ok(None) => {
                let error = StationError::Fatal(format!("worker {id}: job produced no output"));
                reporter.report(station.name(), &error);
                return Err(error);
            }
            Err(error) => {
                reporter.report(station.name(), &error);
                return Err(error);
            }
        };

        if results.send(output).is_err() {
            // Coordinator stopped collecting; nothing left to do.
            tracing::debug!(worker = id, "result channel closed, stopping");
            break;
        }
        processed += 1;
    }

    tracing::debug!(worker = id, processed, "worker finished");
    Ok(processed)
}
