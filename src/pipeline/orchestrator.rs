//! Corpus pipeline: chunk, syllabify in parallel, write in line order.
//!
//! ```text
//!   reader thread          worker threads            coordinator
//!  ┌─────────────┐ jobs  ┌────────────────┐ results ┌───────────────┐
//!  │ LineChunker ├──────►│ Syllabifier ×N ├────────►│ ReorderBuffer ├──► EventSink
//!  └──────▲──────┘bounded└───────┬────────┘         └───────┬───────┘
//!         │                        │ failures                 │
//!         └────────── permits ─────┴──────────────────────────┘
//! ```
//!
//! Only the coordinator (the calling thread) touches the sink. The reader
//! takes a permit per chunk and the coordinator returns it once that chunk
//! is written, so at most `job_buffer` chunks are held in memory. A worker
//! that fails or panics ends the run as soon as the coordinator hears of it.

use crate::defaults;
use crate::error::{Result, SylcueError};
use crate::phonetics::profile::LanguageProfile;
use crate::pipeline::chunker::LineChunker;
use crate::pipeline::error::{ErrorReporter, LogReporter, StationError};
use crate::pipeline::reorder::ReorderBuffer;
use crate::pipeline::sink::{EventSink, GzipEventSink};
use crate::pipeline::types::{ChunkResult, CorpusEvent, CorpusJob, CorpusReport};
use crate::pipeline::worker::{SyllabifierStation, run_worker};
use crate::syllabify::line::LineSyllabifier;
use crate::transcribe::transcriber::Transcriber;
use crossbeam_channel::{Receiver, Sender, bounded, never, select, unbounded};
use std::any::Any;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Configuration for the corpus pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of worker threads.
    pub workers: usize,
    /// Lines per job.
    pub chunk_size: usize,
    /// Wrap each word's outer syllables with the boundary marker.
    pub add_boundaries: bool,
    /// Log progress every this many written lines (0 disables).
    pub progress_interval: u64,
    /// Chunks read but not yet written, at most; 0 means
    /// `workers * JOBS_PER_WORKER`.
    pub job_buffer: usize,
    /// Optional event sender for progress display (crossbeam, non-blocking)
    pub event_tx: Option<Sender<CorpusEvent>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: defaults::worker_count(),
            chunk_size: defaults::CHUNK_SIZE,
            add_boundaries: defaults::ADD_BOUNDARIES,
            progress_interval: defaults::PROGRESS_INTERVAL,
            job_buffer: 0,
            event_tx: None,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(SylcueError::ConfigInvalidValue {
                key: "workers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.chunk_size == 0 {
            return Err(SylcueError::ConfigInvalidValue {
                key: "chunk_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn in_flight_limit(&self) -> usize {
        if self.job_buffer > 0 {
            self.job_buffer
        } else {
            self.workers * defaults::JOBS_PER_WORKER
        }
    }

    fn emit(&self, event: CorpusEvent) {
        if let Some(ref tx) = self.event_tx {
            // Progress display is best effort; a full channel drops the event.
            let _ = tx.try_send(event);
        }
    }
}

/// Counters kept by the coordinator while writing.
#[derive(Debug, Default)]
struct Tally {
    lines_written: u64,
    lines_skipped: u64,
    words_skipped: u64,
    pending: usize,
    next_sequence: u64,
}

/// Parallel corpus syllabifier.
pub struct CorpusPipeline {
    config: PipelineConfig,
    reporter: Arc<dyn ErrorReporter>,
}

impl CorpusPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            reporter: Arc::new(LogReporter),
        }
    }

    /// Replace the reporter used for skipped lines and worker errors.
    pub fn with_error_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Syllabifies every line of `reader` and writes one event record per
    /// successful line to `sink`, in input order.
    ///
    /// Lines that fail (invalid UTF-8, fatal transcriber error) are skipped
    /// and reported. A worker failure stops reading and fails the whole run;
    /// the sink is then left unfinished.
    pub fn run<R: BufRead + Send>(
        &self,
        reader: R,
        sink: &mut dyn EventSink,
        transcriber: Arc<dyn Transcriber>,
        profile: Arc<LanguageProfile>,
    ) -> Result<CorpusReport> {
        self.config.validate()?;

        let start = Instant::now();
        let syllabifier =
            LineSyllabifier::new(transcriber, profile).with_boundaries(self.config.add_boundaries);
        let chunk_size = self.config.chunk_size;

        let in_flight = self.config.in_flight_limit();
        tracing::info!(
            workers = self.config.workers,
            chunk_size,
            in_flight,
            language = syllabifier.profile().name(),
            transcriber = syllabifier.transcriber_name(),
            sink = sink.name(),
            "starting corpus pipeline"
        );

        let (job_tx, job_rx) = bounded::<CorpusJob>(in_flight);
        let (result_tx, result_rx) = unbounded::<ChunkResult>();
        // One token per chunk that has been read but not yet written.
        let (permit_tx, permit_rx) = bounded::<()>(in_flight);
        let (failure_tx, failure_rx) = unbounded::<String>();

        let (lines_read, tally) = thread::scope(|scope| -> Result<(u64, Tally)> {
            let reader_handle = scope.spawn(move || -> std::io::Result<u64> {
                let mut lines = 0;
                for job in LineChunker::new(reader, chunk_size) {
                    let job = job?;
                    lines += job.lines.len() as u64;
                    // Either send fails once the coordinator or every worker
                    // has stopped; the coordinator reports why.
                    if permit_tx.send(()).is_err() || job_tx.send(job).is_err() {
                        break;
                    }
                }
                Ok(lines)
            });

            let worker_handles: Vec<_> = (0..self.config.workers)
                .map(|id| {
                    let station = SyllabifierStation::new(syllabifier.clone());
                    let jobs = job_rx.clone();
                    let results = result_tx.clone();
                    let failures = failure_tx.clone();
                    let reporter = Arc::clone(&self.reporter);
                    scope.spawn(move || -> std::result::Result<(), String> {
                        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                            run_worker(id, station, jobs, results, reporter)
                        }));
                        let failure = match outcome {
                            Ok(Ok(_)) => return Ok(()),
                            Ok(Err(e)) => format!("worker {id}: {e}"),
                            Err(payload) => {
                                format!("worker {id} panicked: {}", panic_message(&*payload))
                            }
                        };
                        // The coordinator may already have stopped.
                        let _ = failures.send(failure.clone());
                        Err(failure)
                    })
                })
                .collect();
            drop(job_rx);
            drop(result_tx);
            drop(failure_tx);

            // Consumes the receivers: once it returns, the reader's next
            // permit and the workers' next result fail and both wind down.
            let collected = self.collect(result_rx, failure_rx, permit_rx, &mut *sink);

            let mut failures = Vec::new();
            for (id, handle) in worker_handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(failure)) => failures.push(failure),
                    Err(payload) => {
                        failures.push(format!("worker {id} panicked: {}", panic_message(&*payload)))
                    }
                }
            }
            let read = match reader_handle.join() {
                Ok(read) => read,
                Err(payload) => {
                    return Err(SylcueError::WorkerFailed {
                        message: format!("reader panicked: {}", panic_message(&*payload)),
                    });
                }
            };

            if !failures.is_empty() {
                let error = StationError::Fatal(failures.join("; "));
                self.reporter.report("coordinator", &error);
                return Err(SylcueError::WorkerFailed {
                    message: failures.join("; "),
                });
            }
            let lines_read = read?;
            let tally = collected?;
            if tally.pending > 0 {
                return Err(SylcueError::WorkerFailed {
                    message: format!(
                        "chunk {} never arrived; {} later chunks left unwritten",
                        tally.next_sequence, tally.pending
                    ),
                });
            }
            Ok((lines_read, tally))
        })?;

        sink.finish()?;

        let report = CorpusReport {
            lines_read,
            lines_written: tally.lines_written,
            lines_skipped: tally.lines_skipped,
            words_skipped: tally.words_skipped,
            elapsed: start.elapsed(),
        };
        tracing::info!(
            lines_read = report.lines_read,
            lines_written = report.lines_written,
            lines_skipped = report.lines_skipped,
            words_skipped = report.words_skipped,
            "corpus finished: {report}"
        );
        self.config.emit(CorpusEvent::Finished(report.clone()));
        Ok(report)
    }

    /// Receives chunk results until every worker is done, writing them in
    /// sequence order and handing back one permit per written chunk.
    ///
    /// Returns at the first worker failure.
    fn collect(
        &self,
        results: Receiver<ChunkResult>,
        failures: Receiver<String>,
        permits: Receiver<()>,
        sink: &mut dyn EventSink,
    ) -> Result<Tally> {
        let mut buffer = ReorderBuffer::new();
        let mut tally = Tally::default();
        let idle = never();
        let mut workers_running = true;

        loop {
            let failure_source = if workers_running { &failures } else { &idle };
            select! {
                recv(results) -> result => {
                    let Ok(result) = result else { break };
                    if let Err(result) = buffer.insert(result.sequence, result) {
                        return Err(SylcueError::WorkerFailed {
                            message: format!("duplicate result for chunk {}", result.sequence),
                        });
                    }
                    for ready in buffer.drain_ready() {
                        self.write_chunk(ready, sink, &mut tally)?;
                        // The reader took this permit before sending the chunk.
                        let _ = permits.try_recv();
                    }
                }
                recv(failure_source) -> failure => match failure {
                    Ok(message) => return Err(SylcueError::WorkerFailed { message }),
                    Err(_) => workers_running = false,
                },
            }
        }

        tally.pending = buffer.pending();
        tally.next_sequence = buffer.next_sequence();
        Ok(tally)
    }

    fn write_chunk(
        &self,
        chunk: ChunkResult,
        sink: &mut dyn EventSink,
        tally: &mut Tally,
    ) -> Result<()> {
        for skipped in chunk.skipped_lines {
            let error = StationError::skipped_line(skipped.line, &skipped.reason);
            self.reporter.report("syllabifier", &error);
            tally.lines_skipped += 1;
            self.config.emit(CorpusEvent::LineSkipped(skipped));
        }
        tally.words_skipped += chunk.skipped_words;

        let interval = self.config.progress_interval;
        for record in &chunk.records {
            sink.write_record(record)?;
            tally.lines_written += 1;
            if interval > 0 && tally.lines_written % interval == 0 {
                tracing::info!(lines = tally.lines_written, "lines processed");
                self.config.emit(CorpusEvent::Progress {
                    lines: tally.lines_written,
                });
            }
        }
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Syllabifies a corpus file into a gzip-compressed event file.
pub fn syllabify_corpus(
    corpus_path: &Path,
    event_file_path: &Path,
    transcriber: Arc<dyn Transcriber>,
    profile: Arc<LanguageProfile>,
    add_boundaries: bool,
    num_workers: usize,
    chunk_size: usize,
) -> Result<CorpusReport> {
    let config = PipelineConfig {
        workers: num_workers,
        chunk_size,
        add_boundaries,
        ..PipelineConfig::default()
    };
    run_files(config, corpus_path, event_file_path, transcriber, profile)
}

/// Runs a pipeline with `config` from `corpus_path` into a gzip event file.
pub fn run_files(
    config: PipelineConfig,
    corpus_path: &Path,
    event_file_path: &Path,
    transcriber: Arc<dyn Transcriber>,
    profile: Arc<LanguageProfile>,
) -> Result<CorpusReport> {
    config.validate()?;
    let reader = BufReader::new(File::open(corpus_path)?);
    let mut sink = GzipEventSink::create(event_file_path)?;
    CorpusPipeline::new(config).run(reader, &mut sink, transcriber, profile)
}
