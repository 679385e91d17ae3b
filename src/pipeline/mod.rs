//! Parallel corpus pipeline.
//!
//! A reader thread chunks the corpus into jobs, a pool of worker threads
//! syllabifies them, and the coordinator writes results in input order.
//! Stages are connected by crossbeam channels; the job channel is bounded
//! for backpressure.

pub mod chunker;
pub mod error;
pub mod orchestrator;
pub mod reorder;
pub mod sink;
pub mod station;
pub mod types;
pub mod worker;

pub use chunker::LineChunker;
pub use error::{ErrorReporter, LogReporter, StationError};
pub use orchestrator::{CorpusPipeline, PipelineConfig, run_files, syllabify_corpus};
pub use reorder::ReorderBuffer;
pub use sink::{CollectorSink, EventSink, GzipEventSink};
pub use station::Station;
pub use types::{ChunkResult, CorpusEvent, CorpusJob, CorpusReport, SkippedLine};
pub use worker::{SyllabifierStation, run_worker};
