//! Event record destinations: gzip files and an in-memory collector.

use crate::error::{Result, SylcueError};
use crate::syllabify::event::EventRecord;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pluggable event record output for the corpus pipeline.
///
/// Only the pipeline coordinator writes to a sink; workers never see it.
pub trait EventSink {
    /// Handle one event record. Called in corpus line order.
    fn write_record(&mut self, record: &EventRecord) -> Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }

    /// Name for logging/debugging.
    fn name(&self) -> &'static str {
        "sink"
    }
}

/// Writes gzip-compressed `<cues>\t<outcome>\n` lines.
pub struct GzipEventSink<W: Write> {
    encoder: Option<GzEncoder<W>>,
}

impl GzipEventSink<BufWriter<File>> {
    /// Creates (or truncates) an event file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GzipEventSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            encoder: Some(GzEncoder::new(writer, Compression::default())),
        }
    }
}

impl<W: Write> EventSink for GzipEventSink<W> {
    fn write_record(&mut self, record: &EventRecord) -> Result<()> {
        let encoder = self
            .encoder
            .as_mut()
            .ok_or_else(|| SylcueError::Other("event file already finished".to_string()))?;
        encoder.write_all(record.to_line().as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(encoder) = self.encoder.take() {
            let mut writer = encoder.finish()?;
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gzip"
    }
}

/// Sink that keeps records in memory.
#[derive(Debug, Default)]
pub struct CollectorSink {
    records: Vec<EventRecord>,
    finished: bool,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<EventRecord> {
        self.records
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Records rendered exactly as the event file would contain them.
    pub fn to_text(&self) -> String {
        self.records.iter().map(EventRecord::to_line).collect()
    }
}

impl EventSink for CollectorSink {
    fn write_record(&mut self, record: &EventRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "collector"
    }
}
