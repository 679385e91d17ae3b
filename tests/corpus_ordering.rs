//! Output order must not depend on worker count or chunk size.

use flate2::read::GzDecoder;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;
use sylcue::phonetics::{LanguageProfile, load_profile};
use sylcue::pipeline::{CollectorSink, CorpusPipeline, PipelineConfig, syllabify_corpus};
use sylcue::transcribe::{MockTranscriber, Transcriber};

const WORDS: &[(&str, &str)] = &[
    ("imagination", "ɪmædʒəneɪʃən"),
    ("is", "ɪz"),
    ("more", "mɔɹ"),
    ("important", "ɪmpɔɹtənt"),
    ("than", "ðæn"),
    ("knowledge", "nɑlɪdʒ"),
    ("strength", "stɹɛŋθ"),
    ("banana", "bənænə"),
    ("rhythm", "ɹɪðəm"),
    ("psst", "pst"),
];

fn transcriber() -> Arc<dyn Transcriber> {
    Arc::new(
        MockTranscriber::new("mock")
            .with_entries(WORDS)
            .with_entry("unknown", "")
            .with_failure_for("broken")
            .with_fatal_for("crash"),
    )
}

fn english() -> Arc<LanguageProfile> {
    Arc::new(load_profile("en").unwrap())
}

/// Deterministic corpus with empty lines, dropped words, failing lines and
/// invalid UTF-8 mixed in.
fn corpus(lines: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for i in 0..lines {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;

        match i % 97 {
            13 => out.extend_from_slice(b"\xff\xfe broken bytes"),
            41 => out.extend_from_slice(b"this will crash"),
            59 => {}
            _ => {
                let count = (state % 6 + 1) as usize;
                let words: Vec<&str> = (0..count)
                    .map(|k| {
                        let pick = (state >> (k * 7)) as usize % (WORDS.len() + 2);
                        match pick {
                            p if p < WORDS.len() => WORDS[p].0,
                            p if p == WORDS.len() => "unknown",
                            _ => "broken",
                        }
                    })
                    .collect();
                out.extend_from_slice(words.join(" ").as_bytes());
                if i % 5 == 0 {
                    out.extend_from_slice(b", Really!");
                }
            }
        }
        out.push(b'\n');
    }
    out
}

fn gunzip(path: &Path) -> Vec<u8> {
    let mut bytes = Vec::new();
    GzDecoder::new(std::fs::File::open(path).unwrap())
        .read_to_end(&mut bytes)
        .unwrap();
    bytes
}

#[test]
fn event_file_is_identical_for_every_worker_and_chunk_combination() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corpus.txt");
    std::fs::write(&input, corpus(1000)).unwrap();

    let failing = (0..1000u64).filter(|i| i % 97 == 13 || i % 97 == 41).count() as u64;
    let mut reference: Option<(Vec<u8>, Vec<u8>)> = None;

    for workers in [1, 4, 8] {
        for chunk_size in [1, 10, 125] {
            let output = dir.path().join(format!("events_{workers}_{chunk_size}.tsv.gz"));
            let report = syllabify_corpus(
                &input,
                &output,
                transcriber(),
                english(),
                true,
                workers,
                chunk_size,
            )
            .unwrap();

            assert_eq!(report.lines_read, 1000);
            assert_eq!(report.lines_skipped, failing, "workers={workers} chunk={chunk_size}");
            assert_eq!(report.lines_written, 1000 - failing);

            let compressed = std::fs::read(&output).unwrap();
            let text = gunzip(&output);
            let (ref_compressed, ref_text) =
                reference.get_or_insert_with(|| (compressed.clone(), text.clone()));
            assert!(
                &text == ref_text,
                "decompressed output differs for workers={workers} chunk={chunk_size}"
            );
            assert!(
                &compressed == ref_compressed,
                "compressed output differs for workers={workers} chunk={chunk_size}"
            );
        }
    }
}

#[test]
fn records_follow_input_line_order() {
    let lines: Vec<String> = (0..300)
        .map(|i| {
            let (word, _) = WORDS[i % WORDS.len()];
            format!("{} {}", word, WORDS[(i / WORDS.len()) % WORDS.len()].0)
        })
        .collect();
    let text = lines.join("\n");

    let mut sink = CollectorSink::new();
    let config = PipelineConfig {
        workers: 8,
        chunk_size: 3,
        ..PipelineConfig::default()
    };
    CorpusPipeline::new(config)
        .run(Cursor::new(text), &mut sink, transcriber(), english())
        .unwrap();

    let outcomes: Vec<String> = sink
        .records()
        .iter()
        .map(|record| record.outcome.clone())
        .collect();
    let expected: Vec<String> = lines.iter().map(|line| line.replace(' ', "_")).collect();
    assert_eq!(outcomes, expected);
}
