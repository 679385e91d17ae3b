//! Splits a corpus reader into fixed-size jobs.

use crate::pipeline::types::CorpusJob;
use std::io::{self, BufRead};

/// Lazy iterator of `CorpusJob`s over a line-oriented reader.
///
/// Lines are kept as raw bytes so that invalid UTF-8 only affects the line
/// it occurs in. `\n` and `\r\n` terminators are stripped. Every job except
/// possibly the last holds exactly `chunk_size` lines.
pub struct LineChunker<R: BufRead> {
    reader: R,
    chunk_size: usize,
    next_sequence: u64,
    next_line: u64,
    done: bool,
}

impl<R: BufRead> LineChunker<R> {
    /// # Panics
    /// Panics if `chunk_size` is zero.
    pub fn new(reader: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be at least 1");
        Self {
            reader,
            chunk_size,
            next_sequence: 0,
            next_line: 1,
            done: false,
        }
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}

impl<R: BufRead> Iterator for LineChunker<R> {
    type Item = io::Result<CorpusJob>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut lines = Vec::with_capacity(self.chunk_size);
        while lines.len() < self.chunk_size {
            match self.read_line() {
                Ok(Some(line)) => lines.push(line),
                Ok(None) => {
                    self.done = true;
                    break;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        if lines.is_empty() {
            return None;
        }

        let job = CorpusJob::new(self.next_sequence, self.next_line, lines);
        self.next_sequence += 1;
        self.next_line += job.lines.len() as u64;
        Some(Ok(job))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn jobs(input: &[u8], chunk_size: usize) -> Vec<CorpusJob> {
        LineChunker::new(Cursor::new(input.to_vec()), chunk_size)
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_empty_input_has_no_jobs() {
        assert!(jobs(b"", 3).is_empty());
    }

    #[test]
    fn test_chunks_partition_lines() {
        let chunks = jobs(b"a\nb\nc\nd\ne\n", 2);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], CorpusJob::new(0, 1, vec![b"a".to_vec(), b"b".to_vec()]));
        assert_eq!(chunks[1], CorpusJob::new(1, 3, vec![b"c".to_vec(), b"d".to_vec()]));
        assert_eq!(chunks[2], CorpusJob::new(2, 5, vec![b"e".to_vec()]));
    }

    #[test]
    fn test_last_line_without_newline() {
        let chunks = jobs(b"one\ntwo", 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].lines, vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let chunks = jobs(b"one\r\n\r\nthree\n", 5);
        assert_eq!(
            chunks[0].lines,
            vec![b"one".to_vec(), Vec::new(), b"three".to_vec()]
        );
    }

    #[test]
    fn test_invalid_utf8_is_passed_through() {
        let chunks = jobs(b"ok\n\xff\xfe\n", 1);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].lines[0], vec![0xff, 0xfe]);
        assert_eq!(chunks[1].first_line, 2);
    }

    #[test]
    #[should_panic(expected = "chunk_size must be at least 1")]
    fn test_zero_chunk_size_panics() {
        LineChunker::new(Cursor::new(Vec::new()), 0);
    }
}
