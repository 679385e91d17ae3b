//! Transcriber that shells out to an external grapheme-to-phoneme program.
//!
//! The default is `espeak-ng -q --ipa -v <voice> <word>`. Program execution
//! goes through the `CommandExecutor` trait so the transcriber is testable
//! without the program installed.

use crate::defaults;
use crate::error::{Result, SylcueError};
use crate::transcribe::transcriber::Transcriber;
use std::process::Command;

/// Trait for executing system commands.
///
/// Object-safe, Send + Sync for use from worker threads.
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with arguments and return its stdout.
    fn execute(&self, command: &str, args: &[&str]) -> Result<String>;
}

/// Production command executor using std::process::Command.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandExecutor;

impl SystemCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn execute(&self, command: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(command).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SylcueError::TranscriberUnavailable {
                    message: format!("{command} not found. Install it or configure a lexicon"),
                }
            } else {
                SylcueError::TranscriberUnavailable {
                    message: format!("Failed to execute {command}: {e}"),
                }
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let word = args.last().copied().unwrap_or_default();
            return Err(SylcueError::Transcription {
                word: word.to_string(),
                message: format!(
                    "{command} failed with status {:?}: {}",
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Stress marks removed from program output.
const STRESS_MARKS: [char; 2] = ['ˈ', 'ˌ'];

/// Transcriber running one program invocation per word.
pub struct CommandTranscriber<E: CommandExecutor = SystemCommandExecutor> {
    executor: E,
    program: String,
    args: Vec<String>,
    name: String,
}

impl CommandTranscriber<SystemCommandExecutor> {
    /// The default program (espeak-ng) with the given voice.
    pub fn espeak(voice: &str) -> Self {
        Self::new(
            SystemCommandExecutor::new(),
            defaults::TRANSCRIBER_PROGRAM,
            vec!["-q".into(), "--ipa".into(), "-v".into(), voice.into()],
        )
    }
}

impl<E: CommandExecutor> CommandTranscriber<E> {
    /// Create a transcriber running `program args... <word>`.
    pub fn new(executor: E, program: &str, args: Vec<String>) -> Self {
        Self {
            executor,
            name: program.to_string(),
            program: program.to_string(),
            args,
        }
    }
}

/// Collapses program output to a single transcription.
///
/// Drops stress marks and all whitespace; multi-line output is joined.
fn clean_output(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !STRESS_MARKS.contains(c))
        .collect()
}

impl<E: CommandExecutor> Transcriber for CommandTranscriber<E> {
    fn transcribe(&self, word: &str) -> Result<String> {
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.push(word);
        let raw = self.executor.execute(&self.program, &args)?;
        Ok(clean_output(&raw))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        true
    }
}
