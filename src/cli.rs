//! Command-line interface for sylcue
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Overlapping syllabic cues from IPA transcriptions
#[derive(Parser, Debug)]
#[command(
    name = "sylcue",
    version,
    about = "Overlapping syllabic cues from IPA transcriptions"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (-v: debug, -vv: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Language code (default: en). See `sylcue languages`
    #[arg(long, short = 'l', global = true, value_name = "LANG")]
    pub language: Option<String>,

    /// Do not wrap words with the `#` boundary marker
    #[arg(long, global = true)]
    pub no_boundaries: bool,

    /// Transcribe from a `word<TAB>ipa` lexicon file instead of espeak-ng
    #[arg(long, global = true, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Syllabify a corpus file into a gzip-compressed event file
    Corpus {
        /// Corpus with one utterance per line
        input: PathBuf,

        /// Event file to write (`cues<TAB>outcome` lines, gzip)
        output: PathBuf,

        /// Number of worker threads (default: available parallelism)
        #[arg(long, short = 'w', value_name = "N")]
        workers: Option<usize>,

        /// Lines per job
        #[arg(long, short = 'c', value_name = "LINES")]
        chunk_size: Option<usize>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Syllabify one line of text
    Line {
        /// Text to syllabify
        text: String,

        /// Print `cues<TAB>outcome` instead of the cues only
        #[arg(long, conflicts_with = "json")]
        event: bool,

        /// Print the event record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Segment an already transcribed IPA word
    Word {
        /// IPA transcription (e.g. ɪmædʒəneɪʃən)
        ipa: String,
    },

    /// List built-in languages
    Languages,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["sylcue"]).is_err());
    }

    #[test]
    fn test_parse_corpus_defaults() {
        let cli = Cli::try_parse_from(["sylcue", "corpus", "in.txt", "out.tsv.gz"]).unwrap();
        match cli.command {
            Commands::Corpus {
                input,
                output,
                workers,
                chunk_size,
                json,
            } => {
                assert_eq!(input, PathBuf::from("in.txt"));
                assert_eq!(output, PathBuf::from("out.tsv.gz"));
                assert!(workers.is_none());
                assert!(chunk_size.is_none());
                assert!(!json);
            }
            other => panic!("Expected Corpus command, got {other:?}"),
        }
        assert!(cli.language.is_none());
        assert!(!cli.no_boundaries);
        assert!(cli.lexicon.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_corpus_with_options() {
        let cli = Cli::try_parse_from([
            "sylcue",
            "corpus",
            "in.txt",
            "out.gz",
            "--workers",
            "8",
            "-c",
            "10",
            "--language",
            "pl",
            "--no-boundaries",
            "--lexicon",
            "pl.tsv",
        ])
        .unwrap();

        assert_eq!(cli.language.as_deref(), Some("pl"));
        assert!(cli.no_boundaries);
        assert_eq!(cli.lexicon, Some(PathBuf::from("pl.tsv")));
        match cli.command {
            Commands::Corpus {
                workers,
                chunk_size,
                ..
            } => {
                assert_eq!(workers, Some(8));
                assert_eq!(chunk_size, Some(10));
            }
            other => panic!("Expected Corpus command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_line_event() {
        let cli = Cli::try_parse_from(["sylcue", "line", "Hello there", "--event"]).unwrap();
        match cli.command {
            Commands::Line { text, event, json } => {
                assert_eq!(text, "Hello there");
                assert!(event);
                assert!(!json);
            }
            other => panic!("Expected Line command, got {other:?}"),
        }
    }

    #[test]
    fn test_line_event_conflicts_with_json() {
        assert!(Cli::try_parse_from(["sylcue", "line", "hi", "--event", "--json"]).is_err());
    }

    #[test]
    fn test_parse_word() {
        let cli = Cli::try_parse_from(["sylcue", "word", "kæt"]).unwrap();
        assert!(matches!(cli.command, Commands::Word { ipa } if ipa == "kæt"));
    }

    #[test]
    fn test_parse_verbose_repeated_flags() {
        let cli = Cli::try_parse_from(["sylcue", "-v", "-v", "languages"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Languages));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sylcue",
            "languages",
            "--quiet",
            "--config",
            "/path/to/config.toml",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["sylcue", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Bash }));
    }

    #[test]
    fn test_invalid_workers_rejected() {
        assert!(Cli::try_parse_from(["sylcue", "corpus", "a", "b", "--workers", "many"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
