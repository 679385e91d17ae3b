use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use sylcue::cli::{Cli, Commands};
use sylcue::config::{Config, TranscriberBackend};
use sylcue::defaults::SEPARATOR;
use sylcue::phonetics::{LanguageInfo, get_language, list_languages, syllabify_word};
use sylcue::pipeline::{CorpusEvent, PipelineConfig, run_files};
use sylcue::syllabify::LineSyllabifier;
use sylcue::transcribe::{Transcriber, build_transcriber};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "sylcue", &mut std::io::stdout());
        }
        Commands::Languages => {
            for lang in list_languages() {
                println!("{:<4} {:<10} voice: {}", lang.code, lang.display_name, lang.voice);
            }
        }
        Commands::Word { ref ipa } => {
            let config = load_config(&cli)?;
            let language = resolve_language(&config)?;
            let profile = language.profile()?;
            let ipa = profile.normalize_transcription(ipa.trim());
            let syllables = syllabify_word(&ipa, &profile, config.syllabify.add_boundaries);
            println!("{}", syllables.join(SEPARATOR.to_string().as_str()));
        }
        Commands::Line {
            ref text,
            event,
            json,
        } => {
            let config = load_config(&cli)?;
            let language = resolve_language(&config)?;
            let transcriber = build_transcriber(&config.transcriber, language)?;
            let syllabifier = LineSyllabifier::new(transcriber, Arc::new(language.profile()?))
                .with_boundaries(config.syllabify.add_boundaries);

            let result = syllabifier.syllabify_line(text)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result.into_event())?);
            } else if event {
                print!("{}", result.into_event().to_line());
            } else {
                println!("{}", result.cues());
            }
        }
        Commands::Corpus {
            ref input,
            ref output,
            workers,
            chunk_size,
            json,
        } => {
            let mut config = load_config(&cli)?;
            if let Some(workers) = workers {
                config.pipeline.workers = Some(workers);
            }
            if let Some(chunk_size) = chunk_size {
                config.pipeline.chunk_size = chunk_size;
            }
            config.validate()?;
            run_corpus(&config, input, output, cli.quiet, json)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-q`/`-v`.
fn init_tracing(quiet: bool, verbose: u8) {
    let default_level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load configuration from file, environment and command-line flags.
///
/// Priority order (highest first):
/// 1. Command-line flags
/// 2. Environment variables (SYLCUE_*)
/// 3. Config file (--config or ~/.config/sylcue/config.toml)
/// 4. Built-in defaults
fn load_config(cli: &Cli) -> Result<Config> {
    let config = if let Some(ref path) = cli.config {
        Config::load(path).with_context(|| format!("Failed to load config {}", path.display()))?
    } else if let Some(path) = Config::default_path() {
        Config::load_or_default(&path)?
    } else {
        Config::default()
    };

    let mut config = config.with_env_overrides();
    if let Some(ref language) = cli.language {
        config.syllabify.language = language.clone();
    }
    if cli.no_boundaries {
        config.syllabify.add_boundaries = false;
    }
    if let Some(ref lexicon) = cli.lexicon {
        config.transcriber.backend = TranscriberBackend::Lexicon;
        config.transcriber.lexicon = Some(lexicon.clone());
    }

    config.validate()?;
    Ok(config)
}

fn resolve_language(config: &Config) -> Result<&'static LanguageInfo> {
    get_language(&config.syllabify.language)
        .with_context(|| format!("Unknown language: {}", config.syllabify.language))
}

fn run_corpus(config: &Config, input: &Path, output: &Path, quiet: bool, json: bool) -> Result<()> {
    let language = resolve_language(config)?;
    let profile = Arc::new(language.profile()?);
    let transcriber = build_transcriber(&config.transcriber, language)?;
    if !transcriber.is_ready() {
        tracing::warn!(transcriber = transcriber.name(), "transcriber reports not ready");
    }

    let show_spinner = !quiet && !json && std::io::stderr().is_terminal();
    let (event_tx, spinner) = if show_spinner {
        let (tx, rx) = crossbeam_channel::bounded::<CorpusEvent>(256);
        let handle = thread::spawn(move || {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                // SAFETY: hardcoded template string, always valid
                #[allow(clippy::expect_used)]
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg} [{elapsed_precise}]")
                    .expect("hardcoded spinner template"),
            );
            pb.enable_steady_tick(Duration::from_millis(120));
            pb.set_message("starting");
            for event in rx.iter() {
                match event {
                    CorpusEvent::Progress { lines } => pb.set_message(format!("{lines} lines")),
                    CorpusEvent::LineSkipped(_) => {}
                    CorpusEvent::Finished(_) => break,
                }
            }
            pb.finish_and_clear();
        });
        (Some(tx), Some(handle))
    } else {
        (None, None)
    };

    let pipeline_config = PipelineConfig {
        workers: config.pipeline.resolved_workers(),
        chunk_size: config.pipeline.chunk_size,
        add_boundaries: config.syllabify.add_boundaries,
        progress_interval: config.pipeline.progress_interval,
        job_buffer: 0,
        event_tx,
    };

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        language = language.code,
        transcriber = transcriber.name(),
        "syllabifying corpus"
    );
    let result = run_files(pipeline_config, input, output, transcriber, profile);

    // The pipeline config (and its sender) is gone, so the spinner loop ends.
    if let Some(handle) = spinner
        && handle.join().is_err()
    {
        eprintln!("sylcue: progress display thread panicked");
    }

    let report = result.with_context(|| format!("Failed to syllabify {}", input.display()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
