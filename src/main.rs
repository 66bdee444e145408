use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ulimi::responder::{Domain, Language};
use ulimi::session::SessionState;
use ulimi::speech::{
    CommandSynthesizer, CommandTranscriber, NullSynthesizer, SttConfig, Synthesizer, Transcriber,
    TtsConfig,
};

/// Indigenous language assistant for isiZulu and Setswana
#[derive(Parser, Debug)]
#[command(name = "ulimi", version, about)]
struct Args {
    /// Initial interface language
    #[arg(long, value_enum, default_value = "zulu")]
    language: Language,

    /// Initial application domain
    #[arg(long, value_enum, default_value = "healthcare")]
    domain: Domain,

    /// Text-to-speech program (must write a WAV file; see --tts-args)
    #[arg(long, default_value = "espeak-ng")]
    tts_program: String,

    /// Disable audio generation
    #[arg(long)]
    no_audio: bool,

    /// Speech-to-text program for /transcribe (reads a WAV path, prints text)
    #[arg(long)]
    stt_program: Option<String>,

    /// Directory for reply audio files
    #[arg(long, default_value = ".")]
    audio_dir: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ulimi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!(
        "Starting Ulimi assistant ({} / {})",
        args.language, args.domain
    );

    let tts: Box<dyn Synthesizer> = if args.no_audio {
        Box::new(NullSynthesizer)
    } else {
        Box::new(CommandSynthesizer::new(TtsConfig::new(&args.tts_program))?)
    };

    let stt: Option<Box<dyn Transcriber>> = match &args.stt_program {
        Some(program) => Some(Box::new(CommandTranscriber::new(SttConfig::new(program))?)),
        None => None,
    };

    let session = SessionState::new(args.language, args.domain);
    ulimi::cli::run(session, tts, stt, &args.audio_dir)?;

    Ok(())
}
