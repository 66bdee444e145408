//! Text-to-speech collaborator seam
//!
//! Synthesis is a black box: text plus a language code in, audio samples out,
//! or a failure. The concrete backend is an external program (espeak-ng by
//! default) that writes a WAV file; there is no retry and no timeout, a
//! failed call just surfaces to the user.

use crate::responder::Language;
use crate::speech::wav::read_wav;
use crate::{Result, UlimiError};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info};
use uuid::Uuid;

/// Synthesized audio: f32 mono samples at a known sample rate
#[derive(Debug, Clone)]
pub struct TtsAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl TtsAudio {
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A text-to-speech backend
pub trait Synthesizer {
    fn synthesize(&self, text: &str, language: Language) -> Result<TtsAudio>;
}

/// A synthesizer that produces no audio, for text-only sessions
pub struct NullSynthesizer;

impl Synthesizer for NullSynthesizer {
    fn synthesize(&self, _text: &str, _language: Language) -> Result<TtsAudio> {
        Ok(TtsAudio {
            samples: Vec::new(),
            sample_rate: 16000,
        })
    }
}

/// Configuration for the external synthesis program
///
/// `args` is a template; `{lang}`, `{text}` and `{out}` are replaced per
/// call with the ISO language code, the reply text and the output WAV path.
#[derive(Clone, Debug)]
pub struct TtsConfig {
    /// Program to invoke
    pub program: String,

    /// Argument template
    pub args: Vec<String>,

    /// Directory for intermediate WAV files (system temp dir by default)
    pub work_dir: PathBuf,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            program: "espeak-ng".to_string(),
            args: ["-v", "{lang}", "-w", "{out}", "{text}"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            work_dir: std::env::temp_dir(),
        }
    }
}

impl TtsConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Replace the argument template
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the directory for intermediate WAV files
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    fn expand_args(&self, text: &str, lang_code: &str, out: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{lang}", lang_code)
                    .replace("{text}", text)
                    .replace("{out}", out)
            })
            .collect()
    }
}

/// Synthesizer backed by an external command that writes a WAV file
pub struct CommandSynthesizer {
    config: TtsConfig,
}

impl CommandSynthesizer {
    pub fn new(config: TtsConfig) -> Result<Self> {
        if config.program.is_empty() {
            return Err(UlimiError::Config("TTS program is required".into()));
        }
        info!("Using TTS program: {}", config.program);
        Ok(Self { config })
    }
}

impl Synthesizer for CommandSynthesizer {
    fn synthesize(&self, text: &str, language: Language) -> Result<TtsAudio> {
        if text.trim().is_empty() {
            return Ok(TtsAudio {
                samples: Vec::new(),
                sample_rate: 16000,
            });
        }

        let out_path = self
            .config
            .work_dir
            .join(format!("ulimi-tts-{}.wav", Uuid::new_v4()));
        let out = out_path.to_string_lossy().to_string();
        let args = self.config.expand_args(text, language.tts_code(), &out);

        debug!(program = %self.config.program, lang = language.tts_code(), "Synthesizing");

        let status = Command::new(&self.config.program)
            .args(&args)
            .status()
            .map_err(|e| {
                UlimiError::TextToSpeech(format!(
                    "Failed to run {}: {}",
                    self.config.program, e
                ))
            })?;

        if !status.success() {
            return Err(UlimiError::TextToSpeech(format!(
                "{} exited with {}",
                self.config.program, status
            )));
        }

        let (samples, sample_rate) = read_wav(&out_path)?;
        let _ = std::fs::remove_file(&out_path);

        debug!(
            "Synthesized {} samples ({:.2}s)",
            samples.len(),
            samples.len() as f32 / sample_rate as f32
        );

        Ok(TtsAudio {
            samples,
            sample_rate,
        })
    }
}
