//! Speech-to-text collaborator seam
//!
//! Mirrors the TTS seam: audio samples in, transcript text out, or a failure.
//! Optional in practice; a session without a configured recognizer simply
//! never offers voice input.

use crate::speech::wav::write_wav;
use crate::{Result, UlimiError};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;
use uuid::Uuid;

/// A speech recognition backend
pub trait Transcriber {
    fn transcribe(&self, samples: &[f32], sample_rate: u32) -> Result<String>;
}

/// Configuration for the external recognition program
///
/// `args` is a template; `{in}` is replaced with the path of a WAV file
/// holding the utterance. The transcript is read from the program's stdout.
#[derive(Clone, Debug)]
pub struct SttConfig {
    pub program: String,
    pub args: Vec<String>,
    pub work_dir: PathBuf,
}

impl SttConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec!["{in}".to_string()],
            work_dir: std::env::temp_dir(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    fn expand_args(&self, input: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace("{in}", input))
            .collect()
    }
}

/// Transcriber backed by an external command reading a WAV file
pub struct CommandTranscriber {
    config: SttConfig,
}

impl CommandTranscriber {
    pub fn new(config: SttConfig) -> Result<Self> {
        if config.program.is_empty() {
            return Err(UlimiError::Config("STT program is required".into()));
        }
        Ok(Self { config })
    }
}

impl Transcriber for CommandTranscriber {
    fn transcribe(&self, samples: &[f32], sample_rate: u32) -> Result<String> {
        if samples.is_empty() {
            return Ok(String::new());
        }

        let in_path = self
            .config
            .work_dir
            .join(format!("ulimi-stt-{}.wav", Uuid::new_v4()));
        write_wav(&in_path, samples, sample_rate)?;

        let args = self.config.expand_args(&in_path.to_string_lossy());
        debug!(program = %self.config.program, "Transcribing");

        let output = Command::new(&self.config.program)
            .args(&args)
            .output()
            .map_err(|e| {
                UlimiError::SpeechToText(format!(
                    "Failed to run {}: {}",
                    self.config.program, e
                ))
            });
        let _ = std::fs::remove_file(&in_path);
        let output = output?;

        if !output.status.success() {
            return Err(UlimiError::SpeechToText(format!(
                "{} exited with {}",
                self.config.program, output.status
            )));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_args() {
        let config = SttConfig::new("recognize").with_args(vec![
            "--wav".to_string(),
            "{in}".to_string(),
        ]);
        let args = config.expand_args("/tmp/utterance.wav");
        assert_eq!(args, vec!["--wav", "/tmp/utterance.wav"]);
    }

    #[test]
    fn test_empty_program_is_config_error() {
        let result = CommandTranscriber::new(SttConfig::new(""));
        assert!(matches!(result, Err(UlimiError::Config(_))));
    }

    #[test]
    fn test_empty_samples_give_empty_transcript() {
        let transcriber =
            CommandTranscriber::new(SttConfig::new("/nonexistent/ulimi-test-stt")).unwrap();
        let transcript = transcriber.transcribe(&[], 16000).unwrap();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_missing_program_fails() {
        let transcriber =
            CommandTranscriber::new(SttConfig::new("/nonexistent/ulimi-test-stt")).unwrap();
        let result = transcriber.transcribe(&[0.0; 160], 16000);
        assert!(matches!(result, Err(UlimiError::SpeechToText(_))));
    }
}
