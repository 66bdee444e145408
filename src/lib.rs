pub mod cli;
pub mod messages;
pub mod responder;
pub mod session;
pub mod speech;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum UlimiError {
    #[error("Text-to-speech error: {0}")]
    TextToSpeech(String),

    #[error("Speech-to-text error: {0}")]
    SpeechToText(String),

    #[error("Audio file error: {0}")]
    AudioFile(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for UlimiError {
    fn from(e: std::io::Error) -> Self {
        UlimiError::Io(e.to_string())
    }
}

impl From<hound::Error> for UlimiError {
    fn from(e: hound::Error) -> Self {
        UlimiError::AudioFile(e.to_string())
    }
}

impl UlimiError {
    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Collaborator failures are per-interaction; the user can retry
            UlimiError::TextToSpeech(_) => true,
            UlimiError::SpeechToText(_) => true,
            UlimiError::AudioFile(_) => true,
            UlimiError::Io(_) => false,
            UlimiError::Config(_) => false,
        }
    }

    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            UlimiError::TextToSpeech(_) => {
                "Audio generation failed. The response is shown as text.".to_string()
            }
            UlimiError::SpeechToText(_) => {
                "Speech recognition failed. Please type your message instead.".to_string()
            }
            UlimiError::AudioFile(_) => {
                "Could not read or write the audio file.".to_string()
            }
            UlimiError::Io(_) => "File system error occurred.".to_string(),
            UlimiError::Config(_) => "Configuration error. Please check settings.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UlimiError>;
