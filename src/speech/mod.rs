//! Black-box seams for the speech collaborators
//!
//! - Text-to-speech: reply text + language code -> audio samples
//! - Speech-to-text: audio samples -> transcript text

pub mod stt;
pub mod tts;
pub mod wav;

pub use stt::{CommandTranscriber, SttConfig, Transcriber};
pub use tts::{CommandSynthesizer, NullSynthesizer, Synthesizer, TtsAudio, TtsConfig};
