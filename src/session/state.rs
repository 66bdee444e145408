//! Session state and interaction handlers
//!
//! All conversation state lives in an explicit `SessionState` that handlers
//! take by `&mut`; there are no process-wide globals. One session belongs to
//! one user, and handlers run synchronously: utterance -> responder ->
//! synthesis -> done.

use crate::messages::{Transcript, Turn};
use crate::responder::{self, Domain, Language, ResponsePack};
use crate::speech::{Synthesizer, TtsAudio};
use tracing::{info, warn};

/// Per-session conversation state
#[derive(Debug, Clone)]
pub struct SessionState {
    pub language: Language,
    pub domain: Domain,
    pub transcript: Transcript,

    /// Audio for the most recent reply, kept for playback/download.
    /// A failed synthesis leaves the previous audio in place.
    pub last_audio: Option<TtsAudio>,

    /// User-visible message from the most recent collaborator failure
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn new(language: Language, domain: Domain) -> Self {
        Self {
            language,
            domain,
            transcript: Transcript::new(),
            last_audio: None,
            last_error: None,
        }
    }

    /// Handle a typed (or transcribed) message.
    ///
    /// Empty and whitespace-only input is rejected here; the responder is
    /// never invoked for it. Otherwise the user turn is recorded with its
    /// original casing, the reply is recorded and handed to the synthesizer.
    pub fn submit(&mut self, input: &str, tts: &dyn Synthesizer) -> Option<&'static str> {
        if input.trim().is_empty() {
            return None;
        }

        self.transcript.push(Turn::user(input));
        let reply = responder::respond(input, self.language, self.domain);
        self.transcript.push(Turn::assistant(reply));
        self.speak(reply, tts);
        Some(reply)
    }

    /// Quick action: ask about the default topic of the active domain
    /// (pests for Agriculture, hygiene for Healthcare). Appends only the
    /// assistant turn, as the original UI button did.
    pub fn quick_ask(&mut self, tts: &dyn Synthesizer) -> &'static str {
        let topic = self.domain.default_topic();
        // default_topic always belongs to the active domain
        let reply = ResponsePack::reply(self.language, self.domain, topic)
            .unwrap_or_else(|| ResponsePack::greeting(self.language));
        self.transcript.push(Turn::assistant(reply));
        self.speak(reply, tts);
        reply
    }

    /// Quick action: greet in the session language
    pub fn greet(&mut self, tts: &dyn Synthesizer) -> &'static str {
        let reply = ResponsePack::greeting(self.language);
        self.transcript.push(Turn::assistant(reply));
        self.speak(reply, tts);
        reply
    }

    /// Clear the conversation: transcript, stored audio and error
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.last_audio = None;
        self.last_error = None;
        info!("Conversation cleared");
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }

    fn speak(&mut self, text: &str, tts: &dyn Synthesizer) {
        match tts.synthesize(text, self.language) {
            Ok(audio) => {
                if !audio.is_empty() {
                    self.last_audio = Some(audio);
                }
                self.last_error = None;
            }
            Err(e) => {
                warn!("Synthesis failed: {}", e);
                self.last_error = Some(e.user_message());
            }
        }
    }
}
