//! Interactive terminal front-end over the session handlers
//!
//! Plain input goes through the responder; slash commands map to the
//! selector and quick-action controls of the original UI. The latest reply's
//! audio is written as a WAV file next to the conversation, standing in for
//! the playback/download affordance.

use crate::messages::Speaker;
use crate::responder::{Domain, Language};
use crate::session::SessionState;
use crate::speech::{wav, Synthesizer, Transcriber};
use crate::{Result, UlimiError};
use clap::ValueEnum;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text for the responder
    Say(String),
    SetLanguage(Language),
    SetDomain(Domain),
    /// Ask about the domain's default topic
    QuickAsk,
    Greet,
    Clear,
    History { json: bool },
    Topics,
    Transcribe(PathBuf),
    Help,
    Quit,
    /// Unusable input, with a message for the user
    Invalid(String),
}

/// Parse one input line into a command.
///
/// Anything not starting with `/` is an utterance; empty input is invalid.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Invalid("Type a message or /help".to_string());
    }
    if !line.starts_with('/') {
        return Command::Say(line.to_string());
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let arg = parts.next().unwrap_or("").trim();

    match name {
        "/language" => match Language::from_str(arg, true) {
            Ok(language) => Command::SetLanguage(language),
            Err(_) => Command::Invalid("Usage: /language <zulu|tswana>".to_string()),
        },
        "/domain" => match Domain::from_str(arg, true) {
            Ok(domain) => Command::SetDomain(domain),
            Err(_) => Command::Invalid("Usage: /domain <healthcare|agriculture>".to_string()),
        },
        "/ask" => Command::QuickAsk,
        "/greet" => Command::Greet,
        "/clear" => Command::Clear,
        "/history" => Command::History { json: arg == "--json" },
        "/topics" => Command::Topics,
        "/transcribe" => {
            if arg.is_empty() {
                Command::Invalid("Usage: /transcribe <wav-file>".to_string())
            } else {
                Command::Transcribe(PathBuf::from(arg))
            }
        }
        "/help" => Command::Help,
        "/quit" | "/exit" => Command::Quit,
        other => Command::Invalid(format!("Unknown command: {} (see /help)", other)),
    }
}

const HELP: &str = "\
Commands:
  /language <zulu|tswana>         switch interface language
  /domain <healthcare|agriculture> switch application domain
  /ask                            ask about the domain's default topic
  /greet                          request a greeting
  /clear                          clear the conversation
  /history [--json]               show the transcript
  /topics                         list topics of the active domain
  /transcribe <wav-file>          send a recorded utterance
  /quit                           exit
Anything else is sent to the assistant.";

/// Run the interactive loop until `/quit` or end of input.
pub fn run(
    mut session: SessionState,
    tts: Box<dyn Synthesizer>,
    stt: Option<Box<dyn Transcriber>>,
    audio_dir: &Path,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Ulimi — indigenous language assistant (Zulu / Tswana)");
    println!("{}", HELP);

    loop {
        print!("[{} • {}] > ", session.language, session.domain);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Say(text) => {
                if let Some(reply) = session.submit(&text, tts.as_ref()) {
                    report_reply(&session, reply, audio_dir);
                }
            }
            Command::SetLanguage(language) => {
                session.set_language(language);
                info!("Language set to {}", language);
                println!("Language: {}", language);
            }
            Command::SetDomain(domain) => {
                session.set_domain(domain);
                info!("Domain set to {}", domain);
                println!("Domain: {}", domain);
            }
            Command::QuickAsk => {
                let reply = session.quick_ask(tts.as_ref());
                report_reply(&session, reply, audio_dir);
            }
            Command::Greet => {
                let reply = session.greet(tts.as_ref());
                report_reply(&session, reply, audio_dir);
            }
            Command::Clear => {
                session.clear();
                println!("Conversation cleared.");
            }
            Command::History { json } => print_history(&session, json)?,
            Command::Topics => {
                let names: Vec<String> = session
                    .domain
                    .topics()
                    .iter()
                    .map(|t| t.to_string())
                    .collect();
                println!("{} topics: {}", session.domain, names.join(", "));
            }
            Command::Transcribe(path) => match &stt {
                Some(transcriber) => match transcribe_file(transcriber.as_ref(), &path) {
                    Ok(text) if text.is_empty() => println!("Nothing recognized."),
                    Ok(text) => {
                        println!("You (voice): {}", text);
                        if let Some(reply) = session.submit(&text, tts.as_ref()) {
                            report_reply(&session, reply, audio_dir);
                        }
                    }
                    Err(e) => println!("{}", e.user_message()),
                },
                None => println!("No speech recognizer configured (--stt-program)."),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Invalid(msg) => println!("{}", msg),
        }
    }

    Ok(())
}

fn transcribe_file(transcriber: &dyn Transcriber, path: &Path) -> Result<String> {
    let (samples, sample_rate) = wav::read_wav(path)?;
    transcriber.transcribe(&samples, sample_rate)
}

fn report_reply(session: &SessionState, reply: &str, audio_dir: &Path) {
    println!("Assistant: {}", reply);

    if let Some(error) = &session.last_error {
        println!("({})", error);
        return;
    }

    if let Some(audio) = &session.last_audio {
        let path = audio_dir.join(format!("{}_response.wav", session.language));
        match wav::write_wav(&path, &audio.samples, audio.sample_rate) {
            Ok(()) => println!(
                "Audio ({:.1}s): {}",
                audio.duration_secs(),
                path.display()
            ),
            Err(e) => println!("({})", e.user_message()),
        }
    }
}

fn print_history(session: &SessionState, json: bool) -> Result<()> {
    let turns = session.transcript.all();
    if turns.is_empty() {
        println!("No conversation yet.");
        return Ok(());
    }

    if json {
        let rendered = serde_json::to_string_pretty(&turns)
            .map_err(|e| UlimiError::Io(e.to_string()))?;
        println!("{}", rendered);
        return Ok(());
    }

    for turn in turns {
        let who = match turn.speaker {
            Speaker::User => "You",
            Speaker::Assistant => "Assistant",
        };
        println!("{}: {}", who, turn.text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_say() {
        assert_eq!(
            parse_command("I saw a pest in my field"),
            Command::Say("I saw a pest in my field".to_string())
        );
    }

    #[test]
    fn test_language_command() {
        assert_eq!(
            parse_command("/language tswana"),
            Command::SetLanguage(Language::Tswana)
        );
        assert_eq!(
            parse_command("/language Zulu"),
            Command::SetLanguage(Language::Zulu)
        );
        assert!(matches!(parse_command("/language klingon"), Command::Invalid(_)));
    }

    #[test]
    fn test_domain_command() {
        assert_eq!(
            parse_command("/domain agriculture"),
            Command::SetDomain(Domain::Agriculture)
        );
        assert!(matches!(parse_command("/domain"), Command::Invalid(_)));
    }

    #[test]
    fn test_history_variants() {
        assert_eq!(parse_command("/history"), Command::History { json: false });
        assert_eq!(
            parse_command("/history --json"),
            Command::History { json: true }
        );
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(matches!(parse_command("   "), Command::Invalid(_)));
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("/exit"), Command::Quit);
    }

    #[test]
    fn test_transcribe_requires_path() {
        assert_eq!(
            parse_command("/transcribe note.wav"),
            Command::Transcribe(PathBuf::from("note.wav"))
        );
        assert!(matches!(parse_command("/transcribe"), Command::Invalid(_)));
    }
}
