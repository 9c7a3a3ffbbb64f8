//! Voice input recorder state.
//!
//! The voice button toggles between idle and recording. Clicks that arrive
//! while the microphone prompt or the upload is pending are ignored.
//!
//! DESIGN
//! ======
//! `Session` owns everything a live recording holds (recorder, microphone
//! stream, audio chunks, event listeners). It is generic so the bookkeeping
//! can be tested without a browser; every exit path goes through `release`,
//! which hands back the stream so the caller can stop its tracks.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

use crate::error::ApiError;
use crate::net::types::TranscribeResponse;

/// Class added to the voice button while recording.
pub const RECORDING_CLASS: &str = "recording";

/// Placeholder shown in the query input when a transcription fails.
pub const TRANSCRIBE_FAILED_PLACEHOLDER: &str = "Could not transcribe audio. Please type your question.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoicePhase {
    #[default]
    Idle,
    /// Waiting for the microphone permission prompt.
    Requesting,
    Recording,
    Uploading,
}

/// What a click on the voice button should do in the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceAction {
    Start,
    Stop,
    Ignore,
}

impl VoicePhase {
    pub fn on_click(self) -> VoiceAction {
        match self {
            Self::Idle => VoiceAction::Start,
            Self::Recording => VoiceAction::Stop,
            Self::Requesting | Self::Uploading => VoiceAction::Ignore,
        }
    }
}

/// Resources taken out of a session that is ending.
pub struct Released<S, C, L> {
    pub stream: Option<S>,
    pub chunks: Vec<C>,
    pub listeners: Vec<L>,
}

/// One recording session: media recorder `M`, stream `S`, chunk `C`,
/// listener `L`.
pub struct Session<M, S, C, L> {
    pub phase: VoicePhase,
    media: Option<M>,
    stream: Option<S>,
    chunks: Vec<C>,
    listeners: Vec<L>,
}

impl<M, S, C, L> Default for Session<M, S, C, L> {
    fn default() -> Self {
        Self {
            phase: VoicePhase::Idle,
            media: None,
            stream: None,
            chunks: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl<M, S, C, L> Session<M, S, C, L> {
    /// Enter the recording phase with fresh resources.
    ///
    /// Returns a stream left over from an earlier session, which the caller
    /// must stop.
    pub fn begin(&mut self, media: M, stream: S, listeners: Vec<L>) -> Option<S> {
        let stale = self.release().stream;
        self.phase = VoicePhase::Recording;
        self.media = Some(media);
        self.stream = Some(stream);
        self.listeners = listeners;
        stale
    }

    pub fn media(&self) -> Option<&M> {
        self.media.as_ref()
    }

    pub fn push_chunk(&mut self, chunk: C) {
        self.chunks.push(chunk);
    }

    /// Drop the recorder and hand back everything else. The phase is left
    /// unchanged.
    pub fn release(&mut self) -> Released<S, C, L> {
        self.media = None;
        Released {
            stream: self.stream.take(),
            chunks: std::mem::take(&mut self.chunks),
            listeners: std::mem::take(&mut self.listeners),
        }
    }

    /// Release everything and return to idle, discarding recorded audio.
    pub fn abort(&mut self) -> Released<S, C, L> {
        self.phase = VoicePhase::Idle;
        self.release()
    }
}

/// Text to place in the query input, or the reason nothing was placed.
///
/// # Errors
///
/// Returns a log-ready reason when the transcription failed or came back
/// empty.
pub fn transcript_text(result: Result<TranscribeResponse, ApiError>) -> Result<String, String> {
    let resp = result.map_err(|e| e.to_string())?;
    if let Some(error) = resp.error.filter(|e| !e.is_empty()) {
        return Err(format!("transcription failed: {error}"));
    }
    let text = resp.text.trim();
    if text.is_empty() {
        return Err("transcription returned no text".to_owned());
    }
    Ok(text.to_owned())
}

/// Change applied to the query input once a transcription finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputUpdate {
    /// Replace the value and restore the normal placeholder.
    Fill(String),
    /// Keep the value and show a failure placeholder; carries the log reason.
    Failed(String),
}

impl InputUpdate {
    pub fn from_result(result: Result<TranscribeResponse, ApiError>) -> Self {
        match transcript_text(result) {
            Ok(text) => Self::Fill(text),
            Err(reason) => Self::Failed(reason),
        }
    }

    /// Placeholder to show, given the input's original one.
    pub fn placeholder<'a>(&self, original: &'a str) -> &'a str {
        match self {
            Self::Fill(_) => original,
            Self::Failed(_) => TRANSCRIBE_FAILED_PLACEHOLDER,
        }
    }
}
