use lexo_transcribe_client::{TranscriptionResult, UtteranceSpan};

use crate::sync::active_index;
use crate::types::TranscriptLine;

/// Ordered transcript of one media upload.
///
/// The line sequence is fixed at construction; a new upload builds a new
/// `Transcript` and replaces the old one wholesale. There is no API for
/// editing lines in place.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    text: String,
    summary: Option<String>,
}

impl Transcript {
    pub fn new(lines: Vec<TranscriptLine>, text: impl Into<String>) -> Self {
        Self {
            lines,
            text: text.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    /// Build a transcript from a completed transcription job. Sentence
    /// spans become lines; when speaker-attributed utterances are
    /// present, each line takes the speaker of the last utterance that
    /// started at or before it.
    pub fn from_result(result: TranscriptionResult) -> Self {
        let lines = result
            .sentences
            .into_iter()
            .map(|s| {
                let speaker = result
                    .utterances
                    .as_deref()
                    .and_then(|us| speaker_at(us, s.start_ms));
                TranscriptLine {
                    start_ms: s.start_ms,
                    end_ms: s.end_ms,
                    text: s.text,
                    speaker,
                }
            })
            .collect();

        Self {
            lines,
            text: result.text,
            summary: result.summary,
        }
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// See [`active_index`].
    pub fn active_index(&self, time_secs: f64) -> usize {
        active_index(&self.lines, time_secs)
    }
}

fn speaker_at(utterances: &[UtteranceSpan], start_ms: i64) -> Option<String> {
    utterances
        .iter()
        .take_while(|u| u.start_ms <= start_ms)
        .last()
        .map(|u| u.speaker.clone())
}
