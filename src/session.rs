use crate::score::EngagementLevel;
use chrono::Utc;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// Mutable per-recording state for one coaching session.
///
/// The session identifier is assigned once at creation (epoch milliseconds)
/// and survives metric resets; everything else is cleared by [`reset`].
/// All mutation goes through the core operations. The rendering layer reads
/// the state via accessors or [`snapshot`] and never writes it.
///
/// [`reset`]: CoachingSession::reset
/// [`snapshot`]: CoachingSession::snapshot
#[derive(Debug, Clone)]
pub struct CoachingSession {
    session_id: String,
    /// Distinct normalized script words confirmed spoken. Grows monotonically
    /// within a session.
    covered: HashSet<String>,
    /// Spoken words that matched nothing in the script, in first-seen order.
    mistakes: Vec<String>,
    mistake_set: HashSet<String>,
    filler_count: usize,
    score: u8,
    engagement: EngagementLevel,
    /// Accumulated finalized fragments, space-joined.
    transcript: String,
    /// Frozen copy of the transcript captured at recording stop.
    session_transcript: Option<String>,
}

impl CoachingSession {
    pub fn new() -> Self {
        Self::with_id(Utc::now().timestamp_millis().to_string())
    }

    pub fn with_id(session_id: String) -> Self {
        Self {
            session_id,
            covered: HashSet::new(),
            mistakes: Vec::new(),
            mistake_set: HashSet::new(),
            filler_count: 0,
            score: 0,
            engagement: EngagementLevel::Waiting,
            transcript: String::new(),
            session_transcript: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Clear every per-recording metric. Invoked when a new script is
    /// generated and again when a recording starts; the session id and any
    /// previously frozen transcript are untouched.
    pub fn reset(&mut self) {
        self.covered.clear();
        self.mistakes.clear();
        self.mistake_set.clear();
        self.filler_count = 0;
        self.score = 0;
        self.engagement = EngagementLevel::Waiting;
        self.transcript.clear();
        debug!("Session {} metrics reset", self.session_id);
    }

    /// Append a finalized fragment to the running transcript.
    pub fn append_transcript(&mut self, fragment: &str) {
        self.transcript.push_str(fragment);
        self.transcript.push(' ');
    }

    pub fn add_fillers(&mut self, count: usize) {
        self.filler_count += count;
    }

    /// Mark a normalized script word as covered. Returns false if it was
    /// already covered (repeated occurrences are no-ops).
    pub fn mark_covered(&mut self, word: &str) -> bool {
        self.covered.insert(word.to_string())
    }

    pub fn is_covered(&self, word: &str) -> bool {
        self.covered.contains(word)
    }

    pub fn covered_count(&self) -> usize {
        self.covered.len()
    }

    /// Record a spoken word that matched nothing in the script. Deduplicated
    /// by exact value; insertion order is preserved for the assessment list.
    pub fn add_mistake(&mut self, word: &str) -> bool {
        if self.mistake_set.insert(word.to_string()) {
            self.mistakes.push(word.to_string());
            true
        } else {
            false
        }
    }

    pub fn mistakes(&self) -> &[String] {
        &self.mistakes
    }

    pub fn filler_count(&self) -> usize {
        self.filler_count
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn engagement(&self) -> EngagementLevel {
        self.engagement
    }

    pub(crate) fn set_score(&mut self, score: u8) {
        self.score = score;
        self.engagement = EngagementLevel::for_score(score);
    }

    /// The transcript accumulated so far in this recording.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// The transcript frozen at the last recording stop, if any.
    pub fn session_transcript(&self) -> Option<&str> {
        self.session_transcript.as_deref()
    }

    /// Freeze the accumulated transcript for the assessment collaborator.
    /// The frozen value is a copy: a later reset never mutates it.
    pub fn finalize(&mut self) -> String {
        let frozen = self.transcript.trim().to_string();
        self.session_transcript = Some(frozen.clone());
        frozen
    }

    /// Read-only projection of the current metrics for the rendering layer.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let mut covered_words: Vec<String> = self.covered.iter().cloned().collect();
        covered_words.sort();
        MetricsSnapshot {
            session_id: self.session_id.clone(),
            score: self.score,
            engagement: self.engagement,
            engagement_label: self.engagement.label(),
            filler_count: self.filler_count,
            mistakes: self.mistakes.clone(),
            covered_words,
        }
    }
}

impl Default for CoachingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain values the UI polls after each update.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub session_id: String,
    pub score: u8,
    pub engagement: EngagementLevel,
    pub engagement_label: &'static str,
    pub filler_count: usize,
    pub mistakes: Vec<String>,
    pub covered_words: Vec<String>,
}
