use crate::session::CoachingSession;
use serde::{Deserialize, Serialize};

/// Request payload for the external feedback-generation service, built after
/// the transcript has been finalized. Field names are the wire contract; the
/// core's responsibility ends at producing these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Mistakes in first-seen order.
    pub mistakes: Vec<String>,
    pub score: u8,
    pub fillers: usize,
    pub transcript: String,
    pub session_id: String,
}

impl AssessmentRequest {
    pub fn from_session(session: &CoachingSession) -> Self {
        let transcript = match session.session_transcript() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => "No transcript captured".to_string(),
        };
        Self {
            mistakes: session.mistakes().to_vec(),
            score: session.score(),
            fillers: session.filler_count(),
            transcript,
            session_id: session.session_id().to_string(),
        }
    }
}

/// Payload for the audience-reaction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceReactionRequest {
    pub score: u8,
}
