use crate::assessment::AssessmentRequest;
use crate::filler_detector::detect_filler_words;
use crate::matcher::match_fragment;
use crate::script::ScriptTokens;
use crate::session::{CoachingSession, MetricsSnapshot};
use crate::settings::CoachSettings;
use log::{debug, info};

/// The coaching engine: owns the session state and ties the tokenizer, filler
/// detector and matcher together.
///
/// Single-threaded and synchronous by design. The external host delivers
/// finalized recognizer fragments in emission order, one at a time; interim
/// results must never reach the engine. Each [`push_fragment`] call is a
/// complete atomic update of the session state. Stopping a recording is
/// modeled as the absence of further fragments, plus one [`stop_recording`]
/// call to freeze the transcript.
///
/// [`push_fragment`]: CoachingEngine::push_fragment
/// [`stop_recording`]: CoachingEngine::stop_recording
pub struct CoachingEngine {
    settings: CoachSettings,
    script: ScriptTokens,
    session: CoachingSession,
}

impl CoachingEngine {
    pub fn new(settings: CoachSettings) -> Self {
        let session = CoachingSession::new();
        info!("Coaching session {} created", session.session_id());
        Self {
            settings,
            script: ScriptTokens::default(),
            session,
        }
    }

    /// Install a freshly generated reference script. Resets all metrics;
    /// the session id is stable for the process lifetime.
    pub fn load_script(&mut self, script: &str) {
        self.script = ScriptTokens::tokenize(script);
        self.session.reset();
        info!(
            "Loaded script: {} tokens ({} distinct)",
            self.script.total_word_count(),
            self.script.distinct_word_count()
        );
    }

    /// Begin a new recording. Same effect as the script-load reset.
    pub fn start_recording(&mut self) {
        self.session.reset();
        info!("Recording started for session {}", self.session.session_id());
    }

    /// Process one finalized recognizer fragment: accumulate the transcript,
    /// count fillers, and reconcile coverage against the script.
    pub fn push_fragment(&mut self, fragment: &str) {
        if fragment.trim().is_empty() {
            debug!("Ignoring empty fragment");
            return;
        }

        self.session.append_transcript(fragment);

        let custom = if self.settings.custom_filler_words.is_empty() {
            None
        } else {
            Some(self.settings.custom_filler_words.as_slice())
        };
        let analysis = detect_filler_words(fragment, custom);
        self.session.add_fillers(analysis.filler_count);

        match_fragment(fragment, &self.script, &mut self.session, &self.settings);
    }

    /// Stop the recording: freeze the transcript and hand back the payload
    /// for the external assessment collaborator.
    pub fn stop_recording(&mut self) -> AssessmentRequest {
        self.session.finalize();
        info!(
            "Recording stopped for session {}. Final score: {}",
            self.session.session_id(),
            self.session.score()
        );
        AssessmentRequest::from_session(&self.session)
    }

    /// Current metrics for the rendering layer.
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &CoachingSession {
        &self.session
    }

    pub fn script_tokens(&self) -> &ScriptTokens {
        &self.script
    }

    pub fn settings(&self) -> &CoachSettings {
        &self.settings
    }
}
