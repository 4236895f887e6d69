//! Live transcript-matching and scoring core for the ConnectPro speech coach.
//!
//! The crate ingests finalized speech-recognition fragments, reconciles them
//! against a reference script, tracks coverage and mistakes, counts filler
//! words, and derives an audience engagement level. It performs no I/O:
//! audio capture, speech recognition, rendering and the assessment HTTP call
//! all live in the embedding host, which drives [`engine::CoachingEngine`]
//! one fragment at a time on a single logical thread.

pub mod assessment;
pub mod engine;
pub mod filler_detector;
pub mod matcher;
pub mod score;
pub mod script;
pub mod session;
pub mod settings;

pub use assessment::{AssessmentRequest, AudienceReactionRequest};
pub use engine::CoachingEngine;
pub use filler_detector::{detect_filler_words, FillerAnalysis, DEFAULT_FILLER_WORDS};
pub use matcher::match_fragment;
pub use score::{compute_score, EngagementLevel};
pub use script::ScriptTokens;
pub use session::{CoachingSession, MetricsSnapshot};
pub use settings::{CoachSettings, RecognitionLanguage};
