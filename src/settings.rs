use serde::{Deserialize, Serialize};

/// Recognition language offered by the session configuration. The external
/// recognizer host consumes the BCP-47 tag; the core only carries the choice.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionLanguage {
    English,
    French,
    German,
    Spanish,
}

impl RecognitionLanguage {
    pub fn bcp47(self) -> &'static str {
        match self {
            RecognitionLanguage::English => "en-US",
            RecognitionLanguage::French => "fr-FR",
            RecognitionLanguage::German => "de-DE",
            RecognitionLanguage::Spanish => "es-ES",
        }
    }
}

impl Default for RecognitionLanguage {
    fn default() -> Self {
        RecognitionLanguage::English
    }
}

/// Per-session coaching configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CoachSettings {
    /// Extra filler terms detected in addition to the built-in vocabulary.
    #[serde(default)]
    pub custom_filler_words: Vec<String>,
    /// When true the score denominator is the distinct script word count
    /// instead of the raw token count. Off by default: the historical scoring
    /// counts duplicate script words in the denominator while coverage is a
    /// set, so duplicate-heavy scripts cannot reach 100 by speaking each
    /// distinct word once.
    #[serde(default)]
    pub symmetric_scoring: bool,
    #[serde(default)]
    pub language: RecognitionLanguage,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            custom_filler_words: Vec::new(),
            symmetric_scoring: false,
            language: RecognitionLanguage::default(),
        }
    }
}
