use serde::{Deserialize, Serialize};

/// Coverage percentage in [0, 100].
///
/// `covered` is the number of distinct script words confirmed spoken;
/// `total` is the denominator chosen by the scoring mode (raw token count by
/// default, distinct count in symmetric mode). A script with zero tokens
/// yields 0 rather than a division fault.
pub fn compute_score(covered: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (covered as f64 / total as f64) * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}

/// Audience engagement tier derived from the score. Display-only; the
/// thresholds are fixed and the level carries no state of its own.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Captivated,
    Engaged,
    Attentive,
    Waiting,
}

impl EngagementLevel {
    /// Pure function of the score, recomputed from scratch on every call.
    /// No hysteresis: nothing prevents the level from oscillating if the
    /// score ever moved near a boundary.
    pub fn for_score(score: u8) -> Self {
        if score >= 90 {
            EngagementLevel::Captivated
        } else if score >= 75 {
            EngagementLevel::Engaged
        } else if score >= 60 {
            EngagementLevel::Attentive
        } else {
            EngagementLevel::Waiting
        }
    }

    /// Label shown by the audience meter in the UI.
    pub fn label(self) -> &'static str {
        match self {
            EngagementLevel::Captivated => "\u{1f525} Captivated",
            EngagementLevel::Engaged => "\u{1f44f} Engaged",
            EngagementLevel::Attentive => "\u{1f440} Attentive",
            EngagementLevel::Waiting => "\u{1f610} Waiting",
        }
    }
}

impl Default for EngagementLevel {
    fn default() -> Self {
        EngagementLevel::Waiting
    }
}
