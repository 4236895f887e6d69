use crate::score::compute_score;
use crate::script::{clean_word, ScriptTokens};
use crate::session::CoachingSession;
use crate::settings::CoachSettings;
use log::debug;

/// Spoken words of this length or shorter never count as mistakes, so short
/// connector words ("a", "the", "and") don't flood the mistake list.
const MISTAKE_MIN_CHARS: usize = 3;

/// Reconcile one finalized recognizer fragment against the script.
///
/// Matching is bag-of-words: a spoken word is covered if it appears anywhere
/// in the script, regardless of position or order. This is deliberate; do not
/// upgrade it to positional alignment without flagging the behavior change.
/// Words that match nothing and exceed the length threshold are recorded as
/// mistakes (the lowercased word as spoken, punctuation intact). The score
/// and engagement level are recomputed after the whole fragment is processed.
pub fn match_fragment(
    fragment: &str,
    script: &ScriptTokens,
    session: &mut CoachingSession,
    settings: &CoachSettings,
) {
    let mut newly_covered = 0usize;

    for raw in fragment.to_lowercase().split_whitespace() {
        let clean = clean_word(raw);
        if clean.is_empty() {
            continue;
        }

        if script.contains(&clean) {
            if session.mark_covered(&clean) {
                newly_covered += 1;
            }
        } else if clean.chars().count() > MISTAKE_MIN_CHARS {
            session.add_mistake(raw);
        }
    }

    let denominator = if settings.symmetric_scoring {
        script.distinct_word_count()
    } else {
        script.total_word_count()
    };
    session.set_score(compute_score(session.covered_count(), denominator));

    debug!(
        "Matched fragment: {} newly covered, {} mistakes total, score {}",
        newly_covered,
        session.mistakes().len(),
        session.score()
    );
}
