use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed filler vocabulary. Each entry is matched as a whole word (or whole
/// phrase) against the full fragment, independently of the others: overlapping
/// constructs are not canonicalized, so "you know so" counts once for
/// "you know" and once for "so".
pub const DEFAULT_FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "ah",
    "er",
    "like",
    "you know",
    "so",
    "basically",
];

static DEFAULT_FILLER_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    DEFAULT_FILLER_WORDS
        .iter()
        .map(|term| (*term, compile_filler_pattern(term).unwrap()))
        .collect()
});

fn compile_filler_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
}

/// A single filler occurrence, with byte offsets into the original fragment
/// so the UI can highlight it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerWordMatch {
    pub word: String,
    pub start_index: usize,
    pub end_index: usize,
}

/// Count of how many times a specific filler term was used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerWordCount {
    pub word: String,
    pub count: usize,
}

/// Analysis result for one fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerAnalysis {
    /// All matches found, sorted by position.
    pub matches: Vec<FillerWordMatch>,
    /// Total word count in the fragment.
    pub total_words: usize,
    /// Number of filler occurrences detected (sum over all terms).
    pub filler_count: usize,
    /// Percentage of words that were fillers (0.0 - 100.0).
    pub filler_percentage: f32,
    /// Per-term usage, sorted by count descending.
    pub filler_breakdown: Vec<FillerWordCount>,
}

/// Detect filler words in a finalized fragment.
///
/// Each vocabulary term is scanned independently over the whole fragment with
/// word-boundary semantics ("ah" never matches inside "that") and the counts
/// are summed. `custom_fillers` are user-configured terms checked in addition
/// to the defaults.
pub fn detect_filler_words(text: &str, custom_fillers: Option<&[String]>) -> FillerAnalysis {
    let mut matches: Vec<FillerWordMatch> = Vec::new();

    for (term, pattern) in DEFAULT_FILLER_PATTERNS.iter() {
        scan_term(text, term, pattern, &mut matches);
    }

    if let Some(custom) = custom_fillers {
        for term in custom {
            match compile_filler_pattern(term) {
                Ok(pattern) => scan_term(text, term, &pattern, &mut matches),
                Err(e) => {
                    log::warn!("Skipping custom filler term '{}': {}", term, e);
                }
            }
        }
    }

    matches.sort_by(|a, b| a.start_index.cmp(&b.start_index));

    let total_words = text.split_whitespace().count();
    let filler_count = matches.len();
    let filler_percentage = if total_words > 0 {
        (filler_count as f32 / total_words as f32) * 100.0
    } else {
        0.0
    };
    let filler_breakdown = build_breakdown(&matches);

    FillerAnalysis {
        matches,
        total_words,
        filler_count,
        filler_percentage,
        filler_breakdown,
    }
}

fn scan_term(text: &str, term: &str, pattern: &Regex, matches: &mut Vec<FillerWordMatch>) {
    for m in pattern.find_iter(text) {
        matches.push(FillerWordMatch {
            word: term.to_lowercase(),
            start_index: m.start(),
            end_index: m.end(),
        });
    }
}

fn build_breakdown(matches: &[FillerWordMatch]) -> Vec<FillerWordCount> {
    use std::collections::HashMap;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for m in matches {
        *counts.entry(m.word.clone()).or_insert(0) += 1;
    }

    let mut breakdown: Vec<FillerWordCount> = counts
        .into_iter()
        .map(|(word, count)| FillerWordCount { word, count })
        .collect();
    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then(a.word.cmp(&b.word)));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_filler_detection() {
        let analysis = detect_filler_words("Um, so basically this is, like, great", None);

        // One per whole-word match; "great" contributes nothing.
        assert_eq!(analysis.filler_count, 4);
        assert!(analysis.matches.iter().any(|m| m.word == "um"));
        assert!(analysis.matches.iter().any(|m| m.word == "so"));
        assert!(analysis.matches.iter().any(|m| m.word == "basically"));
        assert!(analysis.matches.iter().any(|m| m.word == "like"));
    }

    #[test]
    fn test_no_partial_word_matches() {
        let analysis = detect_filler_words("that brother pressure", None);
        assert_eq!(analysis.filler_count, 0);
    }

    #[test]
    fn test_overlapping_terms_both_counted() {
        // "you know" and the trailing "so" are counted independently.
        let analysis = detect_filler_words("you know so", None);
        assert_eq!(analysis.filler_count, 2);
    }

    #[test]
    fn test_case_insensitive() {
        let analysis = detect_filler_words("UM uh Er", None);
        assert_eq!(analysis.filler_count, 3);
    }

    #[test]
    fn test_custom_fillers() {
        let custom = vec!["dude".to_string()];
        let analysis = detect_filler_words("so basically dude I was thinking", Some(&custom));
        assert!(analysis.matches.iter().any(|m| m.word == "dude"));
        assert_eq!(analysis.filler_count, 3);
    }

    #[test]
    fn test_breakdown() {
        let analysis = detect_filler_words("um like um like um", None);
        assert_eq!(analysis.filler_breakdown.len(), 2);
        let um = analysis
            .filler_breakdown
            .iter()
            .find(|b| b.word == "um")
            .map(|b| b.count)
            .unwrap_or(0);
        assert_eq!(um, 3);
    }

    #[test]
    fn test_empty_fragment() {
        let analysis = detect_filler_words("", None);
        assert_eq!(analysis.filler_count, 0);
        assert_eq!(analysis.total_words, 0);
        assert_eq!(analysis.filler_percentage, 0.0);
    }

    #[test]
    fn test_match_positions() {
        let analysis = detect_filler_words("well um yes", None);
        assert_eq!(analysis.matches.len(), 1);
        assert_eq!(analysis.matches[0].start_index, 5);
        assert_eq!(analysis.matches[0].end_index, 7);
    }
}
