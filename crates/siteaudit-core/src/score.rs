//! Score presentation helpers
//!
//! Both mappings are total over `i64` and share the same two thresholds.

/// Scores at or above this are "Good".
pub const GOOD_THRESHOLD: i64 = 80;
/// Scores at or above this (and below [`GOOD_THRESHOLD`]) "Need Work".
pub const NEEDS_WORK_THRESHOLD: i64 = 60;

/// Display tone for a score; front ends map it to a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTone {
    Positive,
    Neutral,
    Negative,
}

/// Qualitative label for a score
pub fn score_label(score: i64) -> &'static str {
    match score_tone(score) {
        ScoreTone::Positive => "Good",
        ScoreTone::Neutral => "Needs Work",
        ScoreTone::Negative => "Poor",
    }
}

/// Tone for a score
pub fn score_tone(score: i64) -> ScoreTone {
    if score >= GOOD_THRESHOLD {
        ScoreTone::Positive
    } else if score >= NEEDS_WORK_THRESHOLD {
        ScoreTone::Neutral
    } else {
        ScoreTone::Negative
    }
}
