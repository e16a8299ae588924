use crate::grading::types::GradeEntry;

/// Computes the truncating integer average of the entry scores.
/// Returns 0 for empty input.
pub fn average_score(entries: &[GradeEntry]) -> i64 {
    if entries.is_empty() {
        return 0;
    }
    entries.iter().map(|e| e.score).sum::<i64>() / entries.len() as i64
}
