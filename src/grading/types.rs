//! Data types used by the grading pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The three fixed categories a graded entry can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Assignment,
    Exam,
    Essay,
}

impl Category {
    /// Canonical lowercase label for the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Assignment => "assignment",
            Category::Exam => "exam",
            Category::Essay => "essay",
        }
    }

    /// Parses a category label. Anything other than the three canonical
    /// lowercase names yields `None`.
    pub fn parse(label: &str) -> Option<Category> {
        match label {
            "assignment" => Some(Category::Assignment),
            "exam" => Some(Category::Exam),
            "essay" => Some(Category::Essay),
            _ => None,
        }
    }

    /// Canonical lowercase name for `label`, or the empty string when the
    /// label is not a valid category.
    pub fn canonical(label: &str) -> &'static str {
        Category::parse(label).map_or("", Category::as_str)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named, scored entry recorded under one category.
///
/// Scores are taken as given; values outside 0–100 are not rejected.
#[derive(Debug, Clone)]
pub struct GradeEntry {
    pub name: String,
    pub score: i64,
    pub category: Category,
}

/// Aggregated statistics for a single grade category.
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub(crate) category: Category,
    pub(crate) entries: usize,
    pub(crate) average: i64,
    pub(crate) weight: i64,
}

/// Overall weighted score and letter grade.
#[derive(Debug, Serialize)]
pub struct OverallSummary {
    pub(crate) score: i64,
    pub(crate) grade: String,
}

/// Complete grading summary for one aggregator, rendered as JSON by
/// [`crate::output`].
#[derive(Debug, Serialize)]
pub struct GradeReport {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) categories: Vec<CategorySummary>,
    pub(crate) overall: OverallSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_labels() {
        assert_eq!(Category::Assignment.as_str(), "assignment");
        assert_eq!(Category::Exam.as_str(), "exam");
        assert_eq!(Category::Essay.as_str(), "essay");
    }

    #[test]
    fn test_parse_round_trips() {
        for category in [Category::Assignment, Category::Exam, Category::Essay] {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_canonical_rejects_unknown_labels() {
        assert_eq!(Category::canonical("assignment"), "assignment");
        assert_eq!(Category::canonical("exam"), "exam");
        assert_eq!(Category::canonical("essay"), "essay");

        assert_eq!(Category::canonical("quiz"), "");
        assert_eq!(Category::canonical("Exam"), "");
        assert_eq!(Category::canonical(""), "");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Category::Exam.to_string(), "exam");
    }
}
