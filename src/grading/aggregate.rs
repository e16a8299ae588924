use crate::grading::grade::letter;
use crate::grading::types::{Category, CategorySummary, GradeEntry, GradeReport, OverallSummary};
use crate::grading::utility::average_score;
use chrono::Utc;
use tracing::warn;

/// Percent weights applied to each category average in the final grade.
/// The three weights sum to 100.
static WEIGHTS: &[(Category, i64)] = &[
    (Category::Assignment, 30),
    (Category::Exam, 40),
    (Category::Essay, 30),
];

/// Collects graded entries per category and combines them into a single
/// weighted course grade.
///
/// Entries accumulate in insertion order and are never removed or edited.
#[derive(Debug, Default)]
pub struct GradeAggregator {
    assignments: Vec<GradeEntry>,
    exams: Vec<GradeEntry>,
    essays: Vec<GradeEntry>,
}

impl GradeAggregator {
    /// Creates an aggregator with no recorded grades.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a graded item under the category named by `category`.
    ///
    /// A label outside the three valid categories drops the grade: nothing
    /// is stored and no error is reported to the caller. Names and scores
    /// are stored as given, without validation.
    pub fn add_grade(&mut self, name: &str, score: i64, category: &str) {
        let Some(category) = Category::parse(category) else {
            warn!(name, category, "Dropping grade with unknown category");
            return;
        };

        self.entries_mut(category).push(GradeEntry {
            name: name.to_string(),
            score,
            category,
        });
    }

    /// All entries recorded under `category`, in insertion order.
    pub fn entries(&self, category: Category) -> &[GradeEntry] {
        match category {
            Category::Assignment => &self.assignments,
            Category::Exam => &self.exams,
            Category::Essay => &self.essays,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<GradeEntry> {
        match category {
            Category::Assignment => &mut self.assignments,
            Category::Exam => &mut self.exams,
            Category::Essay => &mut self.essays,
        }
    }

    /// Weighted numerical grade over the three category averages.
    ///
    /// Each category average is scaled by its percent weight and the sum is
    /// divided by 100 with truncating integer division, consistent with the
    /// truncation in [`average_score`]. A category with no entries still
    /// contributes an average of 0 at its full weight.
    pub fn numerical_grade(&self) -> i64 {
        let weighted: i64 = WEIGHTS
            .iter()
            .map(|&(category, weight)| average_score(self.entries(category)) * weight)
            .sum();

        weighted / 100
    }

    /// Letter grade for the entries recorded so far.
    ///
    /// Always produces a grade; an aggregator with no entries grades as
    /// `"F"`.
    pub fn final_grade(&self) -> String {
        letter(self.numerical_grade())
    }

    /// Builds a serializable summary of the aggregator's current standing:
    /// per-category counts and averages plus the overall weighted score and
    /// letter grade.
    pub fn report(&self) -> GradeReport {
        let categories = WEIGHTS
            .iter()
            .map(|&(category, weight)| CategorySummary {
                category,
                entries: self.entries(category).len(),
                average: average_score(self.entries(category)),
                weight,
            })
            .collect();

        let score = self.numerical_grade();

        GradeReport {
            generated_at: Utc::now(),
            categories,
            overall: OverallSummary {
                score,
                grade: letter(score),
            },
        }
    }
}
