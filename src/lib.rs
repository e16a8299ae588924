//! Weighted course grade calculation.
//!
//! Collects named, scored entries under three fixed categories
//! (assignments, exams, essays), averages each category, combines the
//! averages into a single weighted grade, and maps it to a letter grade.

pub mod grading;
pub mod output;
