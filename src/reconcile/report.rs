//! Reconciliation result type and text formatting.

use serde::Serialize;
use std::fmt;

use crate::shape::Shape;

/// The three-way grading partition of a reconciliation call.
///
/// `correct` and `incorrect` are drawn from the submitted shapes,
/// `missing` from the reference shapes. Downstream feedback rendering
/// color-codes them (typically green / red / yellow).
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReconciliationResult {
    /// Submitted shapes that matched a reference shape.
    pub correct: Vec<Shape>,
    /// Submitted shapes no reference shape accepts.
    pub incorrect: Vec<Shape>,
    /// Reference shapes no submitted shape accounts for.
    pub missing: Vec<Shape>,
}

impl ReconciliationResult {
    /// Returns the number of correct shapes.
    pub fn correct_count(&self) -> usize {
        self.correct.len()
    }

    /// Returns the number of incorrect shapes.
    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }

    /// Returns the number of missing shapes.
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// True when nothing was wrong or missed.
    pub fn is_perfect(&self) -> bool {
        self.incorrect.is_empty() && self.missing.is_empty()
    }
}

impl fmt::Display for ReconciliationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Correct:   {} shape(s)",
            self.correct_count()
        )?;
        writeln!(f, "Incorrect: {} shape(s)", self.incorrect_count())?;
        writeln!(f, "Missing:   {} shape(s)", self.missing_count())?;

        if !self.incorrect.is_empty() {
            writeln!(f)?;
            writeln!(f, "Incorrect shapes:")?;
            for shape in &self.incorrect {
                writeln!(f, "  - {}", shape)?;
            }
        }

        if !self.missing.is_empty() {
            writeln!(f)?;
            writeln!(f, "Missing shapes:")?;
            for shape in &self.missing {
                writeln!(f, "  - {}", shape)?;
            }
        }

        Ok(())
    }
}
