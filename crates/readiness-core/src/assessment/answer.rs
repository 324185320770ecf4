//! Five-point Likert answers.
//!
//! An [`AnswerValue`] can only be built from one of the five fixed labels or
//! from an integer in `1..=5`, so everything downstream can treat it as valid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AssessmentError;

/// The five fixed answer labels, ordered from 1 to 5.
pub const ANSWER_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Value of the neutral midpoint; it contributes nothing to any score.
pub const NEUTRAL: u8 = 3;

/// A validated Likert response in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const STRONGLY_DISAGREE: AnswerValue = AnswerValue(1);
    pub const DISAGREE: AnswerValue = AnswerValue(2);
    pub const NEUTRAL: AnswerValue = AnswerValue(NEUTRAL);
    pub const AGREE: AnswerValue = AnswerValue(4);
    pub const STRONGLY_AGREE: AnswerValue = AnswerValue(5);

    /// Build from a numeric value.
    pub fn new(value: i64) -> Result<Self, AssessmentError> {
        match value {
            1..=5 => Ok(AnswerValue(value as u8)),
            _ => Err(AssessmentError::InvalidAnswerValue { value }),
        }
    }

    /// Build from one of the five fixed labels. Matching is exact.
    pub fn from_label(label: &str) -> Result<Self, AssessmentError> {
        ANSWER_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| AnswerValue(i as u8 + 1))
            .ok_or_else(|| AssessmentError::InvalidAnswerLabel {
                label: label.to_string(),
            })
    }

    /// All five answers in ascending order.
    pub fn all() -> impl Iterator<Item = AnswerValue> {
        (1..=5).map(AnswerValue)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        ANSWER_LABELS[usize::from(self.0 - 1)]
    }

    /// Option text as presented to the respondent, e.g. `"4 - Agree"`.
    pub fn option_text(&self) -> String {
        format!("{} - {}", self.0, self.label())
    }

    /// Signed distance from the neutral midpoint (-2..=2).
    pub fn offset(&self) -> i32 {
        i32::from(self.0) - i32::from(NEUTRAL)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = AssessmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AnswerValue::new(i64::from(value))
    }
}

impl From<AnswerValue> for u8 {
    fn from(answer: AnswerValue) -> Self {
        answer.0
    }
}
