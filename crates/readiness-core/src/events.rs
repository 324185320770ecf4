use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::{AnswerValue, ScoreSheet};

/// Every state change of an assessment session produces an Event.
/// The presentation host renders or logs them as it sees fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssessmentEvent {
    AssessmentStarted {
        total_questions: usize,
        at: DateTime<Utc>,
    },
    AnswerRecorded {
        question_index: usize,
        answer: AnswerValue,
        /// Per-category change caused by this answer.
        deltas: ScoreSheet,
        /// True when this answer finished the questionnaire.
        completed: bool,
        at: DateTime<Utc>,
    },
    AssessmentRestarted {
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = AssessmentEvent::AssessmentStarted {
            total_questions: 9,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "AssessmentStarted");
        assert_eq!(json["total_questions"], 9);
    }
}
