mod answer;
mod category;
mod question_bank;
mod scoring;
mod session;

pub use answer::{AnswerValue, ANSWER_LABELS, NEUTRAL};
pub use category::Category;
pub use question_bank::{Question, QuestionBank, WeightMap};
pub use scoring::{answer_deltas, apply_answer, ScoreSheet};
pub use session::{AssessmentOptions, Progress, SessionPhase, SessionState};
