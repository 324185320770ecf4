//! # Readiness Core Library
//!
//! This library provides the business logic of the AI & ML readiness
//! assessment: a short Likert questionnaire whose answers are scored into four
//! weighted categories and summarized as narrative insights and an exportable
//! report. The CLI (and any other presentation host) is a thin layer over it.
//!
//! ## Architecture
//!
//! - **Assessment**: question bank, scoring and the per-respondent session
//!   state machine
//! - **Insights**: ranked narrative built from final scores
//! - **Report**: PDF/Markdown export of scores and insights
//! - **Flavor**: quotes and snippets with a seedable random fallback
//! - **Storage**: TOML-based host configuration
//!
//! ## Key Components
//!
//! - [`SessionState`]: one respondent's run through the questionnaire
//! - [`QuestionBank`]: the fixed nine questions
//! - [`InsightGenerator`]: top/bottom category narrative
//! - [`ReportExporter`]: document bytes for download
//! - [`Config`]: host configuration management

pub mod assessment;
pub mod error;
pub mod events;
pub mod flavor;
pub mod insights;
pub mod report;
pub mod storage;

pub use assessment::{
    AnswerValue, AssessmentOptions, Category, Progress, Question, QuestionBank, ScoreSheet,
    SessionPhase, SessionState,
};
pub use error::{AssessmentError, ConfigError, CoreError, ReportError};
pub use events::AssessmentEvent;
pub use flavor::FlavorText;
pub use insights::{InsightGenerator, Insights};
pub use report::{ReportExporter, ReportFormat, ReportOptions};
pub use storage::Config;
