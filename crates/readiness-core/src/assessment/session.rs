//! Assessment session state machine.
//!
//! A session owns its question snapshot, cursor and scores. It never shares
//! state with other sessions; the presentation host keeps one value per user.
//!
//! ## State Transitions
//!
//! ```text
//! NotStarted -> InProgress -> Complete
//!      ^____________|____________|      (restart, from any state)
//! ```
//!
//! `Complete` is entered automatically when the last question is answered.
//! There is no way to go back or skip a question.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = SessionState::default();
//! session.start();
//! while let Some(question) = session.current_question() {
//!     session.submit_answer("Agree")?;
//! }
//! let text = session.insights()?.to_text();
//! ```

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::answer::AnswerValue;
use super::question_bank::{Question, QuestionBank};
use super::scoring::{answer_deltas, apply_answer, ScoreSheet};
use crate::error::{AssessmentError, Result};
use crate::events::AssessmentEvent;
use crate::insights::{InsightGenerator, Insights};
use crate::report::{ReportExporter, ReportOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Complete,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionPhase::NotStarted => "not started",
            SessionPhase::InProgress => "in progress",
            SessionPhase::Complete => "complete",
        })
    }
}

/// Host-supplied settings that survive a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentOptions {
    /// Whether `export_report` is available at all.
    pub report_export_enabled: bool,
    pub report: ReportOptions,
}

impl Default for AssessmentOptions {
    fn default() -> Self {
        Self {
            report_export_enabled: true,
            report: ReportOptions::default(),
        }
    }
}

/// How far through the questionnaire a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    /// 0.0 .. 100.0
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64 * 100.0
    }
}

/// One respondent's run through the questionnaire.
///
/// Deserialization checks the cursor invariants, so a restored session is
/// always one that the commands below could have produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct SessionState {
    started: bool,
    /// Snapshot of the question bank taken at start.
    questions: Vec<Question>,
    /// Cursor into `questions`; equal to its length once complete.
    current_index: usize,
    scores: ScoreSheet,
    /// Answer selected for the current question but not yet scored.
    pending_answer: Option<AnswerValue>,
    options: AssessmentOptions,
}

impl SessionState {
    pub fn new(options: AssessmentOptions) -> Self {
        Self {
            started: false,
            questions: Vec::new(),
            current_index: 0,
            scores: ScoreSheet::new(),
            pending_answer: None,
            options,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> SessionPhase {
        if !self.started {
            SessionPhase::NotStarted
        } else if self.current_index >= self.questions.len() {
            SessionPhase::Complete
        } else {
            SessionPhase::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == SessionPhase::Complete
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question awaiting an answer, or `None` before start and once complete.
    pub fn current_question(&self) -> Option<&Question> {
        if !self.started {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn pending_answer(&self) -> Option<AnswerValue> {
        self.pending_answer
    }

    pub fn options(&self) -> &AssessmentOptions {
        &self.options
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.current_index,
            total: if self.started {
                self.questions.len()
            } else {
                QuestionBank::len()
            },
        }
    }

    pub fn final_scores(&self) -> Result<&ScoreSheet, AssessmentError> {
        self.require_complete("final scores")?;
        Ok(&self.scores)
    }

    pub fn insights(&self) -> Result<Insights, AssessmentError> {
        self.require_complete("insights")?;
        Ok(InsightGenerator::generate(&self.scores))
    }

    /// Render the report in the configured format.
    pub fn export_report(&self) -> Result<Vec<u8>> {
        if !self.options.report_export_enabled {
            return Err(AssessmentError::ReportExportDisabled.into());
        }
        let insights = self.insights()?;
        let exporter = ReportExporter::new(self.options.report.clone());
        Ok(exporter.export(&self.scores, &insights.to_text())?)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// (Re)initialize at question 0 with zeroed scores.
    pub fn start(&mut self) -> AssessmentEvent {
        self.questions = QuestionBank::load();
        self.started = true;
        self.current_index = 0;
        self.scores = ScoreSheet::new();
        self.pending_answer = None;
        tracing::info!(total = self.questions.len(), "assessment started");
        AssessmentEvent::AssessmentStarted {
            total_questions: self.questions.len(),
            at: Utc::now(),
        }
    }

    /// Record `answer` as the selection for the current question.
    pub fn select(&mut self, answer: AnswerValue) -> Result<(), AssessmentError> {
        self.require_in_progress()?;
        self.pending_answer = Some(answer);
        Ok(())
    }

    /// Validate `label` and record it as the selection for the current question.
    pub fn select_answer(&mut self, label: &str) -> Result<AnswerValue, AssessmentError> {
        let answer = parse_label(label)?;
        self.select(answer)?;
        Ok(answer)
    }

    /// Score the selected answer and move to the next question.
    pub fn submit_selected(&mut self) -> Result<AssessmentEvent, AssessmentError> {
        self.require_in_progress()?;
        let answer = self.pending_answer.ok_or(AssessmentError::NoPendingAnswer)?;
        let question_index = self.current_index;
        let question = &self.questions[question_index];

        let deltas = answer_deltas(question, answer);
        self.scores = apply_answer(&self.scores, question, answer);
        self.current_index += 1;
        self.pending_answer = None;

        let completed = self.is_complete();
        tracing::debug!(
            question = question_index + 1,
            answer = answer.value(),
            "answer scored"
        );
        if completed {
            tracing::info!(scores = ?self.scores, "assessment complete");
        }

        Ok(AssessmentEvent::AnswerRecorded {
            question_index,
            answer,
            deltas,
            completed,
            at: Utc::now(),
        })
    }

    /// Select and score `answer` in one step.
    pub fn submit(&mut self, answer: AnswerValue) -> Result<AssessmentEvent, AssessmentError> {
        self.select(answer)?;
        self.submit_selected()
    }

    /// Validate `label`, then score it. On any error the session is unchanged.
    pub fn submit_answer(&mut self, label: &str) -> Result<AssessmentEvent, AssessmentError> {
        let answer = parse_label(label)?;
        self.submit(answer)
    }

    /// Discard everything and return to `NotStarted`. Options are kept.
    pub fn restart(&mut self) -> AssessmentEvent {
        *self = Self::new(self.options.clone());
        tracing::info!("assessment restarted");
        AssessmentEvent::AssessmentRestarted { at: Utc::now() }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn require_in_progress(&self) -> Result<(), AssessmentError> {
        match self.phase() {
            SessionPhase::InProgress => Ok(()),
            phase => Err(AssessmentError::NotInProgress { phase }),
        }
    }

    fn require_complete(&self, operation: &'static str) -> Result<(), AssessmentError> {
        match self.phase() {
            SessionPhase::Complete => Ok(()),
            phase => {
                tracing::warn!(operation, %phase, "result requested before completion");
                Err(AssessmentError::PrematureAccess { operation, phase })
            }
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(AssessmentOptions::default())
    }
}

/// Unchecked wire form of [`SessionState`].
#[derive(Deserialize)]
struct SessionSnapshot {
    started: bool,
    questions: Vec<Question>,
    current_index: usize,
    scores: ScoreSheet,
    pending_answer: Option<AnswerValue>,
    options: AssessmentOptions,
}

impl TryFrom<SessionSnapshot> for SessionState {
    type Error = String;

    fn try_from(snapshot: SessionSnapshot) -> std::result::Result<Self, Self::Error> {
        if snapshot.started {
            if snapshot.questions.is_empty() {
                return Err("started session has no questions".into());
            }
            if snapshot.current_index > snapshot.questions.len() {
                return Err(format!(
                    "current_index {} is past the last of {} questions",
                    snapshot.current_index,
                    snapshot.questions.len()
                ));
            }
            if snapshot.pending_answer.is_some()
                && snapshot.current_index == snapshot.questions.len()
            {
                return Err("completed session has a pending answer".into());
            }
        } else if !snapshot.questions.is_empty()
            || snapshot.current_index != 0
            || !snapshot.scores.is_zero()
            || snapshot.pending_answer.is_some()
        {
            return Err("session that has not started must be empty".into());
        }

        Ok(Self {
            started: snapshot.started,
            questions: snapshot.questions,
            current_index: snapshot.current_index,
            scores: snapshot.scores,
            pending_answer: snapshot.pending_answer,
            options: snapshot.options,
        })
    }
}

fn parse_label(label: &str) -> Result<AnswerValue, AssessmentError> {
    AnswerValue::from_label(label).inspect_err(|_| {
        tracing::warn!(label, "rejected answer label");
    })
}
