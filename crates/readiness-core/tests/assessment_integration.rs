//! Integration tests for a full assessment session.

use proptest::prelude::*;
use readiness_core::assessment::{apply_answer, ANSWER_LABELS};
use readiness_core::{
    AnswerValue, AssessmentError, AssessmentEvent, Category, CoreError, QuestionBank,
    ScoreSheet, SessionPhase, SessionState,
};

fn run_all(session: &mut SessionState, label: &str) {
    session.start();
    while session.current_question().is_some() {
        session.submit_answer(label).unwrap();
    }
}

#[test]
fn test_all_strongly_agree_totals() {
    let mut session = SessionState::default();
    run_all(&mut session, "Strongly Agree");

    let scores = session.final_scores().unwrap();
    assert_eq!(scores[Category::Strategy], 14);
    assert_eq!(scores[Category::Execution], 16);
    assert_eq!(scores[Category::Culture], 16);
    assert_eq!(scores[Category::Data], 14);
}

#[test]
fn test_all_strongly_disagree_mirrors_agree() {
    let mut session = SessionState::default();
    run_all(&mut session, "Strongly Disagree");

    let scores = session.final_scores().unwrap();
    assert_eq!(scores[Category::Strategy], -14);
    assert_eq!(scores[Category::Execution], -16);
    assert_eq!(scores[Category::Culture], -16);
    assert_eq!(scores[Category::Data], -14);

    let insights = session.insights().unwrap();
    assert_eq!(insights.top, Category::Strategy);
    assert_eq!(insights.bottom, Category::Execution);
}

#[test]
fn test_complete_only_after_nine_answers() {
    let mut session = SessionState::default();
    session.start();
    for answered in 0..QuestionBank::len() {
        assert!(!session.is_complete(), "complete after {answered} answers");
        assert!(matches!(
            session.final_scores(),
            Err(AssessmentError::PrematureAccess { .. })
        ));
        session.submit_answer("Agree").unwrap();
    }
    assert!(session.is_complete());
    assert_eq!(session.phase(), SessionPhase::Complete);
}

#[test]
fn test_restart_then_results_are_premature() {
    let mut session = SessionState::default();
    run_all(&mut session, "Agree");
    assert!(session.final_scores().is_ok());

    let event = session.restart();
    assert!(matches!(event, AssessmentEvent::AssessmentRestarted { .. }));
    assert_eq!(session.phase(), SessionPhase::NotStarted);
    assert_eq!(
        session.final_scores().unwrap_err(),
        AssessmentError::PrematureAccess {
            operation: "final scores",
            phase: SessionPhase::NotStarted,
        }
    );
    assert!(session.insights().is_err());
    assert!(matches!(
        session.export_report(),
        Err(CoreError::Assessment(AssessmentError::PrematureAccess { .. }))
    ));
}

#[test]
fn test_last_answer_reports_completion() {
    let mut session = SessionState::default();
    session.start();
    let mut last = None;
    while session.current_question().is_some() {
        last = Some(session.submit_answer("Neutral").unwrap());
    }
    match last {
        Some(AssessmentEvent::AnswerRecorded {
            question_index,
            completed,
            ..
        }) => {
            assert_eq!(question_index, 8);
            assert!(completed);
        }
        other => panic!("unexpected final event {other:?}"),
    }
}

#[test]
fn test_report_export_is_deterministic_per_session() {
    let mut a = SessionState::default();
    let mut b = SessionState::default();
    run_all(&mut a, "Agree");
    run_all(&mut b, "Agree");
    let first = a.export_report().unwrap();
    assert_eq!(first, a.export_report().unwrap());
    assert_eq!(first, b.export_report().unwrap());
    assert!(first.starts_with(b"%PDF-"));
}

#[test]
fn test_sessions_are_independent() {
    let mut a = SessionState::default();
    let mut b = SessionState::default();
    a.start();
    b.start();
    a.submit_answer("Strongly Agree").unwrap();
    assert_eq!(a.current_index(), 1);
    assert_eq!(b.current_index(), 0);
}

fn answer_strategy() -> impl Strategy<Value = AnswerValue> {
    (1i64..=5).prop_map(|v| AnswerValue::new(v).unwrap())
}

fn score_sheet_strategy() -> impl Strategy<Value = ScoreSheet> {
    prop::array::uniform4(-40i32..=40)
        .prop_map(|values| Category::ALL.into_iter().zip(values).collect())
}

proptest! {
    #[test]
    fn prop_neutral_is_noop(scores in score_sheet_strategy(), index in 0usize..9) {
        let question = &QuestionBank::load()[index];
        let next = apply_answer(&scores, question, AnswerValue::NEUTRAL);
        prop_assert_eq!(next, scores);
    }

    #[test]
    fn prop_extremes_move_by_twice_weight(scores in score_sheet_strategy(), index in 0usize..9) {
        let question = &QuestionBank::load()[index];
        let up = apply_answer(&scores, question, AnswerValue::STRONGLY_AGREE);
        let down = apply_answer(&scores, question, AnswerValue::STRONGLY_DISAGREE);
        for category in Category::ALL {
            prop_assert_eq!(up[category] - scores[category], 2 * question.weight(category));
            prop_assert_eq!(down[category] - scores[category], -2 * question.weight(category));
        }
    }

    #[test]
    fn prop_invalid_label_leaves_session_unchanged(
        answers in prop::collection::vec(answer_strategy(), 0..9),
        label in "[A-Za-z0-9 -]{0,20}",
    ) {
        prop_assume!(!ANSWER_LABELS.contains(&label.as_str()));
        let mut session = SessionState::default();
        session.start();
        for answer in &answers {
            session.submit(*answer).unwrap();
        }
        let index = session.current_index();
        let before = serde_json::to_string(&session).unwrap();

        let err = session.submit_answer(&label).unwrap_err();
        prop_assert_eq!(err, AssessmentError::InvalidAnswerLabel { label: label.clone() });
        prop_assert_eq!(session.current_index(), index);
        prop_assert_eq!(serde_json::to_string(&session).unwrap(), before);
    }

    #[test]
    fn prop_complete_iff_nine_answers(answers in prop::collection::vec(answer_strategy(), 0..=9)) {
        let mut session = SessionState::default();
        session.start();
        for answer in &answers {
            session.submit(*answer).unwrap();
        }
        prop_assert_eq!(session.is_complete(), answers.len() == 9);
    }
}
