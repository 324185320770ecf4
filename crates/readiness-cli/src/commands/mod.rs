pub mod config;
pub mod questions;
pub mod report;
pub mod run;
pub mod score;

use readiness_core::{AnswerValue, AssessmentError, AssessmentEvent, QuestionBank, SessionState};

/// Parse a command-line answer: a number `1`-`5` or one of the five labels.
pub fn parse_answer(input: &str) -> Result<AnswerValue, AssessmentError> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(value) => AnswerValue::new(value),
        Err(_) => AnswerValue::from_label(input),
    }
}

/// Run a fresh session through every question with `answers`, returning it
/// together with the events it produced.
pub fn complete_session(
    mut session: SessionState,
    answers: &[String],
) -> Result<(SessionState, Vec<AssessmentEvent>), Box<dyn std::error::Error>> {
    if answers.len() != QuestionBank::len() {
        return Err(format!(
            "expected {} answers, got {}",
            QuestionBank::len(),
            answers.len()
        )
        .into());
    }

    let mut events = vec![session.start()];
    for raw in answers {
        let answer = parse_answer(raw)?;
        events.push(session.submit(answer)?);
    }
    Ok((session, events))
}
