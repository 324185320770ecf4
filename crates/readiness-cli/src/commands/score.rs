use clap::Args;
use readiness_core::{Config, Insights, ScoreSheet, SessionState};
use serde::Serialize;

use super::complete_session;

#[derive(Args)]
pub struct ScoreArgs {
    /// One answer per question: 1-5 or a label such as "Strongly Agree"
    #[arg(required = true, num_args = 1..)]
    pub answers: Vec<String>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
    /// Print the session events as JSON lines instead
    #[arg(long, conflicts_with = "json")]
    pub events: bool,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    scores: &'a ScoreSheet,
    insights: &'a Insights,
    text: String,
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let (session, events) =
        complete_session(SessionState::new(config.assessment_options()), &args.answers)?;

    if args.events {
        for event in &events {
            println!("{}", serde_json::to_string(event)?);
        }
        return Ok(());
    }

    let scores = session.final_scores()?;
    let insights = session.insights()?;
    let text = insights.to_text();

    if args.json {
        let output = ScoreOutput {
            scores,
            insights: &insights,
            text,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (category, score) in scores.iter() {
        println!("{category:<10} {score:>4}");
    }
    println!();
    println!("{text}");
    Ok(())
}
