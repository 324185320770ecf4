use std::path::PathBuf;

use clap::Args;
use readiness_core::{Config, ReportFormat, SessionState};

use super::complete_session;

#[derive(Args)]
pub struct ReportArgs {
    /// One answer per question: 1-5 or a label such as "Strongly Agree"
    #[arg(required = true, num_args = 1..)]
    pub answers: Vec<String>,
    /// Output file (defaults to the configured file name in the current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Report format: pdf or markdown (defaults to the configured format)
    #[arg(long)]
    pub format: Option<String>,
}

pub fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut options = config.assessment_options();
    if let Some(format) = &args.format {
        options.report.format = format.parse::<ReportFormat>()?;
    }

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}.{}",
            config.report.file_name,
            options.report.format.extension()
        ))
    });

    let (session, _) = complete_session(SessionState::new(options), &args.answers)?;
    tracing::debug!(
        path = %path.display(),
        format = %session.options().report.format,
        "exporting report"
    );
    let bytes = session.export_report()?;
    std::fs::write(&path, &bytes)?;
    println!("report written: {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
