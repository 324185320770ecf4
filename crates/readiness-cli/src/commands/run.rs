//! Interactive terminal session.
//!
//! The host owns one [`SessionState`] and drives it line by line: the welcome
//! screen, one question at a time, then results with an optional report
//! download. `restart` and `quit` are accepted at every prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use readiness_core::flavor::{REFLECTION_PROMPT, WELCOME_TEXT, WELCOME_TITLE};
use readiness_core::{AnswerValue, Config, CoreError, FlavorText, ScoreSheet, SessionState};

use super::parse_answer;

/// Widest bar drawn in the results chart.
const CHART_WIDTH: usize = 30;

#[derive(Args)]
pub struct RunArgs {
    /// Seed for the fallback quote RNG
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the report here once the assessment is complete
    #[arg(long)]
    pub report: Option<PathBuf>,
    /// Hide quotes and snippets
    #[arg(long)]
    pub no_flavor: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut host = TerminalHost::new(&config, &args, stdin.lock(), stdout.lock());
    host.run()
}

/// What the respondent typed at a prompt.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    Restart,
    Save(Option<PathBuf>),
    Answer(String),
    Empty,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "q" | "quit" | "exit" => Command::Quit,
            "restart" => Command::Restart,
            "save" => Command::Save(None),
            lower if lower.starts_with("save ") => {
                Command::Save(Some(PathBuf::from(line[5..].trim())))
            }
            _ => Command::Answer(line.to_string()),
        }
    }
}

enum Flow {
    Continue,
    Restart,
    Quit,
}

pub struct TerminalHost<R, W> {
    session: SessionState,
    flavor: FlavorText,
    show_quotes: bool,
    show_snippets: bool,
    report_path: Option<PathBuf>,
    default_report_name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(config: &Config, args: &RunArgs, input: R, output: W) -> Self {
        Self {
            session: SessionState::new(config.assessment_options()),
            flavor: FlavorText::from_seed(args.seed.or(config.flavor.seed)),
            show_quotes: config.flavor.show_quotes && !args.no_flavor,
            show_snippets: config.flavor.show_snippets && !args.no_flavor,
            report_path: args.report.clone(),
            default_report_name: config.report.file_name.clone(),
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            if !self.welcome()? {
                return Ok(());
            }
            self.session.start();

            match self.ask_questions()? {
                Flow::Quit => return Ok(()),
                Flow::Restart => {
                    self.session.restart();
                    continue;
                }
                Flow::Continue => {}
            }

            match self.results()? {
                Flow::Restart => {
                    self.session.restart();
                }
                Flow::Quit | Flow::Continue => return Ok(()),
            }
        }
    }

    /// Returns false when the respondent leaves before starting.
    fn welcome(&mut self) -> Result<bool, Box<dyn std::error::Error>> {
        writeln!(self.output, "# {WELCOME_TITLE}\n")?;
        writeln!(self.output, "{}\n", WELCOME_TEXT.replace('\n', " "))?;
        write!(self.output, "Press Enter to begin the assessment (or type 'quit'): ")?;
        self.output.flush()?;

        Ok(match self.read_command()? {
            None | Some(Command::Quit) => false,
            Some(_) => true,
        })
    }

    fn ask_questions(&mut self) -> Result<Flow, Box<dyn std::error::Error>> {
        while let Some(question) = self.session.current_question() {
            let prompt = question.prompt.clone();
            let index = self.session.current_index();
            let total = self.session.progress().total;

            writeln!(self.output)?;
            if self.show_quotes {
                writeln!(self.output, "> {}", self.flavor.quote_for(index))?;
                writeln!(self.output)?;
            }
            writeln!(self.output, "Question {} of {total}", index + 1)?;
            writeln!(self.output, "{prompt}")?;
            writeln!(self.output, "{}", REFLECTION_PROMPT.replace('\n', " "))?;
            if self.show_snippets {
                if let Some(snippet) = self.flavor.snippet_for(index) {
                    writeln!(self.output, "* {snippet}")?;
                }
            }
            writeln!(self.output, "\nSelect your response:")?;
            for answer in AnswerValue::all() {
                writeln!(self.output, "  {}", answer.option_text())?;
            }

            loop {
                write!(self.output, "> ")?;
                self.output.flush()?;
                match self.read_command()? {
                    None | Some(Command::Quit) => return Ok(Flow::Quit),
                    Some(Command::Restart) => return Ok(Flow::Restart),
                    Some(Command::Answer(text)) => match parse_answer(&text) {
                        Ok(answer) => {
                            self.session.submit(answer)?;
                            break;
                        }
                        Err(err) => writeln!(self.output, "error: {err}")?,
                    },
                    Some(Command::Empty) | Some(Command::Save(_)) => {
                        writeln!(self.output, "Enter a number from 1 to 5, 'restart' or 'quit'.")?;
                    }
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn results(&mut self) -> Result<Flow, Box<dyn std::error::Error>> {
        let scores = self.session.final_scores()?.clone();
        let insights = self.session.insights()?;

        writeln!(self.output, "\n## Assessment Completed!\n")?;
        writeln!(self.output, "Overall Assessment Snapshot")?;
        write!(self.output, "{}", render_bar_chart(&scores))?;
        writeln!(self.output, "\n### Comprehensive Insights and Recommendations:\n")?;
        writeln!(self.output, "{}", insights.to_text())?;

        let export_enabled = self.session.options().report_export_enabled;
        if let Some(path) = self.report_path.take() {
            self.save_report(path)?;
        }

        loop {
            if export_enabled {
                write!(
                    self.output,
                    "\nType 'save [PATH]' to download the report, 'restart' to begin again, or 'quit': "
                )?;
            } else {
                write!(self.output, "\nType 'restart' to begin again, or 'quit': ")?;
            }
            self.output.flush()?;

            match self.read_command()? {
                None | Some(Command::Quit) => return Ok(Flow::Quit),
                Some(Command::Restart) => return Ok(Flow::Restart),
                Some(Command::Save(path)) => {
                    let path = path.unwrap_or_else(|| self.default_report_path());
                    self.save_report(path)?;
                }
                Some(_) if export_enabled => {
                    writeln!(self.output, "Enter 'save [PATH]', 'restart' or 'quit'.")?;
                }
                Some(_) => writeln!(self.output, "Enter 'restart' or 'quit'.")?,
            }
        }
    }

    /// Export and write the report. Failures are shown and the prompt stays open.
    fn save_report(&mut self, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let written = match self.session.export_report() {
            Ok(bytes) => std::fs::write(&path, bytes).map_err(CoreError::from),
            Err(err) => Err(err),
        };
        match written {
            Ok(()) => writeln!(self.output, "Report saved to {}", path.display())?,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "report not saved");
                writeln!(self.output, "error: {err}")?;
            }
        }
        Ok(())
    }

    fn default_report_path(&self) -> PathBuf {
        let extension = self.session.options().report.format.extension();
        PathBuf::from(format!("{}.{extension}", self.default_report_name))
    }

    /// Next line as a command, `None` at end of input.
    fn read_command(&mut self) -> io::Result<Option<Command>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(Command::parse(&line)))
    }
}

/// Horizontal bar per category, scaled to the largest magnitude.
/// Negative scores are drawn with `-`.
pub fn render_bar_chart(scores: &ScoreSheet) -> String {
    let max = scores.iter().map(|(_, s)| s.unsigned_abs()).max().unwrap_or(0);
    let mut out = String::new();
    for (category, score) in scores.iter() {
        let len = if max == 0 {
            0
        } else {
            (score.unsigned_abs() as usize * CHART_WIDTH).div_ceil(max as usize)
        };
        let glyph = if score < 0 { "-" } else { "#" };
        out.push_str(&format!("  {category:<10} {:>4} {}\n", score, glyph.repeat(len)));
    }
    out
}
