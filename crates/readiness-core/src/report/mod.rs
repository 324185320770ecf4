//! Exportable assessment report.
//!
//! A [`ReportDocument`] is assembled from the final scores and the insights
//! text, then handed to a [`DocumentRenderer`] for the configured
//! [`ReportFormat`]. Rendering is pure: no clock, no randomness, no I/O, so the
//! same inputs always produce the same bytes.
//!
//! The insights text is normalized on the way in: paragraphs are separated by
//! blank lines and blank paragraphs are dropped. The words and their order are
//! kept as given. The PDF renderer additionally collapses runs of spaces when
//! it wraps lines; single newlines inside a paragraph survive in both formats.

mod markdown;
mod pdf;

pub use markdown::MarkdownRenderer;
pub use pdf::PdfRenderer;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessment::ScoreSheet;
use crate::error::ReportError;

/// Default document title.
pub const DEFAULT_TITLE: &str = "AI & ML Readiness Assessment Report";

/// Fixed overview paragraph placed under the title.
pub const OVERVIEW: &str = indoc::indoc! {"
    This report summarizes how ready your organization is to adopt AI and
    machine learning. Each answer in the assessment moved one or more of four
    readiness dimensions: Strategy, Execution, Culture and Data. Use the
    insights below to identify gaps and to align your initiatives with
    long-term goals."};

/// Heading of the section holding the insights text.
pub const INSIGHTS_HEADING: &str = "Insights and Recommendations";

/// Heading of the per-category score listing.
pub const SCORES_HEADING: &str = "Score Summary";

/// Output format of an exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Markdown,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Markdown => "markdown",
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Markdown => "md",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Markdown => "text/markdown",
        }
    }

    fn renderer(&self) -> Box<dyn DocumentRenderer> {
        match self {
            ReportFormat::Pdf => Box::new(PdfRenderer::default()),
            ReportFormat::Markdown => Box::new(MarkdownRenderer),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Report settings supplied by the host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub title: String,
    pub format: ReportFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            format: ReportFormat::default(),
        }
    }
}

/// One titled block of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
}

/// Format-independent report content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl ReportDocument {
    /// Assemble the document: overview, score summary, then the insights
    /// text split into paragraphs on blank lines. Paragraphs that are empty
    /// or whitespace-only are skipped.
    pub fn build(title: &str, scores: &ScoreSheet, insights_text: &str) -> Self {
        let overview = ReportSection {
            heading: None,
            paragraphs: vec![OVERVIEW.replace('\n', " ")],
        };
        let summary = ReportSection {
            heading: Some(SCORES_HEADING.to_string()),
            paragraphs: scores
                .iter()
                .map(|(category, score)| format!("{category}: {score}"))
                .collect(),
        };
        let insights = ReportSection {
            heading: Some(INSIGHTS_HEADING.to_string()),
            paragraphs: insights_text
                .split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string)
                .collect(),
        };

        Self {
            title: title.to_string(),
            sections: vec![overview, summary, insights],
        }
    }
}

/// Turns a [`ReportDocument`] into bytes of a concrete format.
pub trait DocumentRenderer {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, ReportError>;
}

/// Builds report bytes from final scores and insights text.
#[derive(Debug, Clone, Default)]
pub struct ReportExporter {
    options: ReportOptions,
}

impl ReportExporter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    pub fn export(&self, scores: &ScoreSheet, insights_text: &str) -> Result<Vec<u8>, ReportError> {
        let document = ReportDocument::build(&self.options.title, scores, insights_text);
        let bytes = self.options.format.renderer().render(&document)?;
        tracing::info!(
            format = %self.options.format,
            bytes = bytes.len(),
            "exported assessment report"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Category;

    #[test]
    fn document_splits_insights_into_paragraphs() {
        let doc = ReportDocument::build("T", &ScoreSheet::new(), "first\nline\n\nsecond");
        let insights = &doc.sections[2];
        assert_eq!(insights.heading.as_deref(), Some(INSIGHTS_HEADING));
        assert_eq!(insights.paragraphs, vec!["first\nline", "second"]);
    }

    #[test]
    fn blank_paragraphs_are_dropped_but_text_is_kept() {
        let text = "one\n\n\n\n  \n\ntwo  words\nnext";
        let doc = ReportDocument::build("T", &ScoreSheet::new(), text);
        assert_eq!(doc.sections[2].paragraphs, vec!["one", "two  words\nnext"]);
    }

    #[test]
    fn empty_insights_gives_empty_section() {
        let doc = ReportDocument::build("T", &ScoreSheet::new(), "");
        assert_eq!(doc.sections.len(), 3);
        assert!(doc.sections[2].paragraphs.is_empty());
    }

    #[test]
    fn score_summary_follows_enumeration_order() {
        let scores: ScoreSheet = [(Category::Data, 4), (Category::Strategy, -2)]
            .into_iter()
            .collect();
        let doc = ReportDocument::build("T", &scores, "x");
        assert_eq!(
            doc.sections[1].paragraphs,
            vec!["Strategy: -2", "Execution: 0", "Culture: 0", "Data: 4"]
        );
    }

    #[test]
    fn format_parses_aliases() {
        assert_eq!("PDF".parse::<ReportFormat>().unwrap(), ReportFormat::Pdf);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert!("docx".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn export_is_deterministic() {
        let exporter = ReportExporter::default();
        let scores: ScoreSheet = [(Category::Culture, 6)].into_iter().collect();
        let a = exporter.export(&scores, "Highest Potential: Culture.").unwrap();
        let b = exporter.export(&scores, "Highest Potential: Culture.").unwrap();
        assert_eq!(a, b);
    }
}
