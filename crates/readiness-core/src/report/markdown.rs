use std::fmt::Write;

use super::{DocumentRenderer, ReportDocument, SCORES_HEADING};
use crate::error::ReportError;

/// Renders reports as CommonMark text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, ReportError> {
        let mut out = String::new();
        writeln!(out, "# {}", document.title)?;

        for section in &document.sections {
            if let Some(heading) = &section.heading {
                write!(out, "\n## {heading}\n")?;
            }
            // Score lines read best as a list.
            let as_list = section.heading.as_deref() == Some(SCORES_HEADING);
            for paragraph in &section.paragraphs {
                if as_list {
                    writeln!(out, "- {paragraph}")?;
                } else {
                    // Single newlines inside a paragraph are kept as hard breaks.
                    write!(out, "\n{}\n", paragraph.replace('\n', "  \n"))?;
                }
            }
        }

        Ok(out.into_bytes())
    }
}
