//! Minimal PDF 1.4 writer for text-only reports.
//!
//! Layout is fixed: US Letter pages, one-inch margins, the standard Helvetica
//! fonts (no embedding) and WinAnsi text. Lines are word-wrapped by character
//! count and flowed onto as many pages as needed, each with a page footer.

use super::{DocumentRenderer, ReportDocument};
use crate::error::ReportError;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;
const FOOTER_Y: f32 = 40.0;
const PARAGRAPH_GAP: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Title,
    Heading,
    Body,
}

impl Style {
    fn font(&self) -> &'static str {
        match self {
            Style::Title | Style::Heading => "F2",
            Style::Body => "F1",
        }
    }

    fn size(&self) -> f32 {
        match self {
            Style::Title => 18.0,
            Style::Heading => 14.0,
            Style::Body => 11.0,
        }
    }

    fn leading(&self) -> f32 {
        self.size() * 1.4
    }
}

/// A positioned line of text.
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    style: Style,
    y: f32,
    text: String,
}

/// Renders reports as PDF.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    /// Maximum characters per body line.
    pub wrap_columns: usize,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self { wrap_columns: 85 }
    }
}

impl PdfRenderer {
    fn columns_for(&self, style: Style) -> usize {
        let scale = Style::Body.size() / style.size();
        ((self.wrap_columns as f32) * scale).max(10.0) as usize
    }

    /// Flow the document onto pages.
    fn layout(&self, document: &ReportDocument) -> Vec<Vec<PlacedLine>> {
        let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];
        let top = PAGE_HEIGHT - MARGIN;
        let mut y = top;

        let place = |style: Style, text: String, pages: &mut Vec<Vec<PlacedLine>>, y: &mut f32| {
            if *y - style.leading() < MARGIN {
                pages.push(Vec::new());
                *y = top;
            }
            *y -= style.leading();
            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine { style, y: *y, text });
            }
        };

        for line in wrap(&document.title, self.columns_for(Style::Title)) {
            place(Style::Title, line, &mut pages, &mut y);
        }
        y -= PARAGRAPH_GAP;

        for section in &document.sections {
            if let Some(heading) = &section.heading {
                y -= PARAGRAPH_GAP;
                for line in wrap(heading, self.columns_for(Style::Heading)) {
                    place(Style::Heading, line, &mut pages, &mut y);
                }
            }
            for paragraph in &section.paragraphs {
                for line in wrap(paragraph, self.columns_for(Style::Body)) {
                    place(Style::Body, line, &mut pages, &mut y);
                }
                y -= PARAGRAPH_GAP;
            }
        }

        pages
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, ReportError> {
        let pages = self.layout(document);
        let mut pdf = PdfWriter::new();

        // Fixed object numbers: 1 catalog, 2 page tree, 3-4 fonts,
        // then a (page, content) pair per page.
        let page_ids: Vec<usize> = (0..pages.len()).map(|i| 5 + 2 * i).collect();

        pdf.object(1, "<< /Type /Catalog /Pages 2 0 R >>");
        let kids = page_ids
            .iter()
            .map(|id| format!("{id} 0 R"))
            .collect::<Vec<_>>()
            .join(" ");
        pdf.object(
            2,
            &format!("<< /Type /Pages /Kids [{kids}] /Count {} >>", pages.len()),
        );
        pdf.object(
            3,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );
        pdf.object(
            4,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
        );

        let total = pages.len();
        for (index, (lines, page_id)) in pages.iter().zip(&page_ids).enumerate() {
            let content_id = page_id + 1;
            pdf.object(
                *page_id,
                &format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {content_id} 0 R >>"
                ),
            );
            let stream = content_stream(lines, index + 1, total);
            pdf.stream(content_id, &stream);
        }

        Ok(pdf.finish(1))
    }
}

fn content_stream(lines: &[PlacedLine], page_number: usize, total: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for line in lines {
        out.extend_from_slice(
            format!(
                "BT /{} {} Tf {MARGIN} {:.2} Td (",
                line.style.font(),
                line.style.size(),
                line.y
            )
            .as_bytes(),
        );
        out.extend(encode_text(&line.text));
        out.extend_from_slice(b") Tj ET\n");
    }
    let footer = format!("Page {page_number} of {total}");
    out.extend_from_slice(format!("BT /F1 9 Tf {MARGIN} {FOOTER_Y} Td (").as_bytes());
    out.extend(encode_text(&footer));
    out.extend_from_slice(b") Tj ET\n");
    out
}

/// Escape a string for a PDF literal and map it onto WinAnsi bytes.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            ' '..='~' => out.push(ch as u8),
            '\u{2018}' | '\u{2019}' => out.push(b'\''),
            '\u{201C}' | '\u{201D}' => out.push(b'"'),
            '\u{2013}' | '\u{2014}' => out.push(b'-'),
            '\u{00A0}'..='\u{00FF}' => out.push(ch as u32 as u8),
            '\t' => out.push(b' '),
            c if c.is_control() => {}
            _ => out.push(b'?'),
        }
    }
    out
}

/// Greedy word wrap. Hard line breaks in `text` are kept; words longer than
/// `width` are split. Runs of whitespace between words become one space and
/// lines that hold no words are skipped.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut current = String::new();
        for word in raw.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if current.is_empty() {
                word.len()
            } else {
                current.chars().count() + 1 + word.len()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.extend(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Serializes numbered objects and tracks their byte offsets for the xref table.
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, id: usize, body: &str) {
        self.offsets.push((id, self.buf.len()));
        self.buf
            .extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
    }

    fn stream(&mut self, id: usize, data: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        self.buf.extend_from_slice(
            format!("{id} 0 obj\n<< /Length {} >>\nstream\n", data.len()).as_bytes(),
        );
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        self.offsets.sort_by_key(|(id, _)| *id);
        let size = self.offsets.len() + 1;
        let xref_at = self.buf.len();

        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for (_, offset) in &self.offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {size} /Root {root} 0 R >>\nstartxref\n{xref_at}\n%%EOF\n"
        ));
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}
