//! Minimal PDF 1.4 writer for text-only reports.
//!
//! Output uses the standard Helvetica faces, so no fonts are embedded. The
//! writer is deterministic: the same input always yields the same bytes.

use std::fmt::Write as _;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone)]
struct TextRun {
    x: f32,
    y: f32,
    size: f32,
    font: Font,
    text: String,
}

#[derive(Debug)]
pub struct PdfWriter {
    pages: Vec<Vec<TextRun>>,
    cursor: f32,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            cursor: PAGE_HEIGHT - MARGIN,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn text(&mut self, font: Font, size: f32, text: &str) {
        let y = self.advance(size);
        self.push(MARGIN, y, size, font, text);
    }

    /// One table row; `columns` are x offsets from the left margin.
    pub fn row(&mut self, font: Font, size: f32, columns: &[f32], cells: &[&str]) {
        let y = self.advance(size);
        for (offset, cell) in columns.iter().zip(cells) {
            self.push(MARGIN + offset, y, size, font, cell);
        }
    }

    pub fn gap(&mut self, height: f32) {
        self.cursor -= height;
    }

    pub fn finish(self) -> Vec<u8> {
        let page_count = self.pages.len();
        let mut out = Vec::new();
        let mut offsets = Vec::new();

        out.extend_from_slice(b"%PDF-1.4\n");

        let kids = (0..page_count)
            .map(|index| format!("{} 0 R", page_object_id(index)))
            .collect::<Vec<_>>()
            .join(" ");

        write_object(&mut out, &mut offsets, "<< /Type /Catalog /Pages 2 0 R >>");
        write_object(
            &mut out,
            &mut offsets,
            &format!("<< /Type /Pages /Kids [{kids}] /Count {page_count} >>"),
        );
        write_object(
            &mut out,
            &mut offsets,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );
        write_object(
            &mut out,
            &mut offsets,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
        );

        for (index, runs) in self.pages.iter().enumerate() {
            let content = content_stream(runs);
            write_object(
                &mut out,
                &mut offsets,
                &format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                    page_object_id(index) + 1
                ),
            );
            write_object(
                &mut out,
                &mut offsets,
                &format!("<< /Length {} >>\nstream\n{content}endstream", content.len()),
            );
        }

        let xref_offset = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
        for offset in &offsets {
            let _ = writeln!(xref, "{offset:010} 00000 n ");
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            offsets.len() + 1
        );
        out.extend_from_slice(xref.as_bytes());
        out
    }

    fn advance(&mut self, size: f32) -> f32 {
        let line_height = size * 1.4;
        if self.cursor - line_height < MARGIN {
            self.pages.push(Vec::new());
            self.cursor = PAGE_HEIGHT - MARGIN;
        }
        self.cursor -= line_height;
        self.cursor
    }

    fn push(&mut self, x: f32, y: f32, size: f32, font: Font, text: &str) {
        if let Some(page) = self.pages.last_mut() {
            page.push(TextRun {
                x,
                y,
                size,
                font,
                text: text.to_string(),
            });
        }
    }
}

/// Pages start at object 5; each page is followed by its content stream.
fn page_object_id(index: usize) -> usize {
    5 + index * 2
}

fn write_object(out: &mut Vec<u8>, offsets: &mut Vec<usize>, body: &str) {
    offsets.push(out.len());
    let id = offsets.len();
    out.extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
}

fn content_stream(runs: &[TextRun]) -> String {
    let mut stream = String::new();
    for run in runs {
        let _ = writeln!(
            stream,
            "BT /{} {} Tf {:.2} {:.2} Td ({}) Tj ET",
            run.font.resource(),
            run.size,
            run.x,
            run.y,
            escape_text(&run.text)
        );
    }
    stream
}

/// Escapes string delimiters and replaces characters outside printable ASCII.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            ' '..='~' => escaped.push(ch),
            _ => escaped.push('?'),
        }
    }
    escaped
}
