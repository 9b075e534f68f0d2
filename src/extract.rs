// Text extraction from resume files.
//
// Contract: a document and its format tag go in, plain text comes out, and
// any decoding failure comes out as an empty string instead of an error.
// Extraction failure disqualifies one document; the caller decides what to
// do with the empty result (drop the document and record a warning).

use anyhow::Result;
use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use tracing::debug;

use crate::document::{Document, DocumentFormat};

/// Extract plain text from a document according to its format tag.
///
/// Returns an empty string for unknown formats and for any decode failure.
pub fn extract_text(doc: &Document) -> String {
    let result = match doc.format {
        DocumentFormat::Pdf => extract_pdf(&doc.bytes),
        DocumentFormat::Docx => extract_docx(&doc.bytes),
        DocumentFormat::Txt => extract_txt(&doc.bytes),
        DocumentFormat::Unknown => Ok(String::new()),
    };

    match result {
        Ok(text) => normalize_text(&text),
        Err(e) => {
            debug!(name = %doc.name, format = doc.format.as_str(), error = %e, "Extraction failed");
            String::new()
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| anyhow::anyhow!("pdf decode: {e}"))
}

fn extract_txt(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes)?;
    Ok(text.to_string())
}

fn extract_docx(bytes: &[u8]) -> Result<String> {
    let package = read_docx(bytes).map_err(|e| anyhow::anyhow!("docx decode: {e}"))?;
    let mut segments = Vec::new();
    for child in &package.document.children {
        collect_document_child(child, &mut segments);
    }
    Ok(segments.join("\n"))
}

fn collect_document_child(child: &DocumentChild, segments: &mut Vec<String>) {
    match child {
        DocumentChild::Paragraph(paragraph) => {
            if let Some(text) = paragraph_text(paragraph.as_ref()) {
                segments.push(text);
            }
        }
        DocumentChild::Table(table) => collect_table(table.as_ref(), segments),
        _ => {}
    }
}

fn paragraph_text(paragraph: &Paragraph) -> Option<String> {
    let mut buffer = String::new();
    for child in &paragraph.children {
        append_paragraph_child(child, &mut buffer);
    }
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn append_paragraph_child(child: &ParagraphChild, buffer: &mut String) {
    match child {
        ParagraphChild::Run(run) => {
            for rc in &run.children {
                match rc {
                    RunChild::Text(text) => buffer.push_str(&text.text),
                    RunChild::Tab(_) => buffer.push(' '),
                    RunChild::Break(_) => buffer.push('\n'),
                    _ => {}
                }
            }
        }
        ParagraphChild::Hyperlink(hyperlink) => {
            for inner in &hyperlink.children {
                append_paragraph_child(inner, buffer);
            }
        }
        _ => {}
    }
}

fn collect_table(table: &Table, segments: &mut Vec<String>) {
    for row in &table.rows {
        let row = match row {
            TableChild::TableRow(row) => row,
        };
        for cell in &row.cells {
            let cell = match cell {
                TableRowChild::TableCell(cell) => cell,
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        if let Some(text) = paragraph_text(paragraph) {
                            segments.push(text);
                        }
                    }
                    TableCellContent::Table(inner) => collect_table(inner, segments),
                    _ => {}
                }
            }
        }
    }
}

/// Normalize line endings and strip control noise from extracted text.
fn normalize_text(text: &str) -> String {
    let cleaned = text
        .replace('\u{0000}', "")
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    cleaned
        .trim_start_matches('\u{FEFF}')
        .trim()
        .to_string()
}
