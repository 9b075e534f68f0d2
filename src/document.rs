// Document loading — raw bytes plus a format tag inferred from the
// file-name suffix.
//
// A Document is created when a file is read, consumed once by extraction,
// and discarded with the run. There is no shared upload directory: each run
// owns its documents in memory, so concurrent runs cannot collide.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// The closed set of formats the extractor understands.
///
/// Anything else gets `Unknown`, which extracts to empty text rather than
/// erroring — an unrecognized suffix disqualifies one document, not the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
    Unknown,
}

impl DocumentFormat {
    /// Infer the format from a file name's suffix, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if lower.ends_with(".docx") {
            DocumentFormat::Docx
        } else if lower.ends_with(".txt") {
            DocumentFormat::Txt
        } else {
            DocumentFormat::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
            DocumentFormat::Unknown => "unknown",
        }
    }
}

/// A raw resume document awaiting extraction.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name — the file name without its directory path.
    pub name: String,
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl Document {
    /// Build a document from in-memory bytes, inferring the format tag.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let format = DocumentFormat::from_name(&name);
        Self {
            name,
            bytes,
            format,
        }
    }

    /// Read a document from disk, refusing files above `max_bytes`.
    ///
    /// A refused or unreadable file is the caller's cue to warn and skip —
    /// the same non-fatal path as a corrupt file.
    pub fn load(path: &Path, max_bytes: u64) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());

        let meta = fs::metadata(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if meta.len() > max_bytes {
            anyhow::bail!(
                "{} is {} bytes, above the {} byte limit",
                path.display(),
                meta.len(),
                max_bytes
            );
        }

        let bytes = fs::read(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Ok(Self::from_bytes(name, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_suffix() {
        assert_eq!(DocumentFormat::from_name("resume.pdf"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_name("Resume.DOCX"), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_name("notes.txt"), DocumentFormat::Txt);
        assert_eq!(DocumentFormat::from_name("photo.png"), DocumentFormat::Unknown);
        assert_eq!(DocumentFormat::from_name("no_extension"), DocumentFormat::Unknown);
    }

    #[test]
    fn test_from_bytes_tags_format() {
        let doc = Document::from_bytes("cv.txt", b"hello".to_vec());
        assert_eq!(doc.format, DocumentFormat::Txt);
        assert_eq!(doc.name, "cv.txt");
    }
}
