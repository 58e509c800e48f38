pub mod digest;
pub mod layout;
pub mod pdf;
pub mod structured;
pub mod table;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::model::TrialRecord;

static UNSAFE_FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").unwrap());

pub const ATTACHMENT_PREFIX: &str = "ensayos";
const FALLBACK_FILENAME_STEM: &str = "consulta";

/// Output representation of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Structured,
    TextDigest,
    TabularExport,
    PaginatedDocument,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Structured => "json",
            Format::TextDigest => "text",
            Format::TabularExport => "csv",
            Format::PaginatedDocument => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Format::Structured => "application/json",
            Format::TextDigest => "text/plain; charset=utf-8",
            Format::TabularExport => "text/csv",
            Format::PaginatedDocument => "application/pdf",
        }
    }

    /// Render the filtered records for this format.
    pub fn render(self, records: &[TrialRecord], ctx: &RenderContext) -> Result<Rendered> {
        let body = match self {
            Format::Structured => structured::render_listing(records)?,
            Format::TextDigest => digest::render(records, ctx).into_bytes(),
            Format::TabularExport => table::render(records)?,
            Format::PaginatedDocument => pdf::render(records, ctx)?,
        };
        let disposition = match self {
            Format::Structured | Format::TextDigest => Disposition::Inline,
            Format::TabularExport | Format::PaginatedDocument => Disposition::Attachment {
                filename: attachment_filename(ATTACHMENT_PREFIX, &ctx.molecule, self.name()),
            },
        };
        Ok(Rendered {
            content_type: self.content_type(),
            body,
            disposition,
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "json" => Ok(Format::Structured),
            "text" | "texto" | "txt" => Ok(Format::TextDigest),
            "csv" => Ok(Format::TabularExport),
            "pdf" => Ok(Format::PaginatedDocument),
            other => Err(format!(
                "unknown format '{}' (expected json, text, csv or pdf)",
                other
            )),
        }
    }
}

/// Query context shown in headers of the human-facing formats.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub molecule: String,
    pub pathology: String,
    pub criteria: FilterCriteria,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment { filename: String },
}

#[derive(Debug, Clone)]
pub struct Rendered {
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub disposition: Disposition,
}

/// `{prefix}_{stem}.{ext}`, with every run of characters outside
/// `[A-Za-z0-9_-]` in the stem replaced by `_`.
pub fn attachment_filename(prefix: &str, stem: &str, ext: &str) -> String {
    let cleaned = UNSAFE_FILENAME_RE.replace_all(stem.trim(), "_");
    let cleaned = cleaned.trim_matches('_');
    let stem = if cleaned.is_empty() {
        FALLBACK_FILENAME_STEM
    } else {
        cleaned
    };
    format!("{}_{}.{}", prefix, stem, ext)
}

// ── Tests ──
