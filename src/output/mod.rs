//! Output generation for the csvdialect command line program

use csvdialect::formatting::{self, Render};
use csvdialect::language::Document;
use tracing::debug;

/// The forms a parsed document can be written out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Native,
    Json,
}

impl Output {
    pub fn from_name(name: &str) -> Option<Output> {
        match name {
            "native" => Some(Output::Native),
            "json" => Some(Output::Json),
            _ => None,
        }
    }
}

/// Fields re-joined with commas, one row per line.
pub fn via_text(document: &Document, renderer: &impl Render) -> String {
    debug!("Rendering {} rows as text", document.len());
    formatting::render(document, renderer)
}

/// Rows as a JSON array of arrays of strings.
pub fn via_json(document: &Document) -> Result<String, serde_json::Error> {
    debug!("Rendering {} rows as JSON", document.len());
    serde_json::to_string_pretty(document)
}
