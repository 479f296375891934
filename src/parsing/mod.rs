//! parser for the CSV dialect

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::CsvError;
use crate::language::{Document, LoadingError};

pub mod escapes;
pub mod parser;

pub use parser::ParsingError;

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Document created by parse() below can be reported
/// against the same source text. A filename of "-" reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                std::io::ErrorKind::InvalidData => Err(LoadingError {
                    problem: "Not valid UTF-8".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Document object, or return the error encountered along
/// with enough context to report it against the named source.
pub fn parse<'i>(filename: &'i Path, content: &'i str) -> Result<Document, CsvError<'i>> {
    match parser::parse_document(content) {
        Ok(document) => {
            debug!(
                "Found {} row{}",
                document.len(),
                if document.len() == 1 { "" } else { "s" }
            );
            Ok(document)
        }
        Err(error) => {
            debug!(?error);
            Err(CsvError::new(error, filename, content))
        }
    }
}
