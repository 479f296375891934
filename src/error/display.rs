use std::{fmt, path::Path};

use crate::parsing::ParsingError;

/// A parsing failure together with the source it occurred in, so that it can
/// be located by line and column and reported against a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvError<'i> {
    pub error: ParsingError,
    pub filename: &'i Path,
    pub source: &'i str,
}

impl<'i> CsvError<'i> {
    pub fn new(error: ParsingError, filename: &'i Path, source: &'i str) -> CsvError<'i> {
        CsvError {
            error,
            filename,
            source,
        }
    }

    pub fn offset(&self) -> usize {
        self.error
            .offset()
    }

    /// Line number of the failure, counting from 1.
    pub fn line(&self) -> usize {
        calculate_line_number(self.source, self.offset()) + 1
    }

    /// Column of the failure in characters, counting from 1.
    pub fn column(&self) -> usize {
        calculate_column_number(self.source, self.offset()) + 1
    }

    /// The text of the line the failure occurred on, without its newline.
    pub fn code(&self) -> &'i str {
        let i = calculate_line_number(self.source, self.offset());
        self.source
            .split('\n')
            .nth(i)
            .map(|line| line.trim_end_matches('\r'))
            .unwrap_or("")
    }

    pub fn problem(&self) -> String {
        self.error
            .message()
    }

    pub fn expected(&self) -> &'static str {
        self.error
            .expected()
    }

    pub fn details(&self) -> String {
        self.error
            .details()
    }
}

// Concise version for internal use
impl<'i> fmt::Display for CsvError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {}:{}:{} {}, expected {}",
            self.filename
                .to_string_lossy(),
            self.line(),
            self.column(),
            self.problem(),
            self.expected()
        )
    }
}

impl<'i> std::error::Error for CsvError<'i> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
