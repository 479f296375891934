//! Re-join a parsed document into text, fields separated by commas and rows
//! by newlines. Field values are written as resolved; no quoting is
//! reintroduced.

use crate::formatting::*;
use crate::language::*;

pub fn format_document(document: &Document) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for row in &document.rows {
        output.format_row(row);
    }

    output.fragments
}

/// Format the document and apply the renderer's styling to each fragment.
pub fn render(document: &Document, renderer: &impl Render) -> String {
    format_document(document)
        .iter()
        .map(|(syntax, content)| renderer.style(*syntax, content))
        .collect()
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn format_row(&mut self, row: &Row) {
        for (i, field) in row
            .fields
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Separator, ",");
            }
            self.append(Syntax::Field, field.as_str());
        }
        self.append(Syntax::Newline, "\n");
    }
}
